use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use datatable_view::{
    DatatableView, RenderKind, TeraRenderer,
    config::{ConfigLoader, ConfigValidator},
};

#[derive(Parser)]
#[command(name = "datatable-view")]
#[command(about = "Render a datatable defined in YAML to HTML and JavaScript", long_about = None)]
struct Cli {
    /// Path to the YAML table definition
    #[arg(value_name = "TABLE")]
    table: PathBuf,

    /// Fragment to render: all, html or js
    #[arg(short, long, default_value = "all")]
    kind: String,

    /// JSON file with display data for client-side tables
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Directory of extra templates, registered by file name
    #[arg(short, long, value_name = "DIR")]
    templates: Option<PathBuf>,

    /// Validate the definition and exit
    #[arg(long)]
    validate: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let table = match ConfigLoader::load_from_file(&cli.table) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("✗ Failed to load table definition: {}", e);
            eprintln!("\nError details: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = ConfigValidator::validate(&table, cli.data.is_some()) {
        eprintln!("✗ Table definition is invalid: {}", e);
        eprintln!("\nFull error chain:");
        for cause in e.chain() {
            eprintln!("  - {}", cause);
        }
        std::process::exit(1);
    }

    if cli.validate {
        eprintln!("✓ Table definition '{}' is valid", table.name);
        return Ok(());
    }

    let data = match &cli.data {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| color_eyre::eyre::eyre!("Failed to read {:?}: {}", path, e))?;
            Some(serde_json::from_str::<serde_json::Value>(&content)?)
        }
        None => table.data.clone(),
    };

    let renderer = TeraRenderer::new()?;
    if let Some(dir) = &cli.templates {
        renderer.load_dir(dir)?;
    }

    let layout = table.layout_options()?;
    let mut view = DatatableView::new(table, Arc::new(renderer), &layout)?;
    if let Some(data) = data {
        view.set_data(data);
    }

    let output = view.render(RenderKind::from(cli.kind.as_str()))?;
    println!("{}", output);

    Ok(())
}
