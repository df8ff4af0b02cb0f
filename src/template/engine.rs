use std::path::Path;
use std::sync::{Arc, RwLock};
use tera::Tera;

use super::{RenderContext, TemplateRenderer, filters};
use crate::error::{DatatableError, Result};
use crate::view::Templates;

pub const BASE_TEMPLATE: &str = "datatable.html";
pub const HTML_TEMPLATE: &str = "datatable_html.html";
pub const JS_TEMPLATE: &str = "datatable_js.html";

const BUNDLED: [(&str, &str); 3] = [
    (BASE_TEMPLATE, include_str!("../../templates/datatable.html")),
    (HTML_TEMPLATE, include_str!("../../templates/datatable_html.html")),
    (JS_TEMPLATE, include_str!("../../templates/datatable_js.html")),
];

/// Tera-backed renderer (Arc<RwLock> so one instance can serve many views)
#[derive(Debug, Clone)]
pub struct TeraRenderer {
    tera: Arc<RwLock<Tera>>,
}

impl TeraRenderer {
    /// Renderer with the bundled datatable templates registered
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.register_filter("truncate_text", filters::truncate_text);
        tera.register_filter("json_script", filters::json_script);

        tera.add_raw_templates(BUNDLED.to_vec())
            .map_err(|e| DatatableError::Render(format!("Failed to load bundled templates: {}", e)))?;

        Ok(Self {
            tera: Arc::new(RwLock::new(tera)),
        })
    }

    /// Identifiers of the bundled templates, usable as layout defaults
    pub fn bundled_templates() -> Templates {
        Templates::new(BASE_TEMPLATE, HTML_TEMPLATE, JS_TEMPLATE)
    }

    /// Register a template under `name`, replacing any previous one
    pub fn add_template(&self, name: &str, content: &str) -> Result<()> {
        let mut tera = self.tera.write().map_err(|e| {
            DatatableError::Render(format!("Failed to acquire template lock: {}", e))
        })?;

        tera.add_raw_template(name, content)
            .map_err(|e| DatatableError::Render(format!("Invalid template '{}': {}", name, e)))
    }

    /// Register every file in `dir`, named by file name. Returns how many were added.
    pub fn load_dir<P: AsRef<Path>>(&self, dir: P) -> Result<usize> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                files.push((path.clone(), Some(name.to_string())));
            }
        }

        let count = files.len();
        let mut tera = self.tera.write().map_err(|e| {
            DatatableError::Render(format!("Failed to acquire template lock: {}", e))
        })?;

        tera.add_template_files(files).map_err(|e| {
            DatatableError::Render(format!(
                "Failed to load templates from {:?}: {}",
                dir.as_ref(),
                e
            ))
        })?;

        tracing::debug!(count, dir = ?dir.as_ref(), "loaded templates");
        Ok(count)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera
            .read()
            .map(|tera| tera.get_template_names().any(|n| n == name))
            .unwrap_or(false)
    }
}

impl TemplateRenderer for TeraRenderer {
    fn render(&self, template: &str, context: &RenderContext) -> Result<String> {
        let tera_context = context
            .to_tera_context()
            .map_err(|e| DatatableError::Render(format!("Invalid render context: {}", e)))?;

        let tera = self.tera.read().map_err(|e| {
            DatatableError::Render(format!("Failed to acquire template lock: {}", e))
        })?;

        tera.render(template, &tera_context).map_err(|e| {
            DatatableError::Render(format!("Template '{}' failed to render: {:?}", template, e))
        })
    }
}
