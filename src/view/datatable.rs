use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use super::{Ajax, Features, Options, Templates, truncate};
use crate::column::ColumnBuilder;
use crate::error::{DatatableError, Result};
use crate::template::{RenderContext, TemplateRenderer};

/// Per-row transformation applied to server-side results before they are sent back
pub type LineFormatter = Arc<dyn Fn(&mut Value) + Send + Sync>;

/// Which fragment of the table to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderKind {
    /// Table markup followed by its initializer script
    #[default]
    All,
    Html,
    Js,
}

impl From<&str> for RenderKind {
    /// "html" and "js" select their fragment, anything else renders everything.
    fn from(kind: &str) -> Self {
        match kind {
            "html" => RenderKind::Html,
            "js" => RenderKind::Js,
            _ => RenderKind::All,
        }
    }
}

impl fmt::Display for RenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RenderKind::All => "all",
            RenderKind::Html => "html",
            RenderKind::Js => "js",
        };
        f.write_str(name)
    }
}

/// The collaborators a table definition configures.
#[derive(Debug, Clone, Default)]
pub struct ViewParts {
    pub features: Features,
    pub options: Options,
    pub ajax: Ajax,
    pub columns: ColumnBuilder,
}

/// A concrete table: its name plus the hook that declares features, columns and ajax settings.
pub trait DatatableDefinition {
    /// Logical name, used as the table's DOM id
    fn name(&self) -> &str;

    /// Called once from [`DatatableView::new`], after all parts hold their defaults
    fn configure(&self, parts: &mut ViewParts) -> Result<()>;

    /// `None` means no formatter is configured
    fn line_formatter(&self) -> Option<LineFormatter> {
        None
    }
}

/// Aggregates the configuration of one table and renders it through a [`TemplateRenderer`].
///
/// A view is built per request and never shared; the renderer it holds may be.
pub struct DatatableView<D: DatatableDefinition> {
    definition: D,
    renderer: Arc<dyn TemplateRenderer>,
    parts: ViewParts,
    data: Option<Value>,
    templates: Templates,
}

impl<D: DatatableDefinition> DatatableView<D> {
    /// Build a view from `layout_options`, which must carry a complete `templates` map.
    ///
    /// # Errors
    /// Returns [`DatatableError::Configuration`] if the templates map is absent or
    /// incomplete, or whatever the definition's `configure` hook returns.
    pub fn new(
        definition: D,
        renderer: Arc<dyn TemplateRenderer>,
        layout_options: &Value,
    ) -> Result<Self> {
        let templates = Templates::from_layout_options(layout_options).inspect_err(|e| {
            tracing::warn!(table = definition.name(), error = %e, "invalid layout options");
        })?;

        Self::with_templates(definition, renderer, templates)
    }

    pub fn with_templates(
        definition: D,
        renderer: Arc<dyn TemplateRenderer>,
        templates: Templates,
    ) -> Result<Self> {
        let mut parts = ViewParts::default();
        definition.configure(&mut parts)?;

        tracing::debug!(
            table = definition.name(),
            columns = parts.columns.len(),
            server_side = parts.features.server_side,
            "datatable view built"
        );

        Ok(Self {
            definition,
            renderer,
            parts,
            data: None,
            templates,
        })
    }

    pub fn render(&self, kind: RenderKind) -> Result<String> {
        let context = self.context()?;
        let template = self.template_for(kind);

        tracing::debug!(table = self.name(), %kind, template, "rendering datatable");
        self.renderer.render(template, &context)
    }

    /// Assemble the template context from the current state.
    ///
    /// # Errors
    /// Server-side mode needs an ajax url; client-side mode needs display data.
    pub fn context(&self) -> Result<RenderContext> {
        let view_data = if self.parts.features.server_side {
            if !self.parts.ajax.is_configured() {
                tracing::warn!(table = self.name(), "server-side table without ajax url");
                return Err(DatatableError::configuration(
                    "ajax url required for server-side mode",
                ));
            }
            None
        } else {
            match self.data() {
                Some(data) => Some(data.clone()),
                None => {
                    tracing::warn!(table = self.name(), "client-side table without data");
                    return Err(DatatableError::configuration(
                        "display data required for client-side mode",
                    ));
                }
            }
        };

        let columns = &self.parts.columns;
        Ok(RenderContext {
            view_features: self.parts.features.clone(),
            view_options: self.parts.options.clone(),
            view_columns: columns.columns().to_vec(),
            view_ajax: self.parts.ajax.clone(),
            view_multiselect: columns.is_multiselect(),
            view_multiselect_column: columns.multiselect_column().cloned(),
            view_table_id: self.name().to_string(),
            view_data,
        })
    }

    pub fn template_for(&self, kind: RenderKind) -> &str {
        match kind {
            RenderKind::Html => self.templates.html(),
            RenderKind::Js => self.templates.js(),
            RenderKind::All => self.templates.base(),
        }
    }

    pub fn name(&self) -> &str {
        self.definition.name()
    }

    pub fn definition(&self) -> &D {
        &self.definition
    }

    pub fn features(&self) -> &Features {
        &self.parts.features
    }

    pub fn features_mut(&mut self) -> &mut Features {
        &mut self.parts.features
    }

    pub fn options(&self) -> &Options {
        &self.parts.options
    }

    pub fn ajax(&self) -> &Ajax {
        &self.parts.ajax
    }

    pub fn ajax_mut(&mut self) -> &mut Ajax {
        &mut self.parts.ajax
    }

    pub fn column_builder(&self) -> &ColumnBuilder {
        &self.parts.columns
    }

    pub fn line_formatter(&self) -> Option<LineFormatter> {
        self.definition.line_formatter()
    }

    /// Run the line formatter over each row. Returns false when none is configured.
    pub fn format_rows(&self, rows: &mut [Value]) -> bool {
        match self.line_formatter() {
            Some(formatter) => {
                rows.iter_mut().for_each(|row| formatter(row));
                true
            }
            None => false,
        }
    }

    pub fn set_data(&mut self, data: Value) -> &mut Self {
        self.data = Some(data);
        self
    }

    /// Display data, `None` until set. A JSON `null` counts as unset.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref().filter(|data| !data.is_null())
    }

    /// Replace all three template identifiers at once
    pub fn set_templates(&mut self, templates: Templates) -> &mut Self {
        self.templates = templates;
        self
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    pub fn truncate(&self, text: &str, max_chars: usize) -> String {
        truncate(text, max_chars)
    }
}
