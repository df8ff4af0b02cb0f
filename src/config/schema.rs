use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::column::Column;
use crate::error::Result;
use crate::view::{Ajax, DatatableDefinition, Features, Options, Templates, ViewParts};

/// A table declared in YAML instead of code.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TableDefinition {
    pub version: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub templates: Templates,
    #[serde(default)]
    pub features: Features,
    #[serde(default)]
    pub options: Options,
    #[serde(default)]
    pub ajax: Ajax,
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Inline display data for client-side tables
    #[serde(default)]
    pub data: Option<Value>,
}

impl TableDefinition {
    /// Layout options map in the shape `DatatableView::new` expects
    pub fn layout_options(&self) -> Result<Value> {
        Ok(serde_json::json!({ "templates": serde_json::to_value(&self.templates)? }))
    }
}

impl DatatableDefinition for TableDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn configure(&self, parts: &mut ViewParts) -> Result<()> {
        parts.features = self.features.clone();
        parts.options = self.options.clone();
        parts.ajax = self.ajax.clone();
        for column in &self.columns {
            parts.columns.add(column.clone())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::template::TeraRenderer;
    use crate::view::{DatatableView, RenderKind};
    use std::sync::Arc;

    const CLIENT_SIDE: &str = r#"
version: v1
name: tags
templates:
  base: datatable.html
  html: datatable_html.html
  js: datatable_js.html
features:
  server_side: false
columns:
  - data: name
    title: Name
data:
  - name: rust
  - name: tera
"#;

    #[test]
    fn test_layout_options_shape() {
        let table = ConfigLoader::load_from_string(CLIENT_SIDE).unwrap();
        let layout = table.layout_options().unwrap();
        assert_eq!(layout["templates"]["html"], "datatable_html.html");
    }

    #[test]
    fn test_definition_drives_view() {
        let table = ConfigLoader::load_from_string(CLIENT_SIDE).unwrap();
        let layout = table.layout_options().unwrap();
        let rows = table.data.clone().unwrap();

        let renderer = Arc::new(TeraRenderer::new().unwrap());
        let mut view = DatatableView::new(table, renderer, &layout).unwrap();
        assert!(!view.features().server_side);
        assert_eq!(view.column_builder().len(), 1);

        view.set_data(rows);
        let js = view.render(RenderKind::Js).unwrap();
        assert!(js.contains(r#"data: [{"name":"rust"},{"name":"tera"}]"#));
        assert!(js.contains(r##"var selector = "#" + "tags";"##));
    }
}
