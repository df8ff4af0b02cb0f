use anyhow::{Context, Result};
use std::path::Path;

use super::schema::TableDefinition;

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<TableDefinition> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read table definition: {:?}", path.as_ref()))?;

        Self::load_from_string(&content)
    }

    pub fn load_from_string(content: &str) -> Result<TableDefinition> {
        let table: TableDefinition =
            serde_yaml::from_str(content).context("Failed to parse YAML table definition")?;

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnType;
    use crate::view::AjaxMethod;

    #[test]
    fn test_load_minimal_definition() {
        let yaml = r#"
version: v1
name: post_datatable
templates:
  base: datatable.html
  html: datatable_html.html
  js: datatable_js.html
ajax:
  url: /posts/results
  type: POST
columns:
  - type: multiselect
  - data: id
    title: Id
  - data: title
    title: Title
    truncate: 20
"#;

        let result = ConfigLoader::load_from_string(yaml);
        assert!(result.is_ok());

        let table = result.unwrap();
        assert_eq!(table.name, "post_datatable");
        assert_eq!(table.templates.js(), "datatable_js.html");
        assert!(table.features.server_side);
        assert_eq!(table.ajax.method, AjaxMethod::POST);
        assert_eq!(table.columns.len(), 3);
        assert_eq!(table.columns[0].column_type, ColumnType::Multiselect);
        assert_eq!(table.columns[2].truncate, Some(20));
        assert!(table.data.is_none());
    }

    #[test]
    fn test_incomplete_templates_fail_to_parse() {
        let yaml = r#"
version: v1
name: broken
templates:
  base: datatable.html
"#;
        let err = ConfigLoader::load_from_string(yaml).unwrap_err();
        assert!(format!("{:#}", err).contains("html"));
    }
}
