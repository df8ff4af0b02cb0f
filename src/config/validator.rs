use anyhow::{Context, Result, anyhow};

use super::schema::TableDefinition;
use crate::column::Column;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a table definition. `external_data` tells the validator that
    /// display data will be supplied from outside the definition.
    pub fn validate(table: &TableDefinition, external_data: bool) -> Result<()> {
        if table.version != "v1" {
            return Err(anyhow!(
                "Unsupported table definition version: {}. Expected: v1",
                table.version
            ));
        }

        if table.name.trim().is_empty() {
            return Err(anyhow!("Table name cannot be empty"));
        }

        for (key, id) in [
            ("base", table.templates.base()),
            ("html", table.templates.html()),
            ("js", table.templates.js()),
        ] {
            if id.trim().is_empty() {
                return Err(anyhow!("Template '{}' cannot be empty", key));
            }
        }

        if table.features.server_side {
            if !table.ajax.is_configured() {
                return Err(anyhow!("Server-side tables must set 'ajax.url'"));
            }
        } else if table.data.is_none() && !external_data {
            return Err(anyhow!("Client-side tables need 'data' or an external data file"));
        }

        Self::validate_columns(&table.columns).context("Invalid columns")?;

        Ok(())
    }

    fn validate_columns(columns: &[Column]) -> Result<()> {
        let multiselect = columns.iter().filter(|c| c.is_multiselect()).count();
        if multiselect > 1 {
            return Err(anyhow!(
                "Only one multiselect column allowed, found {}",
                multiselect
            ));
        }

        for (idx, column) in columns.iter().enumerate() {
            if let Some(0) = column.truncate {
                return Err(anyhow!("Column at index {} has truncate: 0", idx));
            }
        }

        Ok(())
    }
}
