use serde::Serialize;

use super::column::Column;
use crate::error::{DatatableError, Result};

/// Ordered column registry for a table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ColumnBuilder {
    columns: Vec<Column>,
    multiselect: bool,
    multiselect_column: Option<Column>,
}

impl ColumnBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. A table holds at most one multiselect column.
    pub fn add(&mut self, column: Column) -> Result<&mut Self> {
        if column.is_multiselect() {
            if self.multiselect {
                return Err(DatatableError::configuration(
                    "a table can only have one multiselect column",
                ));
            }
            self.multiselect = true;
            self.multiselect_column = Some(column.clone());
        }

        self.columns.push(column);
        Ok(self)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn is_multiselect(&self) -> bool {
        self.multiselect
    }

    pub fn multiselect_column(&self) -> Option<&Column> {
        self.multiselect_column.as_ref()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
