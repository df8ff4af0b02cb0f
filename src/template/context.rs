use serde::Serialize;
use serde_json::Value;

use crate::column::Column;
use crate::view::{Ajax, Features, Options};

/// Everything a datatable template gets to see.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    pub view_features: Features,
    pub view_options: Options,
    pub view_columns: Vec<Column>,
    pub view_ajax: Ajax,
    pub view_multiselect: bool,
    pub view_multiselect_column: Option<Column>,
    pub view_table_id: String,
    /// Display data, only present in client-side mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_data: Option<Value>,
}

impl RenderContext {
    pub fn to_tera_context(&self) -> std::result::Result<tera::Context, tera::Error> {
        tera::Context::from_serialize(self)
    }
}
