use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Table-level rendering options passed through to the DataTables initializer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Options {
    pub dom: String,
    /// Page-length menu entries; `-1` means "all"
    pub length_menu: Vec<i64>,
    pub order_classes: bool,
    /// Initial ordering as (column index, direction) pairs
    pub order: Vec<(usize, SortDirection)>,
    pub order_multi: bool,
    pub page_length: u32,
    pub paging_type: String,
    pub renderer: String,
    pub scroll_collapse: bool,
    pub search_delay: u32,
    pub state_duration: i64,
    pub stripe_classes: Vec<String>,
    /// CSS classes for the `<table>` element
    pub class: String,
    pub individual_filtering: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            dom: "lfrtip".to_string(),
            length_menu: vec![10, 25, 50, 100],
            order_classes: true,
            order: vec![(0, SortDirection::Asc)],
            order_multi: true,
            page_length: 10,
            paging_type: "simple_numbers".to_string(),
            renderer: "bootstrap".to_string(),
            scroll_collapse: false,
            search_delay: 0,
            state_duration: 7200,
            stripe_classes: Vec::new(),
            class: "display".to_string(),
            individual_filtering: false,
        }
    }
}
