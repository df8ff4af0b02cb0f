use serde::{Deserialize, Serialize};

/// DataTables feature toggles.
///
/// Defaults follow the DataTables defaults, except `server_side` which is on:
/// a view fetches its rows over ajax unless a table opts into display data.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Features {
    pub auto_width: bool,
    pub defer_render: bool,
    pub info: bool,
    pub jquery_ui: bool,
    pub length_change: bool,
    pub ordering: bool,
    pub paging: bool,
    pub processing: bool,
    pub scroll_x: bool,
    /// CSS height for vertical scrolling, empty disables it
    pub scroll_y: String,
    pub searching: bool,
    pub server_side: bool,
    pub state_save: bool,
    /// Milliseconds to wait before a server-side search request is sent
    pub delay: u32,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            auto_width: true,
            defer_render: false,
            info: true,
            jquery_ui: false,
            length_change: true,
            ordering: true,
            paging: true,
            processing: true,
            scroll_x: false,
            scroll_y: String::new(),
            searching: true,
            server_side: true,
            state_save: false,
            delay: 0,
        }
    }
}

impl Features {
    pub fn set_server_side(&mut self, server_side: bool) -> &mut Self {
        self.server_side = server_side;
        self
    }

    pub fn server_side(&self) -> bool {
        self.server_side
    }
}
