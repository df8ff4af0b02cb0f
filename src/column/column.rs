use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    Column,
    Boolean,
    Datetime,
    Virtual,
    Action,
    Multiselect,
}

/// One table column as handed to the templates.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Column {
    /// Property path of the row value; `None` for virtual, action and multiselect columns
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub column_type: ColumnType,
    #[serde(default = "default_true")]
    pub searchable: bool,
    #[serde(default = "default_true")]
    pub orderable: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    /// Truncate cell text to this many characters
    #[serde(default)]
    pub truncate: Option<usize>,
}

fn default_true() -> bool {
    true
}

impl Column {
    pub fn new(data: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            title: title.into(),
            column_type: ColumnType::Column,
            searchable: true,
            orderable: true,
            visible: true,
            width: None,
            class: None,
            truncate: None,
        }
    }

    /// A checkbox column for selecting multiple rows
    pub fn multiselect() -> Self {
        Self {
            data: None,
            title: String::new(),
            column_type: ColumnType::Multiselect,
            searchable: false,
            orderable: false,
            visible: true,
            width: None,
            class: None,
            truncate: None,
        }
    }

    pub fn with_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = column_type;
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_truncate(mut self, max_chars: usize) -> Self {
        self.truncate = Some(max_chars);
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn orderable(mut self, orderable: bool) -> Self {
        self.orderable = orderable;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn is_multiselect(&self) -> bool {
        self.column_type == ColumnType::Multiselect
    }
}
