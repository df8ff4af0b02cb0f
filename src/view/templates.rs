use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DatatableError, Result};

/// Template identifiers for the three render kinds.
///
/// All three are always present; use [`Templates::builder`] or
/// [`Templates::to_builder`] to produce a modified copy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Templates {
    base: String,
    html: String,
    js: String,
}

impl Templates {
    pub fn new(base: impl Into<String>, html: impl Into<String>, js: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            html: html.into(),
            js: js.into(),
        }
    }

    pub fn builder() -> TemplatesBuilder {
        TemplatesBuilder::default()
    }

    /// Start a builder pre-filled with these identifiers
    pub fn to_builder(&self) -> TemplatesBuilder {
        TemplatesBuilder {
            base: Some(self.base.clone()),
            html: Some(self.html.clone()),
            js: Some(self.js.clone()),
        }
    }

    /// Read the `templates` entry of a layout options map.
    pub fn from_layout_options(layout_options: &Value) -> Result<Self> {
        let templates = layout_options
            .get("templates")
            .ok_or_else(|| DatatableError::configuration("layout options require a 'templates' map"))?;

        let map = templates.as_object().ok_or_else(|| {
            DatatableError::configuration("layout option 'templates' must be a map")
        })?;

        let lookup = |key: &str| -> Result<String> {
            match map.get(key) {
                Some(Value::String(id)) => Ok(id.clone()),
                Some(_) => Err(DatatableError::configuration(format!(
                    "template '{}' must be a string",
                    key
                ))),
                None => Err(DatatableError::configuration(format!(
                    "templates map is missing required key '{}'",
                    key
                ))),
            }
        };

        Ok(Self {
            base: lookup("base")?,
            html: lookup("html")?,
            js: lookup("js")?,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn js(&self) -> &str {
        &self.js
    }
}

#[derive(Debug, Clone, Default)]
pub struct TemplatesBuilder {
    base: Option<String>,
    html: Option<String>,
    js: Option<String>,
}

impl TemplatesBuilder {
    pub fn base(mut self, id: impl Into<String>) -> Self {
        self.base = Some(id.into());
        self
    }

    pub fn html(mut self, id: impl Into<String>) -> Self {
        self.html = Some(id.into());
        self
    }

    pub fn js(mut self, id: impl Into<String>) -> Self {
        self.js = Some(id.into());
        self
    }

    pub fn build(self) -> Result<Templates> {
        let missing: Vec<&str> = [
            ("base", self.base.is_none()),
            ("html", self.html.is_none()),
            ("js", self.js.is_none()),
        ]
        .into_iter()
        .filter_map(|(key, absent)| absent.then_some(key))
        .collect();

        match (self.base, self.html, self.js) {
            (Some(base), Some(html), Some(js)) => Ok(Templates { base, html, js }),
            _ => Err(DatatableError::configuration(format!(
                "templates incomplete, missing: {}",
                missing.join(", ")
            ))),
        }
    }
}
