use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AjaxMethod {
    #[default]
    GET,
    POST,
}

/// Remote data endpoint used in server-side mode.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Ajax {
    /// Empty until a table configures it
    pub url: String,
    #[serde(rename = "type")]
    pub method: AjaxMethod,
    /// Number of pages to prefetch per request, 0 disables pipelining
    pub pipeline: u32,
}

impl Ajax {
    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = url.into();
        self
    }

    pub fn set_method(&mut self, method: AjaxMethod) -> &mut Self {
        self.method = method;
        self
    }

    pub fn set_pipeline(&mut self, pages: u32) -> &mut Self {
        self.pipeline = pages;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconfigured() {
        let ajax = Ajax::default();
        assert!(!ajax.is_configured());
        assert_eq!(ajax.method, AjaxMethod::GET);
    }

    #[test]
    fn test_method_uses_type_key() {
        let ajax: Ajax = serde_yaml::from_str("url: /posts/results\ntype: POST").unwrap();
        assert_eq!(ajax.url(), "/posts/results");
        assert_eq!(ajax.method, AjaxMethod::POST);
    }
}
