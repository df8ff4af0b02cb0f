use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatatableError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl DatatableError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        DatatableError::Configuration(msg.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, DatatableError::Configuration(_))
    }
}

pub type Result<T> = std::result::Result<T, DatatableError>;
