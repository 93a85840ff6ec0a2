use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("invalid metadata json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("container has no {0} attribute")]
    MissingAttribute(String),
    #[error("metadata root must be an object or an array of fields")]
    NotAnObject,
}
