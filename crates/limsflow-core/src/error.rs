use thiserror::Error;

#[derive(Debug, Error)]
pub enum LimsError {
    #[error("unknown status '{value}' for entity type {entity}")]
    UnknownStatus { entity: &'static str, value: String },

    #[error("unknown entity type: {0}")]
    UnknownEntityType(String),

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LimsError>;
