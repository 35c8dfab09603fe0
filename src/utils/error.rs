use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PipelineError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            PipelineError::InvalidArgument { message } => format!("Rejected item: {}", message),
            PipelineError::SerializationError(_) => "Could not serialize the item snapshot".to_string(),
            PipelineError::IoError(e) => format!("Could not write output: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
