use diagram::DiagramError;
use posture_core::catalog::CatalogError;
use posture_core::error::{ErrorCode, PostureError};
use posture_core::model::NodeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkbenchError {
    #[error("unknown component type: {0}")]
    UnknownComponent(String),
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
    #[error("diagram error: {0}")]
    Diagram(#[from] DiagramError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<CatalogError> for WorkbenchError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownComponent(id) => WorkbenchError::UnknownComponent(id),
        }
    }
}

impl PostureError for WorkbenchError {
    fn error_code(&self) -> ErrorCode {
        match self {
            WorkbenchError::UnknownComponent(_) | WorkbenchError::UnknownTemplate(_) => {
                ErrorCode::InvalidArgument
            }
            WorkbenchError::NodeNotFound(_) => ErrorCode::NotFound,
            WorkbenchError::Diagram(err) => err.error_code(),
            WorkbenchError::Io(_) | WorkbenchError::Serialization(_) => ErrorCode::Internal,
        }
    }
}
