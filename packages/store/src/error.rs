use thiserror::Error;

/// The single error kind crossing the store boundary: a remote operation
/// failed, carrying whatever the backend reported as the cause.
///
/// List, add, replace, and remove failures all surface as this type; callers
/// log it and leave their state untouched.
#[derive(Debug, Error)]
#[error("remote operation failed: {source}")]
pub struct StoreError {
    #[from]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl StoreError {
    /// Wrap a plain message as the failure cause.
    pub fn message(msg: impl Into<String>) -> Self {
        let msg: String = msg.into();
        Self { source: msg.into() }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self {
            source: Box::new(err),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            source: Box::new(err),
        }
    }
}
