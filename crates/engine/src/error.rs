use bytes::Bytes;
use thiserror::Error;

/// Structured body processing failures.
///
/// These are never returned to callers. Their display text becomes the body
/// placeholder so the failure stays visible in the log without the original
/// content.
#[derive(Debug, Error)]
pub(crate) enum BodyError {
    #[error("JSON decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("JSON encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

impl BodyError {
    /// The message as a JSON string literal.
    pub(crate) fn placeholder(&self) -> Bytes {
        Bytes::from(serde_json::Value::String(self.to_string()).to_string())
    }
}
