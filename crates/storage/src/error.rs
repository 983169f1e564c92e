use std::error;
use std::fmt;
use std::sync::Arc;

/// The distinguished error kinds a [`crate::Storage`]/[`crate::FeedReader`]/
/// [`crate::FeedWriter`] implementation, or the query engine built on top
/// of it, may return.
#[derive(Debug, Clone)]
pub enum CoreError {
    /// Malformed CSV/zip/protobuf, or a structurally invalid row. Fatal
    /// to the ingest in progress.
    Parse(String),

    /// Referential integrity violation: unknown `route_id`, duplicate
    /// `trip_id`, a missing required field, an invalid enum value, an
    /// invalid hex color, or an invalid `location_type` relationship.
    /// Fatal to ingest.
    Validation(String),

    /// An unknown feed hash, an unknown stop, or no active feed for the
    /// requested date.
    NotFound(String),

    /// Storage read/write failure, propagated unchanged from the
    /// backend.
    Backend(Arc<dyn error::Error + Send + Sync>),

    /// A realtime feed with an unsupported version or incrementality,
    /// or a schedule-relationship the core does not implement.
    Unsupported(String),

    /// The operation was aborted via a cancellation token.
    Cancelled,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoreError::Parse(message) => write!(f, "parse error: {message}"),
            CoreError::Validation(message) => write!(f, "validation error: {message}"),
            CoreError::NotFound(message) => write!(f, "not found: {message}"),
            CoreError::Backend(error) => write!(f, "storage backend error: {error}"),
            CoreError::Unsupported(message) => write!(f, "unsupported: {message}"),
            CoreError::Cancelled => write!(f, "operation cancelled"),
        }
    }
}

impl error::Error for CoreError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            CoreError::Backend(error) => Some(error.as_ref()),
            _ => None,
        }
    }
}

impl CoreError {
    pub fn backend<E>(error: E) -> Self
    where
        E: error::Error + Send + Sync + 'static,
    {
        CoreError::Backend(Arc::new(error))
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_a_readable_message_per_kind() {
        assert_eq!(
            CoreError::NotFound("stop s1".to_owned()).to_string(),
            "not found: stop s1"
        );
        assert_eq!(CoreError::Cancelled.to_string(), "operation cancelled");
    }
}
