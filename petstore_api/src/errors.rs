//! Error types for the API client.

/// Failure raised by a [`Transport`](crate::Transport) when no response was
/// received at all (connection refused, DNS, timeout, malformed URL).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors that can occur when calling the pet store.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The request never produced a response. Displays the transport's
    /// message unchanged.
    #[error("{message}")]
    Transport { message: String },
    /// The service answered with a non-success status. `message` is the
    /// service's `{"message": ...}` payload, or the raw body if it had
    /// another shape.
    #[error("Request failed with status {status}: {message}")]
    Service { status: u16, message: String },
    /// A success response whose body is not the expected JSON.
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// The request payload could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl Error {
    /// HTTP status of a service failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message supplied by the service, if it responded at all.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            Self::Service { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Self::Transport { message: e.message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_passes_through() {
        let err: Error = TransportError::new("Network Error").into();
        insta::assert_snapshot!(err.to_string(), @"Network Error");
        assert_eq!(err.status(), None);
        assert_eq!(err.service_message(), None);
    }

    #[test]
    fn service_error_display() {
        let err = Error::Service {
            status: 404,
            message: "Pet not found".to_string(),
        };
        insta::assert_snapshot!(err.to_string(), @"Request failed with status 404: Pet not found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.service_message(), Some("Pet not found"));
        assert!(err.is_not_found());
    }

    #[test]
    fn decode_and_encode_display() {
        insta::assert_snapshot!(
            Error::Decode("expected value".to_string()).to_string(),
            @"Failed to decode response: expected value"
        );
        insta::assert_snapshot!(
            Error::Encode("key must be a string".to_string()).to_string(),
            @"Failed to encode request: key must be a string"
        );
    }
}
