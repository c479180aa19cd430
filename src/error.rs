//! Error types for text-to-speech synthesis
//!
//! Centralized error handling for segmentation, voice selection, and the
//! multi-backend synthesis protocol. Errors split into two families: backend
//! failures that trigger fallback to the next endpoint, and fatal contract
//! violations that abort the whole run.

use thiserror::Error;

/// Result type for TTS operations
pub type TtsResult<T> = Result<T, TtsError>;

/// Comprehensive error type for the synthesis pipeline
#[derive(Error, Debug)]
pub enum TtsError {
    /// Input text was empty; nothing to synthesize
    #[error("empty input text")]
    EmptyText,

    /// Requested voice is not in the catalog
    #[error("unknown voice: {0}")]
    UnknownVoice(String),

    /// Network-level failure talking to a backend (connection refused, DNS, ...)
    #[error("request to backend '{backend}' failed: {source}")]
    Transport {
        backend: String,
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-success HTTP status
    #[error("backend '{backend}' returned status {status}")]
    BackendUnreachable {
        backend: String,
        status: reqwest::StatusCode,
    },

    /// Backend answered 2xx but flagged the request as unsuccessful
    #[error("backend '{backend}' rejected the request")]
    BackendRejected { backend: String },

    /// Backend response body was not a JSON object
    #[error("backend '{backend}' returned a malformed response: {reason}")]
    MalformedResponse { backend: String, reason: String },

    /// Backend claimed success but the audio payload field is missing or not a string
    #[error("backend '{backend}' response is missing audio payload field '{field}'")]
    MissingAudioPayload { backend: String, field: String },

    /// Joined base64 fragments did not decode
    #[error("failed to decode base64 audio: {0}")]
    AudioDecode(#[from] base64::DecodeError),

    /// Every backend in the priority list was abandoned
    #[error("no backend provided the requested service")]
    AllBackendsExhausted,
}

impl TtsError {
    /// Check if this error abandons only the current backend.
    ///
    /// Recoverable errors make the orchestrator fall through to the next
    /// backend in the priority list; everything else aborts the whole run.
    /// Transport errors are classified as recoverable rather than retried:
    /// the protocol takes a single pass per backend and moves on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TtsError::Transport { .. }
                | TtsError::BackendUnreachable { .. }
                | TtsError::BackendRejected { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_error_classification() {
        let err = TtsError::BackendUnreachable {
            backend: "weilnet".to_string(),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert!(err.is_recoverable());

        let err = TtsError::BackendRejected {
            backend: "weilnet".to_string(),
        };
        assert!(err.is_recoverable());

        let err = TtsError::MalformedResponse {
            backend: "weilnet".to_string(),
            reason: "not an object".to_string(),
        };
        assert!(!err.is_recoverable());

        let err = TtsError::MissingAudioPayload {
            backend: "gesserit".to_string(),
            field: "base64".to_string(),
        };
        assert!(!err.is_recoverable());

        assert!(!TtsError::AllBackendsExhausted.is_recoverable());
        assert!(!TtsError::EmptyText.is_recoverable());
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let err = TtsError::UnknownVoice("not_a_voice".to_string());
        assert_eq!(err.to_string(), "unknown voice: not_a_voice");

        let err = TtsError::AllBackendsExhausted;
        assert_eq!(
            err.to_string(),
            "no backend provided the requested service"
        );
    }
}
