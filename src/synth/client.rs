//! HTTP synthesis client
//!
//! Performs one network round trip per chunk and classifies the outcome.
//! Failures split into two families: conditions that abandon the backend for
//! the rest of the chunk sequence (transport errors, non-2xx statuses, an
//! explicit success=false) and contract violations from a backend that
//! otherwise claimed to be reachable (unparseable body, missing payload),
//! which are fatal for the whole run.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{TtsError, TtsResult};
use crate::synth::backend::BackendDescriptor;
use crate::synth::messages::SynthesisRequest;

/// Client for the per-chunk synthesis round trip.
///
/// No timeout is configured: a hung backend stalls the run. Callers needing
/// bounded latency must wrap the call with an external deadline.
#[derive(Debug, Clone, Default)]
pub struct SynthesisClient {
    http: reqwest::Client,
}

impl SynthesisClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synthesize one chunk against one backend.
    ///
    /// Returns the *undecoded* base64 fragment. Fragments are not
    /// independently valid base64; the orchestrator joins them as raw base64
    /// text and decodes once after the whole sequence succeeds.
    ///
    /// Outcome classification, in check order:
    /// - transport error → recoverable [`TtsError::Transport`]
    /// - non-2xx status → recoverable [`TtsError::BackendUnreachable`]
    /// - body not a JSON object → fatal [`TtsError::MalformedResponse`]
    /// - declared success flag absent or not `true` → recoverable
    ///   [`TtsError::BackendRejected`]
    /// - audio field absent or not a string → fatal
    ///   [`TtsError::MissingAudioPayload`]
    pub async fn synthesize(
        &self,
        chunk: &str,
        voice: &str,
        backend: &BackendDescriptor,
    ) -> TtsResult<String> {
        let request = SynthesisRequest { text: chunk, voice };

        debug!(
            backend = backend.name,
            chunk_len = chunk.len(),
            "synthesis request"
        );

        let response = self
            .http
            .post(&backend.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| TtsError::Transport {
                backend: backend.name.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TtsError::BackendUnreachable {
                backend: backend.name.to_string(),
                status,
            });
        }

        let body: Map<String, Value> =
            response
                .json()
                .await
                .map_err(|e| TtsError::MalformedResponse {
                    backend: backend.name.to_string(),
                    reason: e.to_string(),
                })?;

        if !backend.schema.accepted(&body) {
            return Err(TtsError::BackendRejected {
                backend: backend.name.to_string(),
            });
        }

        let fragment =
            backend
                .schema
                .audio_payload(&body)
                .ok_or_else(|| TtsError::MissingAudioPayload {
                    backend: backend.name.to_string(),
                    field: backend.schema.audio_field.to_string(),
                })?;

        debug!(
            backend = backend.name,
            fragment_len = fragment.len(),
            "synthesis response"
        );

        Ok(fragment.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_default_build_the_same_client() {
        // `new` delegates to `Default`; both must stay constructible without
        // extra configuration.
        let a = SynthesisClient::new();
        let b = SynthesisClient::default();
        assert_eq!(format!("{a:?}"), format!("{b:?}"));
    }
}
