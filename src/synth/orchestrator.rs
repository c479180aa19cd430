//! Multi-backend failover orchestration
//!
//! Drives the full synthesis run: validate input, segment the text, then try
//! each backend in priority order. A backend that fails on any chunk is
//! abandoned immediately; the next backend restarts from chunk one (partial
//! fragment sequences from different backends cannot be mixed). The first
//! backend to synthesize every chunk wins, and its fragments are joined as
//! raw base64 text and decoded as a single unit.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::{debug, info, warn};

use crate::error::{TtsError, TtsResult};
use crate::segment::{TEXT_LEN_LIMIT, segment};
use crate::synth::backend::{BackendDescriptor, default_backends};
use crate::synth::client::SynthesisClient;
use crate::voice;

/// Orchestrates chunked synthesis with backend failover.
///
/// Each call to [`synthesize`](Synthesizer::synthesize) owns its own chunk
/// list and fragment accumulator; no state crosses invocations.
/// Characters of a chunk shown in diagnostics.
const PREVIEW_CHARS: usize = 40;

/// First [`PREVIEW_CHARS`] characters of a chunk, for log output.
fn preview(chunk: &str) -> &str {
    match chunk.char_indices().nth(PREVIEW_CHARS) {
        Some((i, _)) => &chunk[..i],
        None => chunk,
    }
}

#[derive(Debug, Clone)]
pub struct Synthesizer {
    client: SynthesisClient,
    backends: Vec<BackendDescriptor>,
    max_chunk_len: usize,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(default_backends())
    }
}

impl Synthesizer {
    pub fn new(backends: Vec<BackendDescriptor>) -> Self {
        Self {
            client: SynthesisClient::new(),
            backends,
            max_chunk_len: TEXT_LEN_LIMIT,
        }
    }

    /// Override the chunk length limit. Mainly for tests.
    pub fn with_max_chunk_len(mut self, max_chunk_len: usize) -> Self {
        self.max_chunk_len = max_chunk_len;
        self
    }

    /// Convert `text` to audio bytes using `voice`.
    ///
    /// Validates input before any network activity, then runs the chunk
    /// sequence against each backend in priority order. Recoverable backend
    /// failures fall through to the next backend; contract violations abort
    /// immediately. Fails with [`TtsError::AllBackendsExhausted`] only after
    /// every backend has been abandoned.
    pub async fn synthesize(&self, text: &str, voice: &str) -> TtsResult<Vec<u8>> {
        if text.is_empty() {
            return Err(TtsError::EmptyText);
        }
        if !voice::is_valid(voice) {
            return Err(TtsError::UnknownVoice(voice.to_string()));
        }

        let chunks = segment(text, self.max_chunk_len);
        for (i, chunk) in chunks.iter().enumerate() {
            debug!(index = i, len = chunk.len(), preview = %preview(chunk), "chunk");
        }

        for backend in &self.backends {
            match self.run_backend(backend, &chunks, voice).await {
                Ok(fragments) => {
                    // Fragments are only valid base64 once joined in chunk order.
                    let audio = BASE64.decode(fragments.concat())?;
                    info!(
                        backend = backend.name,
                        chunks = chunks.len(),
                        audio_bytes = audio.len(),
                        "synthesis complete"
                    );
                    return Ok(audio);
                }
                Err(e) if e.is_recoverable() => {
                    warn!(backend = backend.name, error = %e, "backend abandoned");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(TtsError::AllBackendsExhausted)
    }

    /// Run the full chunk sequence against one backend.
    ///
    /// Stops at the first failure; remaining chunks are never attempted on a
    /// backend known to be broken.
    async fn run_backend(
        &self,
        backend: &BackendDescriptor,
        chunks: &[String],
        voice: &str,
    ) -> TtsResult<Vec<String>> {
        let mut fragments = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let fragment = self.client.synthesize(chunk, voice, backend).await?;
            fragments.push(fragment);
        }
        Ok(fragments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_chunks_only() {
        let short = "Hello world.";
        assert_eq!(preview(short), short);

        let long = "x".repeat(100);
        assert_eq!(preview(&long), "x".repeat(PREVIEW_CHARS));

        // Truncation lands on a character boundary, not mid-codepoint.
        let multibyte = "日本語のテキスト".repeat(10);
        let p = preview(&multibyte);
        assert_eq!(p.chars().count(), PREVIEW_CHARS);
        assert!(multibyte.starts_with(p));
    }

    #[tokio::test]
    async fn test_empty_text_rejected_before_any_network_call() {
        // No backends at all: validation must fail first.
        let synthesizer = Synthesizer::new(Vec::new());
        let err = synthesizer.synthesize("", "en_us_001").await.unwrap_err();
        assert!(matches!(err, TtsError::EmptyText));
    }

    #[tokio::test]
    async fn test_unknown_voice_rejected_before_any_network_call() {
        let synthesizer = Synthesizer::new(Vec::new());
        let err = synthesizer
            .synthesize("hello", "not_a_voice")
            .await
            .unwrap_err();
        match err {
            TtsError::UnknownVoice(v) => assert_eq!(v, "not_a_voice"),
            other => panic!("expected UnknownVoice, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_backend_list_exhausts() {
        let synthesizer = Synthesizer::new(Vec::new());
        let err = synthesizer
            .synthesize("hello", "en_us_001")
            .await
            .unwrap_err();
        assert!(matches!(err, TtsError::AllBackendsExhausted));
    }
}
