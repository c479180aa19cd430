//! Long-form text-to-speech through short-text synthesis backends.
//!
//! The remote services only accept bounded-length text, so arbitrary input is
//! split into chunks at sentence and word boundaries ([`segment`]), each chunk
//! is synthesized over HTTP ([`synth::client`]), and the per-chunk base64
//! fragments are stitched back into one audio stream. Backends are tried in a
//! fixed priority order; a backend that fails mid-sequence is abandoned and
//! the next one restarts from the first chunk ([`synth::orchestrator`]).

pub mod error;
pub mod segment;
pub mod synth;
pub mod voice;

// Re-export commonly used items for convenience
pub use error::{TtsError, TtsResult};
pub use segment::{TEXT_LEN_LIMIT, segment};
pub use synth::{BackendDescriptor, ResponseSchema, Synthesizer, default_backends};
