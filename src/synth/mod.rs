//! Synthesis over remote backends
//!
//! One request per text chunk, one ordered priority list of interchangeable
//! backends, and failover when a backend breaks mid-sequence. The pieces:
//!
//! - [`backend`]: descriptors for each candidate service and its response schema
//! - [`messages`]: the shared JSON request shape
//! - [`client`]: the per-chunk HTTP round trip and outcome classification
//! - [`orchestrator`]: the failover loop and final audio reassembly

pub mod backend;
pub mod client;
pub mod messages;
pub mod orchestrator;

pub use backend::{BackendDescriptor, ResponseSchema, default_backends};
pub use client::SynthesisClient;
pub use messages::SynthesisRequest;
pub use orchestrator::Synthesizer;
