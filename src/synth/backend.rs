//! Backend descriptors and response schemas
//!
//! Each remote synthesis service speaks the same request shape but differs in
//! how it frames its response: which key carries the base64 audio and whether
//! an explicit success flag is present. That difference is captured in a
//! typed [`ResponseSchema`] per backend instead of ad-hoc key lookups at the
//! call site.

use serde_json::{Map, Value};

/// Response framing for one backend: where the audio payload lives and
/// whether the backend reports success explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSchema {
    /// Response key holding the base64-encoded audio fragment
    pub audio_field: &'static str,
    /// Response key holding a boolean success flag, if the backend has one
    pub success_field: Option<&'static str>,
}

impl ResponseSchema {
    /// Check the declared success flag.
    ///
    /// Backends without a success field are accepted by construction; for the
    /// rest, anything other than a literal `true` counts as a rejection.
    pub fn accepted(&self, body: &Map<String, Value>) -> bool {
        match self.success_field {
            None => true,
            Some(field) => matches!(body.get(field), Some(Value::Bool(true))),
        }
    }

    /// Extract the base64 audio payload, if present and a string.
    pub fn audio_payload<'a>(&self, body: &'a Map<String, Value>) -> Option<&'a str> {
        body.get(self.audio_field).and_then(Value::as_str)
    }
}

/// One candidate synthesis service in the fallback chain.
#[derive(Debug, Clone)]
pub struct BackendDescriptor {
    /// Short name used in diagnostics and error messages
    pub name: &'static str,
    /// Endpoint URL for synthesis POSTs
    pub url: String,
    /// Response framing for this backend
    pub schema: ResponseSchema,
}

impl BackendDescriptor {
    pub fn new(name: &'static str, url: impl Into<String>, schema: ResponseSchema) -> Self {
        Self {
            name,
            url: url.into(),
            schema,
        }
    }
}

/// The fixed backend priority list. Order is fallback order.
pub fn default_backends() -> Vec<BackendDescriptor> {
    vec![
        BackendDescriptor::new(
            "weilnet",
            "https://tiktok-tts.weilnet.workers.dev/api/generation",
            ResponseSchema {
                audio_field: "data",
                success_field: Some("success"),
            },
        ),
        BackendDescriptor::new(
            "gesserit",
            "https://gesserit.co/api/tiktok-tts",
            ResponseSchema {
                audio_field: "base64",
                success_field: None,
            },
        ),
    ]
}
