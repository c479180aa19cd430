//! Wire message types shared by all synthesis backends.

use serde::Serialize;

/// Synthesis request body.
///
/// Every backend in the fallback chain accepts the same JSON shape:
/// `{"text": <chunk>, "voice": <voice id>}`.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisRequest<'a> {
    pub text: &'a str,
    pub voice: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_to_expected_shape() {
        let request = SynthesisRequest {
            text: "Hello world.",
            voice: "en_us_001",
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"text": "Hello world.", "voice": "en_us_001"})
        );
    }
}
