//! Speech request assembly
//!
//! A request carries everything the platform needs for one utterance.
//! Issuing a request supersedes whatever is still playing; the backend
//! contract is cancel-then-speak, never a queue.

use crate::speech::synth::VoiceDescriptor;

/// Language tag attached to every utterance
pub const LANGUAGE: &str = "de-DE";

/// Floor for the effective speech rate
///
/// Values below this are unintelligible on most engines. The clamp is
/// applied here, at speak time; a saved low rate keeps its value in
/// storage.
pub const MIN_RATE: f32 = 0.4;

/// A single utterance for the speech platform
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,

    /// Voice to use; `None` delegates to the platform default
    pub voice: Option<VoiceDescriptor>,

    pub language: &'static str,

    /// Rate multiplier, 1.0 = normal, already clamped to [`MIN_RATE`]
    pub rate: f32,

    /// Pitch multiplier, 1.0 = normal
    pub pitch: f32,
}

impl SpeechRequest {
    /// Assemble a request from the current settings
    pub fn build(text: &str, voice: Option<VoiceDescriptor>, rate: f32, pitch: f32) -> Self {
        Self {
            text: text.to_string(),
            voice,
            language: LANGUAGE,
            rate: rate.max(MIN_RATE),
            pitch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_is_clamped_to_floor() {
        let request = SpeechRequest::build("Hallo", None, 0.1, 1.0);
        assert_eq!(request.rate, MIN_RATE);
    }

    #[test]
    fn test_rate_above_floor_is_kept() {
        let request = SpeechRequest::build("Hallo", None, 1.5, 1.0);
        assert_eq!(request.rate, 1.5);
    }

    #[test]
    fn test_language_is_fixed() {
        let request = SpeechRequest::build("Hallo", None, 1.0, 1.0);
        assert_eq!(request.language, "de-DE");
    }

    #[test]
    fn test_pitch_is_not_clamped() {
        let request = SpeechRequest::build("Hallo", None, 1.0, 0.1);
        assert_eq!(request.pitch, 0.1);
    }
}
