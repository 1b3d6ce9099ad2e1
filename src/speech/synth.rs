//! Speech platform abstraction
//!
//! The trainer talks to the host text-to-speech engine through this
//! trait. Only playback is delegated; voice filtering, settings and
//! pronunciation mapping stay on our side of the boundary.

use crate::speech::request::SpeechRequest;
use crate::{LernappError, Result};
use log::info;

/// One voice reported by the platform
///
/// Names are unique within one platform voice list; the language is a
/// BCP 47 style tag such as "de-DE". Lists are not stable: the same
/// platform may report a different set on every enumeration, so a
/// voice is identified by name, never by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceDescriptor {
    pub name: String,
    pub language: String,
}

/// Speech platform trait
///
/// Backends implement this to play utterances. Playback is
/// fire-and-forget; nothing here blocks on audio.
pub trait SpeechPlatform: Send {
    /// Enumerate the currently available voices
    ///
    /// Platforms may populate their voice list late or change it over
    /// time; callers must cope with a different result on every call.
    fn voices(&self) -> Result<Vec<VoiceDescriptor>>;

    /// Speak one utterance, silencing anything still playing first
    fn speak(&mut self, request: &SpeechRequest) -> Result<()>;

    /// Silence any in-flight utterance
    fn cancel(&mut self) -> Result<()>;
}

/// Create the platform-appropriate speech backend
///
/// Fails with [`LernappError::SpeechUnavailable`] when the host has no
/// usable speech engine; the caller decides how to tell the user.
pub fn create_platform() -> Result<Box<dyn SpeechPlatform>> {
    use super::backends::native::NativeSpeech;

    info!(
        "Creating native speech backend for platform: {}",
        std::env::consts::OS
    );

    match NativeSpeech::new() {
        Ok(backend) => {
            info!("Native speech backend initialized");
            Ok(Box::new(backend))
        }
        Err(e) => {
            info!("Native speech backend unavailable: {}", e);
            Err(LernappError::SpeechUnavailable)
        }
    }
}
