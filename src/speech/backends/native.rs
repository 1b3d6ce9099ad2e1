//! Native TTS backend using the tts crate
//!
//! The `tts` crate provides a unified interface to Speech Dispatcher on
//! Linux, AVFoundation on macOS and SAPI/WinRT on Windows, so one
//! backend covers every desktop platform.

use crate::speech::request::SpeechRequest;
use crate::speech::synth::{SpeechPlatform, VoiceDescriptor};
use crate::{LernappError, Result};
use log::{debug, warn};
use tts::Tts as TtsCrate;

/// Native speech backend
pub struct NativeSpeech {
    /// The tts crate's TTS instance
    tts: TtsCrate,
}

impl NativeSpeech {
    /// Create a new native speech backend
    ///
    /// Fails when the platform has no usable speech engine (for
    /// example a Linux box without speech-dispatcher).
    pub fn new() -> Result<Self> {
        debug!("Creating native TTS backend");

        let tts = TtsCrate::default()
            .map_err(|e| LernappError::Speech(format!("Failed to initialize TTS: {}", e)))?;

        debug!("Native TTS backend created successfully");

        Ok(Self { tts })
    }

    /// Map the application's rate multiplier (1.0 = normal) onto the
    /// engine's own rate range
    fn convert_rate(&self, rate: f32) -> f32 {
        let scaled = self.tts.normal_rate() * rate;
        scaled.clamp(self.tts.min_rate(), self.tts.max_rate())
    }

    /// Map the application's pitch multiplier (1.0 = normal) onto the
    /// engine's own pitch range
    fn convert_pitch(&self, pitch: f32) -> f32 {
        let scaled = self.tts.normal_pitch() * pitch;
        scaled.clamp(self.tts.min_pitch(), self.tts.max_pitch())
    }

    /// Re-resolve a descriptor to the engine's own voice type, by name
    ///
    /// The engine's list may have changed since the descriptor was
    /// handed out, so a missing voice is not an error here.
    fn platform_voice(&self, descriptor: &VoiceDescriptor) -> Result<Option<tts::Voice>> {
        let voices = self
            .tts
            .voices()
            .map_err(|e| LernappError::Speech(format!("Failed to get voices: {}", e)))?;

        Ok(voices.into_iter().find(|v| v.name() == descriptor.name))
    }
}

impl SpeechPlatform for NativeSpeech {
    fn voices(&self) -> Result<Vec<VoiceDescriptor>> {
        let voices = self
            .tts
            .voices()
            .map_err(|e| LernappError::Speech(format!("Failed to get voices: {}", e)))?;

        Ok(voices
            .iter()
            .map(|v| VoiceDescriptor {
                name: v.name(),
                language: v.language().to_string(),
            })
            .collect())
    }

    fn speak(&mut self, request: &SpeechRequest) -> Result<()> {
        if request.text.is_empty() {
            return Ok(());
        }

        let features = self.tts.supported_features();

        if features.voice {
            if let Some(descriptor) = &request.voice {
                match self.platform_voice(descriptor)? {
                    Some(voice) => {
                        self.tts.set_voice(&voice).map_err(|e| {
                            LernappError::Speech(format!("Failed to set voice: {}", e))
                        })?;
                    }
                    None => warn!(
                        "Voice '{}' no longer reported by the engine, using default",
                        descriptor.name
                    ),
                }
            }
        } else if request.voice.is_some() {
            warn!("Voice selection not supported on this platform");
        }

        if features.rate {
            self.tts
                .set_rate(self.convert_rate(request.rate))
                .map_err(|e| LernappError::Speech(format!("Failed to set rate: {}", e)))?;
        } else {
            warn!("Rate control not supported on this platform");
        }

        if features.pitch {
            self.tts
                .set_pitch(self.convert_pitch(request.pitch))
                .map_err(|e| LernappError::Speech(format!("Failed to set pitch: {}", e)))?;
        } else {
            warn!("Pitch control not supported on this platform");
        }

        debug!("Speaking: {}", request.text);
        // interrupt=true silences any in-flight utterance first
        self.tts
            .speak(request.text.as_str(), true)
            .map_err(|e| LernappError::Speech(format!("Speak failed: {}", e)))?;

        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        debug!("Canceling speech");
        self.tts
            .stop()
            .map_err(|e| LernappError::Speech(format!("Cancel failed: {}", e)))?;

        Ok(())
    }
}
