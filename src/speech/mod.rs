//! Speech output system

pub mod backends;
pub mod request;
pub mod synth;

pub use request::{SpeechRequest, LANGUAGE, MIN_RATE};
pub use synth::{create_platform, SpeechPlatform, VoiceDescriptor};
