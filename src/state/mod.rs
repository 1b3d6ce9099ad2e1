//! Application state management
//!
//! The Trainer owns everything mutable for one session: the letter
//! table, the voice selection, the persisted settings and whatever was
//! spoken last. UI callbacks get a `&mut Trainer`; there is no module
//! level state.

pub mod settings;
pub mod voices;

use crate::letters::PronunciationTable;
use crate::speech::{SpeechPlatform, SpeechRequest, VoiceDescriptor};
use crate::{LernappError, Result};
use log::{debug, info, warn};
use settings::{KeyValueStore, PersistedSettings, SettingsStore};
use voices::VoiceSelector;

/// Sample phrase for the "test voice" action
pub const TEST_PHRASE: &str = "Hallo, ich bin deine Stimme.";

/// Rate/pitch multipliers used when nothing is saved
const DEFAULT_RATE: f32 = 1.0;
const DEFAULT_PITCH: f32 = 1.0;

/// Central controller for one trainer session
pub struct Trainer {
    /// Letter grid and pronunciation lookup
    table: PronunciationTable,

    /// Candidate voices and current selection
    selector: VoiceSelector,

    /// Persisted settings access
    settings: SettingsStore,

    /// Speech engine, `None` when the host has no TTS capability
    platform: Option<Box<dyn SpeechPlatform>>,

    /// Voice name to restore; starts as the saved name and follows the
    /// user's selection afterwards
    voice_name: Option<String>,

    /// Rate multiplier as set by the user (clamping happens per
    /// request, not here)
    rate: f32,

    /// Pitch multiplier as set by the user
    pitch: f32,

    /// When off, selecting a tile only marks it; nothing is spoken
    auto_speak: bool,

    /// Text most recently handed to the speech engine
    last_spoken: Option<String>,

    /// Grid index of the active tile, `None` after free-text input
    active_tile: Option<usize>,
}

impl Trainer {
    /// Create a trainer, restoring saved settings from the store
    ///
    /// `platform` is `None` when speech is unavailable; every speak
    /// action then reports [`LernappError::SpeechUnavailable`] and the
    /// rest of the trainer keeps working.
    pub fn new(platform: Option<Box<dyn SpeechPlatform>>, store: Box<dyn KeyValueStore>) -> Self {
        let settings = SettingsStore::new(store);
        let saved = settings.load();
        let (rate, pitch) =
            PersistedSettings::apply_defaults(saved.as_ref(), DEFAULT_RATE, DEFAULT_PITCH);
        let voice_name = saved.and_then(|s| s.voice_name);

        info!(
            "Trainer starting: rate {}, pitch {}, saved voice {:?}",
            rate, pitch, voice_name
        );

        let mut trainer = Self {
            table: PronunciationTable::standard(),
            selector: VoiceSelector::new(),
            settings,
            platform,
            voice_name,
            rate,
            pitch,
            auto_speak: true,
            last_spoken: None,
            active_tile: None,
        };
        trainer.refresh_voices();
        trainer
    }

    /// Re-enumerate platform voices and re-resolve the selection
    ///
    /// This is the handler for every voice-list report, including the
    /// initial one; platforms may report late and repeatedly, so it is
    /// idempotent. Enumeration failures leave the previous candidates
    /// in place.
    pub fn refresh_voices(&mut self) {
        let Some(platform) = &self.platform else {
            return;
        };

        match platform.voices() {
            Ok(voices) => {
                self.selector.refresh(&voices);
                self.selector.restore_selection(self.voice_name.as_deref());
                info!("{} voice candidates", self.selector.candidates().len());
            }
            Err(e) => warn!("Voice enumeration failed: {}", e),
        }
    }

    /// Build and issue a speech request for already-resolved text
    fn speak(&mut self, text: &str) -> Result<()> {
        let Some(platform) = self.platform.as_mut() else {
            return Err(LernappError::SpeechUnavailable);
        };

        let request = SpeechRequest::build(
            text,
            self.selector.current_voice().cloned(),
            self.rate,
            self.pitch,
        );
        debug!("Speak request: {:?}", request);
        platform.speak(&request)
    }

    /// Tile selection
    ///
    /// Marks the tile active, remembers its spoken form for "repeat"
    /// and speaks it unless auto-speak is off.
    pub fn speak_tile(&mut self, index: usize) -> Result<()> {
        let Some(entry) = self.table.get(index) else {
            return Err(LernappError::Other(format!("No tile {}", index)));
        };

        let text = entry.spoken.unwrap_or(entry.display).to_string();
        self.active_tile = Some(index);
        self.last_spoken = Some(text.clone());

        if self.auto_speak {
            self.speak(&text)
        } else {
            Ok(())
        }
    }

    /// Free-text input
    ///
    /// Empty or whitespace-only submissions are a no-op. Clears the
    /// active tile.
    pub fn speak_text(&mut self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        let spoken = self.table.resolve(text).to_string();
        self.active_tile = None;
        self.last_spoken = Some(spoken.clone());
        self.speak(&spoken)
    }

    /// Speak the last utterance again; nothing spoken yet is a no-op
    pub fn repeat_last(&mut self) -> Result<()> {
        match self.last_spoken.clone() {
            Some(text) => self.speak(&text),
            None => Ok(()),
        }
    }

    /// Speak the fixed sample phrase with the current settings
    pub fn test_voice(&mut self) -> Result<()> {
        self.speak(TEST_PHRASE)
    }

    /// User picked a voice from the candidate list
    pub fn select_voice(&mut self, index: usize) -> Result<()> {
        if !self.selector.select(index) {
            return Err(LernappError::Other(format!("No voice {}", index)));
        }
        self.voice_name = self.selector.current_voice().map(|v| v.name.clone());
        self.save_settings()
    }

    pub fn set_rate(&mut self, rate: f32) -> Result<()> {
        self.rate = rate;
        self.save_settings()
    }

    pub fn set_pitch(&mut self, pitch: f32) -> Result<()> {
        self.pitch = pitch;
        self.save_settings()
    }

    /// Toggle speaking on tile selection, returning the new value
    pub fn toggle_auto_speak(&mut self) -> bool {
        self.auto_speak = !self.auto_speak;
        self.auto_speak
    }

    /// Write the current voice/rate/pitch to storage (overwrite, no
    /// merge)
    fn save_settings(&mut self) -> Result<()> {
        let settings = PersistedSettings {
            voice_name: self.selector.current_voice().map(|v| v.name.clone()),
            rate: Some(self.rate),
            pitch: Some(self.pitch),
        };
        self.settings.save(&settings)
    }

    pub fn table(&self) -> &PronunciationTable {
        &self.table
    }

    /// Voice candidates from the last refresh
    pub fn voices(&self) -> &[VoiceDescriptor] {
        self.selector.candidates()
    }

    pub fn current_voice(&self) -> Option<&VoiceDescriptor> {
        self.selector.current_voice()
    }

    pub fn selected_voice_index(&self) -> Option<usize> {
        self.selector.selected_index()
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn auto_speak(&self) -> bool {
        self.auto_speak
    }

    pub fn last_spoken(&self) -> Option<&str> {
        self.last_spoken.as_deref()
    }

    pub fn active_tile(&self) -> Option<usize> {
        self.active_tile
    }

    pub fn speech_available(&self) -> bool {
        self.platform.is_some()
    }
}
