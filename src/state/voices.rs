//! Voice selection
//!
//! The platform may report its voice list late and more than once. The
//! selector derives a filtered candidate list from each report and
//! re-resolves the selection by voice name, so a stale index never
//! survives a refresh.

use crate::speech::VoiceDescriptor;
use log::debug;

/// Language prefix preferred when filtering platform voices
const PREFERRED_LANGUAGE_PREFIX: &str = "de";

/// Filters platform voices and tracks the current selection
#[derive(Debug, Default)]
pub struct VoiceSelector {
    /// Candidates derived from the last platform report
    candidates: Vec<VoiceDescriptor>,

    /// Index into `candidates`, `None` when the list is empty
    selected: Option<usize>,
}

impl VoiceSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the candidate list from a fresh platform report
    ///
    /// German voices win; when the platform has none, the full list is
    /// used instead. Safe to call at any time and any number of times.
    /// The previous selection is re-resolved by name, never carried
    /// over as an index.
    pub fn refresh(&mut self, platform_voices: &[VoiceDescriptor]) {
        let current_name = self.current_voice().map(|v| v.name.clone());

        let preferred: Vec<VoiceDescriptor> = platform_voices
            .iter()
            .filter(|v| {
                v.language
                    .to_lowercase()
                    .starts_with(PREFERRED_LANGUAGE_PREFIX)
            })
            .cloned()
            .collect();

        self.candidates = if preferred.is_empty() {
            platform_voices.to_vec()
        } else {
            preferred
        };

        debug!(
            "Voice list refreshed: {} of {} platform voices are candidates",
            self.candidates.len(),
            platform_voices.len()
        );

        self.restore_selection(current_name.as_deref());
    }

    /// Select the candidate with the given name
    ///
    /// No name, or a name no candidate carries, selects the first
    /// candidate; an empty list clears the selection.
    pub fn restore_selection(&mut self, saved_name: Option<&str>) -> Option<usize> {
        let by_name =
            saved_name.and_then(|name| self.candidates.iter().position(|v| v.name == name));

        self.selected = by_name.or_else(|| (!self.candidates.is_empty()).then_some(0));
        self.selected
    }

    /// User selection from the candidate list
    ///
    /// Returns false and keeps the current selection when the index is
    /// out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.candidates.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Currently selected voice
    ///
    /// `None` when the list is empty or the selection is out of range;
    /// the caller then falls back to the platform default voice.
    pub fn current_voice(&self) -> Option<&VoiceDescriptor> {
        self.selected.and_then(|i| self.candidates.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Candidates from the last refresh, in platform order
    pub fn candidates(&self) -> &[VoiceDescriptor] {
        &self.candidates
    }
}
