//! Letter grid and pronunciation lookup
//!
//! Each tile shows a letter; the spoken form is the German letter name
//! ("Q" is spoken as "Ku"). Upper and lower case are separate tiles so
//! lookups stay exact-match, with no case folding across umlauts.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One tile in the letter grid
#[derive(Debug, Clone, Copy)]
pub struct LetterEntry {
    /// Character shown on the tile
    pub display: &'static str,

    /// Text handed to the speech engine; `None` means the display text
    /// is already speakable
    pub spoken: Option<&'static str>,

    /// Short label shown with the tile (the letter name)
    pub hint: Option<&'static str>,
}

/// (uppercase, lowercase, German letter name) for every letter pair
const LETTER_NAMES: &[(&str, &str, &str)] = &[
    ("A", "a", "Ah"),
    ("B", "b", "Beh"),
    ("C", "c", "Zeh"),
    ("D", "d", "Deh"),
    ("E", "e", "Eh"),
    ("F", "f", "Eff"),
    ("G", "g", "Geh"),
    ("H", "h", "Ha"),
    ("I", "i", "Ih"),
    ("J", "j", "Jot"),
    ("K", "k", "Ka"),
    ("L", "l", "Ell"),
    ("M", "m", "Emm"),
    ("N", "n", "Enn"),
    ("O", "o", "Oh"),
    ("P", "p", "Peh"),
    ("Q", "q", "Ku"),
    ("R", "r", "Err"),
    ("S", "s", "Ess"),
    ("T", "t", "Teh"),
    ("U", "u", "Uh"),
    ("V", "v", "Vau"),
    ("W", "w", "Weh"),
    ("X", "x", "Ix"),
    ("Y", "y", "Ypsilon"),
    ("Z", "z", "Zett"),
    ("Ä", "ä", "ae"),
    ("Ö", "ö", "oe"),
    ("Ü", "ü", "ue"),
];

/// The standard letter grid
///
/// Built from [`LETTER_NAMES`], one tile per case, plus the eszett
/// which has no uppercase tile.
pub static LETTERS: Lazy<Vec<LetterEntry>> = Lazy::new(|| {
    let mut entries = Vec::with_capacity(LETTER_NAMES.len() * 2 + 1);
    for &(upper, lower, name) in LETTER_NAMES {
        entries.push(LetterEntry {
            display: upper,
            spoken: Some(name),
            hint: Some(name),
        });
        entries.push(LetterEntry {
            display: lower,
            spoken: Some(name),
            hint: Some(name),
        });
    }
    entries.push(LetterEntry {
        display: "ß",
        spoken: Some("Eszett"),
        hint: Some("Eszett"),
    });
    entries
});

/// Static mapping from displayed character to spoken form
///
/// The table is fixed at startup; lookups are exact and case-sensitive.
pub struct PronunciationTable {
    entries: Vec<LetterEntry>,
    index: HashMap<&'static str, usize>,
}

impl PronunciationTable {
    /// Build a table from a list of entries
    ///
    /// Entries with empty display text are dropped (stray blank rows in
    /// hand-maintained tables). For duplicate display texts the first
    /// entry wins.
    pub fn new(entries: &[LetterEntry]) -> Self {
        let entries: Vec<LetterEntry> = entries
            .iter()
            .copied()
            .filter(|e| !e.display.is_empty())
            .collect();

        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            index.entry(entry.display).or_insert(i);
        }

        Self { entries, index }
    }

    /// Table with the standard letter grid
    pub fn standard() -> Self {
        Self::new(&LETTERS)
    }

    /// Look up the spoken form for displayed text
    ///
    /// Exact case-sensitive match against the table; text without an
    /// entry is returned unchanged, since free text is already
    /// speakable as-is.
    pub fn resolve<'a>(&'a self, text: &'a str) -> &'a str {
        match self.index.get(text) {
            Some(&i) => {
                let entry = &self.entries[i];
                entry.spoken.unwrap_or(entry.display)
            }
            None => text,
        }
    }

    /// All tiles, in grid order
    pub fn entries(&self) -> &[LetterEntry] {
        &self.entries
    }

    /// Tile at a grid index
    pub fn get(&self, index: usize) -> Option<&LetterEntry> {
        self.entries.get(index)
    }

    /// Grid index of the tile showing `display`, if any
    pub fn find(&self, display: &str) -> Option<usize> {
        self.index.get(display).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PronunciationTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_letter_names() {
        let table = PronunciationTable::standard();
        assert_eq!(table.resolve("Q"), "Ku");
        assert_eq!(table.resolve("q"), "Ku");
        assert_eq!(table.resolve("Y"), "Ypsilon");
        assert_eq!(table.resolve("ß"), "Eszett");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let table = PronunciationTable::standard();
        // Both cases are distinct entries mapping to the same sound
        assert_eq!(table.resolve("Ä"), "ae");
        assert_eq!(table.resolve("ä"), "ae");
        assert_ne!(table.find("Ä"), table.find("ä"));
    }

    #[test]
    fn test_resolve_passes_free_text_through() {
        let table = PronunciationTable::standard();
        assert_eq!(table.resolve("Hello"), "Hello");
        assert_eq!(table.resolve(""), "");
        assert_eq!(table.resolve("Guten Morgen"), "Guten Morgen");
    }

    #[test]
    fn test_every_entry_resolves_to_its_spoken_form() {
        let table = PronunciationTable::standard();
        for entry in table.entries() {
            let expected = entry.spoken.unwrap_or(entry.display);
            assert_eq!(table.resolve(entry.display), expected);
        }
    }

    #[test]
    fn test_blank_entries_are_filtered() {
        let entries = [
            LetterEntry {
                display: "A",
                spoken: Some("Ah"),
                hint: None,
            },
            LetterEntry {
                display: "",
                spoken: None,
                hint: None,
            },
        ];
        let table = PronunciationTable::new(&entries);
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve(""), "");
    }

    #[test]
    fn test_no_duplicate_display_texts_in_standard_table() {
        let table = PronunciationTable::standard();
        for (i, entry) in table.entries().iter().enumerate() {
            assert_eq!(table.find(entry.display), Some(i));
        }
    }
}
