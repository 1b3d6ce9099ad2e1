//! Pronunciation table tests
//!
//! The grid's displayed characters must map to their German letter
//! names, and anything else must pass through untouched.

use lernapp::letters::PronunciationTable;

#[test]
fn test_letter_names() {
    let table = PronunciationTable::standard();

    assert_eq!(table.resolve("Q"), "Ku");
    assert_eq!(table.resolve("J"), "Jot");
    assert_eq!(table.resolve("V"), "Vau");
    assert_eq!(table.resolve("Z"), "Zett");
}

#[test]
fn test_lowercase_tiles_share_the_letter_name() {
    let table = PronunciationTable::standard();

    for (upper, lower) in [("Q", "q"), ("Ä", "ä"), ("Ö", "ö"), ("Ü", "ü")] {
        assert_eq!(table.resolve(upper), table.resolve(lower));
        // ... but they stay distinct entries
        assert_ne!(table.find(upper), table.find(lower));
    }
}

#[test]
fn test_umlauts() {
    let table = PronunciationTable::standard();

    assert_eq!(table.resolve("Ä"), "ae");
    assert_eq!(table.resolve("Ö"), "oe");
    assert_eq!(table.resolve("Ü"), "ue");
    assert_eq!(table.resolve("ß"), "Eszett");
}

#[test]
fn test_free_text_passes_through() {
    let table = PronunciationTable::standard();

    assert_eq!(table.resolve("Hello"), "Hello");
    assert_eq!(table.resolve("QU"), "QU");
    assert_eq!(table.resolve(" Q"), " Q"); // no trimming, exact match only
}

#[test]
fn test_grid_has_a_tile_per_case() {
    let table = PronunciationTable::standard();

    // 26 letter pairs, 3 umlaut pairs, one eszett
    assert_eq!(table.len(), 29 * 2 + 1);
}
