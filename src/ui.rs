//! Terminal front end
//!
//! Thin translation layer between typed input and trainer calls. All
//! parsing and rendering is stateless so it can be tested without a
//! terminal.

use crate::letters::LetterEntry;
use crate::speech::VoiceDescriptor;
use std::fmt::Write;

/// Tiles per grid row
const GRID_COLUMNS: usize = 6;

/// One parsed line of user input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Speak a tile or free text
    Speak(String),
    /// Repeat the last utterance
    Repeat,
    /// Speak the sample phrase
    TestVoice,
    /// List voice candidates (re-enumerates the platform first)
    ListVoices,
    /// Select a voice by candidate index
    SelectVoice(usize),
    SetRate(f32),
    SetPitch(f32),
    /// Toggle speaking on tile selection
    ToggleAutoSpeak,
    ShowGrid,
    Help,
    Quit,
    /// Empty input
    Nothing,
    /// Unusable command, with a message for the user
    Invalid(String),
}

/// Parse one line of input
///
/// Lines starting with `:` are commands; everything else is spoken.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Nothing;
    }

    let Some(rest) = line.strip_prefix(':') else {
        return Command::Speak(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or("");
    let arg = parts.next();

    match name {
        "repeat" | "r" => Command::Repeat,
        "test" | "t" => Command::TestVoice,
        "voices" | "v" => Command::ListVoices,
        "voice" => match arg.map(str::parse::<usize>) {
            Some(Ok(index)) => Command::SelectVoice(index),
            _ => Command::Invalid("usage: :voice <number>".to_string()),
        },
        "rate" => match arg.map(str::parse::<f32>) {
            Some(Ok(value)) => Command::SetRate(value),
            _ => Command::Invalid("usage: :rate <value>".to_string()),
        },
        "pitch" => match arg.map(str::parse::<f32>) {
            Some(Ok(value)) => Command::SetPitch(value),
            _ => Command::Invalid("usage: :pitch <value>".to_string()),
        },
        "auto" | "a" => Command::ToggleAutoSpeak,
        "grid" | "g" => Command::ShowGrid,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,
        other => Command::Invalid(format!("Unknown command :{}", other)),
    }
}

/// Render the letter grid with per-tile indices and hints
pub fn render_grid(entries: &[LetterEntry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let hint = entry.hint.unwrap_or("");
        let _ = write!(out, "{:>3} {} {:<9}", i, entry.display, hint);
        if (i + 1) % GRID_COLUMNS == 0 {
            out.push('\n');
        }
    }
    if entries.len() % GRID_COLUMNS != 0 {
        out.push('\n');
    }
    out
}

/// Render the voice candidate list, marking the selection
pub fn render_voices(voices: &[VoiceDescriptor], selected: Option<usize>) -> String {
    if voices.is_empty() {
        return "No voices reported by the speech platform.\n".to_string();
    }

    let mut out = String::new();
    for (i, voice) in voices.iter().enumerate() {
        let marker = if selected == Some(i) { '*' } else { ' ' };
        let _ = writeln!(out, "{} {:>2}  {} ({})", marker, i, voice.name, voice.language);
    }
    out
}

pub fn help_text() -> &'static str {
    "Type a letter (or any text) and press Enter to hear it.\n\
     Commands:\n\
     \x20 :grid           show the letter grid\n\
     \x20 :voices         list available voices\n\
     \x20 :voice <n>      select voice n\n\
     \x20 :rate <value>   set speech rate (1.0 = normal)\n\
     \x20 :pitch <value>  set speech pitch (1.0 = normal)\n\
     \x20 :repeat         repeat the last utterance\n\
     \x20 :test           speak a sample phrase\n\
     \x20 :auto           toggle speaking on tile selection\n\
     \x20 :help           show this help\n\
     \x20 :quit           exit"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letters::LETTERS;

    #[test]
    fn test_parse_plain_text_is_spoken() {
        assert_eq!(parse_command("Ä"), Command::Speak("Ä".to_string()));
        assert_eq!(
            parse_command("  Guten Tag  "),
            Command::Speak("Guten Tag".to_string())
        );
    }

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(parse_command(""), Command::Nothing);
        assert_eq!(parse_command("   "), Command::Nothing);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command(":repeat"), Command::Repeat);
        assert_eq!(parse_command(":r"), Command::Repeat);
        assert_eq!(parse_command(":test"), Command::TestVoice);
        assert_eq!(parse_command(":voices"), Command::ListVoices);
        assert_eq!(parse_command(":voice 2"), Command::SelectVoice(2));
        assert_eq!(parse_command(":rate 1.5"), Command::SetRate(1.5));
        assert_eq!(parse_command(":pitch 0.8"), Command::SetPitch(0.8));
        assert_eq!(parse_command(":auto"), Command::ToggleAutoSpeak);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn test_parse_bad_arguments() {
        assert!(matches!(parse_command(":voice"), Command::Invalid(_)));
        assert!(matches!(parse_command(":voice x"), Command::Invalid(_)));
        assert!(matches!(parse_command(":rate"), Command::Invalid(_)));
        assert!(matches!(parse_command(":rate fast"), Command::Invalid(_)));
        assert!(matches!(parse_command(":bogus"), Command::Invalid(_)));
    }

    #[test]
    fn test_render_grid_lists_every_tile() {
        let grid = render_grid(&LETTERS);
        assert!(grid.contains(" Q "));
        assert!(grid.contains(" ä "));
        assert!(grid.contains("Eszett"));
    }

    #[test]
    fn test_render_voices_marks_selection() {
        let voices = [
            VoiceDescriptor {
                name: "Anna".to_string(),
                language: "de-DE".to_string(),
            },
            VoiceDescriptor {
                name: "Markus".to_string(),
                language: "de-DE".to_string(),
            },
        ];
        let listing = render_voices(&voices, Some(1));
        assert!(listing.contains("*  1  Markus (de-DE)"));
        assert!(listing.contains("   0  Anna (de-DE)"));
    }

    #[test]
    fn test_render_voices_empty_list() {
        let listing = render_voices(&[], None);
        assert!(listing.contains("No voices"));
    }
}
