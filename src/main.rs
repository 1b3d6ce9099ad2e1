//! Lernapp main entry point
//!
//! Reads one line of input at a time and drives the trainer: plain text
//! is spoken, `:commands` change voice, rate and pitch. Settings are
//! persisted on every change and restored at startup.

use lernapp::speech::create_platform;
use lernapp::state::settings::FileStore;
use lernapp::state::Trainer;
use lernapp::ui::{self, Command};
use lernapp::{LernappError, Result};
use log::{error, info};
use std::io::{self, BufRead, Write};
use std::process;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let debug_mode = args.iter().any(|arg| arg == "--debug" || arg == "-d");

    // Initialize logger
    if debug_mode {
        // Debug mode: write to lernapp.log file
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("lernapp.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open lernapp.log for debug logging: {}", e);
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "lernapp version {} starting (debug mode, logging to lernapp.log)",
            lernapp::VERSION
        );
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .init();
    }

    if let Err(e) = run() {
        error!("Fatal error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let platform = match create_platform() {
        Ok(platform) => Some(platform),
        Err(e) => {
            // Equivalent of the blocking "your browser cannot speak"
            // notification: announce once, then run without speech
            println!("Speech is not available on this system: {}", e);
            println!("Continuing without speech output.");
            None
        }
    };

    let store = FileStore::open(FileStore::default_path());
    info!("Settings store at {:?}", store.path());

    let mut trainer = Trainer::new(platform, Box::new(store));

    println!(
        "lernapp {} - type a letter to hear it, :help for commands",
        lernapp::VERSION
    );
    print!("{}", ui::render_grid(trainer.table().entries()));

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match ui::parse_command(&line) {
            Command::Nothing => {}
            Command::Speak(text) => {
                let result = match trainer.table().find(&text) {
                    Some(index) => trainer.speak_tile(index),
                    None => trainer.speak_text(&text),
                };
                if report(result) {
                    if let Some(spoken) = trainer.last_spoken() {
                        println!("Now: {} -> {}", text, spoken);
                    }
                }
            }
            Command::Repeat => {
                match trainer.last_spoken() {
                    Some(text) => println!("Again: {}", text),
                    None => println!("Nothing to repeat yet."),
                }
                report(trainer.repeat_last());
            }
            Command::TestVoice => {
                report(trainer.test_voice());
            }
            Command::ListVoices => {
                trainer.refresh_voices();
                print!(
                    "{}",
                    ui::render_voices(trainer.voices(), trainer.selected_voice_index())
                );
            }
            Command::SelectVoice(index) => {
                if report(trainer.select_voice(index)) {
                    if let Some(voice) = trainer.current_voice() {
                        println!("Voice: {} ({})", voice.name, voice.language);
                    }
                }
            }
            Command::SetRate(value) => {
                if report(trainer.set_rate(value)) {
                    println!("Rate: {}", trainer.rate());
                }
            }
            Command::SetPitch(value) => {
                if report(trainer.set_pitch(value)) {
                    println!("Pitch: {}", trainer.pitch());
                }
            }
            Command::ToggleAutoSpeak => {
                let on = trainer.toggle_auto_speak();
                println!("Auto-speak {}", if on { "on" } else { "off" });
            }
            Command::ShowGrid => {
                print!("{}", ui::render_grid(trainer.table().entries()));
            }
            Command::Help => {
                println!("{}", ui::help_text());
            }
            Command::Quit => break,
            Command::Invalid(message) => {
                println!("{}", message);
            }
        }
    }

    Ok(())
}

/// Print an action's failure, if any; returns true on success
///
/// A missing speech engine aborts the single action with a blocking
/// acknowledgement, everything else is shown and the loop goes on.
fn report(result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(LernappError::SpeechUnavailable) => {
            println!("Speech output is not available on this system. Press Enter.");
            let mut ack = String::new();
            let _ = io::stdin().read_line(&mut ack);
            false
        }
        Err(e) => {
            println!("Error: {}", e);
            false
        }
    }
}
