//! Lernapp - terminal pronunciation trainer for German letters
//!
//! Shows a grid of letters (upper/lowercase pairs, umlauts, eszett) and
//! speaks them, or arbitrary typed text, through the host platform's
//! text-to-speech engine. Voice, rate and pitch survive restarts.

pub mod error;
pub mod letters;
pub mod speech;
pub mod state;
pub mod ui;

pub use error::{LernappError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "lernapp";
