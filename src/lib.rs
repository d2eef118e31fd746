//! Product page → promotional summary → narrated MP3.
//!
//! A product page is fetched and its name and description extracted, a text
//! generation model writes a short promotional summary in the chosen
//! language, a human may edit it, and a speech service narrates the result
//! into an audio file offered for playback and download.

pub mod controllers;
pub mod domain;
pub mod error;
pub mod infrastructure;
