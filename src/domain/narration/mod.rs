pub mod narrator;

pub use narrator::{AudioError, Narrator, MAX_NARRATION_CHARS};
