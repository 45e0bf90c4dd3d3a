//! Single-process chat simulator: an in-memory message hub fans messages
//! out to listeners, a background generator produces random traffic, and an
//! egui front end renders the transcript and injects user messages.

pub mod common;
pub mod config;
pub mod engine;
pub mod session;
pub mod ui;
