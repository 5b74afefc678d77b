//! Tubesmith TUI - Terminal interface for the YouTube SEO content generator
//!
//! This crate provides a full-screen terminal UI: a topic input, a loading
//! spinner while the generation batch is in flight, a short interstitial,
//! and result panels with copy-to-clipboard and thumbnail-save actions.
//!
//! # Architecture
//!
//! - **StudioClient**: embeds the headless Studio from `tubesmith-core`
//! - **DisplayState**: render model derived from `StudioMessage`s
//! - **Widgets**: score gauge and bordered result cards
//! - **Clipboard**: arboard-backed copy with per-item confirmation flashes

pub mod app;
pub mod clipboard;
pub mod display;
pub mod studio_client;
pub mod theme;
pub mod widgets;

pub use app::App;
