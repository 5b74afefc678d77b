//! Tubesmith Core - Headless Content Generation Orchestration
//!
//! This crate provides the orchestration logic for tubesmith, completely
//! independent of any UI framework. It can drive a TUI, a web UI, or run
//! headless for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     UI Surfaces                         │
//! │        ┌─────────┐  ┌─────────┐  ┌────────────┐        │
//! │        │   TUI   │  │  WebUI  │  │  Headless  │        │
//! │        │(ratatui)│  │         │  │  (tests)   │        │
//! │        └────┬────┘  └────┬────┘  └──────┬─────┘        │
//! │             └────────────┴──────────────┘              │
//! │                         │                               │
//! │                  SurfaceEvent (up)                     │
//! │                 StudioMessage (down)                   │
//! │                         │                               │
//! └─────────────────────────┼───────────────────────────────┘
//!                           │
//! ┌─────────────────────────┼───────────────────────────────┐
//! │                  TUBESMITH CORE                          │
//! │  ┌──────────────────────┴─────────────────────────────┐ │
//! │  │                     Studio                          │ │
//! │  │  ┌───────────┐  ┌───────────┐  ┌────────────────┐  │ │
//! │  │  │  Prompts  │  │   State   │  │   Provider     │  │ │
//! │  │  │           │  │  Machine  │  │ (text + image) │  │ │
//! │  │  └───────────┘  └───────────┘  └────────────────┘  │ │
//! │  └─────────────────────────────────────────────────────┘ │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Studio`]: the orchestration struct that owns the UI state machine
//! - [`StudioMessage`]: messages sent from the Studio to UI surfaces
//! - [`SurfaceEvent`]: events sent from UI surfaces to the Studio
//! - [`VideoContent`]: the six-field text generation result
//! - [`ThumbnailSet`]: the three generated thumbnails, in fixed style order
//!
//! # Generation flow
//!
//! A submitted topic fans out into four concurrent provider calls (one text,
//! three images) with all-or-nothing join semantics: the first failure aborts
//! the batch and no partial result is ever surfaced. On success the Studio
//! passes through a fixed-duration interstitial before presenting results.
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework. It's pure business logic that can be used anywhere.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod messages;
pub mod prompts;
pub mod provider;
pub mod studio;

// Re-exports for convenience
pub use config::{ConfigError, StudioConfig};
pub use content::{download_filename, sanitize_topic, Thumbnail, ThumbnailSet, Topic, VideoContent};
pub use error::{BlankTopic, GenerationError, ProviderError};
pub use events::SurfaceEvent;
pub use messages::{StudioMessage, StudioPhase};
pub use prompts::{text_prompt, ThumbnailStyle};
pub use provider::{GeminiProvider, ImageGenerator, TextGenerator};
pub use studio::Studio;
