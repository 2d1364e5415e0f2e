//! Core types for the foss-north 2025 tools.
//!
//! This crate holds everything the calendar generator needs and the bits the
//! ticket converter shares with it:
//! - `speaker`, `slot` and `event` turn `speakers.yaml` into calendar events
//! - `ics` renders those events
//! - `config` and `logging` are shared by both binaries

pub mod conference;
pub mod config;
pub mod error;
pub mod event;
pub mod fixed;
pub mod ics;
pub mod logging;
pub mod slot;
pub mod speaker;
pub mod uid;

pub use conference::{ConferenceDay, HalfHours};
pub use error::{FossNorthError, FossNorthResult};
pub use event::{ConferenceEvent, build_events, sort_events};
