//! Vigil - presentation formatting helpers for the system monitor UI.
//!
//! This library turns raw metric values collected elsewhere into
//! display-ready output:
//! - Human-readable byte, rate, percentage, uptime and load strings
//! - Process status badges (label + emoji + color token)
//! - Usage severity classification for threshold-based highlighting
//!
//! Everything here is a pure, stateless function: no collection, no
//! I/O, no rendering. The UI layer decides where the output goes.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#![allow(clippy::must_use_candidate)]

pub mod color;
pub mod format;
pub mod severity;
pub mod status;

pub use format::{
    format_bytes, format_bytes_gb, format_load_average, format_percent, format_rate, format_uptime,
};
pub use severity::Severity;
pub use status::{badge, presentation, StatusPresentation};
