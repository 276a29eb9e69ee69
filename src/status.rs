//! Process status presentation.
//!
//! Maps the coarse status keys reported by the collector ("Running",
//! "Sleeping", "Idle") to the label, emoji and color token the UI
//! renders as a status badge. Any key outside the table resolves to
//! the "Unknown" entry; an unrecognized status is an expected case,
//! not an error.

use egui::{Color32, RichText};

use crate::color::{CAUTION_AMBER, DIM_CYAN, MUTED_TEXT, OPERATIONAL_GREEN};

/// Display attributes for one process status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusPresentation {
    /// Human-readable label.
    pub label: &'static str,
    /// Emoji shown next to the label.
    pub emoji: &'static str,
    /// Color token for the badge text.
    pub color: Color32,
}

impl StatusPresentation {
    /// Render this presentation as a colored badge fragment.
    pub fn rich_text(&self) -> RichText {
        RichText::new(format!("{} {}", self.emoji, self.label)).color(self.color)
    }
}

const RUNNING: StatusPresentation = StatusPresentation {
    label: "Running",
    emoji: "🟢",
    color: OPERATIONAL_GREEN,
};

const SLEEPING: StatusPresentation = StatusPresentation {
    label: "Sleeping",
    emoji: "💤",
    color: DIM_CYAN,
};

const IDLE: StatusPresentation = StatusPresentation {
    label: "Idle",
    emoji: "⏸",
    color: CAUTION_AMBER,
};

const UNKNOWN: StatusPresentation = StatusPresentation {
    label: "Unknown",
    emoji: "❓",
    color: MUTED_TEXT,
};

/// Look up the presentation for a status key.
///
/// Total over all strings: unrecognized keys resolve to the "Unknown"
/// entry.
///
/// # Examples
/// ```
/// use vigil_format::status::presentation;
/// assert_eq!(presentation("Running").label, "Running");
/// assert_eq!(presentation("Zombie").label, "Unknown");
/// ```
pub fn presentation(status: &str) -> &'static StatusPresentation {
    match status {
        "Running" => &RUNNING,
        "Sleeping" => &SLEEPING,
        "Idle" => &IDLE,
        _ => &UNKNOWN,
    }
}

/// Build the status badge fragment for a status key.
///
/// The fragment carries both the resolved color token and the
/// "{emoji} {label}" text; the UI layer places it wherever a
/// process's state is shown.
pub fn badge(status: &str) -> RichText {
    presentation(status).rich_text()
}
