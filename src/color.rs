//! Color palette for the monitor UI.
//!
//! Named color tokens shared by the badge and severity helpers and by
//! the UI layer itself, so every panel draws from one vocabulary.

use egui::Color32;

/// Window background.
pub const VOID_BLACK: Color32 = Color32::from_rgb(10, 10, 12);

/// Panel and table-row background.
pub const PANEL_DARK: Color32 = Color32::from_rgb(24, 26, 30);

/// Borders and separators.
pub const INTERFACE_GRAY: Color32 = Color32::from_rgb(58, 62, 70);

/// Secondary text and unknown/indeterminate states.
pub const MUTED_TEXT: Color32 = Color32::from_rgb(128, 134, 144);

/// Primary text.
pub const DATA_WHITE: Color32 = Color32::from_rgb(230, 235, 240);

/// Accent for interactive elements.
pub const TACTICAL_CYAN: Color32 = Color32::from_rgb(0, 200, 255);

/// De-emphasized accent (sleeping processes, inactive tabs).
pub const DIM_CYAN: Color32 = Color32::from_rgb(0, 120, 160);

/// Healthy / running / low-usage green.
pub const OPERATIONAL_GREEN: Color32 = Color32::from_rgb(0, 230, 140);

/// Warning amber for elevated but tolerable values.
pub const CAUTION_AMBER: Color32 = Color32::from_rgb(255, 184, 48);

/// High-usage orange, one step below critical.
pub const SIGNAL_ORANGE: Color32 = Color32::from_rgb(255, 122, 36);

/// Critical red.
pub const ALERT_RED: Color32 = Color32::from_rgb(255, 72, 72);
