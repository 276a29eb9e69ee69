//! Usage severity classification.
//!
//! Buckets a usage percentage into one of four ordered severity
//! classes. The UI uses the class name for styling hooks and the
//! color for direct highlighting.

use std::fmt;

use egui::Color32;

use crate::color::{ALERT_RED, CAUTION_AMBER, OPERATIONAL_GREEN, SIGNAL_ORANGE};

/// Ordered severity of a usage metric, lowest to highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Below 30%.
    Low,
    /// 30% to just under 60%.
    Medium,
    /// 60% to just under 90%.
    High,
    /// 90% and above.
    Critical,
}

impl Severity {
    /// Classify a usage percentage.
    ///
    /// Thresholds are evaluated high-to-low with inclusive lower
    /// bounds; every value maps to a class, including values outside
    /// [0, 100].
    ///
    /// # Examples
    /// ```
    /// use vigil_format::Severity;
    /// assert_eq!(Severity::from_usage(95.0), Severity::Critical);
    /// assert_eq!(Severity::from_usage(45.0), Severity::Medium);
    /// ```
    pub fn from_usage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::Critical
        } else if percentage >= 60.0 {
            Self::High
        } else if percentage >= 30.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Class name for styling hooks.
    pub fn class(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Highlight color for this severity.
    pub fn color(self) -> Color32 {
        match self {
            Self::Low => OPERATIONAL_GREEN,
            Self::Medium => CAUTION_AMBER,
            Self::High => SIGNAL_ORANGE,
            Self::Critical => ALERT_RED,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(Severity::from_usage(90.0), Severity::Critical);
        assert_eq!(Severity::from_usage(89.999), Severity::High);
        assert_eq!(Severity::from_usage(60.0), Severity::High);
        assert_eq!(Severity::from_usage(59.999), Severity::Medium);
        assert_eq!(Severity::from_usage(30.0), Severity::Medium);
        assert_eq!(Severity::from_usage(29.999), Severity::Low);
    }

    #[test]
    fn test_out_of_range_values() {
        assert_eq!(Severity::from_usage(150.0), Severity::Critical);
        assert_eq!(Severity::from_usage(100.0), Severity::Critical);
        assert_eq!(Severity::from_usage(0.0), Severity::Low);
        assert_eq!(Severity::from_usage(-5.0), Severity::Low);
    }

    #[test]
    fn test_monotonic_in_usage() {
        let samples = [-5.0, 0.0, 29.999, 30.0, 59.999, 60.0, 89.999, 90.0, 150.0];
        for pair in samples.windows(2) {
            assert!(Severity::from_usage(pair[0]) <= Severity::from_usage(pair[1]));
        }
    }

    #[test]
    fn test_class_names() {
        assert_eq!(Severity::Low.class(), "low");
        assert_eq!(Severity::Medium.class(), "medium");
        assert_eq!(Severity::High.class(), "high");
        assert_eq!(Severity::Critical.class(), "critical");
        assert_eq!(Severity::Critical.to_string(), "critical");
    }

    #[test]
    fn test_severity_colors_distinct() {
        assert_ne!(Severity::Low.color(), Severity::High.color());
        assert_ne!(Severity::High.color(), Severity::Critical.color());
        assert_ne!(Severity::Medium.color(), Severity::Critical.color());
    }
}
