//! Formatting utility functions.
//!
//! Provides human-readable formatting for the raw metric values the
//! monitor collects: byte counts, transfer rates, percentages, uptime
//! and load averages.

/// Unit symbols for byte scaling, in ascending order of magnitude.
const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Bytes per gigabyte (1024^3).
const BYTES_PER_GB: f64 = 1_073_741_824.0;

/// Format a byte count as a human-readable string.
///
/// Scales through B/KB/MB/GB/TB, clamping at TB, and always renders
/// two decimal digits.
///
/// # Examples
/// ```
/// use vigil_format::format::format_bytes;
/// assert_eq!(format_bytes(1536.0), "1.50 KB");
/// assert_eq!(format_bytes(1_073_741_824.0), "1.00 GB");
/// ```
pub fn format_bytes(bytes: f64) -> String {
    let mut value = bytes;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, BYTE_UNITS[unit])
}

/// Format a byte-per-second rate as a human-readable string.
///
/// Same scaling as [`format_bytes`] with a "/s" suffix.
///
/// # Examples
/// ```
/// use vigil_format::format::format_rate;
/// assert_eq!(format_rate(1048576.0), "1.00 MB/s");
/// ```
pub fn format_rate(bytes_per_sec: f64) -> String {
    format!("{}/s", format_bytes(bytes_per_sec))
}

/// Format a byte count in gigabytes with one decimal digit.
///
/// No unit scaling: the value is always expressed in GB, however
/// large or small. Used for totals that the UI wants on a fixed scale
/// (e.g. memory columns that should stay comparable across rows).
///
/// # Examples
/// ```
/// use vigil_format::format::format_bytes_gb;
/// assert_eq!(format_bytes_gb(1_073_741_824.0), "1.0 GB");
/// ```
pub fn format_bytes_gb(bytes: f64) -> String {
    format!("{:.1} GB", bytes / BYTES_PER_GB)
}

/// Format a percentage with one decimal digit.
///
/// No clamping: out-of-range values are rendered as-is.
///
/// # Examples
/// ```
/// use vigil_format::format::format_percent;
/// assert_eq!(format_percent(42.0), "42.0%");
/// ```
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Format an uptime in seconds as "{days}d {hours}h {minutes}m".
///
/// Floor-division decomposition; the seconds remainder is discarded.
/// Negative inputs follow the same floor arithmetic (`div_euclid`),
/// which keeps the output deterministic rather than clamping.
///
/// # Examples
/// ```
/// use vigil_format::format::format_uptime;
/// assert_eq!(format_uptime(90061), "1d 1h 1m");
/// ```
pub fn format_uptime(seconds: i64) -> String {
    let days = seconds.div_euclid(86400);
    let rem = seconds.rem_euclid(86400);
    let hours = rem / 3600;
    let minutes = (rem % 3600) / 60;
    format!("{days}d {hours}h {minutes}m")
}

/// Format a 1/5/15-minute load average triple, two decimals each.
///
/// # Examples
/// ```
/// use vigil_format::format::format_load_average;
/// assert_eq!(format_load_average([1.5, 1.25, 1.0]), "1.50 1.25 1.00");
/// ```
pub fn format_load_average(load: [f64; 3]) -> String {
    format!("{:.2} {:.2} {:.2}", load[0], load[1], load[2])
}
