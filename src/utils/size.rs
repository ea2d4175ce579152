//! Size formatting utilities.
//!
//! Sizes are displayed with decimal (1000-based) units, matching what most
//! file managers and disk tools report.

const KILO: u64 = 1_000;
const MEGA: u64 = 1_000_000;
const GIGA: u64 = 1_000_000_000;

/// Format a byte count as a human-readable string.
///
/// Values below 1000 are printed as a whole number of bytes. Larger values
/// are scaled to KB, MB or GB with two decimal places; anything from one
/// gigabyte upwards stays in GB.
///
/// # Examples
///
/// ```
/// # use autoclean::utils::format_size;
/// assert_eq!(format_size(999), "999 B");
/// assert_eq!(format_size(1_500_000), "1.50 MB");
/// ```
#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes < KILO {
        format!("{bytes} B")
    } else if bytes < MEGA {
        format!("{:.2} KB", scaled(bytes, KILO))
    } else if bytes < GIGA {
        format!("{:.2} MB", scaled(bytes, MEGA))
    } else {
        format!("{:.2} GB", scaled(bytes, GIGA))
    }
}

#[allow(clippy::cast_precision_loss)]
fn scaled(bytes: u64, unit: u64) -> f64 {
    bytes as f64 / unit as f64
}
