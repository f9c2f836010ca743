//! Byte/megabyte conversions for report output
//!
//! Two deliberately different conversions exist. The CSV file name embeds
//! per-tier sizes as whole megabytes (floored), while the console memory
//! section prints exact megabyte values. Callers must not mix them up, so
//! both live here under distinct names.

/// Convert bytes to whole megabytes, flooring the result.
///
/// Used for the CSV file-name component.
///
/// # Examples
///
/// ```
/// use tierplan_common::units::megabytes_floor;
///
/// assert_eq!(megabytes_floor(2_500_000.0, 1_000_000), 2);
/// assert_eq!(megabytes_floor(999_999.0, 1_000_000), 0);
/// assert_eq!(megabytes_floor(1_000_000.0, 1_000_000), 1);
/// ```
pub fn megabytes_floor(bytes: f64, bytes_per_megabyte: u64) -> u64 {
    (bytes / bytes_per_megabyte as f64).floor() as u64
}

/// Convert bytes to megabytes without rounding.
///
/// Used for the console memory-consumption section.
///
/// # Examples
///
/// ```
/// use tierplan_common::units::megabytes_exact;
///
/// assert_eq!(megabytes_exact(812_500_000.0, 1_000_000), 812.5);
/// assert_eq!(megabytes_exact(500_000.0, 1_000_000), 0.5);
/// ```
pub fn megabytes_exact(bytes: f64, bytes_per_megabyte: u64) -> f64 {
    bytes / bytes_per_megabyte as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_truncates() {
        assert_eq!(megabytes_floor(1_999_999.0, 1_000_000), 1);
        assert_eq!(megabytes_floor(0.0, 1_000_000), 0);
        assert_eq!(megabytes_floor(2_000_000_000.0, 1_000_000), 2000);
    }

    #[test]
    fn test_exact_keeps_fraction() {
        assert_eq!(megabytes_exact(1_999_999.0, 1_000_000), 1.999999);
        assert_eq!(megabytes_exact(0.0, 1_000_000), 0.0);
    }

    #[test]
    fn test_floor_and_exact_disagree_on_fractions() {
        let bytes = 1_500_000.0;
        assert_eq!(megabytes_floor(bytes, 1_000_000), 1);
        assert_eq!(megabytes_exact(bytes, 1_000_000), 1.5);
    }

    #[test]
    fn test_custom_factor() {
        // binary-megabyte override
        assert_eq!(megabytes_floor(2_097_152.0, 1_048_576), 2);
        assert_eq!(megabytes_exact(1_572_864.0, 1_048_576), 1.5);
    }
}
