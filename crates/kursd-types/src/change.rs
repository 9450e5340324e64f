//! Day-over-day change computation.

/// Computes the percentage change from `previous` to `current`.
///
/// Returns `0.0` when `previous` is zero rather than dividing by zero;
/// a missing baseline reads as "no change".
///
/// # Example
///
/// ```
/// use kursd_types::change_percent;
///
/// assert_eq!(change_percent(100.0, 50.0), 100.0);
/// assert_eq!(change_percent(50.0, 100.0), -50.0);
/// assert_eq!(change_percent(42.0, 0.0), 0.0);
/// ```
#[must_use]
pub fn change_percent(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}
