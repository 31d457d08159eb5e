/// Shown in place of a value the service did not report.
pub const MISSING_VALUE: &str = "—";

/// Formats a percentage with `decimals` fractional digits and a `%` suffix.
///
/// The value is rounded half away from zero after scaling, so `12.345`
/// becomes `12.35%` even though its binary representation is slightly
/// below the midpoint. Absent or non-finite values yield [`MISSING_VALUE`].
pub fn format_pct(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{}%", format_ratio(Some(v), decimals)),
        _ => MISSING_VALUE.to_string(),
    }
}

/// Formats a plain number the same way as [`format_pct`], without the suffix.
///
/// Values too large to scale are printed as is, and a result that rounds to
/// zero never carries a minus sign.
pub fn format_ratio(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let factor = 10f64.powi(decimals as i32);
            let scaled = v * factor;
            let rounded = if scaled.is_finite() {
                scaled.round() / factor
            } else {
                v
            };
            // -0.0 == 0.0, so this also drops the sign
            let rounded = if rounded == 0.0 { 0.0 } else { rounded };
            format!("{rounded:.decimals$}")
        }
        _ => MISSING_VALUE.to_string(),
    }
}
