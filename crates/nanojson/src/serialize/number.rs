//! Canonical number text.

/// 2^53: every integer up to this magnitude has an exact `f64` representation.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Appends `n` as JSON number text.
///
/// Integral values up to [`MAX_SAFE_INTEGER`] in magnitude render without a
/// decimal point or exponent. Everything else uses the shortest text that
/// parses back to the same `f64`. Non-finite values have no JSON form and
/// render as `null`.
pub fn write_f64(out: &mut String, n: f64) {
    if !n.is_finite() {
        out.push_str("null");
        return;
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        if n == 0.0 && n.is_sign_negative() {
            out.push_str("-0");
            return;
        }
        let mut buf = itoa::Buffer::new();
        out.push_str(buf.format(n as i64));
        return;
    }
    let mut buf = ryu::Buffer::new();
    out.push_str(buf.format_finite(n));
}
