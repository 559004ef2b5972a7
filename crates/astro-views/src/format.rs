//! Numeric formatting helpers for summary cards

/// Format `value` in scientific notation with a fixed number of
/// fraction digits, e.g. `1.35e+12`
///
/// Matches the notation the shipped summary cards use for
/// astrophysical masses: mantissa in `[1, 10)`, explicit exponent
/// sign, no zero-padding of the exponent. Rounding the mantissa can
/// push it to 10.0; the carry moves into the exponent instead.
pub fn to_exponential(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return format!("{:.*}e+0", digits, 0.0);
    }

    let negative = value < 0.0;
    let magnitude = value.abs();
    let mut exponent = magnitude.log10().floor() as i32;
    let mut mantissa = magnitude / 10f64.powi(exponent);

    let scale = 10f64.powi(digits as i32);
    mantissa = (mantissa * scale).round() / scale;
    if mantissa >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    }

    let sign = if negative { "-" } else { "" };
    if exponent >= 0 {
        format!("{sign}{mantissa:.digits$}e+{exponent}")
    } else {
        format!("{sign}{mantissa:.digits$}e-{}", -exponent)
    }
}
