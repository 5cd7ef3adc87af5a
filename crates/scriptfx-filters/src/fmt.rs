//! Locale-independent numeric formatting for command strings.
//!
//! Stored presets are plain text and must decode to the same values on any
//! machine, so formatting is fixed to C-locale `%g` semantics: six
//! significant digits, trailing zeros trimmed, scientific notation only for
//! very large or very small magnitudes. That keeps typical slider values
//! short (`0.5` → `50`, not `50.000000`) while round-tripping within print
//! precision.

/// Formats a float the way C's `%g` does (precision 6).
pub fn format_g(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    // Exponent of the value after rounding to 6 significant digits.
    let sci = format!("{value:.5e}");
    let exp: i32 = match sci.split_once('e') {
        Some((_, e)) => e.parse().unwrap_or(0),
        None => 0,
    };

    if (-4..6).contains(&exp) {
        let precision = (5 - exp).max(0) as usize;
        let fixed = format!("{value:.precision$}");
        trim_zeros(&fixed).to_string()
    } else {
        let (mantissa, _) = sci.split_once('e').unwrap_or((sci.as_str(), ""));
        let mantissa = trim_zeros(mantissa);
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    }
}

/// Formats a `[-1, 1]` parameter as its percent-scaled wire value.
///
/// The scripts consume adjust-colors style amounts as percentages, so the
/// encoder scales here rather than inside each script.
pub fn format_pct(value: f32) -> String {
    format_g(f64::from(value) * 100.0)
}

/// Inverse of [`format_pct`] for the decode path.
pub fn unscale_pct(wire: f32) -> f32 {
    (f64::from(wire) / 100.0) as f32
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
