//! Significant-digit number formatting.
//!
//! The factor line uses C's `%.4g` presentation: four significant digits,
//! trailing zeros trimmed, and scientific notation once the decimal exponent
//! leaves `[-4, 4)`. Rust's formatter has no general format, so we build it
//! from the scientific rendering.

/// Format the factor sequence as a single tab-separated line.
///
/// Empty input produces an empty string (printed as a bare newline).
pub fn format_factor_line(factors: &[f64]) -> String {
    factors
        .iter()
        .map(|&f| format_sig(f, 4))
        .collect::<Vec<_>>()
        .join("\t")
}

/// Format `value` with `digits` significant digits, like `printf("%.Ng")`.
///
/// Specials follow printf: `nan`, `inf`, `-inf`. The exponent is signed and
/// at least two digits (`1e+06`, `1.234e-05`).
pub fn format_sig(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let digits = digits.max(1);

    // Round to the target digit count first; the exponent read back from the
    // scientific rendering is the post-rounding one, which decides the
    // presentation (e.g. 9999.6 rounds up into the scientific range).
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = sci
        .split_once('e')
        .expect("scientific format always contains an exponent");
    let exp: i32 = exp.parse().expect("exponent is a valid integer");

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Strip trailing fractional zeros, and the dot itself if nothing remains.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_printf_g_on_plain_values() {
        assert_eq!(format_sig(0.0, 4), "0");
        assert_eq!(format_sig(0.5, 4), "0.5");
        assert_eq!(format_sig(2.0, 4), "2");
        assert_eq!(format_sig(-2.5, 4), "-2.5");
        assert_eq!(format_sig(1000.0, 4), "1000");
        assert_eq!(format_sig(0.3322308856, 4), "0.3322");
    }

    #[test]
    fn switches_to_scientific_outside_the_fixed_range() {
        assert_eq!(format_sig(1234567.0, 4), "1.235e+06");
        assert_eq!(format_sig(100000.0, 4), "1e+05");
        assert_eq!(format_sig(1e-5, 4), "1e-05");
        assert_eq!(format_sig(-1.2349e-5, 4), "-1.235e-05");
        assert_eq!(format_sig(1e100, 4), "1e+100");
    }

    #[test]
    fn smallest_fixed_magnitude_stays_fixed() {
        assert_eq!(format_sig(0.0001234, 4), "0.0001234");
    }

    #[test]
    fn rounding_can_bump_into_scientific() {
        assert_eq!(format_sig(9999.6, 4), "1e+04");
    }

    #[test]
    fn specials_follow_printf() {
        assert_eq!(format_sig(f64::NAN, 4), "nan");
        assert_eq!(format_sig(f64::INFINITY, 4), "inf");
        assert_eq!(format_sig(f64::NEG_INFINITY, 4), "-inf");
    }

    #[test]
    fn factor_line_is_tab_separated() {
        let line = format_factor_line(&[0.33223, 0.49779]);
        assert_eq!(line, "0.3322\t0.4978");
    }

    #[test]
    fn empty_factor_list_formats_to_empty_line() {
        assert_eq!(format_factor_line(&[]), "");
    }
}
