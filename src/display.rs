//! Number formatting matching default stream output.

/// Significant digits printed for floating point values.
const PRECISION: i32 = 6;

/// Format `value` the way a default-configured output stream does (`%g` with
/// six significant digits): trailing zeros are dropped and very large or very
/// small magnitudes switch to scientific notation.
///
/// ```
/// use console_exercises::display::general;
/// assert_eq!(general(95.1), "95.1");
/// assert_eq!(general(1000.0 * 0.14 * 0.003), "0.42");
/// assert_eq!(general(1234567.0), "1.23457e+06");
/// ```
pub fn general(value: f64) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent has to be taken after rounding: 999999.5 prints as 1e+06.
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::general;

    #[test]
    fn test_general_fixed_range() {
        assert_eq!(general(100.0), "100");
        assert_eq!(general(95.1), "95.1");
        assert_eq!(general(100.0 - 9.8 * 16.0 / 2.0), "21.6");
        assert_eq!(general(0.003), "0.003");
        assert_eq!(general(-2.5), "-2.5");
        assert_eq!(general(1.0 / 3.0), "0.333333");
        assert_eq!(general(123456.0), "123456");
    }

    #[test]
    fn test_general_scientific_range() {
        assert_eq!(general(1234567.0), "1.23457e+06");
        assert_eq!(general(999999.5), "1e+06");
        assert_eq!(general(0.00001), "1e-05");
        assert_eq!(general(-0.000012345), "-1.2345e-05");
    }

    #[test]
    fn test_general_special_values() {
        assert_eq!(general(0.0), "0");
        assert_eq!(general(-0.0), "-0");
        assert_eq!(general(f64::INFINITY), "inf");
        assert_eq!(general(f64::NEG_INFINITY), "-inf");
        assert_eq!(general(f64::NAN), "nan");
    }
}
