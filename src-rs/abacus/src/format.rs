//! Number formatting for results

/// Integral values below this magnitude print without a fractional part
const INTEGER_DISPLAY_LIMIT: f64 = 1e15;

/// Decimal places kept before trailing zeros are trimmed
const DECIMAL_PLACES: usize = 10;

/// Formats a result for people to read
///
/// Integral values below 1e15 print without a fractional part. Other values
/// print with up to 10 decimal places with trailing zeros trimmed, and
/// non-zero values too small to show a digit that way print in scientific
/// notation. The integer part is grouped with thousands separators unless
/// `raw` is set.
pub fn format_number(value: f64, raw: bool) -> String {
    let plain = format_plain(value);
    if raw || plain.contains('e') {
        plain
    } else {
        with_separators(&plain)
    }
}

fn format_plain(value: f64) -> String {
    let formatted = if value.fract() == 0.0 && value.abs() < INTEGER_DISPLAY_LIMIT {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.precision$}", precision = DECIMAL_PLACES);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    };

    let rounds_to_zero = formatted == "0" || formatted == "-0";
    if rounds_to_zero && value != 0.0 {
        format!("{value:e}")
    } else if rounds_to_zero {
        "0".to_string()
    } else {
        formatted
    }
}

fn with_separators(plain: &str) -> String {
    let (sign, unsigned) = plain
        .strip_prefix('-')
        .map_or(("", plain), |unsigned| ("-", unsigned));

    let (integer_part, fraction_part) = unsigned
        .find('.')
        .map_or((unsigned, ""), |dot| unsigned.split_at(dot));

    let digit_count = integer_part.len();
    let mut grouped = String::with_capacity(digit_count + digit_count / 3);
    for (i, digit) in integer_part.chars().enumerate() {
        if i > 0 && (digit_count - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped}{fraction_part}")
}
