//! Lenient coercion of raw form values
//!
//! Form fields arrive as strings. A field that is empty or does not start with
//! a number counts as 0, and trailing junk after a numeric prefix is ignored
//! (`"1500abc"` reads as 1500). Integer fields drop any fractional part.

/// Parse the leading integer of a form value, or 0 if there is none.
///
/// `" 42.9kg"` reads as 42 and `"-7"` as -7. Anything without leading
/// digits reads as 0.
pub fn int_or_zero(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, rest) = split_sign(s);

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return 0;
    }

    // Saturate rather than fail on absurdly long digit runs
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    if negative { -magnitude } else { magnitude }
}

/// Parse the leading decimal number of a form value, or 0.0 if there is none.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent: `"12.5%"` reads as 12.5, `".5"` as 0.5, `"2e3x"` as 2000.
pub fn float_or_zero(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    let value = s[..end].parse::<f64>().unwrap_or(0.0);
    if value.is_finite() { value } else { 0.0 }
}

/// Clamp a parsed amount to a finite, non-negative value. NaN and infinities become 0.
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}
