//! US-dollar display strings

/// Whole-dollar amount with thousands separators, e.g. `$3,725`
pub fn format_whole(amount: f64) -> String {
    let amount = finite_or_zero(amount);
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&format!("{:.0}", rounded.abs())))
}

/// Dollars and cents, e.g. `$1,234.50` or `-$12.00`
pub fn format_usd(amount: f64) -> String {
    let amount = finite_or_zero(amount);
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

fn finite_or_zero(amount: f64) -> f64 {
    if amount.is_finite() { amount } else { 0.0 }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole() {
        assert_eq!(format_whole(0.0), "$0");
        assert_eq!(format_whole(25.0), "$25");
        assert_eq!(format_whole(3724.6), "$3,725");
        assert_eq!(format_whole(1_234_567.0), "$1,234,567");
        assert_eq!(format_whole(-1500.0), "-$1,500");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(250.0), "$250.00");
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(999_999.999), "$1,000,000.00");
        assert_eq!(format_usd(-12.0), "-$12.00");
        assert_eq!(format_usd(-0.001), "$0.00");
    }

    #[test]
    fn test_non_finite_amounts() {
        assert_eq!(format_usd(f64::INFINITY), "$0.00");
        assert_eq!(format_usd(f64::NAN), "$0.00");
        assert_eq!(format_whole(f64::NEG_INFINITY), "$0");
    }
}
