//! Rupiah display formatting
//!
//! Amounts are shown without fractional digits and grouped by thousands
//! with a period, e.g. `1.234.567`.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?").expect("valid numeric prefix pattern")
});

/// Anything that can be shown as a rupiah amount.
pub trait RupiahAmount {
    /// Numeric value; `NaN` or infinities are treated as zero by the formatter.
    fn to_amount(&self) -> f64;
}

macro_rules! impl_numeric_amount {
    ($($t:ty),*) => {
        $(
            impl RupiahAmount for $t {
                fn to_amount(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_numeric_amount!(f64, f32, i32, i64, u32, u64, usize);

impl RupiahAmount for str {
    fn to_amount(&self) -> f64 {
        parse_leading_number(self).unwrap_or(0.0)
    }
}

impl RupiahAmount for &str {
    fn to_amount(&self) -> f64 {
        (**self).to_amount()
    }
}

impl RupiahAmount for String {
    fn to_amount(&self) -> f64 {
        self.as_str().to_amount()
    }
}

impl<T: RupiahAmount> RupiahAmount for Option<T> {
    fn to_amount(&self) -> f64 {
        self.as_ref().map(RupiahAmount::to_amount).unwrap_or(0.0)
    }
}

/// Parse the longest numeric prefix of `input`, ignoring leading whitespace.
///
/// `"12abc"` yields `12.0`, `"abc"` yields `None`.
pub fn parse_leading_number(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    NUMERIC_PREFIX
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Format an amount with Indonesian digit grouping and no decimals.
///
/// Never fails: non-numeric input formats as `"0"`.
pub fn format_rupiah<A: RupiahAmount>(amount: A) -> String {
    let value = amount.to_amount();
    if !value.is_finite() {
        return "0".to_string();
    }

    let rounded = value.round();
    if rounded == 0.0 {
        return "0".to_string();
    }

    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }

    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_thousands() {
        assert_eq!(format_rupiah(1234567), "1.234.567");
        assert_eq!(format_rupiah(15000), "15.000");
        assert_eq!(format_rupiah(999), "999");
        assert_eq!(format_rupiah(1000), "1.000");
        assert_eq!(format_rupiah(100000), "100.000");
    }

    #[test]
    fn test_zero_and_invalid_input() {
        assert_eq!(format_rupiah(0), "0");
        assert_eq!(format_rupiah("abc"), "0");
        assert_eq!(format_rupiah(""), "0");
        assert_eq!(format_rupiah(f64::NAN), "0");
        assert_eq!(format_rupiah(f64::INFINITY), "0");
        assert_eq!(format_rupiah(None::<f64>), "0");
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(format_rupiah("1234567"), "1.234.567");
        assert_eq!(format_rupiah("  25000"), "25.000");
        assert_eq!(format_rupiah("12abc"), "12");
        assert_eq!(format_rupiah(String::from("1.5e3")), "1.500");
    }

    #[test]
    fn test_rounds_to_whole_rupiah() {
        assert_eq!(format_rupiah(1234.5), "1.235");
        assert_eq!(format_rupiah(1234.4), "1.234");
        assert_eq!(format_rupiah(0.4), "0");
        assert_eq!(format_rupiah(-0.4), "0");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_rupiah(-1234567), "-1.234.567");
        assert_eq!(format_rupiah(-5), "-5");
    }

    #[test]
    fn test_same_input_same_output() {
        for value in [0.0, 1.0, 1500.0, 30000.0, 1_000_000.0] {
            assert_eq!(format_rupiah(value), format_rupiah(value));
        }
    }
}
