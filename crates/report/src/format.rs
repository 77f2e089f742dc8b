//! Display formatters for the narrative. Undefined values (NaN) render as
//! the zero form of each format rather than propagating into the text.

/// Two decimal places with a literal `%` suffix.
pub fn fmt_pct(x: f64) -> String {
    if x.is_nan() {
        "0.00%".to_string()
    } else {
        format!("{x:.2}%")
    }
}

/// Dollar amount: two decimals below 100, zero decimals with thousands
/// grouping at 100 and above.
pub fn fmt_money(x: f64) -> String {
    if x.is_nan() {
        "$0.00".to_string()
    } else if x.abs() >= 100.0 {
        format!("${}", group_thousands(x))
    } else {
        format!("${x:.2}")
    }
}

/// Whole-number count with thousands grouping.
pub fn fmt_count(x: f64) -> String {
    if x.is_nan() {
        "0".to_string()
    } else {
        group_thousands(x)
    }
}

fn group_thousands(x: f64) -> String {
    let rounded = format!("{x:.0}");
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(d) => ("-", d),
        None => ("", rounded.as_str()),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pct() {
        assert_eq!(fmt_pct(5.0), "5.00%");
        assert_eq!(fmt_pct(0.1234), "0.12%");
        assert_eq!(fmt_pct(f64::NAN), "0.00%");
        assert_eq!(fmt_pct(0.0), "0.00%");
    }

    #[test]
    fn test_money_two_decimal_below_hundred() {
        assert_eq!(fmt_money(42.5), "$42.50");
        assert_eq!(fmt_money(0.005), "$0.01");
        assert_eq!(fmt_money(99.999), "$100.00");
        assert_eq!(fmt_money(2.74), "$2.74");
    }

    #[test]
    fn test_money_grouped_at_hundred_and_above() {
        assert_eq!(fmt_money(100.0), "$100");
        assert_eq!(fmt_money(1234.9), "$1,235");
        assert_eq!(fmt_money(1_000_000.4), "$1,000,000");
        assert_eq!(fmt_money(-250.0), "$-250");
    }

    #[test]
    fn test_money_undefined() {
        assert_eq!(fmt_money(f64::NAN), "$0.00");
    }

    #[test]
    fn test_count() {
        assert_eq!(fmt_count(0.0), "0");
        assert_eq!(fmt_count(429.0), "429");
        assert_eq!(fmt_count(12_345.0), "12,345");
        assert_eq!(fmt_count(1_234_567.0), "1,234,567");
        assert_eq!(fmt_count(f64::NAN), "0");
    }
}
