//! Display-side number formatting. Rounding happens here, never in the
//! calculator or filter.

/// Rounds to the nearest ruble and groups digits with narrow no-break
/// spaces, "92 476 560" style.
pub fn format_thousands(value: f64) -> String {
    let negative = value < -0.5;
    let digits = (value.abs().round() as u64).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{202F}');
        }
        out.push(ch);
    }
    out
}

/// Price badge text for catalog cards: `85_000_000` becomes "85.0".
pub fn millions(price: u64) -> String {
    format!("{:.1}", price as f64 / 1_000_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(format_thousands(92_476_560.0), "92\u{202F}476\u{202F}560");
        assert_eq!(format_thousands(1_000.0), "1\u{202F}000");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(0.0), "0");
    }

    #[test]
    fn rounds_to_nearest_ruble() {
        assert_eq!(format_thousands(145_833.333), "145\u{202F}833");
        assert_eq!(format_thousands(145_833.5), "145\u{202F}834");
    }

    #[test]
    fn negative_amounts_keep_the_sign() {
        assert_eq!(format_thousands(-1_500.0), "-1\u{202F}500");
        // Values that round to zero drop the sign.
        assert_eq!(format_thousands(-0.2), "0");
    }

    #[test]
    fn millions_uses_one_decimal() {
        assert_eq!(millions(85_000_000), "85.0");
        assert_eq!(millions(120_000_000), "120.0");
        assert_eq!(millions(72_500_000), "72.5");
    }
}
