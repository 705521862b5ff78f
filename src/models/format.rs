//! Display strings for APY and TVL values.

pub const NOT_AVAILABLE: &str = "N/A";

/// `12.3456` -> `12.35%`, `1234.5` -> `1,234.50%`, `None` -> `N/A`.
pub fn format_apy(apy: Option<f64>) -> String {
    match apy {
        Some(value) => format!("{}%", group_thousands(&format!("{:.2}", round_half_away(value, 2)))),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// `1234567.8` -> `$1,234,568`, `None` -> `N/A`.
pub fn format_tvl(tvl: Option<f64>) -> String {
    match tvl {
        Some(value) => format!("${}", group_thousands(&format!("{:.0}", round_half_away(value, 0)))),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Rounds ties away from zero; `{:.N}` alone rounds them to even.
fn round_half_away(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

fn group_thousands(fixed: &str) -> String {
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0" after rounding reads as plain zero
    let sign = if grouped.chars().all(|c| c == '0' || c == ',')
        && frac_part.map_or(true, |f| f.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apy_uses_two_decimals_and_grouping() {
        assert_eq!(format_apy(Some(5.0)), "5.00%");
        assert_eq!(format_apy(Some(12.3456)), "12.35%");
        assert_eq!(format_apy(Some(1234.5)), "1,234.50%");
        assert_eq!(format_apy(Some(-3.2)), "-3.20%");
        assert_eq!(format_apy(None), "N/A");
    }

    #[test]
    fn tvl_rounds_to_whole_dollars() {
        assert_eq!(format_tvl(Some(0.0)), "$0");
        assert_eq!(format_tvl(Some(999.4)), "$999");
        assert_eq!(format_tvl(Some(1234567.8)), "$1,234,568");
        assert_eq!(format_tvl(Some(-0.2)), "$0");
        assert_eq!(format_tvl(None), "N/A");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format_tvl(Some(2.5)), "$3");
        assert_eq!(format_tvl(Some(1234.5)), "$1,235");
        assert_eq!(format_tvl(Some(-2.5)), "$-3");
        assert_eq!(format_apy(Some(0.125)), "0.13%");
    }
}
