use crate::models::Pool;

pub const CSV_HEADER: &str = "Project,Chain,Symbol,APY,TVL,Pool";
pub const CSV_FILENAME: &str = "defi_yields.csv";
pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8";

/// Renders rows with raw field values, newline-joined, no trailing newline.
/// Fields are written as-is without quoting; a missing number is left empty.
pub fn to_csv<'a, I>(pools: I) -> String
where
    I: IntoIterator<Item = &'a Pool>,
{
    let mut lines = vec![CSV_HEADER.to_string()];
    for pool in pools {
        lines.push(
            [
                pool.project.as_str(),
                pool.chain.as_str(),
                pool.symbol.as_str(),
                raw_number(pool.apy).as_str(),
                raw_number(pool.tvl_usd).as_str(),
                pool.pool.as_str(),
            ]
            .join(","),
        );
    }
    lines.join("\n")
}

fn raw_number(value: Option<f64>) -> String {
    value.map(number_to_string).unwrap_or_default()
}

/// Shortest round-trip form, in exponent notation below 1e-6 and from 1e21 up.
fn number_to_string(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return match value {
            v if v.is_nan() => "NaN".to_string(),
            v if v > 0.0 => "Infinity".to_string(),
            _ => "-Infinity".to_string(),
        };
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}
