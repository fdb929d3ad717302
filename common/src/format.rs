//! Turning sample-data values into display text.
//!
//! The editor was designed around JavaScript's loose conversions: a table cell
//! tagged `currency` shows `$0.00` for anything that is not a number, a bound
//! number shows as `10`, never `10.0`. The helpers here reproduce those rules on
//! top of `serde_json::Value`.

use num_format::{Locale, ToFormattedString};
use serde_json::Value;

/// Renders a JSON value the way it appears inside an element.
///
/// Strings are shown verbatim, `null` as nothing, numbers without a trailing
/// `.0`, and containers as compact JSON.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                format_number(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Formats a float the way JavaScript's `String(n)` does for everyday values.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        // covers -0
        "0".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

/// JavaScript `Number(value)`.
///
/// Returns `NaN` where JavaScript would; callers decide what `NaN` means.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [single] => match single {
                // Number([null]) is 0, Number([[]]) recurses through toString
                Value::Null => 0.0,
                other => coerce_number(other),
            },
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        return u64::from_str_radix(hex, 16)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }
    // Rust accepts "inf" and "nan" spellings that JavaScript rejects.
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Formats a cell value as US dollars: `$1,500.00`.
///
/// Anything that does not coerce to a number is treated as zero.
pub fn format_currency(value: &Value) -> String {
    let amount = coerce_number(value);
    format_usd(if amount.is_nan() { 0.0 } else { amount })
}

/// en-US currency formatting with two decimals and thousands separators.
pub fn format_usd(amount: f64) -> String {
    if amount.is_infinite() {
        return if amount > 0.0 { "$∞" } else { "-$∞" }.to_string();
    }
    let cents = decimal_cents(amount.abs());
    let whole = cents / 100;
    let fraction = cents % 100;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}${}.{:02}",
        sign,
        whole.to_formatted_string(&Locale::en),
        fraction
    )
}

/// Whole cents of a non-negative amount, rounding half away from zero on the
/// shortest decimal spelling of the float, so `1.005` gives 101.
fn decimal_cents(amount: f64) -> u128 {
    let text = amount.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let Ok(whole) = whole.parse::<u128>() else {
        return (amount * 100.0).round() as u128;
    };
    let mut digits = fraction
        .bytes()
        .map(|b| u128::from(b - b'0'))
        .chain(std::iter::repeat(0));
    let mut next = || digits.next().unwrap_or(0);
    let (tenths, hundredths, rest) = (next(), next(), next());
    whole * 100 + tenths * 10 + hundredths + u128::from(rest >= 5)
}
