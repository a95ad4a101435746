//! Text rendering of values.

use crate::model::{iso_string, Value};

/// Render a value as text
///
/// Strings come back unchanged. Dates use ISO-8601 UTC with milliseconds.
/// Sequences and mappings become compact JSON. Numbers use the shortest
/// form that reads back to the same value, without a fraction when integral.
pub fn parse_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Date(d) => iso_string(d),
        Value::Number(n) => format_number(*n),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Function(f) => format!("[Function: {}]", f.name()),
        Value::Array(_) | Value::Object(_) => value.to_json().to_string(),
    }
}

/// Shortest round-trip rendering of a number
///
/// Plain decimal notation while the decimal exponent is in `-6..=20`,
/// exponent notation (`1e+21`, `1.5e-7`) outside it.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return (if n > 0.0 { "Infinity" } else { "-Infinity" }).to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest round-trip digits, e.g. `1.152921504606847e18`
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    let point = exponent + 1;
    let body = if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let (first, rest) = digits.split_at(1);
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{}e{}{}", first, exp_sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, exp_sign, exponent.abs())
        }
    };

    format!("{}{}", sign, body)
}
