//! Value helpers
//!
//! Values are plain [`serde_json::Value`]s. Nothing is coerced when a value is
//! stored; rules call these helpers at evaluation time.

use serde_json::Value;

/// Returns true for arrays and objects.
#[must_use]
pub fn is_composite(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// Returns true for `null`, the empty string, the empty array and the empty object.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Casts a value to a float.
///
/// Numbers convert directly; strings use their longest leading numeric prefix
/// (`"12abc"` → 12, `"abc"` → 0); `true` is 1; `null`, `false` and composites
/// with no elements are 0, non-empty composites are 1.
#[must_use]
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_leading_number(s),
        Value::Array(a) => f64::from(u8::from(!a.is_empty())),
        Value::Object(o) => f64::from(u8::from(!o.is_empty())),
    }
}

/// Casts a value to text.
///
/// `null` and `false` become `""`, `true` becomes `"1"`, whole floats drop
/// their fractional part (`10.0` → `"10"`), composites are rendered as JSON.
#[must_use]
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "1".to_owned(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if n.is_f64() {
                n.as_f64().map_or_else(|| n.to_string(), format_float)
            } else {
                n.to_string()
            }
        }
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Renders a float the way it is shown in messages.
#[must_use]
pub fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}

/// Returns true if the whole string (ignoring surrounding whitespace) is a number.
#[must_use]
pub fn is_numeric_str(s: &str) -> bool {
    let trimmed = s.trim();
    !trimmed.is_empty() && numeric_prefix_len(trimmed) == trimmed.len()
}

/// Parses the longest leading numeric prefix of `s`, after leading whitespace.
fn parse_leading_number(s: &str) -> f64 {
    let trimmed = s.trim_start();
    let len = numeric_prefix_len(trimmed);
    trimmed[..len].parse().unwrap_or(0.0)
}

/// Length in bytes of the longest prefix matching `[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?`.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_cast() {
        assert_eq!(to_number(&json!("10")), 10.0);
        assert_eq!(to_number(&json!("  -2.5e1xyz")), -25.0);
        assert_eq!(to_number(&json!("abc")), 0.0);
        assert_eq!(to_number(&json!(".5")), 0.5);
        assert_eq!(to_number(&json!("7.")), 7.0);
        assert_eq!(to_number(&json!("1e")), 1.0);
        assert_eq!(to_number(&json!(null)), 0.0);
        assert_eq!(to_number(&json!(true)), 1.0);
        assert_eq!(to_number(&json!(3)), 3.0);
    }

    #[test]
    fn text_cast() {
        assert_eq!(to_text(&json!(null)), "");
        assert_eq!(to_text(&json!(false)), "");
        assert_eq!(to_text(&json!(true)), "1");
        assert_eq!(to_text(&json!(10.0)), "10");
        assert_eq!(to_text(&json!(1.5)), "1.5");
        assert_eq!(to_text(&json!(-4)), "-4");
        assert_eq!(to_text(&json!("x")), "x");
        assert_eq!(to_text(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn numeric_strings() {
        assert!(is_numeric_str(" 42 "));
        assert!(is_numeric_str("-1.5E3"));
        assert!(!is_numeric_str("12abc"));
        assert!(!is_numeric_str(""));
        assert!(!is_numeric_str("."));
    }

    #[test]
    fn emptiness_and_composites() {
        assert!(is_empty(&json!(null)));
        assert!(is_empty(&json!("")));
        assert!(!is_empty(&json!(0)));
        assert!(is_composite(&json!({})));
        assert!(!is_composite(&json!("[]")));
    }
}
