//! s-expression plist helpers for threshold files and event output.

use lexpr::Value;

/// Escape a string for s-expression output.
pub fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Keyword name if `value` is a plist key. Accepts both
/// `Value::Keyword("key")` and `Value::Symbol(":key")` forms.
fn key_name(value: &Value) -> Option<String> {
    match value {
        Value::Keyword(k) => Some(k.to_string()),
        Value::Symbol(s) => s.strip_prefix(':').map(str::to_string),
        _ => None,
    }
}

/// Walk a plist and collect `(key, value)` pairs in order.
///
/// Stops at the first element that is not a keyword in key position;
/// a trailing key with no value is reported with `None`.
pub fn plist_entries(value: &Value) -> Vec<(String, Option<&Value>)> {
    let mut entries = Vec::new();
    let mut current = value;
    while let Value::Cons(pair) = current {
        let Some(key) = key_name(pair.car()) else {
            break;
        };
        match pair.cdr() {
            Value::Cons(next) => {
                entries.push((key, Some(next.car())));
                current = next.cdr();
            }
            _ => {
                entries.push((key, None));
                break;
            }
        }
    }
    entries
}

/// Interpret a plist value as a float. Integers are widened.
pub fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
