use serde_json::Value;

/// Longest cell rendered in listing tables before truncation.
pub const MAX_CELL_CHARS: usize = 60;

/// Convert a JSON value to a short, single-line string for table cells
pub fn value_to_short_string(value: &Value) -> String {
    let full = match value {
        Value::String(s) => s.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => arr
            .iter()
            .map(value_to_short_string)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(obj) => obj
            .iter()
            .map(|(key, val)| format!("{}: {}", key, value_to_short_string(val)))
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null => String::new(),
    };
    truncate(full.replace('\n', " "), MAX_CELL_CHARS)
}

fn truncate(s: String, max: usize) -> String {
    if s.chars().count() <= max {
        return s;
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
