// core/src/client/params.rs
use serde_json::Value;
use url::form_urlencoded;

/// Ordered query parameters. `Value::Null` stands in for "not set".
pub type Params = Vec<(String, Value)>;

/// Serializes `params` into a `?key=value&...` suffix.
///
/// Entries whose value is null or the empty string are skipped. When nothing
/// is left the result is `""`, so it can always be appended to a URL.
pub fn build_params_from_object(params: &[(String, Value)]) -> String {
  let mut query = form_urlencoded::Serializer::new(String::new());
  let mut appended = false;

  for (key, value) in params {
    let Some(text) = stringify(value) else {
      continue;
    };
    query.append_pair(key, &text);
    appended = true;
  }

  if appended {
    format!("?{}", query.finish())
  } else {
    String::new()
  }
}

fn stringify(value: &Value) -> Option<String> {
  match value {
    Value::Null => None,
    Value::String(s) if s.is_empty() => None,
    Value::String(s) => Some(s.clone()),
    Value::Array(items) => Some(
      items
        .iter()
        .map(|item| stringify(item).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(","),
    ),
    // Whole floats print without a fraction: 1.0 -> "1".
    Value::Number(n) if n.is_f64() => n.as_f64().map(|f| f.to_string()),
    other => Some(other.to_string()),
  }
}
