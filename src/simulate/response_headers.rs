//! Self-referential response-header echo.
//!
//! The echoed body embeds a Content-Length entry that must describe the
//! body's own byte length. Inserting the length changes the serialization,
//! which changes the length, so the computation is iterated toward a fixed
//! point. Five rounds settle every payload this service produces; the bound
//! is deliberate and not extended for arbitrarily large header sets.

use indexmap::IndexMap;

const FIXED_POINT_ROUNDS: usize = 5;

/// Compute the echoed body and final header map for the header echo.
///
/// `pairs` arrive in query order; repeated keys keep the last value.
/// Content-Type defaults to application/json when the client names none.
pub fn compose(
    pairs: impl IntoIterator<Item = (String, String)>,
) -> (String, IndexMap<String, String>) {
    let mut headers: IndexMap<String, String> = IndexMap::new();
    for (name, value) in pairs {
        headers.insert(name, value);
    }
    if !headers.contains_key("Content-Type") {
        headers.insert("Content-Type".to_string(), "application/json".to_string());
    }

    let mut body = String::new();
    for _ in 0..FIXED_POINT_ROUNDS {
        body = match serde_json::to_string_pretty(&headers) {
            Ok(serialized) => serialized + "\n",
            Err(_) => String::new(),
        };
        headers.insert("Content-Length".to_string(), body.len().to_string());
    }

    (body, headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_content_type_defaults_to_json() {
        let (_, headers) = compose(pairs(&[("Server", "echobin")]));
        assert_eq!(headers.get("Content-Type"), Some(&"application/json".to_string()));
    }

    #[test]
    fn test_explicit_content_type_kept() {
        let (_, headers) = compose(pairs(&[("Content-Type", "text/plain")]));
        assert_eq!(headers.get("Content-Type"), Some(&"text/plain".to_string()));
    }

    #[test]
    fn test_body_reaches_length_fixed_point() {
        let (body, headers) = compose(pairs(&[("Server", "echobin"), ("X-One", "1")]));
        let length: usize = headers.get("Content-Length").unwrap().parse().unwrap();
        assert_eq!(length, body.len());
        let echoed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(echoed["Content-Length"], length.to_string());
    }

    #[test]
    fn test_fixed_point_holds_for_larger_header_sets() {
        let entries: Vec<(String, String)> = (0..10)
            .map(|i| (format!("X-Header-{i}"), format!("value-{i}")))
            .collect();
        let (body, headers) = compose(entries);
        let length: usize = headers.get("Content-Length").unwrap().parse().unwrap();
        assert_eq!(length, body.len());
        assert!(body.ends_with('\n'));
    }

    #[test]
    fn test_repeated_keys_keep_last_value() {
        let (_, headers) = compose(pairs(&[("X-Dup", "first"), ("X-Dup", "second")]));
        assert_eq!(headers.get("X-Dup"), Some(&"second".to_string()));
    }
}
