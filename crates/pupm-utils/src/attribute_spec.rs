/// Splits a `key=value` attribute argument into its parts.
///
/// Returns `None` when the argument has no `=` or an empty key; the value
/// side may be empty.
pub fn parse_attribute_spec(spec: &str) -> Option<(String, String)> {
    match spec.split_once('=') {
        Some((key, value)) if !key.is_empty() => Some((key.to_string(), value.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_pair() {
        assert_eq!(
            parse_attribute_spec("ref=4.24.0"),
            Some(("ref".to_string(), "4.24.0".to_string()))
        );
    }

    #[test]
    fn test_value_keeps_later_equals() {
        assert_eq!(
            parse_attribute_spec("git=https://host/repo?a=b"),
            Some(("git".to_string(), "https://host/repo?a=b".to_string()))
        );
    }

    #[test]
    fn test_missing_equals_rejected() {
        assert_eq!(parse_attribute_spec("justakey"), None);
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(parse_attribute_spec("=value"), None);
    }
}
