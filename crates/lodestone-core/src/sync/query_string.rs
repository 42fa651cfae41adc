//! Pure query string editing.
//!
//! All functions operate on the raw query string (no leading `?`) and
//! never touch history. Unrelated parameters and their relative order
//! are preserved across edits, which is what makes no-op detection in
//! the binding layer a plain string comparison.

use url::form_urlencoded;

/// Decodes a query string into ordered key/value pairs.
///
/// A leading `?` is tolerated so callers can pass `location.search`
/// verbatim. Keys without `=` decode with an empty value.
pub fn parse(search: &str) -> Vec<(String, String)> {
    let search = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(search.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// Returns the decoded value of the first occurrence of `key`, or
/// `None` when the parameter is absent.
pub fn get(search: &str, key: &str) -> Option<String> {
    parse(search)
        .into_iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value)
}

/// Returns `search` with `key` set to `value`, or removed when `value`
/// is `None`.
///
/// Setting replaces the first occurrence in place and drops any
/// duplicates, matching `URLSearchParams::set`. A new key appends at
/// the end. All other parameters keep their order.
pub fn with_param(search: &str, key: &str, value: Option<&str>) -> String {
    let mut pairs = parse(search);
    match value {
        Some(value) => {
            let mut replaced = false;
            pairs.retain_mut(|(name, existing)| {
                if name != key {
                    return true;
                }
                if replaced {
                    return false;
                }
                replaced = true;
                *existing = value.to_string();
                true
            });
            if !replaced {
                pairs.push((key.to_string(), value.to_string()));
            }
        }
        None => pairs.retain(|(name, _)| name != key),
    }
    serialize(&pairs)
}

/// Encodes pairs back into a query string, without a leading `?`.
pub fn serialize(pairs: &[(String, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_question_mark() {
        let expected = vec![("q".to_string(), "shoes".to_string())];
        assert_eq!(parse("q=shoes"), expected);
        assert_eq!(parse("?q=shoes"), expected);
        assert_eq!(parse(""), Vec::new());
    }

    #[test]
    fn decodes_plus_and_percent_escapes() {
        assert_eq!(get("q=red+shoes", "q").as_deref(), Some("red shoes"));
        assert_eq!(get("q=a%2Cb", "q").as_deref(), Some("a,b"));
    }

    #[test]
    fn get_returns_first_occurrence() {
        assert_eq!(get("a=1&a=2", "a").as_deref(), Some("1"));
        assert_eq!(get("a=1", "missing"), None);
    }

    #[test]
    fn set_preserves_order_of_other_params() {
        let search = "a=1&q=old&b=2";
        assert_eq!(with_param(search, "q", Some("new")), "a=1&q=new&b=2");
    }

    #[test]
    fn set_appends_new_keys_at_the_end() {
        assert_eq!(with_param("a=1", "q", Some("shoes")), "a=1&q=shoes");
        assert_eq!(with_param("", "q", Some("shoes")), "q=shoes");
    }

    #[test]
    fn set_collapses_duplicate_keys() {
        assert_eq!(with_param("a=1&a=2&b=3", "a", Some("9")), "a=9&b=3");
    }

    #[test]
    fn remove_drops_every_occurrence() {
        assert_eq!(with_param("a=1&q=x&a=2", "a", None), "q=x");
        assert_eq!(with_param("q=x", "q", None), "");
        assert_eq!(with_param("", "q", None), "");
    }

    #[test]
    fn values_encode_as_form_urlencoded() {
        assert_eq!(with_param("", "q", Some("red shoes")), "q=red+shoes");
        assert_eq!(with_param("", "brands", Some("a,b")), "brands=a%2Cb");
    }
}
