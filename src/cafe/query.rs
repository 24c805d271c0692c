//! Query string extraction for `/cafe`
//!
//! Only `count` and `city` are read; every other key is ignored.

use percent_encoding::percent_decode_str;

/// Raw, unvalidated query values of one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CafeQuery {
    pub count: Option<String>,
    pub city: Option<String>,
}

impl CafeQuery {
    /// Extract `count` and `city` from a URI query string (without the leading `?`)
    ///
    /// The first occurrence of a key wins. `key` with no `=` counts as present
    /// with an empty value, so `?count` is an invalid count, not a missing one.
    pub fn parse(query: Option<&str>) -> Self {
        let mut parsed = Self::default();

        let Some(query) = query else {
            return parsed;
        };

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let slot = match decode(key).as_str() {
                "count" => &mut parsed.count,
                "city" => &mut parsed.city,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(decode(value));
            }
        }

        parsed
    }
}

/// Form-style decoding: `+` is a space, `%XX` escapes are UTF-8 (lossy)
fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both() {
        let q = CafeQuery::parse(Some("count=2&city=moscow"));
        assert_eq!(q.count.as_deref(), Some("2"));
        assert_eq!(q.city.as_deref(), Some("moscow"));
    }

    #[test]
    fn test_parse_none() {
        assert_eq!(CafeQuery::parse(None), CafeQuery::default());
        assert_eq!(CafeQuery::parse(Some("")), CafeQuery::default());
    }

    #[test]
    fn test_parse_missing_count() {
        let q = CafeQuery::parse(Some("city=moscow"));
        assert!(q.count.is_none());
        assert_eq!(q.city.as_deref(), Some("moscow"));
    }

    #[test]
    fn test_empty_value_is_present() {
        let q = CafeQuery::parse(Some("count=&city"));
        assert_eq!(q.count.as_deref(), Some(""));
        assert_eq!(q.city.as_deref(), Some(""));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let q = CafeQuery::parse(Some("count=1&count=5&city=a&city=b"));
        assert_eq!(q.count.as_deref(), Some("1"));
        assert_eq!(q.city.as_deref(), Some("a"));
    }

    #[test]
    fn test_percent_and_plus_decoding() {
        let q = CafeQuery::parse(Some(
            "city=%D0%BC%D0%BE%D1%81%D0%BA%D0%B2%D0%B0&count=%2B3&x=new+york",
        ));
        assert_eq!(q.city.as_deref(), Some("москва"));
        assert_eq!(q.count.as_deref(), Some("+3"));

        let q = CafeQuery::parse(Some("city=new+york"));
        assert_eq!(q.city.as_deref(), Some("new york"));
    }

    #[test]
    fn test_unknown_keys_and_stray_separators() {
        let q = CafeQuery::parse(Some("&&page=2&count=3&&"));
        assert_eq!(q.count.as_deref(), Some("3"));
        assert!(q.city.is_none());
    }
}
