use serde::{Deserialize, Serialize};

/// Cached banner creative as returned by the cache service.
///
/// Request scoped value object: deserialized from a single cache response,
/// read, then discarded. Every field is optional and `None` simply means
/// the cache entry did not carry it, so construction can never fail.
/// Equality and hashing are structural over all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BannerValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    adm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nurl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<i32>,
}

impl BannerValue {
    /// Builds a banner value, passing all four fields through unchanged
    pub fn of(
        adm: Option<String>,
        nurl: Option<String>,
        width: Option<i32>,
        height: Option<i32>,
    ) -> Self {
        Self {
            adm,
            nurl,
            width,
            height,
        }
    }

    /// Creative markup, if the cache entry carried any
    pub fn adm(&self) -> Option<&str> {
        self.adm.as_deref()
    }

    /// Win/impression notification url, if present
    pub fn nurl(&self) -> Option<&str> {
        self.nurl.as_deref()
    }

    pub fn width(&self) -> Option<i32> {
        self.width
    }

    pub fn height(&self) -> Option<i32> {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_of_passes_fields_through() {
        let value = BannerValue::of(
            Some("<div>ad</div>".to_string()),
            Some("https://x.example/win".to_string()),
            Some(300),
            Some(250),
        );

        assert_eq!(value.adm(), Some("<div>ad</div>"));
        assert_eq!(value.nurl(), Some("https://x.example/win"));
        assert_eq!(value.width(), Some(300));
        assert_eq!(value.height(), Some(250));
    }

    #[test]
    fn test_of_with_absent_fields() {
        let value = BannerValue::of(None, None, None, None);

        assert_eq!(value.adm(), None);
        assert_eq!(value.nurl(), None);
        assert_eq!(value.width(), None);
        assert_eq!(value.height(), None);

        let partial = BannerValue::of(Some("<div/>".to_string()), None, Some(728), None);
        assert_eq!(partial.adm(), Some("<div/>"));
        assert_eq!(partial.nurl(), None);
        assert_eq!(partial.width(), Some(728));
        assert_eq!(partial.height(), None);
    }

    #[test]
    fn test_structural_equality() {
        let a = BannerValue::of(Some("<div/>".to_string()), None, Some(300), Some(250));
        let b = BannerValue::of(Some("<div/>".to_string()), None, Some(300), Some(250));
        assert_eq!(a, b);

        let all_absent = BannerValue::of(None, None, None, None);
        assert_eq!(all_absent, BannerValue::of(None, None, None, None));

        let different = BannerValue::of(Some("<div/>".to_string()), None, Some(300), Some(600));
        assert_ne!(a, different);
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        let a = BannerValue::of(Some("<div/>".to_string()), None, Some(300), Some(250));
        let b = BannerValue::of(Some("<div/>".to_string()), None, Some(300), Some(250));

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_deserializes_cache_response() {
        let json = r#"{"adm": "<div>ad</div>", "width": 300, "height": 250}"#;
        let value: BannerValue = serde_json::from_str(json).unwrap();

        assert_eq!(value.adm(), Some("<div>ad</div>"));
        assert_eq!(value.nurl(), None);
        assert_eq!(value.width(), Some(300));
        assert_eq!(value.height(), Some(250));
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let value = BannerValue::of(None, Some("https://x.example/win".to_string()), None, None);
        let json = serde_json::to_string(&value).unwrap();

        assert!(json.contains("nurl"));
        assert!(!json.contains("adm"));
        assert!(!json.contains("width"));
        assert!(!json.contains("height"));
    }
}
