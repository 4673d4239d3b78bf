use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Ignore data for one project, keyed by issue id. Map order follows the
/// server response so output stays reproducible.
pub type RawIgnoreSet = IndexMap<String, Vec<IgnoreEntry>>;

/// One stored ignore rule for an issue. The v1 API nests the actual
/// payload one level down under a literal `"*"` path key; an entry
/// without that payload carries no actionable detail.
#[derive(Debug, Clone, Deserialize)]
pub struct IgnoreEntry {
    #[serde(rename = "*", default, deserialize_with = "detail_or_none")]
    pub detail: Option<IgnoreDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IgnoreDetail {
    pub reason: Option<String>,
    #[serde(rename = "reasonType")]
    pub reason_type: Option<String>,
    pub created: Option<String>,
    pub expires: Option<String>,
    #[serde(rename = "ignoredBy")]
    pub ignored_by: Option<IgnoredBy>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IgnoredBy {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// The upstream sends `"*": {}` for rules stripped of their payload; an
/// empty object counts the same as a missing key.
fn detail_or_none<'de, D>(deserializer: D) -> Result<Option<IgnoreDetail>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_full_entry() {
        let entry: IgnoreEntry = serde_json::from_value(json!({
            "*": {
                "reason": "false positive",
                "reasonType": "not-vulnerable",
                "created": "2024-01-15T10:00:00Z",
                "ignoredBy": {"name": "Jo Dev", "email": "jo@example.com"}
            }
        }))
        .unwrap();

        let detail = entry.detail.expect("detail payload");
        assert_eq!(detail.reason.as_deref(), Some("false positive"));
        assert_eq!(detail.reason_type.as_deref(), Some("not-vulnerable"));
        assert!(detail.expires.is_none());
        assert_eq!(
            detail.ignored_by.unwrap().email.as_deref(),
            Some("jo@example.com")
        );
    }

    #[test]
    fn test_empty_detail_object_becomes_none() {
        let entry: IgnoreEntry = serde_json::from_value(json!({"*": {}})).unwrap();
        assert!(entry.detail.is_none());
    }

    #[test]
    fn test_missing_detail_key_becomes_none() {
        let entry: IgnoreEntry = serde_json::from_value(json!({})).unwrap();
        assert!(entry.detail.is_none());
    }

    #[test]
    fn test_ignore_set_preserves_issue_order() {
        let set: RawIgnoreSet = serde_json::from_value(json!({
            "SNYK-JS-LODASH-567746": [{"*": {"reason": "tolerated"}}],
            "SNYK-JS-MINIMIST-559764": [{"*": {"reason": "dev only"}}],
            "SNYK-JS-AXIOS-174505": []
        }))
        .unwrap();

        let issues: Vec<&String> = set.keys().collect();
        assert_eq!(
            issues,
            [
                "SNYK-JS-LODASH-567746",
                "SNYK-JS-MINIMIST-559764",
                "SNYK-JS-AXIOS-174505"
            ]
        );
    }
}
