use crate::models::{IgnoreEntry, IgnoreRecord, RawIgnoreSet};

const MISSING: &str = "N/A";
const NO_EXPIRY: &str = "Never";

/// Identifiers and display names of the project whose ignores are being
/// flattened, stamped onto every record for traceability.
#[derive(Debug, Clone)]
pub struct ProjectScope {
    pub org_id: String,
    pub org_name: String,
    pub project_id: String,
    pub project_name: String,
}

/// Expand a project's ignore data into flat records, one per rule that
/// still carries its detail payload. Map iteration order is preserved.
pub fn flatten_ignore_set(scope: &ProjectScope, ignores: &RawIgnoreSet) -> Vec<IgnoreRecord> {
    ignores
        .iter()
        .flat_map(|(issue_id, entries)| flatten_issue(scope, issue_id, entries))
        .collect()
}

/// Flatten the ignore rules stored for a single issue. Entries without
/// a detail payload are skipped, not errors.
pub fn flatten_issue(
    scope: &ProjectScope,
    issue_id: &str,
    entries: &[IgnoreEntry],
) -> Vec<IgnoreRecord> {
    entries
        .iter()
        .filter_map(|entry| entry.detail.as_ref())
        .map(|detail| {
            let ignored_by = detail.ignored_by.as_ref();
            IgnoreRecord {
                org_id: scope.org_id.clone(),
                org_name: scope.org_name.clone(),
                project_id: scope.project_id.clone(),
                project_name: scope.project_name.clone(),
                issue_id: issue_id.to_string(),
                reason: field_or(detail.reason.as_deref(), MISSING),
                reason_type: field_or(detail.reason_type.as_deref(), MISSING),
                created: field_or(detail.created.as_deref(), MISSING),
                expires: field_or(detail.expires.as_deref(), NO_EXPIRY),
                ignored_by_name: field_or(ignored_by.and_then(|by| by.name.as_deref()), MISSING),
                ignored_by_email: field_or(ignored_by.and_then(|by| by.email.as_deref()), MISSING),
            }
        })
        .collect()
}

fn field_or(value: Option<&str>, default: &str) -> String {
    value.unwrap_or(default).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scope() -> ProjectScope {
        ProjectScope {
            org_id: "org-1".to_string(),
            org_name: "Acme".to_string(),
            project_id: "proj-1".to_string(),
            project_name: "billing-service".to_string(),
        }
    }

    fn entries(value: serde_json::Value) -> Vec<IgnoreEntry> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_reason_only_entry_gets_defaults() {
        let entries = entries(json!([{"*": {"reason": "accepted risk"}}]));
        let records = flatten_issue(&scope(), "SNYK-JS-LODASH-567746", &entries);

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.issue_id, "SNYK-JS-LODASH-567746");
        assert_eq!(record.reason, "accepted risk");
        assert_eq!(record.reason_type, "N/A");
        assert_eq!(record.created, "N/A");
        assert_eq!(record.expires, "Never");
        assert_eq!(record.ignored_by_name, "N/A");
        assert_eq!(record.ignored_by_email, "N/A");
        assert_eq!(record.org_id, "org-1");
        assert_eq!(record.project_name, "billing-service");
    }

    #[test]
    fn test_entries_without_detail_are_skipped() {
        let entries = entries(json!([
            {},
            {"*": {}},
            {"*": {"reason": "kept"}}
        ]));
        let records = flatten_issue(&scope(), "ISSUE-1", &entries);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].reason, "kept");
    }

    #[test]
    fn test_all_fields_extracted() {
        let entries = entries(json!([{
            "*": {
                "reason": "patched upstream",
                "reasonType": "wont-fix",
                "created": "2024-02-01T08:30:00Z",
                "expires": "2025-02-01T08:30:00Z",
                "ignoredBy": {"name": "Sam Ops", "email": "sam@acme.io"}
            }
        }]));
        let records = flatten_issue(&scope(), "ISSUE-2", &entries);

        let record = &records[0];
        assert_eq!(record.reason_type, "wont-fix");
        assert_eq!(record.expires, "2025-02-01T08:30:00Z");
        assert_eq!(record.ignored_by_name, "Sam Ops");
        assert_eq!(record.ignored_by_email, "sam@acme.io");
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let entries = entries(json!([
            {"*": {"reason": "first"}},
            {"*": {"reason": "second"}}
        ]));
        let once = flatten_issue(&scope(), "ISSUE-3", &entries);
        let twice = flatten_issue(&scope(), "ISSUE-3", &entries);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_set_flattening_preserves_issue_and_entry_order() {
        let set: RawIgnoreSet = serde_json::from_value(json!({
            "ISSUE-B": [
                {"*": {"reason": "b1"}},
                {"*": {"reason": "b2"}}
            ],
            "ISSUE-A": [{"*": {"reason": "a1"}}]
        }))
        .unwrap();

        let records = flatten_ignore_set(&scope(), &set);
        let reasons: Vec<&str> = records.iter().map(|r| r.reason.as_str()).collect();
        assert_eq!(reasons, ["b1", "b2", "a1"]);
    }
}
