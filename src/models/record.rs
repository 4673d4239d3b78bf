use serde::Serialize;

/// One flattened ignore rule, tagged with the project and organization
/// it was found under. Field order is the export column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoreRecord {
    pub org_id: String,
    pub org_name: String,
    pub project_id: String,
    pub project_name: String,
    pub issue_id: String,
    pub reason: String,
    pub reason_type: String,
    pub created: String,
    pub expires: String,
    pub ignored_by_name: String,
    pub ignored_by_email: String,
}
