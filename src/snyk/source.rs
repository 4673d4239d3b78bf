use async_trait::async_trait;

use crate::models::{OrgResource, ProjectResource, RawIgnoreSet};

/// Read side of the upstream API as seen by the traversal. Every fetch
/// is best-effort: implementations log failures and degrade to an empty
/// result instead of surfacing an error, so one failing branch never
/// aborts the walk.
#[async_trait]
pub trait IgnoreSource: Send + Sync {
    /// Organizations visible to the token, optionally scoped to a group.
    async fn organizations(&self, group_id: Option<&str>) -> Vec<OrgResource>;

    /// Projects of one organization.
    async fn projects(&self, org_id: &str) -> Vec<ProjectResource>;

    /// Stored ignore rules of one project, keyed by issue id.
    async fn project_ignores(&self, org_id: &str, project_id: &str) -> RawIgnoreSet;
}
