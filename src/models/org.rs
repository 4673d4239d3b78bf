use serde::Deserialize;

/// Shared attribute block of REST resources. Only `name` is relied on,
/// and even that is not guaranteed to be present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceAttributes {
    pub name: Option<String>,
}

/// One organization from the REST `/orgs` collection. Entries without
/// an id are malformed and skipped during traversal.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgResource {
    pub id: Option<String>,
    #[serde(default)]
    pub attributes: ResourceAttributes,
}

/// One project from the REST `/orgs/{org}/projects` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectResource {
    pub id: Option<String>,
    #[serde(default)]
    pub attributes: ResourceAttributes,
}

/// One group from the REST `/groups` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupResource {
    pub id: Option<String>,
    #[serde(default)]
    pub attributes: ResourceAttributes,
}

impl OrgResource {
    pub fn display_name(&self) -> &str {
        self.attributes.name.as_deref().unwrap_or("Unknown")
    }
}

impl ProjectResource {
    pub fn display_name(&self) -> &str {
        self.attributes.name.as_deref().unwrap_or("Unknown")
    }
}

impl GroupResource {
    pub fn display_name(&self) -> &str {
        self.attributes.name.as_deref().unwrap_or("Unknown")
    }
}
