//! Organization data models

use serde::{Deserialize, Serialize};

use crate::cc::traits::{CcResource, ResourceDocument};

/// Organization entity attributes from the API
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationEntity {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub billing_enabled: bool,
    #[serde(default)]
    pub quota_definition_guid: Option<String>,
}

/// Wire document for a single organization
pub type OrganizationDocument = ResourceDocument<OrganizationEntity>;

/// Request body for creating an organization
#[derive(Serialize, Debug, Clone)]
pub struct CreateOrganizationRequest {
    pub name: String,
}

/// A Cloud Controller organization
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    pub guid: String,
    pub name: String,
    pub status: Option<String>,
    pub billing_enabled: bool,
    pub quota_definition_guid: Option<String>,
}

impl Organization {
    /// Status reported by the server ("active", "suspended"), empty if absent
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }
}

impl CcResource for Organization {
    type Document = OrganizationDocument;

    fn from_document(document: OrganizationDocument) -> Self {
        Self {
            guid: document.metadata.guid,
            name: document.entity.name,
            status: document.entity.status,
            billing_enabled: document.entity.billing_enabled,
            quota_definition_guid: document.entity.quota_definition_guid,
        }
    }

    fn guid(&self) -> &str {
        &self.guid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_from_document() {
        let doc: OrganizationDocument = serde_json::from_value(serde_json::json!({
            "metadata": { "guid": "org-123", "url": "/v2/organizations/org-123" },
            "entity": {
                "name": "my-org",
                "status": "active",
                "billing_enabled": false,
                "quota_definition_guid": "quota-1"
            }
        }))
        .unwrap();

        let org = Organization::from_document(doc);
        assert_eq!(org.guid(), "org-123");
        assert_eq!(org.name, "my-org");
        assert_eq!(org.status(), "active");
        assert_eq!(org.quota_definition_guid.as_deref(), Some("quota-1"));
    }

    #[test]
    fn test_organization_requires_name() {
        let result: Result<OrganizationDocument, _> = serde_json::from_value(serde_json::json!({
            "metadata": { "guid": "org-123" },
            "entity": {}
        }));
        assert!(result.is_err());
    }
}
