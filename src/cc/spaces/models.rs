//! Space data models

use serde::{Deserialize, Serialize};

use crate::cc::traits::{CcResource, ResourceDocument};

/// Space entity attributes from the API
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SpaceEntity {
    pub name: String,
    pub organization_guid: String,
    #[serde(default)]
    pub allow_ssh: Option<bool>,
}

/// Wire document for a single space
pub type SpaceDocument = ResourceDocument<SpaceEntity>;

/// Request body for creating a space
#[derive(Serialize, Debug, Clone)]
pub struct CreateSpaceRequest {
    pub name: String,
    pub organization_guid: String,
}

/// A Cloud Controller space
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Space {
    pub guid: String,
    pub name: String,
    pub organization_guid: String,
    pub allow_ssh: bool,
}

impl CcResource for Space {
    type Document = SpaceDocument;

    fn from_document(document: SpaceDocument) -> Self {
        Self {
            guid: document.metadata.guid,
            name: document.entity.name,
            organization_guid: document.entity.organization_guid,
            allow_ssh: document.entity.allow_ssh.unwrap_or(false),
        }
    }

    fn guid(&self) -> &str {
        &self.guid
    }
}
