//! Application data models

use serde::{Deserialize, Serialize};

use crate::cc::traits::{CcResource, ResourceDocument};

/// Application entity attributes from the API
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationEntity {
    pub name: String,
    pub space_guid: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub instances: Option<u32>,
    #[serde(default)]
    pub memory: Option<u32>,
    #[serde(default)]
    pub diego: Option<bool>,
}

/// Wire document for a single application
pub type ApplicationDocument = ResourceDocument<ApplicationEntity>;

/// Request body for creating an application
#[derive(Serialize, Debug, Clone)]
pub struct CreateApplicationRequest {
    pub name: String,
    pub space_guid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diego: Option<bool>,
}

/// A Cloud Controller application
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Application {
    pub guid: String,
    pub name: String,
    pub space_guid: String,
    pub state: Option<String>,
    pub instances: u32,
    pub memory: u32,
    pub diego: bool,
}

impl Application {
    /// Lifecycle state ("STARTED", "STOPPED"), empty if absent
    pub fn state(&self) -> &str {
        self.state.as_deref().unwrap_or("")
    }
}

impl CcResource for Application {
    type Document = ApplicationDocument;

    fn from_document(document: ApplicationDocument) -> Self {
        let entity = document.entity;
        Self {
            guid: document.metadata.guid,
            name: entity.name,
            space_guid: entity.space_guid,
            state: entity.state,
            instances: entity.instances.unwrap_or(0),
            memory: entity.memory.unwrap_or(0),
            diego: entity.diego.unwrap_or(false),
        }
    }

    fn guid(&self) -> &str {
        &self.guid
    }
}
