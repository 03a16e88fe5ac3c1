//! User data models

use serde::{Deserialize, Serialize};

use crate::cc::traits::{CcResource, ResourceDocument};

/// User entity attributes from the API
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserEntity {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub default_space_guid: Option<String>,
}

/// Wire document for a single user
pub type UserDocument = ResourceDocument<UserEntity>;

/// Request body for creating a user
#[derive(Serialize, Debug, Clone)]
pub struct CreateUserRequest {
    pub guid: String,
}

/// A Cloud Controller user
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub guid: String,
    pub username: Option<String>,
    pub admin: bool,
    pub active: bool,
    pub default_space_guid: Option<String>,
}

impl User {
    /// Username, or empty string when the server does not report one
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or("")
    }
}

impl CcResource for User {
    type Document = UserDocument;

    fn from_document(document: UserDocument) -> Self {
        Self {
            guid: document.metadata.guid,
            username: document.entity.username,
            admin: document.entity.admin,
            active: document.entity.active,
            default_space_guid: document.entity.default_space_guid,
        }
    }

    fn guid(&self) -> &str {
        &self.guid
    }
}
