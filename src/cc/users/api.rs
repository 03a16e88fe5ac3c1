//! User API operations

use log::debug;
use reqwest::Method;

use crate::cc::client::{CcClient, RequestArguments};
use crate::cc::pagination::PaginatedList;
use crate::cc::request_plan::RequestPlan;
use crate::cc::traits::CcResource;
use crate::config::api;
use crate::error::Result;

use super::models::{CreateUserRequest, User, UserDocument};

impl CcClient {
    /// Listing of every user visible to the token (unfetched)
    pub fn users(&self) -> PaginatedList<User> {
        let plan = RequestPlan::new(format!("{}/{}", api::BASE_PATH, api::USERS));
        PaginatedList::new(self.clone(), plan)
    }

    /// Create a user record for an existing identity GUID
    pub async fn create_user(&self, guid: &str, token: &str) -> Result<User> {
        debug!("Creating user {}", guid);
        let request = CreateUserRequest {
            guid: guid.to_string(),
        };
        self.users().create(&request, token).await
    }

    /// Get a single user by GUID
    pub async fn get_user(&self, guid: &str, token: &str) -> Result<User> {
        let path = format!("{}/{}/{}", api::BASE_PATH, api::USERS, guid);
        let args = RequestArguments::new(Method::GET, path, token).accept(&[api::STATUS_OK]);
        let document: UserDocument = self.execute_json(args).await?;
        Ok(User::from_document(document))
    }

    /// Delete a user record synchronously
    pub async fn delete_user(&self, guid: &str, token: &str) -> Result<()> {
        let path = format!("{}/{}/{}", api::BASE_PATH, api::USERS, guid);
        debug!("Deleting user {}", guid);
        let args = RequestArguments::new(Method::DELETE, path, token)
            .query(vec![("async".to_string(), "false".to_string())])
            .accept(&[api::STATUS_NO_CONTENT]);
        self.execute(args).await?;
        Ok(())
    }
}
