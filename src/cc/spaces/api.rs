//! Space API operations

use log::debug;
use reqwest::Method;

use crate::cc::client::{CcClient, RequestArguments};
use crate::cc::pagination::PaginatedList;
use crate::cc::request_plan::RequestPlan;
use crate::cc::traits::CcResource;
use crate::cc::users::User;
use crate::config::api;
use crate::error::Result;

use super::models::{CreateSpaceRequest, Space, SpaceDocument};

impl CcClient {
    /// Listing of every space visible to the token (unfetched)
    pub fn spaces(&self) -> PaginatedList<Space> {
        let plan = RequestPlan::new(format!("{}/{}", api::BASE_PATH, api::SPACES));
        PaginatedList::new(self.clone(), plan)
    }

    /// Create a space inside an organization
    pub async fn create_space(&self, name: &str, org_guid: &str, token: &str) -> Result<Space> {
        debug!("Creating space {} in organization {}", name, org_guid);
        let request = CreateSpaceRequest {
            name: name.to_string(),
            organization_guid: org_guid.to_string(),
        };
        self.spaces().create(&request, token).await
    }

    /// Get a single space by GUID
    pub async fn get_space(&self, guid: &str, token: &str) -> Result<Space> {
        let args =
            RequestArguments::new(Method::GET, space_path(guid), token).accept(&[api::STATUS_OK]);
        let document: SpaceDocument = self.execute_json(args).await?;
        Ok(Space::from_document(document))
    }

    /// Delete a space and everything inside it, synchronously
    pub async fn delete_space(&self, guid: &str, token: &str) -> Result<()> {
        debug!("Deleting space {}", guid);
        let args = RequestArguments::new(Method::DELETE, space_path(guid), token)
            .query(vec![
                ("recursive".to_string(), "true".to_string()),
                ("async".to_string(), "false".to_string()),
            ])
            .accept(&[api::STATUS_NO_CONTENT]);
        self.execute(args).await?;
        Ok(())
    }

    /// Fetch the first page of users holding any role in a space
    pub async fn list_space_users(&self, space_guid: &str, token: &str) -> Result<PaginatedList<User>> {
        self.space_users(space_guid).fetch(token).await
    }

    /// Users holding any role in a space (unfetched)
    pub fn space_users(&self, space_guid: &str) -> PaginatedList<User> {
        self.space_role_list(space_guid, "user_roles")
    }

    /// Developers of a space (unfetched; associate to add a developer)
    pub fn space_developers(&self, space_guid: &str) -> PaginatedList<User> {
        self.space_role_list(space_guid, "developers")
    }

    /// Managers of a space (unfetched)
    pub fn space_managers(&self, space_guid: &str) -> PaginatedList<User> {
        self.space_role_list(space_guid, "managers")
    }

    /// Auditors of a space (unfetched)
    pub fn space_auditors(&self, space_guid: &str) -> PaginatedList<User> {
        self.space_role_list(space_guid, "auditors")
    }

    fn space_role_list(&self, space_guid: &str, role: &str) -> PaginatedList<User> {
        let plan = RequestPlan::new(format!("{}/{}", space_path(space_guid), role));
        PaginatedList::new(self.clone(), plan)
    }
}

fn space_path(guid: &str) -> String {
    format!("{}/{}/{}", api::BASE_PATH, api::SPACES, guid)
}
