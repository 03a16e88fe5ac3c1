//! Organization API operations

use log::debug;
use reqwest::Method;

use crate::cc::client::{CcClient, RequestArguments};
use crate::cc::pagination::PaginatedList;
use crate::cc::request_plan::RequestPlan;
use crate::cc::traits::CcResource;
use crate::cc::users::User;
use crate::config::api;
use crate::error::Result;

use super::models::{CreateOrganizationRequest, Organization, OrganizationDocument};

impl CcClient {
    /// Listing of every organization visible to the token (unfetched)
    pub fn organizations(&self) -> PaginatedList<Organization> {
        let plan = RequestPlan::new(format!("{}/{}", api::BASE_PATH, api::ORGANIZATIONS));
        PaginatedList::new(self.clone(), plan)
    }

    /// Create an organization
    pub async fn create_organization(&self, name: &str, token: &str) -> Result<Organization> {
        debug!("Creating organization {}", name);
        let request = CreateOrganizationRequest {
            name: name.to_string(),
        };
        self.organizations().create(&request, token).await
    }

    /// Get a single organization by GUID
    pub async fn get_organization(&self, guid: &str, token: &str) -> Result<Organization> {
        let args = RequestArguments::new(Method::GET, organization_path(guid), token)
            .accept(&[api::STATUS_OK]);
        let document: OrganizationDocument = self.execute_json(args).await?;
        Ok(Organization::from_document(document))
    }

    /// Delete an organization and everything inside it, synchronously
    pub async fn delete_organization(&self, guid: &str, token: &str) -> Result<()> {
        debug!("Deleting organization {}", guid);
        let args = RequestArguments::new(Method::DELETE, organization_path(guid), token)
            .query(vec![
                ("recursive".to_string(), "true".to_string()),
                ("async".to_string(), "false".to_string()),
            ])
            .accept(&[api::STATUS_NO_CONTENT]);
        self.execute(args).await?;
        Ok(())
    }

    /// Members of an organization (unfetched; associate to add a member)
    pub fn organization_users(&self, org_guid: &str) -> PaginatedList<User> {
        self.organization_role_list(org_guid, "users")
    }

    /// Managers of an organization (unfetched)
    pub fn organization_managers(&self, org_guid: &str) -> PaginatedList<User> {
        self.organization_role_list(org_guid, "managers")
    }

    /// Auditors of an organization (unfetched)
    pub fn organization_auditors(&self, org_guid: &str) -> PaginatedList<User> {
        self.organization_role_list(org_guid, "auditors")
    }

    /// Billing managers of an organization (unfetched)
    pub fn organization_billing_managers(&self, org_guid: &str) -> PaginatedList<User> {
        self.organization_role_list(org_guid, "billing_managers")
    }

    fn organization_role_list(&self, org_guid: &str, role: &str) -> PaginatedList<User> {
        let plan = RequestPlan::new(format!("{}/{}", organization_path(org_guid), role));
        PaginatedList::new(self.clone(), plan)
    }
}

fn organization_path(guid: &str) -> String {
    format!("{}/{}/{}", api::BASE_PATH, api::ORGANIZATIONS, guid)
}
