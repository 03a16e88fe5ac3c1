//! Application API operations

use log::debug;
use reqwest::Method;

use crate::cc::client::{CcClient, RequestArguments};
use crate::cc::pagination::PaginatedList;
use crate::cc::request_plan::RequestPlan;
use crate::cc::traits::CcResource;
use crate::config::api;
use crate::error::Result;

use super::models::{Application, ApplicationDocument, CreateApplicationRequest};

impl CcClient {
    /// Listing of every application visible to the token (unfetched)
    pub fn applications(&self) -> PaginatedList<Application> {
        let plan = RequestPlan::new(format!("{}/{}", api::BASE_PATH, api::APPS));
        PaginatedList::new(self.clone(), plan)
    }

    /// Applications in one space (unfetched)
    pub fn space_applications(&self, space_guid: &str) -> PaginatedList<Application> {
        let plan = RequestPlan::new(format!(
            "{}/{}/{}/{}",
            api::BASE_PATH,
            api::SPACES,
            space_guid,
            api::APPS
        ));
        PaginatedList::new(self.clone(), plan)
    }

    /// Create an application record in a space
    pub async fn create_application(
        &self,
        request: &CreateApplicationRequest,
        token: &str,
    ) -> Result<Application> {
        debug!("Creating application {} in space {}", request.name, request.space_guid);
        self.applications().create(request, token).await
    }

    /// Get a single application by GUID
    pub async fn get_application(&self, guid: &str, token: &str) -> Result<Application> {
        let args = RequestArguments::new(Method::GET, application_path(guid), token)
            .accept(&[api::STATUS_OK]);
        let document: ApplicationDocument = self.execute_json(args).await?;
        Ok(Application::from_document(document))
    }

    /// Delete an application synchronously
    pub async fn delete_application(&self, guid: &str, token: &str) -> Result<()> {
        debug!("Deleting application {}", guid);
        let args = RequestArguments::new(Method::DELETE, application_path(guid), token)
            .query(vec![("async".to_string(), "false".to_string())])
            .accept(&[api::STATUS_NO_CONTENT]);
        self.execute(args).await?;
        Ok(())
    }
}

fn application_path(guid: &str) -> String {
    format!("{}/{}/{}", api::BASE_PATH, api::APPS, guid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app_json(guid: &str) -> serde_json::Value {
        serde_json::json!({
            "metadata": { "guid": guid },
            "entity": { "name": "my-app", "space_guid": "space-1", "diego": true }
        })
    }

    #[tokio::test]
    async fn test_create_application() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/apps"))
            .and(body_json(serde_json::json!({
                "name": "my-app",
                "space_guid": "space-1",
                "diego": true
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(app_json("app-1")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = CcClient::test_client(&mock_server.uri());
        let request = CreateApplicationRequest {
            name: "my-app".to_string(),
            space_guid: "space-1".to_string(),
            diego: Some(true),
        };
        let app = client.create_application(&request, "token").await.unwrap();
        assert_eq!(app.guid, "app-1");
        assert!(app.diego);
    }

    #[tokio::test]
    async fn test_get_application() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/apps/app-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(app_json("app-1")))
            .mount(&mock_server)
            .await;

        let client = CcClient::test_client(&mock_server.uri());
        let app = client.get_application("app-1", "token").await.unwrap();
        assert_eq!(app.name, "my-app");
        assert_eq!(app.space_guid, "space-1");
    }

    #[tokio::test]
    async fn test_delete_application_wrong_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v2/apps/app-1"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = CcClient::test_client(&mock_server.uri());
        let err = client.delete_application("app-1", "token").await.unwrap_err();
        assert_eq!(err.status(), Some(200));
    }

    #[test]
    fn test_space_applications_path() {
        let client = CcClient::test_client("https://api.example.com");
        assert_eq!(
            client.space_applications("space-1").plan().path(),
            "/v2/spaces/space-1/apps"
        );
    }
}
