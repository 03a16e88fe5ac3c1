//! User command handlers

use log::{debug, info};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::cc::CcClient;
use crate::cli::{PopulateArgs, UsersArgs};
use crate::dispatcher::WorkDispatcher;
use crate::error::{CcError, Result};
use crate::output::output_users;
use crate::ui::{create_progress_bar, create_spinner, finish_spinner, report_error};
use crate::Cli;

use super::User;

/// Run the users list command
pub async fn run_users_command(
    client: &CcClient,
    cli: &Cli,
    args: &UsersArgs,
    token: &str,
) -> Result<()> {
    let (list, owner) = match (&args.space, &args.org) {
        (Some(space), _) => (client.space_users(space), format!("space '{}'", space)),
        (None, Some(org)) => (client.organization_users(org), format!("organization '{}'", org)),
        (None, None) => {
            return Err(CcError::Config(
                "either --space or --org is required".to_string(),
            ))
        }
    };
    let list = list.with_query("results-per-page", args.page_size.to_string());

    debug!("Fetching users of {}", owner);
    let spinner = create_spinner(&format!("Fetching users of {}...", owner), cli.quiet);

    let first = match list.fetch(token).await {
        Ok(first) => first,
        Err(e) => {
            finish_spinner(spinner, "Failed");
            return Err(e);
        }
    };
    debug!(
        "First page: {} of {} users, {} pages",
        first.items().len(),
        first.total_results(),
        first.total_pages()
    );

    let users = if args.first_page {
        first.into_items()
    } else {
        match first.collect_all(token).await {
            Ok(users) => users,
            Err(e) => {
                finish_spinner(spinner, "Failed");
                return Err(e);
            }
        }
    };

    finish_spinner(spinner, &format!("Fetched {} users", users.len()));
    output_users(&users, cli.output);
    info!("Listed {} users of {}", users.len(), owner);
    Ok(())
}

/// Generate `count` distinct user GUIDs from a prefix
pub fn generate_user_guids(prefix: &str, count: usize) -> Vec<String> {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    (0..count)
        .map(|i| format!("{}-{}-{}", prefix, stamp, i))
        .collect()
}

/// Create a user, add it to the organization, and make it a space developer
async fn populate_user(
    client: &CcClient,
    org_guid: &str,
    space_guid: &str,
    guid: &str,
    token: &str,
) -> Result<User> {
    let user = client.create_user(guid, token).await?;
    client
        .organization_users(org_guid)
        .associate(&user.guid, token)
        .await?;
    client
        .space_developers(space_guid)
        .associate(&user.guid, token)
        .await?;
    Ok(user)
}

/// Run the populate command
///
/// Returns `Ok(false)` when at least one user failed; failures are reported
/// per user and never stop the others.
pub async fn run_populate_command(
    client: &CcClient,
    cli: &Cli,
    args: &PopulateArgs,
    token: &str,
) -> Result<bool> {
    let guids = generate_user_guids(&args.prefix, args.count);

    let task = {
        let client = client.clone();
        let org = args.org.clone();
        let space = args.space.clone();
        let token = token.to_string();
        move |guid: String| {
            let client = client.clone();
            let org = org.clone();
            let space = space.clone();
            let token = token.clone();
            async move { populate_user(&client, &org, &space, &guid, &token).await }
        }
    };

    // Queue holds every unit so submission never waits on the workers
    let mut dispatcher =
        WorkDispatcher::with_queue_capacity(args.workers, args.count.max(1), task)?;
    debug!(
        "Populating {} users with {} workers",
        args.count,
        dispatcher.worker_count()
    );

    for guid in guids {
        dispatcher.submit(guid).await?;
    }
    dispatcher.close();

    let progress = create_progress_bar(args.count as u64, "Creating users", cli.quiet);
    let mut created: Vec<User> = Vec::with_capacity(args.count);
    let mut failures = 0usize;

    while let Some(result) = dispatcher.next_result().await {
        match result.outcome {
            Ok(user) => created.push(user),
            Err(e) => {
                failures += 1;
                report_error(
                    &progress,
                    &format!("Error populating user '{}':\n  {}\n", result.unit, e),
                );
            }
        }
        if let Some(ref p) = progress {
            p.inc(1);
        }
    }

    let summary = format!("Created {} users ({} failed)", created.len(), failures);
    finish_spinner(progress, &summary);
    output_users(&created, cli.output);

    if failures > 0 {
        info!("Completed with some errors: {}", summary);
    } else {
        info!("Completed successfully: {}", summary);
    }
    Ok(failures == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use wiremock::matchers::{method, path, path_regex};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    fn test_generate_user_guids_unique() {
        let guids = generate_user_guids("user", 5);
        assert_eq!(guids.len(), 5);
        assert!(guids.iter().all(|g| g.starts_with("user-")));
        let unique: std::collections::HashSet<_> = guids.iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_generate_user_guids_zero() {
        assert!(generate_user_guids("user", 0).is_empty());
    }

    /// Echo the posted GUID back as a created user
    fn created_user(request: &Request) -> ResponseTemplate {
        let body: serde_json::Value =
            serde_json::from_slice(&request.body).unwrap_or(serde_json::Value::Null);
        let guid = body["guid"].as_str().unwrap_or("unknown").to_string();
        ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "metadata": { "guid": guid },
            "entity": { "admin": false, "active": true }
        }))
    }

    #[tokio::test]
    async fn test_populate_creates_and_associates_every_user() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/users"))
            .respond_with(created_user)
            .expect(12)
            .mount(&mock_server)
            .await;
        Mock::given(method("PUT"))
            .and(path_regex(r"^/v2/organizations/org-1/users/[^/]+$"))
            .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
            .expect(12)
            .mount(&mock_server)
            .await;
        Mock::given(method("PUT"))
            .and(path_regex(r"^/v2/spaces/space-1/developers/[^/]+$"))
            .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
            .expect(12)
            .mount(&mock_server)
            .await;

        let client = CcClient::test_client(&mock_server.uri());
        let cli = cli(&[
            "ccctl", "-q", "populate", "--org", "org-1", "--space", "space-1", "-n", "12", "-w",
            "3",
        ]);
        let crate::cli::Command::Populate(ref args) = cli.command else {
            panic!("Expected populate command");
        };

        let ok = run_populate_command(&client, &cli, args, "token").await.unwrap();
        assert!(ok);
    }

    #[tokio::test]
    async fn test_populate_reports_failures() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/users"))
            .respond_with(created_user)
            .mount(&mock_server)
            .await;
        Mock::given(method("PUT"))
            .and(path_regex(r"^/v2/organizations/org-1/users/[^/]+$"))
            .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
            .mount(&mock_server)
            .await;
        Mock::given(method("PUT"))
            .and(path_regex(r"^/v2/spaces/space-1/developers/[^/]+$"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = CcClient::test_client(&mock_server.uri());
        let cli = cli(&[
            "ccctl", "-q", "populate", "--org", "org-1", "--space", "space-1", "-n", "4",
        ]);
        let crate::cli::Command::Populate(ref args) = cli.command else {
            panic!("Expected populate command");
        };

        let ok = run_populate_command(&client, &cli, args, "token").await.unwrap();
        assert!(!ok);
    }

    #[tokio::test]
    async fn test_populate_zero_workers() {
        let client = CcClient::test_client("http://127.0.0.1:1");
        let cli = cli(&[
            "ccctl", "-q", "populate", "--org", "o", "--space", "s", "-w", "0",
        ]);
        let crate::cli::Command::Populate(ref args) = cli.command else {
            panic!("Expected populate command");
        };

        let result = run_populate_command(&client, &cli, args, "token").await;
        assert!(matches!(result, Err(CcError::Dispatcher(_))));
    }

    #[tokio::test]
    async fn test_users_command_walks_all_pages() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/organizations/org-1/users"))
            .and(wiremock::matchers::query_param("results-per-page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_results": 2,
                "total_pages": 2,
                "next_url": "/v2/organizations/org-1/users?page=2",
                "prev_url": null,
                "resources": [{ "metadata": { "guid": "u1" }, "entity": {} }]
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/organizations/org-1/users"))
            .and(wiremock::matchers::query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_results": 2,
                "total_pages": 2,
                "next_url": null,
                "prev_url": "/v2/organizations/org-1/users?page=1&results-per-page=1",
                "resources": [{ "metadata": { "guid": "u2" }, "entity": {} }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = CcClient::test_client(&mock_server.uri());
        let cli = cli(&[
            "ccctl",
            "-q",
            "users",
            "--org",
            "org-1",
            "--page-size",
            "1",
        ]);
        let crate::cli::Command::Users(ref args) = cli.command else {
            panic!("Expected users command");
        };

        run_users_command(&client, &cli, args, "token").await.unwrap();
    }
}
