//! Cloud Controller API client module
//!
//! This module turns domain operations (create, associate, list, delete)
//! into authenticated HTTP requests and decodes the JSON responses.

pub mod applications;
mod client;
mod credentials;
pub mod organizations;
pub mod pagination;
pub mod request_plan;
pub mod spaces;
pub mod traits;
pub mod users;

pub use applications::{Application, CreateApplicationRequest};
pub use client::{CcClient, RequestArguments};
pub use credentials::TokenResolver;
pub use organizations::Organization;
pub use pagination::{Page, PaginatedList};
pub use request_plan::RequestPlan;
pub use spaces::Space;
pub use traits::{CcResource, ListDocument, Metadata, ResourceDocument};
pub use users::{run_populate_command, run_users_command, User};
