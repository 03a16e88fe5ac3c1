//! ccctl - Client library and CLI for the Cloud Controller API
//!
//! Manages organizations, spaces, users, and applications over the v2 REST API.
//!
//! # Features
//!
//! - Cursor-based paginated listings with forward/backward navigation
//! - Collecting every item of a multi-page listing in page order
//! - Bounded concurrent work dispatch for bulk operations
//! - Typed resources decoded from JSON responses
//!
//! # Example
//!
//! ```bash
//! # List every user in a space
//! ccctl users --space 0e4f6f7a-...
//!
//! # Only the first page, as JSON
//! ccctl users --org 9a2c... --first-page -o json
//!
//! # Create 150 users and add them to an org and space with 10 workers
//! ccctl populate --org 9a2c... --space 0e4f... --count 150 --workers 10
//! ```

pub mod cc;
pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod output;
pub mod ui;

pub use cc::{
    Application, CcClient, CcResource, Organization, Page, PaginatedList, RequestArguments,
    RequestPlan, Space, TokenResolver, User,
};
pub use cli::{Cli, Command, OutputFormat, PopulateArgs, UsersArgs};
pub use config::Config;
pub use dispatcher::{TaskError, WorkDispatcher, WorkResult};
pub use error::{CcError, Result};
pub use output::output_users;
