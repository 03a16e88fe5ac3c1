//! CLI argument parsing

mod common;

use clap::{ArgGroup, Parser, Subcommand};

use crate::config::{api, defaults};

pub use common::OutputFormat;

/// Cloud Controller CLI
#[derive(Parser, Debug)]
#[command(name = "ccctl")]
#[command(version)]
#[command(
    about = "Manage Cloud Controller organizations, spaces, and users",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Cloud Controller API URL (e.g. https://api.example.com)
    #[arg(short = 'H', long, env = "CC_HOST", global = true)]
    pub host: Option<String>,

    /// API token (overrides CC_TOKEN and UAA_TOKEN)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(short = 'k', long, global = true, default_value_t = false)]
    pub skip_ssl_validation: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub output: OutputFormat,

    /// Hide progress spinners
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List users of a space or organization
    #[command(visible_alias = "user")]
    Users(UsersArgs),

    /// Create users in bulk and add them to an organization and space
    Populate(PopulateArgs),
}

/// Arguments for `ccctl users`
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("owner").required(true).args(["space", "org"])))]
pub struct UsersArgs {
    /// Space GUID (lists users holding any role in the space)
    #[arg(long)]
    pub space: Option<String>,

    /// Organization GUID (lists organization members)
    #[arg(long)]
    pub org: Option<String>,

    /// Only fetch the first page instead of walking every page
    #[arg(long, default_value_t = false)]
    pub first_page: bool,

    /// Results requested per page
    #[arg(long, default_value_t = api::DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}

/// Arguments for `ccctl populate`
#[derive(Parser, Debug)]
pub struct PopulateArgs {
    /// Organization GUID every new user joins
    #[arg(long)]
    pub org: String,

    /// Space GUID every new user becomes a developer of
    #[arg(long)]
    pub space: String,

    /// Number of users to create
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Number of concurrent workers
    #[arg(short = 'w', long, default_value_t = defaults::WORKERS)]
    pub workers: usize,

    /// Prefix for generated user GUIDs
    #[arg(long, default_value = "ccctl-user")]
    pub prefix: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_users_by_space() {
        let cli = Cli::parse_from(["ccctl", "users", "--space", "space-1"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert_eq!(cli.output, OutputFormat::Table);
        assert!(!cli.skip_ssl_validation);
        match cli.command {
            Command::Users(args) => {
                assert_eq!(args.space.as_deref(), Some("space-1"));
                assert!(args.org.is_none());
                assert!(!args.first_page);
                assert_eq!(args.page_size, api::DEFAULT_PAGE_SIZE);
            }
            other => panic!("Expected users command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_users_requires_owner() {
        assert!(Cli::try_parse_from(["ccctl", "users"]).is_err());
    }

    #[test]
    fn test_cli_users_rejects_both_owners() {
        assert!(Cli::try_parse_from(["ccctl", "users", "--space", "s", "--org", "o"]).is_err());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "ccctl",
            "users",
            "--org",
            "org-1",
            "--first-page",
            "-o",
            "json",
            "-H",
            "https://api.example.com",
            "-k",
        ]);
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.host.as_deref(), Some("https://api.example.com"));
        assert!(cli.skip_ssl_validation);
        match cli.command {
            Command::Users(args) => assert!(args.first_page),
            other => panic!("Expected users command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_populate_defaults() {
        let cli = Cli::parse_from(["ccctl", "populate", "--org", "o", "--space", "s"]);
        match cli.command {
            Command::Populate(args) => {
                assert_eq!(args.org, "o");
                assert_eq!(args.space, "s");
                assert_eq!(args.count, 1);
                assert_eq!(args.workers, defaults::WORKERS);
                assert_eq!(args.prefix, "ccctl-user");
            }
            other => panic!("Expected populate command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_populate_counts() {
        let cli = Cli::parse_from([
            "ccctl", "populate", "--org", "o", "--space", "s", "-n", "150", "-w", "10",
        ]);
        match cli.command {
            Command::Populate(args) => {
                assert_eq!(args.count, 150);
                assert_eq!(args.workers, 10);
            }
            other => panic!("Expected populate command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_invalid_output() {
        assert!(Cli::try_parse_from(["ccctl", "-o", "yaml", "users", "--space", "s"]).is_err());
    }
}
