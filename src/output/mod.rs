//! Output formatting module
//!
//! Handles different output formats: table, JSON

mod json;
mod table;

use crate::cc::User;
use crate::cli::OutputFormat;

pub use self::json::JsonFormatter;
pub use self::table::TableFormatter;

/// Trait for output formatters
pub trait Formatter {
    /// Format the users as printable text
    fn render(&self, users: &[UserRow]) -> String;

    /// Format and print the users
    fn format(&self, users: &[UserRow]) {
        println!("{}", self.render(users));
    }
}

/// Flattened user data for output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub guid: String,
    pub username: String,
    pub active: bool,
    pub admin: bool,
    pub default_space_guid: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            guid: user.guid.clone(),
            username: user.username().to_string(),
            active: user.active,
            admin: user.admin,
            default_space_guid: user.default_space_guid.clone().unwrap_or_default(),
        }
    }
}

/// Print users in the requested format
pub fn output_users(users: &[User], format: OutputFormat) {
    let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
    match format {
        OutputFormat::Table => TableFormatter.format(&rows),
        OutputFormat::Json => JsonFormatter.format(&rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_row_from_user() {
        let user = User {
            guid: "user-1".to_string(),
            username: Some("alice".to_string()),
            admin: true,
            active: false,
            default_space_guid: None,
        };
        let row = UserRow::from(&user);
        assert_eq!(row.guid, "user-1");
        assert_eq!(row.username, "alice");
        assert!(row.admin);
        assert!(!row.active);
        assert_eq!(row.default_space_guid, "");
    }

    #[test]
    fn test_output_users_empty() {
        // Should not panic with empty input
        output_users(&[], OutputFormat::Table);
        output_users(&[], OutputFormat::Json);
    }
}
