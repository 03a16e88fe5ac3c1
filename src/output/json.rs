//! JSON output formatter

use serde::Serialize;

use super::{Formatter, UserRow};

/// Formatter for JSON output
pub struct JsonFormatter;

/// Serializable user for JSON output
#[derive(Serialize)]
struct JsonUser<'a> {
    guid: &'a str,
    username: &'a str,
    active: bool,
    admin: bool,
    default_space_guid: &'a str,
}

impl<'a> From<&'a UserRow> for JsonUser<'a> {
    fn from(row: &'a UserRow) -> Self {
        Self {
            guid: &row.guid,
            username: &row.username,
            active: row.active,
            admin: row.admin,
            default_space_guid: &row.default_space_guid,
        }
    }
}

impl Formatter for JsonFormatter {
    fn render(&self, users: &[UserRow]) -> String {
        let json_users: Vec<JsonUser> = users.iter().map(JsonUser::from).collect();

        match serde_json::to_string_pretty(&json_users) {
            Ok(json) => json,
            Err(e) => format!("Error serializing to JSON: {}", e),
        }
    }
}
