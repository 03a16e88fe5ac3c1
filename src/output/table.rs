//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::{Formatter, UserRow};

/// Formatter for ASCII table output
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn render(&self, users: &[UserRow]) -> String {
        let mut table = Table::new();
        table.load_preset(NOTHING).set_header(vec![
            "GUID",
            "Username",
            "Active",
            "Admin",
            "Default Space",
        ]);

        for user in users {
            let active = if user.active { "Yes" } else { "No" };
            let admin = if user.admin { "Yes" } else { "No" };
            table.add_row(vec![
                user.guid.as_str(),
                user.username.as_str(),
                active,
                admin,
                user.default_space_guid.as_str(),
            ]);
        }

        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_formatter_empty() {
        let rendered = TableFormatter.render(&[]);
        assert!(rendered.contains("GUID"));
        assert!(rendered.contains("Username"));
    }

    #[test]
    fn test_table_formatter_with_data() {
        let rows = vec![UserRow {
            guid: "user-123".to_string(),
            username: "alice".to_string(),
            active: true,
            admin: false,
            default_space_guid: "space-1".to_string(),
        }];

        let rendered = TableFormatter.render(&rows);
        assert!(rendered.contains("user-123"));
        assert!(rendered.contains("alice"));
        assert!(rendered.contains("Yes"));
        assert!(rendered.contains("space-1"));
    }
}
