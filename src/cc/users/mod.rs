//! User module

mod api;
mod commands;
mod models;

pub use commands::{generate_user_guids, run_populate_command, run_users_command};
pub use models::{CreateUserRequest, User, UserDocument, UserEntity};
