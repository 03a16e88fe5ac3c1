//! Space module

mod api;
mod models;

pub use models::{CreateSpaceRequest, Space, SpaceDocument, SpaceEntity};
