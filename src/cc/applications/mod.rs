//! Application module

mod api;
mod models;

pub use models::{
    Application, ApplicationDocument, ApplicationEntity, CreateApplicationRequest,
};
