//! Organization module

mod api;
mod models;

pub use models::{
    CreateOrganizationRequest, Organization, OrganizationDocument, OrganizationEntity,
};
