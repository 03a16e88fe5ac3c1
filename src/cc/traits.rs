//! Common traits and document shapes for Cloud Controller resources

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Common trait for all Cloud Controller resources (users, organizations, spaces, apps)
///
/// Ties a domain type to the JSON document the server returns for it, so
/// listings and create calls can be written once for every resource.
pub trait CcResource: Sized {
    /// Wire shape of a single resource
    type Document: DeserializeOwned;

    /// Build the domain value from its decoded document
    fn from_document(document: Self::Document) -> Self;

    /// Server-assigned identifier
    fn guid(&self) -> &str;
}

/// Metadata block shared by every resource document
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub guid: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A single resource as returned by the API: metadata plus entity attributes
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDocument<E> {
    pub metadata: Metadata,
    pub entity: E,
}

/// One page of a listing endpoint
#[derive(Deserialize, Debug)]
pub struct ListDocument<D> {
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub prev_url: Option<String>,
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default = "Vec::new")]
    pub resources: Vec<D>,
}
