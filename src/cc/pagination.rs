//! Cursor-based paginated listings
//!
//! A [`PaginatedList`] holds one page of a listing endpoint plus the cursor
//! URLs the server issued for its neighbours. Navigation never computes
//! offsets: the next/prev cursor is re-parsed into a fresh [`RequestPlan`]
//! and fetched as-is, whatever cursor encoding the server uses.
//!
//! Every fetch or navigation returns a new list value. The receiver is never
//! modified, so a failed fetch leaves the previously held page intact.

use log::debug;
use reqwest::Method;
use serde::Serialize;
use std::collections::HashSet;

use crate::cc::client::{CcClient, RequestArguments};
use crate::cc::request_plan::RequestPlan;
use crate::cc::traits::{CcResource, ListDocument};
use crate::config::api;
use crate::error::{CcError, Result};

/// Decoded contents of one listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub total_results: u32,
    pub total_pages: u32,
    pub next_url: Option<String>,
    pub prev_url: Option<String>,
    pub items: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            total_results: 0,
            total_pages: 0,
            next_url: None,
            prev_url: None,
            items: Vec::new(),
        }
    }
}

impl<T: CcResource> Page<T> {
    /// Convert a decoded list document, preserving server item order
    ///
    /// Empty cursor strings are normalised to `None`.
    pub fn from_document(document: ListDocument<T::Document>) -> Self {
        Self {
            total_results: document.total_results,
            total_pages: document.total_pages,
            next_url: document.next_url.filter(|u| !u.is_empty()),
            prev_url: document.prev_url.filter(|u| !u.is_empty()),
            items: document
                .resources
                .into_iter()
                .map(T::from_document)
                .collect(),
        }
    }
}

/// One page of a listing plus the means to walk to its neighbours
#[derive(Debug, Clone)]
pub struct PaginatedList<T> {
    client: CcClient,
    plan: RequestPlan,
    page: Page<T>,
}

impl<T: CcResource> PaginatedList<T> {
    /// Create an unfetched list for a plan
    pub fn new(client: CcClient, plan: RequestPlan) -> Self {
        Self {
            client,
            plan,
            page: Page::default(),
        }
    }

    /// Unfetched copy of this list whose plan carries one more query pair
    pub fn with_query(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(self.client.clone(), self.plan.with_query(key, value))
    }

    /// Create a list and fetch its first page
    pub async fn fetch_first(client: CcClient, plan: RequestPlan, token: &str) -> Result<Self> {
        Self::new(client, plan).fetch(token).await
    }

    /// Fetch the page described by this list's plan
    ///
    /// Requires HTTP 200. Returns a new list; `self` is left untouched on
    /// both success and failure.
    pub async fn fetch(&self, token: &str) -> Result<Self> {
        let args = RequestArguments::new(Method::GET, self.plan.path(), token)
            .query(self.plan.query().to_vec())
            .accept(&[api::STATUS_OK]);

        let document: ListDocument<T::Document> = self.client.execute_json(args).await?;
        let page = Page::from_document(document);

        debug!(
            "Fetched {} items from {} (total {} across {} pages)",
            page.items.len(),
            self.plan.path(),
            page.total_results,
            page.total_pages
        );

        Ok(Self {
            client: self.client.clone(),
            plan: self.plan.clone(),
            page,
        })
    }

    /// Whether the server issued a cursor for a later page
    pub fn has_next_page(&self) -> bool {
        self.next_url().is_some()
    }

    /// Whether the server issued a cursor for an earlier page
    pub fn has_prev_page(&self) -> bool {
        self.prev_url().is_some()
    }

    /// Fetch the following page
    pub async fn next(&self, token: &str) -> Result<Self> {
        let cursor = self
            .next_url()
            .ok_or_else(|| CcError::Pagination(format!("{} has no next page", self.plan.path())))?;
        self.follow(cursor, token).await
    }

    /// Fetch the preceding page
    pub async fn prev(&self, token: &str) -> Result<Self> {
        let cursor = self.prev_url().ok_or_else(|| {
            CcError::Pagination(format!("{} has no previous page", self.plan.path()))
        })?;
        self.follow(cursor, token).await
    }

    async fn follow(&self, cursor: &str, token: &str) -> Result<Self> {
        let plan = RequestPlan::from_cursor(cursor)?;
        debug!("Following cursor {}", cursor);
        Self::new(self.client.clone(), plan).fetch(token).await
    }

    /// Collect every item across all pages in page order
    ///
    /// Walks backward from this page to the first, then forward to the last.
    /// Items from earlier pages come first, then this page, then later pages.
    /// The first failing fetch aborts the walk and nothing partial is returned.
    /// A cursor URL seen twice is reported as a cycle.
    pub async fn collect_all(&self, token: &str) -> Result<Vec<T>>
    where
        T: Clone,
    {
        let mut visited: HashSet<String> = HashSet::new();

        let mut earlier: Vec<Vec<T>> = Vec::new();
        let mut cursor = self.prev_url().map(str::to_string);
        while let Some(url) = cursor {
            Self::visit(&mut visited, &url)?;
            let list = self.follow(&url, token).await?;
            cursor = list.prev_url().map(str::to_string);
            earlier.push(list.into_items());
        }

        let mut items: Vec<T> = earlier.into_iter().rev().flatten().collect();
        items.extend(self.page.items.iter().cloned());

        let mut cursor = self.next_url().map(str::to_string);
        while let Some(url) = cursor {
            Self::visit(&mut visited, &url)?;
            let list = self.follow(&url, token).await?;
            cursor = list.next_url().map(str::to_string);
            items.extend(list.into_items());
        }

        debug!("Collected {} items from {}", items.len(), self.plan.path());
        Ok(items)
    }

    fn visit(visited: &mut HashSet<String>, url: &str) -> Result<()> {
        if visited.insert(url.to_string()) {
            Ok(())
        } else {
            Err(CcError::Pagination(format!(
                "cursor cycle detected: '{}' was already visited",
                url
            )))
        }
    }

    /// Create a resource in this listing's collection (requires HTTP 201)
    pub async fn create<B: Serialize>(&self, body: &B, token: &str) -> Result<T> {
        let args = RequestArguments::new(Method::POST, self.plan.path(), token)
            .body(serde_json::to_value(body)?)
            .accept(&[api::STATUS_CREATED]);

        let document: T::Document = self.client.execute_json(args).await?;
        Ok(T::from_document(document))
    }

    /// Associate a resource with the listing's owner (requires HTTP 201)
    pub async fn associate(&self, guid: &str, token: &str) -> Result<()> {
        let path = self.plan.child_path(guid);
        debug!("Associating {}", path);
        let args =
            RequestArguments::new(Method::PUT, path, token).accept(&[api::STATUS_CREATED]);
        self.client.execute(args).await?;
        Ok(())
    }

    /// Remove an association (requires HTTP 204)
    pub async fn dissociate(&self, guid: &str, token: &str) -> Result<()> {
        let path = self.plan.child_path(guid);
        debug!("Dissociating {}", path);
        let args =
            RequestArguments::new(Method::DELETE, path, token).accept(&[api::STATUS_NO_CONTENT]);
        self.client.execute(args).await?;
        Ok(())
    }
}

impl<T> PaginatedList<T> {
    /// Cursor for the following page, if any
    pub fn next_url(&self) -> Option<&str> {
        self.page.next_url.as_deref().filter(|u| !u.is_empty())
    }

    /// Cursor for the preceding page, if any
    pub fn prev_url(&self) -> Option<&str> {
        self.page.prev_url.as_deref().filter(|u| !u.is_empty())
    }

    pub fn total_results(&self) -> u32 {
        self.page.total_results
    }

    pub fn total_pages(&self) -> u32 {
        self.page.total_pages
    }

    /// Items on the current page
    pub fn items(&self) -> &[T] {
        &self.page.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.page.items
    }

    pub fn page(&self) -> &Page<T> {
        &self.page
    }

    pub fn plan(&self) -> &RequestPlan {
        &self.plan
    }
}
