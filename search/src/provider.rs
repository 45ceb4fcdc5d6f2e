//! The search provider seam.

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use typeahead_core::{ProviderError, SearchResult};

/// Asynchronous lookup supplied by the surrounding application.
///
/// Expected to be side-effect free: the worker may call it for queries whose
/// results are then discarded.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError>;
}

#[async_trait]
impl<P> SearchProvider for Arc<P>
where
    P: SearchProvider + ?Sized,
{
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        (**self).search(query).await
    }
}

/// Adapts an async closure into a [`SearchProvider`].
pub struct FnProvider<F>(F);

impl<F> FnProvider<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F, Fut> SearchProvider for FnProvider<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<SearchResult>, ProviderError>> + Send,
{
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        (self.0)(query.to_string()).await
    }
}
