use futures::StreamExt;

use crate::core::source::CatalogSource;
use crate::core::store::CatalogStore;
use crate::entities::catalog_entry::CatalogEntry;
use crate::error::UpstreamError;

/// Upper bound on concurrent detail requests for one page fetch.
pub const DEFAULT_DETAIL_CONCURRENCY: usize = 20;

/// Translates page/name requests into upstream catalog calls and assembles
/// normalized [`CatalogEntry`] values. Stateless per call: no retries, no
/// caching, no cancellation.
#[derive(Debug, Clone)]
pub struct CatalogFetcher<S> {
    source: S,
    store: CatalogStore,
    max_concurrency: usize,
}

impl<S: CatalogSource> CatalogFetcher<S> {
    pub fn new(source: S, store: CatalogStore) -> Self {
        CatalogFetcher {
            source,
            store,
            max_concurrency: DEFAULT_DETAIL_CONCURRENCY,
        }
    }

    /// Caps the detail fan-out of [`Self::fetch_page`]. Does not change what
    /// any single call returns, only how many requests are in flight at once.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Fetches one listing page of up to `limit` names starting at `page`,
    /// then one detail record per name, concurrently. Results come back in
    /// listing order. Any listing or detail failure fails the whole call;
    /// no partial list is ever returned.
    pub async fn fetch_page(
        &self,
        page: i64,
        limit: i64,
    ) -> Result<Vec<CatalogEntry>, UpstreamError> {
        if page < 0 || limit <= 0 {
            return Err(UpstreamError::InvalidRequest(format!(
                "page must be >= 0 and limit > 0, got page {page}, limit {limit}"
            )));
        }

        let names = match self.source.list_names(page, limit).await {
            Ok(names) => names,
            Err(err) => {
                tracing::error!("catalog listing failed (page {page}, limit {limit}): {err}");
                return Err(err);
            }
        };

        let concurrency = self.max_concurrency.min(names.len()).max(1);

        // `buffered` keeps request order, so the page assembles by listing
        // index regardless of completion order.
        let results = futures::stream::iter(names)
            .map(|name| {
                let source = &self.source;
                async move {
                    let pokemon = source.detail(&name).await?;
                    Ok(CatalogEntry::from(pokemon))
                }
            })
            .buffered(concurrency)
            .collect::<Vec<Result<CatalogEntry, UpstreamError>>>()
            .await;

        let mut entries = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    tracing::error!("catalog detail fetch failed: {err}");
                    return Err(err);
                }
            }
        }

        self.store.replace_list(entries.clone()).await;
        Ok(entries)
    }

    /// Fetches the detail record for one name. Matching is case-insensitive;
    /// the name is lowercased before the upstream call.
    pub async fn fetch_by_name(&self, name: &str) -> Result<CatalogEntry, UpstreamError> {
        if name.trim().is_empty() {
            return Err(UpstreamError::InvalidRequest(
                "name must be non-empty".to_string(),
            ));
        }

        let normalized = name.to_lowercase();
        match self.source.detail(&normalized).await {
            Ok(pokemon) => {
                let entry = CatalogEntry::from(pokemon);
                self.store.replace_single(entry.clone()).await;
                Ok(entry)
            }
            Err(err) => {
                tracing::error!("catalog detail fetch failed for '{normalized}': {err}");
                Err(err)
            }
        }
    }

    /// Single entry point for callers: a non-empty `name` fetches that one
    /// record (pagination parameters ignored), an empty one fetches a page.
    pub async fn fetch_data(
        &self,
        name: &str,
        page: i64,
        limit: i64,
    ) -> Result<Vec<CatalogEntry>, UpstreamError> {
        if name.is_empty() {
            self.fetch_page(page, limit).await
        } else {
            Ok(vec![self.fetch_by_name(name).await?])
        }
    }
}
