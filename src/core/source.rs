use std::{future::Future, sync::Arc, time::Duration};

use rustemon::client::{
    CacheMode, CacheOptions, MokaManager, RustemonClient, RustemonClientBuilder,
};
use rustemon::model::pokemon::Pokemon;

use crate::error::UpstreamError;

/// The two read operations the fetcher needs from the upstream catalog: a
/// paged listing of names and a per-name detail lookup. Anything exposing
/// this shape (PokéAPI, a local fixture) satisfies the contract.
pub trait CatalogSource {
    fn list_names(
        &self,
        page: i64,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<String>, UpstreamError>>;

    fn detail(&self, name: &str) -> impl Future<Output = Result<Pokemon, UpstreamError>>;
}

/// PokéAPI-backed source. The client handle is stateless per call and shared
/// across fetches without synchronization.
#[derive(Debug)]
pub struct PokeApiSource {
    client: Arc<RustemonClient>,
}

impl Clone for PokeApiSource {
    fn clone(&self) -> Self {
        PokeApiSource {
            client: Arc::clone(&self.client),
        }
    }
}

impl Default for PokeApiSource {
    fn default() -> Self {
        Self {
            client: Arc::new(
                RustemonClientBuilder::default()
                    .with_manager(MokaManager::default())
                    .with_mode(CacheMode::NoStore)
                    .with_options(CacheOptions {
                        shared: true,
                        cache_heuristic: 0.1,
                        immutable_min_time_to_live: Duration::from_secs(3600),
                        ignore_cargo_cult: true,
                    })
                    .try_build()
                    .unwrap(),
            ),
        }
    }
}

impl CatalogSource for PokeApiSource {
    async fn list_names(&self, page: i64, limit: i64) -> Result<Vec<String>, UpstreamError> {
        let listing = rustemon::pokemon::pokemon::get_page_with_param(page, limit, &self.client)
            .await
            .map_err(UpstreamError::listing)?;

        Ok(listing.results.into_iter().map(|entry| entry.name).collect())
    }

    async fn detail(&self, name: &str) -> Result<Pokemon, UpstreamError> {
        rustemon::pokemon::pokemon::get_by_name(name, &self.client)
            .await
            .map_err(|err| UpstreamError::detail(name, err))
    }
}
