// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::entities::catalog_entry::CatalogEntry;

#[derive(Debug, Default)]
struct StoreState {
    list: Vec<CatalogEntry>,
    single: Option<CatalogEntry>,
}

/// In-memory state container the fetcher notifies after every successful
/// fetch, so a presentation layer can re-render without re-fetching. Writes
/// never fail and return nothing; the fetcher does not read it back.
#[derive(Debug, Default)]
pub struct CatalogStore {
    state: Arc<RwLock<StoreState>>,
}

impl Clone for CatalogStore {
    fn clone(&self) -> Self {
        CatalogStore {
            state: Arc::clone(&self.state),
        }
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current list with the given entries.
    pub async fn replace_list(&self, entries: Vec<CatalogEntry>) {
        let mut state = self.state.write().await;
        state.list = entries;
    }

    /// Replaces the current single record with the given entry.
    pub async fn replace_single(&self, entry: CatalogEntry) {
        let mut state = self.state.write().await;
        state.single = Some(entry);
    }

    pub async fn current_list(&self) -> Vec<CatalogEntry> {
        self.state.read().await.list.clone()
    }

    pub async fn current_single(&self) -> Option<CatalogEntry> {
        self.state.read().await.single.clone()
    }
}
