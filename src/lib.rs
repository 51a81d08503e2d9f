// SPDX-License-Identifier: GPL-3.0-only

pub mod core;
pub mod entities;
pub mod error;
pub mod utils;

pub use crate::core::api::CatalogFetcher;
pub use crate::core::source::{CatalogSource, PokeApiSource};
pub use crate::core::store::CatalogStore;
pub use crate::entities::catalog_entry::{CatalogEntry, CatalogStat};
pub use crate::error::UpstreamError;
