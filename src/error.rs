// SPDX-License-Identifier: GPL-3.0-only

use thiserror::Error;

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Any failure of an upstream listing or detail call. The variants tag the
/// failure site for diagnostics; callers treat every variant as total
/// failure of the operation that produced it.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("listing request failed: {0}")]
    Listing(#[source] BoxedError),

    #[error("detail request for '{name}' failed: {source}")]
    Detail {
        name: String,
        #[source]
        source: BoxedError,
    },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl UpstreamError {
    pub fn listing(source: impl Into<BoxedError>) -> Self {
        UpstreamError::Listing(source.into())
    }

    pub fn detail(name: impl Into<String>, source: impl Into<BoxedError>) -> Self {
        UpstreamError::Detail {
            name: name.into(),
            source: source.into(),
        }
    }
}
