use futures_util::future::try_join_all;
use pokedex_protocol::{CreatureRecord, ParseError, SpeciesDetail};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },

    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Could not parse response from {url}: {source}")]
    Parse { url: String, source: ParseError },
}

impl ApiError {
    pub fn url(&self) -> &str {
        match self {
            Self::Request { url, .. } | Self::Status { url, .. } | Self::Parse { url, .. } => url,
        }
    }
}

/// Provider of creature and species records.
///
/// [`crate::PokeApi`] is the HTTP implementation; anything else (fixtures,
/// caches) can stand in for it.
#[allow(async_fn_in_trait)]
pub trait CreatureSource {
    /// Fetch one creature by name
    async fn fetch_creature(&self, name: &str) -> Result<CreatureRecord, ApiError>;

    /// Fetch the species detail for a creature id. Never cached.
    async fn fetch_species(&self, id: u32) -> Result<SpeciesDetail, ApiError>;
}

/// Fetch every named creature concurrently.
///
/// All-or-nothing: either every record comes back in `names` order, or the
/// first failure is returned and the rest are dropped.
pub async fn fetch_catalog<S: CreatureSource>(
    source: &S,
    names: &[String],
) -> Result<Vec<CreatureRecord>, ApiError> {
    tracing::info!(count = names.len(), "Fetching catalog");

    let fetches = names.iter().map(|name| source.fetch_creature(name));
    let records = try_join_all(fetches).await.inspect_err(|e| {
        tracing::error!(url = e.url(), error = %e, "Catalog fetch failed");
    })?;

    tracing::info!(count = records.len(), "Catalog fetched");
    Ok(records)
}
