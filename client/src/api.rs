use anyhow::{Context, Result};
use pokedex_protocol::{
    CreatureRecord, ParseError, SpeciesDetail, parse_creature, parse_species, pokemon_url,
    species_url,
};

use crate::config::ApiConfig;
use crate::source::{ApiError, CreatureSource, fetch_catalog};

/// HTTP client for the PokeAPI endpoints
#[derive(Debug, Clone)]
pub struct PokeApi {
    http: reqwest::Client,
    config: ApiConfig,
}

impl PokeApi {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch every creature in the configured roster
    pub async fn fetch_roster(&self) -> Result<Vec<CreatureRecord>, ApiError> {
        fetch_catalog(self, &self.config.roster).await
    }

    async fn get<T>(
        &self,
        url: String,
        parse: fn(&str) -> Result<T, ParseError>,
    ) -> Result<T, ApiError> {
        tracing::debug!(url = %url, "GET");

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(source) => return Err(ApiError::Request { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Unexpected response status");
            return Err(ApiError::Status { url, status });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(source) => return Err(ApiError::Request { url, source }),
        };

        parse(&body).map_err(|source| ApiError::Parse { url, source })
    }
}

impl CreatureSource for PokeApi {
    async fn fetch_creature(&self, name: &str) -> Result<CreatureRecord, ApiError> {
        let url = pokemon_url(&self.config.pokemon_base, name);
        self.get(url, parse_creature).await
    }

    async fn fetch_species(&self, id: u32) -> Result<SpeciesDetail, ApiError> {
        let url = species_url(&self.config.species_base, id);
        self.get(url, parse_species).await
    }
}
