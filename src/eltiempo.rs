//! This module provides the main entry point for interacting with eltiempo.es.
//! It allows searching stations by name and fetching the merged 14-day
//! forecast for a station page slug.

use bon::bon;
use reqwest::Client;
use serde_json::Value;

use crate::clients::forecast_client::ForecastClient;
use crate::error::ElTiempoError;
use crate::forecast::fetch::PageFetcher;
use crate::stations::search::{StationSearch, DEFAULT_RESULT_LIMIT};

/// Root of every station page; the slug plus a view flag is appended to it.
pub const DEFAULT_BASE_URL: &str = "https://www.eltiempo.es/";

/// The JSON station-search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://www.eltiempo.es/api/weatherapi/search";

/// The main client struct for accessing eltiempo.es data.
///
/// This struct handles fetching the portal's rendered forecast pages and its
/// station-search endpoint. It owns a single [`reqwest::Client`], shared by
/// every request it issues.
///
/// Create an instance with [`ElTiempo::new()`] for the public portal, or
/// [`ElTiempo::with_endpoints()`] to point it elsewhere (a fixture server in
/// tests, a mirror).
///
/// # Examples
///
/// ```no_run
/// use eltiempo::{ElTiempo, ElTiempoError};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), ElTiempoError> {
/// let client = ElTiempo::new();
///
/// // Merged 14-day forecast for one station page slug.
/// let forecast = client.forecast().station("cordoba").call().await?;
/// assert_eq!(forecast.len(), 14);
///
/// // Station search, returned exactly as the endpoint reports it.
/// let stations = client.search_stations().query("cordoba").call().await?;
/// println!("{} candidate stations", stations.len());
/// # Ok(())
/// # }
/// ```
pub struct ElTiempo {
    pub(crate) fetcher: PageFetcher,
    station_search: StationSearch,
}

#[bon]
impl ElTiempo {
    /// Creates a client pointed at the public portal.
    pub fn new() -> Self {
        Self::with_endpoints(
            DEFAULT_BASE_URL.to_string(),
            DEFAULT_SEARCH_URL.to_string(),
        )
    }

    /// Creates a client with custom page and search endpoints.
    ///
    /// `base_url` must end with the separator the station slug is appended
    /// after (the public portal's root ends in `/`).
    pub fn with_endpoints(base_url: String, search_url: String) -> Self {
        let http = Client::new();
        Self {
            fetcher: PageFetcher::new(http.clone(), base_url),
            station_search: StationSearch::new(http, search_url),
        }
    }

    /// Searches stations by name.
    ///
    /// Returns the decoded JSON array exactly as the endpoint reported it —
    /// a pass-through, not a typed schema: the portal owns the object shape
    /// and this client does not reprocess it.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.query(&str)`: **Required.** The location name to search for.
    /// * `.limit(usize)`: Optional. Maximum number of results. Defaults to `100`.
    ///
    /// # Errors
    ///
    /// Returns [`ElTiempoError::StationSearch`] when the request fails or the
    /// response body is not a JSON array.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use eltiempo::{ElTiempo, ElTiempoError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ElTiempoError> {
    /// let client = ElTiempo::new();
    /// let stations = client
    ///     .search_stations()
    ///     .query("cordoba")
    ///     .limit(10)
    ///     .call()
    ///     .await?;
    /// for station in &stations {
    ///     println!("{} -> {}", station["id"], station["name"]);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn search_stations(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Value>, ElTiempoError> {
        let limit = limit.unwrap_or(DEFAULT_RESULT_LIMIT);
        Ok(self.station_search.query(query, limit).await?)
    }

    /// Returns a client for fetching merged daily forecasts.
    ///
    /// See [`ForecastClient`] for the builder that runs the fetch, extraction
    /// and merge pipeline.
    pub fn forecast(&self) -> ForecastClient<'_> {
        ForecastClient::new(self)
    }
}

impl Default for ElTiempo {
    fn default() -> Self {
        Self::new()
    }
}
