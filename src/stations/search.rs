//! The station-search collaborator: queries the portal's search endpoint and
//! hands the decoded JSON array back untouched.

use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::stations::error::StationSearchError;

/// Result pages are capped server-side; searches ask for 100 entries.
pub(crate) const DEFAULT_RESULT_LIMIT: usize = 100;

pub(crate) struct StationSearch {
    http: Client,
    search_url: String,
}

impl StationSearch {
    pub(crate) fn new(http: Client, search_url: String) -> Self {
        Self { http, search_url }
    }

    fn query_url(&self, name: &str, limit: usize) -> String {
        format!("{}?q={}&lim={}", self.search_url, name, limit)
    }

    /// Runs one search and returns the station objects exactly as the endpoint
    /// reported them. The array is a pass-through: no reprocessing, no schema.
    pub(crate) async fn query(
        &self,
        name: &str,
        limit: usize,
    ) -> Result<Vec<Value>, StationSearchError> {
        let url = self.query_url(name, limit);
        debug!("searching stations: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| StationSearchError::NetworkRequest(url.clone(), e))?;
        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                return Err(match e.status() {
                    Some(status) => StationSearchError::HttpStatus {
                        url,
                        status,
                        source: e,
                    },
                    None => StationSearchError::NetworkRequest(url, e),
                });
            }
        };
        let body = response
            .text()
            .await
            .map_err(|e| StationSearchError::NetworkRequest(url, e))?;
        Ok(serde_json::from_str(&body)?)
    }
}
