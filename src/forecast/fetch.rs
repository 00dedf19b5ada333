//! Fetches rendered forecast pages. Pure I/O: all decision logic lives in the
//! extraction and merge modules.

use log::debug;
use reqwest::Client;

use crate::forecast::error::ForecastError;
use crate::types::view::ForecastView;

pub(crate) struct PageFetcher {
    http: Client,
    base_url: String,
}

impl PageFetcher {
    pub(crate) fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Downloads the rendered body of one view of a station page.
    pub(crate) async fn view_page(
        &self,
        station: &str,
        view: ForecastView,
    ) -> Result<String, ForecastError> {
        let url = view.page_url(&self.base_url, station);
        debug!("fetching {} page: {}", view, url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ForecastError::NetworkRequest(url.clone(), e))?;
        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                return Err(match e.status() {
                    Some(status) => ForecastError::HttpStatus {
                        url,
                        status,
                        source: e,
                    },
                    None => ForecastError::NetworkRequest(url, e),
                });
            }
        };
        response
            .text()
            .await
            .map_err(|e| ForecastError::NetworkRequest(url, e))
    }
}
