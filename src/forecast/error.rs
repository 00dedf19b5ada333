use crate::types::daily_record::ForecastDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    // A located text fragment did not match the shape its coercion expects.
    // Never recovered or defaulted; the raw text is kept for diagnosis.
    #[error("Field '{field}' has malformed text {raw:?}")]
    Parse { field: &'static str, raw: String },

    // The detailed view intermittently renders fewer day rows than requested.
    // Kept distinct so callers can decide to re-fetch.
    #[error("Forecast data unavailable: found {found} day entries, expected {expected}")]
    DataUnavailable { expected: usize, found: usize },

    #[error("Views disagree on the date of day {index}: daily says '{daily}', detailed says '{detailed}'")]
    DateMismatch {
        index: usize,
        daily: ForecastDate,
        detailed: ForecastDate,
    },
}
