//! Wraps one parsed forecast page and selects its repeating day rows.

use crate::forecast::error::ForecastError;
use scraper::{ElementRef, Html, Selector};

/// Every forecast-day row carries this marker attribute, in both the daily and
/// the detailed view. The marker also identifies the "expandable detail" rows
/// the positional span lookup is restricted to.
const DAY_ROW_MARKER: &str = "[data-expand-tablechild-item]";

/// An opaque parsed markup tree for one forecast page.
///
/// Read-only and scoped to one HTTP response body; it exists only for the
/// duration of one extraction pass.
pub struct ForecastDocument {
    html: Html,
}

impl ForecastDocument {
    /// Parses a rendered page body. Parsing never fails: the underlying parser
    /// recovers from malformed markup the way browsers do.
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// All forecast-day rows of the document, in document order.
    pub(crate) fn day_rows(&self) -> Result<Vec<ElementRef<'_>>, ForecastError> {
        let selector = compile_selector(DAY_ROW_MARKER)?;
        Ok(self.html.select(&selector).collect())
    }

    /// Number of forecast-day rows the page rendered.
    pub fn day_row_count(&self) -> Result<usize, ForecastError> {
        Ok(self.day_rows()?.len())
    }
}

pub(crate) fn compile_selector(css: &str) -> Result<Selector, ForecastError> {
    Selector::parse(css).map_err(|e| ForecastError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}
