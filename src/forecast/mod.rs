pub mod document;
pub mod error;
pub mod extract;
pub(crate) mod fetch;
pub mod merge;
pub mod selectors;

use crate::types::daily_record::DailyRecord;
use document::ForecastDocument;
use error::ForecastError;
use extract::{DetalladaFields, DiasFields};

/// Runs the whole extraction pipeline over two already-fetched documents.
///
/// This is the network-free seam of the crate: extract every field sequence
/// from each view, then merge them positionally. Both documents must describe
/// the same 14-day window starting from the same day; that guarantee is owned
/// by whoever fetched them.
///
/// # Errors
///
/// Returns [`ForecastError::Parse`] when a located fragment does not match its
/// coercion shape, [`ForecastError::DataUnavailable`] when the detailed view
/// rendered short, and [`ForecastError::DateMismatch`] when the two views
/// disagree on a date.
pub fn records_from_documents(
    dias: &ForecastDocument,
    detallada: &ForecastDocument,
) -> Result<Vec<DailyRecord>, ForecastError> {
    let detallada_fields = DetalladaFields::from_document(detallada)?;
    let dias_fields = DiasFields::from_document(dias)?;
    merge::merge(&detallada_fields, &dias_fields)
}
