//! Provides the `ForecastClient` for fetching a station's merged daily
//! forecast.
//!
//! This client acts as an intermediate builder, obtained via
//! [`ElTiempo::forecast()`], that runs the whole pipeline: fetch both forecast
//! views, extract every field sequence, and merge them into one validated
//! 14-day sequence of [`DailyRecord`]s.

use bon::bon;

use crate::eltiempo::ElTiempo;
use crate::error::ElTiempoError;
use crate::forecast::document::ForecastDocument;
use crate::forecast::records_from_documents;
use crate::types::daily_record::DailyRecord;
use crate::types::view::ForecastView;

/// A client builder specifically for fetching merged daily forecasts.
///
/// Instances are created by calling [`ElTiempo::forecast()`]. Calling
/// `.station(slug).call()` fetches the daily and the detailed view of that
/// station page concurrently and returns
/// `Result<Vec<DailyRecord>, ElTiempoError>`.
pub struct ForecastClient<'a> {
    /// A reference to the main ElTiempo client instance.
    client: &'a ElTiempo,
}

#[bon]
impl<'a> ForecastClient<'a> {
    /// Creates a new `ForecastClient`.
    ///
    /// This is typically called internally by [`ElTiempo::forecast()`] and not
    /// directly by users.
    pub(crate) fn new(client: &'a ElTiempo) -> Self {
        Self { client }
    }

    /// Fetches the merged 14-day forecast for a station page slug.
    ///
    /// Both views are requested concurrently; the two documents are required
    /// to describe the same window, which the positional merge cross-checks
    /// date by date.
    ///
    /// # Arguments
    ///
    /// * `station` - The station page slug as it appears in the portal URL
    ///   (e.g. `"cordoba"` for `eltiempo.es/cordoba.html`).
    ///
    /// # Errors
    ///
    /// Returns [`ElTiempoError::Forecast`] wrapping:
    /// * a network or HTTP-status failure for either page,
    /// * `Parse` when a fragment does not match its coercion shape,
    /// * `DataUnavailable` when the detailed view rendered fewer than 14 day
    ///   rows — a known intermittent portal issue; callers may retry the call,
    /// * `DateMismatch` when the two views disagree on a date.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use eltiempo::{ElTiempo, ElTiempoError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ElTiempoError> {
    /// let client = ElTiempo::new();
    /// let forecast = client.forecast().station("cordoba").call().await?;
    /// for day in &forecast {
    ///     println!(
    ///         "{}: {}° / {}°, rain {:.0}%",
    ///         day.date,
    ///         day.max_temperature,
    ///         day.min_temperature,
    ///         day.precipitation_probability * 100.0
    ///     );
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = station)]
    #[doc(hidden)]
    pub async fn build_station(
        &self,
        #[builder(start_fn)] station: &str,
    ) -> Result<Vec<DailyRecord>, ElTiempoError> {
        let fetcher = &self.client.fetcher;
        let (dias_body, detallada_body) = tokio::try_join!(
            fetcher.view_page(station, ForecastView::Dias),
            fetcher.view_page(station, ForecastView::Detallada),
        )?;

        let dias = ForecastDocument::parse(&dias_body);
        let detallada = ForecastDocument::parse(&detallada_body);
        Ok(records_from_documents(&dias, &detallada)?)
    }
}
