mod clients;
mod eltiempo;
mod error;
mod forecast;
mod stations;
mod types;

pub use eltiempo::*;
pub use error::ElTiempoError;

pub use clients::forecast_client::*;

pub use forecast::document::ForecastDocument;
pub use forecast::extract::{
    cloud_percentages, detallada_dates, dias_dates, extract, max_temperatures, min_temperatures,
    precipitation_probabilities, precipitations, sunrise_times, sunset_times,
    ultraviolet_radiations, wind_speeds, DetalladaFields, DiasFields, ExtractedValue,
};
pub use forecast::merge::{merge, FORECAST_DAYS};
pub use forecast::records_from_documents;
pub use forecast::selectors::*;

pub use types::daily_record::{DailyRecord, ForecastDate};
pub use types::view::ForecastView;

pub use forecast::error::ForecastError;
pub use stations::error::StationSearchError;
