use crate::forecast::error::ForecastError;
use crate::stations::error::StationSearchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ElTiempoError {
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    StationSearch(#[from] StationSearchError),
}
