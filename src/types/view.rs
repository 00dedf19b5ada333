//! Defines the forecast views the portal can render and the opaque query flags
//! each view is addressed with.

use std::fmt;

/// Represents one of the forecast views rendered by eltiempo.es.
///
/// Each view is a different rendering of the same station page, selected by a
/// fixed query-flag suffix. The flags are opaque strings owned by the portal;
/// they pin the row count and the measurement units so the extraction rules see
/// a stable document shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForecastView {
    /// The per-day overview ("dias"): date, max/min temperature, precipitation,
    /// wind, sunrise and sunset for every forecast day.
    Dias,
    /// The detailed breakdown ("detallada"): per-day precipitation probability,
    /// cloud percentage and ultraviolet label.
    Detallada,
    /// The detailed breakdown with pinned row count and units.
    LongDetallada,
    /// The hour-by-hour view ("por_hora").
    PorHora,
}

impl ForecastView {
    pub(crate) fn query_flag(&self) -> &'static str {
        match self {
            ForecastView::Dias => "~ROW_NUMBER_5~~TEMP_UNIT_c~~WIND_UNIT_kmh~",
            ForecastView::Detallada => "detallada",
            ForecastView::LongDetallada => "detallada~ROW_NUMBER_5~~TEMP_UNIT_c~~WIND_UNIT_kmh~",
            ForecastView::PorHora => "por_hora~ROW_NUMBER_6~~TEMP_UNIT_c~~WIND_UNIT_kmh~",
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            ForecastView::Dias => "dias",
            ForecastView::Detallada => "detallada",
            ForecastView::LongDetallada => "long_detallada",
            ForecastView::PorHora => "por_hora",
        }
    }

    /// Builds the page URL for this view of a station page.
    ///
    /// The dias view appends its flag directly after `.html`; every other view
    /// goes through the `?v=` query parameter.
    pub(crate) fn page_url(&self, base_url: &str, station: &str) -> String {
        match self {
            ForecastView::Dias => {
                format!("{}{}.html{}", base_url, station, self.query_flag())
            }
            _ => format!("{}{}.html?v={}", base_url, station, self.query_flag()),
        }
    }
}

/// Allows formatting a `ForecastView` variant using its `name`.
///
/// # Examples
///
/// ```
/// use eltiempo::ForecastView;
///
/// assert_eq!(format!("{}", ForecastView::Dias), "dias");
/// assert_eq!(ForecastView::Detallada.to_string(), "detallada");
/// ```
impl fmt::Display for ForecastView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
