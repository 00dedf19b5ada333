//! The extraction rule table: which markup fragment holds which field.
//!
//! Everything the extractor knows about the page layout lives in this one
//! table, so a markup change on the portal means editing one descriptor here,
//! not chasing call sites. The descriptors are plain immutable data and are
//! passed into the extractor explicitly; tests can substitute their own.

/// How to locate one field inside a day row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStrategy {
    /// Take the first descendant matching `tag` that carries every class in
    /// `class` (whitespace-separated), and use its full text content.
    ClassLookup {
        tag: &'static str,
        class: &'static str,
    },
    /// Take the inline `span` sub-element at a fixed ordinal, counting all
    /// spans of the row in document order.
    SpanPosition { index: usize },
}

/// A named extraction rule for one field of a day row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Stable field identifier, used in error reports.
    pub name: &'static str,
    pub strategy: FieldStrategy,
}

impl FieldDescriptor {
    pub const fn class_lookup(
        name: &'static str,
        tag: &'static str,
        class: &'static str,
    ) -> Self {
        Self {
            name,
            strategy: FieldStrategy::ClassLookup { tag, class },
        }
    }

    pub const fn span_position(name: &'static str, index: usize) -> Self {
        Self {
            name,
            strategy: FieldStrategy::SpanPosition { index },
        }
    }
}

// Detailed ("detallada") view.
pub const DETALLADA_DATE: FieldDescriptor =
    FieldDescriptor::class_lookup("date", "div", "m_table_weather_day_date");
pub const PRECIPITATION_PROBABILITY: FieldDescriptor =
    FieldDescriptor::span_position("precipitation_probability", 0);
pub const CLOUD_PERCENTAGE: FieldDescriptor =
    FieldDescriptor::span_position("cloud_percentage", 1);
pub const ULTRAVIOLET_RADIATION: FieldDescriptor =
    FieldDescriptor::span_position("ultraviolet_radiation", 2);

// Daily ("dias") view.
pub const DIAS_DATE: FieldDescriptor =
    FieldDescriptor::class_lookup("date", "span", "m_table_weather_day_day");
pub const MAX_TEMPERATURE: FieldDescriptor =
    FieldDescriptor::class_lookup("max_temperature", "span", "m_table_weather_day_max_temp");
pub const MIN_TEMPERATURE: FieldDescriptor =
    FieldDescriptor::class_lookup("min_temperature", "span", "m_table_weather_day_min_temp");
pub const PRECIPITATION: FieldDescriptor = FieldDescriptor::class_lookup(
    "precipitation",
    "div",
    "m_table_weather_day_child m_table_weather_day_rain",
);
pub const WIND_SPEED: FieldDescriptor = FieldDescriptor::class_lookup(
    "wind_speed",
    "div",
    "m_table_weather_day_child m_table_weather_day_wind",
);
pub const SUNRISE: FieldDescriptor = FieldDescriptor::class_lookup(
    "sunrise",
    "div",
    "m_table_weather_day_child m_table_weather_day_dawn",
);
pub const SUNSET: FieldDescriptor = FieldDescriptor::class_lookup(
    "sunset",
    "div",
    "m_table_weather_day_child m_table_weather_day_nightfall",
);
