//! The field extractor: locates one markup fragment per day row and coerces
//! its text into a typed value.
//!
//! Extraction is a pure function of the parsed document. A row that lacks the
//! target element contributes no entry (skipped, not null), so callers must
//! not assume index alignment for class-lookup fields unless every day has the
//! field; short results surface as [`ForecastError::DataUnavailable`] when the
//! merge validates row counts.

use log::trace;
use scraper::ElementRef;

use crate::forecast::document::{compile_selector, ForecastDocument};
use crate::forecast::error::ForecastError;
use crate::forecast::selectors::{self, FieldDescriptor, FieldStrategy};
use crate::types::daily_record::ForecastDate;

/// Raw text pulled from one day row for one field, prior to coercion.
pub type ExtractedValue = String;

/// Runs one extraction rule over every day row of a document.
///
/// Returns one entry per row in document order, or fewer if a row lacks the
/// target element (class lookup with no match, or fewer spans than the
/// required ordinal).
pub fn extract(
    document: &ForecastDocument,
    descriptor: &FieldDescriptor,
) -> Result<Vec<ExtractedValue>, ForecastError> {
    let rows = document.day_rows()?;
    let values: Vec<ExtractedValue> = match descriptor.strategy {
        FieldStrategy::ClassLookup { tag, class } => {
            let selector = compile_selector(&class_selector(tag, class))?;
            rows.iter()
                .filter_map(|row| row.select(&selector).next().map(element_text))
                .collect()
        }
        FieldStrategy::SpanPosition { index } => {
            let selector = compile_selector("span")?;
            rows.iter()
                .filter_map(|row| row.select(&selector).nth(index).map(element_text))
                .collect()
        }
    };
    trace!(
        "extracted {} of {} rows for field '{}'",
        values.len(),
        rows.len(),
        descriptor.name
    );
    Ok(values)
}

fn class_selector(tag: &str, class: &str) -> String {
    let mut css = String::from(tag);
    for name in class.split_whitespace() {
        css.push('.');
        css.push_str(name);
    }
    css
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

// --- Typed per-field getters ---

/// Dates of the detailed view, rendered as `<weekday> <day> <month>`; the
/// weekday is discarded.
pub fn detallada_dates(document: &ForecastDocument) -> Result<Vec<ForecastDate>, ForecastError> {
    let descriptor = selectors::DETALLADA_DATE;
    extract(document, &descriptor)?
        .iter()
        .map(|raw| date_from_tokens(descriptor.name, raw, 1))
        .collect()
}

/// Dates of the daily view, rendered as `<day> <month>`.
pub fn dias_dates(document: &ForecastDocument) -> Result<Vec<ForecastDate>, ForecastError> {
    let descriptor = selectors::DIAS_DATE;
    extract(document, &descriptor)?
        .iter()
        .map(|raw| date_from_tokens(descriptor.name, raw, 0))
        .collect()
}

/// Maximum day temperatures in degrees Celsius.
pub fn max_temperatures(document: &ForecastDocument) -> Result<Vec<i32>, ForecastError> {
    temperatures(document, selectors::MAX_TEMPERATURE)
}

/// Minimum day temperatures in degrees Celsius.
pub fn min_temperatures(document: &ForecastDocument) -> Result<Vec<i32>, ForecastError> {
    temperatures(document, selectors::MIN_TEMPERATURE)
}

fn temperatures(
    document: &ForecastDocument,
    descriptor: FieldDescriptor,
) -> Result<Vec<i32>, ForecastError> {
    extract(document, &descriptor)?
        .iter()
        .map(|raw| {
            let value = drop_unit(descriptor.name, raw, token(descriptor.name, raw, 0)?)?;
            parse_int(descriptor.name, raw, value)
        })
        .collect()
}

/// Water precipitation sheet in millimetres; the value is the second
/// whitespace token of the block text.
pub fn precipitations(document: &ForecastDocument) -> Result<Vec<f64>, ForecastError> {
    let descriptor = selectors::PRECIPITATION;
    extract(document, &descriptor)?
        .iter()
        .map(|raw| parse_float(descriptor.name, raw, token(descriptor.name, raw, 1)?))
        .collect()
}

/// Wind speeds in km/h; the value is the second whitespace token of the block
/// text (the first is the direction label of the nested span).
pub fn wind_speeds(document: &ForecastDocument) -> Result<Vec<i32>, ForecastError> {
    let descriptor = selectors::WIND_SPEED;
    extract(document, &descriptor)?
        .iter()
        .map(|raw| parse_int(descriptor.name, raw, token(descriptor.name, raw, 1)?))
        .collect()
}

/// Sunrise time tokens, kept as strings.
pub fn sunrise_times(document: &ForecastDocument) -> Result<Vec<String>, ForecastError> {
    first_tokens(document, selectors::SUNRISE)
}

/// Sunset time tokens, kept as strings.
pub fn sunset_times(document: &ForecastDocument) -> Result<Vec<String>, ForecastError> {
    first_tokens(document, selectors::SUNSET)
}

fn first_tokens(
    document: &ForecastDocument,
    descriptor: FieldDescriptor,
) -> Result<Vec<String>, ForecastError> {
    extract(document, &descriptor)?
        .iter()
        .map(|raw| Ok(token(descriptor.name, raw, 0)?.to_string()))
        .collect()
}

/// Precipitation probabilities as fractions of one (0.73 for "73%").
pub fn precipitation_probabilities(
    document: &ForecastDocument,
) -> Result<Vec<f64>, ForecastError> {
    percentages(document, selectors::PRECIPITATION_PROBABILITY)
}

/// Cloud cover as fractions of one.
pub fn cloud_percentages(document: &ForecastDocument) -> Result<Vec<f64>, ForecastError> {
    percentages(document, selectors::CLOUD_PERCENTAGE)
}

fn percentages(
    document: &ForecastDocument,
    descriptor: FieldDescriptor,
) -> Result<Vec<f64>, ForecastError> {
    extract(document, &descriptor)?
        .iter()
        .map(|raw| {
            let value = drop_unit(descriptor.name, raw, token(descriptor.name, raw, 0)?)?;
            Ok(parse_float(descriptor.name, raw, value)? / 100.0)
        })
        .collect()
}

/// Ultraviolet radiation labels, passed through unchanged ("Alta", "Muy alta", ...).
pub fn ultraviolet_radiations(
    document: &ForecastDocument,
) -> Result<Vec<String>, ForecastError> {
    extract(document, &selectors::ULTRAVIOLET_RADIATION)
}

// --- Field-sequence sets, one per source view ---

/// Every field sequence extracted from one detailed-view document.
#[derive(Debug, Clone, PartialEq)]
pub struct DetalladaFields {
    pub dates: Vec<ForecastDate>,
    pub precipitation_probability: Vec<f64>,
    pub cloud_percentage: Vec<f64>,
    pub ultraviolet_radiation: Vec<String>,
}

impl DetalladaFields {
    pub fn from_document(document: &ForecastDocument) -> Result<Self, ForecastError> {
        Ok(Self {
            dates: detallada_dates(document)?,
            precipitation_probability: precipitation_probabilities(document)?,
            cloud_percentage: cloud_percentages(document)?,
            ultraviolet_radiation: ultraviolet_radiations(document)?,
        })
    }
}

/// Every field sequence extracted from one daily-view document.
#[derive(Debug, Clone, PartialEq)]
pub struct DiasFields {
    pub dates: Vec<ForecastDate>,
    pub max_temperature: Vec<i32>,
    pub min_temperature: Vec<i32>,
    pub precipitation: Vec<f64>,
    pub wind_speed: Vec<i32>,
    pub sunrise: Vec<String>,
    pub sunset: Vec<String>,
}

impl DiasFields {
    pub fn from_document(document: &ForecastDocument) -> Result<Self, ForecastError> {
        Ok(Self {
            dates: dias_dates(document)?,
            max_temperature: max_temperatures(document)?,
            min_temperature: min_temperatures(document)?,
            precipitation: precipitations(document)?,
            wind_speed: wind_speeds(document)?,
            sunrise: sunrise_times(document)?,
            sunset: sunset_times(document)?,
        })
    }
}

// --- Coercion helpers ---

fn date_from_tokens(
    field: &'static str,
    raw: &str,
    day_index: usize,
) -> Result<ForecastDate, ForecastError> {
    let day: u32 = token(field, raw, day_index)?
        .parse()
        .map_err(|_| parse_error(field, raw))?;
    let month = token(field, raw, day_index + 1)?;
    Ok(ForecastDate::new(day, month))
}

fn token<'a>(field: &'static str, raw: &'a str, index: usize) -> Result<&'a str, ForecastError> {
    raw.split_whitespace()
        .nth(index)
        .ok_or_else(|| parse_error(field, raw))
}

/// Drops the trailing unit character of a token ("23°" -> "23", "73%" -> "73").
fn drop_unit<'a>(
    field: &'static str,
    raw: &str,
    token: &'a str,
) -> Result<&'a str, ForecastError> {
    let mut chars = token.chars();
    chars
        .next_back()
        .ok_or_else(|| parse_error(field, raw))?;
    Ok(chars.as_str())
}

fn parse_int(field: &'static str, raw: &str, value: &str) -> Result<i32, ForecastError> {
    value.parse().map_err(|_| parse_error(field, raw))
}

fn parse_float(field: &'static str, raw: &str, value: &str) -> Result<f64, ForecastError> {
    value.parse().map_err(|_| parse_error(field, raw))
}

fn parse_error(field: &'static str, raw: &str) -> ForecastError {
    ForecastError::Parse {
        field,
        raw: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document_with_rows(rows: &[String]) -> ForecastDocument {
        ForecastDocument::parse(&format!(
            "<html><body>{}</body></html>",
            rows.join("\n")
        ))
    }

    fn dias_row(date: &str, max: &str, min: &str) -> String {
        format!(
            r#"<div data-expand-tablechild-item>
                <span class="m_table_weather_day_day">{date}</span>
                <span class="m_table_weather_day_max_temp">{max}</span>
                <span class="m_table_weather_day_min_temp">{min}</span>
                <div class="m_table_weather_day_child m_table_weather_day_rain">Lluvia 0.2</div>
                <div class="m_table_weather_day_child m_table_weather_day_wind"><span>Viento 23</span></div>
                <div class="m_table_weather_day_child m_table_weather_day_dawn">07:02 salida del sol</div>
                <div class="m_table_weather_day_child m_table_weather_day_nightfall">21:48 puesta del sol</div>
            </div>"#
        )
    }

    fn detallada_row(date: &str, spans: &[&str]) -> String {
        let spans: String = spans
            .iter()
            .map(|s| format!("<span>{s}</span>"))
            .collect();
        format!(
            r#"<div data-expand-tablechild-item>
                <div class="m_table_weather_day_date">{date}</div>
                {spans}
            </div>"#
        )
    }

    #[test]
    fn class_lookup_returns_one_value_per_row_in_order() {
        let document = document_with_rows(&[
            dias_row("12 Junio", "23°", "11°"),
            dias_row("13 Junio", "24°", "12°"),
            dias_row("14 Junio", "25°", "13°"),
        ]);
        let values = extract(&document, &selectors::DIAS_DATE).unwrap();
        assert_eq!(values, vec!["12 Junio", "13 Junio", "14 Junio"]);
    }

    #[test]
    fn class_lookup_skips_rows_without_the_element() {
        let document = document_with_rows(&[
            dias_row("12 Junio", "23°", "11°"),
            "<div data-expand-tablechild-item>no date here</div>".to_string(),
            dias_row("14 Junio", "25°", "13°"),
        ]);
        let values = extract(&document, &selectors::DIAS_DATE).unwrap();
        assert_eq!(values, vec!["12 Junio", "14 Junio"]);
    }

    #[test]
    fn span_position_skips_rows_with_too_few_spans() {
        let document = document_with_rows(&[
            detallada_row("Lunes 12 Junio", &["40%", "60%", "Alta"]),
            detallada_row("Martes 13 Junio", &["10%"]),
        ]);
        let values = extract(&document, &selectors::ULTRAVIOLET_RADIATION).unwrap();
        assert_eq!(values, vec!["Alta"]);
    }

    #[test]
    fn detallada_date_discards_the_weekday() {
        let document = document_with_rows(&[detallada_row("Wed 14 Jun", &["40%", "60%", "Alta"])]);
        assert_eq!(
            detallada_dates(&document).unwrap(),
            vec![ForecastDate::new(14, "Jun")]
        );
    }

    #[test]
    fn dias_date_starts_at_the_day() {
        let document = document_with_rows(&[dias_row("14 Jun", "23°", "11°")]);
        assert_eq!(
            dias_dates(&document).unwrap(),
            vec![ForecastDate::new(14, "Jun")]
        );
    }

    #[test]
    fn temperatures_strip_the_degree_sign() {
        let document = document_with_rows(&[dias_row("14 Junio", "31°", "-2°")]);
        assert_eq!(max_temperatures(&document).unwrap(), vec![31]);
        assert_eq!(min_temperatures(&document).unwrap(), vec![-2]);
    }

    #[test]
    fn malformed_temperature_names_field_and_raw_text() {
        let document = document_with_rows(&[dias_row("14 Junio", "n/a°", "11°")]);
        match max_temperatures(&document) {
            Err(ForecastError::Parse { field, raw }) => {
                assert_eq!(field, "max_temperature");
                assert_eq!(raw, "n/a°");
            }
            other => panic!("expected a parse failure, got {other:?}"),
        }
    }

    #[test]
    fn precipitation_takes_the_second_token_as_float() {
        let document = ForecastDocument::parse(
            r#"<div data-expand-tablechild-item>
                <div class="m_table_weather_day_child m_table_weather_day_rain">text1 12.5</div>
            </div>"#,
        );
        assert_eq!(precipitations(&document).unwrap(), vec![12.5]);
    }

    #[test]
    fn wind_speed_takes_the_second_token_of_the_nested_span() {
        let document = document_with_rows(&[dias_row("14 Junio", "23°", "11°")]);
        assert_eq!(wind_speeds(&document).unwrap(), vec![23]);
    }

    #[test]
    fn sun_times_keep_only_the_first_token() {
        let document = document_with_rows(&[dias_row("14 Junio", "23°", "11°")]);
        assert_eq!(sunrise_times(&document).unwrap(), vec!["07:02"]);
        assert_eq!(sunset_times(&document).unwrap(), vec!["21:48"]);
    }

    #[test]
    fn percentages_become_fractions_of_one() {
        let document =
            document_with_rows(&[detallada_row("Lunes 12 Junio", &["73%", "60%", "Alta"])]);
        assert_eq!(precipitation_probabilities(&document).unwrap(), vec![0.73]);
        assert_eq!(cloud_percentages(&document).unwrap(), vec![0.6]);
    }

    #[test]
    fn ultraviolet_label_passes_through_unchanged() {
        let document =
            document_with_rows(&[detallada_row("Lunes 12 Junio", &["73%", "60%", "Muy alta"])]);
        assert_eq!(
            ultraviolet_radiations(&document).unwrap(),
            vec!["Muy alta"]
        );
    }

    #[test]
    fn field_sets_collect_every_sequence() {
        let document = document_with_rows(&[
            dias_row("12 Junio", "23°", "11°"),
            dias_row("13 Junio", "24°", "12°"),
        ]);
        let fields = DiasFields::from_document(&document).unwrap();
        assert_eq!(fields.dates.len(), 2);
        assert_eq!(fields.max_temperature, vec![23, 24]);
        assert_eq!(fields.precipitation, vec![0.2, 0.2]);
        assert_eq!(fields.sunset, vec!["21:48", "21:48"]);
    }
}
