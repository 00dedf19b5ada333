//! The record merger: zips the field sequences of both views into one aligned,
//! validated sequence of daily records.

use crate::forecast::error::ForecastError;
use crate::forecast::extract::{DetalladaFields, DiasFields};
use crate::types::daily_record::DailyRecord;

/// Both views are requested as a 14-day window; a merge over anything else is
/// refused rather than truncated or padded.
pub const FORECAST_DAYS: usize = 14;

/// Merges the per-field sequences of the detailed and the daily view into one
/// sequence of [`DailyRecord`]s, aligned by position (0-based document order).
///
/// The detailed view is known to intermittently render fewer rows than
/// requested, so its precipitation-probability sequence is validated against
/// [`FORECAST_DAYS`] before anything is zipped; any other sequence coming up
/// short is the same [`ForecastError::DataUnavailable`] condition. Partial
/// merges are never returned.
///
/// No date-based reconciliation is performed between the views, but the date
/// both views report at each index is cross-checked and a disagreement fails
/// with [`ForecastError::DateMismatch`]: the fetch layer owns the guarantee
/// that both documents describe the same window, and a violated guarantee must
/// not produce silently misaligned records.
///
/// A failed merge is terminal for the invocation; the caller decides whether
/// to re-fetch and retry.
pub fn merge(
    detallada: &DetalladaFields,
    dias: &DiasFields,
) -> Result<Vec<DailyRecord>, ForecastError> {
    let found = detallada.precipitation_probability.len();
    if found != FORECAST_DAYS {
        return Err(ForecastError::DataUnavailable {
            expected: FORECAST_DAYS,
            found,
        });
    }

    let mut records = Vec::with_capacity(FORECAST_DAYS);
    for index in 0..FORECAST_DAYS {
        let detailed_date = pick(&detallada.dates, index)?;
        let daily_date = pick(&dias.dates, index)?;
        if daily_date != detailed_date {
            return Err(ForecastError::DateMismatch {
                index,
                daily: daily_date.clone(),
                detailed: detailed_date.clone(),
            });
        }

        records.push(DailyRecord {
            date: detailed_date.clone(),
            max_temperature: *pick(&dias.max_temperature, index)?,
            min_temperature: *pick(&dias.min_temperature, index)?,
            precipitation: *pick(&dias.precipitation, index)?,
            wind_speed: *pick(&dias.wind_speed, index)?,
            sunrise: pick(&dias.sunrise, index)?.clone(),
            sunset: pick(&dias.sunset, index)?.clone(),
            precipitation_probability: *pick(&detallada.precipitation_probability, index)?,
            cloud_percentage: *pick(&detallada.cloud_percentage, index)?,
            ultraviolet_radiation: pick(&detallada.ultraviolet_radiation, index)?.clone(),
        });
    }
    Ok(records)
}

// Index-out-of-range on any contributing sequence is the same data-unavailable
// condition as a short detailed view.
fn pick<T>(values: &[T], index: usize) -> Result<&T, ForecastError> {
    values.get(index).ok_or(ForecastError::DataUnavailable {
        expected: FORECAST_DAYS,
        found: values.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::daily_record::ForecastDate;

    fn dates(n: usize) -> Vec<ForecastDate> {
        (0..n).map(|i| ForecastDate::new(i as u32 + 1, "Junio")).collect()
    }

    fn detallada_fields(n: usize) -> DetalladaFields {
        DetalladaFields {
            dates: dates(n),
            precipitation_probability: (0..n).map(|i| i as f64 / 100.0).collect(),
            cloud_percentage: (0..n).map(|i| (i as f64 + 1.0) / 100.0).collect(),
            ultraviolet_radiation: (0..n).map(|i| format!("uv-{i}")).collect(),
        }
    }

    fn dias_fields(n: usize) -> DiasFields {
        DiasFields {
            dates: dates(n),
            max_temperature: (0..n).map(|i| 20 + i as i32).collect(),
            min_temperature: (0..n).map(|i| 10 + i as i32).collect(),
            precipitation: (0..n).map(|i| i as f64 * 0.5).collect(),
            wind_speed: (0..n).map(|i| 5 + i as i32).collect(),
            sunrise: (0..n).map(|i| format!("07:{i:02}")).collect(),
            sunset: (0..n).map(|i| format!("21:{i:02}")).collect(),
        }
    }

    #[test]
    fn merges_fourteen_aligned_records() {
        let detallada = detallada_fields(FORECAST_DAYS);
        let dias = dias_fields(FORECAST_DAYS);
        let records = merge(&detallada, &dias).unwrap();

        assert_eq!(records.len(), FORECAST_DAYS);
        // Round-trip: every input sequence must be reconstructible per index.
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.date, detallada.dates[i]);
            assert_eq!(record.max_temperature, dias.max_temperature[i]);
            assert_eq!(record.min_temperature, dias.min_temperature[i]);
            assert_eq!(record.precipitation, dias.precipitation[i]);
            assert_eq!(record.wind_speed, dias.wind_speed[i]);
            assert_eq!(record.sunrise, dias.sunrise[i]);
            assert_eq!(record.sunset, dias.sunset[i]);
            assert_eq!(
                record.precipitation_probability,
                detallada.precipitation_probability[i]
            );
            assert_eq!(record.cloud_percentage, detallada.cloud_percentage[i]);
            assert_eq!(
                record.ultraviolet_radiation,
                detallada.ultraviolet_radiation[i]
            );
        }
    }

    #[test]
    fn short_detailed_view_is_data_unavailable() {
        let detallada = detallada_fields(13);
        let dias = dias_fields(FORECAST_DAYS);
        match merge(&detallada, &dias) {
            Err(ForecastError::DataUnavailable { expected, found }) => {
                assert_eq!(expected, FORECAST_DAYS);
                assert_eq!(found, 13);
            }
            other => panic!("expected DataUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn short_detailed_view_fails_regardless_of_daily_lengths() {
        let detallada = detallada_fields(9);
        for daily_len in [9, 13, FORECAST_DAYS, 20] {
            let dias = dias_fields(daily_len);
            assert!(matches!(
                merge(&detallada, &dias),
                Err(ForecastError::DataUnavailable { found: 9, .. })
            ));
        }
    }

    #[test]
    fn short_daily_sequence_is_data_unavailable_too() {
        let detallada = detallada_fields(FORECAST_DAYS);
        let mut dias = dias_fields(FORECAST_DAYS);
        dias.wind_speed.truncate(11);
        assert!(matches!(
            merge(&detallada, &dias),
            Err(ForecastError::DataUnavailable { found: 11, .. })
        ));
    }

    #[test]
    fn disagreeing_dates_fail_the_merge() {
        let detallada = detallada_fields(FORECAST_DAYS);
        let mut dias = dias_fields(FORECAST_DAYS);
        dias.dates[3] = ForecastDate::new(30, "Mayo");
        match merge(&detallada, &dias) {
            Err(ForecastError::DateMismatch { index, daily, detailed }) => {
                assert_eq!(index, 3);
                assert_eq!(daily, ForecastDate::new(30, "Mayo"));
                assert_eq!(detailed, ForecastDate::new(4, "Junio"));
            }
            other => panic!("expected DateMismatch, got {other:?}"),
        }
    }

    #[test]
    fn overlong_detailed_view_is_refused() {
        let detallada = detallada_fields(15);
        let dias = dias_fields(15);
        assert!(matches!(
            merge(&detallada, &dias),
            Err(ForecastError::DataUnavailable { found: 15, .. })
        ));
    }
}
