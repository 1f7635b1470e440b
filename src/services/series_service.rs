use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;
use crate::api::tanka::DataPoint;
use crate::models::{FuelField, FuelSeries, Series};

/// Date format of the `date` key (e.g. "2023-01-31")
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a row date to midnight UTC, falling back to the Unix epoch
pub fn parse_date(date_str: &str) -> DateTime<Utc> {
    match NaiveDate::parse_from_str(date_str, DATE_FORMAT) {
        Ok(date) => date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc(),
        Err(e) => {
            debug!("Unparseable date '{}' ({}), using epoch", date_str, e);
            DateTime::<Utc>::UNIX_EPOCH
        }
    }
}

/// Shared date axis, one entry per row
pub fn extract_dates(points: &[DataPoint]) -> Vec<DateTime<Utc>> {
    points.iter().map(|p| parse_date(&p.date)).collect()
}

/// One price per row for the given fuel
pub fn extract_field(points: &[DataPoint], field: FuelField) -> Vec<f64> {
    points.iter().map(|p| field.value(p)).collect()
}

/// Like [`extract_field`], but selected by identifier
///
/// An unknown identifier yields `0.0` for every row.
#[cfg(test)]
pub fn extract_field_by_name(points: &[DataPoint], name: &str) -> Vec<f64> {
    match name.parse::<FuelField>() {
        Ok(field) => extract_field(points, field),
        Err(e) => {
            debug!("{}, using zeros", e);
            vec![0.0; points.len()]
        }
    }
}

/// Build the named series for one fuel
pub fn build_series(points: &[DataPoint], field: FuelField) -> Series {
    Series {
        name: field.label().to_string(),
        dates: extract_dates(points),
        values: extract_field(points, field),
    }
}

impl FuelSeries {
    /// Derive all fuel series from the fetched rows
    pub fn from_points(points: &[DataPoint]) -> Self {
        let petrol95 = build_series(points, FuelField::Petrol95);

        Self {
            dates: petrol95.dates.clone(),
            petrol95,
            ethanol: build_series(points, FuelField::Ethanol),
            diesel: build_series(points, FuelField::Diesel),
            hvo100: build_series(points, FuelField::Hvo100),
        }
    }
}
