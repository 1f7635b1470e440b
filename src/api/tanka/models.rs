use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// One row of the price history returned by `GET /api/prices`
///
/// Prices are in SEK including tax. A key that is missing or `null` decodes
/// to `0.0` for prices and an empty string for the date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(rename = "95", default, deserialize_with = "null_as_default")]
    pub petrol95: f64,
    #[serde(rename = "e85", default, deserialize_with = "null_as_default")]
    pub ethanol: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub diesel: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hvo100: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Error type for price API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network/request error
    #[error("Request Error: {0}")]
    Request(String),
    /// Body was not a JSON array of price rows
    #[error("Deserialization Error: {0}")]
    Deserialization(String),
}
