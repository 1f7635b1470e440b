//! Fuel types tracked by the price history

use std::str::FromStr;
use crate::api::tanka::DataPoint;

/// The price columns of a [`DataPoint`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelField {
    Petrol95,
    Ethanol,
    Diesel,
    Hvo100,
}

impl FuelField {
    pub const ALL: [FuelField; 4] = [
        FuelField::Petrol95,
        FuelField::Ethanol,
        FuelField::Diesel,
        FuelField::Hvo100,
    ];

    /// Identifier used when selecting a field by name
    pub fn id(self) -> &'static str {
        match self {
            FuelField::Petrol95 => "petrol95",
            FuelField::Ethanol => "ethanol",
            FuelField::Diesel => "diesel",
            FuelField::Hvo100 => "hvo100",
        }
    }

    /// Legend label
    pub fn label(self) -> &'static str {
        match self {
            FuelField::Petrol95 => "Petrol (95)",
            FuelField::Ethanol => "Ethanol (e85)",
            FuelField::Diesel => "Diesel (B7)",
            FuelField::Hvo100 => "HVO100",
        }
    }

    /// Read this field's price from a row
    pub fn value(self, point: &DataPoint) -> f64 {
        match self {
            FuelField::Petrol95 => point.petrol95,
            FuelField::Ethanol => point.ethanol,
            FuelField::Diesel => point.diesel,
            FuelField::Hvo100 => point.hvo100,
        }
    }
}

impl FromStr for FuelField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FuelField::ALL
            .into_iter()
            .find(|field| field.id() == s)
            .ok_or_else(|| format!("Unknown fuel field: '{}'", s))
    }
}
