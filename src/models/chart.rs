//! Chart generation models

use chrono::{DateTime, Utc};

/// A named line on the chart: one value per date of the shared axis
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub dates: Vec<DateTime<Utc>>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// (date, value) pairs in source order
    pub fn points(&self) -> impl Iterator<Item = (DateTime<Utc>, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}

/// Every fuel series derived from one fetch, over one date axis
#[derive(Debug, Clone, PartialEq)]
pub struct FuelSeries {
    pub dates: Vec<DateTime<Utc>>,
    pub petrol95: Series,
    pub ethanol: Series,
    pub diesel: Series,
    /// Extracted alongside the others but left out of the default chart
    pub hvo100: Series,
}

impl FuelSeries {
    /// Series drawn on the default chart, in legend order
    pub fn charted(&self) -> [&Series; 3] {
        [&self.petrol95, &self.ethanol, &self.diesel]
    }
}
