//! Data models shared by the fetch, series and chart steps

pub mod chart;
pub mod fuel;

pub use chart::{FuelSeries, Series};
pub use fuel::FuelField;
