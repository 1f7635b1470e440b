pub mod client;
pub mod models;

pub use client::{fetch_or_empty, PriceSource, TankaClient};
pub use models::{ApiError, DataPoint};
