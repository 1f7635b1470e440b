pub mod errors;

pub use errors::ChartError;
