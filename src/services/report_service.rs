use tracing::{info, warn};
use crate::api::tanka::{fetch_or_empty, PriceSource};
use crate::models::FuelSeries;
use crate::services::chart_service::{self, ChartOptions, ChartSink};
use crate::utils::ChartError;

/// Fetch, derive and chart the fuel price history
///
/// A failed fetch produces an empty chart; only render or write failures
/// are returned.
pub async fn run<S: PriceSource, K: ChartSink>(
    source: &S,
    sink: &K,
    options: &ChartOptions,
) -> Result<FuelSeries, ChartError> {
    let points = fetch_or_empty(source).await;
    info!("Charting {} price rows", points.len());

    let fuel = FuelSeries::from_points(&points);
    if fuel.charted().iter().all(|s| s.is_empty()) {
        warn!("No price data, rendering an empty chart");
    }
    chart_service::generate_chart(&fuel.charted(), options, sink)?;

    Ok(fuel)
}
