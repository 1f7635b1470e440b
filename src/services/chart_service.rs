use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use chrono::{DateTime, Duration, Utc};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use plotters::prelude::*;
use tracing::{debug, info};
use crate::models::Series;
use crate::utils::ChartError;

/// Line colors, assigned to series in order
const SERIES_COLORS: [RGBColor; 4] = [
    RGBColor(0, 116, 217),
    RGBColor(0, 217, 101),
    RGBColor(217, 0, 116),
    RGBColor(255, 133, 27),
];

/// Largest accepted width or height in pixels
pub const MAX_DIMENSION: u32 = 8192;

/// Layout and labels of the rendered chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub title: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
    pub padding_top: u32,
    pub padding_left: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Fuel price history in Sweden".to_string(),
            y_label: "Price in SEK inc tax".to_string(),
            width: 1024,
            height: 400,
            padding_top: 20,
            padding_left: 81,
        }
    }
}

/// Destination for the encoded chart
pub trait ChartSink {
    fn write_png(&self, png: &[u8]) -> Result<(), ChartError>;
}

/// Writes the chart to a file, replacing whatever was there
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ChartError {
        ChartError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl ChartSink for FileSink {
    fn write_png(&self, png: &[u8]) -> Result<(), ChartError> {
        let mut file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        file.write_all(png).map_err(|e| self.io_error(e))?;
        file.flush().map_err(|e| self.io_error(e))?;

        info!("Wrote {} byte chart to {}", png.len(), self.path.display());
        Ok(())
    }
}

/// X range covering every date, widened to one day when degenerate
fn date_range(series: &[&Series]) -> (DateTime<Utc>, DateTime<Utc>) {
    let dates = || series.iter().flat_map(|s| s.dates.iter().copied());

    let x_min = dates().min().unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
    let x_max = dates().max().unwrap_or(x_min);

    if x_max <= x_min {
        (x_min, x_min + Duration::days(1))
    } else {
        (x_min, x_max)
    }
}

/// Y range covering every value with 10% padding, never below zero
fn price_range(series: &[&Series]) -> (f64, f64) {
    let values = || series.iter().flat_map(|s| s.values.iter().copied());

    let min_price = values().fold(f64::INFINITY, f64::min);
    let max_price = values().fold(f64::NEG_INFINITY, f64::max);

    if !min_price.is_finite() || !max_price.is_finite() {
        return (0.0, 1.0);
    }

    // Avoid a zero-height axis
    let price_range = (max_price - min_price).max(1e-8);
    let padding = price_range * 0.1;
    let y_min = (min_price - padding).max(0.0);
    let y_max = max_price + padding;

    (y_min, y_max)
}

/// Draw the series into an RGB pixel buffer
fn draw_chart(series: &[&Series], options: &ChartOptions) -> Result<Vec<u8>, ChartError> {
    let valid = 1..=MAX_DIMENSION;
    if !valid.contains(&options.width) || !valid.contains(&options.height) {
        return Err(ChartError::Render(format!(
            "Chart size {}x{} outside 1..={}",
            options.width, options.height, MAX_DIMENSION
        )));
    }

    let mut buffer = vec![0u8; options.width as usize * options.height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (options.width, options.height))
            .into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ChartError::Render(format!("Failed to fill canvas: {}", e)))?;

        let (x_min, x_max) = date_range(series);
        let (y_min, y_max) = price_range(series);

        let mut chart = ChartBuilder::on(&root)
            .caption(&options.title, ("sans-serif", 24).into_font())
            .margin(10)
            .margin_top(options.padding_top)
            .margin_left(options.padding_left)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| ChartError::Render(format!("Failed to build chart: {}", e)))?;

        chart
            .configure_mesh()
            .y_desc(options.y_label.as_str())
            .x_label_formatter(&|d: &DateTime<Utc>| d.format("%Y-%m-%d").to_string())
            .draw()
            .map_err(|e| ChartError::Render(format!("Failed to draw mesh: {}", e)))?;

        for (i, s) in series.iter().enumerate() {
            let color = SERIES_COLORS[i % SERIES_COLORS.len()];
            chart
                .draw_series(LineSeries::new(s.points(), color.stroke_width(2)))
                .map_err(|e| ChartError::Render(format!("Failed to draw {}: {}", s.name, e)))?
                .label(s.name.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| ChartError::Render(format!("Failed to draw legend: {}", e)))?;

        root.present()
            .map_err(|e| ChartError::Render(format!("Failed to render chart: {}", e)))?;
    }

    Ok(buffer)
}

/// Render the series as a PNG image
pub fn render_png(series: &[&Series], options: &ChartOptions) -> Result<Vec<u8>, ChartError> {
    let pixels = draw_chart(series, options)?;

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&pixels, options.width, options.height, ColorType::Rgb8)
        .map_err(|e| ChartError::Encode(e.to_string()))?;

    debug!(
        "Rendered {} series into {}x{} PNG ({} bytes)",
        series.len(),
        options.width,
        options.height,
        png.len()
    );
    Ok(png)
}

/// Render the series and hand the PNG to the sink
///
/// The image is fully encoded before the sink is touched.
pub fn generate_chart<K: ChartSink>(
    series: &[&Series],
    options: &ChartOptions,
    sink: &K,
) -> Result<(), ChartError> {
    let png = render_png(series, options)?;
    sink.write_png(&png)
}
