use thiserror::Error;

/// Chart rendering and output errors
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Render failed: {0}")]
    Render(String),
    #[error("PNG encoding failed: {0}")]
    Encode(String),
    #[error("Failed to write chart to {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
