//! Runtime configuration
//!
//! Every setting has a default; environment variables (optionally from a
//! `.env` file) override them.

use std::path::PathBuf;
use tracing::warn;
use crate::api::tanka::TankaClient;
use crate::services::chart_service::{ChartOptions, MAX_DIMENSION};

pub const API_URL_VAR: &str = "FUEL_CHART_API_URL";
pub const OUTPUT_VAR: &str = "FUEL_CHART_OUTPUT";
pub const WIDTH_VAR: &str = "FUEL_CHART_WIDTH";
pub const HEIGHT_VAR: &str = "FUEL_CHART_HEIGHT";

pub const DEFAULT_OUTPUT: &str = "output";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for Config {
    fn default() -> Self {
        let options = ChartOptions::default();
        Self {
            api_url: TankaClient::DEFAULT_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            width: options.width,
            height: options.height,
        }
    }
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_url: non_empty(API_URL_VAR).unwrap_or(defaults.api_url),
            output_path: non_empty(OUTPUT_VAR).map(PathBuf::from).unwrap_or(defaults.output_path),
            width: parse_dimension(WIDTH_VAR, non_empty(WIDTH_VAR), defaults.width),
            height: parse_dimension(HEIGHT_VAR, non_empty(HEIGHT_VAR), defaults.height),
        }
    }

    /// Chart layout with this config's image size
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            width: self.width,
            height: self.height,
            ..ChartOptions::default()
        }
    }
}

fn parse_dimension(key: &str, value: Option<String>, default: u32) -> u32 {
    let Some(raw) = value else {
        return default;
    };

    match raw.trim().parse::<u32>() {
        Ok(v) if (1..=MAX_DIMENSION).contains(&v) => v,
        _ => {
            warn!("Ignoring invalid {}='{}', using {}", key, raw, default);
            default
        }
    }
}
