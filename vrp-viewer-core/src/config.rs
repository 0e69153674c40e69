//! Viewer configuration.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use crate::loading::{LoaderConfig, StageTimeouts};
use crate::utils::GenericResult;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::time::Duration;

/// A viewer configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// A path prefix of all resources. Default is `vrp_data`.
    pub data_root: Option<String>,
    /// Specifies stage timeouts.
    pub timeouts: Option<TimeoutsConfig>,
    /// Specifies canvas settings.
    pub canvas: Option<CanvasConfig>,
    /// Specifies how routes are grouped into colors.
    pub grouping: Option<GroupingConfig>,
    /// Hides routes which visit only depots.
    pub skip_idle_routes: Option<bool>,
}

/// Stage timeouts in milliseconds.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TimeoutsConfig {
    /// Catalog timeout. Default is 10000.
    pub catalog: Option<u64>,
    /// Step index timeout. Default is 10000.
    pub steps: Option<u64>,
    /// Dataset timeout. Default is 30000.
    pub dataset: Option<u64>,
}

/// A canvas configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasConfig {
    /// Canvas width in pixels. Default is 800.
    pub width: Option<u32>,
    /// Canvas height in pixels. Default is 600.
    pub height: Option<u32>,
    /// Pixels per logical unit. Default is 4.
    pub scale: Option<f64>,
    /// Fits the scale into canvas instead of using a fixed one.
    pub fit: Option<bool>,
}

/// Specifies route grouping for coloring.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "camelCase")]
pub enum GroupingConfig {
    /// Each route gets the next palette color.
    None,
    /// Routes of the same fleet share a color, fleets are taken from `vehicle_num_list`.
    Fleet,
    /// Each `size` consecutive routes share a color.
    Fixed {
        /// Group size.
        size: usize,
    },
}

impl Config {
    /// Creates loader settings, using defaults for missing values.
    pub fn loader_config(&self) -> LoaderConfig {
        let defaults = LoaderConfig::default();
        let timeouts = self.timeouts.clone().unwrap_or_default();
        let millis = |value: Option<u64>, default: Duration| value.map(Duration::from_millis).unwrap_or(default);

        LoaderConfig {
            data_root: self.data_root.clone().unwrap_or(defaults.data_root),
            timeouts: StageTimeouts {
                catalog: millis(timeouts.catalog, defaults.timeouts.catalog),
                steps: millis(timeouts.steps, defaults.timeouts.steps),
                dataset: millis(timeouts.dataset, defaults.timeouts.dataset),
            },
        }
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
