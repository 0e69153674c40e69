//! This module contains the cascading loader: catalog, then step list of selected case, then dataset of selected
//! step. The loader itself performs no I/O, a [`Session`] executes its fetch requests.

use std::fmt;
use std::time::Duration;

mod fetcher;
pub use self::fetcher::*;

mod loader;
pub use self::loader::*;

mod session;
pub use self::session::*;

/// A default directory (or url path) which holds catalog and cases.
pub const DEFAULT_DATA_ROOT: &str = "vrp_data";

/// A loading stage. Each stage depends on the selection made from the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Loads a list of cases.
    Catalog,
    /// Loads a list of steps for selected case.
    Steps,
    /// Loads dataset for selected case and step.
    Dataset,
}

impl Stage {
    /// All stages in dependency order.
    pub const ALL: [Stage; 3] = [Stage::Catalog, Stage::Steps, Stage::Dataset];

    fn index(self) -> usize {
        match self {
            Stage::Catalog => 0,
            Stage::Steps => 1,
            Stage::Dataset => 2,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Catalog => "catalog",
            Stage::Steps => "steps",
            Stage::Dataset => "dataset",
        };

        write!(f, "{name}")
    }
}

/// A status of a stage, allows to distinguish "still loading" from "failed".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing requested for current selection.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Last fetch for current selection succeeded.
    Ready,
    /// Last fetch for current selection failed.
    Failed,
}

/// Identifies a fetch: the stage and the stage generation at the moment it was issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    /// A stage which issued the fetch.
    pub stage: Stage,
    /// A stage generation. Only a ticket with current generation is applied.
    pub generation: u64,
}

/// A fetch the loader asks to be performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    /// A ticket to hand back together with the result.
    pub ticket: FetchTicket,
    /// A resource path relative to the source base.
    pub path: String,
}

/// Specifies how long each stage may wait for its fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageTimeouts {
    /// Catalog fetch timeout.
    pub catalog: Duration,
    /// Step index fetch timeout.
    pub steps: Duration,
    /// Dataset fetch timeout.
    pub dataset: Duration,
}

impl StageTimeouts {
    /// Returns timeout for the stage.
    pub fn get(&self, stage: Stage) -> Duration {
        match stage {
            Stage::Catalog => self.catalog,
            Stage::Steps => self.steps,
            Stage::Dataset => self.dataset,
        }
    }
}

impl Default for StageTimeouts {
    fn default() -> Self {
        Self { catalog: Duration::from_secs(10), steps: Duration::from_secs(10), dataset: Duration::from_secs(30) }
    }
}

/// Loader settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    /// A path prefix of all resources.
    pub data_root: String,
    /// Per stage timeouts.
    pub timeouts: StageTimeouts,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { data_root: DEFAULT_DATA_ROOT.to_string(), timeouts: StageTimeouts::default() }
    }
}
