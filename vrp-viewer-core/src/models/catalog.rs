use serde::{Deserialize, Serialize};

/// An opaque step identifier, typically a file name like `step_0.json`.
pub type StepRef = String;

/// A named group of solution snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Case {
    /// Case name, unique within a catalog and used as a selection key.
    pub name: String,
    /// Known steps in display order. Empty means that steps are not discovered yet.
    #[serde(default)]
    pub steps: Vec<StepRef>,
}

impl Case {
    /// Creates a new case without known steps.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), steps: Vec::new() }
    }

    /// Creates a new case with given steps.
    pub fn with_steps(name: impl Into<String>, steps: Vec<StepRef>) -> Self {
        Self { name: name.into(), steps }
    }

    /// Returns true if steps were shipped together with the catalog.
    pub fn has_steps(&self) -> bool {
        !self.steps.is_empty()
    }
}
