#[cfg(test)]
#[path = "../../tests/unit/loading/loader_test.rs"]
mod loader_test;

use super::*;
use crate::format::{INDEX_FILE_NAME, normalize_catalog, normalize_step_list};
use crate::models::{Case, Dataset, IndexedDataset, StepRef};
use crate::utils::{FetchError, GenericResult};
use serde_json::Value;
use std::sync::Arc;

/// A result of a single fetch.
pub type FetchResult = Result<Value, FetchError>;

/// A three-stage loading state machine: catalog, step list of selected case, dataset of selected step.
///
/// Every transition returns at most one [`FetchRequest`]. Each stage keeps a generation counter which is bumped
/// when the stage issues a fetch or when an upstream selection change invalidates it, so a completion carrying an
/// outdated ticket is discarded instead of overwriting data of a newer selection.
///
/// Fetch failures never escape: they turn into an empty or absent stage result and a `Failed` status.
pub struct DatasetLoader {
    data_root: String,
    cases: Vec<Case>,
    selected_case: Option<String>,
    steps: Vec<StepRef>,
    selected_step: Option<StepRef>,
    dataset: Option<Arc<IndexedDataset>>,
    generations: [u64; 3],
    pending: [Option<u64>; 3],
    statuses: [LoadStatus; 3],
}

impl DatasetLoader {
    /// Creates a new instance of `DatasetLoader` reading resources under `data_root`.
    pub fn new(data_root: impl Into<String>) -> Self {
        Self {
            data_root: data_root.into().trim_end_matches('/').to_string(),
            cases: Vec::new(),
            selected_case: None,
            steps: Vec::new(),
            selected_step: None,
            dataset: None,
            generations: [0; 3],
            pending: [None; 3],
            statuses: [LoadStatus::Idle; 3],
        }
    }

    /// Requests the catalog. Any previous state is dropped.
    pub fn start(&mut self) -> Option<FetchRequest> {
        self.cases.clear();
        self.reset_case();

        let path = self.resource_path(&[INDEX_FILE_NAME]);
        Some(self.issue(Stage::Catalog, path))
    }

    /// Selects a case from the catalog. Selecting the current case again does nothing.
    pub fn select_case(&mut self, name: &str) -> GenericResult<Option<FetchRequest>> {
        if self.selected_case.as_deref() == Some(name) {
            return Ok(None);
        }

        let case =
            self.cases.iter().find(|case| case.name == name).cloned().ok_or_else(|| format!("unknown case: '{name}'"))?;

        Ok(self.apply_case(case))
    }

    /// Selects a step of the current case. Selecting the current step again does nothing.
    pub fn select_step(&mut self, step: &str) -> GenericResult<Option<FetchRequest>> {
        let case = self.selected_case.as_deref().ok_or("cannot select step: no case selected")?;

        if self.selected_step.as_deref() == Some(step) {
            return Ok(None);
        }

        if !self.steps.iter().any(|known| known == step) {
            return Err(format!("unknown step '{step}' in case '{case}'").into());
        }

        Ok(self.apply_step(step.to_string()))
    }

    /// Applies a fetch result. A result for a superseded ticket is ignored.
    pub fn complete(&mut self, ticket: FetchTicket, result: FetchResult) -> Option<FetchRequest> {
        if !self.is_current(&ticket) {
            log::debug!("discarding stale {} result of generation {}", ticket.stage, ticket.generation);
            return None;
        }

        self.pending[ticket.stage.index()] = None;

        match ticket.stage {
            Stage::Catalog => self.on_catalog(result),
            Stage::Steps => self.on_steps(result),
            Stage::Dataset => {
                self.on_dataset(result);
                None
            }
        }
    }

    /// Returns true if the ticket belongs to the fetch the stage is waiting for.
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.pending[ticket.stage.index()] == Some(ticket.generation)
    }

    /// Returns known cases.
    pub fn cases(&self) -> &[Case] {
        self.cases.as_slice()
    }

    /// Returns selected case name.
    pub fn selected_case(&self) -> Option<&str> {
        self.selected_case.as_deref()
    }

    /// Returns steps of selected case.
    pub fn steps(&self) -> &[StepRef] {
        self.steps.as_slice()
    }

    /// Returns selected step.
    pub fn selected_step(&self) -> Option<&str> {
        self.selected_step.as_deref()
    }

    /// Returns dataset of selected case and step, if it was loaded successfully.
    pub fn dataset(&self) -> Option<&Arc<IndexedDataset>> {
        self.dataset.as_ref()
    }

    /// Returns status of the stage.
    pub fn status(&self, stage: Stage) -> LoadStatus {
        self.statuses[stage.index()]
    }

    /// Returns current generation of the stage.
    pub fn generation(&self, stage: Stage) -> u64 {
        self.generations[stage.index()]
    }

    fn on_catalog(&mut self, result: FetchResult) -> Option<FetchRequest> {
        match result {
            Ok(value) => {
                self.cases = normalize_catalog(&value);
                self.statuses[Stage::Catalog.index()] = LoadStatus::Ready;
                log::info!("catalog loaded with {} case(s)", self.cases.len());

                let first = self.cases.first().cloned()?;
                self.apply_case(first)
            }
            Err(err) => {
                log::warn!("cannot load catalog: {err}");
                self.cases.clear();
                self.statuses[Stage::Catalog.index()] = LoadStatus::Failed;
                None
            }
        }
    }

    fn on_steps(&mut self, result: FetchResult) -> Option<FetchRequest> {
        let steps = result.and_then(|value| {
            normalize_step_list(&value)
                .ok_or_else(|| FetchError::Shape("expected `{\"steps\": [..]}` or an array of steps".to_string()))
        });

        match steps {
            Ok(steps) => {
                self.statuses[Stage::Steps.index()] = LoadStatus::Ready;
                let case = self.selected_case.as_deref().unwrap_or("");
                log::info!("{} step(s) discovered for case '{case}'", steps.len());
                self.adopt_steps(steps)
            }
            Err(err) => {
                log::warn!("cannot load steps of case '{}': {err}", self.selected_case.as_deref().unwrap_or(""));
                self.steps.clear();
                self.selected_step = None;
                self.statuses[Stage::Steps.index()] = LoadStatus::Failed;
                None
            }
        }
    }

    fn on_dataset(&mut self, result: FetchResult) {
        let dataset =
            result.and_then(|value| Dataset::from_value(value).map_err(|err| FetchError::Shape(err.to_string())));

        match dataset {
            Ok(dataset) => {
                log::info!(
                    "dataset loaded: {} customer(s), {} route(s), {} pair(s)",
                    dataset.customers.len(),
                    dataset.routes.len(),
                    dataset.pd_pairs.len()
                );
                self.dataset = Some(Arc::new(IndexedDataset::new(dataset)));
                self.statuses[Stage::Dataset.index()] = LoadStatus::Ready;
            }
            Err(err) => {
                log::warn!("cannot load dataset '{}': {err}", self.selected_step.as_deref().unwrap_or(""));
                self.dataset = None;
                self.statuses[Stage::Dataset.index()] = LoadStatus::Failed;
            }
        }
    }

    fn apply_case(&mut self, case: Case) -> Option<FetchRequest> {
        self.reset_case();
        self.selected_case = Some(case.name.clone());
        log::info!("case '{}' selected", case.name);

        if case.has_steps() {
            self.statuses[Stage::Steps.index()] = LoadStatus::Ready;
            self.adopt_steps(case.steps)
        } else {
            let path = self.resource_path(&[case.name.as_str(), INDEX_FILE_NAME]);
            Some(self.issue(Stage::Steps, path))
        }
    }

    fn adopt_steps(&mut self, steps: Vec<StepRef>) -> Option<FetchRequest> {
        self.steps = steps;
        let first = self.steps.first().cloned()?;

        self.apply_step(first)
    }

    fn apply_step(&mut self, step: StepRef) -> Option<FetchRequest> {
        let case = self.selected_case.clone()?;

        self.invalidate(Stage::Dataset);
        self.dataset = None;

        let path = self.resource_path(&[case.as_str(), step.as_str()]);
        log::info!("step '{step}' selected");
        self.selected_step = Some(step);

        Some(self.issue(Stage::Dataset, path))
    }

    fn reset_case(&mut self) {
        self.invalidate(Stage::Steps);
        self.invalidate(Stage::Dataset);
        self.selected_case = None;
        self.steps.clear();
        self.selected_step = None;
        self.dataset = None;
    }

    fn issue(&mut self, stage: Stage, path: String) -> FetchRequest {
        let idx = stage.index();
        self.generations[idx] += 1;
        self.pending[idx] = Some(self.generations[idx]);
        self.statuses[idx] = LoadStatus::Loading;

        FetchRequest { ticket: FetchTicket { stage, generation: self.generations[idx] }, path }
    }

    fn invalidate(&mut self, stage: Stage) {
        let idx = stage.index();
        self.generations[idx] += 1;
        self.pending[idx] = None;
        self.statuses[idx] = LoadStatus::Idle;
    }

    fn resource_path(&self, parts: &[&str]) -> String {
        std::iter::once(self.data_root.as_str())
            .chain(parts.iter().copied())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("/")
    }
}
