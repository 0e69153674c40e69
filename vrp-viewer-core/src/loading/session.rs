#[cfg(test)]
#[path = "../../tests/unit/loading/session_test.rs"]
mod session_test;

use super::*;
use crate::models::{CustomerId, IndexedDataset, Selection};
use crate::utils::{FetchError, GenericResult};
use std::sync::Arc;
use tokio::task::{AbortHandle, JoinSet};

/// Drives [`DatasetLoader`] by executing its fetch requests concurrently on tokio runtime.
///
/// Fetches run on the blocking pool and are bounded by per stage timeouts. Fetches superseded by a newer selection
/// are aborted; if one still finishes, its result is dropped by the loader. Methods which issue fetches have to
/// be called within a tokio runtime context.
pub struct Session {
    fetcher: Arc<dyn Fetcher>,
    loader: DatasetLoader,
    timeouts: StageTimeouts,
    tasks: JoinSet<(FetchTicket, FetchResult)>,
    in_flight: Vec<(FetchTicket, AbortHandle)>,
    selection: Option<(Arc<IndexedDataset>, Selection)>,
}

impl Session {
    /// Creates a new instance of `Session`.
    pub fn new(fetcher: Arc<dyn Fetcher>, config: &LoaderConfig) -> Self {
        Self {
            fetcher,
            loader: DatasetLoader::new(config.data_root.as_str()),
            timeouts: config.timeouts,
            tasks: JoinSet::new(),
            in_flight: Vec::new(),
            selection: None,
        }
    }

    /// Starts loading the catalog.
    pub fn start(&mut self) {
        let request = self.loader.start();
        self.after_transition(request);
    }

    /// Selects a case, see [`DatasetLoader::select_case`].
    pub fn select_case(&mut self, name: &str) -> GenericResult<()> {
        let request = self.loader.select_case(name)?;
        self.after_transition(request);

        Ok(())
    }

    /// Selects a step, see [`DatasetLoader::select_step`].
    pub fn select_step(&mut self, step: &str) -> GenericResult<()> {
        let request = self.loader.select_step(step)?;
        self.after_transition(request);

        Ok(())
    }

    /// Waits for the next finished fetch and applies it. Returns its ticket or `None` when nothing is in flight.
    ///
    /// The returned ticket may belong to a stale fetch which had no effect.
    pub async fn process_next(&mut self) -> Option<FetchTicket> {
        loop {
            match self.tasks.join_next().await? {
                Ok((ticket, result)) => {
                    let request = self.loader.complete(ticket, result);
                    self.after_transition(request);

                    return Some(ticket);
                }
                Err(err) if err.is_cancelled() => continue,
                Err(err) => log::error!("fetch task failed: {err}"),
            }
        }
    }

    /// Processes fetches until none is in flight.
    pub async fn settle(&mut self) {
        while self.process_next().await.is_some() {}
    }

    /// Returns true if no fetch is in flight.
    pub fn is_settled(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Selects a node of the current dataset. An unknown node or missing dataset keeps previous selection.
    pub fn click(&mut self, node_id: CustomerId) -> Option<Selection> {
        let dataset = self.loader.dataset()?.clone();

        match dataset.select(node_id) {
            Some(selection) => {
                self.selection = Some((dataset, selection.clone()));
                Some(selection)
            }
            None => {
                log::warn!("node {node_id} is not present in current dataset");
                None
            }
        }
    }

    /// Clears node selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Returns node selection made on the current dataset. Replacing the dataset drops the selection.
    pub fn selection(&self) -> Option<&Selection> {
        let current = self.loader.dataset()?;

        self.selection
            .as_ref()
            .filter(|(dataset, _)| Arc::ptr_eq(dataset, current))
            .map(|(_, selection)| selection)
    }

    /// Returns the underlying loader.
    pub fn loader(&self) -> &DatasetLoader {
        &self.loader
    }

    fn after_transition(&mut self, request: Option<FetchRequest>) {
        let loader = &self.loader;
        self.in_flight.retain(|(ticket, handle)| {
            let is_current = loader.is_current(ticket);
            if !is_current {
                handle.abort();
            }
            is_current
        });

        let is_dataset_replaced = self.selection.as_ref().is_some_and(|(selected_on, _)| {
            loader.dataset().is_none_or(|current| !Arc::ptr_eq(current, selected_on))
        });

        if is_dataset_replaced {
            self.selection = None;
        }

        if let Some(request) = request {
            self.spawn(request);
        }
    }

    fn spawn(&mut self, request: FetchRequest) {
        let FetchRequest { ticket, path } = request;
        let fetcher = self.fetcher.clone();
        let timeout = self.timeouts.get(ticket.stage);

        log::debug!("fetching {} from '{path}' (generation {})", ticket.stage, ticket.generation);

        let handle = self.tasks.spawn(async move {
            let fetch = tokio::task::spawn_blocking(move || fetcher.fetch(&path));

            let result = match tokio::time::timeout(timeout, fetch).await {
                Ok(Ok(result)) => result,
                Ok(Err(err)) => Err(FetchError::Transport(format!("fetch task failed: {err}"))),
                Err(_) => Err(FetchError::Timeout(timeout)),
            };

            (ticket, result)
        });

        self.in_flight.push((ticket, handle));
    }
}
