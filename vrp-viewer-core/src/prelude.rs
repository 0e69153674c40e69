//! This module reimports commonly used types.

pub use crate::loading::{DatasetLoader, Fetcher, LoadStatus, LoaderConfig, Session, Stage, create_fetcher};
pub use crate::models::{Case, Customer, CustomerId, Dataset, IndexedDataset, NodeDetails, NodeKind, Route, Selection};
pub use crate::utils::{FetchError, GenericError, GenericResult};
