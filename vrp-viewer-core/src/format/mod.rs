//! This module defines logic to read catalog, step index and dataset resources in their several accepted shapes
//! and to write catalog index files for a directory tree of cases.

mod catalog;
pub use self::catalog::*;

mod index;
pub use self::index::*;
