//! Contains the data model shared by loading and rendering: cases, datasets and node pairing.

mod catalog;
pub use self::catalog::*;

mod dataset;
pub use self::dataset::*;

mod pairing;
pub use self::pairing::*;
