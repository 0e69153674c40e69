//! This module contains helper functionality.

mod error;
pub use self::error::*;
