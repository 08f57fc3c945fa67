//! # InsertKit Core
//!
//! Shared foundations for InsertKit: the error taxonomy used across all
//! crates and the dimensional limits enforced at configuration load.

pub mod error;
pub mod limits;

pub use error::{ConfigError, Error, GeometryError, Result, ValidationError};
