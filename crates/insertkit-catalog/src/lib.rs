//! # InsertKit Catalog
//!
//! Heat-set insert specifications: the [`InsertSpec`] data model, the
//! [`InsertCatalog`] container, and the builtin CNC Kitchen standard library.
//!
//! The catalog is immutable once loaded and is passed explicitly to the
//! resolver; there is no ambient catalog state.

pub mod builtin;
pub mod catalog;
pub mod model;

pub use builtin::standard_library;
pub use catalog::InsertCatalog;
pub use model::{InsertId, InsertSpec};
