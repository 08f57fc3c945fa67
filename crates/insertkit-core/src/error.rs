//! Error handling for InsertKit
//!
//! Provides error types for all layers of the engine:
//! - Configuration errors (catalog and defaults loading)
//! - Validation errors (hole request resolution)
//! - Geometry errors (host-side feature creation)
//!
//! All error types use `thiserror` for ergonomic error handling. Errors are
//! synchronous and local; none are retried automatically.

use thiserror::Error;

/// Configuration error type
///
/// Represents failures while loading or validating the insert catalog and
/// derivation defaults. Any of these aborts the load: no partial catalog is
/// ever returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration: {0}")]
    ReadFailed(String),

    /// The configuration file could not be written.
    #[error("Failed to write configuration: {0}")]
    WriteFailed(String),

    /// The file extension maps to no supported format.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// The document could not be parsed at all.
    #[error("Malformed configuration: {0}")]
    Malformed(String),

    /// A value failed schema validation.
    #[error("Invalid value for '{key}' in [{section}]: {reason}")]
    InvalidValue {
        /// Section the value belongs to (an insert name or "defaults").
        section: String,
        key: String,
        reason: String,
    },

    /// Two inserts share the same identifier.
    #[error("Duplicate insert definition: {0}")]
    DuplicateInsert(String),

    /// The configuration declares no inserts at all.
    #[error("No insert definitions found")]
    EmptyCatalog,
}

/// Validation error type
///
/// Represents a hole request the resolver rejects. Nothing is sent to the
/// geometry host when resolution fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The request names no insert.
    #[error("No insert selected")]
    MissingInsert,

    /// The named insert is not in the catalog.
    #[error("Unknown insert: {0}")]
    UnknownInsert(String),

    /// The insert specification carries unusable dimensions.
    #[error("Invalid specification for '{id}': {reason}")]
    InvalidSpec { id: String, reason: String },

    /// A per-request override value is unusable.
    #[error("Invalid {name} override: {value}")]
    InvalidOverride { name: String, value: f64 },
}

/// Geometry error type
///
/// Host-side failures during feature creation. Host adapters map their
/// native errors into these variants; the resolver itself never raises them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// No closed profile encloses the selected point.
    #[error("No profile found at the selected point")]
    ProfileNotFound,

    /// Neither direction from the sketch plane enters the target body.
    #[error("Could not determine cut direction into the target body")]
    DirectionUndetermined,

    /// The edge for a secondary feature could not be located.
    #[error("No {feature} edge found on the bore")]
    EdgeNotFound {
        /// Feature that needed the edge ("chamfer" or "fillet").
        feature: String,
    },

    /// The host rejected a feature-creation call.
    #[error("Host rejected {operation}: {reason}")]
    Rejected { operation: String, reason: String },
}

/// Main error type for InsertKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
