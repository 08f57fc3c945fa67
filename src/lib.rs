//! # InsertKit
//!
//! Hole dimension engine for heat-set threaded inserts: given an insert
//! specification and the user's choices (hole type, chamfer, bottom fillet),
//! derives the geometric parameters a CAD host needs to cut the bore, and
//! hands them over through a narrow capability contract.
//!
//! ## Architecture
//!
//! InsertKit is organized as a workspace with focused crates:
//!
//! 1. **insertkit-core** - Error taxonomy and shared dimensional limits
//! 2. **insertkit-catalog** - Insert specifications and the builtin
//!    CNC Kitchen standard library
//! 3. **insertkit-settings** - Configuration file handling and persistence
//! 4. **insertkit-holes** - The pure resolver, dialog summary, geometry-host
//!    contract, and multi-point operation sequencing
//! 5. **insertkit** - Facade re-exporting the public API
//!
//! The resolver itself performs no I/O and holds no state: the catalog is
//! loaded once, passed explicitly, and shared immutably across invocations.

pub use insertkit_core::{ConfigError, Error, GeometryError, Result, ValidationError};

pub use insertkit_catalog::{builtin, standard_library, InsertCatalog, InsertId, InsertSpec};

pub use insertkit_settings::{
    default_config_path, Config, DialogDefaults, HoleDefaults, InsertEntry, SettingsStore,
};

pub use insertkit_holes::{
    create_insert_holes, resolve, resolve_for, specification_summary, BoreDepth, Chamfer, Fillet,
    GeometryHost, HoleOverrides, HoleParameters, HoleRequest, HoleType, OperationReport,
    TimelineMarker,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG environment
/// variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
