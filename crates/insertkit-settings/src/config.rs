//! Configuration model for InsertKit
//!
//! One structured file carries everything the engine needs at startup:
//!
//! - `[defaults]`: derivation defaults (chamfer size/angle, fillet radius,
//!   blind extra depth)
//! - `[dialog]`: remembered dialog state (toggles, hole type, last insert)
//! - `[[inserts]]`: one table per insert specification, in dialog order
//!
//! Supports TOML and JSON by file extension, the way the rest of the
//! configuration stack does. Validation is eager: every numeric field is
//! checked against the shared limits at load time so malformed input fails
//! before any geometry is attempted.

use insertkit_catalog::{builtin, InsertCatalog, InsertId, InsertSpec};
use insertkit_core::{limits, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Derivation defaults applied when a hole request carries no override
///
/// All lengths are millimeters, the angle degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoleDefaults {
    /// Chamfer leg size at the bore entry
    pub chamfer_size: f64,
    /// Chamfer angle
    pub chamfer_angle: f64,
    /// Bottom fillet radius for blind holes
    pub fillet_radius: f64,
    /// Extra depth cut below the insert in blind holes
    pub blind_extra_depth: f64,
}

impl Default for HoleDefaults {
    fn default() -> Self {
        Self {
            chamfer_size: 0.5,
            chamfer_angle: 45.0,
            fillet_radius: 0.5,
            blind_extra_depth: 1.0,
        }
    }
}

impl HoleDefaults {
    /// Validate against the shared limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_default("chamfer_size", self.chamfer_size, limits::MAX_CHAMFER_SIZE)?;
        check_default("fillet_radius", self.fillet_radius, limits::MAX_FILLET_RADIUS)?;
        check_default(
            "blind_extra_depth",
            self.blind_extra_depth,
            limits::MAX_BLIND_EXTRA_DEPTH,
        )?;
        if !self.chamfer_angle.is_finite()
            || self.chamfer_angle <= 0.0
            || self.chamfer_angle >= limits::MAX_CHAMFER_ANGLE
        {
            return Err(ConfigError::InvalidValue {
                section: "defaults".to_string(),
                key: "chamfer_angle".to_string(),
                reason: format!(
                    "{} deg is outside 0-{} deg",
                    self.chamfer_angle,
                    limits::MAX_CHAMFER_ANGLE
                ),
            });
        }
        Ok(())
    }
}

fn check_default(key: &str, value: f64, max: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 || value > max {
        return Err(ConfigError::InvalidValue {
            section: "defaults".to_string(),
            key: key.to_string(),
            reason: format!("{} mm is outside 0-{} mm", value, max),
        });
    }
    Ok(())
}

/// Remembered dialog state, written back after each confirmed operation
/// so the next invocation opens with the same choices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogDefaults {
    /// Chamfer checkbox initial state
    pub chamfer_enabled: bool,
    /// Bottom fillet checkbox initial state
    pub fillet_enabled: bool,
    /// Show the completion message after an operation
    pub show_success_message: bool,
    /// Blind hole selected (vs through hole)
    pub blind_hole: bool,
    /// Insert selected last time, preselected in the dropdown
    pub last_selected_insert: Option<InsertId>,
}

impl Default for DialogDefaults {
    fn default() -> Self {
        Self {
            chamfer_enabled: true,
            fillet_enabled: false,
            show_success_message: true,
            blind_hole: true,
            last_selected_insert: None,
        }
    }
}

/// One insert row in the configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertEntry {
    /// Unique insert identifier
    pub name: String,
    /// Bore diameter in mm
    pub bore_diameter: f64,
    /// Insert length in mm
    pub insert_length: f64,
    /// Advisory minimum wall thickness in mm
    pub min_wall_thickness: f64,
}

impl InsertEntry {
    /// Convert to a catalog specification, flagging non-builtin names as
    /// user-defined
    pub fn to_spec(&self) -> InsertSpec {
        InsertSpec {
            id: InsertId::new(self.name.clone()),
            bore_diameter: self.bore_diameter,
            insert_length: self.insert_length,
            min_wall_thickness: self.min_wall_thickness,
            custom: !builtin::is_builtin(&self.name),
        }
    }

    /// Build an entry from a catalog specification
    pub fn from_spec(spec: &InsertSpec) -> Self {
        Self {
            name: spec.id.to_string(),
            bore_diameter: spec.bore_diameter,
            insert_length: spec.insert_length,
            min_wall_thickness: spec.min_wall_thickness,
        }
    }
}

/// Complete configuration
///
/// Aggregates the derivation defaults, the remembered dialog state, and the
/// insert table, and provides file I/O.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Derivation defaults
    #[serde(default)]
    pub defaults: HoleDefaults,
    /// Remembered dialog state
    #[serde(default)]
    pub dialog: DialogDefaults,
    /// Insert table, in dialog order
    #[serde(default)]
    pub inserts: Vec<InsertEntry>,
}

impl Config {
    /// The standard configuration: builtin defaults plus the builtin insert
    /// library. Written to disk on first run.
    pub fn standard() -> Self {
        Self {
            defaults: HoleDefaults::default(),
            dialog: DialogDefaults::default(),
            inserts: builtin::standard_library()
                .iter()
                .map(InsertEntry::from_spec)
                .collect(),
        }
    }

    /// Load and validate a configuration file (TOML or JSON by extension)
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadFailed(format!("{}: {}", path.display(), e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| ConfigError::Malformed(e.to_string()))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content).map_err(|e| ConfigError::Malformed(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()));
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate and save to a configuration file (TOML or JSON by extension)
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| ConfigError::WriteFailed(e.to_string()))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::WriteFailed(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()));
        };

        std::fs::write(path, content)
            .map_err(|e| ConfigError::WriteFailed(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate the whole configuration
    ///
    /// Checks the defaults section, then every insert entry including
    /// duplicate detection. An empty insert table is rejected: a dialog with
    /// nothing to offer is a configuration fault, not a usable state.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.defaults.validate()?;
        if self.inserts.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        self.catalog().map(|_| ())
    }

    /// Build the insert catalog from the file entries
    pub fn catalog(&self) -> Result<InsertCatalog, ConfigError> {
        let mut catalog = InsertCatalog::new();
        for entry in &self.inserts {
            catalog.insert(entry.to_spec())?;
        }
        Ok(catalog)
    }
}
