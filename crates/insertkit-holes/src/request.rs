use insertkit_catalog::InsertId;
use insertkit_settings::DialogDefaults;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Hole style for an insert bore
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoleType {
    /// Stops inside the part
    Blind,
    /// Passes completely through the part
    Through,
}

impl Default for HoleType {
    fn default() -> Self {
        Self::Blind
    }
}

impl std::fmt::Display for HoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blind => write!(f, "Blind hole"),
            Self::Through => write!(f, "Through hole"),
        }
    }
}

impl FromStr for HoleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blind" => Ok(Self::Blind),
            "through" => Ok(Self::Through),
            _ => Err(format!("Unknown hole type: {}", s)),
        }
    }
}

/// Per-request replacements for the configured derivation defaults
///
/// `None` means "use the configured default". All lengths are millimeters,
/// the angle degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoleOverrides {
    pub chamfer_size: Option<f64>,
    pub chamfer_angle: Option<f64>,
    pub fillet_radius: Option<f64>,
    pub blind_extra_depth: Option<f64>,
}

/// One confirmed hole request from the selection dialog
///
/// Transient: constructed per invocation and discarded afterwards. A
/// multi-point operation shares one request across all selected points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleRequest {
    /// Selected insert identifier
    pub insert: InsertId,
    /// Blind or through
    pub hole_type: HoleType,
    /// Chamfer the bore entry edge
    pub chamfer: bool,
    /// Fillet the bore bottom (blind holes only)
    pub fillet: bool,
    /// Per-request default replacements
    #[serde(default)]
    pub overrides: HoleOverrides,
}

impl HoleRequest {
    /// New request with the dialog's factory-initial toggles
    pub fn new(insert: impl Into<InsertId>, hole_type: HoleType) -> Self {
        Self {
            insert: insert.into(),
            hole_type,
            chamfer: true,
            fillet: false,
            overrides: HoleOverrides::default(),
        }
    }

    /// New request initialized from remembered dialog state
    pub fn from_dialog(insert: impl Into<InsertId>, dialog: &DialogDefaults) -> Self {
        Self {
            insert: insert.into(),
            hole_type: if dialog.blind_hole {
                HoleType::Blind
            } else {
                HoleType::Through
            },
            chamfer: dialog.chamfer_enabled,
            fillet: dialog.fillet_enabled,
            overrides: HoleOverrides::default(),
        }
    }
}
