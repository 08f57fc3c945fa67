//! Pure derivation of hole parameters from an insert specification
//!
//! [`resolve`] is deterministic and side-effect free: the same specification,
//! request, and defaults always produce the same [`HoleParameters`]. It never
//! touches geometry; through holes are signaled with a typed sentinel the
//! host maps onto its own through-all extent.

use insertkit_catalog::{InsertCatalog, InsertId, InsertSpec};
use insertkit_core::{limits, ValidationError};
use insertkit_settings::HoleDefaults;
use serde::{Deserialize, Serialize};

use crate::request::{HoleRequest, HoleType};

/// Depth of the bore cut
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BoreDepth {
    /// Stop at a concrete depth below the sketch plane, in mm
    Blind(f64),
    /// Cut entirely through the target body. The host decides how: a native
    /// through-all extent or a body-thickness-derived distance.
    ThroughAll,
}

impl BoreDepth {
    /// Whether this is a through cut
    pub fn is_through(&self) -> bool {
        matches!(self, Self::ThroughAll)
    }

    /// Concrete depth in mm, `None` for a through cut
    pub fn depth_mm(&self) -> Option<f64> {
        match self {
            Self::Blind(depth) => Some(*depth),
            Self::ThroughAll => None,
        }
    }
}

impl std::fmt::Display for BoreDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blind(depth) => write!(f, "{} mm", depth),
            Self::ThroughAll => write!(f, "through body"),
        }
    }
}

/// Chamfer at the bore entry edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chamfer {
    /// Leg size in mm
    pub size: f64,
    /// Angle in degrees
    pub angle: f64,
}

/// Fillet at the bottom edge of a blind bore
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fillet {
    /// Radius in mm
    pub radius: f64,
}

/// Final geometric parameters handed to the host
///
/// Dimensionally valid by construction: positive diameter, a blind depth
/// strictly greater than the insert length, never a finite through depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleParameters {
    /// Insert the parameters were derived for
    pub insert: InsertId,
    /// Bore diameter in mm, taken unmodified from the specification
    pub bore_diameter: f64,
    /// Bore depth
    pub bore_depth: BoreDepth,
    /// Entry chamfer, when requested
    pub chamfer: Option<Chamfer>,
    /// Bottom fillet, when requested and the hole is blind
    pub fillet: Option<Fillet>,
}

/// Derive hole parameters from a specification and a request
///
/// Never fails for a valid catalog entry. Degenerate specifications and
/// non-positive override values are rejected with a [`ValidationError`]
/// before anything reaches the host.
pub fn resolve(
    spec: &InsertSpec,
    request: &HoleRequest,
    defaults: &HoleDefaults,
) -> Result<HoleParameters, ValidationError> {
    check_spec(spec)?;
    check_overrides(request)?;

    let bore_depth = match request.hole_type {
        HoleType::Blind => {
            let extra = request
                .overrides
                .blind_extra_depth
                .unwrap_or(defaults.blind_extra_depth);
            BoreDepth::Blind(spec.insert_length + extra)
        }
        HoleType::Through => BoreDepth::ThroughAll,
    };

    let chamfer = request.chamfer.then(|| Chamfer {
        size: request.overrides.chamfer_size.unwrap_or(defaults.chamfer_size),
        angle: request
            .overrides
            .chamfer_angle
            .unwrap_or(defaults.chamfer_angle),
    });

    // A bottom fillet needs a bottom; through holes never get one.
    let fillet = (request.fillet && request.hole_type == HoleType::Blind).then(|| Fillet {
        radius: request
            .overrides
            .fillet_radius
            .unwrap_or(defaults.fillet_radius),
    });

    Ok(HoleParameters {
        insert: spec.id.clone(),
        bore_diameter: spec.bore_diameter,
        bore_depth,
        chamfer,
        fillet,
    })
}

/// Look the insert up in the catalog, then [`resolve`]
///
/// A blank identifier means no insert was selected; an identifier missing
/// from the catalog is reported as unknown.
pub fn resolve_for(
    catalog: &InsertCatalog,
    request: &HoleRequest,
    defaults: &HoleDefaults,
) -> Result<HoleParameters, ValidationError> {
    if request.insert.is_blank() {
        return Err(ValidationError::MissingInsert);
    }
    let spec = catalog
        .get(&request.insert)
        .ok_or_else(|| ValidationError::UnknownInsert(request.insert.to_string()))?;
    resolve(spec, request, defaults)
}

fn check_spec(spec: &InsertSpec) -> Result<(), ValidationError> {
    if !spec.bore_diameter.is_finite() || spec.bore_diameter <= 0.0 {
        return Err(ValidationError::InvalidSpec {
            id: spec.id.to_string(),
            reason: format!("bore diameter {} mm is not positive", spec.bore_diameter),
        });
    }
    if !spec.insert_length.is_finite() || spec.insert_length <= 0.0 {
        return Err(ValidationError::InvalidSpec {
            id: spec.id.to_string(),
            reason: format!("insert length {} mm is not positive", spec.insert_length),
        });
    }
    Ok(())
}

fn check_overrides(request: &HoleRequest) -> Result<(), ValidationError> {
    let overrides = &request.overrides;
    check_positive("chamfer_size", overrides.chamfer_size)?;
    check_positive("fillet_radius", overrides.fillet_radius)?;
    check_positive("blind_extra_depth", overrides.blind_extra_depth)?;
    if let Some(angle) = overrides.chamfer_angle {
        if !angle.is_finite() || angle <= 0.0 || angle >= limits::MAX_CHAMFER_ANGLE {
            return Err(ValidationError::InvalidOverride {
                name: "chamfer_angle".to_string(),
                value: angle,
            });
        }
    }
    Ok(())
}

fn check_positive(name: &str, value: Option<f64>) -> Result<(), ValidationError> {
    if let Some(value) = value {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::InvalidOverride {
                name: name.to_string(),
                value,
            });
        }
    }
    Ok(())
}
