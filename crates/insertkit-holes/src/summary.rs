//! Dialog summary text
//!
//! The selection dialog shows the dimensions the current choices will
//! produce, before anything is cut.

use insertkit_catalog::InsertSpec;
use insertkit_settings::HoleDefaults;

use crate::request::HoleType;

/// Multi-line specification summary for the current insert and hole type
pub fn specification_summary(
    spec: &InsertSpec,
    hole_type: HoleType,
    defaults: &HoleDefaults,
) -> String {
    let depth = match hole_type {
        HoleType::Blind => format!("{} mm", spec.insert_length + defaults.blind_extra_depth),
        HoleType::Through => "through body".to_string(),
    };
    format!(
        "Hole diameter: {} mm\nInsert length: {} mm\nHole depth: {}\nMin wall thickness: {} mm",
        spec.bore_diameter, spec.insert_length, depth, spec.min_wall_thickness
    )
}
