//! Builtin insert specifications
//!
//! The standard library follows the CNC Kitchen heat-set insert dimensions
//! (bore diameter, insert length, minimum wall thickness, all mm) for the
//! common metric sizes plus the 1/4"-20 camera thread.

use crate::catalog::InsertCatalog;
use crate::model::InsertSpec;

/// (identifier, bore diameter, insert length, min wall thickness)
const STANDARD_INSERTS: &[(&str, f64, f64, f64)] = &[
    ("M2 x 3mm", 3.2, 3.0, 1.5),
    ("M2.5 x 4mm", 4.0, 4.0, 1.5),
    ("M3 x 3mm (short)", 4.4, 3.0, 1.6),
    ("M3 x 4mm (short)", 4.4, 4.0, 1.6),
    ("M3 x 5.7mm (standard)", 4.4, 5.7, 1.6),
    ("M4 x 4mm (short)", 5.6, 4.0, 2.0),
    ("M4 x 8.1mm (standard)", 5.6, 8.1, 2.0),
    ("M5 x 5.8mm (short)", 6.4, 5.8, 2.5),
    ("M5 x 9.5mm (standard)", 6.4, 9.5, 2.5),
    ("M6 x 12.7mm", 8.0, 12.7, 3.0),
    ("M8 x 12.7mm", 9.7, 12.7, 4.0),
    ("M10 x 12.7mm", 12.0, 12.7, 5.0),
    ("1/4\"-20 x 12.7mm (camera)", 8.0, 12.7, 3.0),
];

/// Build the builtin standard library
pub fn standard_library() -> InsertCatalog {
    let mut catalog = InsertCatalog::new();
    for &(name, bore_diameter, insert_length, min_wall_thickness) in STANDARD_INSERTS {
        catalog.insert_unchecked(InsertSpec::new(
            name,
            bore_diameter,
            insert_length,
            min_wall_thickness,
        ));
    }
    catalog
}

/// Whether `name` is one of the builtin identifiers
pub fn is_builtin(name: &str) -> bool {
    STANDARD_INSERTS.iter().any(|&(builtin, ..)| builtin == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InsertId;

    #[test]
    fn test_standard_library_contents() {
        let catalog = standard_library();
        assert_eq!(catalog.len(), 13);

        let m3 = catalog
            .get(&InsertId::from("M3 x 5.7mm (standard)"))
            .unwrap();
        assert_eq!(m3.bore_diameter, 4.4);
        assert_eq!(m3.insert_length, 5.7);
        assert_eq!(m3.min_wall_thickness, 1.6);

        let camera = catalog
            .get(&InsertId::from("1/4\"-20 x 12.7mm (camera)"))
            .unwrap();
        assert_eq!(camera.bore_diameter, 8.0);
    }

    #[test]
    fn test_standard_library_is_valid_and_unique() {
        // Every builtin entry must survive the strict loading path.
        let mut catalog = InsertCatalog::new();
        for spec in standard_library().iter() {
            catalog.insert(spec.clone()).unwrap();
        }
        assert_eq!(catalog.len(), 13);
    }

    #[test]
    fn test_is_builtin() {
        assert!(is_builtin("M2 x 3mm"));
        assert!(is_builtin("M10 x 12.7mm"));
        assert!(!is_builtin("My Custom M3"));
    }

    #[test]
    fn test_order_runs_small_to_large() {
        let catalog = standard_library();
        assert_eq!(catalog.first().unwrap().id.as_str(), "M2 x 3mm");
        let names: Vec<&str> = catalog.ids().map(|id| id.as_str()).collect();
        assert_eq!(names[4], "M3 x 5.7mm (standard)");
    }
}
