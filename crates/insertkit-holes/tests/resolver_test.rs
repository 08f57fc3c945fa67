use insertkit_catalog::{standard_library, InsertId, InsertSpec};
use insertkit_core::ValidationError;
use insertkit_holes::{resolve, resolve_for, BoreDepth, HoleRequest, HoleType};
use insertkit_settings::HoleDefaults;

fn request(insert: &str, hole_type: HoleType) -> HoleRequest {
    HoleRequest::new(insert, hole_type)
}

#[test]
fn test_blind_m3_standard() {
    let catalog = standard_library();
    let defaults = HoleDefaults::default();

    let params = resolve_for(
        &catalog,
        &request("M3 x 5.7mm (standard)", HoleType::Blind),
        &defaults,
    )
    .unwrap();

    assert_eq!(params.bore_diameter, 4.4);
    assert_eq!(params.bore_depth, BoreDepth::Blind(6.7));
    assert_eq!(params.bore_depth.depth_mm(), Some(6.7));
}

#[test]
fn test_through_m6_with_default_chamfer() {
    let catalog = standard_library();
    let defaults = HoleDefaults::default();

    let params = resolve_for(&catalog, &request("M6 x 12.7mm", HoleType::Through), &defaults)
        .unwrap();

    assert_eq!(params.bore_diameter, 8.0);
    assert!(params.bore_depth.is_through());
    assert_eq!(params.bore_depth.depth_mm(), None);

    let chamfer = params.chamfer.unwrap();
    assert_eq!(chamfer.size, 0.5);
    assert_eq!(chamfer.angle, 45.0);
}

#[test]
fn test_blind_depth_clears_insert_for_every_builtin() {
    let catalog = standard_library();
    let defaults = HoleDefaults::default();

    for spec in catalog.iter() {
        let params = resolve(
            spec,
            &request(spec.id.as_str(), HoleType::Blind),
            &defaults,
        )
        .unwrap();
        let depth = params.bore_depth.depth_mm().unwrap();
        assert!(
            depth > spec.insert_length,
            "{}: depth {} must clear insert length {}",
            spec.id,
            depth,
            spec.insert_length
        );
        assert_eq!(depth, spec.insert_length + defaults.blind_extra_depth);
    }
}

#[test]
fn test_resolution_is_idempotent() {
    let catalog = standard_library();
    let defaults = HoleDefaults::default();
    let mut req = request("M3 x 5.7mm (standard)", HoleType::Blind);
    req.fillet = true;

    let first = resolve_for(&catalog, &req, &defaults).unwrap();
    let second = resolve_for(&catalog, &req, &defaults).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_blank_insert_rejected() {
    let catalog = standard_library();
    let err = resolve_for(
        &catalog,
        &request("", HoleType::Blind),
        &HoleDefaults::default(),
    )
    .unwrap_err();
    assert_eq!(err, ValidationError::MissingInsert);
}

#[test]
fn test_unknown_insert_rejected() {
    let catalog = standard_library();
    let err = resolve_for(
        &catalog,
        &request("M12 x 20mm", HoleType::Blind),
        &HoleDefaults::default(),
    )
    .unwrap_err();
    assert_eq!(err, ValidationError::UnknownInsert("M12 x 20mm".to_string()));
}

#[test]
fn test_degenerate_spec_rejected() {
    let spec = InsertSpec {
        id: InsertId::from("Broken"),
        bore_diameter: 0.0,
        insert_length: 5.7,
        min_wall_thickness: 1.6,
        custom: true,
    };
    let err = resolve(
        &spec,
        &request("Broken", HoleType::Blind),
        &HoleDefaults::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ValidationError::InvalidSpec { .. }));
}

#[test]
fn test_blind_extra_depth_override() {
    let catalog = standard_library();
    let mut req = request("M3 x 5.7mm (standard)", HoleType::Blind);
    req.overrides.blind_extra_depth = Some(2.0);

    let params = resolve_for(&catalog, &req, &HoleDefaults::default()).unwrap();
    assert_eq!(params.bore_depth, BoreDepth::Blind(7.7));
}

#[test]
fn test_chamfer_and_fillet_overrides() {
    let catalog = standard_library();
    let mut req = request("M5 x 9.5mm (standard)", HoleType::Blind);
    req.fillet = true;
    req.overrides.chamfer_size = Some(0.8);
    req.overrides.chamfer_angle = Some(30.0);
    req.overrides.fillet_radius = Some(0.3);

    let params = resolve_for(&catalog, &req, &HoleDefaults::default()).unwrap();
    let chamfer = params.chamfer.unwrap();
    assert_eq!(chamfer.size, 0.8);
    assert_eq!(chamfer.angle, 30.0);
    assert_eq!(params.fillet.unwrap().radius, 0.3);
}

#[test]
fn test_toggles_off_omit_features() {
    let catalog = standard_library();
    let mut req = request("M3 x 5.7mm (standard)", HoleType::Blind);
    req.chamfer = false;
    req.fillet = false;

    let params = resolve_for(&catalog, &req, &HoleDefaults::default()).unwrap();
    assert!(params.chamfer.is_none());
    assert!(params.fillet.is_none());
}

#[test]
fn test_fillet_suppressed_on_through_holes() {
    let catalog = standard_library();
    let mut req = request("M6 x 12.7mm", HoleType::Through);
    req.fillet = true;

    let params = resolve_for(&catalog, &req, &HoleDefaults::default()).unwrap();
    assert!(params.fillet.is_none());
}

#[test]
fn test_negative_override_rejected() {
    let catalog = standard_library();
    let mut req = request("M3 x 5.7mm (standard)", HoleType::Blind);
    req.overrides.blind_extra_depth = Some(-1.0);

    let err = resolve_for(&catalog, &req, &HoleDefaults::default()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidOverride {
            name: "blind_extra_depth".to_string(),
            value: -1.0,
        }
    );

    let mut req = request("M3 x 5.7mm (standard)", HoleType::Blind);
    req.overrides.chamfer_angle = Some(95.0);
    assert!(resolve_for(&catalog, &req, &HoleDefaults::default()).is_err());
}
