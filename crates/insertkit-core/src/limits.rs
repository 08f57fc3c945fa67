//! Dimensional limits enforced at configuration load
//!
//! All lengths are millimeters, angles degrees. A value outside its range
//! fails the load with a [`crate::ConfigError`] naming the section and key.

/// Largest accepted bore diameter.
pub const MAX_BORE_DIAMETER: f64 = 50.0;

/// Largest accepted insert length.
pub const MAX_INSERT_LENGTH: f64 = 100.0;

/// Largest accepted minimum wall thickness. Zero is allowed; the value is
/// advisory and never enters geometry derivation.
pub const MAX_WALL_THICKNESS: f64 = 20.0;

/// Largest accepted chamfer leg size.
pub const MAX_CHAMFER_SIZE: f64 = 5.0;

/// Largest accepted bottom fillet radius.
pub const MAX_FILLET_RADIUS: f64 = 5.0;

/// Largest accepted blind-hole extra depth. The extra depth must stay
/// strictly positive so a blind bore always clears the insert length.
pub const MAX_BLIND_EXTRA_DEPTH: f64 = 10.0;

/// Chamfer angles must stay strictly inside (0, MAX_CHAMFER_ANGLE).
pub const MAX_CHAMFER_ANGLE: f64 = 90.0;
