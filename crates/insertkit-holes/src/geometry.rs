//! Geometry-host capability contract
//!
//! The host CAD application owns sketching, profile resolution, extent
//! computation, and history management. InsertKit hands it finished
//! [`HoleParameters`] through this trait and never inspects geometry itself.
//! An adapter for a concrete CAD API implements the trait and maps native
//! failures into [`GeometryError`] variants.

use insertkit_core::GeometryError;

use crate::resolver::{Chamfer, Fillet, HoleParameters};

/// Marker for a span of host history entries, handed back when the span is
/// collapsed into one named timeline group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineMarker(pub usize);

/// Capability contract for creating insert-hole geometry
///
/// `Point` is the host's handle for a placement (e.g. a sketch point);
/// `Feature` its handle for a created bore. Both stay opaque to InsertKit.
pub trait GeometryHost {
    /// Host handle for a placement point
    type Point;
    /// Host handle for a created bore feature
    type Feature;

    /// Cut the bore at `point` per `params`
    ///
    /// Covers the host-side chain: sketch circle at the point, profile
    /// resolution, cut extrusion with the requested depth or a through-all
    /// extent.
    fn cut_bore(
        &mut self,
        point: &Self::Point,
        params: &HoleParameters,
    ) -> Result<Self::Feature, GeometryError>;

    /// Chamfer the bore entry edge
    fn chamfer_entry(
        &mut self,
        bore: &Self::Feature,
        chamfer: &Chamfer,
    ) -> Result<(), GeometryError>;

    /// Fillet the bottom edge of a blind bore
    fn fillet_bottom(
        &mut self,
        bore: &Self::Feature,
        fillet: &Fillet,
    ) -> Result<(), GeometryError>;

    /// Mark the current history position
    fn begin_timeline_group(&mut self) -> TimelineMarker;

    /// Collapse everything created since `marker` into one named,
    /// collapsible history entry
    fn end_timeline_group(
        &mut self,
        marker: TimelineMarker,
        label: &str,
    ) -> Result<(), GeometryError>;
}
