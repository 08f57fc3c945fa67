//! Multi-point insert hole creation
//!
//! Resolves a request once, then walks the selected points, issuing one bore
//! cut (plus optional chamfer and fillet) per point. A point the host cannot
//! cut is counted as failed and the remaining points continue; a missing
//! chamfer or fillet edge only downgrades that feature, the hole still
//! counts.

use insertkit_catalog::{InsertCatalog, InsertId};
use insertkit_core::Error;
use insertkit_settings::HoleDefaults;
use tracing::{debug, warn};

use crate::geometry::GeometryHost;
use crate::request::HoleRequest;
use crate::resolver::resolve_for;

/// Outcome of one multi-point operation
#[derive(Debug, Clone, PartialEq)]
pub struct OperationReport {
    /// Insert the holes were created for
    pub insert: InsertId,
    /// Holes created
    pub created: usize,
    /// Points where the bore cut failed
    pub failed: usize,
}

impl OperationReport {
    /// Whether every selected point produced a hole
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    /// Completion text for the confirmation dialog
    pub fn summary_message(&self) -> String {
        if self.failed > 0 {
            format!(
                "Created {} insert hole(s).\n{} failed (no intersection with target body).",
                self.created, self.failed
            )
        } else {
            format!("Successfully created {} insert hole(s).", self.created)
        }
    }
}

/// Create one insert hole per point, grouped under a single timeline entry
///
/// The request is resolved exactly once; every point shares the resulting
/// parameters. When at least one hole was created the features are collapsed
/// into one history entry labeled `"(<n>x <insert>)"`. Validation failures
/// abort before anything reaches the host, leaving the document unmodified.
pub fn create_insert_holes<H: GeometryHost>(
    host: &mut H,
    catalog: &InsertCatalog,
    defaults: &HoleDefaults,
    request: &HoleRequest,
    points: &[H::Point],
) -> Result<OperationReport, Error> {
    let params = resolve_for(catalog, request, defaults)?;
    debug!(
        insert = %params.insert,
        diameter = params.bore_diameter,
        depth = %params.bore_depth,
        points = points.len(),
        "creating insert holes"
    );

    let marker = host.begin_timeline_group();
    let mut created = 0;
    let mut failed = 0;

    for (index, point) in points.iter().enumerate() {
        let bore = match host.cut_bore(point, &params) {
            Ok(bore) => bore,
            Err(err) => {
                warn!(point = index, %err, "bore cut failed, skipping point");
                failed += 1;
                continue;
            }
        };

        if let Some(chamfer) = &params.chamfer {
            if let Err(err) = host.chamfer_entry(&bore, chamfer) {
                warn!(point = index, %err, "chamfer skipped");
            }
        }

        if let Some(fillet) = &params.fillet {
            if let Err(err) = host.fillet_bottom(&bore, fillet) {
                warn!(point = index, %err, "bottom fillet skipped");
            }
        }

        created += 1;
    }

    if created > 0 {
        let label = format!("({}x {})", created, params.insert);
        // Grouping can be unavailable (non-parametric host mode); the holes
        // themselves are already in place.
        if let Err(err) = host.end_timeline_group(marker, &label) {
            warn!(%err, "timeline grouping unavailable");
        }
    }

    debug!(created, failed, "insert hole operation finished");
    Ok(OperationReport {
        insert: params.insert,
        created,
        failed,
    })
}
