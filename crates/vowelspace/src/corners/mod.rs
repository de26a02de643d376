//! Angular corner classification.
//!
//! Vectors are bucketed into the four `Corner` bins. A bin becomes a corner
//! only if it passes both gates:
//! - plausibility: a `CornerSupportPolicy` over the bin's angles
//!   (default `InnerBandPolicy`);
//! - support: strictly more than `min_support` points.
//!
//! A surviving bin is summarised by (mean norm, mean angle), projected back
//! into the (F2, F1) plane around the center. Output follows bin order and
//! holds at most one entry per corner.

mod policy;

pub use policy::{AcceptAll, CornerSupportPolicy, InnerBandPolicy};

use crate::stats::mean;
use crate::types::{Corner, CornerMean, PolarVector, VowelSpaceCenter};

/// Classify `vectors` (missing entries already removed) into corner means.
pub fn classify_corners<P: CornerSupportPolicy + ?Sized>(
    vectors: &[PolarVector],
    center: &VowelSpaceCenter,
    min_support: usize,
    policy: &P,
) -> Vec<CornerMean> {
    let mut out = Vec::with_capacity(Corner::ALL.len());
    for corner in Corner::ALL {
        let members: Vec<PolarVector> = vectors
            .iter()
            .copied()
            .filter(|v| Corner::of_angle(v.angle) == Some(corner))
            .collect();
        if members.is_empty() {
            continue;
        }
        let angles: Vec<f64> = members.iter().map(|v| v.angle).collect();
        let plausible = policy.accepts(corner, &angles);
        let supported = members.len() > min_support;
        if !(plausible && supported) {
            tracing::debug!(
                corner = corner.label(),
                support = members.len(),
                plausible,
                supported,
                "corner rejected"
            );
            continue;
        }
        let norms: Vec<f64> = members.iter().map(|v| v.norm).collect();
        let m = PolarVector {
            norm: mean(&norms),
            angle: mean(&angles),
        };
        out.push(CornerMean {
            corner,
            support: members.len(),
            mean: m,
            point: m.to_plane(center),
        });
    }
    out
}
