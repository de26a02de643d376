//! Vowel space area (VSA) from corner mean vectors.
//!
//! - Fewer than 3 surviving corners: area is NaN and `shortfall` says why.
//! - Otherwise the corner points are ordered by angle around their own
//!   vertex centroid (no self-intersections) and the shoelace formula gives
//!   the area in Hz².

use nalgebra::Vector2;

use crate::center::{center_of_points, check_lengths};
use crate::cfg::VsaCfg;
use crate::corners::{classify_corners, CornerSupportPolicy, InnerBandPolicy};
use crate::error::{Shortfall, VowelSpaceError};
use crate::types::{zip_points, CornerMean, PolarVector, VowelSpaceCenter};
use crate::vectors::polar_of;

/// Result of a VSA computation.
#[derive(Clone, Debug, PartialEq)]
pub struct VowelSpaceArea {
    /// Area in Hz²; NaN when fewer than 3 corners survive.
    pub area: f64,
    pub center: VowelSpaceCenter,
    pub corners: Vec<CornerMean>,
    /// Set whenever `area` is NaN.
    pub shortfall: Option<Shortfall>,
}

/// VSA with the default corner policy.
pub fn vowel_space_area(
    f1: &[f64],
    f2: &[f64],
    cfg: &VsaCfg,
) -> Result<VowelSpaceArea, VowelSpaceError> {
    vowel_space_area_with_policy(f1, f2, cfg, &InnerBandPolicy::default())
}

/// VSA with a caller-supplied corner plausibility policy.
pub fn vowel_space_area_with_policy<P: CornerSupportPolicy + ?Sized>(
    f1: &[f64],
    f2: &[f64],
    cfg: &VsaCfg,
    policy: &P,
) -> Result<VowelSpaceArea, VowelSpaceError> {
    check_lengths(f1, f2)?;
    let mut pts = zip_points(f1, f2);
    pts.retain(|p| !p.is_missing());
    let center = match cfg.center {
        Some(c) => c,
        None => center_of_points(&pts, cfg.method),
    };
    let vectors: Vec<PolarVector> = pts.iter().filter_map(|&p| polar_of(p, &center)).collect();
    let corners = classify_corners(&vectors, &center, cfg.min_corner_support, policy);
    let points: Vec<Vector2<f64>> = corners.iter().map(|c| c.point).collect();
    let (area, shortfall) = if points.len() < 3 {
        (
            f64::NAN,
            Some(Shortfall::InsufficientData {
                needed: 3,
                got: points.len(),
            }),
        )
    } else {
        (polygon_area(&points), None)
    };
    tracing::debug!(corners = corners.len(), area, "vowel space area");
    Ok(VowelSpaceArea {
        area,
        center,
        corners,
        shortfall,
    })
}

/// Area of the polygon through `points`, ordered by angle around their
/// centroid. NaN for fewer than 3 points.
pub fn polygon_area(points: &[Vector2<f64>]) -> f64 {
    if points.len() < 3 {
        return f64::NAN;
    }
    let c = points.iter().fold(Vector2::<f64>::zeros(), |acc, p| acc + p) / points.len() as f64;
    let mut ordered: Vec<Vector2<f64>> = points.to_vec();
    ordered.sort_by(|a, b| {
        let aa = (a.y - c.y).atan2(a.x - c.x);
        let bb = (b.y - c.y).atan2(b.x - c.x);
        aa.total_cmp(&bb)
    });
    shoelace(&ordered).abs()
}

/// Signed shoelace area (positive for CCW order).
pub(crate) fn shoelace(verts: &[Vector2<f64>]) -> f64 {
    let mut a = 0.0;
    for i in 0..verts.len() {
        let p = verts[i];
        let q = verts[(i + 1) % verts.len()];
        a += p.x * q.y - q.x * p.y;
    }
    0.5 * a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::center::CenterMethod;
    use crate::corners::AcceptAll;
    use proptest::prelude::*;

    const F1: [f64; 4] = [300.0, 600.0, 600.0, 300.0];
    const F2: [f64; 4] = [2200.0, 1700.0, 1000.0, 900.0];

    #[test]
    fn canonical_quadrilateral() {
        let cfg = VsaCfg {
            min_corner_support: 0,
            ..VsaCfg::default()
        };
        let r = vowel_space_area(&F1, &F2, &cfg).unwrap();
        assert_eq!(r.corners.len(), 4);
        assert!(r.shortfall.is_none());
        // Trapezoid: parallel sides 1300 and 700 Hz, height 300 Hz.
        assert!((r.area - 300_000.0).abs() < 1e-6, "area {}", r.area);
    }

    #[test]
    fn default_support_leaves_nan() {
        let r = vowel_space_area(&F1, &F2, &VsaCfg::default()).unwrap();
        assert!(r.area.is_nan());
        assert!(r.corners.is_empty());
        assert_eq!(
            r.shortfall,
            Some(Shortfall::InsufficientData { needed: 3, got: 0 })
        );
    }

    #[test]
    fn empty_input_is_nan() {
        let r = vowel_space_area(&[], &[], &VsaCfg::default()).unwrap();
        assert!(r.area.is_nan());
        assert!(!r.center.is_defined());
    }

    #[test]
    fn center_override_is_used() {
        let cfg = VsaCfg {
            method: CenterMethod::Centroid,
            center: Some(VowelSpaceCenter::new(450.0, 1550.0)),
            min_corner_support: 0,
        };
        let r = vowel_space_area_with_policy(&F1, &F2, &cfg, &AcceptAll).unwrap();
        assert_eq!(r.center, VowelSpaceCenter::new(450.0, 1550.0));
        assert!((r.area - 300_000.0).abs() < 1e-6);
    }

    #[test]
    fn polygon_order_does_not_matter() {
        let sq = [
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
        ];
        assert!((polygon_area(&sq) - 1.0).abs() < 1e-12);
        assert!(polygon_area(&sq[..2]).is_nan());
        let tri = [Vector2::new(0.0, 0.0), Vector2::new(4.0, 0.0), Vector2::new(0.0, 3.0)];
        assert!((polygon_area(&tri) - 6.0).abs() < 1e-12);
    }

    fn corner_cloud() -> impl Strategy<Value = Vec<(f64, f64)>> {
        // Four jittered corner clusters, 6 points each.
        let corners = [(300.0, 2200.0), (650.0, 1700.0), (650.0, 1100.0), (320.0, 850.0)];
        prop::collection::vec((-40.0f64..40.0, -80.0f64..80.0), 24).prop_map(move |jit| {
            jit.into_iter()
                .enumerate()
                .map(|(i, (d1, d2))| {
                    let (f1, f2) = corners[i % 4];
                    (f1 + d1, f2 + d2)
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn area_is_order_invariant(pts in corner_cloud(), seed in any::<u64>()) {
            use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
            let mut shuffled = pts.clone();
            shuffled.shuffle(&mut StdRng::seed_from_u64(seed));
            let (f1, f2): (Vec<f64>, Vec<f64>) = pts.into_iter().unzip();
            let (g1, g2): (Vec<f64>, Vec<f64>) = shuffled.into_iter().unzip();
            let cfg = VsaCfg::default();
            let a = vowel_space_area(&f1, &f2, &cfg).unwrap();
            let b = vowel_space_area(&g1, &g2, &cfg).unwrap();
            if a.area.is_nan() {
                prop_assert!(b.area.is_nan());
            } else {
                prop_assert!((a.area - b.area).abs() <= 1e-6 * a.area.max(1.0));
            }
        }

        #[test]
        fn nan_iff_fewer_than_three_corners(pts in prop::collection::vec((250.0f64..350.0, 2000.0f64..2300.0), 0..30)) {
            let (f1, f2): (Vec<f64>, Vec<f64>) = pts.into_iter().unzip();
            let r = vowel_space_area(&f1, &f2, &VsaCfg::default()).unwrap();
            prop_assert_eq!(r.area.is_nan(), r.corners.len() < 3);
        }
    }
}
