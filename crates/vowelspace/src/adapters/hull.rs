use nalgebra::Vector2;

use crate::area::shoelace;
use crate::cfg::DEDUP_EPS;
use crate::error::VowelSpaceError;

/// Convex hull of a planar point set.
///
/// 2D measures follow the qhull convention: `area` is the boundary length,
/// `volume` the enclosed area.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexHullResult {
    /// Input points, unchanged.
    pub points: Vec<Vector2<f64>>,
    /// Indices into `points` of the hull vertices, counterclockwise.
    pub hull_indices: Vec<usize>,
    pub area: f64,
    pub volume: f64,
}

impl ConvexHullResult {
    /// Enclosed area (the VSD / cVSA value).
    #[inline]
    pub fn enclosed_area(&self) -> f64 {
        self.volume
    }

    /// Hull edges as index pairs into `points`.
    pub fn edges(&self) -> Vec<[usize; 2]> {
        let n = self.hull_indices.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|k| [self.hull_indices[k], self.hull_indices[(k + 1) % n]])
            .collect()
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.hull_indices.iter().map(move |&i| self.points[i])
    }
}

/// Port: any convex-hull implementation.
///
/// Contract: deterministic area/volume for a fixed point set (vertex order
/// may differ between implementations); fewer than 3 hull vertices is a
/// valid answer, not an error.
pub trait ConvexHullAdapter {
    fn hull(&self, points: &[Vector2<f64>]) -> Result<ConvexHullResult, VowelSpaceError>;
}

/// Andrew's monotone chain (O(n log n), collinear points dropped).
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotoneChainHull;

impl ConvexHullAdapter for MonotoneChainHull {
    fn hull(&self, points: &[Vector2<f64>]) -> Result<ConvexHullResult, VowelSpaceError> {
        if let Some(i) = points.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(VowelSpaceError::external(
                "convex hull",
                format!("point {i} has a non-finite coordinate"),
            ));
        }
        let idx = monotone_chain(points);
        let verts: Vec<Vector2<f64>> = idx.iter().map(|&i| points[i]).collect();
        let (area, volume) = if verts.len() < 3 {
            // Segment or point: boundary traversed both ways, nothing enclosed.
            let len = if verts.len() == 2 {
                2.0 * (verts[1] - verts[0]).norm()
            } else {
                0.0
            };
            (len, 0.0)
        } else {
            let perimeter: f64 = (0..verts.len())
                .map(|k| (verts[(k + 1) % verts.len()] - verts[k]).norm())
                .sum();
            (perimeter, shoelace(&verts).abs())
        };
        Ok(ConvexHullResult {
            points: points.to_vec(),
            hull_indices: idx,
            area,
            volume,
        })
    }
}

fn monotone_chain(points: &[Vector2<f64>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| {
        let (pa, pb) = (points[a], points[b]);
        pa.x.total_cmp(&pb.x).then(pa.y.total_cmp(&pb.y))
    });
    order.dedup_by(|a, b| (points[*a] - points[*b]).norm() < DEDUP_EPS);
    if order.len() < 3 {
        return order;
    }
    let turn = |stack: &[usize], r: usize| {
        let p = points[stack[stack.len() - 2]];
        let q = points[stack[stack.len() - 1]];
        cross(p, q, points[r])
    };
    let mut lower: Vec<usize> = Vec::with_capacity(order.len());
    for &i in &order {
        while lower.len() >= 2 && turn(&lower, i) <= 0.0 {
            lower.pop();
        }
        lower.push(i);
    }
    let mut upper: Vec<usize> = Vec::with_capacity(order.len());
    for &i in order.iter().rev() {
        while upper.len() >= 2 && turn(&upper, i) <= 0.0 {
            upper.pop();
        }
        upper.push(i);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_with_interior_points() {
        let pts = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(0.5, 0.5),
            Vector2::new(2.0, 0.0),
            Vector2::new(2.0, 2.0),
            Vector2::new(1.0, 0.0), // collinear on an edge
            Vector2::new(0.0, 2.0),
            Vector2::new(1.2, 0.7),
        ];
        let h = MonotoneChainHull.hull(&pts).unwrap();
        assert_eq!(h.hull_indices.len(), 4);
        assert!((h.volume - 4.0).abs() < 1e-12);
        assert!((h.area - 8.0).abs() < 1e-12);
        assert_eq!(h.enclosed_area(), h.volume);
        assert_eq!(h.edges().len(), 4);
        // CCW orientation
        let verts: Vec<_> = h.vertices().collect();
        assert!(shoelace(&verts) > 0.0);
    }

    #[test]
    fn degenerate_inputs_are_not_errors() {
        let line = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(2.0, 2.0),
        ];
        let h = MonotoneChainHull.hull(&line).unwrap();
        assert!(h.hull_indices.len() < 3);
        assert_eq!(h.volume, 0.0);
        let h = MonotoneChainHull.hull(&[]).unwrap();
        assert!(h.hull_indices.is_empty());
        let dup = vec![Vector2::new(1.0, 1.0); 5];
        assert_eq!(MonotoneChainHull.hull(&dup).unwrap().hull_indices.len(), 1);
    }

    #[test]
    fn non_finite_point_is_external_failure() {
        let pts = vec![Vector2::new(0.0, f64::NAN)];
        assert!(matches!(
            MonotoneChainHull.hull(&pts),
            Err(VowelSpaceError::ExternalComputation { .. })
        ));
    }

    #[test]
    fn area_independent_of_input_order() {
        let mut pts: Vec<Vector2<f64>> = (0..30)
            .map(|k| {
                let th = k as f64 * 0.7;
                Vector2::new(th.cos() * (1.0 + 0.1 * (k % 3) as f64), th.sin())
            })
            .collect();
        let a = MonotoneChainHull.hull(&pts).unwrap().volume;
        pts.reverse();
        let b = MonotoneChainHull.hull(&pts).unwrap().volume;
        assert!((a - b).abs() < 1e-12);
    }
}
