//! Polar decomposition of formant points around a center.
//!
//! `angle = atan2(ΔF1, ΔF2)`: angle 0 lies along +F2 (front), +π/2 along +F1
//! (open). Missing points stay index-aligned as `None`; filtering happens in
//! `corners`.

use std::f64::consts::PI;

use crate::center::check_lengths;
use crate::error::VowelSpaceError;
use crate::types::{zip_points, FormantPoint, PolarVector, VowelSpaceCenter};

/// Polar form of `p` around `center`, `None` if `p` is missing or the center undefined.
#[inline]
pub fn polar_of(p: FormantPoint, center: &VowelSpaceCenter) -> Option<PolarVector> {
    if p.is_missing() || !center.is_defined() {
        return None;
    }
    let d1 = p.f1 - center.f1c;
    let d2 = p.f2 - center.f2c;
    let mut angle = d1.atan2(d2);
    // atan2(-0.0, x<0) yields -π; fold onto the closed end of (-π, π].
    if angle <= -PI {
        angle = PI;
    }
    Some(PolarVector {
        norm: d1.hypot(d2),
        angle,
    })
}

/// Index-aligned polar vectors of every input point.
pub fn vowel_vectors(
    f1: &[f64],
    f2: &[f64],
    center: &VowelSpaceCenter,
) -> Result<Vec<Option<PolarVector>>, VowelSpaceError> {
    check_lengths(f1, f2)?;
    Ok(zip_points(f1, f2)
        .into_iter()
        .map(|p| polar_of(p, center))
        .collect())
}

/// Distances from the center; NaN for missing points.
pub fn vowel_norms(
    f1: &[f64],
    f2: &[f64],
    center: &VowelSpaceCenter,
) -> Result<Vec<f64>, VowelSpaceError> {
    Ok(vowel_vectors(f1, f2, center)?
        .into_iter()
        .map(|v| v.map_or(f64::NAN, |v| v.norm))
        .collect())
}

/// Angles in (-π, π]; NaN for missing points.
pub fn vowel_angles(
    f1: &[f64],
    f2: &[f64],
    center: &VowelSpaceCenter,
) -> Result<Vec<f64>, VowelSpaceError> {
    Ok(vowel_vectors(f1, f2, center)?
        .into_iter()
        .map(|v| v.map_or(f64::NAN, |v| v.angle))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn axis_directions() {
        let c = VowelSpaceCenter::new(500.0, 1500.0);
        let f1 = [500.0, 700.0, 500.0, 300.0];
        let f2 = [1800.0, 1500.0, 1100.0, 1500.0];
        let v = vowel_vectors(&f1, &f2, &c).unwrap();
        let v: Vec<PolarVector> = v.into_iter().map(Option::unwrap).collect();
        assert!(v[0].angle.abs() < 1e-12 && (v[0].norm - 300.0).abs() < 1e-12);
        assert!((v[1].angle - FRAC_PI_2).abs() < 1e-12 && (v[1].norm - 200.0).abs() < 1e-12);
        assert!((v[2].angle - PI).abs() < 1e-12);
        assert!((v[3].angle + FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn minus_pi_is_folded() {
        let c = VowelSpaceCenter::new(500.0, 1500.0);
        let v = polar_of(FormantPoint::new(500.0, 1000.0), &c).unwrap();
        assert_eq!(v.angle, PI);
        let back = v.to_plane(&c);
        assert!((back.x - 1000.0).abs() < 1e-9 && (back.y - 500.0).abs() < 1e-9);
    }

    #[test]
    fn missing_stays_aligned() {
        let c = VowelSpaceCenter::new(450.0, 1550.0);
        let norms = vowel_norms(&[300.0, f64::NAN, 600.0], &[2200.0, 1000.0, 1000.0], &c).unwrap();
        assert_eq!(norms.len(), 3);
        assert!(norms[1].is_nan());
        assert!((norms[0] - 150.0f64.hypot(650.0)).abs() < 1e-9);
        let angles = vowel_angles(&[300.0], &[2200.0], &VowelSpaceCenter::undefined()).unwrap();
        assert!(angles[0].is_nan());
    }

    proptest! {
        #[test]
        fn norm_and_angle_ranges(
            pts in prop::collection::vec((1.0f64..3000.0, 1.0f64..4000.0), 0..50),
            f1c in 1.0f64..3000.0,
            f2c in 1.0f64..4000.0,
        ) {
            let (f1, f2): (Vec<f64>, Vec<f64>) = pts.into_iter().unzip();
            let c = VowelSpaceCenter::new(f1c, f2c);
            for v in vowel_vectors(&f1, &f2, &c).unwrap().into_iter().flatten() {
                prop_assert!(v.norm >= 0.0);
                prop_assert!(v.angle > -PI && v.angle <= PI);
            }
        }
    }
}
