//! Vowel-space center estimation.
//!
//! Three estimators share one rule: f1c is the plain F1 mean. They differ in
//! how much of the F2 axis is trusted:
//! - `Centroid`: plain F2 mean.
//! - `TwoMeans`: unweighted average of the F2 means above and below f1c.
//! - `WCentroid`: F2 mean of the points above the F1 center (F1 < f1c), i.e.
//!   the high vowels, which span the F2 range more evenly.
//!
//! All estimators are order-invariant; empty input gives `VowelSpaceCenter::undefined()`.

use std::fmt;
use std::str::FromStr;

use crate::error::VowelSpaceError;
use crate::stats::{mean, mean_where};
use crate::types::{zip_points, FormantPoint, VowelSpaceCenter};

/// Center estimator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CenterMethod {
    Centroid,
    TwoMeans,
    #[default]
    WCentroid,
}

impl CenterMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            CenterMethod::Centroid => "centroid",
            CenterMethod::TwoMeans => "twomeans",
            CenterMethod::WCentroid => "wcentroid",
        }
    }
}

impl fmt::Display for CenterMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CenterMethod {
    type Err = VowelSpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "centroid" => Ok(CenterMethod::Centroid),
            "twomeans" => Ok(CenterMethod::TwoMeans),
            "wcentroid" => Ok(CenterMethod::WCentroid),
            other => Err(VowelSpaceError::invalid(format!(
                "unknown center method {other:?} (expected centroid, twomeans or wcentroid)"
            ))),
        }
    }
}

/// Reject columns of different length.
pub(crate) fn check_lengths(f1: &[f64], f2: &[f64]) -> Result<(), VowelSpaceError> {
    if f1.len() != f2.len() {
        return Err(VowelSpaceError::invalid(format!(
            "F1 and F2 differ in length ({} vs {})",
            f1.len(),
            f2.len()
        )));
    }
    Ok(())
}

/// Center of the vowel space spanned by `f1`/`f2`.
///
/// With `drop_missing = false` missing entries stay in the sums, so any NaN
/// propagates into the center.
pub fn vowel_space_center(
    f1: &[f64],
    f2: &[f64],
    method: CenterMethod,
    drop_missing: bool,
) -> Result<VowelSpaceCenter, VowelSpaceError> {
    check_lengths(f1, f2)?;
    let mut pts = zip_points(f1, f2);
    if drop_missing {
        pts.retain(|p| !p.is_missing());
    }
    Ok(center_of_points(&pts, method))
}

/// Center of already-zipped points (no missing-value handling).
pub(crate) fn center_of_points(pts: &[FormantPoint], method: CenterMethod) -> VowelSpaceCenter {
    if pts.is_empty() {
        return VowelSpaceCenter::undefined();
    }
    let f1s: Vec<f64> = pts.iter().map(|p| p.f1).collect();
    let f2s: Vec<f64> = pts.iter().map(|p| p.f2).collect();
    let f1c = mean(&f1s);
    let f2_mean = mean(&f2s);
    let f2c = match method {
        CenterMethod::Centroid => f2_mean,
        CenterMethod::TwoMeans => {
            let hi = mean_where(pts.iter().filter(|p| p.f1 > f1c).map(|p| p.f2));
            let lo = mean_where(pts.iter().filter(|p| p.f1 < f1c).map(|p| p.f2));
            match (hi, lo) {
                (Some(h), Some(l)) => 0.5 * (h + l),
                (Some(one), None) | (None, Some(one)) => one,
                (None, None) => f2_mean,
            }
        }
        CenterMethod::WCentroid => {
            mean_where(pts.iter().filter(|p| p.f1 < f1c).map(|p| p.f2)).unwrap_or(f2_mean)
        }
    };
    VowelSpaceCenter::new(f1c, f2c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const F1: [f64; 4] = [300.0, 600.0, 600.0, 300.0];
    const F2: [f64; 4] = [2200.0, 1700.0, 1000.0, 900.0];

    #[test]
    fn corner_vowels_all_methods() {
        let c = vowel_space_center(&F1, &F2, CenterMethod::Centroid, true).unwrap();
        assert_eq!(c, VowelSpaceCenter::new(450.0, 1450.0));
        // above: [1700, 1000] -> 1350; below: [2200, 900] -> 1550
        let t = vowel_space_center(&F1, &F2, CenterMethod::TwoMeans, true).unwrap();
        assert_eq!(t, VowelSpaceCenter::new(450.0, 1450.0));
        let w = vowel_space_center(&F1, &F2, CenterMethod::WCentroid, true).unwrap();
        assert_eq!(w, VowelSpaceCenter::new(450.0, 1550.0));
    }

    #[test]
    fn twomeans_is_unweighted() {
        // above f1c: one point (F2 3000); below: three points (F2 1000)
        let f1 = [800.0, 300.0, 300.0, 300.0];
        let f2 = [3000.0, 1000.0, 1000.0, 1000.0];
        let c = vowel_space_center(&f1, &f2, CenterMethod::TwoMeans, true).unwrap();
        assert_eq!(c.f1c, 425.0);
        assert_eq!(c.f2c, 2000.0);
    }

    #[test]
    fn twomeans_skips_points_on_the_f1_center() {
        // f1c = 450; the middle point is on neither side, so its F2 is ignored.
        let f1 = [300.0, 450.0, 600.0];
        let f2 = [2000.0, 5000.0, 1000.0];
        let c = vowel_space_center(&f1, &f2, CenterMethod::TwoMeans, true).unwrap();
        assert_eq!(c.f1c, 450.0);
        assert_eq!(c.f2c, 1500.0);
        // wcentroid uses the strict side too.
        let w = vowel_space_center(&f1, &f2, CenterMethod::WCentroid, true).unwrap();
        assert_eq!(w.f2c, 2000.0);
    }

    #[test]
    fn wcentroid_equal_f1_falls_back_to_mean() {
        let f1 = [500.0; 3];
        let f2 = [1000.0, 1500.0, 2000.0];
        let c = vowel_space_center(&f1, &f2, CenterMethod::WCentroid, true).unwrap();
        assert_eq!(c, VowelSpaceCenter::new(500.0, 1500.0));
        let t = vowel_space_center(&f1, &f2, CenterMethod::TwoMeans, true).unwrap();
        assert_eq!(t, VowelSpaceCenter::new(500.0, 1500.0));
    }

    #[test]
    fn missing_values() {
        let f1 = [300.0, f64::NAN, 600.0, 0.0];
        let f2 = [2000.0, 1500.0, 1000.0, 1200.0];
        let c = vowel_space_center(&f1, &f2, CenterMethod::Centroid, true).unwrap();
        assert_eq!(c, VowelSpaceCenter::new(450.0, 1500.0));
        let kept = vowel_space_center(&f1, &f2, CenterMethod::Centroid, false).unwrap();
        assert!(kept.f1c.is_nan());
    }

    #[test]
    fn empty_and_all_missing_are_undefined() {
        let c = vowel_space_center(&[], &[], CenterMethod::WCentroid, true).unwrap();
        assert!(!c.is_defined());
        let c = vowel_space_center(&[f64::NAN], &[1000.0], CenterMethod::Centroid, true).unwrap();
        assert!(!c.is_defined());
    }

    #[test]
    fn unequal_lengths_rejected() {
        assert!(matches!(
            vowel_space_center(&[1.0], &[], CenterMethod::Centroid, true),
            Err(VowelSpaceError::InvalidInput { .. })
        ));
    }

    #[test]
    fn parse_method_names() {
        assert_eq!("twomeans".parse::<CenterMethod>().unwrap(), CenterMethod::TwoMeans);
        assert_eq!(CenterMethod::default().to_string(), "wcentroid");
        assert!("median".parse::<CenterMethod>().is_err());
    }

    fn cloud() -> impl Strategy<Value = Vec<(f64, f64)>> {
        prop::collection::vec((200.0f64..900.0, 700.0f64..2600.0), 1..40)
    }

    proptest! {
        #[test]
        fn centers_are_order_invariant(pts in cloud(), seed in any::<u64>()) {
            use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
            let mut shuffled = pts.clone();
            shuffled.shuffle(&mut StdRng::seed_from_u64(seed));
            let (f1, f2): (Vec<f64>, Vec<f64>) = pts.into_iter().unzip();
            let (g1, g2): (Vec<f64>, Vec<f64>) = shuffled.into_iter().unzip();
            for m in [CenterMethod::Centroid, CenterMethod::TwoMeans, CenterMethod::WCentroid] {
                let a = vowel_space_center(&f1, &f2, m, true).unwrap();
                let b = vowel_space_center(&g1, &g2, m, true).unwrap();
                prop_assert!((a.f1c - b.f1c).abs() < 1e-6);
                prop_assert!((a.f2c - b.f2c).abs() < 1e-6);
            }
        }

        #[test]
        fn wcentroid_never_nan_on_valid_input(f1v in 200.0f64..900.0, f2 in prop::collection::vec(700.0f64..2600.0, 1..20)) {
            let f1 = vec![f1v; f2.len()];
            let c = vowel_space_center(&f1, &f2, CenterMethod::WCentroid, true).unwrap();
            prop_assert!(c.is_defined());
        }
    }
}
