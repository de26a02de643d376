//! Value types of the vowel-space pipeline.
//!
//! - `FormantPoint`: one measured (F1, F2) instant, possibly missing.
//! - `VowelSpaceCenter`: reference point of a cloud (NaN/NaN when undefined).
//! - `PolarVector`: (norm, angle) of a point relative to a center.
//! - `Corner`, `CornerMean`: angular bins and their surviving mean vectors.

use nalgebra::Vector2;
use std::f64::consts::{FRAC_PI_2, PI};

/// One (F1, F2) measurement in Hz.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormantPoint {
    pub f1: f64,
    pub f2: f64,
}

impl FormantPoint {
    #[inline]
    pub fn new(f1: f64, f2: f64) -> Self {
        Self { f1, f2 }
    }

    /// Missing if either formant is NaN/non-finite or not strictly positive.
    #[inline]
    pub fn is_missing(&self) -> bool {
        !(self.f1.is_finite() && self.f2.is_finite() && self.f1 > 0.0 && self.f2 > 0.0)
    }

    /// Plane coordinates `(F2, F1)`.
    #[inline]
    pub fn plane(&self) -> Vector2<f64> {
        Vector2::new(self.f2, self.f1)
    }
}

/// Zip two formant columns into points. Caller checks lengths.
pub(crate) fn zip_points(f1: &[f64], f2: &[f64]) -> Vec<FormantPoint> {
    f1.iter()
        .zip(f2.iter())
        .map(|(&a, &b)| FormantPoint::new(a, b))
        .collect()
}

/// Reference point of a vowel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VowelSpaceCenter {
    pub f1c: f64,
    pub f2c: f64,
}

impl VowelSpaceCenter {
    #[inline]
    pub fn new(f1c: f64, f2c: f64) -> Self {
        Self { f1c, f2c }
    }

    /// Sentinel for "no center" (empty input).
    #[inline]
    pub fn undefined() -> Self {
        Self {
            f1c: f64::NAN,
            f2c: f64::NAN,
        }
    }

    #[inline]
    pub fn is_defined(&self) -> bool {
        self.f1c.is_finite() && self.f2c.is_finite()
    }

    #[inline]
    pub fn plane(&self) -> Vector2<f64> {
        Vector2::new(self.f2c, self.f1c)
    }
}

/// Polar form of a point relative to a center.
///
/// Invariants: `norm >= 0`, `angle ∈ (-π, π]`. Angle 0 points along +F2.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarVector {
    pub norm: f64,
    pub angle: f64,
}

impl PolarVector {
    /// Back to plane coordinates `(F2, F1)` around `center`.
    #[inline]
    pub fn to_plane(&self, center: &VowelSpaceCenter) -> Vector2<f64> {
        Vector2::new(
            self.norm * self.angle.cos() + center.f2c,
            self.norm * self.angle.sin() + center.f1c,
        )
    }
}

/// Angular bin of a vowel vector. Bins are right-closed: `(lo, hi]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Corner {
    /// (-π, -π/2]: low F1, low F2.
    HighBack,
    /// (-π/2, 0]: low F1, high F2.
    HighFront,
    /// (0, π/2]: high F1, high F2.
    LowFront,
    /// (π/2, π]: high F1, low F2.
    LowBack,
}

impl Corner {
    /// Bin iteration order.
    pub const ALL: [Corner; 4] = [
        Corner::HighBack,
        Corner::HighFront,
        Corner::LowFront,
        Corner::LowBack,
    ];

    /// Bin containing `angle`, or `None` for NaN. `-π` itself belongs to no
    /// bin; `vectors` never produces it.
    pub fn of_angle(angle: f64) -> Option<Corner> {
        if !(angle > -PI && angle <= PI) {
            return None;
        }
        Some(if angle <= -FRAC_PI_2 {
            Corner::HighBack
        } else if angle <= 0.0 {
            Corner::HighFront
        } else if angle <= FRAC_PI_2 {
            Corner::LowFront
        } else {
            Corner::LowBack
        })
    }

    /// `(lo, hi]` angular bounds.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Corner::HighBack => (-PI, -FRAC_PI_2),
            Corner::HighFront => (-FRAC_PI_2, 0.0),
            Corner::LowFront => (0.0, FRAC_PI_2),
            Corner::LowBack => (FRAC_PI_2, PI),
        }
    }

    /// Snake-case identifier used in serialized output.
    pub fn name(self) -> &'static str {
        match self {
            Corner::HighBack => "high_back",
            Corner::HighFront => "high_front",
            Corner::LowFront => "low_front",
            Corner::LowBack => "low_back",
        }
    }

    /// Conventional corner vowel.
    pub fn label(self) -> &'static str {
        match self {
            Corner::HighBack => "u",
            Corner::HighFront => "i",
            Corner::LowFront => "æ",
            Corner::LowBack => "ɑ",
        }
    }
}

/// Mean vector of one surviving corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerMean {
    pub corner: Corner,
    /// Number of points in the bin.
    pub support: usize,
    /// (mean norm, mean angle) of the bin.
    pub mean: PolarVector,
    /// `mean` projected back to `(F2, F1)`.
    pub point: Vector2<f64>,
}
