//! Vowel-space geometry in the (F1, F2) formant plane.
//!
//! Purpose
//! - Turn a cloud of formant measurements into scalar descriptors of a
//!   speaker's vowel space: VSA (corner polygon area), VSD (density-filtered
//!   hull area) and cVSA (mixture-filtered hull area).
//!
//! Pipeline
//! - raw (F1, F2) → `center` → `vectors` → `corners` → `area` ⇒ VSA.
//! - raw (F1, F2) → `density` → hull port ⇒ VSD.
//! - raw (F1, F2) → `mixture` (mixture port) → hull port ⇒ cVSA.
//!
//! Conventions
//! - Plane coordinates are `(x, y) = (F2, F1)` wherever a `Vector2` appears.
//! - A formant value is missing if it is NaN/non-finite or ≤ 0.
//! - Every call is stateless: inputs are borrowed slices, results are fresh values.
//! - Convex hull and Gaussian-mixture fitting are ports (`adapters`); the
//!   default implementations live there, outside the geometry core.

pub mod adapters;
pub mod api;
pub mod area;
pub mod center;
pub mod cfg;
pub mod corners;
pub mod density;
pub mod error;
pub mod ingest;
pub mod measure;
pub mod mixture;
mod stats;
pub mod types;
pub mod vectors;

#[cfg(test)]
mod testutil;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::adapters::{
        ConvexHullAdapter, ConvexHullResult, EmGmm, GmmAdapter, GmmFit, MonotoneChainHull,
    };
    pub use crate::area::{polygon_area, vowel_space_area, VowelSpaceArea};
    pub use crate::center::{vowel_space_center, CenterMethod};
    pub use crate::cfg::{CvsaCfg, VsaCfg, VsdCfg};
    pub use crate::corners::{classify_corners, CornerSupportPolicy, InnerBandPolicy};
    pub use crate::density::{density_vowel_space, DensityVowelSpace};
    pub use crate::error::{Outcome, Shortfall, VowelSpaceError};
    pub use crate::ingest::{sanitize, Formants};
    pub use crate::measure::{measure, VowelSpaceMeasure, VowelSpaceMethod};
    pub use crate::mixture::{continuous_vowel_space, ContinuousVowelSpace};
    pub use crate::types::{Corner, CornerMean, FormantPoint, PolarVector, VowelSpaceCenter};
    pub use crate::vectors::{vowel_angles, vowel_norms, vowel_vectors};
}
