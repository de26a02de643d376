//! Flat surface of the public operations.
//!
//! Names follow the operations callers ask for (center, vectors, VSA, VSD,
//! cVSA); the CLI and the Python bindings go through here.

pub use crate::adapters::{
    ConvexHullAdapter, ConvexHullResult, EmGmm, GmmAdapter, GmmFit, MonotoneChainHull,
};
pub use crate::area::{polygon_area, vowel_space_area, vowel_space_area_with_policy, VowelSpaceArea};
pub use crate::center::{vowel_space_center, CenterMethod};
pub use crate::cfg::{CvsaCfg, VsaCfg, VsdCfg};
pub use crate::corners::{classify_corners, AcceptAll, CornerSupportPolicy, InnerBandPolicy};
pub use crate::density::{
    density_grid, density_vowel_space, DensityCell, DensityGrid, DensityVowelSpace,
};
pub use crate::error::{Outcome, Shortfall, VowelSpaceError};
pub use crate::ingest::{sanitize, Formants};
pub use crate::measure::{measure, VowelSpaceMeasure, VowelSpaceMethod};
pub use crate::mixture::{continuous_vowel_space, retained_indices, ContinuousVowelSpace};
pub use crate::types::{Corner, CornerMean, FormantPoint, PolarVector, VowelSpaceCenter};
pub use crate::vectors::{vowel_angles, vowel_norms, vowel_vectors};
