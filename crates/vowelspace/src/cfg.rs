//! Configuration for the three measures, plus internal tolerances.
//!
//! Policy
//! - Method parameters are plain `Copy` structs with `Default` values that
//!   match the published reference settings.
//! - Tolerances are fixed constants; adjust here, not at call sites.

use crate::center::CenterMethod;
use crate::types::VowelSpaceCenter;

/// Points closer than this (in plane units) are treated as identical by the hull.
pub(crate) const DEDUP_EPS: f64 = 1e-12;
/// Twice-area below this is a zero-area (collinear) hull.
pub(crate) const AREA_EPS: f64 = 1e-18;
/// Lower edge of the normalised density grid.
pub(crate) const GRID_MIN: f64 = -1.0;
/// Upper edge of the normalised density grid.
pub(crate) const GRID_MAX: f64 = 1.5;
/// Half-width of the inner CDF band accepted by `InnerBandPolicy`.
pub(crate) const INNER_BAND: f64 = 0.25;

/// Corner-polygon area (VSA).
#[derive(Clone, Copy, Debug)]
pub struct VsaCfg {
    pub method: CenterMethod,
    /// Overrides the estimated center when set.
    pub center: Option<VowelSpaceCenter>,
    /// A corner survives only with strictly more points than this.
    pub min_corner_support: usize,
}

impl Default for VsaCfg {
    fn default() -> Self {
        Self {
            method: CenterMethod::WCentroid,
            center: None,
            min_corner_support: 3,
        }
    }
}

/// Density-filtered hull (VSD).
#[derive(Clone, Copy, Debug)]
pub struct VsdCfg {
    /// Neighbour radius in median-normalised units.
    pub resolution: f64,
    /// Grid spacing in median-normalised units.
    pub grid_resolution: f64,
    /// Cells with normalised density below this are discarded.
    pub density_threshold: f64,
}

impl Default for VsdCfg {
    fn default() -> Self {
        Self {
            resolution: 0.05,
            grid_resolution: 0.01,
            density_threshold: 0.25,
        }
    }
}

/// Mixture-filtered hull (cVSA).
#[derive(Clone, Copy, Debug)]
pub struct CvsaCfg {
    pub num_components: usize,
    pub likelihood_threshold: f64,
    /// Subtract column means before fitting.
    pub center: bool,
    /// Divide columns by their sd (or root-mean-square if not centred).
    pub scale: bool,
}

impl Default for CvsaCfg {
    fn default() -> Self {
        Self {
            num_components: 5,
            likelihood_threshold: 0.3,
            center: false,
            scale: false,
        }
    }
}
