//! Vowel space density (VSD): hull area of the densely populated region.
//!
//! Model
//! - Normalise each formant by its own median: `(x - med) / med`.
//! - Lay a regular grid over [-1, 1.5]² at `grid_resolution` spacing.
//! - Count points within `resolution` (Euclidean, inclusive) of each cell.
//! - Density = count / max count; drop cells below `density_threshold`.
//! - Convex hull of the surviving cells through the hull port.
//!
//! The hull lives in normalised units, so the area is dimensionless.

use nalgebra::Vector2;

use crate::adapters::{ConvexHullAdapter, ConvexHullResult};
use crate::center::check_lengths;
use crate::cfg::{VsdCfg, AREA_EPS, GRID_MAX, GRID_MIN};
use crate::error::{Outcome, Shortfall, VowelSpaceError};
use crate::stats::median;
use crate::types::zip_points;

/// One grid cell in median-normalised (F1, F2) space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityCell {
    pub f1: f64,
    pub f2: f64,
    pub count: usize,
    /// `count / max_count`, in [0, 1].
    pub density: f64,
}

/// Neighbour counts over the normalised grid.
#[derive(Clone, Debug)]
pub struct DensityGrid {
    pub cells: Vec<DensityCell>,
    pub max_count: usize,
    /// Medians used for normalisation (Hz).
    pub f1_median: f64,
    pub f2_median: f64,
}

impl DensityGrid {
    /// Cells with `density >= threshold`.
    pub fn survivors(&self, threshold: f64) -> impl Iterator<Item = &DensityCell> + '_ {
        self.cells.iter().filter(move |c| c.density >= threshold)
    }
}

/// A VSD value with the grid and hull it came from.
#[derive(Clone, Debug)]
pub struct DensityVowelSpace {
    pub grid: DensityGrid,
    pub hull: ConvexHullResult,
    /// Number of cells that passed the threshold.
    pub surviving_cells: usize,
}

impl DensityVowelSpace {
    /// Enclosed hull area in normalised units.
    #[inline]
    pub fn area(&self) -> f64 {
        self.hull.enclosed_area()
    }
}

fn check_cfg(cfg: &VsdCfg) -> Result<(), VowelSpaceError> {
    if !(cfg.resolution.is_finite() && cfg.resolution > 0.0) {
        return Err(VowelSpaceError::invalid(format!(
            "resolution must be positive, got {}",
            cfg.resolution
        )));
    }
    if !(cfg.grid_resolution.is_finite() && cfg.grid_resolution > 0.0) {
        return Err(VowelSpaceError::invalid(format!(
            "grid resolution must be positive, got {}",
            cfg.grid_resolution
        )));
    }
    if !cfg.density_threshold.is_finite() {
        return Err(VowelSpaceError::invalid("density threshold must be finite"));
    }
    Ok(())
}

/// Grid axis values `GRID_MIN, GRID_MIN + step, …, ≤ GRID_MAX`.
fn axis(step: f64) -> Vec<f64> {
    let n = ((GRID_MAX - GRID_MIN) / step + 1e-9).floor() as usize;
    (0..=n).map(|i| GRID_MIN + i as f64 * step).collect()
}

/// Neighbour-count grid for `f1`/`f2`; `None` if no point is usable.
pub fn density_grid(
    f1: &[f64],
    f2: &[f64],
    cfg: &VsdCfg,
) -> Result<Option<DensityGrid>, VowelSpaceError> {
    check_lengths(f1, f2)?;
    check_cfg(cfg)?;
    let mut pts = zip_points(f1, f2);
    pts.retain(|p| !p.is_missing());
    if pts.is_empty() {
        return Ok(None);
    }
    let f1s: Vec<f64> = pts.iter().map(|p| p.f1).collect();
    let f2s: Vec<f64> = pts.iter().map(|p| p.f2).collect();
    let (m1, m2) = (median(&f1s), median(&f2s));
    // (F2, F1) normalised, sorted by the F2 coordinate for windowed scans.
    let mut norm: Vec<Vector2<f64>> = pts
        .iter()
        .map(|p| Vector2::new((p.f2 - m2) / m2, (p.f1 - m1) / m1))
        .collect();
    norm.sort_by(|a, b| a.x.total_cmp(&b.x));

    let r = cfg.resolution;
    let r2 = r * r;
    let ticks = axis(cfg.grid_resolution);
    let mut cells = Vec::with_capacity(ticks.len() * ticks.len());
    for &gx in &ticks {
        let lo = norm.partition_point(|p| p.x < gx - r);
        let hi = norm.partition_point(|p| p.x <= gx + r);
        let column = &norm[lo..hi];
        for &gy in &ticks {
            let count = column
                .iter()
                .filter(|p| {
                    let dx = p.x - gx;
                    let dy = p.y - gy;
                    dx * dx + dy * dy <= r2
                })
                .count();
            cells.push(DensityCell {
                f1: gy,
                f2: gx,
                count,
                density: 0.0,
            });
        }
    }
    let max_count = cells.iter().map(|c| c.count).max().unwrap_or(0);
    if max_count > 0 {
        for c in &mut cells {
            c.density = c.count as f64 / max_count as f64;
        }
    }
    Ok(Some(DensityGrid {
        cells,
        max_count,
        f1_median: m1,
        f2_median: m2,
    }))
}

/// VSD of `f1`/`f2` through `hull`.
pub fn density_vowel_space<H: ConvexHullAdapter + ?Sized>(
    f1: &[f64],
    f2: &[f64],
    cfg: &VsdCfg,
    hull: &H,
) -> Result<Outcome<DensityVowelSpace>, VowelSpaceError> {
    let Some(grid) = density_grid(f1, f2, cfg)? else {
        return Ok(Outcome::NoResult(Shortfall::InsufficientData {
            needed: 1,
            got: 0,
        }));
    };
    let kept: Vec<Vector2<f64>> = grid
        .survivors(cfg.density_threshold)
        .map(|c| Vector2::new(c.f2, c.f1))
        .collect();
    tracing::debug!(
        cells = grid.cells.len(),
        max_count = grid.max_count,
        surviving = kept.len(),
        "density grid"
    );
    if kept.len() < 3 {
        return Ok(Outcome::NoResult(Shortfall::DegenerateGeometry {
            vertices: kept.len(),
        }));
    }
    let h = hull.hull(&kept)?;
    if h.hull_indices.len() < 3 || h.volume <= AREA_EPS {
        return Ok(Outcome::NoResult(Shortfall::DegenerateGeometry {
            vertices: h.hull_indices.len(),
        }));
    }
    Ok(Outcome::Value(DensityVowelSpace {
        surviving_cells: kept.len(),
        grid,
        hull: h,
    }))
}
