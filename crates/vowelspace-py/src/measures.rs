//! Measure bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{map_err, parse_method, resolve_center};
use pyo3::prelude::*;
use vowelspace::api::{
    self, CvsaCfg, EmGmm, MonotoneChainHull, VowelSpaceCenter, VsaCfg, VsdCfg,
};

/// Vowel-space center as `(f1c, f2c)`; `(nan, nan)` for an empty cloud.
#[pyfunction]
#[pyo3(signature = (f1, f2, method = "wcentroid", drop_missing = true))]
pub fn vowel_center(
    f1: Vec<f64>,
    f2: Vec<f64>,
    method: &str,
    drop_missing: bool,
) -> PyResult<(f64, f64)> {
    let c = api::vowel_space_center(&f1, &f2, parse_method(method)?, drop_missing)
        .map_err(map_err)?;
    Ok((c.f1c, c.f2c))
}

/// Distance of every row from the center (`nan` for missing rows).
#[pyfunction]
#[pyo3(signature = (f1, f2, center = None, method = "wcentroid"))]
pub fn vowel_norms(
    f1: Vec<f64>,
    f2: Vec<f64>,
    center: Option<(f64, f64)>,
    method: &str,
) -> PyResult<Vec<f64>> {
    let c = resolve_center(&f1, &f2, center, method)?;
    api::vowel_norms(&f1, &f2, &c).map_err(map_err)
}

/// Angle `atan2(ΔF1, ΔF2)` of every row, in `(-π, π]` (`nan` for missing rows).
#[pyfunction]
#[pyo3(signature = (f1, f2, center = None, method = "wcentroid"))]
pub fn vowel_angles(
    f1: Vec<f64>,
    f2: Vec<f64>,
    center: Option<(f64, f64)>,
    method: &str,
) -> PyResult<Vec<f64>> {
    let c = resolve_center(&f1, &f2, center, method)?;
    api::vowel_angles(&f1, &f2, &c).map_err(map_err)
}

#[pyfunction]
#[pyo3(signature = (f1, f2, method = "wcentroid", center = None, min_corner_support = 3))]
pub fn vowel_space_area(
    f1: Vec<f64>,
    f2: Vec<f64>,
    method: &str,
    center: Option<(f64, f64)>,
    min_corner_support: usize,
) -> PyResult<f64> {
    let cfg = VsaCfg {
        method: parse_method(method)?,
        center: center.map(|(a, b)| VowelSpaceCenter::new(a, b)),
        min_corner_support,
    };
    Ok(api::vowel_space_area(&f1, &f2, &cfg).map_err(map_err)?.area)
}

/// Density-filtered hull area, in median-normalised units.
#[pyfunction]
#[pyo3(signature = (f1, f2, resolution = 0.05, grid_resolution = 0.01, density_threshold = 0.25))]
pub fn vowel_space_density(
    f1: Vec<f64>,
    f2: Vec<f64>,
    resolution: f64,
    grid_resolution: f64,
    density_threshold: f64,
) -> PyResult<f64> {
    let cfg = VsdCfg {
        resolution,
        grid_resolution,
        density_threshold,
    };
    let out = api::density_vowel_space(&f1, &f2, &cfg, &MonotoneChainHull).map_err(map_err)?;
    Ok(out.value().map_or(f64::NAN, |d| d.area()))
}

/// Mixture-filtered hull area. Pass `seed` for reproducible fits.
#[pyfunction]
#[pyo3(signature = (
    f1,
    f2,
    num_components = 5,
    likelihood_threshold = 0.3,
    center = false,
    scale = false,
    seed = None
))]
pub fn continuous_vowel_space(
    f1: Vec<f64>,
    f2: Vec<f64>,
    num_components: usize,
    likelihood_threshold: f64,
    center: bool,
    scale: bool,
    seed: Option<u64>,
) -> PyResult<f64> {
    let cfg = CvsaCfg {
        num_components,
        likelihood_threshold,
        center,
        scale,
    };
    let em = EmGmm {
        seed,
        ..EmGmm::default()
    };
    let out = api::continuous_vowel_space(&f1, &f2, &cfg, &em, &MonotoneChainHull)
        .map_err(map_err)?;
    Ok(out.value().map_or(f64::NAN, |c| c.area()))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(vowel_center, m)?)?;
    m.add_function(wrap_pyfunction!(vowel_norms, m)?)?;
    m.add_function(wrap_pyfunction!(vowel_angles, m)?)?;
    m.add_function(wrap_pyfunction!(vowel_space_area, m)?)?;
    m.add_function(wrap_pyfunction!(vowel_space_density, m)?)?;
    m.add_function(wrap_pyfunction!(continuous_vowel_space, m)?)?;
    Ok(())
}
