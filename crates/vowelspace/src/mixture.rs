//! Continuous vowel space area (cVSA): hull area after mixture-likelihood filtering.
//!
//! Model
//! - Optionally centre and/or scale the (F2, F1) cloud column-wise
//!   (scaling without centring divides by the root-mean-square).
//! - Fit a `num_components` Gaussian mixture through the GMM port.
//! - Keep point i iff `exp(ll_i) > likelihood_threshold · exp(ll_i)`.
//! - Convex hull of the kept points through the hull port.
//!
//! Note on the filter: the comparison is made against the point's own
//! likelihood, so for any positive likelihood it reduces to
//! `1 > likelihood_threshold` and keeps all or nothing. It is kept verbatim
//! for comparability with published cVSA values; points whose likelihood
//! underflows to 0 are the only ones it can drop selectively.

use nalgebra::Vector2;

use crate::adapters::{ConvexHullAdapter, ConvexHullResult, GmmAdapter, GmmFit};
use crate::center::check_lengths;
use crate::cfg::{CvsaCfg, AREA_EPS};
use crate::error::{Outcome, Shortfall, VowelSpaceError};
use crate::stats::{mean, sample_sd};
use crate::types::zip_points;

/// A cVSA value with the fit and hull it came from.
#[derive(Clone, Debug)]
pub struct ContinuousVowelSpace {
    pub fit: GmmFit,
    pub hull: ConvexHullResult,
    /// Indices (into the non-missing input points) that passed the filter.
    pub retained: Vec<usize>,
}

impl ContinuousVowelSpace {
    /// Enclosed hull area, in Hz² unless the cloud was scaled.
    #[inline]
    pub fn area(&self) -> f64 {
        self.hull.enclosed_area()
    }
}

/// Column-wise centring/scaling with R `scale()` semantics.
pub(crate) fn preprocess(points: &[Vector2<f64>], center: bool, scale: bool) -> Vec<Vector2<f64>> {
    if !(center || scale) {
        return points.to_vec();
    }
    let n = points.len();
    let mut shift = Vector2::<f64>::zeros();
    let mut div = Vector2::new(1.0, 1.0);
    for axis in 0..2 {
        let col: Vec<f64> = points.iter().map(|p| p[axis]).collect();
        if center {
            shift[axis] = mean(&col);
        }
        if scale {
            div[axis] = if center {
                sample_sd(&col)
            } else {
                (col.iter().map(|x| x * x).sum::<f64>() / (n as f64 - 1.0)).sqrt()
            };
        }
    }
    points
        .iter()
        .map(|p| (p - shift).component_div(&div))
        .collect()
}

/// Indices kept by the likelihood filter.
pub fn retained_indices(log_likelihood: &[f64], likelihood_threshold: f64) -> Vec<usize> {
    log_likelihood
        .iter()
        .enumerate()
        .filter(|(_, ll)| {
            let l = ll.exp();
            l > likelihood_threshold * l
        })
        .map(|(i, _)| i)
        .collect()
}

fn check_cfg(cfg: &CvsaCfg) -> Result<(), VowelSpaceError> {
    if cfg.num_components == 0 {
        return Err(VowelSpaceError::invalid("number of mixture components must be ≥ 1"));
    }
    if !cfg.likelihood_threshold.is_finite() {
        return Err(VowelSpaceError::invalid("likelihood threshold must be finite"));
    }
    Ok(())
}

/// cVSA of `f1`/`f2` through the given mixture and hull ports.
pub fn continuous_vowel_space<G, H>(
    f1: &[f64],
    f2: &[f64],
    cfg: &CvsaCfg,
    gmm: &G,
    hull: &H,
) -> Result<Outcome<ContinuousVowelSpace>, VowelSpaceError>
where
    G: GmmAdapter + ?Sized,
    H: ConvexHullAdapter + ?Sized,
{
    check_lengths(f1, f2)?;
    check_cfg(cfg)?;
    let mut pts = zip_points(f1, f2);
    pts.retain(|p| !p.is_missing());
    let raw: Vec<Vector2<f64>> = pts.iter().map(|p| p.plane()).collect();
    let prepared: Vec<Vector2<f64>> = preprocess(&raw, cfg.center, cfg.scale)
        .into_iter()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .collect();
    let needed = cfg.num_components.max(3);
    if prepared.len() < needed {
        return Ok(Outcome::NoResult(Shortfall::InsufficientData {
            needed,
            got: prepared.len(),
        }));
    }

    let fit = gmm.fit(&prepared, cfg.num_components)?;
    if fit.log_likelihood.len() != prepared.len() {
        return Err(VowelSpaceError::external(
            "gmm",
            format!(
                "returned {} log-likelihoods for {} points",
                fit.log_likelihood.len(),
                prepared.len()
            ),
        ));
    }
    let retained: Vec<usize> = retained_indices(&fit.log_likelihood, cfg.likelihood_threshold)
        .into_iter()
        .filter(|&i| prepared[i].x.is_finite() && prepared[i].y.is_finite())
        .collect();
    tracing::debug!(
        points = prepared.len(),
        retained = retained.len(),
        "mixture filter"
    );
    if retained.len() < 3 {
        return Ok(Outcome::NoResult(Shortfall::DegenerateGeometry {
            vertices: retained.len(),
        }));
    }
    let kept: Vec<Vector2<f64>> = retained.iter().map(|&i| prepared[i]).collect();
    let h = hull.hull(&kept)?;
    if h.hull_indices.len() < 3 || h.volume <= AREA_EPS {
        return Ok(Outcome::NoResult(Shortfall::DegenerateGeometry {
            vertices: h.hull_indices.len(),
        }));
    }
    Ok(Outcome::Value(ContinuousVowelSpace {
        fit,
        hull: h,
        retained,
    }))
}
