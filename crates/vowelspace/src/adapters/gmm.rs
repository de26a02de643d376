use linfa::traits::Fit;
use linfa::{DatasetBase, ParamGuard};
use linfa_clustering::GaussianMixtureModel;
use nalgebra::{Matrix2, Vector2};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::TAU;

use crate::error::VowelSpaceError;

/// A fitted 2D Gaussian mixture plus per-point log-likelihoods.
#[derive(Clone, Debug)]
pub struct GmmFit {
    /// `ln p(x_i)` under the fitted mixture, index-aligned with the input.
    pub log_likelihood: Vec<f64>,
    pub weights: Vec<f64>,
    pub means: Vec<Vector2<f64>>,
    pub covariances: Vec<Matrix2<f64>>,
}

impl GmmFit {
    /// Sum of the per-point log-likelihoods.
    pub fn total_log_likelihood(&self) -> f64 {
        self.log_likelihood.iter().sum()
    }
}

/// Port: any Gaussian-mixture fitter.
///
/// Contract: returns one log-likelihood per input point. Fits may differ
/// between runs when initialisation is random; failure to converge must be
/// an `Err(ExternalComputation)`, never a panic.
pub trait GmmAdapter {
    fn fit(&self, points: &[Vector2<f64>], k: usize) -> Result<GmmFit, VowelSpaceError>;
}

/// Full-covariance EM from `linfa-clustering`, one run, k-means initialised.
///
/// `seed: None` draws the initialisation from OS entropy, so repeated runs on
/// identical input may keep marginally different points downstream. Set a
/// seed for reproducible fits.
#[derive(Clone, Copy, Debug)]
pub struct EmGmm {
    pub max_iter: usize,
    /// Convergence threshold on the change of the EM lower bound.
    pub tol: f64,
    /// Added to every covariance diagonal.
    pub reg_covar: f64,
    pub seed: Option<u64>,
}

impl Default for EmGmm {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            tol: 1e-3,
            reg_covar: 1e-6,
            seed: None,
        }
    }
}

impl EmGmm {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

fn gmm_err(e: impl std::fmt::Display) -> VowelSpaceError {
    VowelSpaceError::external("gmm", e.to_string())
}

/// `ln N(x; mean, cov)`; `-inf` for a singular covariance.
fn log_normal(x: Vector2<f64>, mean: Vector2<f64>, cov: &Matrix2<f64>) -> f64 {
    let det = cov.determinant();
    let Some(inv) = cov.try_inverse() else {
        return f64::NEG_INFINITY;
    };
    if !(det > 0.0) {
        return f64::NEG_INFINITY;
    }
    let d = x - mean;
    -TAU.ln() - 0.5 * det.ln() - 0.5 * d.dot(&(inv * d))
}

fn log_sum_exp(xs: &[f64]) -> f64 {
    let m = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !m.is_finite() {
        return m;
    }
    m + xs.iter().map(|x| (x - m).exp()).sum::<f64>().ln()
}

impl GmmFit {
    /// Per-point mixture log-likelihood under the fitted parameters.
    fn score(&self, points: &[Vector2<f64>]) -> Vec<f64> {
        let mut log_p = vec![0.0; self.weights.len()];
        points
            .iter()
            .map(|&x| {
                for (j, lp) in log_p.iter_mut().enumerate() {
                    *lp = self.weights[j].ln() + log_normal(x, self.means[j], &self.covariances[j]);
                }
                log_sum_exp(&log_p)
            })
            .collect()
    }
}

impl GmmAdapter for EmGmm {
    fn fit(&self, points: &[Vector2<f64>], k: usize) -> Result<GmmFit, VowelSpaceError> {
        let n = points.len();
        if k == 0 || n < k {
            return Err(gmm_err(format!("cannot fit {k} components to {n} points")));
        }
        let rng = match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let obs = Array2::from_shape_fn((n, 2), |(i, j)| points[i][j]);
        let dataset = DatasetBase::from(obs);
        let model = GaussianMixtureModel::<f64>::params(k)
            .n_runs(1)
            .tolerance(self.tol)
            .reg_covariance(self.reg_covar)
            .max_n_iterations(self.max_iter as u64)
            .with_rng(rng)
            .check()
            .map_err(gmm_err)?
            .fit(&dataset)
            .map_err(gmm_err)?;

        let means = model.means();
        let covs = model.covariances();
        let mut fit = GmmFit {
            log_likelihood: Vec::new(),
            weights: model.weights().to_vec(),
            means: (0..k)
                .map(|j| Vector2::new(means[[j, 0]], means[[j, 1]]))
                .collect(),
            covariances: (0..k)
                .map(|j| {
                    Matrix2::new(
                        covs[[j, 0, 0]],
                        covs[[j, 0, 1]],
                        covs[[j, 1, 0]],
                        covs[[j, 1, 1]],
                    )
                })
                .collect(),
        };
        fit.log_likelihood = fit.score(points);
        if fit.log_likelihood.iter().any(|ll| ll.is_nan()) {
            return Err(gmm_err("log-likelihood is NaN under the fitted mixture"));
        }
        tracing::debug!(
            components = k,
            total_log_likelihood = fit.total_log_likelihood(),
            "gmm fitted"
        );
        Ok(fit)
    }
}
