use crate::cfg::INNER_BAND;
use crate::stats::{mean, normal_cdf, sample_sd};
use crate::types::Corner;

/// Decides whether the angle distribution of a bin is plausible enough to
/// count as a vowel corner. The support-count gate is applied separately.
pub trait CornerSupportPolicy {
    fn accepts(&self, corner: Corner, angles: &[f64]) -> bool;
}

/// Keep a bin iff at least one of its points lies in the inner CDF band:
/// `|Φ((θ - μ)/σ) - 0.5| < band`, with μ, σ the bin's angle mean and sample sd.
///
/// Degenerate spread (one point, or all angles equal) puts every point at
/// the mean, so Φ is 0.5 and the bin is kept.
#[derive(Clone, Copy, Debug)]
pub struct InnerBandPolicy {
    pub band: f64,
}

impl Default for InnerBandPolicy {
    fn default() -> Self {
        Self { band: INNER_BAND }
    }
}

impl CornerSupportPolicy for InnerBandPolicy {
    fn accepts(&self, _corner: Corner, angles: &[f64]) -> bool {
        if angles.is_empty() {
            return false;
        }
        let mu = mean(angles);
        let sd = sample_sd(angles);
        if !(sd.is_finite() && sd > 0.0) {
            // Φ = 0.5 for every point.
            return self.band > 0.0;
        }
        angles
            .iter()
            .any(|&th| (normal_cdf(th, mu, sd) - 0.5).abs() < self.band)
    }
}

/// Accept every non-empty bin (support gate only).
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl CornerSupportPolicy for AcceptAll {
    fn accepts(&self, _corner: Corner, angles: &[f64]) -> bool {
        !angles.is_empty()
    }
}
