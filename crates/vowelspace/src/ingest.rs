//! Ingestion boundary: drop unusable formant pairs before analysis.

use crate::center::check_lengths;
use crate::error::VowelSpaceError;
use crate::types::FormantPoint;

/// Formant columns with every pair valid (finite, > 0).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Formants {
    pub f1: Vec<f64>,
    pub f2: Vec<f64>,
    /// Pairs removed by `sanitize`.
    pub dropped: usize,
}

impl Formants {
    pub fn len(&self) -> usize {
        self.f1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.f1.is_empty()
    }
}

/// Keep only pairs where both F1 and F2 are finite and strictly positive.
pub fn sanitize(f1: &[f64], f2: &[f64]) -> Result<Formants, VowelSpaceError> {
    check_lengths(f1, f2)?;
    let mut out = Formants::default();
    for (&a, &b) in f1.iter().zip(f2) {
        if FormantPoint::new(a, b).is_missing() {
            out.dropped += 1;
        } else {
            out.f1.push(a);
            out.f2.push(b);
        }
    }
    if out.dropped > 0 {
        tracing::debug!(kept = out.len(), dropped = out.dropped, "sanitized formants");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_non_positive_and_nan() {
        let f = sanitize(
            &[300.0, 0.0, f64::NAN, 600.0, -5.0],
            &[2200.0, 1500.0, 1000.0, f64::INFINITY, 900.0],
        )
        .unwrap();
        assert_eq!(f.f1, vec![300.0]);
        assert_eq!(f.f2, vec![2200.0]);
        assert_eq!(f.dropped, 4);
    }

    #[test]
    fn length_mismatch_is_error() {
        assert!(sanitize(&[300.0], &[]).is_err());
        assert!(sanitize(&[], &[]).unwrap().is_empty());
    }
}
