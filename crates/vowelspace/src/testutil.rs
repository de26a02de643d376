//! Synthetic formant clouds for tests.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Box–Muller draws around `centers` (plane coordinates), `per` points each.
pub(crate) fn blobs(centers: &[(f64, f64)], sd: f64, per: usize, seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(centers.len() * per);
    for &(x, y) in centers {
        for _ in 0..per {
            let u1: f64 = rng.gen_range(f64::EPSILON..1.0);
            let u2: f64 = rng.gen();
            let r = (-2.0 * u1.ln()).sqrt() * sd;
            out.push(Vector2::new(x + r * (TAU * u2).cos(), y + r * (TAU * u2).sin()));
        }
    }
    out
}

/// Split plane points `(F2, F1)` back into formant columns.
pub(crate) fn columns(points: &[Vector2<f64>]) -> (Vec<f64>, Vec<f64>) {
    points.iter().map(|p| (p.y, p.x)).unzip()
}
