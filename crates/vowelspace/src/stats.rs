//! Small descriptive statistics over `f64` slices.
//!
//! Empty input gives NaN everywhere; callers decide what NaN means.

/// Arithmetic mean.
pub(crate) fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Mean of a (possibly filtered) stream, or `None` if it is empty.
pub(crate) fn mean_where<I>(items: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, n) = items
        .into_iter()
        .fold((0.0, 0usize), |(s, n), x| (s + x, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Sample standard deviation (n - 1 denominator); NaN for fewer than 2 values.
pub(crate) fn sample_sd(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return f64::NAN;
    }
    let m = mean(xs);
    let ss: f64 = xs.iter().map(|x| (x - m) * (x - m)).sum();
    (ss / (xs.len() - 1) as f64).sqrt()
}

/// Median (average of the two middle values for even length).
pub(crate) fn median(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    let mut v = xs.to_vec();
    v.sort_by(|a, b| a.total_cmp(b));
    let n = v.len();
    if n % 2 == 1 {
        v[n / 2]
    } else {
        0.5 * (v[n / 2 - 1] + v[n / 2])
    }
}

/// Normal CDF Φ((x - mu) / sd).
pub(crate) fn normal_cdf(x: f64, mu: f64, sd: f64) -> f64 {
    0.5 * libm::erfc(-(x - mu) / (sd * std::f64::consts::SQRT_2))
}
