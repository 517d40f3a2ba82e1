// Copyright 2026 Painel Analytics. All rights reserved.
// Business Scenario Statistics Engine - Distribution Adapter

//! Closed-form PMF/PDF/CDF evaluation over `statrs` distributions.
//!
//! Everything here is pure and deterministic: parameters in, scalars or
//! chartable series out, double precision only.

use statrs::distribution::{
    Binomial, Continuous, ContinuousCDF, Discrete, DiscreteCDF, Normal, Poisson,
};

use crate::error::{EngineError, EngineResult};
use crate::types::{DensityPoint, DistributionParams, PmfPoint};

/// The density curve spans mean ± 4 standard deviations, which covers all
/// but ~6e-5 of the probability mass.
const NORMAL_CURVE_SIGMAS: f64 = 4.0;

// ─── Binomial ───────────────────────────────────────────────────────────────

/// P(X > threshold) for X ~ Binomial(trials, success_prob).
pub fn binomial_upper_tail(trials: u64, success_prob: f64, threshold: u64) -> EngineResult<f64> {
    DistributionParams::Binomial { trials, success_prob }.validate()?;
    let dist = Binomial::new(success_prob, trials)
        .map_err(|e| EngineError::invalid("success_prob", e.to_string()))?;
    Ok((1.0 - dist.cdf(threshold)).clamp(0.0, 1.0))
}

/// Full PMF of Binomial(trials, success_prob) over k in 0..=trials.
pub fn binomial_pmf(trials: u64, success_prob: f64) -> EngineResult<Vec<PmfPoint>> {
    DistributionParams::Binomial { trials, success_prob }.validate()?;
    let dist = Binomial::new(success_prob, trials)
        .map_err(|e| EngineError::invalid("success_prob", e.to_string()))?;
    Ok((0..=trials)
        .map(|k| PmfPoint { k, probability: dist.pmf(k) })
        .collect())
}

// ─── Poisson ────────────────────────────────────────────────────────────────

/// PMF of Poisson(rate) over k in 0..=max_k.
pub fn poisson_pmf(rate: f64, max_k: u64) -> EngineResult<Vec<PmfPoint>> {
    DistributionParams::Poisson { rate }.validate()?;
    let dist = Poisson::new(rate).map_err(|e| EngineError::invalid("rate", e.to_string()))?;
    Ok((0..=max_k)
        .map(|k| PmfPoint { k, probability: dist.pmf(k) })
        .collect())
}

// ─── Normal ─────────────────────────────────────────────────────────────────

/// Density curve of Normal(mean, std_dev), `sample_count` evenly spaced
/// points over mean ± 4σ. Needs at least 2 points to span the interval.
pub fn normal_pdf_curve(mean: f64, std_dev: f64, sample_count: usize) -> EngineResult<Vec<DensityPoint>> {
    DistributionParams::Normal { mean, std_dev }.validate()?;
    if sample_count < 2 {
        return Err(EngineError::invalid(
            "sample_count",
            format!("curve needs at least 2 points, got {}", sample_count),
        ));
    }
    let dist = Normal::new(mean, std_dev)
        .map_err(|e| EngineError::invalid("std_dev", e.to_string()))?;
    let lo = mean - NORMAL_CURVE_SIGMAS * std_dev;
    let hi = mean + NORMAL_CURVE_SIGMAS * std_dev;
    let step = (hi - lo) / (sample_count - 1) as f64;
    Ok((0..sample_count)
        .map(|i| {
            let x = lo + step * i as f64;
            DensityPoint { x, density: dist.pdf(x) }
        })
        .collect())
}

/// P(lower ≤ X ≤ upper) for X ~ Normal(mean, std_dev).
///
/// An inverted range is an empty interval: probability 0, not an error.
pub fn normal_range_probability(mean: f64, std_dev: f64, lower: f64, upper: f64) -> EngineResult<f64> {
    DistributionParams::Normal { mean, std_dev }.validate()?;
    if upper < lower {
        return Ok(0.0);
    }
    let dist = Normal::new(mean, std_dev)
        .map_err(|e| EngineError::invalid("std_dev", e.to_string()))?;
    Ok((dist.cdf(upper) - dist.cdf(lower)).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_pmf_sums_to_one() {
        let pmf = binomial_pmf(130, 0.88).unwrap();
        assert_eq!(pmf.len(), 131);
        let total: f64 = pmf.iter().map(|p| p.probability).sum();
        assert!((total - 1.0).abs() < 1e-9, "PMF total {} not 1", total);
    }

    #[test]
    fn test_binomial_upper_tail_monotone_in_threshold() {
        let mut last = 1.0_f64;
        for threshold in 0..=130 {
            let tail = binomial_upper_tail(130, 0.88, threshold).unwrap();
            assert!(
                tail <= last + 1e-12,
                "tail rose from {} to {} at threshold {}",
                last,
                tail,
                threshold
            );
            last = tail;
        }
    }

    #[test]
    fn test_binomial_worksheet_value() {
        // 130 tickets, 88% show-up, 120 seats. The worksheet's prose quotes
        // 9.24%, but 1 - CDF(120) for Binomial(130, 0.88) is 0.0426052
        let tail = binomial_upper_tail(130, 0.88, 120).unwrap();
        assert!((tail - 0.042605).abs() < 1e-3, "got {}", tail);
    }

    #[test]
    fn test_binomial_degenerate_probs() {
        assert!(binomial_upper_tail(50, 0.0, 10).unwrap() < 1e-12);
        let certain = binomial_upper_tail(50, 1.0, 10).unwrap();
        assert!((certain - 1.0).abs() < 1e-12);
        // Threshold at or past trials leaves nothing in the tail
        assert!(binomial_upper_tail(50, 1.0, 50).unwrap() < 1e-12);
    }

    #[test]
    fn test_binomial_rejects_bad_prob() {
        assert!(binomial_upper_tail(10, 1.5, 5).is_err());
        assert!(binomial_pmf(10, -0.2).is_err());
    }

    #[test]
    fn test_poisson_pmf_shape() {
        let pmf = poisson_pmf(5.0, 14).unwrap();
        assert_eq!(pmf.len(), 15);
        // Mode of Poisson(5) is at k=4 and k=5 (equal mass)
        assert!((pmf[4].probability - pmf[5].probability).abs() < 1e-12);
        assert!(pmf[4].probability > pmf[0].probability);
        // Truncated sum stays below 1 but captures most mass at max_k ≈ 3λ
        let total: f64 = pmf.iter().map(|p| p.probability).sum();
        assert!(total > 0.99 && total < 1.0, "truncated total {}", total);
    }

    #[test]
    fn test_poisson_rejects_nonpositive_rate() {
        assert!(poisson_pmf(0.0, 10).is_err());
        assert!(poisson_pmf(-3.0, 10).is_err());
    }

    #[test]
    fn test_normal_pdf_curve_spacing() {
        let curve = normal_pdf_curve(100.0, 15.0, 400).unwrap();
        assert_eq!(curve.len(), 400);
        assert!((curve[0].x - 40.0).abs() < 1e-9);
        assert!((curve[399].x - 160.0).abs() < 1e-9);
        // Peak density at the mean
        let peak = curve
            .iter()
            .cloned()
            .fold(curve[0], |a, b| if b.density > a.density { b } else { a });
        assert!((peak.x - 100.0).abs() < 0.5, "peak at {}", peak.x);
    }

    #[test]
    fn test_normal_pdf_curve_minimum_points() {
        assert!(normal_pdf_curve(100.0, 15.0, 1).is_err());
        assert!(normal_pdf_curve(100.0, 15.0, 0).is_err());
        assert_eq!(normal_pdf_curve(100.0, 15.0, 2).unwrap().len(), 2);
    }

    #[test]
    fn test_normal_range_probability_bounds() {
        // Empty interval, both degenerate and inverted
        assert_eq!(normal_range_probability(100.0, 15.0, 80.0, 80.0).unwrap(), 0.0);
        assert_eq!(normal_range_probability(100.0, 15.0, 120.0, 80.0).unwrap(), 0.0);

        let p = normal_range_probability(100.0, 15.0, 80.0, 120.0).unwrap();
        assert!((0.0..=1.0).contains(&p));
        // ±1.333σ holds about 81.8% of the mass
        assert!((p - 0.8176).abs() < 1e-3, "got {}", p);
    }

    #[test]
    fn test_normal_rejects_nonpositive_std_dev() {
        assert!(normal_pdf_curve(100.0, 0.0, 10).is_err());
        assert!(normal_range_probability(100.0, -1.0, 80.0, 120.0).is_err());
    }
}
