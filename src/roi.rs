// Copyright 2026 Painel Analytics. All rights reserved.
// Business Scenario Statistics Engine - ROI Monte Carlo Engine

//! Monte Carlo return-on-investment simulation.
//!
//! Revenue per trial is drawn from Normal(expected_revenue, σ) using a
//! caller-owned generator, so a seeded `ChaCha8Rng` reproduces a report
//! bit-for-bit and concurrent callers never share RNG state.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{EngineError, EngineResult};
use crate::types::{MonteCarloSample, Outlook, RoiParams, RoiReport};

/// Fallback revenue spread when the caller supplies none: 20% of the
/// expected revenue.
pub const DEFAULT_STD_DEV_RATIO: f64 = 0.2;

/// Simulate `params.sample_count` revenue trials and aggregate the ROI
/// distribution. The closed-form expectation is computed first and never
/// touches the generator.
pub fn simulate<R: Rng + ?Sized>(params: &RoiParams, rng: &mut R) -> EngineResult<RoiReport> {
    if !params.investment.is_finite() || params.investment <= 0.0 {
        return Err(EngineError::invalid(
            "investment",
            format!("must be positive, got {}", params.investment),
        ));
    }
    if params.sample_count == 0 {
        return Err(EngineError::invalid("sample_count", "must be positive, got 0"));
    }
    let std_dev = params
        .revenue_std_dev
        .unwrap_or(DEFAULT_STD_DEV_RATIO * params.expected_revenue);
    if !std_dev.is_finite() || std_dev <= 0.0 {
        return Err(EngineError::invalid(
            "revenue_std_dev",
            format!("must be positive, got {}", std_dev),
        ));
    }

    let expected_roi_percent =
        (params.expected_revenue - params.operating_cost) / params.investment * 100.0;

    let revenue_dist = Normal::new(params.expected_revenue, std_dev)
        .map_err(|e| EngineError::invalid("revenue_std_dev", e.to_string()))?;

    let mut samples = Vec::with_capacity(params.sample_count);
    let mut below_threshold = 0usize;
    let mut max_roi = f64::NEG_INFINITY;
    let mut min_roi = f64::INFINITY;
    let mut roi_sum = 0.0;

    for _ in 0..params.sample_count {
        let revenue = revenue_dist.sample(rng);
        let profit = revenue - params.operating_cost;
        let roi_percent = profit / params.investment * 100.0;

        if revenue < params.revenue_threshold {
            below_threshold += 1;
        }
        max_roi = max_roi.max(roi_percent);
        min_roi = min_roi.min(roi_percent);
        roi_sum += roi_percent;

        samples.push(MonteCarloSample { revenue, profit, roi_percent });
    }

    let mean_roi_percent = roi_sum / params.sample_count as f64;
    let outlook = if mean_roi_percent > 0.0 { Outlook::Positive } else { Outlook::Negative };

    Ok(RoiReport {
        expected_roi_percent,
        samples,
        probability_revenue_below_threshold: below_threshold as f64 / params.sample_count as f64,
        max_roi_percent: max_roi,
        min_roi_percent: min_roi,
        mean_roi_percent,
        outlook,
    })
}
