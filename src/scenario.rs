// Copyright 2026 Painel Analytics. All rights reserved.
// Business Scenario Statistics Engine - Scenario Facade

//! The four dashboard tabs as stateless library calls.
//!
//! Each function is pass-through orchestration: collect parameters, delegate
//! to the analyzers, hand back a freshly built report for the presentation
//! layer to chart. The facade owns nothing between calls; the only state in
//! play is the per-call random generator for the ROI tab.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::distribution;
use crate::error::EngineResult;
use crate::overbooking;
use crate::roi;
use crate::types::{NormalReport, OverbookingParams, OverbookingReport, PoissonReport, RoiParams, RoiReport};

/// Default x/y resolution of the normal density chart.
pub const NORMAL_CURVE_POINTS: usize = 400;

/// Dashboard slider defaults for the Poisson and normal tabs.
pub mod defaults {
    /// Mean customer arrivals per hour.
    pub const POISSON_RATE: f64 = 5.0;
    /// Largest arrival count charted.
    pub const POISSON_MAX_K: u64 = 14;
    /// Mean units sold.
    pub const NORMAL_MEAN: f64 = 100.0;
    /// Sales standard deviation.
    pub const NORMAL_STD_DEV: f64 = 15.0;
    /// Default highlighted range: mean ± 20 units.
    pub const NORMAL_LOWER: f64 = 80.0;
    pub const NORMAL_UPPER: f64 = 120.0;
}

/// Tab 1: binomial overbooking analysis.
pub fn overbooking_scenario(params: &OverbookingParams) -> EngineResult<OverbookingReport> {
    overbooking::analyze(params)
}

/// Tab 2: Poisson customer arrivals, PMF over 0..=max_k.
pub fn poisson_scenario(rate: f64, max_k: u64) -> EngineResult<PoissonReport> {
    Ok(PoissonReport { pmf: distribution::poisson_pmf(rate, max_k)? })
}

/// Tab 3: normal sales variability. Returns the density curve at the
/// dashboard's chart resolution plus the probability inside the range.
pub fn normal_scenario(mean: f64, std_dev: f64, lower: f64, upper: f64) -> EngineResult<NormalReport> {
    let density_curve = distribution::normal_pdf_curve(mean, std_dev, NORMAL_CURVE_POINTS)?;
    let range_probability = distribution::normal_range_probability(mean, std_dev, lower, upper)?;
    Ok(NormalReport { density_curve, range_probability })
}

/// Tab 4: Monte Carlo ROI simulation.
///
/// A seed gives a reproducible report; `None` draws from entropy.
pub fn roi_scenario(params: &RoiParams, seed: Option<u64>) -> EngineResult<RoiReport> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    roi::simulate(params, &mut rng)
}
