// Copyright 2026 Painel Analytics. All rights reserved.
// Business Scenario Statistics Engine - Type Definitions

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

// ─── Distribution Parameters ────────────────────────────────────────────────

/// Parameters for one of the three supported distributions.
///
/// Constructed fresh per call and validated before any evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DistributionParams {
    Binomial { trials: u64, success_prob: f64 },
    Poisson { rate: f64 },
    Normal { mean: f64, std_dev: f64 },
}

impl DistributionParams {
    /// Reject out-of-range parameters up front.
    pub fn validate(&self) -> EngineResult<()> {
        match *self {
            Self::Binomial { success_prob, .. } => {
                if !(0.0..=1.0).contains(&success_prob) {
                    return Err(EngineError::invalid(
                        "success_prob",
                        format!("must be in [0, 1], got {}", success_prob),
                    ));
                }
            }
            Self::Poisson { rate } => {
                if !rate.is_finite() || rate <= 0.0 {
                    return Err(EngineError::invalid(
                        "rate",
                        format!("must be positive, got {}", rate),
                    ));
                }
            }
            Self::Normal { mean, std_dev } => {
                if !mean.is_finite() {
                    return Err(EngineError::invalid("mean", format!("must be finite, got {}", mean)));
                }
                if !std_dev.is_finite() || std_dev <= 0.0 {
                    return Err(EngineError::invalid(
                        "std_dev",
                        format!("must be positive, got {}", std_dev),
                    ));
                }
            }
        }
        Ok(())
    }
}

// ─── Chartable Series Points ────────────────────────────────────────────────

/// One bar of a discrete distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PmfPoint {
    pub k: u64,
    pub probability: f64,
}

/// One point of a continuous density curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    pub x: f64,
    pub density: f64,
}

/// Overbooking risk at one sales volume. Curves are ordered by increasing volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskCurvePoint {
    pub volume: u64,
    pub risk_probability: f64,
}

// ─── Overbooking ────────────────────────────────────────────────────────────

/// Inputs for the airline overbooking analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverbookingParams {
    /// Tickets sold for the flight.
    pub tickets_sold: u64,
    /// Probability that a ticketed passenger shows up.
    pub show_prob: f64,
    /// Seats on the aircraft.
    pub capacity: u64,
    /// Maximum acceptable overbooking risk when searching for a safe volume.
    pub risk_limit: f64,
    /// Compensation paid per bumped passenger.
    pub penalty_cost: f64,
    /// Sale price of one extra ticket.
    pub extra_ticket_price: f64,
    /// Extra tickets under consideration beyond capacity.
    pub extra_tickets: u64,
}

impl Default for OverbookingParams {
    /// The classic worksheet case: 130 tickets for 120 seats at 88% show-up,
    /// a 7% risk ceiling, and 10 extra tickets at R$ 500 each against a
    /// R$ 500 bump penalty.
    fn default() -> Self {
        Self {
            tickets_sold: 130,
            show_prob: 0.88,
            capacity: 120,
            risk_limit: 0.07,
            penalty_cost: 500.0,
            extra_ticket_price: 500.0,
            extra_tickets: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Favorable,
    Unfavorable,
}

/// Everything the overbooking tab renders: headline risk, the full binomial
/// distribution, the risk-vs-volume curve, and the financial verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverbookingReport {
    /// P(more passengers show up than seats).
    pub overbooking_probability: f64,
    /// Binomial PMF over 0..=tickets_sold show-ups.
    pub pmf: Vec<PmfPoint>,
    /// Overbooking risk for each candidate sales volume, capacity upward.
    pub risk_curve: Vec<RiskCurvePoint>,
    /// Largest volume on the curve whose risk stays within the limit.
    /// `None` when no volume qualifies.
    pub max_safe_volume: Option<u64>,
    /// Revenue from selling the extra tickets.
    pub gross_extra_profit: f64,
    /// Expected compensation payout. Worksheet formula, unclamped: negative
    /// when capacity meets or exceeds tickets sold.
    pub expected_penalty_cost: f64,
    pub recommendation: Recommendation,
}

// ─── Monte Carlo ROI ────────────────────────────────────────────────────────

/// Inputs for the ROI Monte Carlo simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiParams {
    pub expected_revenue: f64,
    pub operating_cost: f64,
    pub investment: f64,
    /// Number of simulated trials. Must be positive.
    pub sample_count: usize,
    /// Revenue standard deviation. `None` selects the policy default of
    /// 20% of expected revenue.
    pub revenue_std_dev: Option<f64>,
    /// Revenue level whose shortfall probability the report estimates.
    pub revenue_threshold: f64,
}

impl Default for RoiParams {
    /// The worksheet's information-system investment: R$ 80k expected
    /// revenue, R$ 10k operating cost, R$ 50k invested, 1000 trials,
    /// shortfall threshold at R$ 60k.
    fn default() -> Self {
        Self {
            expected_revenue: 80_000.0,
            operating_cost: 10_000.0,
            investment: 50_000.0,
            sample_count: 1000,
            revenue_std_dev: None,
            revenue_threshold: 60_000.0,
        }
    }
}

/// One simulated trial. Lives only inside the report it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloSample {
    pub revenue: f64,
    pub profit: f64,
    pub roi_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outlook {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiReport {
    /// Closed-form ROI from the point estimates, no randomness involved.
    pub expected_roi_percent: f64,
    /// Every simulated trial, length = configured sample count.
    pub samples: Vec<MonteCarloSample>,
    /// Fraction of trials whose revenue fell below the threshold.
    pub probability_revenue_below_threshold: f64,
    pub max_roi_percent: f64,
    pub min_roi_percent: f64,
    pub mean_roi_percent: f64,
    pub outlook: Outlook,
}

// ─── Remaining Tab Reports ──────────────────────────────────────────────────

/// Customer-arrival distribution for the Poisson tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoissonReport {
    pub pmf: Vec<PmfPoint>,
}

/// Sales-variability view for the normal tab: the density curve to chart and
/// the probability mass inside the selected range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalReport {
    pub density_curve: Vec<DensityPoint>,
    pub range_probability: f64,
}
