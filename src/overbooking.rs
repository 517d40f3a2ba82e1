// Copyright 2026 Painel Analytics. All rights reserved.
// Business Scenario Statistics Engine - Overbooking Analyzer

//! Airline overbooking risk analysis.
//!
//! Show-ups are Binomial(tickets_sold, show_prob); overbooking means more
//! show-ups than seats. Alongside the headline probability the analyzer
//! scans candidate sales volumes for the largest one whose risk stays under
//! the caller's limit, and weighs extra-ticket revenue against the expected
//! compensation payout.

use crate::distribution::{binomial_pmf, binomial_upper_tail};
use crate::error::{EngineError, EngineResult};
use crate::types::{OverbookingParams, OverbookingReport, Recommendation, RiskCurvePoint};

/// Run the full overbooking analysis for one parameter set.
pub fn analyze(params: &OverbookingParams) -> EngineResult<OverbookingReport> {
    if !(0.0..=1.0).contains(&params.show_prob) {
        return Err(EngineError::invalid(
            "show_prob",
            format!("must be in [0, 1], got {}", params.show_prob),
        ));
    }
    if !(0.0..=1.0).contains(&params.risk_limit) {
        return Err(EngineError::invalid(
            "risk_limit",
            format!("must be in [0, 1], got {}", params.risk_limit),
        ));
    }

    let overbooking_probability =
        binomial_upper_tail(params.tickets_sold, params.show_prob, params.capacity)?;
    let pmf = binomial_pmf(params.tickets_sold, params.show_prob)?;

    // Scan volumes from capacity up to twice the current sales level. The
    // curve is empty when capacity already exceeds that bound.
    let mut risk_curve = Vec::new();
    for volume in params.capacity..=params.tickets_sold.saturating_mul(2) {
        let risk = binomial_upper_tail(volume, params.show_prob, params.capacity)?;
        risk_curve.push(RiskCurvePoint { volume, risk_probability: risk });
    }

    let max_safe_volume = risk_curve
        .iter()
        .filter(|point| point.risk_probability <= params.risk_limit)
        .map(|point| point.volume)
        .max();

    // Worksheet formula, left unclamped: the bumped-seat count goes negative
    // when capacity meets or exceeds tickets sold.
    let bumped_seats = params.tickets_sold as f64 - params.capacity as f64;
    let expected_penalty_cost = overbooking_probability * params.penalty_cost * bumped_seats;
    let gross_extra_profit = params.extra_tickets as f64 * params.extra_ticket_price;

    let recommendation = if gross_extra_profit > expected_penalty_cost {
        Recommendation::Favorable
    } else {
        Recommendation::Unfavorable
    };

    Ok(OverbookingReport {
        overbooking_probability,
        pmf,
        risk_curve,
        max_safe_volume,
        gross_extra_profit,
        expected_penalty_cost,
        recommendation,
    })
}
