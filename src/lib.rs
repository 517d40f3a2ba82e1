// Copyright 2026 Painel Analytics. All rights reserved.
// Business Scenario Statistics Engine ("Painel")

pub mod distribution;
pub mod error;
pub mod overbooking;
pub mod roi;
pub mod scenario;
pub mod types;

pub use error::{EngineError, EngineResult};
pub use types::*;
