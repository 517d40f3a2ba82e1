// Copyright 2026 Painel Analytics. All rights reserved.
// Business Scenario Statistics Engine - Error Taxonomy

/// Errors surfaced by the engine.
///
/// Every public entry point rejects bad input before computing anything, so
/// a returned report is always fully populated. There are no transient
/// failures to retry: the engine is pure math plus a caller-owned generator.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl EngineError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name, reason: reason.into() }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = EngineError::invalid("rate", "must be positive, got -2");
        assert_eq!(err.to_string(), "invalid parameter `rate`: must be positive, got -2");
    }
}
