//! Default tolerance for approximate offer item comparison.

use offerdesk_core::{DomainError, DomainResult};

/// Environment variable holding the default `same_as` tolerance, in percent.
pub const TOLERANCE_ENV_VAR: &str = "OFFERDESK_SAME_AS_TOLERANCE_PCT";

/// Acceptable relative difference between two offer item totals, in percent.
///
/// `5.0` means totals within 5% of the larger one are treated as the same.
/// Non-positive values are accepted; they make every comparison fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SameAsTolerance(f64);

impl SameAsTolerance {
    pub const DEFAULT_PERCENT: f64 = 5.0;

    pub fn new(percent: f64) -> Self {
        Self(percent)
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    /// Parse a percentage such as `"2.5"`.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let percent: f64 = raw
            .trim()
            .parse()
            .map_err(|e| DomainError::validation(format!("tolerance percent {raw:?}: {e}")))?;
        if !percent.is_finite() {
            return Err(DomainError::validation(format!(
                "tolerance percent must be finite, got {raw:?}"
            )));
        }
        Ok(Self(percent))
    }

    /// Read the tolerance from [`TOLERANCE_ENV_VAR`], falling back to
    /// [`Self::DEFAULT_PERCENT`].
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(TOLERANCE_ENV_VAR).ok().as_deref())
    }

    fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        Self::parse(raw).unwrap_or_else(|err| {
            tracing::warn!(
                %err,
                default_percent = Self::DEFAULT_PERCENT,
                "{TOLERANCE_ENV_VAR} is invalid; using default tolerance"
            );
            Self::default()
        })
    }
}

impl Default for SameAsTolerance {
    fn default() -> Self {
        Self(Self::DEFAULT_PERCENT)
    }
}
