//! Configuration for the dense LU solver
//!
//! The configuration is serde-friendly so it can be embedded in an engine's
//! JSON settings next to other solver parameters.

use serde::{Deserialize, Deserializer, Serialize};

/// How the decomposition treats a vanishing pivot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PivotPolicy {
    /// Replace an exactly-zero pivot with machine epsilon and carry on.
    ///
    /// This never fails after the row-scaling check, but for a matrix that
    /// becomes singular during elimination the returned "solution" is
    /// numerically meaningless. Kept for compatibility with existing callers.
    #[default]
    SubstituteEpsilon,
    /// Fail with [`crate::SolverError::ZeroPivot`] when `|pivot| <= tolerance`.
    ///
    /// An exactly-zero pivot always fails, whatever the tolerance.
    Strict {
        /// Absolute pivot threshold; negative or NaN values are read as zero
        #[serde(
            default = "default_strict_tolerance",
            deserialize_with = "deserialize_tolerance"
        )]
        tolerance: f64,
    },
}

fn default_strict_tolerance() -> f64 {
    1e-12
}

/// Negative and NaN thresholds become zero (`f64::max` drops NaN)
fn sanitize_tolerance(tolerance: f64) -> f64 {
    tolerance.max(0.0)
}

fn deserialize_tolerance<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(sanitize_tolerance)
}

/// LU solver configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LuConfig {
    /// Zero-pivot handling
    #[serde(default)]
    pub pivot_policy: PivotPolicy,
}

impl LuConfig {
    /// Configuration that rejects pivots at or below `tolerance`
    ///
    /// A negative or NaN `tolerance` is replaced by zero, which still rejects
    /// exactly-zero pivots.
    pub fn strict(tolerance: f64) -> Self {
        Self {
            pivot_policy: PivotPolicy::Strict {
                tolerance: sanitize_tolerance(tolerance),
            },
        }
    }

    /// Whether this configuration fails on small pivots
    pub fn is_strict(&self) -> bool {
        matches!(self.pivot_policy, PivotPolicy::Strict { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_compatible_mode() {
        let config = LuConfig::default();
        assert_eq!(config.pivot_policy, PivotPolicy::SubstituteEpsilon);
        assert!(!config.is_strict());
    }

    #[test]
    fn test_strict_shortcut() {
        let config = LuConfig::strict(1e-9);
        assert!(config.is_strict());
        assert_eq!(
            config.pivot_policy,
            PivotPolicy::Strict { tolerance: 1e-9 }
        );
    }

    #[test]
    fn test_strict_tolerance_is_sanitized() {
        for bad in [-1.0, f64::NAN, f64::NEG_INFINITY] {
            assert_eq!(
                LuConfig::strict(bad).pivot_policy,
                PivotPolicy::Strict { tolerance: 0.0 }
            );
        }
    }

    #[test]
    fn test_deserialize_strict_tolerance() {
        let config: LuConfig =
            serde_json::from_str(r#"{"pivot_policy":{"mode":"strict","tolerance":-1}}"#).unwrap();
        assert_eq!(config, LuConfig::strict(0.0));

        let config: LuConfig =
            serde_json::from_str(r#"{"pivot_policy":{"mode":"strict"}}"#).unwrap();
        assert_eq!(config, LuConfig::strict(1e-12));

        let config: LuConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LuConfig::default());
    }
}
