//! Analysis limits: the guard against combinatorial blowup.
//!
//! The reference Boltzmann method has no intrinsic cutoff, and partition
//! enumeration is exponential (see `partition`). `AnalysisLimits` imposes a
//! configurable ceiling so a hostile or merely large transaction cannot run
//! effectively unbounded.

use serde::{Deserialize, Serialize};
use crate::canonical::canonical_hash_hex;
use crate::DEFAULT_LIMITS_VERSION;

/// Limits applied to every entropy analysis.
///
/// ## Parameters
///
/// - `max_total_values`: ceiling on `inputs.len() + outputs.len()`. The
///   default of 16 keeps the worst split (8 + 8, B(8)² ≈ 1.7e7 signature
///   comparisons) comfortably sub-second.
/// - `max_combinations`: short-circuit during enumeration once this many
///   valid mappings have been found.
///
/// Breaching either bound fails the analysis with
/// `AnalysisError::CombinatorialExplosion`; the analyzer never silently
/// truncates a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisLimits {
    /// Limits version identifier.
    pub version: String,
    /// Maximum combined input + output count.
    pub max_total_values: usize,
    /// Maximum number of valid mappings to enumerate.
    pub max_combinations: u128,
}

impl AnalysisLimits {
    /// Create limits with custom bounds.
    pub fn new(max_total_values: usize, max_combinations: u128) -> Self {
        Self {
            version: DEFAULT_LIMITS_VERSION.to_string(),
            max_total_values,
            max_combinations,
        }
    }

    /// Compute a hash of the limit parameters, suitable for tagging
    /// results so callers can tell which configuration produced them.
    pub fn params_hash(&self) -> String {
        canonical_hash_hex(self)
    }

    /// Tight limits for testing.
    #[cfg(test)]
    pub fn minimal() -> Self {
        Self::new(6, 100)
    }
}

impl Default for AnalysisLimits {
    fn default() -> Self {
        Self {
            version: DEFAULT_LIMITS_VERSION.to_string(),
            max_total_values: 16,
            max_combinations: 1_000_000,
        }
    }
}
