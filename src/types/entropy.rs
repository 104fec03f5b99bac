//! Analyzer output types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::partition::Mapping;

/// Transaction classification produced by the analyzer.
///
/// Structural tags (`SimpleSend`, `BasicPayment`, `AmountSplit`,
/// `Consolidation`, `Coinbase`) take priority over the ambiguity buckets,
/// which are derived from the combinations count alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxClass {
    /// No inputs: block reward.
    Coinbase,
    /// One input, one output.
    SimpleSend,
    /// One input, two outputs, a single interpretation.
    BasicPayment,
    /// One input split across more than two outputs.
    AmountSplit,
    /// Several inputs merged into one output.
    Consolidation,
    /// Exactly one valid mapping.
    Unambiguous,
    /// Two valid mappings.
    AmbiguousLow,
    /// Three to ten valid mappings.
    AmbiguousMedium,
    /// More than ten valid mappings.
    AmbiguousHigh,
    /// Fallback when no other tag applies.
    Complex,
}

impl TxClass {
    /// Parse a classification from its snake_case name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "coinbase" => Some(Self::Coinbase),
            "simple_send" => Some(Self::SimpleSend),
            "basic_payment" => Some(Self::BasicPayment),
            "amount_split" => Some(Self::AmountSplit),
            "consolidation" => Some(Self::Consolidation),
            "unambiguous" => Some(Self::Unambiguous),
            "ambiguous_low" => Some(Self::AmbiguousLow),
            "ambiguous_medium" => Some(Self::AmbiguousMedium),
            "ambiguous_high" => Some(Self::AmbiguousHigh),
            "complex" => Some(Self::Complex),
            _ => None,
        }
    }
}

impl fmt::Display for TxClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coinbase => write!(f, "coinbase"),
            Self::SimpleSend => write!(f, "simple_send"),
            Self::BasicPayment => write!(f, "basic_payment"),
            Self::AmountSplit => write!(f, "amount_split"),
            Self::Consolidation => write!(f, "consolidation"),
            Self::Unambiguous => write!(f, "unambiguous"),
            Self::AmbiguousLow => write!(f, "ambiguous_low"),
            Self::AmbiguousMedium => write!(f, "ambiguous_medium"),
            Self::AmbiguousHigh => write!(f, "ambiguous_high"),
            Self::Complex => write!(f, "complex"),
        }
    }
}

/// Result of one Boltzmann entropy analysis.
///
/// Computed fresh per request from a transaction snapshot, never mutated,
/// never cached by the core. Serializes cleanly: links as index pairs,
/// mappings as plain partition data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntropyResult {
    /// Count of distinct valid input/output partition pairings.
    pub combinations: u128,
    /// `log2(combinations)`, 0.0 when combinations <= 1.
    pub entropy: f64,
    /// (input index, output index) pairs present in every valid mapping,
    /// sorted ascending.
    pub deterministic_links: Vec<(usize, usize)>,
    /// Classification tag.
    pub classification: TxClass,
    /// Every valid mapping. May be large for ambiguous transactions; the
    /// length always equals `combinations`.
    pub valid_mappings: Vec<Mapping>,
}

/// Summary statistics over a batch of entropy values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntropySummary {
    /// Number of values summarized.
    pub count: usize,
    /// Smallest entropy.
    pub min: f64,
    /// Largest entropy.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (average of the two middle values for even counts).
    pub median: f64,
}
