//! Boltzmann entropy analyzer.
//!
//! Quantifies how ambiguous the input/output mapping of a transaction is:
//! every pairing of an input partition with an output partition whose
//! sorted block sums agree is one plausible interpretation, the count of
//! such pairings is the `combinations`, and `log2(combinations)` is the
//! transaction's entropy. Links that survive every interpretation are
//! deterministic and therefore privacy-relevant no matter how the
//! ambiguity is resolved.
//!
//! ## Algorithm
//!
//! 1. Validate: coinbase shortcut, non-empty outputs, equal sums, limits
//! 2. Enumerate output partitions, grouped by sorted block-sum signature
//! 3. For each input partition, pair it with every signature-equal output
//!    partition
//! 4. Entropy from the pairing count; deterministic links from the
//!    intersection of every mapping's induced link set
//! 5. Classify by structure first, ambiguity second

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::AnalysisError;
use crate::limits::AnalysisLimits;
use crate::partition::partitions_of;
use crate::types::{
    EntropyResult, EntropySummary, Mapping, Partition, TransactionRecord, TxClass, TxId,
};

/// Boltzmann entropy analyzer.
///
/// Pure: `analyze` is a function of its arguments and the configured
/// limits, with no shared mutable state, so independent transactions may
/// be analyzed in parallel.
#[derive(Debug, Clone, Default)]
pub struct BoltzmannAnalyzer {
    limits: AnalysisLimits,
}

impl BoltzmannAnalyzer {
    /// Create an analyzer with custom limits.
    pub fn new(limits: AnalysisLimits) -> Self {
        Self { limits }
    }

    /// Get the configured limits.
    pub fn limits(&self) -> &AnalysisLimits {
        &self.limits
    }

    /// Analyze one transaction's input and output values.
    ///
    /// Values must be fee-normalized: `sum(inputs) == sum(outputs)` is
    /// required for non-coinbase transactions and a mismatch is an error,
    /// never a silently adjusted result.
    pub fn analyze(&self, inputs: &[u64], outputs: &[u64]) -> Result<EntropyResult, AnalysisError> {
        if inputs.is_empty() {
            return Ok(Self::coinbase_result(outputs));
        }
        if outputs.is_empty() {
            return Err(AnalysisError::EmptyOutputs);
        }

        let input_sum: u64 = inputs.iter().sum();
        let output_sum: u64 = outputs.iter().sum();
        if input_sum != output_sum {
            return Err(AnalysisError::ValueMismatch {
                input_sum,
                output_sum,
            });
        }

        let total_values = inputs.len() + outputs.len();
        if total_values > self.limits.max_total_values {
            tracing::warn!(
                total_values,
                limit = self.limits.max_total_values,
                "analysis rejected by combinatorial ceiling"
            );
            return Err(AnalysisError::CombinatorialExplosion {
                values: total_values as u128,
                limit: self.limits.max_total_values as u128,
            });
        }

        let valid_mappings = self.enumerate_mappings(inputs, outputs)?;
        let combinations = valid_mappings.len() as u128;
        let entropy = if combinations <= 1 {
            0.0
        } else {
            (combinations as f64).log2()
        };
        let deterministic_links = deterministic_links(&valid_mappings, inputs, outputs);
        let classification = classify(inputs.len(), outputs.len(), combinations);

        tracing::debug!(
            combinations,
            entropy,
            links = deterministic_links.len(),
            %classification,
            "entropy analysis complete"
        );

        Ok(EntropyResult {
            combinations,
            entropy,
            deterministic_links,
            classification,
            valid_mappings,
        })
    }

    /// Analyze a batch of transactions, keyed by txid.
    ///
    /// Each transaction is analyzed independently; one failure does not
    /// affect the rest.
    pub fn batch_analyze(
        &self,
        records: &[TransactionRecord],
    ) -> BTreeMap<TxId, Result<EntropyResult, AnalysisError>> {
        records
            .iter()
            .map(|tx| {
                (
                    tx.txid,
                    self.analyze(&tx.input_values(), &tx.output_values()),
                )
            })
            .collect()
    }

    /// Enumerate every valid input/output partition pairing.
    fn enumerate_mappings(
        &self,
        inputs: &[u64],
        outputs: &[u64],
    ) -> Result<Vec<Mapping>, AnalysisError> {
        // Group output partitions by signature so each input partition
        // costs one lookup instead of a scan over B(outputs) candidates.
        let mut by_signature: HashMap<Vec<u64>, Vec<Partition>> = HashMap::new();
        for partition in partitions_of(outputs.len()) {
            by_signature
                .entry(partition.sum_signature(outputs))
                .or_default()
                .push(partition);
        }

        let mut mappings = Vec::new();
        for input_partition in partitions_of(inputs.len()) {
            let signature = input_partition.sum_signature(inputs);
            if let Some(candidates) = by_signature.get(&signature) {
                for output_partition in candidates {
                    mappings.push(Mapping::new(
                        input_partition.clone(),
                        output_partition.clone(),
                    ));
                    if mappings.len() as u128 > self.limits.max_combinations {
                        tracing::warn!(
                            limit = self.limits.max_combinations,
                            "analysis rejected: valid-mapping count exceeded the limit"
                        );
                        return Err(AnalysisError::CombinatorialExplosion {
                            values: mappings.len() as u128,
                            limit: self.limits.max_combinations,
                        });
                    }
                }
            }
        }
        Ok(mappings)
    }

    /// Synthetic result for a coinbase transaction: a single trivial
    /// interpretation, zero entropy, no deterministic links.
    fn coinbase_result(outputs: &[u64]) -> EntropyResult {
        let output_partition = Partition::new(vec![(0..outputs.len()).collect()]);
        EntropyResult {
            combinations: 1,
            entropy: 0.0,
            deterministic_links: Vec::new(),
            classification: TxClass::Coinbase,
            valid_mappings: vec![Mapping::new(Partition::empty(), output_partition)],
        }
    }
}

/// Links present in every valid mapping's induced link set.
fn deterministic_links(
    mappings: &[Mapping],
    inputs: &[u64],
    outputs: &[u64],
) -> Vec<(usize, usize)> {
    let mut iter = mappings.iter();
    let mut common: BTreeSet<(usize, usize)> = match iter.next() {
        Some(first) => first.induced_links(inputs, outputs),
        None => return Vec::new(),
    };
    for mapping in iter {
        if common.is_empty() {
            break;
        }
        let links = mapping.induced_links(inputs, outputs);
        common.retain(|link| links.contains(link));
    }
    common.into_iter().collect()
}

/// Classify a transaction. Structural shapes take priority; the
/// remainder is bucketed by ambiguity.
fn classify(num_inputs: usize, num_outputs: usize, combinations: u128) -> TxClass {
    match (num_inputs, num_outputs) {
        (1, 1) => TxClass::SimpleSend,
        (1, 2) if combinations == 1 => TxClass::BasicPayment,
        (1, o) if o > 2 => TxClass::AmountSplit,
        (i, 1) if i > 1 => TxClass::Consolidation,
        _ => match combinations {
            0 => TxClass::Complex,
            1 => TxClass::Unambiguous,
            2 => TxClass::AmbiguousLow,
            3..=10 => TxClass::AmbiguousMedium,
            _ => TxClass::AmbiguousHigh,
        },
    }
}

/// Summarize a sequence of optional entropy values, skipping `None`s.
///
/// Returns `None` when no values remain. For even counts the median is
/// the average of the two middle values.
pub fn summarize_entropy<I>(values: I) -> Option<EntropySummary>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut present: Vec<f64> = values.into_iter().flatten().collect();
    if present.is_empty() {
        return None;
    }
    present.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = present.len();
    let min = present[0];
    let max = present[count - 1];
    let mean = present.iter().sum::<f64>() / count as f64;
    let median = if count % 2 == 1 {
        present[count / 2]
    } else {
        (present[count / 2 - 1] + present[count / 2]) / 2.0
    };

    Some(EntropySummary {
        count,
        min,
        max,
        mean,
        median,
    })
}
