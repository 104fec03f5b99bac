//! Golden tests for the Boltzmann entropy analyzer.
//!
//! These pin the end-to-end behavior on reference transactions and check
//! the analyzer's invariants over randomized inputs.

use proptest::prelude::*;
use std::collections::BTreeSet;

use txentropy::{
    bell_number, partitions_of, summarize_entropy, AnalysisError, AnalysisLimits,
    BoltzmannAnalyzer, TransactionRecord, TxClass, TxId, TxInput, TxOutput,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn analyze(inputs: &[u64], outputs: &[u64]) -> txentropy::EntropyResult {
    BoltzmannAnalyzer::default()
        .analyze(inputs, outputs)
        .expect("analysis should succeed")
}

fn make_record(id: u128, inputs: &[u64], outputs: &[u64]) -> TransactionRecord {
    TransactionRecord::new(
        TxId::from_u128(id),
        Some(800_000),
        inputs
            .iter()
            .map(|&value| TxInput {
                value,
                previous_txid: TxId::from_u128(id + 1000),
            })
            .collect(),
        outputs.iter().map(|&value| TxOutput { value }).collect(),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// END-TO-END EXAMPLES
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_single_input_two_outputs_is_basic_payment() {
    let result = analyze(&[50], &[30, 20]);
    assert_eq!(result.combinations, 1);
    assert_eq!(result.entropy, 0.0);
    assert_eq!(result.classification, TxClass::BasicPayment);
}

#[test]
fn test_equal_pairs_exact_combination_count() {
    // Brute-force reference: partitions of {0,1} are the two singletons
    // or one merged block; only same-shape pairings preserve sums, so the
    // enumerated count must be exactly 2.
    let result = analyze(&[10, 10], &[10, 10]);
    assert_eq!(result.combinations, 2);
    assert_eq!(result.entropy, 1.0);
    assert_eq!(result.classification, TxClass::AmbiguousLow);
    assert_eq!(result.valid_mappings.len(), 2);
}

#[test]
fn test_coinbase() {
    let result = BoltzmannAnalyzer::default()
        .analyze(&[], &[625_000_000])
        .unwrap();
    assert_eq!(result.combinations, 1);
    assert_eq!(result.entropy, 0.0);
    assert_eq!(result.classification, TxClass::Coinbase);
}

#[test]
fn test_mismatch_never_returns_a_number() {
    let err = BoltzmannAnalyzer::default()
        .analyze(&[100], &[60, 39])
        .unwrap_err();
    assert!(matches!(err, AnalysisError::ValueMismatch { .. }));
}

#[test]
fn test_three_equal_values_each_side() {
    // Singleton/singleton (1), one 2+1 split against each 2+1 split
    // (3 x 3), merged/merged (1): 11 valid mappings.
    let result = analyze(&[5, 5, 5], &[5, 5, 5]);
    assert_eq!(result.combinations, 11);
    assert_eq!(result.classification, TxClass::AmbiguousHigh);
    assert!((result.entropy - (11f64).log2()).abs() < 1e-12);
}

#[test]
fn test_batch_summary() {
    let analyzer = BoltzmannAnalyzer::default();
    let records = vec![
        make_record(1, &[50], &[30, 20]),
        make_record(2, &[10, 10], &[10, 10]),
        make_record(3, &[100], &[99]), // mismatch, filtered from summary
    ];

    let results = analyzer.batch_analyze(&records);
    assert_eq!(results.len(), 3);

    let summary = summarize_entropy(
        results
            .values()
            .map(|r| r.as_ref().ok().map(|e| e.entropy)),
    )
    .unwrap();
    assert_eq!(summary.count, 2);
    assert_eq!(summary.min, 0.0);
    assert_eq!(summary.max, 1.0);
    assert_eq!(summary.median, 0.5);
}

#[test]
fn test_ceiling_is_enforced() {
    let analyzer = BoltzmannAnalyzer::new(AnalysisLimits::new(4, 1_000_000));
    let err = analyzer.analyze(&[1, 2, 3], &[3, 3]).unwrap_err();
    assert!(matches!(err, AnalysisError::CombinatorialExplosion { .. }));
}

// ─────────────────────────────────────────────────────────────────────────────
// PARTITION COMPLETENESS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_partition_counts_are_bell_numbers() {
    let expected = [1u128, 1, 2, 5, 15, 52];
    for (n, &bell) in expected.iter().enumerate() {
        assert_eq!(partitions_of(n).count() as u128, bell);
        assert_eq!(bell_number(n), bell);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PROPERTIES
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    /// entropy == log2(combinations) and combinations >= 1 whenever the
    /// sums agree.
    #[test]
    fn prop_entropy_is_log2(values in prop::collection::vec(1u64..=25, 1..=4)) {
        // Reversing preserves the sum, so the pair is always analyzable.
        let outputs: Vec<u64> = values.iter().rev().copied().collect();
        let result = BoltzmannAnalyzer::default()
            .analyze(&values, &outputs)
            .expect("sums agree");

        prop_assert!(result.combinations >= 1);
        let expected = if result.combinations <= 1 {
            0.0
        } else {
            (result.combinations as f64).log2()
        };
        prop_assert!((result.entropy - expected).abs() < 1e-12);
    }

    /// Every valid mapping is two genuine partitions with matching
    /// sorted block sums, and the deterministic links survive in each
    /// mapping's induced link set.
    #[test]
    fn prop_mappings_and_links_consistent(values in prop::collection::vec(1u64..=25, 1..=4)) {
        let outputs: Vec<u64> = values.iter().rev().copied().collect();
        let result = BoltzmannAnalyzer::default()
            .analyze(&values, &outputs)
            .expect("sums agree");

        for mapping in &result.valid_mappings {
            prop_assert!(mapping.input_partition.is_partition_of(values.len()));
            prop_assert!(mapping.output_partition.is_partition_of(outputs.len()));
            prop_assert_eq!(
                mapping.input_partition.sum_signature(&values),
                mapping.output_partition.sum_signature(&outputs)
            );

            let implied: BTreeSet<_> = mapping.induced_links(&values, &outputs);
            for link in &result.deterministic_links {
                prop_assert!(implied.contains(link));
            }
        }
    }

    /// A unique mapping makes every implied link deterministic.
    #[test]
    fn prop_unique_mapping_links_all_deterministic(
        values in prop::collection::vec(1u64..=25, 1..=4)
    ) {
        let outputs: Vec<u64> = values.iter().rev().copied().collect();
        let result = BoltzmannAnalyzer::default()
            .analyze(&values, &outputs)
            .expect("sums agree");

        if result.combinations == 1 {
            let implied = result.valid_mappings[0].induced_links(&values, &outputs);
            let links: BTreeSet<_> = result.deterministic_links.iter().copied().collect();
            prop_assert_eq!(links, implied);
        }
    }

    /// Mismatched sums always fail, never return a numeric result.
    #[test]
    fn prop_mismatch_always_fails(
        values in prop::collection::vec(1u64..=25, 1..=4),
        extra in 1u64..=10
    ) {
        let mut outputs: Vec<u64> = values.clone();
        outputs[0] += extra;
        let err = BoltzmannAnalyzer::default()
            .analyze(&values, &outputs)
            .unwrap_err();
        let is_value_mismatch = matches!(err, AnalysisError::ValueMismatch { .. });
        prop_assert!(is_value_mismatch);
    }
}
