//! Set-partition enumeration.
//!
//! [`partitions_of`] yields every set partition of the index set `0..n`
//! exactly once, lazily, using restricted growth strings: a string
//! `a[0..n]` with `a[0] = 0` and `a[i] <= max(a[0..i]) + 1` assigns each
//! index to a block label, and iterating strings in lexicographic order
//! enumerates the Bell-number-many partitions without duplicates.
//!
//! ## Scalability ceiling
//!
//! The Bell number grows super-exponentially (B(10) = 115_975,
//! B(15) ≈ 1.4e9). Partition enumeration is the dominant cost of entropy
//! analysis and is a hard ceiling: callers must bound the index count
//! before enumerating (see `AnalysisLimits`).

use crate::types::Partition;

/// Lazy iterator over all set partitions of `0..n`.
///
/// Produced partitions are in canonical form (blocks ordered by smallest
/// element, each block ascending). Order of the sequence is not part of
/// the contract; exhaustiveness and uniqueness are.
#[derive(Debug, Clone)]
pub struct Partitions {
    /// Restricted growth string; `labels[i]` is the block of index `i`.
    labels: Vec<usize>,
    /// Set once every string has been yielded.
    done: bool,
    /// Empty set needs one yield (the empty partition) before finishing.
    yielded_empty: bool,
}

/// Enumerate all set partitions of the index set `0..n`.
pub fn partitions_of(n: usize) -> Partitions {
    Partitions {
        labels: vec![0; n],
        done: false,
        yielded_empty: false,
    }
}

impl Partitions {
    fn current(&self) -> Partition {
        let num_blocks = self.labels.iter().max().map_or(0, |&m| m + 1);
        let mut blocks: Vec<Vec<usize>> = vec![Vec::new(); num_blocks];
        for (idx, &label) in self.labels.iter().enumerate() {
            blocks[label].push(idx);
        }
        // Labels are assigned in first-occurrence order, so blocks are
        // already canonical: ordered by smallest element, ascending within.
        Partition { blocks }
    }

    /// Advance to the lexicographic successor string, or mark done.
    fn advance(&mut self) {
        let n = self.labels.len();
        // caps[i] = max(a[0..i]) + 1, the largest label allowed at i.
        let mut caps = vec![1usize; n];
        let mut prefix_max = 0usize;
        for i in 1..n {
            prefix_max = prefix_max.max(self.labels[i - 1]);
            caps[i] = prefix_max + 1;
        }
        // Increment the rightmost position that has headroom, zero the tail.
        for i in (1..n).rev() {
            if self.labels[i] < caps[i] {
                self.labels[i] += 1;
                for label in &mut self.labels[i + 1..] {
                    *label = 0;
                }
                return;
            }
        }
        self.done = true;
    }
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        if self.done {
            return None;
        }
        if self.labels.is_empty() {
            if self.yielded_empty {
                return None;
            }
            self.yielded_empty = true;
            self.done = true;
            return Some(Partition::empty());
        }
        let partition = self.current();
        self.advance();
        Some(partition)
    }
}

/// The n-th Bell number: how many partitions `partitions_of(n)` yields.
///
/// Computed via the Bell triangle. Panics on overflow past u128, which
/// happens far beyond any enumerable size.
pub fn bell_number(n: usize) -> u128 {
    let mut row: Vec<u128> = vec![1];
    for _ in 0..n {
        let mut next = Vec::with_capacity(row.len() + 1);
        next.push(*row.last().expect("row is never empty"));
        for &value in &row {
            let last = *next.last().expect("row is never empty");
            next.push(last + value);
        }
        row = next;
    }
    row[0]
}
