//! Partition and mapping types for the Boltzmann method.

use serde::{Deserialize, Serialize};

/// A set partition of the indices `0..n` of a value list.
///
/// Blocks are non-empty, pairwise disjoint, and exhaustive. Canonical form:
/// each block is sorted ascending and blocks are ordered by their smallest
/// element, so structurally equal partitions compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Partition {
    /// Index blocks in canonical order.
    pub blocks: Vec<Vec<usize>>,
}

impl Partition {
    /// Create a partition from blocks, normalizing to canonical form.
    pub fn new(mut blocks: Vec<Vec<usize>>) -> Self {
        for block in &mut blocks {
            block.sort_unstable();
        }
        blocks.retain(|b| !b.is_empty());
        blocks.sort_by_key(|b| b[0]);
        Self { blocks }
    }

    /// The partition of the empty index set.
    pub fn empty() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Number of blocks.
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Total number of indices covered.
    pub fn num_indices(&self) -> usize {
        self.blocks.iter().map(|b| b.len()).sum()
    }

    /// Check the partition invariant against the index set `0..n`:
    /// blocks non-empty, pairwise disjoint, union equal to `0..n`.
    pub fn is_partition_of(&self, n: usize) -> bool {
        let mut seen = vec![false; n];
        for block in &self.blocks {
            if block.is_empty() {
                return false;
            }
            for &idx in block {
                if idx >= n || seen[idx] {
                    return false;
                }
                seen[idx] = true;
            }
        }
        seen.iter().all(|&s| s)
    }

    /// Sum of `values` over each block, in block order.
    pub fn block_sums(&self, values: &[u64]) -> Vec<u64> {
        self.blocks
            .iter()
            .map(|block| block.iter().map(|&i| values[i]).sum())
            .collect()
    }

    /// Sorted block sums: the signature used to match input partitions
    /// against output partitions.
    pub fn sum_signature(&self, values: &[u64]) -> Vec<u64> {
        let mut sums = self.block_sums(values);
        sums.sort_unstable();
        sums
    }
}

/// One plausible interpretation of a transaction: a pairing of an input
/// partition with an output partition whose sorted block sums agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    /// Partition of the input indices.
    pub input_partition: Partition,
    /// Partition of the output indices.
    pub output_partition: Partition,
}

impl Mapping {
    /// Create a mapping. Callers must have checked signature equality.
    pub fn new(input_partition: Partition, output_partition: Partition) -> Self {
        Self {
            input_partition,
            output_partition,
        }
    }

    /// Pair input blocks with output blocks of equal sum.
    ///
    /// Both sides are ordered by (block sum, original block position) and
    /// paired elementwise. When several blocks share a sum the tie is broken
    /// by original block order. This stable pairing is a deliberate
    /// interpretation: the Boltzmann method only fixes the multiset of block
    /// sums, not which equal-sum block funds which.
    pub fn paired_blocks<'a>(
        &'a self,
        input_values: &[u64],
        output_values: &[u64],
    ) -> Vec<(&'a [usize], &'a [usize])> {
        let mut ins: Vec<(u64, usize)> = self
            .input_partition
            .blocks
            .iter()
            .enumerate()
            .map(|(pos, block)| (block.iter().map(|&i| input_values[i]).sum(), pos))
            .collect();
        let mut outs: Vec<(u64, usize)> = self
            .output_partition
            .blocks
            .iter()
            .enumerate()
            .map(|(pos, block)| (block.iter().map(|&i| output_values[i]).sum(), pos))
            .collect();
        ins.sort_unstable();
        outs.sort_unstable();

        ins.iter()
            .zip(outs.iter())
            .map(|(&(_, in_pos), &(_, out_pos))| {
                (
                    self.input_partition.blocks[in_pos].as_slice(),
                    self.output_partition.blocks[out_pos].as_slice(),
                )
            })
            .collect()
    }

    /// All (input index, output index) links implied by this mapping:
    /// the cross product of every paired block pair.
    pub fn induced_links(
        &self,
        input_values: &[u64],
        output_values: &[u64],
    ) -> std::collections::BTreeSet<(usize, usize)> {
        let mut links = std::collections::BTreeSet::new();
        for (in_block, out_block) in self.paired_blocks(input_values, output_values) {
            for &i in in_block {
                for &o in out_block {
                    links.insert((i, o));
                }
            }
        }
        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form() {
        let a = Partition::new(vec![vec![2, 0], vec![1]]);
        let b = Partition::new(vec![vec![1], vec![0, 2]]);
        assert_eq!(a, b);
        assert_eq!(a.blocks, vec![vec![0, 2], vec![1]]);
    }

    #[test]
    fn test_partition_invariant() {
        let p = Partition::new(vec![vec![0, 2], vec![1]]);
        assert!(p.is_partition_of(3));
        assert!(!p.is_partition_of(4)); // index 3 uncovered
        assert!(!p.is_partition_of(2)); // index 2 out of range

        let overlapping = Partition {
            blocks: vec![vec![0, 1], vec![1]],
        };
        assert!(!overlapping.is_partition_of(2));
    }

    #[test]
    fn test_sum_signature() {
        let p = Partition::new(vec![vec![0], vec![1, 2]]);
        assert_eq!(p.block_sums(&[50, 30, 20]), vec![50, 50]);
        assert_eq!(p.sum_signature(&[50, 10, 20]), vec![30, 50]);
    }

    #[test]
    fn test_paired_blocks_by_sum() {
        // inputs [30, 20] as singletons; outputs [20, 30] as singletons.
        let mapping = Mapping::new(
            Partition::new(vec![vec![0], vec![1]]),
            Partition::new(vec![vec![0], vec![1]]),
        );
        let pairs = mapping.paired_blocks(&[30, 20], &[20, 30]);
        // Sum 20: input block {1} with output block {0}.
        assert_eq!(pairs[0], (&[1usize][..], &[0usize][..]));
        // Sum 30: input block {0} with output block {1}.
        assert_eq!(pairs[1], (&[0usize][..], &[1usize][..]));
    }

    #[test]
    fn test_induced_links_cross_product() {
        // Whole-set partitions: every input links to every output.
        let mapping = Mapping::new(
            Partition::new(vec![vec![0, 1]]),
            Partition::new(vec![vec![0, 1]]),
        );
        let links = mapping.induced_links(&[10, 10], &[10, 10]);
        assert_eq!(links.len(), 4);
    }
}
