//! Seeded permutation table backing every hash lookup in the samplers.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of distinct hash values produced by a lookup.
pub const PERMUTATION_SIZE: usize = 256;

/// A seeded pseudo-random permutation of `0..256`, stored in the classic
/// doubled 512-slot layout.
///
/// Slots `[0, 256)` hold a permutation of `{0, ..., 255}`. Slots `[256, 511)`
/// repeat slots `[0, 255)`; the copy is one element short of a full cyclic
/// duplicate, so slot 511 keeps its zero fill value. [`hash`](Self::hash)
/// only ever indexes the lower half, so the upper half exists for layout
/// compatibility with double-indexed Perlin tables.
///
/// The table is immutable after construction. Reseeding means building a new
/// table, which also makes independent generators with different seeds cheap
/// to hold side by side.
#[derive(Debug, Clone)]
pub struct PermutationTable {
    table: [u32; PERMUTATION_SIZE * 2],
}

impl PermutationTable {
    /// Builds the table for `seed`. The same seed always yields the same
    /// table, on every platform.
    pub fn new(seed: u32) -> Self {
        let mut table = [0u32; PERMUTATION_SIZE * 2];
        for (i, slot) in table.iter_mut().take(PERMUTATION_SIZE).enumerate() {
            *slot = i as u32;
        }

        // One swap per slot against a random partner, 256 draws total.
        let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
        for i in 0..PERMUTATION_SIZE {
            let j = (rng.next_u32() as usize) % PERMUTATION_SIZE;
            table.swap(i, j);
        }

        for i in 0..PERMUTATION_SIZE - 1 {
            table[PERMUTATION_SIZE + i] = table[i];
        }

        Self { table }
    }

    /// Hashes `value` into `0..256` by table lookup.
    ///
    /// Any `u32` is accepted; the value is reduced modulo 256 first. Passing
    /// an already-hashed value is how the samplers chain lookups to fold
    /// several coordinates into one hash.
    #[inline]
    pub fn hash(&self, value: u32) -> u32 {
        self.table[value as usize % PERMUTATION_SIZE]
    }
}

/// Seeds with 0, so a generator that was never explicitly seeded still
/// produces well-defined output.
impl Default for PermutationTable {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_half_is_a_permutation() {
        for seed in [0u32, 1, 42, 0xDEAD_BEEF] {
            let table = PermutationTable::new(seed);
            let mut values: Vec<u32> = table.table[..PERMUTATION_SIZE].to_vec();
            values.sort_unstable();
            let expected: Vec<u32> = (0..PERMUTATION_SIZE as u32).collect();
            assert_eq!(values, expected, "seed {} is not a bijection", seed);
        }
    }

    #[test]
    fn test_upper_half_duplicates_all_but_last_slot() {
        let table = PermutationTable::new(7);
        for i in 0..PERMUTATION_SIZE - 1 {
            assert_eq!(
                table.table[PERMUTATION_SIZE + i],
                table.table[i],
                "slot {} not mirrored",
                i
            );
        }
        // The copy is 255 elements; the final slot keeps its fill value.
        assert_eq!(table.table[PERMUTATION_SIZE * 2 - 1], 0);
    }

    #[test]
    fn test_same_seed_same_table() {
        let a = PermutationTable::new(12345);
        let b = PermutationTable::new(12345);
        assert_eq!(a.table[..], b.table[..]);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = PermutationTable::new(1);
        let b = PermutationTable::new(2);
        assert_ne!(a.table[..], b.table[..]);
    }

    #[test]
    fn test_default_is_seed_zero() {
        let default = PermutationTable::default();
        let zero = PermutationTable::new(0);
        assert_eq!(default.table[..], zero.table[..]);
    }

    #[test]
    fn test_hash_stays_in_range() {
        let table = PermutationTable::new(99);
        for value in [0u32, 1, 255, 256, 511, 1000, u32::MAX] {
            assert!(table.hash(value) < PERMUTATION_SIZE as u32);
        }
    }

    #[test]
    fn test_hash_reduces_modulo_permutation_size() {
        let table = PermutationTable::new(3);
        assert_eq!(table.hash(5), table.hash(5 + 256));
        assert_eq!(table.hash(200), table.hash(200 + 512));
    }
}
