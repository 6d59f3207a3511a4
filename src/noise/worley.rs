//! Tileable 3D cellular (Worley) noise.

use glam::{IVec3, UVec3, Vec3};

use super::permutation::{PermutationTable, PERMUTATION_SIZE};
use super::{validate_tiles, NoiseError};

/// Floor modulo: wraps `k` into `[0, n)`, with negative values wrapping up
/// from the top.
#[inline]
fn wrap_cell(k: i32, n: u32) -> u32 {
    k.rem_euclid(n as i32) as u32
}

/// Folds a wrapped cell coordinate and a per-axis discriminator into one hash
/// through four chained lookups.
#[inline]
fn hash_coord(table: &PermutationTable, x: u32, y: u32, z: u32, discriminator: u32) -> u32 {
    table.hash(
        table
            .hash(table.hash(table.hash(x).wrapping_add(y)).wrapping_add(z))
            .wrapping_add(discriminator),
    )
}

/// Deterministic jitter of the feature point inside `cell`, each component in
/// `[0, 1)`.
///
/// The cell is wrapped per axis first, so cells one period apart share a
/// feature point and the field tiles.
fn feature_offset(table: &PermutationTable, cell: IVec3, tiles: UVec3) -> Vec3 {
    let x = wrap_cell(cell.x, tiles.x);
    let y = wrap_cell(cell.y, tiles.y);
    let z = wrap_cell(cell.z, tiles.z);

    Vec3::new(
        hash_coord(table, x, y, z, 0) as f32 / PERMUTATION_SIZE as f32,
        hash_coord(table, x, y, z, 1) as f32 / PERMUTATION_SIZE as f32,
        hash_coord(table, x, y, z, 2) as f32 / PERMUTATION_SIZE as f32,
    )
}

/// Samples tileable cellular noise at `pos`: the Euclidean distance from the
/// sample point to the nearest jittered feature point in the 3x3x3 cell
/// neighborhood, capped at 1.0.
///
/// Small tiling periods make wrapped neighbors alias nearby cells and repeat
/// their jitter; that repetition is the tiling, not an artifact.
///
/// # Errors
/// [`NoiseError::ZeroTilingPeriod`] if any component of `tiles` is zero.
pub fn sample_worley(
    table: &PermutationTable,
    pos: Vec3,
    tiles: UVec3,
) -> Result<f32, NoiseError> {
    validate_tiles(tiles)?;

    let start_cell = pos.floor().as_ivec3();
    let local_pos = pos - start_cell.as_vec3();

    let mut min_distance = 1.0f32;

    for i in -1..=1 {
        for j in -1..=1 {
            for k in -1..=1 {
                let offset = IVec3::new(i, j, k);
                let feature = feature_offset(table, start_cell + offset, tiles)
                    + Vec3::new(i as f32, j as f32, k as f32);
                min_distance = min_distance.min(feature.distance(local_pos));
            }
        }
    }

    Ok(min_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    const TILES: UVec3 = UVec3::splat(256);

    #[test]
    fn test_wrap_cell_handles_negatives() {
        assert_eq!(wrap_cell(5, 4), 1);
        assert_eq!(wrap_cell(4, 4), 0);
        assert_eq!(wrap_cell(-1, 4), 3);
        assert_eq!(wrap_cell(-5, 4), 3);
        assert_eq!(wrap_cell(0, 1), 0);
    }

    #[test]
    fn test_feature_offset_in_unit_cube() {
        let table = PermutationTable::new(21);
        for cell in [
            IVec3::new(0, 0, 0),
            IVec3::new(-3, 7, 100),
            IVec3::new(255, -255, 1),
        ] {
            let offset = feature_offset(&table, cell, TILES);
            for component in [offset.x, offset.y, offset.z] {
                assert!((0.0..1.0).contains(&component), "{:?} -> {}", cell, component);
            }
        }
    }

    #[test]
    fn test_output_is_non_negative_and_capped() {
        let table = PermutationTable::new(42);
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        for _ in 0..1000 {
            let pos = Vec3::new(
                rng.random::<f32>() * 64.0 - 32.0,
                rng.random::<f32>() * 64.0 - 32.0,
                rng.random::<f32>() * 64.0 - 32.0,
            );
            let value = sample_worley(&table, pos, TILES).unwrap();
            assert!((0.0..=1.0).contains(&value), "value {} at {:?}", value, pos);
        }
    }

    #[test]
    fn test_deterministic() {
        let table = PermutationTable::new(8);
        let pos = Vec3::new(4.2, 9.7, 0.3);
        let a = sample_worley(&table, pos, TILES).unwrap();
        let b = sample_worley(&table, pos, TILES).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let pos = Vec3::new(4.2, 9.7, 0.3);
        let a = sample_worley(&PermutationTable::new(1), pos, TILES).unwrap();
        let b = sample_worley(&PermutationTable::new(2), pos, TILES).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_tiles_at_integer_periods() {
        let table = PermutationTable::new(5);
        let tiles = UVec3::splat(4);
        let pos = Vec3::new(1.25, 2.5, 3.75);

        let base = sample_worley(&table, pos, tiles).unwrap();
        let shifted_x = sample_worley(&table, pos + Vec3::new(4.0, 0.0, 0.0), tiles).unwrap();
        let shifted_y = sample_worley(&table, pos + Vec3::new(0.0, 4.0, 0.0), tiles).unwrap();
        let shifted_z = sample_worley(&table, pos + Vec3::new(0.0, 0.0, 4.0), tiles).unwrap();

        assert_eq!(base, shifted_x);
        assert_eq!(base, shifted_y);
        assert_eq!(base, shifted_z);
    }

    #[test]
    fn test_zero_tiling_period_rejected() {
        let table = PermutationTable::default();
        let result = sample_worley(&table, Vec3::ZERO, UVec3::new(0, 4, 4));
        assert!(matches!(result, Err(NoiseError::ZeroTilingPeriod(_))));
    }

    #[test]
    fn test_negative_coordinates_sample_cleanly() {
        let table = PermutationTable::new(17);
        let value = sample_worley(&table, Vec3::new(-7.5, -0.25, -123.9), TILES).unwrap();
        assert!((0.0..=1.0).contains(&value));
    }
}
