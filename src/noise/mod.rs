//! Seeded, tileable noise samplers.
//!
//! A [`PermutationTable`] carries all the per-seed state; the samplers are
//! pure functions over it, so independent generators with different seeds can
//! coexist and sampling is freely shareable across threads as long as nothing
//! rebuilds the table mid-generation.

use glam::UVec3;
use thiserror::Error;

mod fractal;
mod perlin;
mod permutation;
mod worley;

pub use fractal::{sample_octaves, FractalConfig, NoiseKind};
pub use perlin::sample_perlin;
pub use permutation::{PermutationTable, PERMUTATION_SIZE};
pub use worley::sample_worley;

/// Errors raised by the samplers and the image rasterizer.
///
/// Everything here is an invalid parameter of a single call; no shared state
/// is touched on the error path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    #[error("tiling period must be at least 1 on every axis, got {0}")]
    ZeroTilingPeriod(UVec3),
    #[error("resolution must be at least 1 on every axis, got {0}")]
    ZeroResolution(UVec3),
    #[error("octave count must truncate to at least 1, got {0}")]
    InvalidOctaveCount(f32),
    #[error("value range is degenerate: min and max are both {0}")]
    DegenerateRange(f32),
    #[error("contrast must lie strictly inside (-1, 1), got {0}")]
    ContrastOutOfRange(f32),
    #[error("output buffer holds {actual} samples but the resolution needs {expected}")]
    BufferSize { expected: usize, actual: usize },
}

pub(crate) fn validate_tiles(tiles: UVec3) -> Result<(), NoiseError> {
    if tiles.x == 0 || tiles.y == 0 || tiles.z == 0 {
        return Err(NoiseError::ZeroTilingPeriod(tiles));
    }
    Ok(())
}
