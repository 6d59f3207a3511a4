//! Multi-octave compositing of the base samplers (fractal Brownian motion).

use glam::{UVec3, Vec3};
use serde::{Deserialize, Serialize};

use super::permutation::PermutationTable;
use super::{sample_perlin, sample_worley, NoiseError};

/// Which base sampler an octave stack draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoiseKind {
    Perlin,
    Worley,
}

/// Configuration for multi-octave fractal compositing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractalConfig {
    /// Base sampler for every octave.
    pub kind: NoiseKind,
    /// Octave count. Only the integer part drives the loop: 4.7 octaves
    /// behaves as 4.
    pub octaves: f32,
    /// Amplitude decay per octave, typically in `(0, 1]`.
    pub persistence: f32,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            kind: NoiseKind::Perlin,
            octaves: 4.0,
            persistence: 0.5,
        }
    }
}

impl FractalConfig {
    /// Creates a configuration for the given sampler with default layering.
    pub fn with_kind(kind: NoiseKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }
}

/// Composites octaves of the configured sampler at `pos`.
///
/// Each octave doubles the frequency, which scales both the sample position
/// and the tiling periods, so every octave tiles with the same world-space
/// period as the first. Amplitudes decay by `persistence` and the sum is
/// normalized by the total amplitude, keeping the result in the base
/// sampler's range.
///
/// # Errors
/// [`NoiseError::InvalidOctaveCount`] if the truncated octave count is below
/// 1 (the normalization would divide by zero);
/// [`NoiseError::ZeroTilingPeriod`] if any component of `tiles` is zero.
pub fn sample_octaves(
    table: &PermutationTable,
    pos: Vec3,
    tiles: UVec3,
    config: &FractalConfig,
) -> Result<f32, NoiseError> {
    let count = config.octaves as i64;
    if count < 1 {
        return Err(NoiseError::InvalidOctaveCount(config.octaves));
    }

    let mut total = 0.0f32;
    let mut frequency: u32 = 1;
    let mut amplitude = 1.0f32;
    let mut max_value = 0.0f32;

    for _ in 0..count {
        let octave_pos = pos * frequency as f32;
        let octave_tiles = UVec3::new(
            tiles.x.wrapping_mul(frequency),
            tiles.y.wrapping_mul(frequency),
            tiles.z.wrapping_mul(frequency),
        );

        let sample = match config.kind {
            NoiseKind::Perlin => sample_perlin(table, octave_pos, octave_tiles)?,
            NoiseKind::Worley => sample_worley(table, octave_pos, octave_tiles)?,
        };

        total += sample * amplitude;
        max_value += amplitude;

        amplitude *= config.persistence;
        frequency = frequency.wrapping_mul(2);
    }

    Ok(total / max_value)
}
