//! Rasterizes composited noise into caller-provided image buffers.

use glam::{UVec2, UVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::filter::{apply_contrast, remap};
use crate::noise::{sample_octaves, FractalConfig, NoiseError, PermutationTable};

/// Parameters for rasterizing a noise field into a 2D or 3D image.
///
/// The output buffer layout is row-major with X varying fastest, then Y,
/// then Z: sample `(i, j, k)` lands at `k * res_y * res_x + j * res_x + i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageParams {
    /// Samples per axis. Use a Z of 1 for 2D images.
    pub resolution: UVec3,
    /// World-space extent per axis. The scale doubles as the tiling period,
    /// so the generated image wraps seamlessly at its own edges.
    pub scale: UVec3,
    /// Octave compositing parameters.
    pub fractal: FractalConfig,
    /// S-curve strength, strictly inside `(-1, 1)`.
    pub contrast: f32,
    /// Expected range of the raw octave sum, remapped onto
    /// `[remap_min, remap_max]` before the contrast curve.
    pub value_min: f32,
    pub value_max: f32,
    pub remap_min: f32,
    pub remap_max: f32,
}

impl Default for ImageParams {
    fn default() -> Self {
        Self {
            resolution: UVec3::new(128, 128, 1),
            scale: UVec3::new(10, 10, 10),
            fractal: FractalConfig::default(),
            contrast: 0.5,
            value_min: 0.0,
            value_max: 1.0,
            remap_min: 0.0,
            remap_max: 1.0,
        }
    }
}

impl ImageParams {
    /// Creates 2D parameters with a single Z slice.
    pub fn new_2d(resolution: UVec2, scale: UVec2) -> Self {
        Self {
            resolution: resolution.extend(1),
            scale: scale.extend(1),
            ..Default::default()
        }
    }

    /// Creates 3D parameters.
    pub fn new_3d(resolution: UVec3, scale: UVec3) -> Self {
        Self {
            resolution,
            scale,
            ..Default::default()
        }
    }

    /// Total number of samples the output buffer must hold.
    pub fn pixel_count(&self) -> usize {
        self.resolution.x as usize * self.resolution.y as usize * self.resolution.z as usize
    }

    fn validate(&self, buffer_len: usize) -> Result<(), NoiseError> {
        if self.resolution.x == 0 || self.resolution.y == 0 || self.resolution.z == 0 {
            return Err(NoiseError::ZeroResolution(self.resolution));
        }
        if self.scale.x == 0 || self.scale.y == 0 || self.scale.z == 0 {
            return Err(NoiseError::ZeroTilingPeriod(self.scale));
        }
        if self.value_min == self.value_max {
            return Err(NoiseError::DegenerateRange(self.value_min));
        }
        if self.contrast <= -1.0 || self.contrast >= 1.0 {
            return Err(NoiseError::ContrastOutOfRange(self.contrast));
        }
        let expected = self.pixel_count();
        if buffer_len != expected {
            return Err(NoiseError::BufferSize {
                expected,
                actual: buffer_len,
            });
        }
        Ok(())
    }
}

/// Fills `out` with a 3D noise image.
///
/// Walks the grid with Z outermost and X innermost, matching the buffer
/// layout. The world coordinate on each axis is
/// `index * scale / resolution`, computed in floating point, so the image
/// spans `[0, scale)` per axis and tiles with period `scale`. Every sample
/// runs octave compositing, then [`remap`], then [`apply_contrast`].
///
/// The buffer is caller-owned and must hold exactly
/// [`pixel_count`](ImageParams::pixel_count) values; it is never resized.
///
/// # Errors
/// Any [`NoiseError`] from parameter validation or octave compositing. `out`
/// is untouched on validation errors.
pub fn fill_image_3d(
    table: &PermutationTable,
    params: &ImageParams,
    out: &mut [f32],
) -> Result<(), NoiseError> {
    params.validate(out.len())?;

    let resolution = params.resolution;
    let scale = params.scale;

    let mut pixel = 0usize;
    for k in 0..resolution.z {
        let z = k as f32 * scale.z as f32 / resolution.z as f32;
        for j in 0..resolution.y {
            let y = j as f32 * scale.y as f32 / resolution.y as f32;
            for i in 0..resolution.x {
                let x = i as f32 * scale.x as f32 / resolution.x as f32;

                let mut value =
                    sample_octaves(table, Vec3::new(x, y, z), scale, &params.fractal)?;
                value = remap(
                    value,
                    params.value_min,
                    params.value_max,
                    params.remap_min,
                    params.remap_max,
                );
                value = apply_contrast(value, params.contrast);

                out[pixel] = value;
                pixel += 1;
            }
        }
    }

    Ok(())
}

/// Fills `out` with a 2D noise image.
///
/// Exactly [`fill_image_3d`] with a single Z slice: the Z components of
/// `resolution` and `scale` are overridden to 1, so every sample is taken at
/// `z = 0` and the buffer must hold `resolution.x * resolution.y` values.
pub fn fill_image_2d(
    table: &PermutationTable,
    params: &ImageParams,
    out: &mut [f32],
) -> Result<(), NoiseError> {
    let mut params = params.clone();
    params.resolution.z = 1;
    params.scale.z = 1;
    fill_image_3d(table, &params, out)
}
