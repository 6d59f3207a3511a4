//! PNG export for generated noise buffers.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageBuffer, ImageEncoder, Luma};
use thiserror::Error;

/// Errors that can occur during PNG export.
#[derive(Error, Debug)]
pub enum PngExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid value range: min ({0}) >= max ({1})")]
    InvalidValueRange(f32, f32),
    #[error("Buffer holds {actual} samples but {width}x{height}x{depth} needs {expected}")]
    BufferSize {
        width: u32,
        height: u32,
        depth: u32,
        expected: usize,
        actual: usize,
    },
}

/// Options for PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// Minimum value for normalization.
    pub min_value: f32,
    /// Maximum value for normalization.
    pub max_value: f32,
    /// Write `1 - v` instead of `v`, for inverse cellular lookup textures.
    pub invert: bool,
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 1.0,
            invert: false,
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

impl PngExportOptions {
    /// Creates options with the normalization range taken from the data.
    pub fn auto_range(data: &[f32]) -> Self {
        let min = data.iter().cloned().fold(f32::MAX, f32::min);
        let max = data.iter().cloned().fold(f32::MIN, f32::max);
        Self {
            min_value: min,
            max_value: max,
            ..Default::default()
        }
    }
}

/// Exports a 2D noise buffer as a 16-bit grayscale PNG.
///
/// `data` must be length `width * height` in row-major order, X fastest.
/// Values are normalized into the options' range, clamped, and quantized to
/// 16 bits.
///
/// # Errors
/// Invalid normalization range, mismatched buffer length, or I/O and
/// encoding failures.
pub fn export_image_png(
    width: u32,
    height: u32,
    data: &[f32],
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), PngExportError> {
    let min = options.min_value;
    let max = options.max_value;

    if min >= max {
        return Err(PngExportError::InvalidValueRange(min, max));
    }

    let expected = width as usize * height as usize;
    if data.len() != expected {
        return Err(PngExportError::BufferSize {
            width,
            height,
            depth: 1,
            expected,
            actual: data.len(),
        });
    }

    let range = max - min;
    let mut img: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let value = data[(y * width + x) as usize];
            let mut normalized = ((value - min) / range).clamp(0.0, 1.0);
            if options.invert {
                normalized = 1.0 - normalized;
            }
            let quantized = (normalized * 65535.0) as u16;
            img.put_pixel(x, y, Luma([quantized]));
        }
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);

    let raw_data = img.as_raw();
    let byte_slice: &[u8] = bytemuck::cast_slice(raw_data);

    encoder.write_image(byte_slice, width, height, image::ExtendedColorType::L16)?;

    Ok(())
}

/// Exports a 3D noise buffer as one PNG per Z slice.
///
/// Files are named using the pattern `{base_name}_z{k:03}.png` inside
/// `output_dir`, which is created if missing. `data` must be length
/// `width * height * depth` with X fastest and Z slowest.
///
/// # Errors
/// Same as [`export_image_png`]; the first failing slice aborts the export.
pub fn export_volume_png(
    width: u32,
    height: u32,
    depth: u32,
    data: &[f32],
    output_dir: &Path,
    base_name: &str,
    options: &PngExportOptions,
) -> Result<(), PngExportError> {
    let slice_len = width as usize * height as usize;
    let expected = slice_len * depth as usize;
    if data.len() != expected {
        return Err(PngExportError::BufferSize {
            width,
            height,
            depth,
            expected,
            actual: data.len(),
        });
    }

    std::fs::create_dir_all(output_dir)?;

    for k in 0..depth as usize {
        let slice = &data[k * slice_len..(k + 1) * slice_len];
        let path = output_dir.join(format!("{}_z{:03}.png", base_name, k));
        export_image_png(width, height, slice, &path, options)?;
    }

    Ok(())
}
