//! RAW format export for game engine imports.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Errors that can occur during RAW export.
#[derive(Error, Debug)]
pub enum RawExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid value range: min ({0}) >= max ({1})")]
    InvalidValueRange(f32, f32),
}

/// RAW export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawFormat {
    /// 16-bit unsigned integer, little-endian (Unity default).
    #[default]
    R16LittleEndian,
    /// 16-bit unsigned integer, big-endian.
    R16BigEndian,
    /// 32-bit float, little-endian (full precision, no normalization).
    R32Float,
}

/// Exports a noise buffer as a RAW dump.
///
/// 2D and 3D buffers share this path; a volume is written as its slices back
/// to back, X fastest. R16 formats normalize into `[min_value, max_value]`
/// and clamp; R32 writes the floats as-is.
///
/// # Errors
/// Invalid normalization range (R16 only) or I/O failures.
pub fn export_raw(
    data: &[f32],
    path: &Path,
    format: RawFormat,
    min_value: f32,
    max_value: f32,
) -> Result<(), RawExportError> {
    if format != RawFormat::R32Float && min_value >= max_value {
        return Err(RawExportError::InvalidValueRange(min_value, max_value));
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let range = max_value - min_value;

    match format {
        RawFormat::R16LittleEndian => {
            for &value in data {
                let normalized = ((value - min_value) / range).clamp(0.0, 1.0);
                let quantized = (normalized * 65535.0) as u16;
                writer.write_all(&quantized.to_le_bytes())?;
            }
        }
        RawFormat::R16BigEndian => {
            for &value in data {
                let normalized = ((value - min_value) / range).clamp(0.0, 1.0);
                let quantized = (normalized * 65535.0) as u16;
                writer.write_all(&quantized.to_be_bytes())?;
            }
        }
        RawFormat::R32Float => {
            for &value in data {
                writer.write_all(&value.to_le_bytes())?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Returns the expected file size for a RAW export of `sample_count` values.
pub fn expected_file_size(sample_count: usize, format: RawFormat) -> u64 {
    let per_sample = match format {
        RawFormat::R16LittleEndian | RawFormat::R16BigEndian => 2,
        RawFormat::R32Float => 4,
    };
    sample_count as u64 * per_sample
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_export_r16() {
        let data: Vec<f32> = (0..64).map(|i| i as f32 / 63.0).collect();
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.raw");

        export_raw(&data, &path, RawFormat::R16LittleEndian, 0.0, 1.0).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert_eq!(
            metadata.len(),
            expected_file_size(64, RawFormat::R16LittleEndian)
        );
    }

    #[test]
    fn test_r16_content_correctness() {
        let data = [0.0f32, 0.5, 1.0];
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.raw");

        export_raw(&data, &path, RawFormat::R16LittleEndian, 0.0, 1.0).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 6);

        assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]), 0);
        let mid = u16::from_le_bytes([bytes[2], bytes[3]]);
        assert!((mid as i32 - 32767).abs() < 2);
        assert_eq!(u16::from_le_bytes([bytes[4], bytes[5]]), 65535);
    }

    #[test]
    fn test_r32_float_round_trips() {
        let data = [-1.5f32, 0.0, 0.333, 2.75];
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.raw");

        export_raw(&data, &path, RawFormat::R32Float, 0.0, 0.0).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len() as u64, expected_file_size(4, RawFormat::R32Float));

        for (i, &expected) in data.iter().enumerate() {
            let chunk: [u8; 4] = bytes[i * 4..i * 4 + 4].try_into().unwrap();
            assert_eq!(f32::from_le_bytes(chunk), expected);
        }
    }

    #[test]
    fn test_invalid_range_rejected_for_r16_only() {
        let data = [0.5f32; 4];
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.raw");

        let result = export_raw(&data, &path, RawFormat::R16LittleEndian, 1.0, 1.0);
        assert!(matches!(result, Err(RawExportError::InvalidValueRange(..))));

        // R32 ignores the range entirely.
        export_raw(&data, &path, RawFormat::R32Float, 1.0, 1.0).unwrap();
    }

    #[test]
    fn test_expected_file_size() {
        assert_eq!(expected_file_size(256, RawFormat::R16LittleEndian), 512);
        assert_eq!(expected_file_size(256, RawFormat::R16BigEndian), 512);
        assert_eq!(expected_file_size(256, RawFormat::R32Float), 1024);
    }
}
