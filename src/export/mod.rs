//! Export of generated noise buffers to image and raw file formats.
//!
//! Supports 16-bit grayscale PNG (one file per Z slice for volumes) and RAW
//! dumps in 16-bit integer or 32-bit float layouts.

mod png;
mod raw;

pub use png::{export_image_png, export_volume_png, PngExportError, PngExportOptions};
pub use raw::{expected_file_size, export_raw, RawExportError, RawFormat};
