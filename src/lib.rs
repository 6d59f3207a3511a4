//! Deterministic, tileable procedural noise fields.
//!
//! This crate provides seeded Perlin gradient noise and Worley cellular
//! noise over 3D coordinates, fractal (multi-octave) compositing, value
//! remapping with an S-curve contrast stage, and rasterization of the result
//! into flat `f32` image buffers, plus PNG/RAW export for inspection.
//!
//! All state lives in a [`PermutationTable`] value: the same seed produces
//! bit-identical fields on every platform, and independent tables can be
//! sampled side by side.

pub mod export;
pub mod filter;
pub mod noise;
pub mod raster;

pub use filter::{apply_contrast, remap};
pub use noise::{
    sample_octaves, sample_perlin, sample_worley, FractalConfig, NoiseError, NoiseKind,
    PermutationTable,
};
pub use raster::{fill_image_2d, fill_image_3d, ImageParams};
