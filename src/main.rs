//! Noisegen CLI - deterministic noise image generator.
//!
//! Generate tileable Perlin/Worley noise images from a seed and export them
//! as PNG or RAW files, or probe single sample values.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use glam::{UVec3, Vec3};
use noisegen::export::{
    export_image_png, export_raw, export_volume_png, PngExportOptions, RawFormat,
};
use noisegen::{
    fill_image_2d, fill_image_3d, sample_octaves, sample_perlin, sample_worley, FractalConfig,
    ImageParams, NoiseKind, PermutationTable,
};

/// Deterministic tileable noise image generator.
#[derive(Parser)]
#[command(name = "noisegen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a noise image and export it.
    Generate {
        /// Image width in samples.
        #[arg(long, default_value = "512")]
        width: u32,

        /// Image height in samples.
        #[arg(long, default_value = "512")]
        height: u32,

        /// Image depth in samples; 1 generates a 2D image.
        #[arg(long, default_value = "1")]
        depth: u32,

        /// World-space extent (and tiling period) on X.
        #[arg(long, default_value = "10")]
        scale_x: u32,

        /// World-space extent (and tiling period) on Y.
        #[arg(long, default_value = "10")]
        scale_y: u32,

        /// World-space extent (and tiling period) on Z.
        #[arg(long, default_value = "10")]
        scale_z: u32,

        /// Noise type.
        #[arg(short, long, default_value = "perlin")]
        kind: KindArg,

        /// Octaves to composite (the fractional part is ignored).
        #[arg(long, default_value = "4")]
        octaves: f32,

        /// Amplitude decay per octave (0-1].
        #[arg(long, default_value = "0.5")]
        persistence: f32,

        /// S-curve contrast strength, strictly inside (-1, 1).
        #[arg(long, default_value = "0.5")]
        contrast: f32,

        /// Generator seed.
        #[arg(short, long, default_value = "0")]
        seed: u32,

        /// Expected minimum of the raw octave sum.
        #[arg(long, default_value = "0.0")]
        value_min: f32,

        /// Expected maximum of the raw octave sum.
        #[arg(long, default_value = "1.0")]
        value_max: f32,

        /// Minimum of the remapped output range.
        #[arg(long, default_value = "0.0")]
        remap_min: f32,

        /// Maximum of the remapped output range.
        #[arg(long, default_value = "1.0")]
        remap_max: f32,

        /// Output directory for generated files.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Base name for output files.
        #[arg(short, long, default_value = "noise")]
        name: String,

        /// Export format.
        #[arg(short, long, default_value = "png")]
        format: ExportFormat,

        /// Invert exported PNG values (inverse cellular lookup textures).
        #[arg(long)]
        invert: bool,
    },

    /// Print a single noise sample.
    Sample {
        /// Sample X coordinate.
        #[arg(short, long, default_value = "0.0", allow_hyphen_values = true)]
        x: f32,

        /// Sample Y coordinate.
        #[arg(short, long, default_value = "0.0", allow_hyphen_values = true)]
        y: f32,

        /// Sample Z coordinate.
        #[arg(short, long, default_value = "0.0", allow_hyphen_values = true)]
        z: f32,

        /// Tiling period on X.
        #[arg(long, default_value = "256")]
        tiles_x: u32,

        /// Tiling period on Y.
        #[arg(long, default_value = "256")]
        tiles_y: u32,

        /// Tiling period on Z.
        #[arg(long, default_value = "256")]
        tiles_z: u32,

        /// Noise type.
        #[arg(short, long, default_value = "perlin")]
        kind: KindArg,

        /// Composite this many octaves instead of one raw sample.
        #[arg(long)]
        octaves: Option<f32>,

        /// Amplitude decay per octave (with --octaves).
        #[arg(long, default_value = "0.5")]
        persistence: f32,

        /// Generator seed.
        #[arg(short, long, default_value = "0")]
        seed: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    /// Gradient noise.
    Perlin,
    /// Cellular (distance-to-feature) noise.
    Worley,
}

impl From<KindArg> for NoiseKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Perlin => NoiseKind::Perlin,
            KindArg::Worley => NoiseKind::Worley,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// 16-bit grayscale PNG (one file per Z slice for volumes).
    Png,
    /// 16-bit RAW little-endian (Unity).
    Raw,
    /// 32-bit float RAW (full precision).
    RawFloat,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            width,
            height,
            depth,
            scale_x,
            scale_y,
            scale_z,
            kind,
            octaves,
            persistence,
            contrast,
            seed,
            value_min,
            value_max,
            remap_min,
            remap_max,
            output,
            name,
            format,
            invert,
        } => {
            run_generate(GenerateArgs {
                width,
                height,
                depth,
                scale: UVec3::new(scale_x, scale_y, scale_z),
                kind: kind.into(),
                octaves,
                persistence,
                contrast,
                seed,
                value_min,
                value_max,
                remap_min,
                remap_max,
                output,
                name,
                format,
                invert,
            });
        }
        Commands::Sample {
            x,
            y,
            z,
            tiles_x,
            tiles_y,
            tiles_z,
            kind,
            octaves,
            persistence,
            seed,
        } => {
            run_sample(
                Vec3::new(x, y, z),
                UVec3::new(tiles_x, tiles_y, tiles_z),
                kind.into(),
                octaves,
                persistence,
                seed,
            );
        }
    }
}

struct GenerateArgs {
    width: u32,
    height: u32,
    depth: u32,
    scale: UVec3,
    kind: NoiseKind,
    octaves: f32,
    persistence: f32,
    contrast: f32,
    seed: u32,
    value_min: f32,
    value_max: f32,
    remap_min: f32,
    remap_max: f32,
    output: PathBuf,
    name: String,
    format: ExportFormat,
    invert: bool,
}

fn run_generate(args: GenerateArgs) {
    // Validate parameters
    if args.width < 1 || args.width > 8192 || args.height < 1 || args.height > 8192 {
        eprintln!("Error: Width and height must be between 1 and 8192");
        std::process::exit(1);
    }

    if args.depth < 1 || args.depth > 512 {
        eprintln!("Error: Depth must be between 1 and 512");
        std::process::exit(1);
    }

    if args.scale.x < 1 || args.scale.y < 1 || args.scale.z < 1 {
        eprintln!("Error: Scale must be at least 1 on every axis");
        std::process::exit(1);
    }

    let octave_count = args.octaves as i64;
    if octave_count < 1 || octave_count > 16 {
        eprintln!("Error: Octaves must be between 1 and 16");
        std::process::exit(1);
    }

    if args.persistence <= 0.0 || args.persistence > 1.0 {
        eprintln!("Error: Persistence must be in (0, 1]");
        std::process::exit(1);
    }

    if args.contrast <= -1.0 || args.contrast >= 1.0 {
        eprintln!("Error: Contrast must lie strictly inside (-1, 1)");
        std::process::exit(1);
    }

    if args.value_min == args.value_max {
        eprintln!("Error: Value range must not be degenerate");
        std::process::exit(1);
    }

    if args.remap_min >= args.remap_max {
        eprintln!("Error: Remap range must satisfy min < max");
        std::process::exit(1);
    }

    println!("Noisegen - Deterministic Noise Generator");
    println!("========================================");
    println!(
        "Resolution: {}x{}x{} ({:?})",
        args.width, args.height, args.depth, args.kind
    );
    println!("Seed: {}", args.seed);
    println!("Output: {}", args.output.display());

    let params = ImageParams {
        resolution: UVec3::new(args.width, args.height, args.depth),
        scale: args.scale,
        fractal: FractalConfig {
            kind: args.kind,
            octaves: args.octaves,
            persistence: args.persistence,
        },
        contrast: args.contrast,
        value_min: args.value_min,
        value_max: args.value_max,
        remap_min: args.remap_min,
        remap_max: args.remap_max,
    };

    let table = PermutationTable::new(args.seed);
    let mut data = vec![0.0f32; params.pixel_count()];

    let start = Instant::now();
    let result = if args.depth == 1 {
        fill_image_2d(&table, &params, &mut data)
    } else {
        fill_image_3d(&table, &params, &mut data)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error during generation: {}", e);
        std::process::exit(1);
    });

    println!("Generation completed in {:.2?}", start.elapsed());

    std::fs::create_dir_all(&args.output).unwrap_or_else(|e| {
        eprintln!("Error creating output directory: {}", e);
        std::process::exit(1);
    });

    match args.format {
        ExportFormat::Png => {
            let options = PngExportOptions {
                min_value: args.remap_min,
                max_value: args.remap_max,
                invert: args.invert,
                ..Default::default()
            };
            if args.depth == 1 {
                let path = args.output.join(format!("{}.png", args.name));
                export_image_png(args.width, args.height, &data, &path, &options)
                    .unwrap_or_else(|e| {
                        eprintln!("Error exporting PNG: {}", e);
                        std::process::exit(1);
                    });
                println!("  Exported PNG: {}", path.display());
            } else {
                export_volume_png(
                    args.width,
                    args.height,
                    args.depth,
                    &data,
                    &args.output,
                    &args.name,
                    &options,
                )
                .unwrap_or_else(|e| {
                    eprintln!("Error exporting PNG slices: {}", e);
                    std::process::exit(1);
                });
                println!(
                    "  Exported {} PNG slices: {}_z*.png",
                    args.depth, args.name
                );
            }
        }
        ExportFormat::Raw | ExportFormat::RawFloat => {
            let raw_format = match args.format {
                ExportFormat::Raw => RawFormat::R16LittleEndian,
                _ => RawFormat::R32Float,
            };
            let path = args.output.join(format!("{}.raw", args.name));
            export_raw(&data, &path, raw_format, args.remap_min, args.remap_max)
                .unwrap_or_else(|e| {
                    eprintln!("Error exporting RAW: {}", e);
                    std::process::exit(1);
                });
            println!("  Exported RAW ({:?}): {}", raw_format, path.display());
        }
    }
}

fn run_sample(
    pos: Vec3,
    tiles: UVec3,
    kind: NoiseKind,
    octaves: Option<f32>,
    persistence: f32,
    seed: u32,
) {
    let table = PermutationTable::new(seed);

    let result = match octaves {
        Some(octaves) => sample_octaves(
            &table,
            pos,
            tiles,
            &FractalConfig {
                kind,
                octaves,
                persistence,
            },
        ),
        None => match kind {
            NoiseKind::Perlin => sample_perlin(&table, pos, tiles),
            NoiseKind::Worley => sample_worley(&table, pos, tiles),
        },
    };

    let value = result.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("{}", value);
}
