//! Value remapping and contrast shaping applied after octave compositing.
//!
//! Both functions are pure and deliberately unguarded; the rasterizer
//! validates parameters before driving them (see [`crate::raster`]).

/// Affinely remaps `value` from `[old_min, old_max]` onto `[new_min, new_max]`.
///
/// Values outside the input range extrapolate linearly; nothing clamps. The
/// input range must not be degenerate: `old_min == old_max` divides by zero
/// and produces NaN or infinite output.
#[inline]
pub fn remap(value: f32, old_min: f32, old_max: f32, new_min: f32, new_max: f32) -> f32 {
    let normalized = (value - old_min) / (old_max - old_min);
    normalized * (new_max - new_min) + new_min
}

/// Applies a rational S-curve to `input`, which is expected in `[0, 1]`.
///
/// Positive `contrast` pushes values away from 0.5 toward the extremes;
/// negative `contrast` flattens them toward 0.5; zero is the identity. The
/// midpoint 0.5 is a fixed point for every contrast. `contrast` must lie
/// strictly inside `(-1, 1)`: at the poles the denominator can reach zero,
/// and the function does not clamp either input.
#[inline]
pub fn apply_contrast(input: f32, contrast: f32) -> f32 {
    let v = input * 2.0 - 1.0;
    let c = -contrast;
    0.5 + ((v - v * c) / (c - v.abs() * c + 1.0)) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remap_identity() {
        for value in [0.0f32, 0.25, 0.5, 1.0] {
            assert_eq!(remap(value, 0.0, 1.0, 0.0, 1.0), value);
        }
    }

    #[test]
    fn test_remap_scales_and_shifts() {
        assert_eq!(remap(0.5, 0.0, 1.0, 0.0, 10.0), 5.0);
        assert_eq!(remap(0.0, -1.0, 1.0, 0.0, 1.0), 0.5);
        assert_eq!(remap(5.0, 0.0, 10.0, -1.0, 1.0), 0.0);
    }

    #[test]
    fn test_remap_extrapolates_outside_input_range() {
        assert_eq!(remap(2.0, 0.0, 1.0, 0.0, 10.0), 20.0);
        assert_eq!(remap(-1.0, 0.0, 1.0, 0.0, 10.0), -10.0);
    }

    #[test]
    fn test_remap_round_trips() {
        for value in [0.1f32, 0.37, 0.82] {
            let forward = remap(value, 0.0, 1.0, -3.0, 7.0);
            let back = remap(forward, -3.0, 7.0, 0.0, 1.0);
            assert!((back - value).abs() < 1e-6);
        }
    }

    #[test]
    fn test_contrast_zero_is_identity() {
        for i in 0..=20 {
            let input = i as f32 / 20.0;
            let output = apply_contrast(input, 0.0);
            assert!(
                (output - input).abs() < 1e-6,
                "contrast 0 moved {} to {}",
                input,
                output
            );
        }
    }

    #[test]
    fn test_contrast_midpoint_is_fixed() {
        for contrast in [-0.9f32, -0.5, 0.0, 0.5, 0.9] {
            assert_eq!(apply_contrast(0.5, contrast), 0.5);
        }
    }

    #[test]
    fn test_positive_contrast_pushes_toward_extremes() {
        assert!(apply_contrast(0.8, 0.5) > 0.8);
        assert!(apply_contrast(0.2, 0.5) < 0.2);
    }

    #[test]
    fn test_negative_contrast_flattens_toward_midpoint() {
        assert!(apply_contrast(0.8, -0.5) < 0.8);
        assert!(apply_contrast(0.8, -0.5) > 0.5);
        assert!(apply_contrast(0.2, -0.5) > 0.2);
        assert!(apply_contrast(0.2, -0.5) < 0.5);
    }

    #[test]
    fn test_contrast_is_symmetric_about_midpoint() {
        for contrast in [-0.7f32, 0.3, 0.7] {
            for delta in [0.1f32, 0.25, 0.4] {
                let high = apply_contrast(0.5 + delta, contrast);
                let low = apply_contrast(0.5 - delta, contrast);
                assert!(
                    (high + low - 1.0).abs() < 1e-6,
                    "contrast {} asymmetric at delta {}",
                    contrast,
                    delta
                );
            }
        }
    }
}
