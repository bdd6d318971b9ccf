//! RGB to YUV chrominance conversion.
//!
//! Maps 8-bit RGB samples onto the U/V (blue-difference / red-difference)
//! plane using the analog BT.601 decomposition:
//!
//! ```text
//!   Y =  0.299   R + 0.587   G + 0.114   B
//!   U = -0.14713 R - 0.28886 G + 0.436   B
//!   V =  0.615   R - 0.51499 G - 0.10001 B
//! ```
//!
//! U and V are not clamped here. A fully saturated primary lands well
//! outside the graticule; clipping is the plotter's job.

use glam::{Mat3, Vec3};

/// Luma weights.
const Y_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];
/// Blue-difference weights.
const U_WEIGHTS: [f32; 3] = [-0.14713, -0.28886, 0.436];
/// Red-difference weights.
const V_WEIGHTS: [f32; 3] = [0.615, -0.51499, -0.10001];

/// A full luma/chroma sample in 8-bit code value units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Yuv {
    pub y: f32,
    pub u: f32,
    pub v: f32,
}

/// Project an RGB triple onto the chrominance plane, returning `(u, v)`.
///
/// This is the per-pixel hot path of the scope, so it skips luma.
#[inline]
pub fn convert(r: u8, g: u8, b: u8) -> (f32, f32) {
    let (r, g, b) = (f32::from(r), f32::from(g), f32::from(b));
    let u = U_WEIGHTS[0] * r + U_WEIGHTS[1] * g + U_WEIGHTS[2] * b;
    let v = V_WEIGHTS[0] * r + V_WEIGHTS[1] * g + V_WEIGHTS[2] * b;
    (u, v)
}

/// Full forward transform including luma.
pub fn rgb_to_yuv(rgb: [u8; 3]) -> Yuv {
    let out = forward_matrix() * Vec3::new(f32::from(rgb[0]), f32::from(rgb[1]), f32::from(rgb[2]));
    Yuv {
        y: out.x,
        u: out.y,
        v: out.z,
    }
}

/// Inverse transform back to (unclamped, unrounded) RGB code values.
pub fn yuv_to_rgb(yuv: Yuv) -> [f32; 3] {
    forward_matrix()
        .inverse()
        .mul_vec3(Vec3::new(yuv.y, yuv.u, yuv.v))
        .to_array()
}

/// Row-major weights transposed into glam's column-major layout.
fn forward_matrix() -> Mat3 {
    Mat3::from_cols_array_2d(&[Y_WEIGHTS, U_WEIGHTS, V_WEIGHTS]).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The U weights sum to 1e-5 rather than zero, so a 255 grey sits
    /// 0.00255 units right of center.
    const GRAY_EPSILON: f32 = 1e-2;
    const ROUNDTRIP_EPSILON: f32 = 1e-2;

    #[test]
    fn test_gray_plots_at_center() {
        for level in 0..=255u8 {
            let (u, v) = convert(level, level, level);
            assert!(u.abs() < GRAY_EPSILON, "level {level}: u = {u}");
            assert!(v.abs() < GRAY_EPSILON, "level {level}: v = {v}");
        }
    }

    #[test]
    fn test_pure_red() {
        let (u, v) = convert(255, 0, 0);
        assert!((u - -37.518).abs() < 0.01, "u = {u}");
        assert!((v - 156.825).abs() < 0.01, "v = {v}");
    }

    #[test]
    fn test_primaries_fall_in_expected_quadrants() {
        // Blue pushes right (+U), green pulls left and down.
        let (u, v) = convert(0, 0, 255);
        assert!(u > 100.0 && v < 0.0);
        let (u, v) = convert(0, 255, 0);
        assert!(u < 0.0 && v < 0.0);
    }

    #[test]
    fn test_matrix_path_matches_hot_path() {
        for rgb in [[12, 200, 97], [255, 255, 0], [3, 4, 5], [255, 0, 255]] {
            let yuv = rgb_to_yuv(rgb);
            let (u, v) = convert(rgb[0], rgb[1], rgb[2]);
            assert!((yuv.u - u).abs() < 1e-3);
            assert!((yuv.v - v).abs() < 1e-3);
        }
    }

    #[test]
    fn test_luma_of_white() {
        let yuv = rgb_to_yuv([255, 255, 255]);
        assert!((yuv.y - 255.0).abs() < 1e-2, "y = {}", yuv.y);
    }

    #[test]
    fn test_roundtrip_recovers_rgb() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(51) {
                    let back = yuv_to_rgb(rgb_to_yuv([r, g, b]));
                    let orig = [r, g, b];
                    for c in 0..3 {
                        assert!(
                            (back[c] - f32::from(orig[c])).abs() < ROUNDTRIP_EPSILON,
                            "({r}, {g}, {b}) channel {c}: {:.4}",
                            back[c]
                        );
                    }
                }
            }
        }
    }
}
