//! # Colour Line Fitting
//!
//! Picks the two RGB565 endpoints of a colour block by fitting a line through the 16 texels
//! of the block in RGB space.
//!
//! ## Algorithm
//!
//! 1. Average the texels and build the (de-meaned) 3x3 covariance matrix.
//! 2. Approximate the dominant eigenvector with exactly 3 unnormalized power iterations,
//!    seeded with `(1, e, π)`.
//! 3. Project every texel onto that direction, keep the extreme projections and rebuild the
//!    endpoints as `mean + projection * direction`.
//!
//! The fixed iteration count and seed are part of the output format of this encoder. Changing
//! either changes the produced bytes.
//!
//! All arithmetic is `f32`, in the exact operation order below; do not reorder it.

use crate::block_4x4::Block4x4;
use crate::color_565::Color565;
use core::f32::consts::{E, PI};

/// Number of power iteration steps used to approximate the principal axis.
const POWER_ITERATIONS: usize = 3;

/// Added to the squared direction length before inverting it.
const DIRECTION_EPSILON: f32 = 0.00001;

/// Line through RGB space fitted to the texels of a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorLine {
    /// Mean colour of the block; a point on the line.
    pub point: [f32; 3],
    /// Unnormalized principal direction of the block's colours.
    pub direction: [f32; 3],
}

impl ColorLine {
    /// Fits a colour line to the RGB channels of `block`. Alpha is ignored.
    pub fn fit(block: &Block4x4) -> Self {
        const INV_16: f32 = 1.0 / 16.0;

        let mut sum_r = 0.0f32;
        let mut sum_g = 0.0f32;
        let mut sum_b = 0.0f32;
        let mut sum_rr = 0.0f32;
        let mut sum_gg = 0.0f32;
        let mut sum_bb = 0.0f32;
        let mut sum_rg = 0.0f32;
        let mut sum_rb = 0.0f32;
        let mut sum_gb = 0.0f32;

        for pixel in &block.pixels {
            let [r, g, b] = pixel.rgb().map(u32::from);
            sum_r += r as f32;
            sum_g += g as f32;
            sum_b += b as f32;
            sum_rr += (r * r) as f32;
            sum_gg += (g * g) as f32;
            sum_bb += (b * b) as f32;
            sum_rg += (r * g) as f32;
            sum_rb += (r * b) as f32;
            sum_gb += (g * b) as f32;
        }

        let mean_r = sum_r * INV_16;
        let mean_g = sum_g * INV_16;
        let mean_b = sum_b * INV_16;

        // Raw moments -> covariance (scaled by 16)
        sum_rr -= 16.0 * mean_r * mean_r;
        sum_gg -= 16.0 * mean_g * mean_g;
        sum_bb -= 16.0 * mean_b * mean_b;
        sum_rg -= 16.0 * mean_r * mean_g;
        sum_rb -= 16.0 * mean_r * mean_b;
        sum_gb -= 16.0 * mean_g * mean_b;

        let mut direction = [1.0f32, E, PI];
        for _ in 0..POWER_ITERATIONS {
            let [x, y, z] = direction;
            direction = [
                x * sum_rr + y * sum_rg + z * sum_rb,
                x * sum_rg + y * sum_gg + z * sum_gb,
                x * sum_rb + y * sum_gb + z * sum_bb,
            ];
        }

        Self {
            point: [mean_r, mean_g, mean_b],
            direction,
        }
    }

    /// Projects the texels of `block` onto this line and returns the packed endpoints,
    /// ordered so that `color0 >= color1`.
    pub fn endpoints(&self, block: &Block4x4) -> (Color565, Color565) {
        let [dx, dy, dz] = self.direction;
        let inv_length = 1.0 / (DIRECTION_EPSILON + dx * dx + dy * dy + dz * dz);
        let project = |r: f32, g: f32, b: f32| dx * r + dy * g + dz * b;

        let first = block.pixels[0];
        let mut dot_max = project(first.r as f32, first.g as f32, first.b as f32);
        let mut dot_min = dot_max;
        for pixel in &block.pixels[1..] {
            let dot = project(pixel.r as f32, pixel.g as f32, pixel.b as f32);
            if dot < dot_min {
                dot_min = dot;
            } else if dot > dot_max {
                dot_max = dot;
            }
        }

        // Offset from the mean, in units of the direction vector.
        let [px, py, pz] = self.point;
        let dot_mean = project(px, py, pz);
        let dot_min = (dot_min - dot_mean) * inv_length;
        let dot_max = (dot_max - dot_mean) * inv_length;

        let c0 = self.point_at(dot_max);
        let c1 = self.point_at(dot_min);
        let packed0 = Color565::from_rgb(c0[0], c0[1], c0[2]);
        let packed1 = Color565::from_rgb(c1[0], c1[1], c1[2]);
        if packed0.greater_than(&packed1) {
            (packed0, packed1)
        } else {
            (packed1, packed0)
        }
    }

    /// Evaluates `point + t * direction`, rounded and clamped to 8 bits per channel.
    #[inline]
    fn point_at(&self, t: f32) -> [u8; 3] {
        core::array::from_fn(|i| {
            ((0.5 + self.point[i] + t * self.direction[i]) as i32).clamp(0, 255) as u8
        })
    }
}

/// Picks the two RGB565 endpoints of `block`, ordered so that `color0 >= color1`.
///
/// # Examples
///
/// ```
/// use dxt_compress::block_4x4::Block4x4;
/// use dxt_compress::color_8888::Color8888;
/// use dxt_compress::fit_color_endpoints;
///
/// let block = Block4x4::new(Color8888::new(255, 0, 0, 255));
/// let (color0, color1) = fit_color_endpoints(&block);
/// assert_eq!(color0.raw_value(), 0xF800);
/// assert_eq!(color0, color1);
/// ```
#[inline]
pub fn fit_color_endpoints(block: &Block4x4) -> (Color565, Color565) {
    ColorLine::fit(block).endpoints(block)
}
