//! DCT perceptual hash
//!
//! The image is reduced to 32x32 luma, transformed with a 2-D DCT-II, and the
//! 8x8 lowest-frequency coefficients are thresholded against their median.
//! Pixel noise that does not move those coefficients across the median leaves
//! the 64-bit fingerprint unchanged.

use std::fmt;

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, RgbImage};
use serde::{Serialize, Serializer};

/// Side length of the downsampled luma image fed to the DCT.
const SAMPLE_SIZE: usize = 32;

/// Side length of the low-frequency block kept from the DCT.
const HASH_SIZE: usize = 8;

/// A 64-bit perceptual fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PerceptualHash(u64);

impl PerceptualHash {
    pub fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u64 {
        self.0
    }

    /// Number of differing bits.
    pub fn distance(&self, other: &Self) -> u32 {
        (self.0 ^ other.0).count_ones()
    }

    pub fn of_rgb(image: &RgbImage) -> Self {
        Self::of_luma(&to_luma(image))
    }

    pub fn of_luma(image: &GrayImage) -> Self {
        let small = imageops::resize(
            image,
            SAMPLE_SIZE as u32,
            SAMPLE_SIZE as u32,
            FilterType::Lanczos3,
        );
        let samples: Vec<f64> = small.pixels().map(|p| f64::from(p[0])).collect();
        let coefficients = low_frequency_dct(&samples);

        let mut sorted = coefficients;
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        let median = (sorted[mid - 1] + sorted[mid]) / 2.0;

        let bits = coefficients
            .iter()
            .fold(0u64, |acc, &c| (acc << 1) | u64::from(c > median));
        Self(bits)
    }
}

impl fmt::Display for PerceptualHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl Serialize for PerceptualHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// ITU-R 601-2 luma in fixed point.
fn to_luma(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b] = image.get_pixel(x, y).0;
        let l = (u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000) >> 16;
        Luma([l as u8])
    })
}

/// Unnormalized DCT-II over both axes of a `SAMPLE_SIZE` square, keeping only
/// the top-left `HASH_SIZE` block in row-major order.
///
/// Uniform scale factors are dropped; they do not change the comparison
/// against the median.
fn low_frequency_dct(samples: &[f64]) -> [f64; HASH_SIZE * HASH_SIZE] {
    let n = SAMPLE_SIZE;
    let mut basis = [[0.0f64; SAMPLE_SIZE]; HASH_SIZE];
    for (k, row) in basis.iter_mut().enumerate() {
        for (i, value) in row.iter_mut().enumerate() {
            *value = (std::f64::consts::PI * k as f64 * (2 * i + 1) as f64 / (2 * n) as f64).cos();
        }
    }

    // Columns first: rows[k][x] = sum_y basis[k][y] * p[y][x]
    let mut rows = [[0.0f64; SAMPLE_SIZE]; HASH_SIZE];
    for (k, out) in rows.iter_mut().enumerate() {
        for (x, value) in out.iter_mut().enumerate() {
            *value = (0..n).map(|y| basis[k][y] * samples[y * n + x]).sum();
        }
    }

    let mut block = [0.0f64; HASH_SIZE * HASH_SIZE];
    for (k, row) in rows.iter().enumerate() {
        for j in 0..HASH_SIZE {
            block[k * HASH_SIZE + j] = (0..n).map(|x| basis[j][x] * row[x]).sum();
        }
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gradient(w: u32, h: u32) -> RgbImage {
        RgbImage::from_fn(w, h, |x, y| {
            Rgb([(x * 255 / w) as u8, (y * 255 / h) as u8, ((x + y) % 256) as u8])
        })
    }

    #[test]
    fn distance_counts_differing_bits() {
        let a = PerceptualHash::from_bits(0b1011);
        let b = PerceptualHash::from_bits(0b0010);
        assert_eq!(a.distance(&b), 2);
        assert_eq!(a.distance(&a), 0);
    }

    #[test]
    fn display_is_sixteen_hex_digits() {
        assert_eq!(PerceptualHash::from_bits(0xab).to_string(), "00000000000000ab");
    }

    #[test]
    fn identical_images_hash_identically() {
        let img = gradient(120, 240);
        assert_eq!(PerceptualHash::of_rgb(&img), PerceptualHash::of_rgb(&img.clone()));
    }

    fn blocks(seed: u32) -> RgbImage {
        RgbImage::from_fn(64, 64, |x, y| {
            let cell = (x / 8) * 31 + (y / 8) * 17 + seed * 101;
            let v = (cell.wrapping_mul(2_654_435_761) >> 24) as u8;
            Rgb([v, v, v])
        })
    }

    #[test]
    fn different_content_changes_the_hash() {
        let a = PerceptualHash::of_rgb(&blocks(1));
        let b = PerceptualHash::of_rgb(&blocks(2));

        assert_ne!(a.distance(&b), 0);
    }

    #[test]
    fn dc_only_block_for_flat_image() {
        let flat = vec![100.0; SAMPLE_SIZE * SAMPLE_SIZE];
        let block = low_frequency_dct(&flat);
        assert!((block[0] - 100.0 * (SAMPLE_SIZE * SAMPLE_SIZE) as f64).abs() < 1e-6);
        assert!(block[1..].iter().all(|c| c.abs() < 1e-6));
    }

    #[test]
    fn luma_uses_601_weights() {
        let img = RgbImage::from_pixel(1, 1, Rgb([255, 0, 0]));
        assert_eq!(to_luma(&img).get_pixel(0, 0)[0], 76);
    }
}
