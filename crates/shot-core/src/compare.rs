//! Masked perceptual image equivalence
//!
//! Two screenshots are equivalent when they have the same pixel dimensions
//! and identical perceptual hashes after the status-bar clock region has been
//! painted black in both. There is no distance threshold: a single differing
//! bit means the screenshot changed.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{ImageError, ImageReader, Rgb, RgbImage};
use serde::Serialize;

use crate::config::MaskConfig;
use crate::phash::PerceptualHash;
use crate::{Error, Result};

/// Left inset of the mask as a fraction of the width, so content that starts
/// at the very edge stays visible.
pub const MASK_INSET_X: f64 = 0.1;

/// Top inset of the mask as a fraction of the height.
pub const MASK_INSET_Y: f64 = 0.02;

const MASK_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Pixel rectangle blanked before hashing. `x1`/`y1` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaskRect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl MaskRect {
    /// The mask rectangle for an image of `width` x `height`.
    ///
    /// Bounds are truncated to whole pixels. When a configured fraction is
    /// smaller than the inset the rectangle is empty.
    pub fn for_size(width: u32, height: u32, mask: &MaskConfig) -> Self {
        let w = f64::from(width);
        let h = f64::from(height);
        Self {
            x0: (w * MASK_INSET_X) as u32,
            y0: (h * MASK_INSET_Y) as u32,
            x1: (w * mask.left_ignore_fraction()) as u32,
            y1: (h * mask.top_ignore_fraction()) as u32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.x0..self.x1).contains(&x) && (self.y0..self.y1).contains(&y)
    }

    /// Paint the rectangle black.
    pub fn apply(&self, image: &mut RgbImage) {
        if self.is_empty() {
            return;
        }
        for y in self.y0..self.y1.min(image.height()) {
            for x in self.x0..self.x1.min(image.width()) {
                image.put_pixel(x, y, MASK_COLOR);
            }
        }
    }
}

/// Detailed result of comparing two screenshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub old_dimensions: (u32, u32),
    pub new_dimensions: (u32, u32),
    /// Masked hashes of both images; absent when the dimensions differ.
    pub hashes: Option<(PerceptualHash, PerceptualHash)>,
    pub equivalent: bool,
}

impl Comparison {
    pub fn distance(&self) -> Option<u32> {
        self.hashes.map(|(a, b)| a.distance(&b))
    }
}

/// Hash of `image` with the mask applied to a copy.
pub fn masked_hash(image: &RgbImage, mask: &MaskConfig) -> PerceptualHash {
    let mut masked = image.clone();
    MaskRect::for_size(image.width(), image.height(), mask).apply(&mut masked);
    PerceptualHash::of_rgb(&masked)
}

/// Compare two screenshot files.
pub fn compare_images(old: &Path, new: &Path, mask: &MaskConfig) -> Result<Comparison> {
    let old_dimensions = dimensions(old)?;
    let new_dimensions = dimensions(new)?;

    if old_dimensions != new_dimensions {
        tracing::debug!(
            old = %old.display(),
            ?old_dimensions,
            ?new_dimensions,
            "Dimensions differ"
        );
        return Ok(Comparison {
            old_dimensions,
            new_dimensions,
            hashes: None,
            equivalent: false,
        });
    }

    let old_hash = masked_hash(&load_rgb(old)?, mask);
    let new_hash = masked_hash(&load_rgb(new)?, mask);

    Ok(Comparison {
        old_dimensions,
        new_dimensions,
        hashes: Some((old_hash, new_hash)),
        equivalent: old_hash.distance(&new_hash) == 0,
    })
}

/// Whether two screenshot files are equivalent under `mask`.
pub fn equivalent(old: &Path, new: &Path, mask: &MaskConfig) -> Result<bool> {
    compare_images(old, new, mask).map(|c| c.equivalent)
}

fn reader(path: &Path) -> Result<ImageReader<BufReader<File>>> {
    ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| Error::decode(path, ImageError::IoError(e)))
}

/// Dimensions from the image header, without decoding pixel data.
fn dimensions(path: &Path) -> Result<(u32, u32)> {
    reader(path)?
        .into_dimensions()
        .map_err(|e| Error::decode(path, e))
}

fn load_rgb(path: &Path) -> Result<RgbImage> {
    let image = reader(path)?.decode().map_err(|e| Error::decode(path, e))?;
    Ok(image.to_rgb8())
}
