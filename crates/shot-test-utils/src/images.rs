//! Deterministic screenshot images.
//!
//! The clock helpers paint strictly inside the default mask rectangle
//! (10%..26% of the width, 2%..6% of the height). Use images of at least
//! 100x200 so that region spans several pixels.

use image::{Rgb, RgbImage};

/// A textured image whose content is fully determined by `seed`.
///
/// The texture is made of 16x16 blocks of pseudo-random color so that the
/// low-frequency structure differs noticeably between seeds.
pub fn screenshot(width: u32, height: u32, seed: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let cell = (x / 16).wrapping_mul(73_856_093) ^ (y / 16).wrapping_mul(19_349_663) ^ seed.wrapping_mul(83_492_791);
        let v = cell.wrapping_mul(2_654_435_761);
        Rgb([(v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8])
    })
}

/// Paint a "clock" inside the masked status-bar region.
///
/// Different `minute` values produce different pixels, all within the mask.
pub fn with_clock(image: &RgbImage, minute: u8) -> RgbImage {
    let mut out = image.clone();
    let (w, h) = (image.width(), image.height());
    let x0 = w * 10 / 100 + 1;
    let x1 = w * 26 / 100 - 1;
    let y0 = h * 2 / 100 + 1;
    let y1 = h * 6 / 100 - 1;
    for y in y0..y1 {
        for x in x0..x1 {
            let on = (x + y + u32::from(minute)) % 3 == 0;
            let v = if on { 255 } else { minute.wrapping_mul(37) };
            out.put_pixel(x, y, Rgb([v, v, v]));
        }
    }
    out
}

/// Invert the lower half of the image, well outside the mask.
pub fn with_content_change(image: &RgbImage) -> RgbImage {
    let mut out = image.clone();
    let h = image.height();
    for y in h / 2..h {
        for x in 0..image.width() {
            let Rgb([r, g, b]) = *out.get_pixel(x, y);
            out.put_pixel(x, y, Rgb([255 - r, 255 - g, 255 - b]));
        }
    }
    out
}
