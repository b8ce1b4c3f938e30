use image::{DynamicImage, GrayImage, Luma};

/// Convert image to grayscale with ITU-R 601-2 luma weights
///
/// Fixed-point form of `0.299 R + 0.587 G + 0.114 B`, rounded. Alpha is ignored.
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    let rgb = img.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        Luma([luma_601(r, g, b)])
    })
}

fn luma_601(r: u8, g: u8, b: u8) -> u8 {
    let l = (r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16;
    l as u8
}

/// Inverted binary threshold: pixels at or below `threshold` become
/// `max_value` (foreground), brighter pixels become 0
pub fn threshold_inverted(img: &GrayImage, threshold: u8, max_value: u8) -> GrayImage {
    let mut mask = img.clone();
    for p in mask.pixels_mut() {
        *p = if p.0[0] <= threshold {
            Luma([max_value])
        } else {
            Luma([0])
        };
    }
    mask
}
