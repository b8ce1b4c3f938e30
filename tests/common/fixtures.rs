use image::{DynamicImage, GrayImage, Luma};
use std::io::Write;
use tempfile::NamedTempFile;

pub const WHITE: u8 = 255;
pub const BLACK: u8 = 0;

/// Creates a white grayscale canvas
pub fn blank_canvas(width: u32, height: u32) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([WHITE]))
}

/// Fills the inclusive rectangle (x0, y0)..=(x1, y1) with `value`
pub fn fill_rect(img: &mut GrayImage, x0: u32, y0: u32, x1: u32, y1: u32, value: u8) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            img.put_pixel(x, y, Luma([value]));
        }
    }
}

/// 10x10 white canvas with a black rectangle covering (2, 3)..=(5, 6)
pub fn single_rect_image() -> GrayImage {
    let mut img = blank_canvas(10, 10);
    fill_rect(&mut img, 2, 3, 5, 6, BLACK);
    img
}

/// 12x12 white canvas with two disjoint black squares
pub fn two_blob_image() -> GrayImage {
    let mut img = blank_canvas(12, 12);
    fill_rect(&mut img, 1, 1, 3, 3, BLACK);
    fill_rect(&mut img, 6, 5, 9, 9, BLACK);
    img
}

/// Black frame with a white hole, and a black dot inside the hole
pub fn nested_image() -> GrayImage {
    let mut img = blank_canvas(14, 14);
    fill_rect(&mut img, 1, 1, 12, 12, BLACK);
    fill_rect(&mut img, 3, 3, 10, 10, WHITE);
    fill_rect(&mut img, 5, 5, 7, 7, BLACK);
    img
}

/// Saves an image to a temporary PNG file.
/// The file will be automatically cleaned up when dropped.
pub fn save_temp_png(img: &GrayImage) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    DynamicImage::ImageLuma8(img.clone())
        .save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Creates a .png file whose bytes are not an image
pub fn garbage_png() -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(b"definitely not a png")
        .expect("Failed to write temp file");
    file
}

/// Parses `<path d="M x,y L x,y ... Z" fill="black"/>` into its points.
/// Returns None if the element does not follow that grammar.
pub fn parse_path_element(element: &str) -> Option<Vec<(u32, u32)>> {
    let d = element
        .strip_prefix(r#"<path d=""#)?
        .strip_suffix(r#"" fill="black"/>"#)?;
    let body = d.strip_prefix("M ")?.strip_suffix(" Z")?;

    let points: Option<Vec<(u32, u32)>> = body
        .split(" L ")
        .map(|pt| {
            let (x, y) = pt.split_once(',')?;
            Some((x.parse().ok()?, y.parse().ok()?))
        })
        .collect();

    points.filter(|p| p.len() >= 2)
}
