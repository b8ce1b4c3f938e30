use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use crate::models::{Contour, Point};

/// Find the outermost contour of every foreground blob in a binary mask
///
/// Non-zero pixels are foreground. Hole borders, and any blob sitting inside
/// a hole, are discarded. Each outline is reduced to its corner points with
/// [`compress_collinear`]. Contours come back in tracing order, which is the
/// raster order of each blob's top-left pixel.
pub fn find_external_contours(mask: &GrayImage) -> Vec<Contour> {
    find_contours::<u32>(mask)
        .into_iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
        .map(|c| {
            let points: Vec<Point> = c.points.iter().map(|p| Point::new(p.x, p.y)).collect();
            Contour::new(compress_collinear(&points))
        })
        .collect()
}

/// Drop points lying in the middle of a straight run of a closed polygon
///
/// A point is redundant when the segment arriving at it and the segment
/// leaving it point in the same direction. The first point is always kept
/// so the outline starts where tracing started.
pub fn compress_collinear(points: &[Point]) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    (0..n)
        .filter(|&i| {
            i == 0 || !continues_straight(points[i - 1], points[i], points[(i + 1) % n])
        })
        .map(|i| points[i])
        .collect()
}

fn continues_straight(prev: Point, cur: Point, next: Point) -> bool {
    let (ax, ay) = (cur.x as i64 - prev.x as i64, cur.y as i64 - prev.y as i64);
    let (bx, by) = (next.x as i64 - cur.x as i64, next.y as i64 - cur.y as i64);

    let cross = ax * by - ay * bx;
    let dot = ax * bx + ay * by;
    cross == 0 && dot > 0
}
