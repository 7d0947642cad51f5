//! Thick line rasterizer with clipping
//!
//! Lines are walked with Bresenham's integer error accumulator. Each stepped
//! point stamps a square block of `thickness` pixels, so strokes are square
//! capped and never anti-aliased.
//!
//! The blocks are not filled one by one. Along a Bresenham path both
//! coordinates move monotonically by at most one pixel per step, so on any
//! canvas row the blocks that reach it come from a contiguous run of path
//! points and their union is a single span. Each row is filled once with that
//! span, which touches exactly the pixels the individual stamps would, at a
//! cost bounded by the canvas size rather than by the thickness.

use tracing::trace;

use crate::canvas::Canvas;
use crate::types::LineSpec;

/// Draw a straight line onto the canvas.
///
/// Both endpoints are clamped into the canvas on each axis independently before
/// walking, which can change the slope of a line that leaves the page. Every
/// stamped pixel is clipped on its own, so this never fails.
///
/// The block spans `-thickness/2..=thickness/2` around each point, so an even
/// thickness paints one pixel wider than requested. A thickness of 0 is drawn
/// as 1.
pub fn draw_line(canvas: &mut Canvas, line: &LineSpec) {
    let max_x = i64::from(canvas.width()) - 1;
    let max_y = i64::from(canvas.height()) - 1;

    let start_x = i64::from(line.x1).clamp(0, max_x);
    let start_y = i64::from(line.y1).clamp(0, max_y);
    let end_x = i64::from(line.x2).clamp(0, max_x);
    let end_y = i64::from(line.y2).clamp(0, max_y);

    let half = i64::from(line.thickness.max(1) / 2);

    trace!(
        "draw_line: ({}, {}) -> ({}, {}) thickness {}",
        start_x, start_y, end_x, end_y, line.thickness
    );

    let mut path = walk(start_x, start_y, end_x, end_y);
    if start_y > end_y {
        path.reverse();
    }
    fill_stamps(canvas, &path, half, line);
}

/// Bresenham points from start to end inclusive
fn walk(mut x: i64, mut y: i64, end_x: i64, end_y: i64) -> Vec<(i64, i64)> {
    let dx = (end_x - x).abs();
    let dy = (end_y - y).abs();
    let sx = if x < end_x { 1 } else { -1 };
    let sy = if y < end_y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut points = Vec::with_capacity((dx.max(dy) + 1) as usize);
    loop {
        points.push((x, y));

        if x == end_x && y == end_y {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    points
}

/// Fill the union of the square blocks centred on `path`, whose y values must
/// be non-decreasing.
fn fill_stamps(canvas: &mut Canvas, path: &[(i64, i64)], half: i64, line: &LineSpec) {
    let (Some(&(_, first_y)), Some(&(_, last_y))) = (path.first(), path.last()) else {
        return;
    };
    let top = (first_y - half).max(0);
    let bottom = (last_y + half).min(i64::from(canvas.height()) - 1);

    // Points in path[lo..hi] have their centre within `half` rows of `row`
    let (mut lo, mut hi) = (0, 0);
    for row in top..=bottom {
        while hi < path.len() && path[hi].1 <= row + half {
            hi += 1;
        }
        while lo < hi && path[lo].1 < row - half {
            lo += 1;
        }
        if lo == hi {
            continue;
        }
        let (xa, xb) = (path[lo].0, path[hi - 1].0);
        canvas.fill_rect_clipped(xa.min(xb) - half, row, xa.max(xb) + half, row, line.color);
    }
}
