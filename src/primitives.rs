//! Device independent drawing built on a single set-pixel capability.
//!
//! Nothing here knows about scan wiring. A [`PixelSurface`] only has to set one
//! pixel; lines, rectangles and fills are enumerated here and handed to it one
//! point at a time, in order. [`draw_line`] and [`draw_rect_outline`] skip the
//! stretch of a line whose major axis lies off the surface and pass the rest
//! through; the surface ignores what is still out of bounds. [`fill_rect`]
//! clips up front.

use embedded_graphics::prelude::Point;
use embedded_graphics::prelude::Size;

/// Something with a width, a height and a way to set one pixel.
pub trait PixelSurface {
    type Color: Copy;
    type Error;

    /// Size of the drawable area, anchored at the origin.
    fn size(&self) -> Size;

    /// Set one pixel. Out-of-bounds points must be accepted and ignored.
    fn set_pixel(&mut self, point: Point, color: Self::Color) -> Result<(), Self::Error>;
}

fn clamp_len(len: u32) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

/// Integer Bresenham walk from `start` to `end`, both included.
///
/// Yields the same points as the error-accumulator loop (`err = dx + dy`,
/// step x when `2 * err >= dy`, step y when `2 * err <= dx`), computed per
/// step from the index along the major axis. Any pair of `i32` endpoints is
/// accepted.
///
/// ```
/// use embedded_graphics::prelude::Point;
/// use hub75_quarter_scan::primitives::Bresenham;
///
/// let mut line = Bresenham::new(Point::new(0, 0), Point::new(2, 1));
/// assert_eq!(line.next(), Some(Point::new(0, 0)));
/// assert_eq!(line.next(), Some(Point::new(1, 1)));
/// assert_eq!(line.next(), Some(Point::new(2, 1)));
/// assert_eq!(line.next(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bresenham {
    start: Point,
    sx: i32,
    sy: i32,
    // absolute spans, up to 2^32 - 1
    dx: u64,
    dy: u64,
    x_major: bool,
    // next step index and one past the last
    step: u64,
    end: u64,
}

impl Bresenham {
    pub fn new(start: Point, end: Point) -> Self {
        let dx = (i64::from(end.x) - i64::from(start.x)).unsigned_abs();
        let dy = (i64::from(end.y) - i64::from(start.y)).unsigned_abs();
        Self {
            start,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            dx,
            dy,
            x_major: dx >= dy,
            step: 0,
            end: dx.max(dy) + 1,
        }
    }

    /// Drop the steps whose major-axis coordinate falls outside `size`.
    fn clip_major(mut self, size: Size) -> Self {
        let (origin, dir, limit) = if self.x_major {
            (self.start.x, self.sx, size.width)
        } else {
            (self.start.y, self.sy, size.height)
        };
        let origin = i64::from(origin);
        let limit = i64::from(limit);
        let last = (self.end - 1) as i64;
        let (lo, hi) = if dir > 0 {
            (-origin, limit - 1 - origin)
        } else {
            (origin - (limit - 1), origin)
        };
        let (lo, hi) = (lo.max(0), hi.min(last));
        if lo > hi {
            self.step = self.end;
        } else {
            self.step = lo as u64;
            self.end = hi as u64 + 1;
        }
        self
    }

    fn point_at(&self, step: u64) -> Point {
        let (major, minor) = if self.x_major {
            (self.dx, self.dy)
        } else {
            (self.dy, self.dx)
        };
        // minor steps taken after `step` major steps, ties rounded as the
        // accumulator loop does
        let minor_steps = if major == 0 {
            0
        } else {
            let (major, minor, step) = (u128::from(major), u128::from(minor), u128::from(step));
            ((2 * minor * step + major) / (2 * major)) as i64
        };
        let (kx, ky) = if self.x_major {
            (step as i64, minor_steps)
        } else {
            (minor_steps, step as i64)
        };
        // stays between start and end, so it fits back into i32
        Point::new(
            (i64::from(self.start.x) + i64::from(self.sx) * kx) as i32,
            (i64::from(self.start.y) + i64::from(self.sy) * ky) as i32,
        )
    }
}

impl Iterator for Bresenham {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.end {
            return None;
        }
        let point = self.point_at(self.step);
        self.step += 1;
        Some(point)
    }
}

/// Draw a line with [`Bresenham`], endpoints included.
///
/// Only the part of the walk whose major-axis coordinate is on the surface is
/// visited, so far off-surface endpoints cost nothing.
pub fn draw_line<S>(surface: &mut S, start: Point, end: Point, color: S::Color) -> Result<(), S::Error>
where
    S: PixelSurface + ?Sized,
{
    let size = surface.size();
    for point in Bresenham::new(start, end).clip_major(size) {
        surface.set_pixel(point, color)?;
    }
    Ok(())
}

/// Draw the one pixel wide border of a rectangle.
///
/// Drawn as four segments: top, bottom, left, right. The vertical sides skip
/// the corner rows so no pixel is written twice.
pub fn draw_rect_outline<S>(
    surface: &mut S,
    top_left: Point,
    size: Size,
    color: S::Color,
) -> Result<(), S::Error>
where
    S: PixelSurface + ?Sized,
{
    let (w, h) = (clamp_len(size.width), clamp_len(size.height));
    if w == 0 || h == 0 {
        return Ok(());
    }
    let left = top_left.x;
    let top = top_left.y;
    let right = left.saturating_add(w - 1);
    let bottom = top.saturating_add(h - 1);

    draw_line(surface, Point::new(left, top), Point::new(right, top), color)?;
    if h > 1 {
        draw_line(surface, Point::new(left, bottom), Point::new(right, bottom), color)?;
    }
    if h > 2 {
        let (inner_top, inner_bottom) = (top.saturating_add(1), bottom.saturating_sub(1));
        draw_line(surface, Point::new(left, inner_top), Point::new(left, inner_bottom), color)?;
        if w > 1 {
            draw_line(surface, Point::new(right, inner_top), Point::new(right, inner_bottom), color)?;
        }
    }
    Ok(())
}

/// Fill a rectangle, clipped to the surface, row by row.
pub fn fill_rect<S>(surface: &mut S, top_left: Point, size: Size, color: S::Color) -> Result<(), S::Error>
where
    S: PixelSurface + ?Sized,
{
    let bounds = surface.size();
    let x_start = top_left.x.max(0);
    let y_start = top_left.y.max(0);
    let x_end = top_left
        .x
        .saturating_add(clamp_len(size.width))
        .min(clamp_len(bounds.width));
    let y_end = top_left
        .y
        .saturating_add(clamp_len(size.height))
        .min(clamp_len(bounds.height));

    for y in y_start..y_end {
        for x in x_start..x_end {
            surface.set_pixel(Point::new(x, y), color)?;
        }
    }
    Ok(())
}

/// Set every pixel of the surface, row by row.
pub fn fill_surface<S>(surface: &mut S, color: S::Color) -> Result<(), S::Error>
where
    S: PixelSurface + ?Sized,
{
    let size = surface.size();
    fill_rect(surface, Point::zero(), size, color)
}
