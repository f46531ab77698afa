//! The 32×16 logical panel.
//!
//! [`QuarterScanPanel`] borrows an initialised scan driver and exposes the
//! panel as it looks on the wall. Every pixel goes through the panel's
//! [`RemapStrategy`] and is then written to the driver, one call per pixel, in
//! the order the primitive enumerates them.
//!
//! Coordinates outside `[0, 32) × [0, 16)` are dropped without reaching the
//! driver. That is not an error: a rectangle hanging off the edge simply draws
//! its visible part.
//!
//! # Example
//! ```
//! use core::convert::Infallible;
//!
//! use embedded_graphics::pixelcolor::Rgb565;
//! use embedded_graphics::prelude::*;
//! use embedded_graphics::primitives::{Circle, PrimitiveStyle};
//! use hub75_quarter_scan::{PhysicalDriver, QuarterScanPanel};
//!
//! /// Driver stand-in that counts pixel writes.
//! struct Counter(usize);
//!
//! impl PhysicalDriver for Counter {
//!     type Error = Infallible;
//!
//!     fn write_pixel(&mut self, _point: Point, _color: Rgb565) -> Result<(), Infallible> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//!
//!     fn set_brightness(&mut self, _level: u8) {}
//!
//!     fn clear_all(&mut self) -> Result<(), Infallible> {
//!         Ok(())
//!     }
//!
//!     fn geometry(&self) -> Option<Size> {
//!         Some(Size::new(64, 8))
//!     }
//! }
//!
//! let mut driver = Counter(0);
//! let mut panel: QuarterScanPanel<'_, Counter> = QuarterScanPanel::new(&mut driver).unwrap();
//! panel.draw_line(Point::new(0, 0), Point::new(31, 15), Rgb565::RED).unwrap();
//! Circle::new(Point::new(10, 2), 12)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb565::GREEN, 1))
//!     .draw(&mut panel)
//!     .unwrap();
//! assert!(driver.0 > 32);
//! ```

use core::fmt;
use core::marker::PhantomData;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::RgbColor;
use embedded_graphics::prelude::OriginDimensions;
use embedded_graphics::prelude::Point;
use embedded_graphics::prelude::Size;
use embedded_graphics::Pixel;

use crate::driver::PhysicalDriver;
use crate::driver::TextDriver;
use crate::primitives;
use crate::primitives::PixelSurface;
use crate::remap::QuarterWidthBase;
use crate::remap::RemapStrategy;
use crate::Color;
use crate::PANEL_COLS;
use crate::PANEL_ROWS;

/// Failure to set up a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// The driver reports a geometry the remap strategy was not written for.
    /// Sizes are `(cols, rows)`.
    GeometryMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::GeometryMismatch { expected, actual } => write!(
                f,
                "driver configured as {}x{}, remap expects {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
        }
    }
}

/// A quarter-scan P10 panel drawn in logical 32×16 coordinates.
///
/// The driver is borrowed for the lifetime of the panel; the application keeps
/// ownership and tears it down. `S` selects the wiring, see
/// [`remap`](crate::remap).
pub struct QuarterScanPanel<'a, D: PhysicalDriver, S: RemapStrategy = QuarterWidthBase> {
    driver: &'a mut D,
    _strategy: PhantomData<S>,
}

impl<'a, D: PhysicalDriver, S: RemapStrategy> QuarterScanPanel<'a, D, S> {
    /// Wrap an initialised driver.
    ///
    /// The driver must already be configured with `S::physical_size()`. When
    /// the driver can report its geometry a mismatch is rejected here, since a
    /// wrongly sized driver produces a consistent but scrambled picture.
    pub fn new(driver: &'a mut D) -> Result<Self, PanelError> {
        let expected = S::physical_size();
        match driver.geometry() {
            Some(actual) if actual != expected => {
                warn!(
                    "driver geometry {}x{} does not match remap geometry {}x{}",
                    actual.width,
                    actual.height,
                    expected.width,
                    expected.height
                );
                return Err(PanelError::GeometryMismatch {
                    expected: (expected.width, expected.height),
                    actual: (actual.width, actual.height),
                });
            }
            Some(_) => {
                debug!(
                    "panel {}x{} on driver {}x{}",
                    PANEL_COLS,
                    PANEL_ROWS,
                    expected.width,
                    expected.height
                );
            }
            None => {
                debug!(
                    "driver geometry unknown, assuming {}x{}",
                    expected.width,
                    expected.height
                );
            }
        }
        Ok(Self {
            driver,
            _strategy: PhantomData,
        })
    }

    pub fn driver(&self) -> &D {
        &*self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut *self.driver
    }

    /// Set one logical pixel. Points off the panel are ignored.
    pub fn set_pixel(&mut self, p: Point, color: Color) -> Result<(), D::Error> {
        if p.x < 0 || p.y < 0 {
            return Ok(());
        }
        self.set_pixel_internal(p.x as usize, p.y as usize, color)
    }

    fn set_pixel_internal(&mut self, x: usize, y: usize, color: Color) -> Result<(), D::Error> {
        if x >= PANEL_COLS || y >= PANEL_ROWS {
            return Ok(());
        }
        let physical = S::remap(x, y);
        self.driver.write_pixel(physical.to_point(), color)
    }

    /// Fill the part of a rectangle that lies on the panel.
    pub fn fill_rect(&mut self, top_left: Point, size: Size, color: Color) -> Result<(), D::Error> {
        primitives::fill_rect(self, top_left, size, color)
    }

    /// Draw a rectangle border.
    pub fn draw_rect_outline(
        &mut self,
        top_left: Point,
        size: Size,
        color: Color,
    ) -> Result<(), D::Error> {
        primitives::draw_rect_outline(self, top_left, size, color)
    }

    /// Draw a Bresenham line, both endpoints included.
    pub fn draw_line(&mut self, start: Point, end: Point, color: Color) -> Result<(), D::Error> {
        primitives::draw_line(self, start, end, color)
    }

    /// Set all 512 logical pixels.
    pub fn fill_screen(&mut self, color: Color) -> Result<(), D::Error> {
        primitives::fill_surface(self, color)
    }

    /// Fill the panel with black through the remapper.
    pub fn clear(&mut self) -> Result<(), D::Error> {
        self.fill_screen(Rgb565::BLACK)
    }

    /// Ask the driver to blank its whole physical area.
    pub fn clear_physical(&mut self) -> Result<(), D::Error> {
        self.driver.clear_all()
    }

    /// Pack a colour the way the driver does.
    pub fn color565(&self, r: u8, g: u8, b: u8) -> Color {
        self.driver.pack_color(r, g, b)
    }

    pub fn set_brightness(&mut self, level: u8) {
        self.driver.set_brightness(level);
    }
}

/// Text is rendered by the driver, the panel only forwards.
impl<'a, D: TextDriver, S: RemapStrategy> QuarterScanPanel<'a, D, S> {
    pub fn set_cursor(&mut self, point: Point) {
        self.driver.set_cursor(point);
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.driver.set_text_color(color);
    }

    pub fn set_text_size(&mut self, size: u8) {
        self.driver.set_text_size(size);
    }

    pub fn render_text(&mut self, text: &str) -> Result<(), D::Error> {
        self.driver.render_text(text)
    }
}

impl<'a, D: PhysicalDriver, S: RemapStrategy> PixelSurface for QuarterScanPanel<'a, D, S> {
    type Color = Color;
    type Error = D::Error;

    fn size(&self) -> Size {
        Size::new(PANEL_COLS as u32, PANEL_ROWS as u32)
    }

    fn set_pixel(&mut self, point: Point, color: Color) -> Result<(), D::Error> {
        QuarterScanPanel::set_pixel(self, point, color)
    }
}

impl<'a, D: PhysicalDriver, S: RemapStrategy> OriginDimensions for QuarterScanPanel<'a, D, S> {
    fn size(&self) -> Size {
        Size::new(PANEL_COLS as u32, PANEL_ROWS as u32)
    }
}

impl<'a, D: PhysicalDriver, S: RemapStrategy> embedded_graphics::draw_target::DrawTarget
    for QuarterScanPanel<'a, D, S>
{
    type Color = Color;

    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            QuarterScanPanel::set_pixel(self, point, color)?;
        }
        Ok(())
    }
}

impl<'a, D: PhysicalDriver, S: RemapStrategy> fmt::Debug for QuarterScanPanel<'a, D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let physical = S::physical_size();
        f.debug_struct("QuarterScanPanel")
            .field("cols", &PANEL_COLS)
            .field("rows", &PANEL_ROWS)
            .field("physical_cols", &physical.width)
            .field("physical_rows", &physical.height)
            .finish()
    }
}
