//! Capabilities the panel needs from the HUB75 scan driver.
//!
//! The driver is owned and initialised by the application; the panel only
//! borrows it. Implement [`PhysicalDriver`] for whatever shifts pixels out to
//! the hardware, or wrap an `embedded-graphics` target in
//! [`FrameBufferDriver`](crate::framebuffer::FrameBufferDriver).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Point;
use embedded_graphics::prelude::Size;

use crate::color::pack565;

/// Pixel-level access to a scan driver in its own (physical) coordinates.
///
/// The driver must already be configured with the geometry the panel's
/// [`RemapStrategy`](crate::remap::RemapStrategy) assumes.
pub trait PhysicalDriver {
    /// Error surfaced by the driver. The panel returns it untouched.
    type Error;

    /// Write one pixel at a driver-space address.
    fn write_pixel(&mut self, point: Point, color: Rgb565) -> Result<(), Self::Error>;

    /// Pack 8-bit channels the way this driver expects.
    fn pack_color(&self, r: u8, g: u8, b: u8) -> Rgb565 {
        pack565(r, g, b)
    }

    /// Set the global brightness, 0 is off and 255 is full.
    fn set_brightness(&mut self, level: u8);

    /// Blank every physical pixel.
    fn clear_all(&mut self) -> Result<(), Self::Error>;

    /// The geometry the driver was configured with, if it can tell.
    fn geometry(&self) -> Option<Size> {
        None
    }
}

/// Drivers that render text themselves.
pub trait TextDriver: PhysicalDriver {
    /// Move the text cursor, in the driver's own coordinates.
    fn set_cursor(&mut self, point: Point);

    /// Colour used by the next [`render_text`](Self::render_text).
    fn set_text_color(&mut self, color: Rgb565);

    /// Integer glyph scale, 1 is the native font size.
    fn set_text_size(&mut self, size: u8);

    /// Draw `text` at the cursor and advance it.
    fn render_text(&mut self, text: &str) -> Result<(), Self::Error>;
}
