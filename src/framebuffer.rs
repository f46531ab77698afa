//! [`PhysicalDriver`] on top of an `embedded-graphics` framebuffer.
//!
//! The HUB75 DMA framebuffers from `hub75-framebuffer` (the ones the ESP32
//! LCD_CAM, PARL_IO and I2S transports stream out) are `DrawTarget<Color =
//! Rgb888>`s addressed in driver space. [`FrameBufferDriver`] lets a
//! [`QuarterScanPanel`](crate::QuarterScanPanel) draw into one.
//!
//! For the default remap the framebuffer must be sized as the driver sees the
//! panel, 8 rows by 64 columns:
//!
//! ```
//! use embedded_graphics::pixelcolor::Rgb565;
//! use embedded_graphics::prelude::*;
//! use hub75_framebuffer::compute_frame_count;
//! use hub75_framebuffer::compute_rows;
//! use hub75_framebuffer::plain::DmaFrameBuffer;
//! use hub75_quarter_scan::framebuffer::FrameBufferDriver;
//! use hub75_quarter_scan::QuarterScanPanel;
//!
//! const ROWS: usize = 8;
//! const COLS: usize = 64;
//! const BITS: u8 = 3;
//! const NROWS: usize = compute_rows(ROWS);
//! const FRAME_COUNT: usize = compute_frame_count(BITS);
//!
//! let fb = DmaFrameBuffer::<ROWS, COLS, NROWS, BITS, FRAME_COUNT>::new();
//! let mut driver = FrameBufferDriver::new(fb);
//! let mut panel: QuarterScanPanel<'_, _> = QuarterScanPanel::new(&mut driver).unwrap();
//! panel.fill_screen(Rgb565::BLUE).unwrap();
//! ```

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::pixelcolor::RgbColor;
use embedded_graphics::prelude::Point;
use embedded_graphics::prelude::Size;
use embedded_graphics::Pixel;

use crate::driver::PhysicalDriver;

const FULL_BRIGHTNESS: u8 = 255;

fn scale(channel: u8, brightness: u8) -> u8 {
    ((u16::from(channel) * (u16::from(brightness) + 1)) >> 8) as u8
}

/// Drives an `Rgb888` draw target in physical coordinates.
///
/// Colours arrive as 5-6-5, are widened to 8-8-8 and scaled by the brightness
/// before being drawn. Brightness only affects pixels written after it is set.
pub struct FrameBufferDriver<FB> {
    fb: FB,
    brightness: u8,
}

impl<FB: DrawTarget<Color = Rgb888>> FrameBufferDriver<FB> {
    /// Wrap a framebuffer at full brightness.
    pub fn new(fb: FB) -> Self {
        Self {
            fb,
            brightness: FULL_BRIGHTNESS,
        }
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn inner(&self) -> &FB {
        &self.fb
    }

    /// The framebuffer, e.g. to hand to a DMA transfer.
    pub fn inner_mut(&mut self) -> &mut FB {
        &mut self.fb
    }

    pub fn into_inner(self) -> FB {
        self.fb
    }

    fn dim(&self, color: Rgb565) -> Rgb888 {
        let color = Rgb888::from(color);
        if self.brightness == FULL_BRIGHTNESS {
            return color;
        }
        Rgb888::new(
            scale(color.r(), self.brightness),
            scale(color.g(), self.brightness),
            scale(color.b(), self.brightness),
        )
    }
}

impl<FB: DrawTarget<Color = Rgb888>> PhysicalDriver for FrameBufferDriver<FB> {
    type Error = FB::Error;

    fn write_pixel(&mut self, point: Point, color: Rgb565) -> Result<(), Self::Error> {
        let color = self.dim(color);
        self.fb.draw_iter(core::iter::once(Pixel(point, color)))
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn clear_all(&mut self) -> Result<(), Self::Error> {
        self.fb.clear(Rgb888::BLACK)
    }

    fn geometry(&self) -> Option<Size> {
        Some(self.fb.bounding_box().size)
    }
}

#[cfg(feature = "log")]
impl<FB: DrawTarget<Color = Rgb888>> core::fmt::Debug for FrameBufferDriver<FB> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let size = self.fb.bounding_box().size;
        f.debug_struct("FrameBufferDriver")
            .field("cols", &size.width)
            .field("rows", &size.height)
            .field("brightness", &self.brightness)
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl<FB: DrawTarget<Color = Rgb888>> defmt::Format for FrameBufferDriver<FB> {
    fn format(&self, f: defmt::Formatter) {
        let size = self.fb.bounding_box().size;
        defmt::write!(f, "FrameBufferDriver<{}x{}>", size.width, size.height);
        defmt::write!(f, " brightness: {}", self.brightness);
    }
}
