//! Recording driver for tests.

extern crate std;

use std::string::String;
use std::string::ToString;
use std::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Point;
use embedded_graphics::prelude::Size;

use crate::color::pack565;
use crate::driver::PhysicalDriver;
use crate::driver::TextDriver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Write(Point, Rgb565),
    ClearAll,
    Brightness(u8),
    Cursor(Point),
    TextColor(Rgb565),
    TextSize(u8),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WriteFailed;

#[derive(Debug, Default)]
pub(crate) struct MockDriver {
    pub(crate) calls: Vec<Call>,
    geometry: Option<Size>,
    swapped_packing: bool,
    writes_left: Option<usize>,
}

impl MockDriver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_geometry(size: Size) -> Self {
        Self {
            geometry: Some(size),
            ..Self::default()
        }
    }

    /// Pack red into the blue bits and vice versa.
    pub(crate) fn with_swapped_packing(mut self) -> Self {
        self.swapped_packing = true;
        self
    }

    pub(crate) fn fail_after(mut self, writes: usize) -> Self {
        self.writes_left = Some(writes);
        self
    }

    pub(crate) fn writes(&self) -> impl Iterator<Item = (Point, Rgb565)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            Call::Write(p, c) => Some((*p, *c)),
            _ => None,
        })
    }
}

impl PhysicalDriver for MockDriver {
    type Error = WriteFailed;

    fn write_pixel(&mut self, point: Point, color: Rgb565) -> Result<(), WriteFailed> {
        if let Some(left) = self.writes_left.as_mut() {
            if *left == 0 {
                return Err(WriteFailed);
            }
            *left -= 1;
        }
        self.calls.push(Call::Write(point, color));
        Ok(())
    }

    fn pack_color(&self, r: u8, g: u8, b: u8) -> Rgb565 {
        if self.swapped_packing {
            pack565(b, g, r)
        } else {
            pack565(r, g, b)
        }
    }

    fn set_brightness(&mut self, level: u8) {
        self.calls.push(Call::Brightness(level));
    }

    fn clear_all(&mut self) -> Result<(), WriteFailed> {
        self.calls.push(Call::ClearAll);
        Ok(())
    }

    fn geometry(&self) -> Option<Size> {
        self.geometry
    }
}

impl TextDriver for MockDriver {
    fn set_cursor(&mut self, point: Point) {
        self.calls.push(Call::Cursor(point));
    }

    fn set_text_color(&mut self, color: Rgb565) {
        self.calls.push(Call::TextColor(color));
    }

    fn set_text_size(&mut self, size: u8) {
        self.calls.push(Call::TextSize(size));
    }

    fn render_text(&mut self, text: &str) -> Result<(), WriteFailed> {
        self.calls.push(Call::Text(text.to_string()));
        Ok(())
    }
}
