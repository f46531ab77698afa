//! Drawing on quarter-scan P10 32×16 RGB LED panels through a HUB75 driver.
//!
//! ## The problem
//!
//! A P10 32×16 outdoor panel is scanned at 1/4: the address lines select one of
//! four scan lines, and the upper (R1 G1 B1) and lower (R2 G2 B2) data lanes
//! each shift out a chain that is longer than a panel row. A HUB75 scan driver
//! configured for a plain 32×16, 1/8-scan panel therefore lights the wrong
//! LEDs, duplicating some pixels and never reaching others.
//!
//! The usual fix is to configure the driver with the geometry the shift
//! registers actually have (64×8 for the common wiring) and translate every
//! logical pixel into that space. That translation lives in [`remap`]; the
//! rest of the crate is plumbing around it.
//!
//! ## Layout
//!
//! - [`remap`]: the [`RemapStrategy`] trait, the [`QuarterWidthBase`] (64×8)
//!   and [`HalfHeight`] (32×16) wirings, and [`remap::validate`] to check any
//!   strategy is a bijection.
//! - [`driver`]: what the panel needs from the scan driver, [`PhysicalDriver`]
//!   and the optional [`TextDriver`].
//! - [`primitives`]: lines, rectangles and fills over a set-pixel capability.
//! - [`panel`]: [`QuarterScanPanel`], the logical 32×16 surface. It is also an
//!   `embedded-graphics` `DrawTarget`, so fonts and shapes work unchanged.
//! - [`framebuffer`]: a [`PhysicalDriver`] for `hub75-framebuffer` DMA
//!   framebuffers and any other `Rgb888` draw target.
//!
//! ## Available Feature Flags
//!
//! - `log` / `defmt`: emit setup diagnostics (geometry checks) through the
//!   chosen logging framework and implement `defmt::Format` for the public
//!   types.
//! - `esp-hal-dma`, `esp32`, `esp32s3`, `esp32c6`: forwarded to
//!   `hub75-framebuffer` so the framebuffers use `esp-hal` DMA buffers and the
//!   right byte ordering. At most one chip feature may be enabled.
//! - `skip-black-pixels`: forwarded to `hub75-framebuffer`.
#![no_std]
#![warn(clippy::all)]

// must stay first, the other modules use its macros
mod fmt;

pub mod color;
pub mod driver;
pub mod framebuffer;
#[cfg(test)]
mod mock;
pub mod panel;
pub mod primitives;
pub mod remap;

use embedded_graphics::pixelcolor::Rgb565;

pub use color::pack565;
pub use driver::PhysicalDriver;
pub use driver::TextDriver;
pub use panel::PanelError;
pub use panel::QuarterScanPanel;
pub use remap::HalfHeight;
pub use remap::QuarterWidthBase;
pub use remap::RemapStrategy;

/// Colour passed from the panel to the driver, 5-6-5 packed.
pub type Color = Rgb565;

/// Logical panel width.
pub const PANEL_COLS: usize = 32;
/// Logical panel height.
pub const PANEL_ROWS: usize = 16;
