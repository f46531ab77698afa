//! Logical to physical coordinate remapping for quarter-scan panels.
//!
//! A P10 32×16 outdoor panel is scanned at 1/4: only four physical scan lines
//! exist per data lane, and each lane (RGB1 for the upper half, RGB2 for the
//! lower half) shifts out more columns than the panel is wide. The HUB75 scan
//! driver therefore has to be configured with a geometry that differs from the
//! 32×16 picture, and every logical pixel must be folded into the position its
//! LED actually occupies in the shift-register chain.
//!
//! A [`RemapStrategy`] is a pure, total function from the logical domain
//! `x ∈ [0, 32)`, `y ∈ [0, 16)` to a [`PhysicalPoint`] inside the strategy's
//! `PHYSICAL_COLS × PHYSICAL_ROWS` driver geometry. The function must be a
//! bijection: 512 logical pixels land on 512 distinct physical positions. Two
//! strategies ship with the crate:
//!
//! - [`QuarterWidthBase`]: driver configured as 64×8 (the default).
//! - [`HalfHeight`]: driver configured as 32×16, rows folded within each half.
//!
//! Which one lights the right LEDs depends on how the particular panel is
//! wired; confirm against the panel before trusting either. Other wirings can
//! implement the trait, and [`validate`] checks any strategy by exhaustive
//! enumeration.
//!
//! Strategies never see out-of-range input: the panel discards coordinates
//! outside the logical surface before remapping.

use core::fmt;

use embedded_graphics::prelude::Point;
use embedded_graphics::prelude::Size;

use crate::PANEL_COLS;
use crate::PANEL_ROWS;

/// Width of a shift-register column block.
const BLOCK: usize = 8;

const LOGICAL_PIXELS: usize = PANEL_COLS * PANEL_ROWS;

/// Which set of colour data lines drives a physical row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RowHalf {
    /// Rows driven by R1/G1/B1.
    Upper,
    /// Rows driven by R2/G2/B2.
    Lower,
}

impl RowHalf {
    /// The half a driver row belongs to in a driver with `rows` rows.
    #[must_use]
    pub const fn of(driver_y: usize, rows: usize) -> Self {
        if driver_y < rows / 2 {
            RowHalf::Upper
        } else {
            RowHalf::Lower
        }
    }
}

/// A pixel address in driver space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhysicalPoint {
    pub x: usize,
    pub y: usize,
    pub half: RowHalf,
}

impl PhysicalPoint {
    /// The address as an `embedded-graphics` point for the driver write.
    #[must_use]
    pub const fn to_point(self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Maps logical panel coordinates onto the scan driver's geometry.
///
/// Implementors are zero-sized wiring descriptions selected at compile time.
/// `remap` is only called with `x < 32` and `y < 16`, must not panic for any of
/// those, and must be a bijection onto `PHYSICAL_COLS × PHYSICAL_ROWS`.
pub trait RemapStrategy {
    /// Columns the driver must be configured with.
    const PHYSICAL_COLS: usize;
    /// Rows the driver must be configured with.
    const PHYSICAL_ROWS: usize;

    /// Map a logical pixel to its driver address.
    fn remap(x: usize, y: usize) -> PhysicalPoint;

    /// The driver geometry this strategy assumes.
    fn physical_size() -> Size {
        Size::new(Self::PHYSICAL_COLS as u32, Self::PHYSICAL_ROWS as u32)
    }
}

/// Remap for a scan driver configured as 64 columns × 8 rows.
///
/// Each driver row carries two logical rows four apart, interleaved in 8-pixel
/// blocks: logical rows with `y & 4 == 0` use the even blocks, the others the
/// odd blocks.
///
/// ```text
/// logical y   driver y        logical x   y & 4 == 0   y & 4 != 0
///  0..=3       0..=3            0..=7       0..=7        8..=15
///  4..=7       0..=3            8..=15     16..=23      24..=31
///  8..=11      4..=7           16..=23     32..=39      40..=47
/// 12..=15      4..=7           24..=31     48..=55      56..=63
/// ```
///
/// ```
/// use hub75_quarter_scan::remap::{QuarterWidthBase, RemapStrategy};
///
/// let p = QuarterWidthBase::remap(10, 0);
/// assert_eq!((p.x, p.y), (18, 0));
/// let p = QuarterWidthBase::remap(10, 4);
/// assert_eq!((p.x, p.y), (26, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuarterWidthBase;

impl RemapStrategy for QuarterWidthBase {
    const PHYSICAL_COLS: usize = PANEL_COLS * 2;
    const PHYSICAL_ROWS: usize = PANEL_ROWS / 2;

    fn remap(x: usize, y: usize) -> PhysicalPoint {
        let driver_y = (y / 8) * 4 + (y % 4);
        let lane = if y & 4 == 0 { 0 } else { 1 };
        let driver_x = ((x / BLOCK) * 2 + lane) * BLOCK + x % BLOCK;
        PhysicalPoint {
            x: driver_x,
            y: driver_y,
            half: RowHalf::of(driver_y, Self::PHYSICAL_ROWS),
        }
    }
}

/// Remap for a scan driver configured as 32 columns × 16 rows.
///
/// Rows 0..8 stay in the upper half and rows 8..16 in the lower half. Within
/// a half the two groups of four rows swap places, and the rows that end up
/// in the second group (`row & 4`) are mirrored inside each 8-pixel block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HalfHeight;

impl RemapStrategy for HalfHeight {
    const PHYSICAL_COLS: usize = PANEL_COLS;
    const PHYSICAL_ROWS: usize = PANEL_ROWS;

    fn remap(x: usize, y: usize) -> PhysicalPoint {
        let half_rows = Self::PHYSICAL_ROWS / 2;
        let row_in_half = y % half_rows;
        let quadrant = (row_in_half / 4) % 2;
        let pos = row_in_half % 4;
        let row = if quadrant == 0 { pos + 4 } else { pos };

        let driver_x = if row & 4 != 0 {
            (x / BLOCK) * BLOCK + (BLOCK - 1 - x % BLOCK)
        } else {
            x
        };
        let driver_y = row + (y / half_rows) * half_rows;
        PhysicalPoint {
            x: driver_x,
            y: driver_y,
            half: RowHalf::of(driver_y, Self::PHYSICAL_ROWS),
        }
    }
}

/// Why a strategy is not a bijection onto its driver geometry.
///
/// Coordinates are `(x, y)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RemapError {
    /// The driver geometry does not hold exactly one slot per logical pixel.
    GeometrySize { cols: usize, rows: usize },
    /// A logical pixel maps outside the driver geometry.
    OutOfBounds {
        logical: (usize, usize),
        physical: (usize, usize),
    },
    /// Two logical pixels map to the same physical position.
    Collision {
        first: (usize, usize),
        second: (usize, usize),
        physical: (usize, usize),
    },
    /// The reported row half disagrees with the physical row.
    HalfMismatch {
        logical: (usize, usize),
        physical: (usize, usize),
    },
}

impl fmt::Display for RemapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemapError::GeometrySize { cols, rows } => write!(
                f,
                "driver geometry {}x{} does not hold {} pixels",
                cols, rows, LOGICAL_PIXELS
            ),
            RemapError::OutOfBounds { logical, physical } => write!(
                f,
                "logical {:?} maps outside the driver to {:?}",
                logical, physical
            ),
            RemapError::Collision {
                first,
                second,
                physical,
            } => write!(
                f,
                "logical {:?} and {:?} both map to {:?}",
                first, second, physical
            ),
            RemapError::HalfMismatch { logical, physical } => write!(
                f,
                "logical {:?} maps to {:?} with the wrong row half",
                logical, physical
            ),
        }
    }
}

/// Check that `S` maps the 32×16 surface one-to-one onto its driver geometry.
///
/// Every logical pixel is remapped; the first bound violation, row half
/// disagreement or collision found in row-major order is returned.
pub fn validate<S: RemapStrategy>() -> Result<(), RemapError> {
    if S::PHYSICAL_COLS * S::PHYSICAL_ROWS != LOGICAL_PIXELS {
        return Err(RemapError::GeometrySize {
            cols: S::PHYSICAL_COLS,
            rows: S::PHYSICAL_ROWS,
        });
    }

    // logical index + 1 of the pixel owning each physical slot, 0 when free
    let mut owners = [0u16; LOGICAL_PIXELS];
    for y in 0..PANEL_ROWS {
        for x in 0..PANEL_COLS {
            let p = S::remap(x, y);
            if p.x >= S::PHYSICAL_COLS || p.y >= S::PHYSICAL_ROWS {
                return Err(RemapError::OutOfBounds {
                    logical: (x, y),
                    physical: (p.x, p.y),
                });
            }
            if p.half != RowHalf::of(p.y, S::PHYSICAL_ROWS) {
                return Err(RemapError::HalfMismatch {
                    logical: (x, y),
                    physical: (p.x, p.y),
                });
            }
            let slot = &mut owners[p.y * S::PHYSICAL_COLS + p.x];
            if *slot != 0 {
                let prev = *slot as usize - 1;
                return Err(RemapError::Collision {
                    first: (prev % PANEL_COLS, prev / PANEL_COLS),
                    second: (x, y),
                    physical: (p.x, p.y),
                });
            }
            *slot = (y * PANEL_COLS + x + 1) as u16;
        }
    }
    Ok(())
}
