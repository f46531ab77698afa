//! 5-6-5 colour packing.
//!
//! The panel and its driver agree on [`Rgb565`] as the pixel colour. The
//! remapper never looks at it; only the driver interprets the bits.

use embedded_graphics::pixelcolor::Rgb565;

/// Pack 8-bit channels into 5-6-5 by truncating the low bits.
///
/// Red keeps its top 5 bits, green its top 6 and blue its top 5, giving
/// `rrrrrggg gggbbbbb` in the raw 16-bit storage.
///
/// ```
/// use embedded_graphics::pixelcolor::IntoStorage;
/// use hub75_quarter_scan::pack565;
///
/// assert_eq!(pack565(255, 255, 255).into_storage(), 0xFFFF);
/// assert_eq!(pack565(0, 0, 0).into_storage(), 0);
/// ```
#[must_use]
pub fn pack565(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::IntoStorage;
    use embedded_graphics::pixelcolor::RgbColor;

    use super::*;

    #[test]
    fn test_white_and_black() {
        assert_eq!(pack565(255, 255, 255).into_storage(), 0xFFFF);
        assert_eq!(pack565(255, 255, 255), Rgb565::WHITE);
        assert_eq!(pack565(0, 0, 0).into_storage(), 0);
        assert_eq!(pack565(0, 0, 0), Rgb565::BLACK);
    }

    #[test]
    fn test_primaries() {
        assert_eq!(pack565(255, 0, 0).into_storage(), 0xF800);
        assert_eq!(pack565(0, 255, 0).into_storage(), 0x07E0);
        assert_eq!(pack565(0, 0, 255).into_storage(), 0x001F);
    }

    #[test]
    fn test_truncates_low_bits() {
        // 0b1000_0111 keeps 0b10000 for red/blue and 0b100001 for green
        let color = pack565(0x87, 0x87, 0x87);
        assert_eq!(color.r(), 0x10);
        assert_eq!(color.g(), 0x21);
        assert_eq!(color.b(), 0x10);

        // values below one step vanish
        assert_eq!(pack565(7, 3, 7).into_storage(), 0);
        assert_eq!(pack565(8, 4, 8).into_storage(), 0b00001_000001_00001);
    }
}
