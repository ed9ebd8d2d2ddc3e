//! 8-bit RGB color.

use std::fmt;

/// A color with three 8-bit channels.
///
/// Values are stored exactly as read from the source image. The type is
/// `Copy` and hashable so palettes can detect duplicate entries cheaply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance between two colors.
    ///
    /// The maximum value is `3 * 255^2`, which fits comfortably in `u32`.
    ///
    /// ```
    /// use epa_dither::Rgb;
    ///
    /// let black = Rgb::new(0, 0, 0);
    /// let white = Rgb::new(255, 255, 255);
    /// assert_eq!(black.distance_squared(white), 3 * 255 * 255);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_bytes()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_symmetric() {
        let a = Rgb::new(10, 200, 30);
        let b = Rgb::new(250, 0, 99);
        assert_eq!(a.distance_squared(b), b.distance_squared(a));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let c = Rgb::new(255, 128, 0);
        assert_eq!(c.distance_squared(c), 0);
    }

    #[test]
    fn test_distance_per_channel() {
        let a = Rgb::new(0, 0, 0);
        assert_eq!(a.distance_squared(Rgb::new(3, 0, 0)), 9);
        assert_eq!(a.distance_squared(Rgb::new(0, 4, 0)), 16);
        assert_eq!(a.distance_squared(Rgb::new(0, 0, 5)), 25);
        assert_eq!(a.distance_squared(Rgb::new(3, 4, 5)), 50);
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
        assert_eq!(Rgb::new(255, 128, 0).to_string(), "#ff8000");
    }

    #[test]
    fn test_byte_conversion() {
        let c: Rgb = [1, 2, 3].into();
        let bytes: [u8; 3] = c.into();
        assert_eq!(bytes, [1, 2, 3]);
    }
}
