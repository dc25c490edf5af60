use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self {
            r: 255,
            g: 255,
            b: 255,
            a: 255,
        }
    }
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a packed RGB integer: red in bits 16-23, green in 8-15,
    /// blue in 0-7. Alpha is fully opaque.
    pub fn from_rgb_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
            a: 255,
        }
    }

    /// Unpack a packed RGBA integer: red in bits 24-31, green in 16-23,
    /// blue in 8-15, alpha in 0-7.
    pub fn from_rgba_u32(value: u32) -> Self {
        Self {
            r: ((value >> 24) & 0xFF) as u8,
            g: ((value >> 16) & 0xFF) as u8,
            b: ((value >> 8) & 0xFF) as u8,
            a: (value & 0xFF) as u8,
        }
    }

    /// Pack into an RGB integer. The alpha channel is not represented.
    pub fn to_rgb_u32(&self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Pack into an RGBA integer with alpha in the low byte.
    pub fn to_rgba_u32(&self) -> u32 {
        (u32::from(self.r) << 24)
            | (u32::from(self.g) << 16)
            | (u32::from(self.b) << 8)
            | u32::from(self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque_white() {
        let c = Color::default();
        assert_eq!((c.r, c.g, c.b, c.a), (255, 255, 255, 255));
    }

    #[test]
    fn test_rgb_defaults_alpha_opaque() {
        let c = Color::rgb(1, 2, 3);
        assert_eq!(c.a, 255);
    }

    #[test]
    fn test_rgb_u32_round_trip() {
        let c = Color::rgb(0x12, 0x34, 0x56);
        assert_eq!(c.to_rgb_u32(), 0x123456);
        assert_eq!(Color::from_rgb_u32(0x123456), c);
    }

    #[test]
    fn test_rgba_u32_round_trip() {
        let c = Color::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_rgba_u32(), 0x12345678);
        assert_eq!(Color::from_rgba_u32(0x12345678), c);
    }

    #[test]
    fn test_from_rgb_u32_ignores_high_byte() {
        let c = Color::from_rgb_u32(0xFF00_00FF);
        assert_eq!((c.r, c.g, c.b, c.a), (0, 0, 255, 255));
    }
}
