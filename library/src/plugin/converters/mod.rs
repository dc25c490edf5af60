mod hex_color;
mod rgb_color;

pub use hex_color::HexColorConverter;
pub use rgb_color::RgbColorConverter;
