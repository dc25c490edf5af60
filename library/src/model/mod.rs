pub mod color;
pub mod value;

pub use color::Color;
pub use value::{PropertyValue, TryGetProperty};
