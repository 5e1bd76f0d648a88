pub mod image;
pub mod story;

pub use image::*;
pub use story::*;
