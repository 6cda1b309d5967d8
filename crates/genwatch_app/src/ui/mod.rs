pub mod render;
pub mod styles;

pub use render::render;
