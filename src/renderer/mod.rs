//! Software rendering module
//!
//! Sprites are blitted from one sheet onto a CPU frame buffer at a fixed
//! integer scale. Presenting the buffer is up to the host.

pub mod blit;
pub mod scene;
pub mod sprites;
pub mod surface;

pub use blit::copy_scaled;
pub use scene::Renderer;
pub use surface::{Rgba, Surface};
