//! Scale-blit helper
//!
//! All game coordinates are in the 224x256 logical screen. Destination
//! rectangles are scaled up to the display surface here and nowhere else.

use super::surface::Surface;
use crate::consts::SCALE;
use crate::sim::Rect;

/// Copy `src` of `texture` to the logical rectangle `dst` on `target`.
///
/// `dst` position and size are multiplied by `SCALE`; `None` covers the
/// whole target unscaled.
pub fn copy_scaled(target: &mut Surface, texture: &Surface, src: Option<Rect>, dst: Option<Rect>) {
    let dst = dst.map(|rect| rect.scaled(SCALE));
    target.copy(texture, src, dst);
}
