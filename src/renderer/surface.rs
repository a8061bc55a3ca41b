//! CPU pixel surfaces
//!
//! A `Surface` is both a blit source (sprite sheet, star layer) and a blit
//! target (the composited frame). Pixels are tightly packed RGBA8.

use std::path::Path;

use bytemuck::{Pod, Zeroable};

use crate::sim::Rect;

/// One RGBA8 pixel
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn from_rgb(rgb: [u8; 3]) -> Self {
        Self::opaque(rgb[0], rgb[1], rgb[2])
    }

    /// Same colour ignoring alpha
    #[inline]
    pub fn same_rgb(&self, other: &Rgba) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

/// A 2D grid of pixels with an optional transparent key colour
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
    /// Source pixels of this colour are skipped when blitting from here
    color_key: Option<Rgba>,
}

impl Surface {
    /// A transparent surface
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; (width * height) as usize],
            color_key: None,
        }
    }

    /// Decode an image file (the sprite sheet)
    pub fn open(path: impl AsRef<Path>) -> Result<Self, image::ImageError> {
        let image = image::open(path)?.to_rgba8();
        let (width, height) = image.dimensions();
        Ok(Self {
            width,
            height,
            pixels: bytemuck::cast_slice(image.as_raw().as_slice()).to_vec(),
            color_key: None,
        })
    }

    /// Encode the surface as PNG
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        image::save_buffer_with_format(
            path,
            self.as_bytes(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Raw RGBA8 bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.pixels.as_slice())
    }

    pub fn set_color_key(&mut self, key: Option<Rgba>) {
        self.color_key = key;
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write one pixel; out-of-bounds writes are dropped
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Copy a region of `src` into a region of this surface.
    ///
    /// `None` means the whole surface on either side. The source region is
    /// stretched to the destination with nearest-neighbour sampling, clipped
    /// to both surfaces. Transparent and colour-keyed source pixels are
    /// skipped.
    pub fn copy(&mut self, src: &Surface, src_rect: Option<Rect>, dst_rect: Option<Rect>) {
        let src_rect = src_rect.unwrap_or_else(|| src.bounds());
        let dst_rect = dst_rect.unwrap_or_else(|| self.bounds());
        if src_rect.is_empty() || dst_rect.is_empty() {
            return;
        }
        let Some(visible) = dst_rect.intersection(&self.bounds()) else {
            return;
        };

        for dy in visible.y()..visible.max().y {
            let sy = src_rect.y() + (dy - dst_rect.y()) * src_rect.height() / dst_rect.height();
            for dx in visible.x()..visible.max().x {
                let sx = src_rect.x() + (dx - dst_rect.x()) * src_rect.width() / dst_rect.width();
                let Some(color) = src.pixel(sx, sy) else {
                    continue;
                };
                if color.a == 0 || src.color_key.is_some_and(|key| key.same_rgb(&color)) {
                    continue;
                }
                self.set_pixel(dx, dy, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::opaque(255, 0, 0);
    const GREEN: Rgba = Rgba::opaque(0, 255, 0);

    #[test]
    fn test_bytes_are_rgba_order() {
        let mut surface = Surface::new(1, 1);
        surface.set_pixel(0, 0, Rgba::new(1, 2, 3, 4));
        assert_eq!(surface.as_bytes(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut surface = Surface::new(2, 2);
        surface.set_pixel(-1, 0, RED);
        surface.set_pixel(2, 0, RED);
        assert!(surface.pixels().iter().all(|p| *p == Rgba::TRANSPARENT));
        assert_eq!(surface.pixel(5, 5), None);
    }

    #[test]
    fn test_copy_stretches_nearest() {
        let mut src = Surface::new(2, 1);
        src.set_pixel(0, 0, RED);
        src.set_pixel(1, 0, GREEN);

        let mut dst = Surface::new(4, 2);
        dst.copy(&src, None, None);
        assert_eq!(dst.pixel(0, 0), Some(RED));
        assert_eq!(dst.pixel(1, 1), Some(RED));
        assert_eq!(dst.pixel(2, 0), Some(GREEN));
        assert_eq!(dst.pixel(3, 1), Some(GREEN));
    }

    #[test]
    fn test_copy_honours_color_key() {
        let mut src = Surface::new(2, 1);
        src.set_pixel(0, 0, Rgba::BLACK);
        src.set_pixel(1, 0, RED);
        src.set_color_key(Some(Rgba::BLACK));

        let mut dst = Surface::new(2, 1);
        dst.fill(GREEN);
        dst.copy(&src, None, None);
        assert_eq!(dst.pixel(0, 0), Some(GREEN));
        assert_eq!(dst.pixel(1, 0), Some(RED));
    }

    #[test]
    fn test_copy_clips_to_target() {
        let mut src = Surface::new(4, 4);
        src.fill(RED);
        let mut dst = Surface::new(4, 4);
        dst.copy(&src, None, Some(Rect::new(2, 2, 4, 4)));
        assert_eq!(dst.pixel(1, 1), Some(Rgba::TRANSPARENT));
        assert_eq!(dst.pixel(3, 3), Some(RED));
    }

    #[test]
    fn test_copy_sub_rect() {
        let mut src = Surface::new(3, 1);
        src.set_pixel(2, 0, GREEN);
        src.set_pixel(0, 0, RED);
        let mut dst = Surface::new(2, 2);
        dst.copy(&src, Some(Rect::new(2, 0, 1, 1)), Some(Rect::new(0, 0, 2, 2)));
        assert!(dst.pixels().iter().all(|p| *p == GREEN));
    }
}
