use image::RgbaImage;

pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Buffered per-pixel access to an image. Edits land in a copy of the raw
/// RGBA bytes and reach the image on [`PixelManipulator::render_changes`].
///
/// Coordinates are floored and mapped to a flat byte offset, so an `x` past
/// the end of a row addresses the start of the next one. Only offsets
/// outside the buffer are rejected.
pub struct PixelManipulator<'a> {
    surface: &'a mut RgbaImage,
    data: Vec<u8>,
    width: u32,
}

impl<'a> PixelManipulator<'a> {
    pub fn new(surface: &'a mut RgbaImage) -> Self {
        let data = surface.as_raw().clone();
        let width = surface.width();

        Self { surface, data, width }
    }

    fn offset(&self, x: f32, y: f32) -> Option<usize> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        let x = x.floor() as i64;
        let y = y.floor() as i64;
        let offset = y
            .checked_mul(self.width as i64)?
            .checked_add(x)?
            .checked_mul(4)?;

        let offset = usize::try_from(offset).ok()?;

        if offset.checked_add(4)? > self.data.len() {
            None
        } else {
            Some(offset)
        }
    }

    pub fn get_pixel(&self, x: f32, y: f32) -> Option<[u8; 4]> {
        let offset = self.offset(x, y)?;
        let mut rgba = [0; 4];

        rgba.copy_from_slice(&self.data[offset..offset + 4]);

        Some(rgba)
    }

    /// Returns `false` without touching the buffer when out of bounds.
    pub fn set_pixel(&mut self, x: f32, y: f32, rgba: [u8; 4]) -> bool {
        match self.offset(x, y) {
            Some(offset) => {
                self.data[offset..offset + 4].copy_from_slice(&rgba);
                true
            }
            None => false,
        }
    }

    pub fn render_changes(&mut self) {
        self.surface.copy_from_slice(&self.data);
    }
}
