use std::path::Path;

use crate::{
    brushes::{self, DrawContext},
    insert::insert,
    Bitmap, BitmapError, Color, Result,
};

/// State of one editing session: the image being edited plus the current pen.
///
/// Every editor command maps to one method. A session is used by one caller at a time,
/// nothing in here is shared.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    image: Option<Bitmap>,
    draw_color: Color,
    line_width: i32,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session starting with the given pen instead of black with width 0.
    pub fn with_pen(draw_color: Color, line_width: i32) -> Self {
        Self {
            image: None,
            draw_color,
            line_width,
        }
    }

    pub fn image(&self) -> Option<&Bitmap> {
        self.image.as_ref()
    }

    pub fn draw_color(&self) -> Color {
        self.draw_color
    }

    pub fn line_width(&self) -> i32 {
        self.line_width
    }

    pub fn draw_context(&self) -> DrawContext {
        DrawContext::new(self.draw_color, self.line_width)
    }

    fn current_image(&mut self) -> Result<&mut Bitmap> {
        self.image.as_mut().ok_or(BitmapError::NoImageLoaded)
    }

    /// `edit <path>`
    ///
    /// On failure the current image stays as it is.
    pub fn edit(&mut self, path: &Path) -> Result<()> {
        let bitmap = Bitmap::load_file(path)?;
        self.replace_image(bitmap);
        Ok(())
    }

    /// Same as [`EditSession::edit`] for data that is already in memory.
    pub fn load_bytes(&mut self, data: &[u8]) -> Result<()> {
        let bitmap = Bitmap::load(data)?;
        self.replace_image(bitmap);
        Ok(())
    }

    pub fn replace_image(&mut self, bitmap: Bitmap) {
        log::info!(
            "editing {}x{} image, file size {}, image size {}",
            bitmap.width(),
            bitmap.height(),
            bitmap.file_header().bf_size,
            bitmap.info_header().size_image
        );
        self.image = Some(bitmap);
    }

    /// `save <path>`, returns the number of bytes written.
    pub fn save(&mut self, path: &Path) -> Result<usize> {
        self.current_image()?.save_file(path)
    }

    /// Serializes the current image.
    pub fn save_bytes(&mut self) -> Result<Vec<u8>> {
        self.current_image()?.save()
    }

    /// `insert <path> <y> <x>`: paste another image at column `y`, row `x`.
    ///
    /// The pasted image only lives for the duration of the call.
    pub fn insert(&mut self, path: &Path, y: i32, x: i32) -> Result<usize> {
        let target = self.current_image()?;
        let staging = Bitmap::load_file(path)?;
        insert(target.buffer_mut(), staging.buffer(), y, x)
    }

    pub fn insert_bytes(&mut self, data: &[u8], y: i32, x: i32) -> Result<usize> {
        let target = self.current_image()?;
        let staging = Bitmap::load(data)?;
        insert(target.buffer_mut(), staging.buffer(), y, x)
    }

    /// `set draw_color <r> <g> <b>`
    pub fn set_draw_color(&mut self, r: u8, g: u8, b: u8) {
        self.draw_color = Color::new(r, g, b);
    }

    /// `set line_width <n>`
    pub fn set_line_width(&mut self, width: i32) {
        self.line_width = width;
    }

    /// `draw line <y1> <x1> <y2> <x2>`
    pub fn draw_line(&mut self, y1: i32, x1: i32, y2: i32, x2: i32) -> Result<()> {
        let ctx = self.draw_context();
        brushes::draw_line(self.current_image()?, &ctx, y1, x1, y2, x2);
        Ok(())
    }

    /// `draw rectangle <y1> <x1> <width> <height>`
    pub fn draw_rectangle(&mut self, y1: i32, x1: i32, width: i32, height: i32) -> Result<()> {
        let ctx = self.draw_context();
        brushes::draw_rectangle(self.current_image()?, &ctx, y1, x1, width, height);
        Ok(())
    }

    /// `draw triangle <y1> <x1> <y2> <x2> <y3> <x3>`
    pub fn draw_triangle(&mut self, y1: i32, x1: i32, y2: i32, x2: i32, y3: i32, x3: i32) -> Result<()> {
        let ctx = self.draw_context();
        brushes::draw_triangle(self.current_image()?, &ctx, y1, x1, y2, x2, y3, x3);
        Ok(())
    }
}
