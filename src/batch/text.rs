use crate::font::Font;
use crate::math::prelude::Vector2;

use super::batch::Batch;
use super::errors::*;

impl Batch {
    /// Lays out `text` on a single line starting with the pen at `position`, and
    /// adds one quad per glyph sampling from the font atlas.
    ///
    /// Characters without a baked glyph (control codes, anything beyond the baked
    /// range) are skipped without moving the pen. There is no line breaking and
    /// no kerning. If a glyph can not be added, the error is returned and the
    /// glyphs before it stay in the batch.
    ///
    /// Returns the number of glyphs added.
    pub fn add_text(&mut self, position: Vector2<f32>, font: &Font, text: &str) -> Result<usize> {
        let mut pen = position;
        let mut n = 0;

        for c in text.chars() {
            let glyph = match font.glyph(c) {
                Some(glyph) => glyph,
                None => continue,
            };

            let (rect, uvs) = font.quad(pen, glyph);
            let center = rect.center();
            self.add_sprite_uv(
                Vector2::new(center.x, center.y),
                rect.dim(),
                uvs,
                font.atlas(),
            )?;

            pen.x += glyph.xadvance;
            n += 1;
        }

        Ok(n)
    }
}
