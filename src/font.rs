//! Baked bitmap fonts.
//!
//! A `Font` is a read-only table of per-character metrics for the printable
//! ASCII range, plus the atlas texture all glyphs were packed into. Producing
//! the atlas (rasterizing a font file) is left to whoever creates the `Font`.

use crate::math::prelude::{Aabb2, Point2, Vector2};
use crate::video::assets::texture::TextureHandle;

/// The first character code with a baked glyph.
pub const FIRST_CHAR: u32 = 32;
/// The number of baked glyphs, covering codes `32..=127`.
pub const NUM_GLYPHS: usize = 96;

/// Metrics of a single baked glyph.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// Packed rectangle of the glyph inside the atlas, in pixels.
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
    /// Offset from the pen position to the top-left corner of the glyph.
    pub xoff: f32,
    pub yoff: f32,
    /// Horizontal distance the pen moves after this glyph.
    pub xadvance: f32,
}

impl Glyph {
    /// Returns the size of the glyph in pixels.
    #[inline]
    pub fn size(&self) -> Vector2<f32> {
        Vector2::new(
            f32::from(self.x1) - f32::from(self.x0),
            f32::from(self.y1) - f32::from(self.y0),
        )
    }
}

/// The metrics of every baked glyph, indexed by `code - FIRST_CHAR`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphTable {
    glyphs: Vec<Glyph>,
}

impl GlyphTable {
    /// Creates a table from glyphs in character order, starting at `FIRST_CHAR`.
    /// Missing trailing glyphs are treated as empty, extra ones are ignored.
    pub fn new(mut glyphs: Vec<Glyph>) -> Self {
        glyphs.resize(NUM_GLYPHS, Glyph::default());
        GlyphTable { glyphs }
    }

    /// Returns the glyph of character `c`, or `None` if `c` is outside of the
    /// baked range.
    #[inline]
    pub fn get(&self, c: char) -> Option<&Glyph> {
        let code = c as u32;
        if code < FIRST_CHAR {
            return None;
        }

        self.glyphs.get((code - FIRST_CHAR) as usize)
    }
}

/// A baked font, the glyph table together with its atlas texture. The texture
/// is owned by the caller and only referenced here.
#[derive(Debug, Clone)]
pub struct Font {
    atlas: TextureHandle,
    dimensions: Vector2<u32>,
    glyphs: GlyphTable,
}

impl Font {
    pub fn new(atlas: TextureHandle, dimensions: Vector2<u32>, glyphs: GlyphTable) -> Self {
        Font {
            atlas,
            dimensions,
            glyphs,
        }
    }

    /// Returns the atlas texture.
    #[inline]
    pub fn atlas(&self) -> TextureHandle {
        self.atlas
    }

    /// Returns the dimensions of the atlas texture in pixels.
    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.dimensions
    }

    /// Returns the glyph of character `c`, if it has been baked.
    #[inline]
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        self.glyphs.get(c)
    }

    /// Computes the screen rectangle and texture coordinates of `glyph` drawn
    /// with the pen at `pen`. The texture coordinates follow the corner order of
    /// `Aabb2::to_corners`.
    pub fn quad(&self, pen: Vector2<f32>, glyph: &Glyph) -> (Aabb2<f32>, [[f32; 2]; 4]) {
        let min = Point2::new(pen.x + glyph.xoff, pen.y + glyph.yoff);
        let rect = Aabb2::new(min, min + glyph.size());

        let iw = 1.0 / self.dimensions.x.max(1) as f32;
        let ih = 1.0 / self.dimensions.y.max(1) as f32;
        let s0 = f32::from(glyph.x0) * iw;
        let t0 = f32::from(glyph.y0) * ih;
        let s1 = f32::from(glyph.x1) * iw;
        let t1 = f32::from(glyph.y1) * ih;

        (rect, [[s1, t1], [s0, t1], [s0, t0], [s1, t0]])
    }

    /// Returns the horizontal distance the pen travels when drawing `text`.
    pub fn measure(&self, text: &str) -> f32 {
        text.chars()
            .filter_map(|c| self.glyph(c))
            .map(|g| g.xadvance)
            .sum()
    }
}
