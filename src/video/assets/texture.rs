//! Immutable 2D textures. The batch only ever refers to them by handle, the
//! pixel data itself lives in the backend.

use crate::math::Vector2;
use crate::video::errors::{Error, Result};

impl_handle!(TextureHandle);

/// The parameters of a texture object.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextureParams {
    /// Sets the wrap parameter for texture.
    pub wrap: TextureWrap,
    /// Specify how the texture is used whenever the pixel being sampled.
    pub filter: TextureFilter,
    /// Sets the format of data.
    pub format: TextureFormat,
    /// Sets the dimensions of texture.
    pub dimensions: Vector2<u32>,
}

impl Default for TextureParams {
    fn default() -> Self {
        TextureParams {
            format: TextureFormat::U8U8U8U8,
            wrap: TextureWrap::Clamp,
            filter: TextureFilter::Linear,
            dimensions: Vector2::new(0, 0),
        }
    }
}

impl TextureParams {
    /// Returns the size in bytes of the whole image.
    #[inline]
    pub fn len(&self) -> usize {
        self.format.size() as usize * self.dimensions.x as usize * self.dimensions.y as usize
    }

    pub fn validate(&self, data: Option<&[u8]>) -> Result<()> {
        if let Some(buf) = data {
            if buf.len() > self.len() {
                return Err(Error::OutOfBounds);
            }
        }

        Ok(())
    }
}

/// Specify how the texture is used whenever the pixel being sampled.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TextureFilter {
    /// Returns the value of the texture element that is nearest (in Manhattan distance)
    /// to the center of the pixel being textured.
    Nearest,
    /// Returns the weighted average of the four texture elements that are closest to the
    /// center of the pixel being textured.
    Linear,
}

/// Sets the wrap parameter for texture.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TextureWrap {
    /// Samples at coord x + 1 map to coord x.
    Repeat,
    /// Samples at coord x + 1 map to coord 1 - x.
    Mirror,
    /// Samples at coord x + 1 map to coord 1.
    Clamp,
}

/// List of all the possible formats of input data when uploading to texture.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TextureFormat {
    /// Single channel, which is what a baked glyph atlas usually is.
    U8,
    U8U8,
    U8U8U8,
    U8U8U8U8,
}

impl TextureFormat {
    /// Returns the number of components of this client format.
    pub fn components(self) -> u8 {
        match self {
            TextureFormat::U8 => 1,
            TextureFormat::U8U8 => 2,
            TextureFormat::U8U8U8 => 3,
            TextureFormat::U8U8U8U8 => 4,
        }
    }

    /// Returns the size in bytes of a pixel of this type.
    #[inline]
    pub fn size(self) -> u8 {
        self.components()
    }
}
