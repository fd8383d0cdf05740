use failure::Fail;

use super::assets::mesh::MeshHandle;
use super::assets::texture::TextureHandle;

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum Error {
    #[fail(display = "Backend: {}", _0)]
    Backend(String),
    #[fail(display = "{} is invalid.", _0)]
    TextureHandleInvalid(TextureHandle),
    #[fail(display = "{} is invalid.", _0)]
    MeshHandleInvalid(MeshHandle),
    #[fail(display = "Texture unit {} is out of range.", _0)]
    TextureUnitOutOfRange(u32),
    #[fail(display = "Line width {} is invalid.", _0)]
    LineWidthInvalid(f32),
    #[fail(display = "Trying to update immutable buffer.")]
    UpdateImmutableBuffer,
    #[fail(display = "Out of bounds.")]
    OutOfBounds,
}

pub type Result<T> = ::std::result::Result<T, Error>;
