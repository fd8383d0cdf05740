//! The backend of the video system, which should be responsible for only one
//! thing: submitting requests to the underlying graphics API.
//!
//! Requests reaching a `Visitor` have already been validated by `VideoSystem`,
//! handles are alive and ranges are inside their buffers.

pub mod headless;

use super::assets::prelude::*;
use super::errors::*;

pub trait Visitor {
    fn create_texture(
        &mut self,
        handle: TextureHandle,
        params: TextureParams,
        data: Option<&[u8]>,
    ) -> Result<()>;

    fn delete_texture(&mut self, handle: TextureHandle) -> Result<()>;

    /// Binds texture to the texture unit `unit`.
    fn bind_texture(&mut self, unit: u32, handle: TextureHandle) -> Result<()>;

    fn create_mesh(
        &mut self,
        handle: MeshHandle,
        params: MeshParams,
        verts: Option<&[u8]>,
        idxes: Option<&[u8]>,
    ) -> Result<()>;

    fn update_vertex_buffer(&mut self, handle: MeshHandle, offset: usize, bytes: &[u8])
        -> Result<()>;

    fn update_index_buffer(&mut self, handle: MeshHandle, offset: usize, bytes: &[u8])
        -> Result<()>;

    fn delete_mesh(&mut self, handle: MeshHandle) -> Result<()>;

    /// Sets the rasterized width of lines drawn afterwards.
    fn set_line_width(&mut self, width: f32) -> Result<()>;

    /// Draws `len` elements of mesh starting at `from`, returns the number of
    /// primitives assembled.
    fn draw(
        &mut self,
        handle: MeshHandle,
        params: &MeshParams,
        from: usize,
        len: usize,
    ) -> Result<u32>;
}

pub fn new_headless() -> Box<dyn Visitor> {
    Box::new(self::headless::HeadlessVisitor::new())
}
