use crate::utils::prelude::ObjectPool;

use super::assets::prelude::*;
use super::backends::{self, Visitor};
use super::errors::*;
use super::MAX_TEXTURE_SLOTS;

/// The centralized management of video objects. It owns the backend, so
/// several independent contexts could live side by side.
pub struct VideoSystem {
    visitor: Box<dyn Visitor>,
    textures: ObjectPool<TextureHandle, TextureParams>,
    meshes: ObjectPool<MeshHandle, MeshParams>,
}

impl VideoSystem {
    /// Creates a new `VideoSystem` that submits to `visitor`.
    pub fn new(visitor: Box<dyn Visitor>) -> Self {
        VideoSystem {
            visitor,
            textures: ObjectPool::new(),
            meshes: ObjectPool::new(),
        }
    }

    /// Creates a headless `VideoSystem`.
    pub fn headless() -> Self {
        VideoSystem::new(backends::new_headless())
    }
}

impl VideoSystem {
    /// Creates a texture object with optional initial pixels.
    pub fn create_texture(
        &mut self,
        params: TextureParams,
        data: Option<&[u8]>,
    ) -> Result<TextureHandle> {
        params.validate(data)?;

        let handle = self.textures.create(params);
        if let Err(err) = self.visitor.create_texture(handle, params, data) {
            self.textures.free(handle);
            return Err(err);
        }

        debug!(
            "Created {} with dimensions {}x{}.",
            handle, params.dimensions.x, params.dimensions.y
        );

        Ok(handle)
    }

    /// Gets the `TextureParams` if available.
    #[inline]
    pub fn texture(&self, handle: TextureHandle) -> Option<TextureParams> {
        self.textures.get(handle).cloned()
    }

    /// Deletes the texture object.
    pub fn delete_texture(&mut self, handle: TextureHandle) -> Result<()> {
        if self.textures.free(handle).is_none() {
            return Err(Error::TextureHandleInvalid(handle));
        }

        debug!("Deleted {}.", handle);
        self.visitor.delete_texture(handle)
    }

    /// Binds the texture to texture unit `unit`.
    pub fn bind_texture(&mut self, unit: u32, handle: TextureHandle) -> Result<()> {
        if unit as usize >= MAX_TEXTURE_SLOTS {
            return Err(Error::TextureUnitOutOfRange(unit));
        }

        if !self.textures.contains(handle) {
            return Err(Error::TextureHandleInvalid(handle));
        }

        self.visitor.bind_texture(unit, handle)
    }
}

impl VideoSystem {
    /// Creates a mesh object with optional initial vertex and index data.
    pub fn create_mesh(
        &mut self,
        params: MeshParams,
        verts: Option<&[u8]>,
        idxes: Option<&[u8]>,
    ) -> Result<MeshHandle> {
        params.validate(verts, idxes)?;

        let handle = self.meshes.create(params);
        if let Err(err) = self.visitor.create_mesh(handle, params, verts, idxes) {
            self.meshes.free(handle);
            return Err(err);
        }

        debug!(
            "Created {} with {} vertices and {} indices.",
            handle, params.num_verts, params.num_idxes
        );

        Ok(handle)
    }

    /// Gets the `MeshParams` if available.
    #[inline]
    pub fn mesh(&self, handle: MeshHandle) -> Option<MeshParams> {
        self.meshes.get(handle).cloned()
    }

    /// Updates a subset of dynamic vertex buffer. `offset` is measured in bytes.
    pub fn update_vertex_buffer(
        &mut self,
        handle: MeshHandle,
        offset: usize,
        bytes: &[u8],
    ) -> Result<()> {
        let params = self.mutable_mesh(handle)?;
        let end = offset.checked_add(bytes.len()).ok_or(Error::OutOfBounds)?;
        if end > params.vertex_buffer_len() {
            return Err(Error::OutOfBounds);
        }

        self.visitor.update_vertex_buffer(handle, offset, bytes)
    }

    /// Updates a subset of dynamic index buffer. `offset` is measured in bytes.
    pub fn update_index_buffer(
        &mut self,
        handle: MeshHandle,
        offset: usize,
        bytes: &[u8],
    ) -> Result<()> {
        let params = self.mutable_mesh(handle)?;
        let end = offset.checked_add(bytes.len()).ok_or(Error::OutOfBounds)?;
        if end > params.index_buffer_len() {
            return Err(Error::OutOfBounds);
        }

        self.visitor.update_index_buffer(handle, offset, bytes)
    }

    /// Deletes the mesh object.
    pub fn delete_mesh(&mut self, handle: MeshHandle) -> Result<()> {
        if self.meshes.free(handle).is_none() {
            return Err(Error::MeshHandleInvalid(handle));
        }

        debug!("Deleted {}.", handle);
        self.visitor.delete_mesh(handle)
    }

    fn mutable_mesh(&self, handle: MeshHandle) -> Result<MeshParams> {
        let params = self
            .mesh(handle)
            .ok_or_else(|| Error::MeshHandleInvalid(handle))?;

        if params.hint == MeshHint::Immutable {
            return Err(Error::UpdateImmutableBuffer);
        }

        Ok(params)
    }
}

impl VideoSystem {
    /// Sets the rasterized width of lines.
    pub fn set_line_width(&mut self, width: f32) -> Result<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::LineWidthInvalid(width));
        }

        self.visitor.set_line_width(width)
    }

    /// Draws the mesh, returns the number of primitives assembled.
    pub fn draw(&mut self, handle: MeshHandle, index: MeshIndex) -> Result<u32> {
        let params = self
            .mesh(handle)
            .ok_or_else(|| Error::MeshHandleInvalid(handle))?;

        let (from, len) = params.resolve(index)?;
        if len == 0 {
            return Ok(0);
        }

        self.visitor.draw(handle, &params, from, len)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Vector2;

    fn stream_mesh(video: &mut VideoSystem) -> MeshHandle {
        let mut params = MeshParams::default();
        params.hint = MeshHint::Stream;
        params.layout = VertexLayout::build()
            .with(Attribute::Position, VertexFormat::Float, 2, false)
            .finish();
        params.num_verts = 4;
        params.num_idxes = 6;

        let idxes = [0u32, 1, 2, 2, 3, 0];
        video
            .create_mesh(params, None, Some(IndexFormat::encode(&idxes)))
            .unwrap()
    }

    #[test]
    fn texture() {
        let mut video = VideoSystem::headless();

        let mut params = TextureParams::default();
        params.dimensions = Vector2::new(1, 1);
        let handle = video.create_texture(params, Some(&[255; 4])).unwrap();

        assert_eq!(video.texture(handle), Some(params));
        assert!(video.bind_texture(15, handle).is_ok());
        assert_eq!(
            video.bind_texture(16, handle),
            Err(Error::TextureUnitOutOfRange(16))
        );

        video.delete_texture(handle).unwrap();
        assert_eq!(video.texture(handle), None);
        assert_eq!(
            video.bind_texture(0, handle),
            Err(Error::TextureHandleInvalid(handle))
        );
        assert_eq!(
            video.delete_texture(handle),
            Err(Error::TextureHandleInvalid(handle))
        );

        assert_eq!(
            video.create_texture(params, Some(&[255; 5])),
            Err(Error::OutOfBounds)
        );
    }

    #[test]
    fn mesh() {
        let mut video = VideoSystem::headless();
        let mesh = stream_mesh(&mut video);

        assert!(video.update_vertex_buffer(mesh, 0, &[0; 32]).is_ok());
        assert!(video.update_vertex_buffer(mesh, 8, &[0; 24]).is_ok());
        assert_eq!(
            video.update_vertex_buffer(mesh, 8, &[0; 32]),
            Err(Error::OutOfBounds)
        );

        assert_eq!(video.draw(mesh, MeshIndex::All), Ok(2));
        assert_eq!(video.draw(mesh, MeshIndex::Ptr(0, 3)), Ok(1));
        assert_eq!(video.draw(mesh, MeshIndex::Ptr(0, 0)), Ok(0));
        assert_eq!(
            video.draw(mesh, MeshIndex::Ptr(3, 6)),
            Err(Error::OutOfBounds)
        );

        video.delete_mesh(mesh).unwrap();
        assert_eq!(
            video.draw(mesh, MeshIndex::All),
            Err(Error::MeshHandleInvalid(mesh))
        );
    }

    #[test]
    fn immutable_mesh() {
        let mut video = VideoSystem::headless();

        let mut params = MeshParams::default();
        params.layout = VertexLayout::build()
            .with(Attribute::Position, VertexFormat::Float, 2, false)
            .finish();
        params.num_verts = 4;

        let mesh = video.create_mesh(params, Some(&[0; 32]), None).unwrap();
        assert_eq!(
            video.update_vertex_buffer(mesh, 0, &[0; 8]),
            Err(Error::UpdateImmutableBuffer)
        );
        assert_eq!(
            video.update_index_buffer(mesh, 0, &[0; 4]),
            Err(Error::UpdateImmutableBuffer)
        );
    }

    #[test]
    fn line_width() {
        let mut video = VideoSystem::headless();
        assert!(video.set_line_width(2.0).is_ok());
        assert_eq!(video.set_line_width(0.0), Err(Error::LineWidthInvalid(0.0)));
        assert!(video.set_line_width(::std::f32::NAN).is_err());
    }
}
