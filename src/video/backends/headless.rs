use super::super::assets::prelude::*;
use super::super::errors::*;
use super::Visitor;

/// A backend that accepts everything and renders nothing.
#[derive(Debug, Default)]
pub struct HeadlessVisitor {}

impl HeadlessVisitor {
    pub fn new() -> Self {
        HeadlessVisitor {}
    }
}

impl Visitor for HeadlessVisitor {
    fn create_texture(
        &mut self,
        _: TextureHandle,
        _: TextureParams,
        _: Option<&[u8]>,
    ) -> Result<()> {
        Ok(())
    }

    fn delete_texture(&mut self, _: TextureHandle) -> Result<()> {
        Ok(())
    }

    fn bind_texture(&mut self, _: u32, _: TextureHandle) -> Result<()> {
        Ok(())
    }

    fn create_mesh(
        &mut self,
        _: MeshHandle,
        _: MeshParams,
        _: Option<&[u8]>,
        _: Option<&[u8]>,
    ) -> Result<()> {
        Ok(())
    }

    fn update_vertex_buffer(&mut self, _: MeshHandle, _: usize, _: &[u8]) -> Result<()> {
        Ok(())
    }

    fn update_index_buffer(&mut self, _: MeshHandle, _: usize, _: &[u8]) -> Result<()> {
        Ok(())
    }

    fn delete_mesh(&mut self, _: MeshHandle) -> Result<()> {
        Ok(())
    }

    fn set_line_width(&mut self, _: f32) -> Result<()> {
        Ok(())
    }

    fn draw(&mut self, _: MeshHandle, params: &MeshParams, _: usize, len: usize) -> Result<u32> {
        Ok(params.primitive.assemble(len))
    }
}
