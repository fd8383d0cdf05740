#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use shlib::prelude::*;

/// A backend call, as seen by the visitor.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateTexture(TextureHandle),
    DeleteTexture(TextureHandle),
    BindTexture(u32, TextureHandle),
    CreateMesh(MeshHandle, MeshPrimitive),
    UpdateVertexBuffer(MeshHandle, usize, usize),
    UpdateIndexBuffer(MeshHandle, usize, usize),
    DeleteMesh(MeshHandle),
    SetLineWidth(f32),
    Draw(MeshHandle, usize, usize),
}

/// Records every call it receives into a shared log. Draws of the primitive
/// set in `fail_draws` fail instead.
#[derive(Default)]
pub struct Recorder {
    pub calls: Rc<RefCell<Vec<Call>>>,
    pub fail_draws: Rc<RefCell<Option<MeshPrimitive>>>,
}

impl Visitor for Recorder {
    fn create_texture(
        &mut self,
        handle: TextureHandle,
        _: TextureParams,
        _: Option<&[u8]>,
    ) -> VideoResult<()> {
        self.calls.borrow_mut().push(Call::CreateTexture(handle));
        Ok(())
    }

    fn delete_texture(&mut self, handle: TextureHandle) -> VideoResult<()> {
        self.calls.borrow_mut().push(Call::DeleteTexture(handle));
        Ok(())
    }

    fn bind_texture(&mut self, unit: u32, handle: TextureHandle) -> VideoResult<()> {
        self.calls.borrow_mut().push(Call::BindTexture(unit, handle));
        Ok(())
    }

    fn create_mesh(
        &mut self,
        handle: MeshHandle,
        params: MeshParams,
        _: Option<&[u8]>,
        _: Option<&[u8]>,
    ) -> VideoResult<()> {
        self.calls
            .borrow_mut()
            .push(Call::CreateMesh(handle, params.primitive));
        Ok(())
    }

    fn update_vertex_buffer(
        &mut self,
        handle: MeshHandle,
        offset: usize,
        bytes: &[u8],
    ) -> VideoResult<()> {
        self.calls
            .borrow_mut()
            .push(Call::UpdateVertexBuffer(handle, offset, bytes.len()));
        Ok(())
    }

    fn update_index_buffer(
        &mut self,
        handle: MeshHandle,
        offset: usize,
        bytes: &[u8],
    ) -> VideoResult<()> {
        self.calls
            .borrow_mut()
            .push(Call::UpdateIndexBuffer(handle, offset, bytes.len()));
        Ok(())
    }

    fn delete_mesh(&mut self, handle: MeshHandle) -> VideoResult<()> {
        self.calls.borrow_mut().push(Call::DeleteMesh(handle));
        Ok(())
    }

    fn set_line_width(&mut self, width: f32) -> VideoResult<()> {
        self.calls.borrow_mut().push(Call::SetLineWidth(width));
        Ok(())
    }

    fn draw(
        &mut self,
        handle: MeshHandle,
        params: &MeshParams,
        from: usize,
        len: usize,
    ) -> VideoResult<u32> {
        if *self.fail_draws.borrow() == Some(params.primitive) {
            return Err(VideoError::Backend("lost context".into()));
        }

        self.calls.borrow_mut().push(Call::Draw(handle, from, len));
        Ok(params.primitive.assemble(len))
    }
}

/// Creates a video system backed by a `Recorder`, and returns the call log and
/// the draw failure switch of it.
pub fn recorded() -> (
    VideoSystem,
    Rc<RefCell<Vec<Call>>>,
    Rc<RefCell<Option<MeshPrimitive>>>,
) {
    let _ = env_logger::try_init();

    let recorder = Recorder::default();
    let calls = recorder.calls.clone();
    let fail_draws = recorder.fail_draws.clone();
    (VideoSystem::new(Box::new(recorder)), calls, fail_draws)
}

pub fn texture(video: &mut VideoSystem) -> TextureHandle {
    let mut params = TextureParams::default();
    params.dimensions = Vector2::new(2, 2);
    video.create_texture(params, None).unwrap()
}
