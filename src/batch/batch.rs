use crate::math::prelude::{Color, Vector2};
use crate::video::assets::prelude::*;
use crate::video::VideoSystem;

use super::errors::*;
use super::geometry::{self, LINE_VERTICES, QUAD_INDICES, QUAD_VERTICES};
use super::slots::TextureSlots;
use super::vertex::{LineVertex, QuadVertex};
use super::BatchParams;

/// What a `flush` has submitted to the backend.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FlushSummary {
    /// Number of drawcalls issued.
    pub drawcalls: u32,
    /// Number of quads drawn.
    pub quads: usize,
    /// Number of line segments drawn.
    pub lines: usize,
}

/// Accumulates quads, sprites, glyphs and lines into shared vertex buffers, and
/// draws all of them with at most two drawcalls per `flush`.
///
/// The vertex storage is allocated once at creation and never grows, a primitive
/// that does not fit is rejected with an error and leaves the batch untouched.
/// Quads and lines are kept in two independent sequences, quads are always
/// drawn before lines.
pub struct Batch {
    params: BatchParams,

    quads: Vec<QuadVertex>,
    lines: Vec<LineVertex>,
    indices: Vec<u32>,
    slots: TextureSlots,
    line_width: f32,

    white: TextureHandle,
    quad_mesh: MeshHandle,
    line_mesh: MeshHandle,
}

impl Batch {
    /// Creates a batch holding up to `capacity` quads and `capacity` lines.
    pub fn new(video: &mut VideoSystem, capacity: usize) -> Result<Self> {
        Batch::with_params(
            video,
            BatchParams {
                quads: capacity,
                lines: capacity,
            },
        )
    }

    /// Creates a batch with separate quad and line capacities.
    pub fn with_params(video: &mut VideoSystem, params: BatchParams) -> Result<Self> {
        params.validate()?;

        let indices = geometry::quad_indices(params.quads);

        let mut setup = TextureParams::default();
        setup.dimensions = Vector2::new(1, 1);
        setup.filter = TextureFilter::Nearest;
        let white = video.create_texture(setup, Some(&[0xFF; 4]))?;

        let mut setup = MeshParams::default();
        setup.hint = MeshHint::Stream;
        setup.layout = QuadVertex::layout();
        setup.index_format = IndexFormat::U32;
        setup.primitive = MeshPrimitive::Triangles;
        setup.num_verts = params.quads * QUAD_VERTICES;
        setup.num_idxes = indices.len();
        let quad_mesh = match video.create_mesh(setup, None, Some(IndexFormat::encode(&indices))) {
            Ok(mesh) => mesh,
            Err(err) => {
                video.delete_texture(white)?;
                return Err(err.into());
            }
        };

        let mut setup = MeshParams::default();
        setup.hint = MeshHint::Stream;
        setup.layout = LineVertex::layout();
        setup.primitive = MeshPrimitive::Lines;
        setup.num_verts = params.lines * LINE_VERTICES;
        let line_mesh = match video.create_mesh(setup, None, None) {
            Ok(mesh) => mesh,
            Err(err) => {
                video.delete_mesh(quad_mesh)?;
                video.delete_texture(white)?;
                return Err(err.into());
            }
        };

        debug!(
            "Created batch with {} quads and {} lines.",
            params.quads, params.lines
        );

        Ok(Batch {
            params,
            quads: Vec::with_capacity(params.quads * QUAD_VERTICES),
            lines: Vec::with_capacity(params.lines * LINE_VERTICES),
            indices,
            slots: TextureSlots::new(white),
            line_width: 1.0,
            white,
            quad_mesh,
            line_mesh,
        })
    }

    /// Releases the buffers and the white texture owned by this batch. Textures
    /// referenced by sprites belong to the caller and are left alone.
    pub fn destroy(self, video: &mut VideoSystem) -> Result<()> {
        video.delete_mesh(self.quad_mesh)?;
        video.delete_mesh(self.line_mesh)?;
        video.delete_texture(self.white)?;
        debug!("Destroyed batch.");
        Ok(())
    }
}

impl Batch {
    /// Adds a solid colored quad centered at `position`. A negative `size`
    /// component mirrors the quad along that axis.
    pub fn add_quad(
        &mut self,
        position: Vector2<f32>,
        size: Vector2<f32>,
        color: Color<f32>,
    ) -> Result<()> {
        self.push_quad(position, size, color, geometry::FULL_UVS, None)
    }

    /// Adds a quad centered at `position` showing the whole `texture`. Passing
    /// `None` draws a white quad. A negative `size` component mirrors the
    /// texture along that axis.
    pub fn add_sprite<T>(
        &mut self,
        position: Vector2<f32>,
        size: Vector2<f32>,
        texture: T,
    ) -> Result<()>
    where
        T: Into<Option<TextureHandle>>,
    {
        self.push_quad(
            position,
            size,
            Color::white(),
            geometry::FULL_UVS,
            texture.into(),
        )
    }

    /// Adds a quad centered at `position` showing a part of `texture`. The
    /// coordinates are given per corner, in the order the batch emits corners:
    /// `(+x, +y)`, `(-x, +y)`, `(-x, -y)`, `(+x, -y)` relative to the center.
    pub fn add_sprite_uv<T>(
        &mut self,
        position: Vector2<f32>,
        size: Vector2<f32>,
        uvs: [[f32; 2]; 4],
        texture: T,
    ) -> Result<()>
    where
        T: Into<Option<TextureHandle>>,
    {
        self.push_quad(position, size, Color::white(), uvs, texture.into())
    }

    /// Adds a line segment. All the lines of a frame are drawn with a single
    /// drawcall, so they share one width, the one given last. The width must be
    /// finite and positive.
    pub fn add_line(
        &mut self,
        start: Vector2<f32>,
        end: Vector2<f32>,
        color: Color<f32>,
        width: f32,
    ) -> Result<()> {
        if !width.is_finite() || width <= 0.0 {
            warn!("Line dropped, width {} is invalid.", width);
            return Err(Error::LineWidthInvalid(width));
        }

        if self.line_count() >= self.params.lines {
            trace!("Line dropped, batch is full.");
            return Err(Error::LineCapacityExceeded(self.params.lines));
        }

        self.lines
            .extend_from_slice(&geometry::line(start, end, color));
        self.line_width = width;
        Ok(())
    }

    fn push_quad(
        &mut self,
        position: Vector2<f32>,
        size: Vector2<f32>,
        color: Color<f32>,
        uvs: [[f32; 2]; 4],
        texture: Option<TextureHandle>,
    ) -> Result<()> {
        if self.quad_count() >= self.params.quads {
            trace!("Quad dropped, batch is full.");
            return Err(Error::QuadCapacityExceeded(self.params.quads));
        }

        let slot = match self.slots.acquire(texture) {
            Some(slot) => slot,
            None => {
                warn!("Quad dropped, all texture slots are occupied.");
                return Err(Error::TextureSlotsExhausted);
            }
        };

        self.quads
            .extend_from_slice(&geometry::quad(position, size, color, uvs, slot));
        Ok(())
    }
}

impl Batch {
    /// Uploads everything accumulated since the last flush, draws it and resets
    /// the batch for the next frame.
    ///
    /// Nothing is submitted if the batch is empty. Quads sampling from textures
    /// that have been deleted in the meantime are dropped with a warning.
    ///
    /// Quads and lines are submitted in two stages, each stage is reset once it
    /// has been drawn. If the backend fails, the primitives of the failing stage
    /// and the ones after it are kept.
    pub fn flush(&mut self, video: &mut VideoSystem) -> Result<FlushSummary> {
        let mut summary = FlushSummary::default();
        if self.is_empty() {
            return Ok(summary);
        }

        self.evict_stale_textures(video);

        if !self.quads.is_empty() {
            for (unit, &texture) in self.slots.as_slice().iter().enumerate() {
                video.bind_texture(unit as u32, texture)?;
            }

            video.update_vertex_buffer(self.quad_mesh, 0, QuadVertex::encode(&self.quads))?;

            let len = self.quad_count() * QUAD_INDICES;
            video.draw(self.quad_mesh, MeshIndex::Ptr(0, len))?;
            summary.drawcalls += 1;
            summary.quads = self.quad_count();

            self.quads.clear();
            self.slots.clear();
        }

        if !self.lines.is_empty() {
            video.set_line_width(self.line_width)?;
            video.update_vertex_buffer(self.line_mesh, 0, LineVertex::encode(&self.lines))?;
            video.draw(self.line_mesh, MeshIndex::Ptr(0, self.lines.len()))?;
            summary.drawcalls += 1;
            summary.lines = self.line_count();

            self.lines.clear();
        }

        trace!(
            "Flushed batch with {} quads and {} lines.",
            summary.quads,
            summary.lines
        );

        self.clear();
        Ok(summary)
    }

    fn evict_stale_textures(&mut self, video: &VideoSystem) {
        let remap = match self.slots.retain(|texture| video.texture(texture).is_some()) {
            Some(remap) => remap,
            None => return,
        };

        let mut n = 0;
        for i in 0..self.quad_count() {
            let slot = match remap[self.quads[i * QUAD_VERTICES].slot as usize] {
                Some(slot) => slot as f32,
                None => continue,
            };

            for j in 0..QUAD_VERTICES {
                let mut v = self.quads[i * QUAD_VERTICES + j];
                v.slot = slot;
                self.quads[n * QUAD_VERTICES + j] = v;
            }

            n += 1;
        }

        warn!(
            "Dropped {} quads sampling from deleted textures.",
            self.quad_count() - n
        );

        self.quads.truncate(n * QUAD_VERTICES);
    }

    /// Discards everything accumulated since the last flush.
    pub fn clear(&mut self) {
        self.quads.clear();
        self.lines.clear();
        self.slots.clear();
    }
}

impl Batch {
    #[inline]
    pub fn params(&self) -> BatchParams {
        self.params
    }

    /// Returns the number of quads accumulated.
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.quads.len() / QUAD_VERTICES
    }

    /// Returns the number of line segments accumulated.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len() / LINE_VERTICES
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty() && self.lines.is_empty()
    }

    #[inline]
    pub fn quad_vertices(&self) -> &[QuadVertex] {
        &self.quads
    }

    #[inline]
    pub fn line_vertices(&self) -> &[LineVertex] {
        &self.lines
    }

    /// Returns the whole index buffer, which never changes after creation.
    #[inline]
    pub fn quad_indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the occupied texture slots, the reserved white texture first.
    #[inline]
    pub fn texture_slots(&self) -> &[TextureHandle] {
        self.slots.as_slice()
    }

    /// Returns the solid white texture owned by this batch.
    #[inline]
    pub fn white_texture(&self) -> TextureHandle {
        self.white
    }

    /// Returns the width lines will be drawn with.
    #[inline]
    pub fn line_width(&self) -> f32 {
        self.line_width
    }
}
