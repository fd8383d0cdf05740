use crate::video::assets::prelude::{Attribute, VertexFormat, VertexLayout};

/// The vertex of a batched quad.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
    pub texcoord: [f32; 2],
    /// Index of the texture slot to sample from. It's a float since that's what
    /// the vertex stage receives, but it always holds an integer value.
    pub slot: f32,
}

impl QuadVertex {
    pub fn layout() -> VertexLayout {
        VertexLayout::build()
            .with(Attribute::Position, VertexFormat::Float, 3, false)
            .with(Attribute::Color0, VertexFormat::Float, 4, false)
            .with(Attribute::Texcoord0, VertexFormat::Float, 2, false)
            .with(Attribute::TextureSlot, VertexFormat::Float, 1, false)
            .finish()
    }

    pub fn encode(values: &[Self]) -> &[u8] {
        let len = values.len() * ::std::mem::size_of::<Self>();
        unsafe { ::std::slice::from_raw_parts(values.as_ptr() as *const u8, len) }
    }
}

/// The vertex of a batched line segment.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn layout() -> VertexLayout {
        VertexLayout::build()
            .with(Attribute::Position, VertexFormat::Float, 3, false)
            .with(Attribute::Color0, VertexFormat::Float, 4, false)
            .finish()
    }

    pub fn encode(values: &[Self]) -> &[u8] {
        let len = values.len() * ::std::mem::size_of::<Self>();
        unsafe { ::std::slice::from_raw_parts(values.as_ptr() as *const u8, len) }
    }
}
