pub mod mesh;
pub mod texture;

pub mod prelude {
    pub use super::texture::{
        TextureFilter, TextureFormat, TextureHandle, TextureParams, TextureWrap,
    };

    pub use super::mesh::{
        Attribute, IndexFormat, MeshHandle, MeshHint, MeshIndex, MeshParams, MeshPrimitive,
        VertexAttribute, VertexFormat, VertexLayout, VertexLayoutBuilder,
    };
}
