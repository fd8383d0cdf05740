//! Vertex and index buffers.

use crate::video::errors::{Error, Result};
use crate::video::MAX_VERTEX_ATTRIBUTES;

impl_handle!(MeshHandle);

/// The parameters of a mesh object.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeshParams {
    /// Usage hint of the vertex buffer. Index data is always uploaded once at
    /// creation unless the hint says otherwise.
    pub hint: MeshHint,
    /// How a single vertex structure looks like.
    pub layout: VertexLayout,
    /// Index format.
    pub index_format: IndexFormat,
    /// How the input vertex data is used to assemble primitives.
    pub primitive: MeshPrimitive,
    /// The number of vertices in this mesh.
    pub num_verts: usize,
    /// The number of indices in this mesh. Zero means the mesh is drawn without
    /// an index buffer.
    pub num_idxes: usize,
}

impl Default for MeshParams {
    fn default() -> Self {
        MeshParams {
            hint: MeshHint::Immutable,
            layout: VertexLayout::default(),
            index_format: IndexFormat::U32,
            primitive: MeshPrimitive::Triangles,
            num_verts: 0,
            num_idxes: 0,
        }
    }
}

impl MeshParams {
    #[inline]
    pub fn vertex_buffer_len(&self) -> usize {
        self.num_verts * self.layout.stride() as usize
    }

    #[inline]
    pub fn index_buffer_len(&self) -> usize {
        self.num_idxes * self.index_format.stride()
    }

    #[inline]
    pub fn is_indexed(&self) -> bool {
        self.num_idxes > 0
    }

    pub fn validate(&self, verts: Option<&[u8]>, idxes: Option<&[u8]>) -> Result<()> {
        if let Some(buf) = verts {
            if buf.len() > self.vertex_buffer_len() {
                return Err(Error::OutOfBounds);
            }
        }

        if let Some(buf) = idxes {
            if buf.len() > self.index_buffer_len() {
                return Err(Error::OutOfBounds);
            }
        }

        Ok(())
    }

    /// Resolves `MeshIndex` into a `(from, len)` range of indices, or vertices
    /// if this mesh is not indexed.
    pub fn resolve(&self, index: MeshIndex) -> Result<(usize, usize)> {
        let max = if self.is_indexed() {
            self.num_idxes
        } else {
            self.num_verts
        };

        match index {
            MeshIndex::All => Ok((0, max)),
            MeshIndex::Ptr(from, len) => {
                if from.checked_add(len).map(|end| end <= max) != Some(true) {
                    return Err(Error::OutOfBounds);
                }

                Ok((from, len))
            }
        }
    }
}

/// Hint abouts the intended update strategy of the data.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MeshHint {
    /// The resource is initialized with data and cannot be changed later, this
    /// is the most common and most efficient usage.
    Immutable,
    /// The resource is initialized without data, but will be be updated by the
    /// CPU in each frame.
    Stream,
    /// The resource is initialized without data and will be written by the CPU
    /// before use, updates will be infrequent.
    Dynamic,
}

/// Defines how the input vertex data is used to assemble primitives.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MeshPrimitive {
    /// Separate lines, two vertices each.
    Lines,
    /// Separate triangles, three vertices each.
    Triangles,
}

impl MeshPrimitive {
    /// Returns the number of primitives assembled from `n` indices (or vertices).
    #[inline]
    pub fn assemble(self, n: usize) -> u32 {
        match self {
            MeshPrimitive::Lines => (n / 2) as u32,
            MeshPrimitive::Triangles => (n / 3) as u32,
        }
    }
}

/// Vertex indices can be either 16- or 32-bit.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum IndexFormat {
    U16,
    U32,
}

impl IndexFormat {
    #[inline]
    pub fn stride(self) -> usize {
        match self {
            IndexFormat::U16 => 2,
            IndexFormat::U32 => 4,
        }
    }

    pub fn encode<T: Copy>(values: &[T]) -> &[u8] {
        let len = values.len() * ::std::mem::size_of::<T>();
        unsafe { ::std::slice::from_raw_parts(values.as_ptr() as *const u8, len) }
    }
}

/// Specifies what part of the mesh a drawcall covers.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MeshIndex {
    /// Draws the whole mesh.
    All,
    /// Draws `len` elements starting at `from`. Elements are indices for indexed
    /// meshes and vertices otherwise.
    Ptr(usize, usize),
}

/// The possible named attributes in a vertex component, describing what the
/// component is used for.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Attribute {
    Position,
    Color0,
    Texcoord0,
    /// Index of the texture unit a fragment should sample from.
    TextureSlot,
}

/// The data type in the vertex component.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum VertexFormat {
    Byte,
    UByte,
    Short,
    UShort,
    Float,
}

impl VertexFormat {
    #[inline]
    pub fn size(self) -> u8 {
        match self {
            VertexFormat::Byte | VertexFormat::UByte => 1,
            VertexFormat::Short | VertexFormat::UShort => 2,
            VertexFormat::Float => 4,
        }
    }
}

/// The details of a vertex attribute.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct VertexAttribute {
    /// The name of this description.
    pub name: Attribute,
    /// The data type of each component of this element.
    pub format: VertexFormat,
    /// The number of components per generic vertex element.
    pub size: u8,
    /// Whether fixed-point data values should be normalized.
    pub normalized: bool,
}

impl Default for VertexAttribute {
    fn default() -> Self {
        VertexAttribute {
            name: Attribute::Position,
            format: VertexFormat::Byte,
            size: 0,
            normalized: false,
        }
    }
}

/// `VertexLayout` defines how a single vertex structure looks like. A vertex
/// layout is a collection of vertex components, and each vertex component
/// consists of a vertex attribute and the vertex format.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct VertexLayout {
    stride: u8,
    len: u8,
    offset: [u8; MAX_VERTEX_ATTRIBUTES],
    elements: [VertexAttribute; MAX_VERTEX_ATTRIBUTES],
}

impl VertexLayout {
    /// Creates a new an empty `VertexLayoutBuilder`.
    #[inline]
    pub fn build() -> VertexLayoutBuilder {
        VertexLayoutBuilder::default()
    }

    /// Stride of single vertex structure.
    #[inline]
    pub fn stride(&self) -> u8 {
        self.stride
    }

    /// Returns the number of elements in the layout.
    #[inline]
    pub fn len(&self) -> u8 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Relative element offset from the layout.
    pub fn offset(&self, name: Attribute) -> Option<u8> {
        (0..self.len as usize)
            .find(|&i| self.elements[i].name == name)
            .map(|i| self.offset[i])
    }

    /// Returns named `Attribute` from the layout.
    pub fn element(&self, name: Attribute) -> Option<VertexAttribute> {
        (0..self.len as usize)
            .find(|&i| self.elements[i].name == name)
            .map(|i| self.elements[i])
    }
}

/// Helper structure to build a vertex layout.
#[derive(Default)]
pub struct VertexLayoutBuilder(VertexLayout);

impl VertexLayoutBuilder {
    pub fn with(
        &mut self,
        attribute: Attribute,
        format: VertexFormat,
        size: u8,
        normalized: bool,
    ) -> &mut Self {
        assert!(size > 0 && size <= 4);

        let desc = VertexAttribute {
            name: attribute,
            format,
            size,
            normalized,
        };

        for i in 0..self.0.len as usize {
            if self.0.elements[i].name == attribute {
                self.0.elements[i] = desc;
                return self;
            }
        }

        assert!((self.0.len as usize) < MAX_VERTEX_ATTRIBUTES);
        self.0.elements[self.0.len as usize] = desc;
        self.0.len += 1;

        self
    }

    pub fn finish(&mut self) -> VertexLayout {
        self.0.stride = 0;
        for i in 0..self.0.len as usize {
            let len = self.0.elements[i].size * self.0.elements[i].format.size();
            self.0.offset[i] = self.0.stride;
            self.0.stride += len;
        }

        self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn layout() {
        let layout = VertexLayout::build()
            .with(Attribute::Position, VertexFormat::Float, 3, false)
            .with(Attribute::Texcoord0, VertexFormat::Float, 2, false)
            .finish();

        assert_eq!(layout.stride(), 20);
        assert_eq!(layout.len(), 2);
        assert_eq!(layout.offset(Attribute::Position), Some(0));
        assert_eq!(layout.offset(Attribute::Texcoord0), Some(12));
        assert_eq!(layout.offset(Attribute::Color0), None);

        let element = layout.element(Attribute::Position).unwrap();
        assert_eq!(element.format, VertexFormat::Float);
        assert_eq!(element.size, 3);
        assert_eq!(layout.element(Attribute::TextureSlot), None);
    }

    #[test]
    fn rewrite() {
        let layout = VertexLayout::build()
            .with(Attribute::Position, VertexFormat::Byte, 1, false)
            .with(Attribute::Color0, VertexFormat::UByte, 4, true)
            .with(Attribute::Position, VertexFormat::Float, 3, false)
            .finish();

        assert_eq!(layout.stride(), 16);
        assert_eq!(layout.offset(Attribute::Color0), Some(12));
        assert!(layout.element(Attribute::Color0).unwrap().normalized);
    }

    #[test]
    fn resolve() {
        let mut params = MeshParams::default();
        params.num_verts = 8;
        params.num_idxes = 12;

        assert_eq!(params.resolve(MeshIndex::All), Ok((0, 12)));
        assert_eq!(params.resolve(MeshIndex::Ptr(6, 6)), Ok((6, 6)));
        assert_eq!(params.resolve(MeshIndex::Ptr(6, 7)), Err(Error::OutOfBounds));
        assert_eq!(
            params.resolve(MeshIndex::Ptr(usize::max_value(), 2)),
            Err(Error::OutOfBounds)
        );

        params.num_idxes = 0;
        params.primitive = MeshPrimitive::Lines;
        assert_eq!(params.resolve(MeshIndex::All), Ok((0, 8)));
        assert_eq!(params.primitive.assemble(8), 4);
    }

    #[test]
    fn buffer_len() {
        let mut params = MeshParams::default();
        params.layout = VertexLayout::build()
            .with(Attribute::Position, VertexFormat::Float, 2, false)
            .finish();
        params.num_verts = 4;
        params.num_idxes = 6;

        assert_eq!(params.vertex_buffer_len(), 32);
        assert_eq!(params.index_buffer_len(), 24);
        assert!(params.validate(Some(&[0; 32]), Some(&[0; 24])).is_ok());
        assert!(params.validate(Some(&[0; 33]), None).is_err());
        assert!(params.validate(None, Some(&[0; 25])).is_err());
        assert_eq!(IndexFormat::encode(&[1u32, 2]).len(), 8);
    }
}
