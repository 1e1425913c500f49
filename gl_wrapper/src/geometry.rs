use std::ffi::c_void;
use std::mem::size_of;

use log::debug;
use thiserror::Error;

pub struct GeometryBuilder<'a> {
    attributes: Vec<VertexAttribute>,
    data: &'a [f32],
    indices: Option<&'a [u32]>,
}

impl<'a> GeometryBuilder<'a> {
    pub fn new(data: &'a [f32]) -> Self {
        Self {
            data,
            attributes: Vec::new(),
            indices: None,
        }
    }

    pub fn with_attribute(mut self, attr: VertexAttribute) -> Self {
        self.attributes.push(attr);
        self
    }

    /// Draw through an element buffer instead of the raw vertex order.
    pub fn with_indices(mut self, indices: &'a [u32]) -> Self {
        self.indices = Some(indices);
        self
    }

    fn validate(&self) -> Result<(VertexLayout, usize), GBError> {
        let layout = VertexLayout::new(&self.attributes)?;
        let width = layout.components();

        if self.data.len() % width != 0 {
            return Err(GBError::InvalidDataLength);
        }

        let vertices = self.data.len() / width;

        if let Some(indices) = self.indices {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices) {
                return Err(GBError::IndexOutOfRange { index, vertices });
            }
        }

        Ok((layout, vertices))
    }

    pub fn build(self) -> Result<Geometry, GBError> {
        let (layout, vertices) = self.validate()?;

        let mut vao = 0;
        let mut vbo = 0;
        let mut ebo = None;

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

            gl::BufferData(
                gl::ARRAY_BUFFER,
                (self.data.len() * size_of::<f32>()) as isize,
                self.data.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );

            if let Some(indices) = self.indices {
                let mut id = 0;
                gl::GenBuffers(1, &mut id);
                // the element binding is recorded in the VAO
                gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, id);
                gl::BufferData(
                    gl::ELEMENT_ARRAY_BUFFER,
                    (indices.len() * size_of::<u32>()) as isize,
                    indices.as_ptr() as *const c_void,
                    gl::STATIC_DRAW,
                );
                ebo = Some(id);
            }

            for (i, (attr, offset)) in self.attributes.iter().zip(layout.offsets()).enumerate() {
                gl::VertexAttribPointer(
                    i as u32,
                    attr.size() as i32,
                    gl::FLOAT,
                    gl::FALSE,
                    layout.stride() as i32,
                    *offset as *const c_void,
                );
                gl::EnableVertexAttribArray(i as u32);
            }

            gl::BindVertexArray(0);
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }

        let indices = self.indices.map_or(0, |i| i.len());

        debug!(
            "uploaded geometry: {vertices} vertices, {indices} indices, stride {} bytes",
            layout.stride()
        );

        Ok(Geometry {
            vao,
            vbo,
            ebo,
            vertices,
            indices,
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GBError {
    #[error("Geometry needs at least one vertex attribute")]
    NoAttributes,
    #[error("Invalid data length for given attributes")]
    InvalidDataLength,
    #[error("Index {index} is out of range for {vertices} vertices")]
    IndexOutOfRange { index: u32, vertices: usize },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VertexAttribute {
    Float,
    Vec2,
    Vec3,
    Vec4,
}

impl VertexAttribute {
    pub fn size(&self) -> usize {
        match self {
            VertexAttribute::Float => 1,
            VertexAttribute::Vec2 => 2,
            VertexAttribute::Vec3 => 3,
            VertexAttribute::Vec4 => 4,
        }
    }
}

/// Interleaved layout of a vertex, attributes bound to locations 0, 1, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    offsets: Vec<usize>,
    components: usize,
}

impl VertexLayout {
    pub fn new(attributes: &[VertexAttribute]) -> Result<Self, GBError> {
        if attributes.is_empty() {
            return Err(GBError::NoAttributes);
        }

        let mut offsets = Vec::with_capacity(attributes.len());
        let mut components = 0;

        for attr in attributes {
            offsets.push(components * size_of::<f32>());
            components += attr.size();
        }

        Ok(Self {
            offsets,
            components,
        })
    }

    /// Floats per vertex.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Bytes per vertex.
    pub fn stride(&self) -> usize {
        self.components * size_of::<f32>()
    }

    /// Byte offset of every attribute inside a vertex.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }
}

pub struct Geometry {
    vao: u32,
    vbo: u32,
    ebo: Option<u32>,
    vertices: usize,
    indices: usize,
}

impl Geometry {
    pub fn vao(&self) -> u32 {
        self.vao
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    pub fn indices(&self) -> usize {
        self.indices
    }

    pub fn is_indexed(&self) -> bool {
        self.ebo.is_some()
    }
}

impl Drop for Geometry {
    fn drop(&mut self) {
        unsafe {
            if let Some(ebo) = &self.ebo {
                gl::DeleteBuffers(1, ebo);
            }
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_offsets_are_bytes() {
        let layout = VertexLayout::new(&[
            VertexAttribute::Vec3,
            VertexAttribute::Vec3,
            VertexAttribute::Vec2,
        ])
        .unwrap();

        assert_eq!(layout.components(), 8);
        assert_eq!(layout.stride(), 32);
        assert_eq!(layout.offsets(), &[0, 12, 24]);
    }

    #[test]
    fn empty_layout_is_rejected() {
        assert_eq!(VertexLayout::new(&[]), Err(GBError::NoAttributes));
    }

    #[test]
    fn data_must_fill_whole_vertices() {
        let data = [0.0; 7];
        let res = GeometryBuilder::new(&data)
            .with_attribute(VertexAttribute::Vec3)
            .validate();

        assert_eq!(res.err(), Some(GBError::InvalidDataLength));
    }

    #[test]
    fn indices_must_reference_vertices() {
        let data = [0.0; 12];
        let indices = [0, 1, 3, 1, 2, 4];

        let res = GeometryBuilder::new(&data)
            .with_attribute(VertexAttribute::Vec3)
            .with_indices(&indices)
            .validate();

        assert_eq!(
            res.err(),
            Some(GBError::IndexOutOfRange {
                index: 4,
                vertices: 4
            })
        );
    }

    #[test]
    fn vertex_count() {
        let data = [0.0; 24];
        let (layout, vertices) = GeometryBuilder::new(&data)
            .with_attribute(VertexAttribute::Vec3)
            .with_attribute(VertexAttribute::Vec3)
            .with_indices(&[0, 1, 2, 2, 3, 0])
            .validate()
            .unwrap();

        assert_eq!(layout.stride(), 24);
        assert_eq!(vertices, 4);
    }
}
