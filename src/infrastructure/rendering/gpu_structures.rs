use bytemuck::{Pod, Zeroable};
use web_sys::WebGlRenderingContext as Gl;

use crate::domain::demo::Primitive;

/// 2D vertex position
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex2 {
    pub x: f32,
    pub y: f32,
}

/// 3D vertex position
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// RGBA vertex colour, channels in [0, 1]
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct VertexColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Vertex2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Vertex3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl VertexColor {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0, 1.0);
    pub const PURPLE: Self = Self::new(1.0, 0.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// How a float attribute is pulled out of its buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    /// Floats per vertex
    pub components: i32,
    /// Bytes between consecutive vertices; 0 means tightly packed
    pub stride: i32,
    /// Byte offset of the first value
    pub offset: i32,
    pub normalized: bool,
}

impl VertexLayout {
    pub const fn packed(components: i32) -> Self {
        Self { components, stride: 0, offset: 0, normalized: false }
    }
}

/// Vertex positions, 2D for the squares and 3D for the cube
#[derive(Debug, Clone, PartialEq)]
pub enum Positions {
    Flat(Vec<Vertex2>),
    Spatial(Vec<Vertex3>),
}

impl Positions {
    pub fn len(&self) -> usize {
        match self {
            Positions::Flat(v) => v.len(),
            Positions::Spatial(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn layout(&self) -> VertexLayout {
        match self {
            Positions::Flat(_) => VertexLayout::packed(2),
            Positions::Spatial(_) => VertexLayout::packed(3),
        }
    }

    /// Flat float view suitable for a `Float32Array`
    pub fn as_floats(&self) -> &[f32] {
        match self {
            Positions::Flat(v) => bytemuck::cast_slice(v),
            Positions::Spatial(v) => bytemuck::cast_slice(v),
        }
    }
}

/// Static geometry of one demo, uploaded once
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub positions: Positions,
    pub colors: Option<Vec<VertexColor>>,
    pub indices: Option<Vec<u16>>,
}

impl Mesh {
    pub const COLOR_LAYOUT: VertexLayout = VertexLayout::packed(4);

    pub fn color_floats(&self) -> Option<&[f32]> {
        self.colors.as_deref().map(|colors| bytemuck::cast_slice(colors))
    }

    /// Number of vertices (or indices, for indexed meshes) to draw
    pub fn draw_count(&self) -> i32 {
        match &self.indices {
            Some(indices) => indices.len() as i32,
            None => self.positions.len() as i32,
        }
    }
}

impl Primitive {
    pub fn gl_mode(self) -> u32 {
        match self {
            Primitive::Points => Gl::POINTS,
            Primitive::LineStrip => Gl::LINE_STRIP,
            Primitive::LineLoop => Gl::LINE_LOOP,
            Primitive::Lines => Gl::LINES,
            Primitive::TriangleStrip => Gl::TRIANGLE_STRIP,
            Primitive::TriangleFan => Gl::TRIANGLE_FAN,
            Primitive::Triangles => Gl::TRIANGLES,
        }
    }
}
