use crate::domain::demo::DemoKind;
use crate::infrastructure::rendering::gpu_structures::{
    Mesh, Positions, Vertex2, Vertex3, VertexColor,
};

/// Corners of the square in strip order: top-right, top-left, bottom-right, bottom-left
pub const SQUARE_POSITIONS: [Vertex2; 4] = [
    Vertex2::new(1.0, 1.0),
    Vertex2::new(-1.0, 1.0),
    Vertex2::new(1.0, -1.0),
    Vertex2::new(-1.0, -1.0),
];

pub const SQUARE_COLORS: [VertexColor; 4] =
    [VertexColor::WHITE, VertexColor::RED, VertexColor::GREEN, VertexColor::BLUE];

/// Four vertices per face so every face gets its own colour
pub const CUBE_POSITIONS: [Vertex3; 24] = [
    // Front
    Vertex3::new(-1.0, -1.0, 1.0),
    Vertex3::new(1.0, -1.0, 1.0),
    Vertex3::new(1.0, 1.0, 1.0),
    Vertex3::new(-1.0, 1.0, 1.0),
    // Back
    Vertex3::new(-1.0, -1.0, -1.0),
    Vertex3::new(-1.0, 1.0, -1.0),
    Vertex3::new(1.0, 1.0, -1.0),
    Vertex3::new(1.0, -1.0, -1.0),
    // Top
    Vertex3::new(-1.0, 1.0, -1.0),
    Vertex3::new(-1.0, 1.0, 1.0),
    Vertex3::new(1.0, 1.0, 1.0),
    Vertex3::new(1.0, 1.0, -1.0),
    // Bottom
    Vertex3::new(-1.0, -1.0, -1.0),
    Vertex3::new(1.0, -1.0, -1.0),
    Vertex3::new(1.0, -1.0, 1.0),
    Vertex3::new(-1.0, -1.0, 1.0),
    // Right
    Vertex3::new(1.0, -1.0, -1.0),
    Vertex3::new(1.0, 1.0, -1.0),
    Vertex3::new(1.0, 1.0, 1.0),
    Vertex3::new(1.0, -1.0, 1.0),
    // Left
    Vertex3::new(-1.0, -1.0, -1.0),
    Vertex3::new(-1.0, -1.0, 1.0),
    Vertex3::new(-1.0, 1.0, 1.0),
    Vertex3::new(-1.0, 1.0, -1.0),
];

/// Front, back, top, bottom, right, left
pub const CUBE_FACE_COLORS: [VertexColor; 6] = [
    VertexColor::WHITE,
    VertexColor::RED,
    VertexColor::GREEN,
    VertexColor::BLUE,
    VertexColor::YELLOW,
    VertexColor::PURPLE,
];

pub fn square() -> Mesh {
    Mesh { positions: Positions::Flat(SQUARE_POSITIONS.to_vec()), colors: None, indices: None }
}

pub fn colored_square() -> Mesh {
    Mesh { colors: Some(SQUARE_COLORS.to_vec()), ..square() }
}

pub fn cube() -> Mesh {
    let colors = CUBE_FACE_COLORS.iter().flat_map(|&color| [color; 4]).collect();
    Mesh {
        positions: Positions::Spatial(CUBE_POSITIONS.to_vec()),
        colors: Some(colors),
        indices: Some(cube_indices()),
    }
}

/// Two triangles per face: (0, 1, 2) and (0, 2, 3) relative to the face's first vertex
pub fn cube_indices() -> Vec<u16> {
    (0..CUBE_FACE_COLORS.len() as u16)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect()
}

pub fn mesh_for(kind: DemoKind) -> Mesh {
    match kind {
        DemoKind::FlatSquare => square(),
        DemoKind::ColoredSquare => colored_square(),
        DemoKind::RotatingCube => cube(),
    }
}
