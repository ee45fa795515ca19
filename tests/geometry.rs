use webgl_demos::domain::demo::DemoKind;
use webgl_demos::infrastructure::rendering::renderer::geometry::{
    CUBE_FACE_COLORS, CUBE_POSITIONS, cube, cube_indices, mesh_for,
};
use webgl_demos::infrastructure::rendering::{Positions, VertexColor};

#[test]
fn squares_share_the_four_corners() {
    let flat = mesh_for(DemoKind::FlatSquare);
    let colored = mesh_for(DemoKind::ColoredSquare);
    assert_eq!(flat.positions, colored.positions);
    assert_eq!(flat.positions.as_floats(), &[1.0, 1.0, -1.0, 1.0, 1.0, -1.0, -1.0, -1.0]);
    assert!(flat.colors.is_none());
    assert_eq!(colored.colors.as_ref().map(Vec::len), Some(4));
    assert_eq!(flat.draw_count(), 4);
}

#[test]
fn colored_square_corner_colours() {
    let mesh = mesh_for(DemoKind::ColoredSquare);
    let floats = mesh.color_floats().unwrap();
    assert_eq!(
        floats,
        &[
            1.0, 1.0, 1.0, 1.0, // white
            1.0, 0.0, 0.0, 1.0, // red
            0.0, 1.0, 0.0, 1.0, // green
            0.0, 0.0, 1.0, 1.0, // blue
        ]
    );
}

#[test]
fn cube_has_thirty_six_indices_into_twenty_four_vertices() {
    let indices = cube_indices();
    assert_eq!(indices.len(), 36);
    assert!(indices.iter().all(|&i| (i as usize) < CUBE_POSITIONS.len()));
    assert_eq!(&indices[..6], &[0, 1, 2, 0, 2, 3]);
    assert_eq!(&indices[30..], &[20, 21, 22, 20, 22, 23]);

    let mesh = cube();
    assert_eq!(mesh.draw_count(), 36);
    assert!(matches!(mesh.positions, Positions::Spatial(ref v) if v.len() == 24));
}

#[test]
fn each_cube_face_is_one_colour() {
    let mesh = cube();
    let colors = mesh.colors.unwrap();
    assert_eq!(colors.len(), 24);
    for (face, chunk) in colors.chunks(4).enumerate() {
        assert!(chunk.iter().all(|c| *c == CUBE_FACE_COLORS[face]));
    }
    assert_eq!(colors[0], VertexColor::WHITE);
    assert_eq!(colors[23], VertexColor::PURPLE);
}

#[test]
fn every_cube_face_is_planar() {
    for face in CUBE_POSITIONS.chunks(4) {
        let xs = face.iter().all(|v| v.x == face[0].x);
        let ys = face.iter().all(|v| v.y == face[0].y);
        let zs = face.iter().all(|v| v.z == face[0].z);
        assert!(xs || ys || zs, "face {:?} is not axis aligned", face);
    }
}
