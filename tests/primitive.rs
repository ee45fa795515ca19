use std::str::FromStr;

use strum::IntoEnumIterator;
use web_sys::WebGlRenderingContext as Gl;
use webgl_demos::domain::demo::{DemoKind, Primitive};

#[test]
fn primitives_map_to_gl_modes() {
    assert_eq!(Primitive::Points.gl_mode(), Gl::POINTS);
    assert_eq!(Primitive::LineStrip.gl_mode(), Gl::LINE_STRIP);
    assert_eq!(Primitive::LineLoop.gl_mode(), Gl::LINE_LOOP);
    assert_eq!(Primitive::Lines.gl_mode(), Gl::LINES);
    assert_eq!(Primitive::TriangleStrip.gl_mode(), Gl::TRIANGLE_STRIP);
    assert_eq!(Primitive::TriangleFan.gl_mode(), Gl::TRIANGLE_FAN);
    assert_eq!(Primitive::Triangles.gl_mode(), Gl::TRIANGLES);
}

#[test]
fn primitives_parse_snake_case() {
    assert_eq!(Primitive::from_str("triangle_strip"), Ok(Primitive::TriangleStrip));
    assert!(Primitive::from_str("TriangleStrip").is_err());
    assert_eq!(Primitive::iter().count(), 7);
}

#[test]
fn demos_draw_with_their_tutorial_modes() {
    assert_eq!(DemoKind::FlatSquare.default_primitive(), Primitive::TriangleStrip);
    assert_eq!(DemoKind::ColoredSquare.default_primitive(), Primitive::TriangleStrip);
    assert_eq!(DemoKind::RotatingCube.default_primitive(), Primitive::Triangles);
}

#[test]
fn unknown_demo_names_do_not_parse() {
    assert!(DemoKind::from_str("spinning-teapot").is_err());
    assert_eq!(DemoKind::from_str("colored-square"), Ok(DemoKind::ColoredSquare));
}
