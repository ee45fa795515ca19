//! GLSL ES 1.00 sources. Attributes change per vertex, uniforms once per draw.

use crate::domain::demo::{DemoKind, config::Rgba};

pub const POSITION_ATTRIBUTE: &str = "aVertexPosition";
pub const COLOR_ATTRIBUTE: &str = "aVertexColor";
pub const PROJECTION_UNIFORM: &str = "uProjectionMatrix";
pub const MODEL_VIEW_UNIFORM: &str = "uModelViewMatrix";

const FLAT_VERTEX: &str = include_str!("../../shaders/flat.vert");
const FLAT_FRAGMENT_TEMPLATE: &str = include_str!("../../shaders/flat.frag");
const COLORED_VERTEX: &str = include_str!("../../shaders/colored.vert");
const COLORED_FRAGMENT: &str = include_str!("../../shaders/colored.frag");

const FLAT_COLOR_PLACEHOLDER: &str = "{{FLAT_COLOR}}";

/// Vertex/fragment pair for one demo
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    pub fn for_demo(kind: DemoKind, flat_color: &Rgba) -> Self {
        if kind.uses_vertex_colors() {
            Self { vertex: COLORED_VERTEX.to_string(), fragment: COLORED_FRAGMENT.to_string() }
        } else {
            Self { vertex: FLAT_VERTEX.to_string(), fragment: flat_fragment(flat_color) }
        }
    }
}

/// Fixed-colour fragment shader.
///
/// Channels use the shortest exact `f32` form (`1.0`, `0.0625`, `1e-7`), which
/// GLSL ES 1.00 always reads back as the same float constant.
pub fn flat_fragment(color: &Rgba) -> String {
    let literal = color.iter().map(|c| format!("{:?}", c)).collect::<Vec<_>>().join(", ");
    FLAT_FRAGMENT_TEMPLATE.replace(FLAT_COLOR_PLACEHOLDER, &literal)
}
