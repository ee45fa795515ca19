//! Demo catalogue: which scenes exist and how each one is drawn.

pub mod animation;
pub mod camera;
pub mod config;

pub use animation::RotationClock;
pub use config::DemoConfig;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The three tutorial scenes, each a superset of the previous one
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DemoKind {
    /// Square drawn with a single fixed fragment colour
    #[default]
    FlatSquare,
    /// Square with a colour attribute per vertex
    ColoredSquare,
    /// Indexed cube with per-face colours, rotating every frame
    RotatingCube,
}

impl DemoKind {
    pub fn label(self) -> &'static str {
        match self {
            DemoKind::FlatSquare => "Flat colour square",
            DemoKind::ColoredSquare => "Per-vertex colour square",
            DemoKind::RotatingCube => "Rotating cube",
        }
    }

    pub fn is_animated(self) -> bool {
        matches!(self, DemoKind::RotatingCube)
    }

    pub fn uses_vertex_colors(self) -> bool {
        !matches!(self, DemoKind::FlatSquare)
    }

    pub fn is_indexed(self) -> bool {
        matches!(self, DemoKind::RotatingCube)
    }

    pub fn default_primitive(self) -> Primitive {
        match self {
            DemoKind::FlatSquare | DemoKind::ColoredSquare => Primitive::TriangleStrip,
            DemoKind::RotatingCube => Primitive::Triangles,
        }
    }
}

/// WebGL draw mode.
///
/// On the four square vertices `Points` draws a dot per vertex, `LineStrip`
/// a backwards 'Z', `LineLoop` an hourglass, `Lines` the top and bottom
/// edges, `TriangleStrip` the filled square and `Triangles` a single
/// triangle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Primitive {
    Points,
    LineStrip,
    LineLoop,
    Lines,
    TriangleStrip,
    TriangleFan,
    Triangles,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn kinds_parse_from_their_display_form() {
        for kind in DemoKind::iter() {
            assert_eq!(DemoKind::from_str(&kind.to_string()), Ok(kind));
        }
        assert_eq!(DemoKind::RotatingCube.to_string(), "rotating-cube");
    }

    #[test]
    fn only_the_cube_animates() {
        let animated: Vec<_> = DemoKind::iter().filter(|k| k.is_animated()).collect();
        assert_eq!(animated, vec![DemoKind::RotatingCube]);
    }
}
