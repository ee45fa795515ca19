//! Projection and model-view matrices.
//!
//! Matrices are handed to WebGL column-major with `transpose = false`.

use glam::{Mat4, Vec3};

use super::{DemoConfig, DemoKind};

/// Y and X rotation rates of the cube relative to its Z rotation
pub const CUBE_Y_RATE: f32 = 0.7;
pub const CUBE_X_RATE: f32 = 0.3;

/// Aspect ratio of the canvas. The CSS client size wins; the drawing buffer
/// size is used while the canvas is not laid out yet.
pub fn aspect_ratio(client_width: i32, client_height: i32, buffer_width: u32, buffer_height: u32) -> f32 {
    if client_width > 0 && client_height > 0 {
        client_width as f32 / client_height as f32
    } else if buffer_width > 0 && buffer_height > 0 {
        buffer_width as f32 / buffer_height as f32
    } else {
        1.0
    }
}

pub fn projection_matrix(config: &DemoConfig, aspect: f32) -> Mat4 {
    Mat4::perspective_rh_gl(config.field_of_view_radians(), aspect, config.z_near, config.z_far)
}

pub fn model_view_matrix(config: &DemoConfig, kind: DemoKind, rotation: f32) -> Mat4 {
    let translation = Mat4::from_translation(Vec3::from_array(config.translation));
    if !kind.is_animated() {
        return translation;
    }
    translation
        * Mat4::from_rotation_z(rotation)
        * Mat4::from_rotation_y(rotation * CUBE_Y_RATE)
        * Mat4::from_rotation_x(rotation * CUBE_X_RATE)
}

pub fn to_uniform(matrix: &Mat4) -> [f32; 16] {
    matrix.to_cols_array()
}
