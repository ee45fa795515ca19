use js_sys::{Float32Array, Uint16Array};
use web_sys::{WebGlBuffer, WebGlRenderingContext as Gl};

use crate::domain::errors::{RenderingError, RenderingResult};
use crate::infrastructure::rendering::gpu_structures::Mesh;

/// GPU copies of a mesh, written once with `STATIC_DRAW`
#[derive(Debug, Clone)]
pub struct SceneBuffers {
    pub position: WebGlBuffer,
    pub color: Option<WebGlBuffer>,
    pub indices: Option<WebGlBuffer>,
}

impl SceneBuffers {
    pub fn upload(gl: &Gl, mesh: &Mesh) -> RenderingResult<Self> {
        let position = upload_floats(gl, mesh.positions.as_floats(), "position")?;
        let color = mesh.color_floats().map(|colors| upload_floats(gl, colors, "color")).transpose()?;
        let indices = mesh.indices.as_deref().map(|indices| upload_indices(gl, indices)).transpose()?;
        Ok(Self { position, color, indices })
    }

    pub fn release(&self, gl: &Gl) {
        gl.delete_buffer(Some(&self.position));
        for buffer in self.color.iter().chain(self.indices.iter()) {
            gl.delete_buffer(Some(buffer));
        }
    }
}

fn upload_floats(gl: &Gl, data: &[f32], label: &'static str) -> RenderingResult<WebGlBuffer> {
    let buffer = gl.create_buffer().ok_or(RenderingError::BufferAllocationFailed(label))?;
    // Subsequent buffer operations apply to the bound buffer
    gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));
    let array = Float32Array::from(data);
    gl.buffer_data_with_array_buffer_view(Gl::ARRAY_BUFFER, &array, Gl::STATIC_DRAW);
    Ok(buffer)
}

fn upload_indices(gl: &Gl, data: &[u16]) -> RenderingResult<WebGlBuffer> {
    let buffer = gl.create_buffer().ok_or(RenderingError::BufferAllocationFailed("index"))?;
    gl.bind_buffer(Gl::ELEMENT_ARRAY_BUFFER, Some(&buffer));
    let array = Uint16Array::from(data);
    gl.buffer_data_with_array_buffer_view(Gl::ELEMENT_ARRAY_BUFFER, &array, Gl::STATIC_DRAW);
    Ok(buffer)
}
