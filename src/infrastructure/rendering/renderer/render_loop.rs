use super::*;
use crate::domain::demo::camera::{self, aspect_ratio};
use crate::domain::logging::LogComponent;
use crate::infrastructure::rendering::gpu_structures::VertexLayout;
use crate::log_trace;
use web_sys::WebGlBuffer;

impl WebGlRenderer {
    /// Draw one frame at `timestamp_ms` and update the frame statistics.
    pub fn render(&mut self, timestamp_ms: f64, rotation: f32) {
        self.stats.record_frame(timestamp_ms);
        self.draw_scene(rotation);

        // Log only every 600 frames
        if self.stats.frame_count() % 600 == 0 {
            log_trace!(
                LogComponent::Infrastructure("WebGlRenderer"),
                "🎞️ {} frames, {:.1} fps",
                self.stats.frame_count(),
                self.stats.average_fps()
            );
        }
    }

    pub fn draw_scene(&self, rotation: f32) {
        let gl = &self.gl;

        let [r, g, b, a] = self.config.clear_color;
        gl.clear_color(r, g, b, a);
        gl.clear_depth(1.0);
        gl.enable(Gl::DEPTH_TEST);
        // Near things obscure far things
        gl.depth_func(Gl::LEQUAL);
        gl.viewport(0, 0, self.canvas.width() as i32, self.canvas.height() as i32);
        gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);

        let aspect = aspect_ratio(
            self.canvas.client_width(),
            self.canvas.client_height(),
            self.canvas.width(),
            self.canvas.height(),
        );
        let projection = camera::projection_matrix(&self.config, aspect);
        let model_view = camera::model_view_matrix(&self.config, self.kind, rotation);

        self.bind_attribute(
            &self.buffers.position,
            self.program.vertex_position,
            self.mesh.positions.layout(),
        );
        if let (Some(buffer), Some(location)) = (&self.buffers.color, self.program.vertex_color) {
            self.bind_attribute(buffer, location, Mesh::COLOR_LAYOUT);
        }

        gl.use_program(Some(&self.program.program));
        gl.uniform_matrix4fv_with_f32_array(
            self.program.projection_matrix.as_ref(),
            false,
            &camera::to_uniform(&projection),
        );
        gl.uniform_matrix4fv_with_f32_array(
            self.program.model_view_matrix.as_ref(),
            false,
            &camera::to_uniform(&model_view),
        );

        let mode = self.primitive.gl_mode();
        let count = self.mesh.draw_count();
        match &self.buffers.indices {
            Some(indices) => {
                gl.bind_buffer(Gl::ELEMENT_ARRAY_BUFFER, Some(indices));
                gl.draw_elements_with_i32(mode, count, Gl::UNSIGNED_SHORT, 0);
            }
            None => gl.draw_arrays(mode, 0, count),
        }
    }

    /// Tell WebGL how to pull values out of `buffer` into attribute `location`
    fn bind_attribute(&self, buffer: &WebGlBuffer, location: u32, layout: VertexLayout) {
        self.gl.bind_buffer(Gl::ARRAY_BUFFER, Some(buffer));
        self.gl.vertex_attrib_pointer_with_i32(
            location,
            layout.components,
            Gl::FLOAT,
            layout.normalized,
            layout.stride,
            layout.offset,
        );
        self.gl.enable_vertex_attrib_array(location);
    }
}
