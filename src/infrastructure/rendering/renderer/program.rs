use web_sys::{WebGlProgram, WebGlRenderingContext as Gl, WebGlShader, WebGlUniformLocation};

use crate::domain::errors::{RenderingError, RenderingResult, ShaderStage};
use crate::domain::logging::{LogComponent, LogLevel, get_logger};
use crate::infrastructure::rendering::shaders::{
    COLOR_ATTRIBUTE, MODEL_VIEW_UNIFORM, POSITION_ATTRIBUTE, PROJECTION_UNIFORM, ShaderSources,
};
use crate::{log_debug, log_error};

/// Linked program plus the locations the draw call needs
#[derive(Debug, Clone)]
pub struct ProgramInfo {
    pub program: WebGlProgram,
    pub vertex_position: u32,
    pub vertex_color: Option<u32>,
    /// WebGL accepts a null location and ignores the upload
    pub projection_matrix: Option<WebGlUniformLocation>,
    pub model_view_matrix: Option<WebGlUniformLocation>,
}

impl ProgramInfo {
    /// Compile both stages, link them and look up attributes and uniforms.
    pub fn build(gl: &Gl, sources: &ShaderSources, with_color: bool) -> RenderingResult<Self> {
        let vertex_shader = compile_shader(gl, ShaderStage::Vertex, &sources.vertex)?;
        let fragment_shader = match compile_shader(gl, ShaderStage::Fragment, &sources.fragment) {
            Ok(shader) => shader,
            Err(e) => {
                gl.delete_shader(Some(&vertex_shader));
                return Err(e);
            }
        };
        let linked = link_program(gl, &vertex_shader, &fragment_shader);
        // Attached shaders are only flagged; they go away with the program
        gl.delete_shader(Some(&vertex_shader));
        gl.delete_shader(Some(&fragment_shader));
        let program = linked?;

        let vertex_position = attribute_location(gl, &program, POSITION_ATTRIBUTE)?;
        let vertex_color = if with_color {
            Some(attribute_location(gl, &program, COLOR_ATTRIBUTE)?)
        } else {
            None
        };

        Ok(Self {
            vertex_position,
            vertex_color,
            projection_matrix: gl.get_uniform_location(&program, PROJECTION_UNIFORM),
            model_view_matrix: gl.get_uniform_location(&program, MODEL_VIEW_UNIFORM),
            program,
        })
    }
}

fn stage_type(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => Gl::VERTEX_SHADER,
        ShaderStage::Fragment => Gl::FRAGMENT_SHADER,
    }
}

/// Compile one shader stage. A failed shader is deleted before returning.
pub fn compile_shader(gl: &Gl, stage: ShaderStage, source: &str) -> RenderingResult<WebGlShader> {
    let shader = gl
        .create_shader(stage_type(stage))
        .ok_or(RenderingError::ShaderCreationFailed(stage))?;

    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled =
        gl.get_shader_parameter(&shader, Gl::COMPILE_STATUS).as_bool().unwrap_or(false);
    if !compiled {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        get_logger().log_with_metadata(
            LogLevel::Error,
            LogComponent::Infrastructure("ShaderProgram"),
            &format!("Error compiling the {} shader", stage),
            &log,
        );
        gl.delete_shader(Some(&shader));
        return Err(RenderingError::ShaderCompilationFailed { stage, log });
    }

    log_debug!(LogComponent::Infrastructure("ShaderProgram"), "Compiled {} shader", stage);
    Ok(shader)
}

pub fn link_program(
    gl: &Gl,
    vertex_shader: &WebGlShader,
    fragment_shader: &WebGlShader,
) -> RenderingResult<WebGlProgram> {
    let program = gl.create_program().ok_or(RenderingError::ProgramCreationFailed)?;

    gl.attach_shader(&program, vertex_shader);
    gl.attach_shader(&program, fragment_shader);
    gl.link_program(&program);

    let linked = gl.get_program_parameter(&program, Gl::LINK_STATUS).as_bool().unwrap_or(false);
    if !linked {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        log_error!(
            LogComponent::Infrastructure("ShaderProgram"),
            "Failed to attach shaders to program: {}",
            log
        );
        gl.delete_program(Some(&program));
        return Err(RenderingError::ProgramLinkFailed(log));
    }

    Ok(program)
}

fn attribute_location(gl: &Gl, program: &WebGlProgram, name: &'static str) -> RenderingResult<u32> {
    let location = gl.get_attrib_location(program, name);
    u32::try_from(location).map_err(|_| RenderingError::AttributeNotFound(name))
}
