use super::*;
use crate::domain::errors::{AppResult, PresentationError, RenderingError};
use crate::domain::logging::LogComponent;
use crate::infrastructure::rendering::shaders::ShaderSources;
use crate::log_info;
use wasm_bindgen::JsCast;

impl WebGlRenderer {
    /// Probe a throwaway canvas for a `webgl` context
    pub fn is_webgl_supported() -> bool {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        document
            .create_element("canvas")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .and_then(|canvas| canvas.get_context("webgl").ok().flatten())
            .is_some()
    }

    /// Look up `#canvas_id` in the current document
    pub fn find_canvas(canvas_id: &str) -> AppResult<HtmlCanvasElement> {
        let document = web_sys::window()
            .ok_or(PresentationError::WindowUnavailable)?
            .document()
            .ok_or(PresentationError::DocumentUnavailable)?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| RenderingError::CanvasNotFound(canvas_id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| RenderingError::NotACanvas(canvas_id.to_string()))?;
        Ok(canvas)
    }

    pub fn new(canvas_id: &str, kind: DemoKind, config: DemoConfig) -> AppResult<Self> {
        Self::from_canvas(Self::find_canvas(canvas_id)?, kind, config)
    }

    pub fn from_canvas(
        canvas: HtmlCanvasElement,
        kind: DemoKind,
        config: DemoConfig,
    ) -> AppResult<Self> {
        config.validate()?;

        let gl = canvas
            .get_context("webgl")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<Gl>().ok())
            .ok_or(RenderingError::WebGlUnsupported)?;

        log_info!(
            LogComponent::Infrastructure("WebGlRenderer"),
            "🎯 WebGL context acquired on {}x{} canvas",
            canvas.width(),
            canvas.height()
        );

        let sources = ShaderSources::for_demo(kind, &config.flat_color);
        let program = ProgramInfo::build(&gl, &sources, kind.uses_vertex_colors())?;

        let mesh = mesh_for(kind);
        let buffers = SceneBuffers::upload(&gl, &mesh)?;
        let primitive = config.primitive.unwrap_or_else(|| kind.default_primitive());

        log_info!(
            LogComponent::Infrastructure("WebGlRenderer"),
            "✅ {} ready: {} vertices, {} elements drawn as {}",
            kind.label(),
            mesh.positions.len(),
            mesh.draw_count(),
            primitive
        );

        Ok(Self {
            canvas,
            gl,
            kind,
            config,
            primitive,
            program,
            buffers,
            mesh,
            stats: FrameStats::new(),
        })
    }
}
