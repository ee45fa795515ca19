use js_sys::Array;
use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;

use crate::application::{start_active, stop_active, with_active_runner};
use crate::domain::demo::{DemoConfig, DemoKind};
use crate::domain::errors::{AppError, ConfigurationError};
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::rendering::renderer::{WebGlRenderer, with_global_renderer};
use crate::infrastructure::ui::UiNotificationService;

/// JS handle for running the demos on a canvas without the Leptos page
#[wasm_bindgen]
pub struct WebGlDemoApi {
    canvas_id: String,
}

#[wasm_bindgen]
impl WebGlDemoApi {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: String) -> Self {
        Self { canvas_id }
    }

    /// Start `demo` (`flat-square`, `colored-square`, `rotating-cube`),
    /// optionally with a JSON configuration. Replaces any running demo.
    pub fn start(&self, demo: &str, config_json: Option<String>) -> Result<(), JsValue> {
        let result = self.try_start(demo, config_json.as_deref());
        if let Err(e) = &result {
            UiNotificationService::new().report_failure(e);
        }
        result.map_err(JsValue::from)
    }

    pub fn stop(&self) {
        stop_active();
    }

    /// Rolling frames-per-second of the active demo, 0 when idle
    pub fn fps(&self) -> f64 {
        with_global_renderer(|renderer| renderer.stats().average_fps()).unwrap_or(0.0)
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        with_active_runner(|runner| runner.is_running()).unwrap_or(false)
    }

    #[wasm_bindgen(js_name = activeDemo)]
    pub fn active_demo(&self) -> Option<String> {
        with_active_runner(|runner| runner.kind().to_string())
    }

    #[wasm_bindgen(js_name = availableDemos)]
    pub fn available_demos() -> Array {
        DemoKind::iter().map(|kind| JsValue::from_str(kind.into())).collect()
    }

    #[wasm_bindgen(js_name = isWebGlSupported)]
    pub fn is_webgl_supported() -> bool {
        WebGlRenderer::is_webgl_supported()
    }
}

impl WebGlDemoApi {
    fn try_start(&self, demo: &str, config_json: Option<&str>) -> Result<(), AppError> {
        let kind = demo
            .parse::<DemoKind>()
            .map_err(|_| ConfigurationError::UnknownDemo(demo.to_string()))?;
        let config = match config_json {
            Some(json) => DemoConfig::from_json(json)?,
            None => DemoConfig::default(),
        };

        let canvas = WebGlRenderer::find_canvas(&self.canvas_id)?;

        get_logger().info(
            LogComponent::Presentation("WebGlDemoApi"),
            &format!("🚀 Starting {} on #{}", kind, self.canvas_id),
        );
        start_active(canvas, kind, config, None)
    }
}
