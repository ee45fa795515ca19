#![cfg(target_arch = "wasm32")]

use strum::IntoEnumIterator;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext as Gl};
use webgl_demos::application::{DemoRunner, start_active, stop_active, with_active_runner};
use webgl_demos::domain::demo::{DemoConfig, DemoKind, Primitive};
use webgl_demos::domain::errors::{
    AppError, ConfigurationError, RenderingError, ShaderStage,
};
use webgl_demos::infrastructure::rendering::renderer::program::compile_shader;
use webgl_demos::infrastructure::rendering::renderer::with_global_renderer;
use webgl_demos::infrastructure::rendering::WebGlRenderer;
use webgl_demos::presentation::WebGlDemoApi;

wasm_bindgen_test_configure!(run_in_browser);

fn setup_canvas(id: &str) -> HtmlCanvasElement {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas.set_width(64);
    canvas.set_height(48);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

/// Resolve after the browser's next animation frame
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window().unwrap().request_animation_frame(&resolve).unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

async fn wait_frames(count: usize) {
    for _ in 0..count {
        next_frame().await;
    }
}

fn frame_count() -> u64 {
    with_global_renderer(|r| r.stats().frame_count()).unwrap()
}

fn skip_without_webgl() -> bool {
    if !WebGlRenderer::is_webgl_supported() {
        web_sys::console::log_1(&"Skipping test: WebGL not supported".into());
        return true;
    }
    false
}

#[wasm_bindgen_test]
fn every_demo_builds_and_draws_a_frame() {
    if skip_without_webgl() {
        return;
    }
    for kind in DemoKind::iter() {
        let canvas = setup_canvas(&format!("demo-{kind}"));
        let mut renderer = WebGlRenderer::from_canvas(canvas, kind, DemoConfig::default()).unwrap();
        assert_eq!(renderer.kind(), kind);
        assert_eq!(renderer.primitive(), kind.default_primitive());
        renderer.render(0.0, 0.0);
        renderer.render(16.0, 0.1);
        assert_eq!(renderer.stats().frame_count(), 2);
    }
}

#[wasm_bindgen_test]
fn canvas_lookup_errors() {
    let missing = WebGlRenderer::new("no-such-canvas", DemoKind::FlatSquare, DemoConfig::default());
    assert!(matches!(
        missing,
        Err(AppError::Rendering(RenderingError::CanvasNotFound(ref id))) if id == "no-such-canvas"
    ));

    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_id("not-a-canvas");
    document.body().unwrap().append_child(&div).unwrap();
    let wrong = WebGlRenderer::new("not-a-canvas", DemoKind::FlatSquare, DemoConfig::default());
    assert!(matches!(wrong, Err(AppError::Rendering(RenderingError::NotACanvas(_)))));
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected_before_touching_the_context() {
    let canvas = setup_canvas("bad-config");
    let config = DemoConfig { z_near: -1.0, ..DemoConfig::default() };
    let result = WebGlRenderer::from_canvas(canvas, DemoKind::RotatingCube, config);
    assert!(matches!(
        result,
        Err(AppError::Configuration(ConfigurationError::InvalidParameter { name: "z_near", .. }))
    ));
}

#[wasm_bindgen_test]
fn primitive_override_is_honoured() {
    if skip_without_webgl() {
        return;
    }
    let canvas = setup_canvas("override");
    let config = DemoConfig { primitive: Some(Primitive::LineLoop), ..DemoConfig::default() };
    let renderer = WebGlRenderer::from_canvas(canvas, DemoKind::FlatSquare, config).unwrap();
    assert_eq!(renderer.primitive(), Primitive::LineLoop);
}

#[wasm_bindgen_test]
fn broken_shader_reports_its_log() {
    if skip_without_webgl() {
        return;
    }
    let canvas = setup_canvas("broken-shader");
    let gl = canvas.get_context("webgl").unwrap().unwrap().dyn_into::<Gl>().unwrap();
    let result = compile_shader(&gl, ShaderStage::Fragment, "void main() { oops }");
    match result {
        Err(RenderingError::ShaderCompilationFailed { stage, log }) => {
            assert_eq!(stage, ShaderStage::Fragment);
            assert!(!log.is_empty());
        }
        other => panic!("expected a compilation failure, got {:?}", other.map(|_| ())),
    }
}

#[wasm_bindgen_test]
fn static_demo_stops_after_first_frame() {
    if skip_without_webgl() {
        return;
    }
    let canvas = setup_canvas("static-runner");
    let runner = DemoRunner::start(canvas, DemoKind::ColoredSquare, DemoConfig::default()).unwrap();
    assert!(!runner.is_running());
    assert_eq!(runner.rotation(), 0.0);
    assert_eq!(with_global_renderer(|r| r.stats().frame_count()), Some(1));
    drop(runner);
    assert!(with_global_renderer(|r| r.kind()).is_none());
}

#[wasm_bindgen_test]
fn active_demo_is_replaced_and_stopped() {
    if skip_without_webgl() {
        return;
    }
    let canvas = setup_canvas("active-runner");
    start_active(canvas.clone(), DemoKind::RotatingCube, DemoConfig::default(), None).unwrap();
    assert_eq!(with_active_runner(|r| r.is_running()), Some(true));

    start_active(canvas, DemoKind::FlatSquare, DemoConfig::default(), None).unwrap();
    assert_eq!(with_active_runner(|r| r.kind()), Some(DemoKind::FlatSquare));
    assert_eq!(with_global_renderer(|r| r.kind()), Some(DemoKind::FlatSquare));

    stop_active();
    assert!(with_active_runner(|r| r.kind()).is_none());
}

#[wasm_bindgen_test]
async fn cube_loop_advances_until_stopped() {
    if skip_without_webgl() {
        return;
    }
    let canvas = setup_canvas("animated-runner");
    let runner = DemoRunner::start(canvas, DemoKind::RotatingCube, DemoConfig::default()).unwrap();
    assert!(runner.is_running());
    assert_eq!(frame_count(), 1);

    wait_frames(6).await;
    let rotation = runner.rotation();
    let frames = frame_count();
    assert!(rotation > 0.0, "rotation did not advance: {rotation}");
    assert!(frames > 3, "only {frames} frames drawn");

    runner.stop();
    assert!(!runner.is_running());
    let rotation = runner.rotation();
    let frames = frame_count();

    wait_frames(4).await;
    assert_eq!(runner.rotation(), rotation);
    assert_eq!(frame_count(), frames);
}

#[wasm_bindgen_test]
fn api_rejects_unknown_demo_names() {
    let api = WebGlDemoApi::new("api-canvas".to_string());
    let err = api.start("nope", None).unwrap_err();
    assert_eq!(
        err.as_string().as_deref(),
        Some("Configuration Error: unknown demo 'nope'")
    );
    assert!(!api.is_running());
}
