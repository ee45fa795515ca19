//! Drives a demo: first frame immediately, then one frame per
//! `requestAnimationFrame` for animated scenes.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};
use web_sys::HtmlCanvasElement;

use crate::domain::demo::{DemoConfig, DemoKind, RotationClock};
use crate::domain::errors::AppResult;
use crate::domain::logging::LogComponent;
use crate::infrastructure::rendering::renderer::{
    WebGlRenderer, clear_global_renderer_if, set_global_renderer,
};
use crate::{log_debug, log_info};

/// Frames between two FPS notifications
pub const FPS_REPORT_INTERVAL: u64 = 30;

/// Receives the rolling FPS average
pub type FpsObserver = Rc<dyn Fn(f64)>;

thread_local! {
    static ACTIVE_RUNNER: RefCell<Option<DemoRunner>> = const { RefCell::new(None) };
}

struct LoopState {
    renderer: Rc<RefCell<WebGlRenderer>>,
    clock: RotationClock,
    frame: Option<AnimationFrame>,
    running: bool,
    observer: Option<FpsObserver>,
}

/// Handle to a running demo. Dropping it cancels the pending frame.
pub struct DemoRunner {
    kind: DemoKind,
    state: Rc<RefCell<LoopState>>,
}

impl DemoRunner {
    pub fn start(canvas: HtmlCanvasElement, kind: DemoKind, config: DemoConfig) -> AppResult<Self> {
        Self::start_observed(canvas, kind, config, None)
    }

    pub fn start_observed(
        canvas: HtmlCanvasElement,
        kind: DemoKind,
        config: DemoConfig,
        observer: Option<FpsObserver>,
    ) -> AppResult<Self> {
        let renderer = WebGlRenderer::from_canvas(canvas, kind, config)?;
        Ok(Self::run(renderer, observer))
    }

    fn run(renderer: WebGlRenderer, observer: Option<FpsObserver>) -> Self {
        let kind = renderer.kind();
        let speed = renderer.config().rotation_speed;

        let renderer = Rc::new(RefCell::new(renderer));
        set_global_renderer(Rc::clone(&renderer));
        renderer.borrow_mut().render(now_ms(), 0.0);

        let state = Rc::new(RefCell::new(LoopState {
            renderer,
            clock: RotationClock::new(speed),
            frame: None,
            running: kind.is_animated(),
            observer,
        }));

        if kind.is_animated() {
            schedule_frame(&state);
        }

        log_info!(LogComponent::Application("DemoRunner"), "▶️ Started {}", kind);
        Self { kind, state }
    }

    pub fn kind(&self) -> DemoKind {
        self.kind
    }

    /// True while an animation loop is pending
    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }

    pub fn rotation(&self) -> f32 {
        self.state.borrow().clock.rotation()
    }

    pub fn average_fps(&self) -> f64 {
        let state = self.state.borrow();
        let renderer = state.renderer.borrow();
        renderer.stats().average_fps()
    }

    /// Cancel the pending animation frame. Static demos keep their last frame on screen.
    pub fn stop(&self) {
        let mut state = self.state.borrow_mut();
        if state.running {
            log_debug!(LogComponent::Application("DemoRunner"), "⏹️ Stopped {}", self.kind);
        }
        state.running = false;
        state.frame = None;
    }
}

impl Drop for DemoRunner {
    fn drop(&mut self) {
        self.stop();
        clear_global_renderer_if(&self.state.borrow().renderer);
    }
}

fn schedule_frame(state: &Rc<RefCell<LoopState>>) {
    let next = Rc::clone(state);
    let handle = request_animation_frame(move |timestamp| on_frame(&next, timestamp));
    state.borrow_mut().frame = Some(handle);
}

fn on_frame(state: &Rc<RefCell<LoopState>>, timestamp: f64) {
    let (renderer, rotation) = {
        let mut state = state.borrow_mut();
        if !state.running {
            return;
        }
        (Rc::clone(&state.renderer), state.clock.tick(timestamp))
    };

    let (frames, fps) = {
        let mut renderer = renderer.borrow_mut();
        renderer.render(timestamp, rotation);
        (renderer.stats().frame_count(), renderer.stats().average_fps())
    };

    if frames % FPS_REPORT_INTERVAL == 0 {
        // Cloned out so the observer may stop the demo
        let observer = state.borrow().observer.clone();
        if let Some(observer) = observer {
            observer(fps);
        }
    }

    if state.borrow().running {
        schedule_frame(state);
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Replace the page's active demo. The previous one is stopped first so
/// only one loop draws on the shared context.
pub fn start_active(
    canvas: HtmlCanvasElement,
    kind: DemoKind,
    config: DemoConfig,
    observer: Option<FpsObserver>,
) -> AppResult<()> {
    stop_active();
    let runner = DemoRunner::start_observed(canvas, kind, config, observer)?;
    ACTIVE_RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    Ok(())
}

pub fn stop_active() {
    // Take first so the runner is dropped outside the borrow
    let previous = ACTIVE_RUNNER.with(|cell| cell.borrow_mut().take());
    drop(previous);
}

pub fn with_active_runner<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&DemoRunner) -> R,
{
    ACTIVE_RUNNER.with(|cell| cell.borrow().as_ref().map(f))
}
