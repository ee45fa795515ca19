//! WebGL renderer for the demo scenes.
//!
//! Owns the context, the linked program and the static buffers of one demo.
//! The active renderer is kept behind a global handle so the JS API can
//! query it without holding the animation loop.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{HtmlCanvasElement, WebGlRenderingContext as Gl};

use crate::domain::demo::{DemoConfig, DemoKind, Primitive};
use crate::infrastructure::rendering::gpu_structures::Mesh;

thread_local! {
    static GLOBAL_RENDERER: RefCell<Option<Rc<RefCell<WebGlRenderer>>>> = const { RefCell::new(None) };
}

/// Store the global renderer instance
pub fn set_global_renderer(renderer: Rc<RefCell<WebGlRenderer>>) {
    GLOBAL_RENDERER.with(|cell| {
        *cell.borrow_mut() = Some(renderer);
    });
}

/// Forget the global renderer if it is still `renderer`
pub fn clear_global_renderer_if(renderer: &Rc<RefCell<WebGlRenderer>>) {
    GLOBAL_RENDERER.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.as_ref().is_some_and(|current| Rc::ptr_eq(current, renderer)) {
            slot.take();
        }
    });
}

/// Obtain a mutable reference to the global renderer
pub fn with_global_renderer<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut WebGlRenderer) -> R,
{
    GLOBAL_RENDERER.with(|cell| {
        let opt = cell.borrow();
        opt.as_ref().and_then(|rc| rc.try_borrow_mut().ok().map(|mut r| f(&mut *r)))
    })
}

/// WebGL 1 renderer for a single demo
pub struct WebGlRenderer {
    canvas: HtmlCanvasElement,
    gl: Gl,
    kind: DemoKind,
    config: DemoConfig,
    primitive: Primitive,
    program: ProgramInfo,
    buffers: SceneBuffers,
    mesh: Mesh,

    // ⏱️ Performance metrics
    stats: FrameStats,
}

mod buffers;
pub mod geometry;
mod initialization;
mod performance;
pub mod program;
mod render_loop;

pub use buffers::SceneBuffers;
pub use geometry::mesh_for;
pub use performance::{FPS_WINDOW, FrameStats};
pub use program::ProgramInfo;

impl WebGlRenderer {
    pub fn kind(&self) -> DemoKind {
        self.kind
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Drop for WebGlRenderer {
    fn drop(&mut self) {
        // The context outlives us; a stale enabled array breaks the next demo's draw
        self.gl.disable_vertex_attrib_array(self.program.vertex_position);
        if let Some(location) = self.program.vertex_color {
            self.gl.disable_vertex_attrib_array(location);
        }
        self.buffers.release(&self.gl);
        self.gl.delete_program(Some(&self.program.program));
    }
}
