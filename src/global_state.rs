use crate::domain::demo::DemoKind;
use leptos::*;
use once_cell::sync::OnceCell;

/// Reactive state shared by the demo page
pub struct Globals {
    pub active_demo: RwSignal<DemoKind>,
    pub frame_rate: RwSignal<f64>,
    pub last_error: RwSignal<Option<String>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        active_demo: create_rw_signal(DemoKind::default()),
        frame_rate: create_rw_signal(0.0),
        last_error: create_rw_signal(None),
    })
}
