use leptos::html::Canvas;
use leptos::*;
use std::rc::Rc;
use strum::IntoEnumIterator;
use web_sys::HtmlCanvasElement;

use crate::application::{FpsObserver, start_active, stop_active};
use crate::domain::demo::{DemoConfig, DemoKind};
use crate::infrastructure::ui::UiNotificationService;

/// Id of the canvas every demo draws on
pub const CANVAS_ID: &str = "glCanvas";

crate::global_signals! {
    pub active_demo => active_demo: DemoKind,
    pub frame_rate => frame_rate: f64,
    pub last_error => last_error: Option<String>,
}

/// 🦀 Demo page: selector, canvas and frame-rate readout
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .webgl-demos {
                font-family: -apple-system, BlinkMacSystemFont, sans-serif;
                background: #111;
                color: #eee;
                min-height: 100vh;
                padding: 20px;
            }
            .webgl-demos canvas {
                display: block;
                margin: 16px 0;
                border: 1px solid #333;
            }
            .webgl-demos .error {
                color: #ff6b6b;
            }
            "#}
        </style>
        <div class="webgl-demos">
            <DemoSelector/>
            <DemoCanvas/>
        </div>
    }
}

#[component]
fn DemoSelector() -> impl IntoView {
    let active = active_demo();

    view! {
        <select on:change=move |ev| {
            if let Ok(kind) = event_target_value(&ev).parse::<DemoKind>() {
                active.set(kind);
            }
        }>
            {DemoKind::iter()
                .map(|kind| {
                    view! {
                        <option value=kind.to_string() selected=move || active.get() == kind>
                            {kind.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
fn DemoCanvas() -> impl IntoView {
    let active = active_demo();
    let fps = frame_rate();
    let error = last_error();
    let canvas_ref = create_node_ref::<Canvas>();

    // Restart whenever the selection changes, once the canvas is mounted
    create_effect(move |_| {
        let kind = active.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        fps.set(0.0);

        let observer: FpsObserver = Rc::new(move |value| fps.set(value));
        let canvas: &HtmlCanvasElement = &canvas;
        let started = start_active(canvas.clone(), kind, DemoConfig::default(), Some(observer));
        match started {
            Ok(()) => error.set(None),
            Err(e) => {
                UiNotificationService::new().report_failure(&e);
                error.set(Some(e.to_string()));
            }
        }
    });

    on_cleanup(stop_active);

    view! {
        <canvas id=CANVAS_ID node_ref=canvas_ref width="640" height="480"/>
        <p>
            {move || {
                if active.get().is_animated() {
                    format!("{:.1} fps", fps.get())
                } else {
                    "static frame".to_string()
                }
            }}
        </p>
        {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
    }
}
