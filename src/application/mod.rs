pub mod demo_runner;

pub use demo_runner::{DemoRunner, FpsObserver, start_active, stop_active, with_active_runner};
