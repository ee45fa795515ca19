//! User-facing notifications, kept apart from rendering.

use crate::domain::errors::{AppError, RenderingError};
use crate::domain::logging::{LogComponent, get_logger};
use crate::log_warn;

#[derive(Clone, Default)]
pub struct UiNotificationService;

impl UiNotificationService {
    pub fn new() -> Self {
        Self
    }

    /// Log the failure, and alert the user when the browser lacks WebGL.
    pub fn report_failure(&self, error: &AppError) {
        get_logger().error(LogComponent::Infrastructure("UI"), &error.to_string());

        if let AppError::Rendering(RenderingError::WebGlUnsupported) = error {
            self.alert(&RenderingError::WebGlUnsupported.to_string());
        }
    }

    pub fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    log_warn!(LogComponent::Infrastructure("UI"), "alert() was blocked: {}", message);
                }
            }
            None => {
                log_warn!(LogComponent::Infrastructure("UI"), "Window not available for: {}", message);
            }
        }
    }
}
