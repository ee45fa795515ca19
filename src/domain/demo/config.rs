use serde::{Deserialize, Serialize};

use super::Primitive;
use crate::domain::errors::ConfigurationError;
use crate::domain::logging::LogComponent;
use crate::log_warn;

pub type Rgba = [f32; 4];

/// Tunables of a demo. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub clear_color: Rgba,
    pub field_of_view_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub translation: [f32; 3],
    pub flat_color: Rgba,
    /// Radians per second
    pub rotation_speed: f32,
    /// Overrides the demo's own draw mode
    pub primitive: Option<Primitive>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0, 1.0],
            field_of_view_degrees: 45.0,
            z_near: 0.1,
            z_far: 100.0,
            translation: [0.0, 0.0, -6.0],
            flat_color: [0.0, 1.0, 1.0, 1.0],
            rotation_speed: 1.0,
            primitive: None,
        }
    }
}

impl DemoConfig {
    /// Parse a JSON object and validate it. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let parsed = serde_json::from_str::<DemoConfig>(json)
            .map_err(|e| ConfigurationError::Malformed(e.to_string()))
            .and_then(|config| config.validate().map(|()| config));
        if let Err(e) = &parsed {
            log_warn!(LogComponent::Domain("DemoConfig"), "Rejected configuration: {}", e);
        }
        parsed
    }

    pub fn field_of_view_radians(&self) -> f32 {
        self.field_of_view_degrees.to_radians()
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_color("clear_color", &self.clear_color)?;
        check_color("flat_color", &self.flat_color)?;

        if !self.field_of_view_degrees.is_finite()
            || self.field_of_view_degrees <= 0.0
            || self.field_of_view_degrees >= 180.0
        {
            return Err(invalid(
                "field_of_view_degrees",
                format!("{} is outside (0, 180)", self.field_of_view_degrees),
            ));
        }
        if !self.z_near.is_finite() || self.z_near <= 0.0 {
            return Err(invalid("z_near", format!("{} must be positive", self.z_near)));
        }
        if !self.z_far.is_finite() || self.z_far <= self.z_near {
            return Err(invalid(
                "z_far",
                format!("{} must be greater than z_near ({})", self.z_far, self.z_near),
            ));
        }
        if self.translation.iter().any(|v| !v.is_finite()) {
            return Err(invalid("translation", "components must be finite".to_string()));
        }
        if !self.rotation_speed.is_finite() {
            return Err(invalid("rotation_speed", "must be finite".to_string()));
        }
        Ok(())
    }
}

fn check_color(name: &'static str, color: &Rgba) -> Result<(), ConfigurationError> {
    match color.iter().find(|c| !(0.0..=1.0).contains(*c)) {
        Some(channel) => Err(invalid(name, format!("channel {} is outside [0, 1]", channel))),
        None => Ok(()),
    }
}

fn invalid(name: &'static str, reason: String) -> ConfigurationError {
    ConfigurationError::InvalidParameter { name, reason }
}
