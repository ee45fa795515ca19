/// Accumulated rotation driven by animation-frame timestamps (milliseconds).
#[derive(Debug, Clone, PartialEq)]
pub struct RotationClock {
    speed: f32,
    rotation: f32,
    last_timestamp_ms: Option<f64>,
}

impl RotationClock {
    pub fn new(speed: f32) -> Self {
        Self { speed, rotation: 0.0, last_timestamp_ms: None }
    }

    /// Advance to `timestamp_ms` and return the rotation to draw with.
    ///
    /// The first tick only sets the time base. A timestamp older than the
    /// previous one adds nothing.
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        if let Some(last) = self.last_timestamp_ms {
            let delta_seconds = ((timestamp_ms - last) * 0.001).max(0.0);
            self.rotation += delta_seconds as f32 * self.speed;
        }
        self.last_timestamp_ms = Some(timestamp_ms);
        self.rotation
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn reset(&mut self) {
        self.rotation = 0.0;
        self.last_timestamp_ms = None;
    }
}
