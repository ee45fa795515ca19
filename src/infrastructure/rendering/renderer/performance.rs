use std::collections::VecDeque;

/// Number of frame samples kept for the rolling average
pub const FPS_WINDOW: usize = 60;

/// Rolling frame-rate estimate fed with animation-frame timestamps (ms)
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    last_frame_time: Option<f64>,
    fps_log: VecDeque<f64>,
    frames: u64,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_frame(&mut self, now_ms: f64) {
        if let Some(last) = self.last_frame_time {
            let delta = now_ms - last;
            if delta > 0.0 {
                self.fps_log.push_back(1000.0 / delta);
                if self.fps_log.len() > FPS_WINDOW {
                    self.fps_log.pop_front();
                }
            }
        }
        self.last_frame_time = Some(now_ms);
        self.frames += 1;
    }

    /// Mean FPS over the window, 0 until two frames were seen
    pub fn average_fps(&self) -> f64 {
        if self.fps_log.is_empty() {
            return 0.0;
        }
        self.fps_log.iter().sum::<f64>() / self.fps_log.len() as f64
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
