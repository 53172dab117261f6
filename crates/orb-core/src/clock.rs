/// Animation time in "ticks × speed" units, not seconds.
///
/// Advances by the current `timeSpeed` once per frame regardless of the
/// display's refresh rate. Never paused; only reset or re-rated.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct ClockState {
    elapsed: f32,
}

impl ClockState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn advance(&mut self, rate: f32) -> f32 {
        if rate.is_finite() && rate > 0.0 {
            self.elapsed += rate;
        }
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}
