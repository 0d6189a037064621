//! Infinite-scroll trigger
//!
//! A sentinel widget sits below the last card. Every frame the UI reports
//! whether it is on screen and the trigger answers whether `fetch_next`
//! should be called. The loader ignores calls while a fetch is in flight or
//! once it has settled, so firing too often is harmless.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerMode {
    /// Fire on every observation where the sentinel is visible. Keeps pulling
    /// pages until the viewport is filled.
    #[default]
    Level,
    /// Fire only when the sentinel goes from hidden to visible.
    Edge,
}

#[derive(Debug, Clone, Default)]
pub struct SentinelTrigger {
    mode: TriggerMode,
    was_visible: bool,
}

impl SentinelTrigger {
    pub fn new(mode: TriggerMode) -> Self {
        Self {
            mode,
            was_visible: false,
        }
    }

    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Record the current visibility; returns `true` when a fetch should be requested
    pub fn observe(&mut self, visible: bool) -> bool {
        let fire = match self.mode {
            TriggerMode::Level => visible,
            TriggerMode::Edge => visible && !self.was_visible,
        };
        self.was_visible = visible;
        fire
    }

    /// Forget the last observation (e.g. after a listing is reset)
    pub fn reset(&mut self) {
        self.was_visible = false;
    }
}
