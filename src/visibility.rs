pub const DEFAULT_JITTER_GUARD_PX: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityState {
    pub visible: bool,
    pub force_visible: bool,
    pub last_scroll_y: f64,
}

#[derive(Debug, Clone)]
pub struct VisibilityPolicy {
    state: VisibilityState,
    jitter_guard: f64,
}

impl VisibilityPolicy {
    pub fn new(scroll_y: f64) -> Self {
        Self::with_jitter_guard(scroll_y, DEFAULT_JITTER_GUARD_PX)
    }

    pub fn with_jitter_guard(scroll_y: f64, jitter_guard: f64) -> Self {
        Self {
            state: VisibilityState {
                visible: true,
                force_visible: false,
                last_scroll_y: scroll_y,
            },
            jitter_guard: jitter_guard.max(0.0),
        }
    }

    pub fn snapshot(&self) -> VisibilityState {
        self.state
    }

    /// Re-reads the scroll offset once the page is live; the policy may be
    /// built before a window exists.
    pub fn on_mount(&mut self, scroll_y: f64) -> VisibilityState {
        self.state.last_scroll_y = scroll_y;
        self.state
    }

    pub fn on_anchor_enter(&mut self) -> VisibilityState {
        self.state.force_visible = true;
        self.state.visible = true;
        self.state
    }

    pub fn on_anchor_exit(&mut self) -> VisibilityState {
        self.state.force_visible = false;
        self.state
    }

    /// Convenience for intersection callbacks that only report a boolean.
    pub fn on_anchor(&mut self, intersecting: bool) -> VisibilityState {
        if intersecting {
            self.on_anchor_enter()
        } else {
            self.on_anchor_exit()
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> VisibilityState {
        if self.state.force_visible {
            self.state.visible = true;
            self.state.last_scroll_y = scroll_y;
            return self.state;
        }

        let delta = scroll_y - self.state.last_scroll_y;
        if delta.abs() < self.jitter_guard {
            return self.state;
        }

        if delta > 0.0 {
            self.state.visible = false;
        } else if delta < 0.0 {
            self.state.visible = true;
        }
        self.state.last_scroll_y = scroll_y;
        self.state
    }
}
