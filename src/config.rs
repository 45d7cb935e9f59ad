use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::layout::MOBILE_BREAKPOINT_PX;

/// Client-side tunables for the animated sections. Provided once through
/// context by `App`; components read it with `expect_context`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Minimum scroll delta (px) before the navbar reacts to scroll direction.
    pub jitter_guard_px: f64,
    /// How long a sent/failed contact status stays on screen.
    pub status_clear_ms: u64,
    pub mobile_breakpoint_px: f64,
    /// Intersection ratio at which the home section forces the navbar visible.
    pub anchor_threshold: f64,
    pub intro_ms: u64,
    /// Smallest progress change worth re-rendering for.
    pub min_progress_delta: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            jitter_guard_px: 5.0,
            status_clear_ms: 4000,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            anchor_threshold: 0.1,
            intro_ms: 2400,
            min_progress_delta: 0.001,
        }
    }
}

impl SiteConfig {
    pub fn status_clear(&self) -> Duration {
        Duration::from_millis(self.status_clear_ms)
    }

    pub fn intro(&self) -> Duration {
        Duration::from_millis(self.intro_ms)
    }
}
