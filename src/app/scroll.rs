use std::sync::{Arc, Mutex};

use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_event_listener_with_options, use_window, use_window_size,
    UseEventListenerOptions, UseWindowSizeReturn,
};

use crate::{
    config::SiteConfig,
    layout::Layout,
    motion::{Progress, RegionRect, ScrollOffsets, ScrollProgressTracker, ScrollSample},
};

/// Mobile/desktop classification that follows window resizes.
pub fn use_layout() -> Signal<Layout> {
    let config = expect_context::<SiteConfig>();
    let UseWindowSizeReturn { width, .. } = use_window_size();
    Signal::derive(move || {
        Layout::from_width_with_breakpoint(width.get(), config.mobile_breakpoint_px)
    })
}

fn measure(target: NodeRef<html::Div>, offsets: ScrollOffsets) -> Option<ScrollSample> {
    let el = target.get_untracked()?;
    let win = window();
    let scroll_y = win.scroll_y().ok()?;
    let viewport_height = win.inner_height().ok()?.as_f64()?;
    let rect = el.get_bounding_client_rect();
    Some(ScrollSample::from_bounding(
        scroll_y,
        RegionRect {
            top: rect.top(),
            height: rect.height(),
        },
        viewport_height,
        offsets,
    ))
}

/// Progress of the window scroll through `target`, recomputed on every scroll
/// and resize. Stays at zero until the element is mounted.
pub fn use_scroll_progress(target: NodeRef<html::Div>, offsets: ScrollOffsets) -> Signal<Progress> {
    let config = expect_context::<SiteConfig>();
    let tracker = StoredValue::new(Arc::new(Mutex::new(ScrollProgressTracker::new(
        config.min_progress_delta,
    ))));
    let (progress, set_progress) = signal(Progress::ZERO);

    let recompute = move || {
        let sample = measure(target, offsets);
        let update = tracker.with_value(|t| {
            t.lock()
                .expect("should be able to lock scroll tracker")
                .update(sample)
        });
        if let Some(update) = update {
            set_progress(update.progress);
        }
    };

    // effects only run in the browser, once the target is mounted; a layout
    // flip resizes the scene, so measure again after the new styles land
    let layout = use_layout();
    Effect::new(move |_| {
        layout.track();
        recompute();
    });

    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| recompute(),
        UseEventListenerOptions::default().passive(true),
    );
    let _ = use_event_listener(use_window(), ev::resize, move |_| recompute());

    progress.into()
}
