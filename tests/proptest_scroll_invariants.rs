//! Property-based checks for the scroll-driven pieces of the site.
//!
//! 1. **Bounded progress**: any sample maps to a progress inside `[0, 1]`.
//! 2. **Flat outside the region**: before the region progress is 0, after it 1.
//! 3. **Monotonic and continuous**: scrolling further never lowers progress,
//!    and progress moves no faster than the scroll distance over the span.
//! 4. **Ends are never skipped**: the tracker always reports landing on 1.
//! 5. **Thresholds partition the timeline**: increasing, contiguous, ending at 1.
//! 6. **Navbar**: pinned means visible, and jitter never toggles the bar.

use portfolio_site::{
    layout::Layout,
    motion::{ItemMotion, Progress, ScrollProgressTracker, ScrollSample, Thresholds},
    visibility::VisibilityPolicy,
};
use proptest::prelude::*;

fn sample(offset_px: f64, container_start: f64, container_end: f64) -> ScrollSample {
    ScrollSample {
        offset_px,
        container_start,
        container_end,
    }
}

proptest! {
    #[test]
    fn progress_is_bounded(
        offset in -1.0e6f64..1.0e6,
        start in -1.0e6f64..1.0e6,
        end in -1.0e6f64..1.0e6,
    ) {
        let p = sample(offset, start, end).progress().value();
        prop_assert!((0.0..=1.0).contains(&p), "progress {p} out of range");
    }

    #[test]
    fn progress_is_flat_outside_region(
        start in 0.0f64..50_000.0,
        span in 1.0f64..20_000.0,
        before in 0.0f64..10_000.0,
        after in 0.0f64..10_000.0,
    ) {
        let end = start + span;
        prop_assert_eq!(sample(start - before, start, end).progress(), Progress::ZERO);
        prop_assert_eq!(sample(end + after, start, end).progress(), Progress::ONE);
    }

    #[test]
    fn progress_is_monotonic_in_scroll(
        start in 0.0f64..50_000.0,
        span in 0.0f64..20_000.0,
        a in 0.0f64..80_000.0,
        b in 0.0f64..80_000.0,
    ) {
        let end = start + span;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let p_lo = sample(lo, start, end).progress().value();
        let p_hi = sample(hi, start, end).progress().value();
        prop_assert!(p_lo <= p_hi, "{lo} -> {p_lo}, {hi} -> {p_hi}");
    }

    #[test]
    fn progress_is_continuous_in_scroll(
        start in 0.0f64..50_000.0,
        span in 1.0f64..20_000.0,
        a in 0.0f64..80_000.0,
        b in 0.0f64..80_000.0,
    ) {
        let end = start + span;
        let p_a = sample(a, start, end).progress().value();
        let p_b = sample(b, start, end).progress().value();
        let bound = (a - b).abs() / (end - start) + 1e-9;
        prop_assert!((p_a - p_b).abs() <= bound, "{a} -> {p_a}, {b} -> {p_b}");
    }

    #[test]
    fn tracker_never_skips_the_end(
        offsets in prop::collection::vec(0.0f64..1_000.0, 0..40),
        min_delta in 0.0f64..0.5,
    ) {
        let (start, end) = (200.0, 800.0);
        let mut tracker = ScrollProgressTracker::new(min_delta);
        for offset in offsets {
            if let Some(update) = tracker.update(Some(sample(offset, start, end))) {
                let p = update.progress.value();
                prop_assert!((0.0..=1.0).contains(&p));
            }
        }
        tracker.update(Some(sample(end, start, end)));
        prop_assert_eq!(tracker.progress(), Progress::ONE);
        tracker.update(Some(sample(0.0, start, end)));
        prop_assert_eq!(tracker.progress(), Progress::ZERO);
    }

    #[test]
    fn thresholds_partition_the_timeline(count in 1usize..64) {
        let thresholds = Thresholds::new(count);
        prop_assert_eq!(thresholds.len(), count);

        let values = thresholds.as_slice();
        prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(values[count - 1], 1.0);

        let segments: Vec<_> = thresholds.segments().collect();
        prop_assert_eq!(segments[0].start, 0.0);
        for pair in segments.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn item_motion_is_settled_past_its_segment(
        count in 1usize..12,
        pick in 0usize..12,
        p in 0.0f64..=1.0,
        mobile in any::<bool>(),
    ) {
        let index = pick % count;
        let segment = Thresholds::new(count).segment(index).unwrap();
        let layout = if mobile { Layout::Mobile } else { Layout::Desktop };
        let motion = ItemMotion::at(Progress::new(p), segment, index, layout);

        prop_assert!((0.0..=1.0).contains(&motion.opacity));
        if p >= segment.end {
            prop_assert_eq!(motion.opacity, 1.0);
            prop_assert_eq!(motion.translate_x, 0.0);
            prop_assert_eq!(motion.translate_y, 0.0);
        }
        if p <= segment.start {
            prop_assert_eq!(motion.opacity, 0.0);
        }
    }

    #[test]
    fn pinned_navbar_is_always_visible(
        scrolls in prop::collection::vec(0.0f64..20_000.0, 1..50),
    ) {
        let mut policy = VisibilityPolicy::new(0.0);
        policy.on_anchor_enter();
        for y in scrolls {
            let state = policy.on_scroll(y);
            prop_assert!(state.visible);
            prop_assert_eq!(state.last_scroll_y, y);
        }
    }

    #[test]
    fn jitter_never_toggles_navbar(
        origin in 0u32..10_000,
        hide_first in any::<bool>(),
        jitter in -4i32..=4,
    ) {
        let origin = f64::from(origin);
        let mut policy = VisibilityPolicy::new(origin);
        if hide_first {
            policy.on_scroll(origin + 100.0);
        }
        let before = policy.snapshot();
        let after = policy.on_scroll(before.last_scroll_y + f64::from(jitter));
        prop_assert_eq!(after, before);
    }
}
