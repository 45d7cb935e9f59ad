use crate::layout::Layout;

/// Normalized position inside a tracked region. Always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f64);

impl Progress {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_boundary(self) -> bool {
        self == Self::ZERO || self == Self::ONE
    }

    /// CSS length for a bar that fills with progress, e.g. `"42.50%"`.
    pub fn as_css_percent(self) -> String {
        format!("{:.2}%", self.0 * 100.0)
    }
}

/// Edge of an element or of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::End => 1.0,
        }
    }
}

/// The moment an edge of the tracked element meets an edge of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    pub target: Edge,
    pub viewport: Edge,
}

/// Where progress is 0 and where it is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOffsets {
    pub from: Intersection,
    pub to: Intersection,
}

impl ScrollOffsets {
    /// Element top at viewport top → element bottom at viewport bottom.
    /// Used for sticky scenes taller than the screen.
    pub const PINNED: Self = Self {
        from: Intersection {
            target: Edge::Start,
            viewport: Edge::Start,
        },
        to: Intersection {
            target: Edge::End,
            viewport: Edge::End,
        },
    };

    /// Element top entering at the bottom → element bottom leaving at the top.
    pub const CROSSING: Self = Self {
        from: Intersection {
            target: Edge::Start,
            viewport: Edge::End,
        },
        to: Intersection {
            target: Edge::End,
            viewport: Edge::Start,
        },
    };
}

/// Bounding box of a tracked element relative to the viewport, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionRect {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub offset_px: f64,
    pub container_start: f64,
    pub container_end: f64,
}

impl ScrollSample {
    pub fn from_bounding(
        scroll_y: f64,
        rect: RegionRect,
        viewport_height: f64,
        offsets: ScrollOffsets,
    ) -> Self {
        let document_top = scroll_y + rect.top;
        let scroll_at = |at: Intersection| {
            document_top + at.target.fraction() * rect.height
                - at.viewport.fraction() * viewport_height
        };
        Self {
            offset_px: scroll_y,
            container_start: scroll_at(offsets.from),
            container_end: scroll_at(offsets.to),
        }
    }

    pub fn progress(&self) -> Progress {
        let span = self.container_end - self.container_start;
        if span <= 0.0 {
            // degenerate region: jump straight from 0 to 1
            return if self.offset_px < self.container_start {
                Progress::ZERO
            } else {
                Progress::ONE
            };
        }
        Progress::new((self.offset_px - self.container_start) / span)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressUpdate {
    pub progress: Progress,
    /// Raw scroll movement since the previous emitted update.
    pub delta_px: f64,
}

/// Turns successive samples into progress updates for one tracked region.
#[derive(Debug, Clone)]
pub struct ScrollProgressTracker {
    min_delta: f64,
    last: Option<(Progress, f64)>,
}

impl ScrollProgressTracker {
    pub fn new(min_delta: f64) -> Self {
        Self {
            min_delta: min_delta.max(0.0),
            last: None,
        }
    }

    pub fn progress(&self) -> Progress {
        self.last.map(|(p, _)| p).unwrap_or_default()
    }

    /// Feed a sample; `None` means the region is not mounted yet.
    ///
    /// Returns an update when progress moved by at least the minimum delta, or
    /// when it landed exactly on 0 or 1 so the ends are never skipped.
    pub fn update(&mut self, sample: Option<ScrollSample>) -> Option<ProgressUpdate> {
        let (progress, offset) = match sample {
            Some(s) => (s.progress(), s.offset_px),
            None => (Progress::ZERO, self.last.map(|(_, o)| o).unwrap_or(0.0)),
        };
        let Some((last_progress, last_offset)) = self.last else {
            self.last = Some((progress, offset));
            return Some(ProgressUpdate {
                progress,
                delta_px: 0.0,
            });
        };
        let moved = (progress.value() - last_progress.value()).abs();
        let reached_end = progress != last_progress && progress.is_boundary();
        if moved < self.min_delta && !reached_end {
            return None;
        }
        self.last = Some((progress, offset));
        Some(ProgressUpdate {
            progress,
            delta_px: offset - last_offset,
        })
    }
}

/// Piecewise-linear map from `input` stops to `output` stops.
///
/// `input` must be non-decreasing. Values outside the input domain are clamped
/// to the first or last output.
pub fn interpolate(x: f64, input: &[f64], output: &[f64]) -> f64 {
    let len = input.len().min(output.len());
    if len == 0 {
        return 0.0;
    }
    if x <= input[0] || len == 1 {
        return output[0];
    }
    if x >= input[len - 1] {
        return output[len - 1];
    }
    for i in 0..len - 1 {
        let (a, b) = (input[i], input[i + 1]);
        if x <= b {
            if b <= a {
                return output[i + 1];
            }
            let t = (x - a) / (b - a);
            return output[i] + (output[i + 1] - output[i]) * t;
        }
    }
    output[len - 1]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes<const N: usize> {
    input: [f64; N],
    output: [f64; N],
}

impl<const N: usize> Keyframes<N> {
    pub const fn new(input: [f64; N], output: [f64; N]) -> Self {
        Self { input, output }
    }

    pub fn at(&self, progress: Progress) -> f64 {
        interpolate(progress.value(), &self.input, &self.output)
    }
}

/// A contiguous slice of the overall progress owned by one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
}

/// Equal-width breakpoints, one per item: `(i + 1) / n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds(Vec<f64>);

impl Thresholds {
    pub fn new(count: usize) -> Self {
        Self(
            (0..count)
                .map(|i| (i + 1) as f64 / count as f64)
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn segment(&self, index: usize) -> Option<Segment> {
        let end = *self.0.get(index)?;
        let start = if index == 0 { 0.0 } else { self.0[index - 1] };
        Some(Segment { start, end })
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.len()).filter_map(|i| self.segment(i))
    }
}

/// Presentation parameters for one timeline item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMotion {
    pub scale: f64,
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

const DESKTOP_RISE_PX: f64 = 30.0;
const MOBILE_SLIDE_PX: f64 = -24.0;

impl ItemMotion {
    /// Desktop items alternate above/below the line and slide vertically
    /// (even from +30px, odd from -30px); mobile items slide in from the left.
    pub fn at(progress: Progress, segment: Segment, index: usize, layout: Layout) -> Self {
        let domain = [segment.start, segment.end];
        let lerp = |from: f64, to: f64| interpolate(progress.value(), &domain, &[from, to]);
        let (translate_x, translate_y) = match layout {
            Layout::Desktop => {
                let from = if index % 2 == 0 {
                    DESKTOP_RISE_PX
                } else {
                    -DESKTOP_RISE_PX
                };
                (0.0, lerp(from, 0.0))
            }
            Layout::Mobile => (lerp(MOBILE_SLIDE_PX, 0.0), 0.0),
        };
        Self {
            scale: lerp(0.0, 1.0),
            opacity: lerp(0.0, 1.0),
            translate_x,
            translate_y,
        }
    }

    pub fn marker_style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: scale({:.3});",
            self.opacity, self.scale
        )
    }

    pub fn card_style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translate({:.2}px, {:.2}px);",
            self.opacity, self.translate_x, self.translate_y
        )
    }
}

const PARALLAX_SCALE: Keyframes<2> = Keyframes::new([0.0, 1.0], [1.06, 0.98]);
const PARALLAX_Y: Keyframes<2> = Keyframes::new([0.0, 1.0], [0.0, -18.0]);
const PARALLAX_OPACITY: Keyframes<3> = Keyframes::new([0.0, 0.5, 1.0], [0.8, 1.0, 0.9]);

/// Slow drift applied to an image while its section crosses the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub scale: f64,
    pub translate_y: f64,
    pub opacity: f64,
}

impl Parallax {
    pub fn at(progress: Progress) -> Self {
        Self {
            scale: PARALLAX_SCALE.at(progress),
            translate_y: PARALLAX_Y.at(progress),
            opacity: PARALLAX_OPACITY.at(progress),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px) scale({:.4});",
            self.opacity, self.translate_y, self.scale
        )
    }
}
