pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Which arrangement a section renders in. Classified from the viewport width
/// on every resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Desktop,
    Mobile,
}

impl Layout {
    pub fn from_width(width: f64) -> Self {
        Self::from_width_with_breakpoint(width, MOBILE_BREAKPOINT_PX)
    }

    /// Only `width < breakpoint` is mobile; a width exactly on the breakpoint is desktop.
    /// Non-finite widths (no window during ssr) are desktop.
    pub fn from_width_with_breakpoint(width: f64, breakpoint: f64) -> Self {
        if width.is_finite() && width < breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_classification() {
        assert_eq!(Layout::from_width(500.0), Layout::Mobile);
        assert_eq!(Layout::from_width(1200.0), Layout::Desktop);
        assert_eq!(Layout::from_width(767.9), Layout::Mobile);
    }

    #[test]
    fn test_breakpoint_is_desktop() {
        assert_eq!(Layout::from_width(768.0), Layout::Desktop);
        assert_eq!(
            Layout::from_width_with_breakpoint(1024.0, 1024.0),
            Layout::Desktop
        );
        assert!(Layout::from_width_with_breakpoint(1023.0, 1024.0).is_mobile());
    }

    #[test]
    fn test_missing_window_is_desktop() {
        assert_eq!(Layout::from_width(f64::INFINITY), Layout::Desktop);
        assert_eq!(Layout::from_width(f64::NAN), Layout::Desktop);
    }
}
