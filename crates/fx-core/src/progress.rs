//! Scroll progress math.

/// Normalized progress of a scroll container.
///
/// A container without scrollable range (`scroll_height <= client_height`)
/// reports 0, never NaN. The result is clamped to [0, 1] so overscroll
/// bounce on touch devices does not leak out of range.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f32 {
    ratio(scroll_top, scroll_height - client_height)
}

/// Window scroll progress: `scroll_y / (document_height - viewport_height)`.
pub fn window_scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f32 {
    ratio(scroll_y, document_height - viewport_height)
}

/// Element whose `scrollHeight` is taken as the document height when
/// progress follows the window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageHeight {
    /// `document.body`
    #[default]
    Body,
    /// `document.documentElement`
    Root,
}

impl PageHeight {
    /// Chooses between the measured heights; a missing element reads as 0.
    pub fn pick(self, body: Option<f64>, root: Option<f64>) -> f64 {
        match self {
            PageHeight::Body => body,
            PageHeight::Root => root,
        }
        .unwrap_or(0.0)
    }
}

/// Progress as a CSS percentage (0..=100).
pub fn as_percentage(progress: f32) -> f32 {
    if progress.is_finite() {
        progress.clamp(0.0, 1.0) * 100.0
    } else {
        0.0
    }
}

fn ratio(offset: f64, range: f64) -> f32 {
    if range.is_nan() || range <= 0.0 {
        return 0.0;
    }
    let p = offset / range;
    if p.is_finite() {
        p.clamp(0.0, 1.0) as f32
    } else {
        0.0
    }
}
