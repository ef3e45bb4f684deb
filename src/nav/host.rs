use crate::nav::highlight::{HighlightBox, Rect};

/// Position of a link in the host's nav link list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(pub usize);

/// Everything the coordinator needs from the page: geometry reads, scroll
/// writes, a clock and the presentation writes for the active link.
///
/// Implementations should treat missing elements as no-ops.
#[cfg_attr(test, mockall::automock)]
pub trait LayoutHost {
    fn scroll_y(&self) -> f64;
    fn scroll_to(&self, y: f64);
    fn header_height(&self) -> f64;
    /// Milliseconds on the same clock the frame timestamps use
    fn now(&self) -> f64;
    /// Layout offset of the section each nav link points at, in link order.
    /// Links whose target is missing are left out.
    fn section_tops(&self) -> Vec<(LinkId, f64)>;
    fn nav_rect(&self) -> Option<Rect>;
    fn link_rect(&self, link: LinkId) -> Option<Rect>;
    fn show_highlight(&self, highlight: &HighlightBox);
    /// Toggle the active marker so that only `link` carries it
    fn mark_active(&self, link: LinkId);
}
