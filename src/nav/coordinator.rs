use crate::config::NavConfig;
use crate::nav::animator::{AnimationRun, FrameOutcome, RunId, SmoothScroller};
use crate::nav::highlight::HighlightBox;
use crate::nav::host::{LayoutHost, LinkId};
use crate::nav::lock::ScrollLock;
use crate::nav::offsets::OffsetTable;
use crate::nav::resolver;

/// How a `scroll_to` request was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStart {
    /// Distance was negligible; the page is already at the target
    Jumped,
    /// Drive `advance` with this id once per frame until it stops returning `Continue`
    Animating(RunId),
}

/// Keeps the highlighted nav link in step with the scroll position, and
/// keeps it still while the page scrolls itself.
pub struct NavCoordinator<H: LayoutHost> {
    host: H,
    config: NavConfig,
    lock: ScrollLock,
    scroller: SmoothScroller,
    offsets: OffsetTable,
    active: Option<LinkId>,
}

impl<H: LayoutHost> NavCoordinator<H> {
    pub fn new(host: H, config: NavConfig) -> Self {
        Self {
            host,
            config,
            lock: ScrollLock::new(),
            scroller: SmoothScroller::new(),
            offsets: OffsetTable::new(),
            active: None,
        }
    }

    /// Page-ready setup. `marked_active` is the link the markup already flags
    /// as active, if any; the indicator starts on it (or on the first link).
    pub fn start(&mut self, marked_active: Option<LinkId>) {
        self.active = marked_active;
        self.move_highlight(marked_active.unwrap_or(LinkId(0)));
        self.recache();
        self.sync_from_scroll();
    }

    pub fn recache(&mut self) {
        self.offsets.recache(&self.host);
    }

    /// Scroll-spy step. Does nothing while a programmatic scroll holds the lock.
    pub fn sync_from_scroll(&mut self) {
        if self.lock.is_engaged() || self.offsets.is_empty() {
            return;
        }
        let resolved = resolver::resolve(
            &self.offsets,
            self.host.scroll_y(),
            self.host.header_height(),
            self.config.lead_in_px,
        );
        if let Some(link) = resolved {
            if self.active != Some(link) {
                self.set_active(link);
            }
        }
    }

    pub fn on_resize(&mut self) {
        if let Some(link) = self.active {
            self.move_highlight(link);
        }
        self.recache();
        self.sync_from_scroll();
    }

    /// A nav link was clicked; mark it right away, then scroll to its section
    /// when one exists.
    pub fn select(&mut self, link: LinkId, target_top: Option<f64>) -> Option<ScrollStart> {
        self.set_active(link);
        target_top.map(|top| self.scroll_to(top))
    }

    pub fn set_active(&mut self, link: LinkId) {
        self.active = Some(link);
        self.host.mark_active(link);
        self.move_highlight(link);
    }

    pub fn move_highlight(&self, link: LinkId) {
        let (Some(nav), Some(rect)) = (self.host.nav_rect(), self.host.link_rect(link)) else {
            return;
        };
        let highlight = HighlightBox::around(rect, nav, self.config.highlight_gutter_px);
        self.host.show_highlight(&highlight);
    }

    /// Start scrolling so that an element whose document offset is
    /// `element_top` lands just below the header.
    pub fn scroll_to(&mut self, element_top: f64) -> ScrollStart {
        let id = self.scroller.issue();
        let token = self.lock.acquire();
        let start = self.host.scroll_y();
        let end = element_top - self.host.header_height() - self.config.target_gap_px;

        if (end - start).abs() < self.config.jump_threshold_px {
            self.host.scroll_to(end);
            self.lock.release(token);
            self.recache();
            return ScrollStart::Jumped;
        }

        self.scroller.begin(AnimationRun {
            id,
            start_time: self.host.now(),
            start,
            end,
            token,
        });
        ScrollStart::Animating(id)
    }

    /// One animation frame for run `id` at timestamp `now`.
    pub fn advance(&mut self, id: RunId, now: f64) -> FrameOutcome {
        let Some(run) = self.scroller.current(id) else {
            return FrameOutcome::Superseded;
        };
        let (position, progress) = run.sample(now, self.config.scroll_duration_ms);
        self.host.scroll_to(position);
        if progress < 1.0 {
            return FrameOutcome::Continue;
        }

        if let Some(run) = self.scroller.finish(id) {
            self.lock.release(run.token);
        }
        self.recache();
        FrameOutcome::Completed
    }

    /// Land run `id` on its target now. For when no further frame can be
    /// scheduled; the lock is still released and offsets recached.
    pub fn finish_now(&mut self, id: RunId) -> FrameOutcome {
        let Some(run) = self.scroller.current(id) else {
            return FrameOutcome::Superseded;
        };
        let end_time = run.start_time + self.config.scroll_duration_ms;
        self.advance(id, end_time)
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_engaged()
    }

    pub fn is_animating(&self) -> bool {
        self.scroller.is_animating()
    }

    pub fn active(&self) -> Option<LinkId> {
        self.active
    }

    pub fn offsets(&self) -> &OffsetTable {
        &self.offsets
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::highlight::Rect;
    use crate::nav::host::MockLayoutHost;
    use mockall::predicate::eq;

    fn sections() -> Vec<(LinkId, f64)> {
        vec![(LinkId(0), 0.0), (LinkId(1), 900.0), (LinkId(2), 1800.0)]
    }

    #[test]
    fn scroll_spy_marks_resolved_link_once() {
        let mut host = MockLayoutHost::new();
        host.expect_section_tops().times(1).returning(sections);
        host.expect_scroll_y().return_const(1000.0);
        host.expect_header_height().return_const(64.0);
        host.expect_nav_rect().return_const(None);
        host.expect_link_rect().return_const(None);
        host.expect_mark_active().with(eq(LinkId(1))).times(1).return_const(());

        let mut nav = NavCoordinator::new(host, NavConfig::default());
        nav.recache();
        nav.sync_from_scroll();
        nav.sync_from_scroll();
        assert_eq!(nav.active(), Some(LinkId(1)));
    }

    #[test]
    fn short_distance_jumps_without_animating() {
        let mut host = MockLayoutHost::new();
        host.expect_scroll_y().return_const(500.0);
        host.expect_header_height().return_const(60.0);
        host.expect_scroll_to().with(eq(502.0)).times(1).return_const(());
        host.expect_section_tops().times(1).returning(sections);
        host.expect_now().never();

        let mut nav = NavCoordinator::new(host, NavConfig::default());
        // 574 - 60 - 12 == 502
        assert_eq!(nav.scroll_to(574.0), ScrollStart::Jumped);
        assert!(!nav.is_locked());
        assert!(!nav.is_animating());
    }

    #[test]
    fn highlight_follows_selected_link() {
        let mut host = MockLayoutHost::new();
        host.expect_mark_active().with(eq(LinkId(2))).return_const(());
        host.expect_nav_rect()
            .return_const(Some(Rect { left: 10.0, top: 0.0, width: 500.0, height: 40.0 }));
        host.expect_link_rect()
            .with(eq(LinkId(2)))
            .return_const(Some(Rect { left: 210.0, top: 4.0, width: 50.0, height: 32.0 }));
        host.expect_show_highlight()
            .withf(|h| *h == HighlightBox { width: 66.0, height: 32.0, x: 192.0, y: 4.0 })
            .times(1)
            .return_const(());

        let mut nav = NavCoordinator::new(host, NavConfig::default());
        assert_eq!(nav.select(LinkId(2), None), None);
        assert_eq!(nav.active(), Some(LinkId(2)));
    }
}
