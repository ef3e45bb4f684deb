#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use landing_nav::nav::frame::FrameSource;
use landing_nav::nav::highlight::{HighlightBox, Rect};
use landing_nav::{LayoutHost, LinkId, NavConfig, NavCoordinator, NavError};

/// In-memory page: a scroll position, a clock, section offsets and a record
/// of everything the coordinator wrote.
pub struct FakePage {
    pub scroll_y: Cell<f64>,
    pub header_height: f64,
    pub clock: Cell<f64>,
    pub sections: RefCell<Vec<(LinkId, f64)>>,
    pub link_rects: Vec<Rect>,
    pub scroll_writes: RefCell<Vec<f64>>,
    pub recaches: Cell<usize>,
    pub marked: RefCell<Vec<LinkId>>,
    pub highlights: RefCell<Vec<HighlightBox>>,
}

impl FakePage {
    /// Three sections at 0, 1000 and 2000 behind a 60px header
    pub fn three_sections() -> Self {
        Self {
            scroll_y: Cell::new(0.0),
            header_height: 60.0,
            clock: Cell::new(0.0),
            sections: RefCell::new(vec![
                (LinkId(0), 0.0),
                (LinkId(1), 1000.0),
                (LinkId(2), 2000.0),
            ]),
            link_rects: (0..3)
                .map(|i| Rect {
                    left: 100.0 + 90.0 * f64::from(i),
                    top: 12.0,
                    width: 70.0,
                    height: 30.0,
                })
                .collect(),
            scroll_writes: RefCell::new(Vec::new()),
            recaches: Cell::new(0),
            marked: RefCell::new(Vec::new()),
            highlights: RefCell::new(Vec::new()),
        }
    }

    pub fn writes(&self) -> Vec<f64> {
        self.scroll_writes.borrow().clone()
    }
}

impl LayoutHost for FakePage {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn scroll_to(&self, y: f64) {
        self.scroll_y.set(y);
        self.scroll_writes.borrow_mut().push(y);
    }

    fn header_height(&self) -> f64 {
        self.header_height
    }

    fn now(&self) -> f64 {
        self.clock.get()
    }

    fn section_tops(&self) -> Vec<(LinkId, f64)> {
        self.recaches.set(self.recaches.get() + 1);
        self.sections.borrow().clone()
    }

    fn nav_rect(&self) -> Option<Rect> {
        Some(Rect { left: 80.0, top: 0.0, width: 400.0, height: 54.0 })
    }

    fn link_rect(&self, link: LinkId) -> Option<Rect> {
        self.link_rects.get(link.0).copied()
    }

    fn show_highlight(&self, highlight: &HighlightBox) {
        self.highlights.borrow_mut().push(*highlight);
    }

    fn mark_active(&self, link: LinkId) {
        self.marked.borrow_mut().push(link);
    }
}

pub fn coordinator() -> NavCoordinator<FakePage> {
    NavCoordinator::new(FakePage::three_sections(), NavConfig::default())
}

/// Frame callbacks held until the test fires them.
#[derive(Default)]
pub struct QueuedFrames {
    queue: RefCell<Vec<Box<dyn FnOnce(f64)>>>,
}

impl QueuedFrames {
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn run(&self, timestamp: f64) {
        let due: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        for callback in due {
            callback(timestamp);
        }
    }
}

impl FrameSource for QueuedFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Result<(), NavError> {
        self.queue.borrow_mut().push(callback);
        Ok(())
    }
}

/// A frame source whose requests always fail, like a page without
/// `requestAnimationFrame`.
#[derive(Default)]
pub struct RefusingFrames {
    pub attempts: Cell<usize>,
}

impl FrameSource for RefusingFrames {
    fn request_frame(&self, _callback: Box<dyn FnOnce(f64)>) -> Result<(), NavError> {
        self.attempts.set(self.attempts.get() + 1);
        Err(NavError::Js("requestAnimationFrame unavailable".to_string()))
    }
}
