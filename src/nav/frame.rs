use std::cell::Cell;
use std::rc::Rc;

use crate::error::NavError;

/// The host's once-per-rendered-frame callback primitive.
pub trait FrameSource {
    /// Run `callback` with the frame timestamp (ms) before the next repaint.
    /// On error the callback has been dropped and will never run.
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Result<(), NavError>;
}

/// Coalesces calls so the wrapped callback runs at most once per frame.
///
/// A call made while a frame is already pending is dropped, not queued for
/// the frame after.
#[derive(Clone)]
pub struct Throttle {
    source: Rc<dyn FrameSource>,
    callback: Rc<dyn Fn()>,
    pending: Rc<Cell<bool>>,
}

impl Throttle {
    pub fn new(source: Rc<dyn FrameSource>, callback: impl Fn() + 'static) -> Self {
        Self {
            source,
            callback: Rc::new(callback),
            pending: Rc::new(Cell::new(false)),
        }
    }

    pub fn call(&self) {
        if self.pending.get() {
            return;
        }
        self.pending.set(true);
        let callback = Rc::clone(&self.callback);
        let pending = Rc::clone(&self.pending);
        let scheduled = self.source.request_frame(Box::new(move |_timestamp| {
            callback();
            pending.set(false);
        }));
        if let Err(e) = scheduled {
            log::warn!("Frame request failed: {}", e);
            self.pending.set(false);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}
