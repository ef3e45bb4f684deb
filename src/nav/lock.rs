/// Proof of a lock acquisition. Releasing with a token that has since been
/// superseded does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockToken(u64);

/// Suppresses scroll-spy while the page is scrolling itself.
#[derive(Debug, Default)]
pub struct ScrollLock {
    engaged: bool,
    generation: u64,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&mut self) -> LockToken {
        self.generation += 1;
        self.engaged = true;
        log::debug!("scroll lock acquired (generation {})", self.generation);
        LockToken(self.generation)
    }

    /// Returns whether the lock was actually released
    pub fn release(&mut self, token: LockToken) -> bool {
        if token.0 != self.generation {
            log::debug!(
                "ignoring stale scroll lock release (token {}, current {})",
                token.0,
                self.generation
            );
            return false;
        }
        self.engaged = false;
        true
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
