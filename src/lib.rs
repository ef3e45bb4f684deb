pub mod config;
pub mod error;
pub mod nav {
    pub mod animator;
    pub mod coordinator;
    pub mod frame;
    pub mod header;
    pub mod highlight;
    pub mod host;
    pub mod lock;
    pub mod offsets;
    pub mod resolver;
}
#[cfg(target_arch = "wasm32")]
mod web {
    pub mod boot;
    pub mod dom;
    pub mod frames;
}

pub use config::NavConfig;
pub use error::NavError;
pub use nav::coordinator::{NavCoordinator, ScrollStart};
pub use nav::animator::FrameOutcome;
pub use nav::host::{LayoutHost, LinkId};
