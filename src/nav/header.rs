use crate::config::NavConfig;

/// What the sticky header should show for the current scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderState {
    /// Value for the `--header-slide` custom property, in px
    pub slide_px: f64,
    pub condensed: bool,
}

impl HeaderState {
    /// On narrow viewports the header slides away with the page up to a limit
    /// taken from the nav's offset (or a share of the viewport width). Wide
    /// viewports keep it in place and only condense it after a short scroll.
    pub fn compute(
        scroll_y: f64,
        viewport_width: f64,
        narrow: bool,
        nav_offset_top: Option<f64>,
        config: &NavConfig,
    ) -> Self {
        if !narrow {
            return Self {
                slide_px: 0.0,
                condensed: scroll_y > config.condense_after_px,
            };
        }
        let limit = slide_limit(viewport_width, nav_offset_top, config);
        Self {
            slide_px: scroll_y.max(0.0).min(limit),
            condensed: false,
        }
    }

    pub fn slide_value(&self) -> String {
        format!("{}px", self.slide_px)
    }
}

fn slide_limit(viewport_width: f64, nav_offset_top: Option<f64>, config: &NavConfig) -> f64 {
    let preferred = match nav_offset_top {
        Some(offset) if offset > 0.0 => offset,
        _ => viewport_width.max(0.0) * config.slide_fallback_factor,
    };
    preferred.clamp(config.slide_min_px, config.slide_max_px)
}
