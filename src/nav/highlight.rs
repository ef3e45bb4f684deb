#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Size and offset of the sliding indicator, relative to the nav container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightBox {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

impl HighlightBox {
    /// Wrap `link` with `gutter` px on each side horizontally
    pub fn around(link: Rect, nav: Rect, gutter: f64) -> Self {
        Self {
            width: link.width + gutter * 2.0,
            height: link.height,
            x: link.left - nav.left - gutter,
            y: link.top - nav.top,
        }
    }

    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}
