use crate::nav::host::{LayoutHost, LinkId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigableSection {
    pub link: LinkId,
    pub top: f64,
}

/// Cached section offsets, ascending by `top`.
///
/// Offsets come from live layout, so the table goes stale on any reflow and
/// has to be rebuilt with `recache`.
#[derive(Debug, Clone, Default)]
pub struct OffsetTable {
    sections: Vec<NavigableSection>,
}

impl OffsetTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sections(mut sections: Vec<NavigableSection>) -> Self {
        sections.sort_by(|a, b| a.top.total_cmp(&b.top));
        Self { sections }
    }

    pub fn recache<H: LayoutHost + ?Sized>(&mut self, host: &H) {
        let sections = host
            .section_tops()
            .into_iter()
            .map(|(link, top)| NavigableSection { link, top })
            .collect();
        *self = Self::from_sections(sections);
    }

    pub fn sections(&self) -> &[NavigableSection] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }
}
