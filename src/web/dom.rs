use wasm_bindgen::JsCast;
use web_sys::{Document, DomRect, Element, HtmlElement, Window};

use crate::nav::highlight::{HighlightBox, Rect};
use crate::nav::host::{LayoutHost, LinkId};

/// Elements the nav enhancements work with, looked up once at page-ready.
pub struct DomHost {
    window: Window,
    header: Option<HtmlElement>,
    nav: Option<HtmlElement>,
    highlight: Option<HtmlElement>,
    links: Vec<HtmlElement>,
    sections: Vec<Option<HtmlElement>>,
}

impl DomHost {
    pub fn query(window: Window, document: &Document) -> Self {
        let header = query_html(document, "[data-header]");
        let nav = document
            .get_element_by_id("site-nav")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let highlight = query_html(document, ".site-nav__highlight");
        let links = nav
            .as_ref()
            .map(|nav| query_all_html(nav, "a"))
            .unwrap_or_default();
        let sections = links.iter().map(|link| hash_target(document, link)).collect();

        Self {
            window,
            header,
            nav,
            highlight,
            links,
            sections,
        }
    }

    pub fn links(&self) -> &[HtmlElement] {
        &self.links
    }

    pub fn header(&self) -> Option<&HtmlElement> {
        self.header.as_ref()
    }

    pub fn nav(&self) -> Option<&HtmlElement> {
        self.nav.as_ref()
    }

    /// Link the markup marks with `is-active`, if any
    pub fn marked_active(&self) -> Option<LinkId> {
        self.links
            .iter()
            .position(|link| link.class_list().contains("is-active"))
            .map(LinkId)
    }
}

impl LayoutHost for DomHost {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&self, y: f64) {
        self.window.scroll_to_with_x_and_y(0.0, y);
    }

    fn header_height(&self) -> f64 {
        self.header
            .as_ref()
            .map(|header| f64::from(header.offset_height()))
            .unwrap_or(0.0)
    }

    fn now(&self) -> f64 {
        self.window
            .performance()
            .map(|perf| perf.now())
            .unwrap_or(0.0)
    }

    fn section_tops(&self) -> Vec<(LinkId, f64)> {
        self.sections
            .iter()
            .enumerate()
            .filter_map(|(index, section)| {
                section
                    .as_ref()
                    .map(|section| (LinkId(index), f64::from(section.offset_top())))
            })
            .collect()
    }

    fn nav_rect(&self) -> Option<Rect> {
        self.nav
            .as_ref()
            .map(|nav| to_rect(&nav.get_bounding_client_rect()))
    }

    fn link_rect(&self, link: LinkId) -> Option<Rect> {
        self.links
            .get(link.0)
            .map(|el| to_rect(&el.get_bounding_client_rect()))
    }

    fn show_highlight(&self, highlight: &HighlightBox) {
        let Some(indicator) = self.highlight.as_ref() else {
            return;
        };
        let style = indicator.style();
        let writes = [
            ("width", format!("{}px", highlight.width)),
            ("height", format!("{}px", highlight.height)),
            ("transform", highlight.transform()),
        ];
        for (property, value) in writes {
            if let Err(e) = style.set_property(property, &value) {
                log::warn!("Failed to set highlight {}: {:?}", property, e);
            }
        }
        if let Err(e) = indicator.class_list().add_1("is-visible") {
            log::warn!("Failed to show highlight: {:?}", e);
        }
    }

    fn mark_active(&self, link: LinkId) {
        for (index, el) in self.links.iter().enumerate() {
            if let Err(e) = el.class_list().toggle_with_force("is-active", index == link.0) {
                log::warn!("Failed to toggle active link: {:?}", e);
            }
        }
    }
}

pub fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_all_html(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// The element an `href="#id"` link points at, if it exists
pub fn hash_target(document: &Document, link: &Element) -> Option<HtmlElement> {
    let href = link.get_attribute("href")?;
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Top of `element` relative to the document rather than the viewport
pub fn document_top(window: &Window, element: &Element) -> f64 {
    element.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0)
}

fn to_rect(rect: &DomRect) -> Rect {
    Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}
