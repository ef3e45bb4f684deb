use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Event, EventTarget, HtmlElement, KeyboardEvent, Window};

use crate::config::NavConfig;
use crate::error::NavError;
use crate::nav::animator::{FrameOutcome, RunId};
use crate::nav::coordinator::{NavCoordinator, ScrollStart};
use crate::nav::frame::{FrameSource, Throttle};
use crate::nav::header::HeaderState;
use crate::nav::host::LinkId;
use crate::web::dom::{self, DomHost};
use crate::web::frames::RafFrames;

type SharedNav = Rc<RefCell<NavCoordinator<DomHost>>>;

#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    if let Err(e) = boot() {
        log::error!("Nav enhancements disabled: {}", e);
    }
}

fn boot() -> Result<(), NavError> {
    let window = web_sys::window().ok_or(NavError::MissingWindow)?;
    let document = window.document().ok_or(NavError::MissingDocument)?;
    if let Some(root) = document.document_element() {
        root.class_list().add_1("js")?;
    }

    if document.ready_state() != "loading" {
        return install(window, document);
    }
    let ready_target = document.clone();
    let on_ready = Closure::once_into_js(move || {
        if let Err(e) = install(window, document) {
            log::error!("Nav enhancements disabled: {}", e);
        }
    });
    ready_target.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}

fn install(window: Window, document: Document) -> Result<(), NavError> {
    let config = NavConfig::from_json_or_default(config_script(&document).as_deref());
    let frames: Rc<dyn FrameSource> = Rc::new(RafFrames::new(window.clone()));
    let host = DomHost::query(window.clone(), &document);

    let header = host.header().cloned();
    let site_nav = host.nav().cloned();
    let links = host.links().to_vec();
    let marked_active = host.marked_active();

    let nav: SharedNav = Rc::new(RefCell::new(NavCoordinator::new(host, config.clone())));

    install_header_slide(&window, header.clone(), site_nav.clone(), &config, &frames)?;
    if let (Some(header), Some(site_nav)) = (header, site_nav) {
        if let Some(toggle) = dom::query_html(&document, "[data-nav-toggle]") {
            install_menu(&window, header, toggle, &site_nav)?;
        }
    }

    if !links.is_empty() {
        nav.borrow_mut().start(marked_active);
        install_scroll_spy(&window, &nav, &frames)?;
        install_link_keys(&links)?;
    }
    install_anchor_scrolling(&document, &links, &nav, &frames)?;
    write_current_year(&document);

    log::info!("Nav enhancements ready ({} links)", links.len());
    Ok(())
}

fn config_script(document: &Document) -> Option<String> {
    document
        .query_selector("script[data-nav-config]")
        .ok()
        .flatten()
        .and_then(|script| script.text_content())
}

/// Register a listener that lives as long as the page
fn listen(
    target: &EventTarget,
    kind: &str,
    passive: bool,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), NavError> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    callback.forget();
    Ok(())
}

fn install_scroll_spy(window: &Window, nav: &SharedNav, frames: &Rc<dyn FrameSource>) -> Result<(), NavError> {
    let spy = Throttle::new(Rc::clone(frames), {
        let nav = Rc::clone(nav);
        move || nav.borrow_mut().sync_from_scroll()
    });
    listen(window, "scroll", true, move |_| spy.call())?;

    let nav = Rc::clone(nav);
    listen(window, "resize", false, move |_| nav.borrow_mut().on_resize())
}

fn install_link_keys(links: &[HtmlElement]) -> Result<(), NavError> {
    for link in links {
        let target = link.clone();
        listen(link, "keydown", false, move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if key_event.key() == " " {
                event.prevent_default();
                target.click();
            }
        })?;
    }
    Ok(())
}

/// Smooth-scroll every in-page anchor whose target exists. Nav links are
/// also marked active before the scroll starts.
fn install_anchor_scrolling(
    document: &Document,
    links: &[HtmlElement],
    nav: &SharedNav,
    frames: &Rc<dyn FrameSource>,
) -> Result<(), NavError> {
    for (index, link) in links.iter().enumerate() {
        if dom::hash_target(document, link).is_some() {
            continue;
        }
        let nav = Rc::clone(nav);
        listen(link, "click", false, move |_| nav.borrow_mut().set_active(LinkId(index)))?;
    }

    let Some(root) = document.document_element() else {
        return Ok(());
    };
    for anchor in dom::query_all_html(&root, r##"a[href^="#"]"##) {
        let nav_link = links.iter().position(|link| *link == anchor).map(LinkId);
        let nav = Rc::clone(nav);
        let frames = Rc::clone(frames);
        let document = document.clone();
        let target_anchor = anchor.clone();
        listen(&anchor, "click", false, move |event| {
            let Some(target) = dom::hash_target(&document, &target_anchor) else {
                return;
            };
            event.prevent_default();
            let Some(window) = web_sys::window() else {
                return;
            };
            let top = dom::document_top(&window, &target);
            let started = match nav_link {
                Some(link) => nav.borrow_mut().select(link, Some(top)),
                None => Some(nav.borrow_mut().scroll_to(top)),
            };
            if let Some(ScrollStart::Animating(id)) = started {
                schedule_step(Rc::clone(&nav), Rc::clone(&frames), id);
            }
        })?;
    }
    Ok(())
}

fn schedule_step(nav: SharedNav, frames: Rc<dyn FrameSource>, id: RunId) {
    let next = Rc::clone(&frames);
    let stepping = Rc::clone(&nav);
    let scheduled = frames.request_frame(Box::new(move |now| {
        let outcome = stepping.borrow_mut().advance(id, now);
        if outcome == FrameOutcome::Continue {
            schedule_step(stepping, next, id);
        }
    }));
    if let Err(e) = scheduled {
        log::warn!("Frame request failed, finishing scroll at its target: {}", e);
        nav.borrow_mut().finish_now(id);
    }
}

fn install_header_slide(
    window: &Window,
    header: Option<HtmlElement>,
    site_nav: Option<HtmlElement>,
    config: &NavConfig,
    frames: &Rc<dyn FrameSource>,
) -> Result<(), NavError> {
    let Some(header) = header else {
        return Ok(());
    };
    let apply = {
        let window = window.clone();
        let config = config.clone();
        move || apply_header_state(&window, &header, site_nav.as_ref(), &config)
    };
    apply();
    let throttle = Throttle::new(Rc::clone(frames), apply);
    let on_resize = throttle.clone();
    listen(window, "scroll", true, move |_| throttle.call())?;
    listen(window, "resize", false, move |_| on_resize.call())
}

fn apply_header_state(window: &Window, header: &HtmlElement, site_nav: Option<&HtmlElement>, config: &NavConfig) {
    let query = format!("(max-width: {}px)", config.slide_breakpoint_px);
    let narrow = window
        .match_media(&query)
        .ok()
        .flatten()
        .map(|list| list.matches())
        .unwrap_or(false);
    let viewport_width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let state = HeaderState::compute(
        window.scroll_y().unwrap_or(0.0),
        viewport_width,
        narrow,
        site_nav.map(|nav| f64::from(nav.offset_top())),
        config,
    );

    if let Err(e) = header.style().set_property("--header-slide", &state.slide_value()) {
        log::warn!("Failed to set header slide: {:?}", e);
    }
    if let Err(e) = header.class_list().toggle_with_force("is-condensed", state.condensed) {
        log::warn!("Failed to toggle condensed header: {:?}", e);
    }
}

fn install_menu(window: &Window, header: HtmlElement, toggle: HtmlElement, site_nav: &HtmlElement) -> Result<(), NavError> {
    let close = {
        let header = header.clone();
        let toggle = toggle.clone();
        move || {
            if let Err(e) = header.class_list().remove_1("is-open") {
                log::warn!("Failed to close nav menu: {:?}", e);
            }
            set_expanded(&toggle, false);
        }
    };

    {
        let toggle_target = toggle.clone();
        listen(&toggle, "click", false, move |_| {
            let open = header.class_list().toggle("is-open").unwrap_or(false);
            set_expanded(&toggle_target, open);
        })?;
    }

    for link in dom::query_all_html(site_nav, "a") {
        let close = close.clone();
        listen(&link, "click", false, move |_| close())?;
    }

    listen(window, "keydown", false, move |event| {
        if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
            if key_event.key() == "Escape" {
                close();
            }
        }
    })
}

fn set_expanded(toggle: &HtmlElement, open: bool) {
    if let Err(e) = toggle.set_attribute("aria-expanded", &open.to_string()) {
        log::warn!("Failed to set aria-expanded: {:?}", e);
    }
}

fn write_current_year(document: &Document) {
    if let Ok(Some(el)) = document.query_selector("[data-current-year]") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
