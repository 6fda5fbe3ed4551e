use crate::constants::{
    DEFERRED_SRC_ATTR, FADE_INDEX_ATTR, FADE_IN_CUE_DELAY_MS, FADE_IN_CUE_SRC, FADE_IN_SELECTOR,
    FADE_IN_THRESHOLD, LAZY_IMAGE_SELECTOR, VISIBLE_CLASS,
};
use crate::core::{deferred_source, RevealLedger};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = dyn FnMut(js_sys::Array, web::IntersectionObserver);

fn intersecting_targets(entries: &js_sys::Array) -> impl Iterator<Item = web::Element> + '_ {
    entries
        .iter()
        .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
        .filter(|e| e.is_intersecting())
        .map(|e| e.target())
}

/// Reveal `.fade-in-section` elements as they scroll into view, playing the
/// cue once per section.
pub fn wire_fade_in(document: &web::Document, window: &web::Window) -> anyhow::Result<()> {
    let sections: Vec<web::Element> = dom::query_all(document, FADE_IN_SELECTOR);
    if sections.is_empty() {
        return Ok(());
    }
    for (i, section) in sections.iter().enumerate() {
        _ = section.set_attribute(FADE_INDEX_ATTR, &i.to_string());
    }

    let ledger = Rc::new(RefCell::new(RevealLedger::new(sections.len())));
    let window = window.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for target in intersecting_targets(&entries) {
                _ = target.class_list().add_1(VISIBLE_CLASS);
                let index = target
                    .get_attribute(FADE_INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok());
                if let Some(i) = index {
                    if ledger.borrow_mut().mark_played(i) {
                        schedule_cue(&window);
                    }
                }
            }
        },
    ) as Box<ObserverCallback>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(FADE_IN_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(dom::js_err)?;
    for section in &sections {
        observer.observe(section);
    }
    callback.forget();
    log::info!("[fade-in] observing {} sections", sections.len());
    Ok(())
}

fn schedule_cue(window: &web::Window) {
    let audio = match web::HtmlAudioElement::new_with_src(FADE_IN_CUE_SRC) {
        Ok(a) => a,
        Err(e) => {
            log::debug!("fade-in cue unavailable: {:?}", e);
            return;
        }
    };
    dom::set_timeout(window, FADE_IN_CUE_DELAY_MS, move || dom::play_quietly(&audio));
}

/// Swap `data-src` into lazy images the first time they intersect.
pub fn wire_lazy_images(document: &web::Document) -> anyhow::Result<()> {
    let images: Vec<web::HtmlImageElement> = dom::query_all(document, LAZY_IMAGE_SELECTOR);
    if images.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for target in intersecting_targets(&entries) {
                let Some(src) = deferred_source(target.get_attribute(DEFERRED_SRC_ATTR)) else {
                    continue;
                };
                if let Some(img) = target.dyn_ref::<web::HtmlImageElement>() {
                    img.set_src(&src);
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<ObserverCallback>);

    let observer = web::IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(dom::js_err)?;
    for img in &images {
        observer.observe(img);
    }
    callback.forget();
    log::info!("[lazy] observing {} images", images.len());
    Ok(())
}
