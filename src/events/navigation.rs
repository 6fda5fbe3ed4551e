use crate::constants::{
    ANCHOR_LINK_SELECTOR, GRADIENT_TEXT_SELECTOR, HOME_SECTION_ID, NAV_LINK_SELECTOR,
    PAGE_SECTION_SELECTOR, SHOW_CLASS,
};
use crate::core::{anchor_target_id, GradientTextStyle, SectionSwitcher, Transition};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fragment id of the link an event was dispatched to.
fn link_target_id(ev: &web::Event) -> Option<String> {
    let link = ev.current_target()?.dyn_into::<web::Element>().ok()?;
    let href = link.get_attribute("href")?;
    anchor_target_id(&href).map(str::to_owned)
}

/// Animate same-page anchor jumps. Links whose id resolves to nothing keep
/// the browser's default navigation.
pub fn wire_smooth_scroll(document: &web::Document) -> anyhow::Result<()> {
    let links: Vec<web::Element> = dom::query_all(document, ANCHOR_LINK_SELECTOR);
    for link in &links {
        let doc = document.clone();
        dom::add_event_listener(link, "click", move |ev| {
            let Some(target) = link_target_id(&ev).and_then(|id| doc.get_element_by_id(&id))
            else {
                return;
            };
            ev.prevent_default();
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    }
    log::info!("[nav] smooth scroll on {} links", links.len());
    Ok(())
}

fn apply_all(sections: &[web::Element], switcher: &SectionSwitcher) {
    for (i, section) in sections.iter().enumerate() {
        let cl = section.class_list();
        if switcher.current_index() == Some(i) {
            _ = cl.add_1(SHOW_CLASS);
        } else {
            _ = cl.remove_1(SHOW_CLASS);
        }
    }
}

fn apply_transition(sections: &[web::Element], t: Transition) {
    if let Some(from) = t.from.and_then(|i| sections.get(i)) {
        _ = from.class_list().remove_1(SHOW_CLASS);
    }
    if let Some(to) = sections.get(t.to) {
        _ = to.class_list().add_1(SHOW_CLASS);
    }
}

/// Show exactly one `.page-section` at a time, starting on `#home` and
/// switching on `nav a` clicks.
pub fn wire_section_switcher(document: &web::Document) -> anyhow::Result<()> {
    let sections: Vec<web::Element> = dom::query_all(document, PAGE_SECTION_SELECTOR);
    if sections.is_empty() {
        return Ok(());
    }
    let ids = sections.iter().map(|s| s.id()).collect();
    let switcher = SectionSwitcher::new(ids, HOME_SECTION_ID);
    apply_all(&sections, &switcher);
    log::info!(
        "[nav] {} page sections, showing {:?}",
        sections.len(),
        switcher.current()
    );

    let sections = Rc::new(sections);
    let switcher = Rc::new(RefCell::new(switcher));
    for link in dom::query_all::<web::Element>(document, NAV_LINK_SELECTOR) {
        let sections = sections.clone();
        let switcher = switcher.clone();
        dom::add_event_listener(&link, "click", move |ev| {
            let Some(id) = link_target_id(&ev) else {
                return;
            };
            let transition = switcher.borrow_mut().select(&id);
            if let Some(t) = transition {
                apply_transition(&sections, t);
            }
        });
    }
    Ok(())
}

fn apply_gradient_text(el: &web::HtmlElement, hovered: bool) {
    for (property, value) in GradientTextStyle::for_hover(hovered).declarations() {
        dom::set_style(el, property, value);
    }
}

/// Freeze the animated gradient on nav text while hovered.
pub fn wire_gradient_text_hover(document: &web::Document) -> anyhow::Result<()> {
    for el in dom::query_all::<web::HtmlElement>(document, GRADIENT_TEXT_SELECTOR) {
        let enter = el.clone();
        dom::add_event_listener(&el, "mouseenter", move |_| {
            apply_gradient_text(&enter, true);
        });
        let leave = el.clone();
        dom::add_event_listener(&el, "mouseleave", move |_| {
            apply_gradient_text(&leave, false);
        });
    }
    Ok(())
}
