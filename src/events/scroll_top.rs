use crate::constants::{SCROLL_TOP_CLASS, SCROLL_TOP_LABEL, SCROLL_TOP_STYLE};
use crate::core::scroll_top_display;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Append the floating scroll-to-top button and keep its visibility in sync
/// with the scroll offset.
pub fn wire_scroll_top(document: &web::Document, window: &web::Window) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    let button = document
        .create_element("button")
        .map_err(dom::js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    button.set_text_content(Some(SCROLL_TOP_LABEL));
    button.set_class_name(SCROLL_TOP_CLASS);
    _ = button.set_attribute("style", SCROLL_TOP_STYLE);
    body.append_child(&button).map_err(dom::js_err)?;

    let btn = button.clone();
    let w = window.clone();
    dom::add_event_listener(window, "scroll", move |_| {
        let offset = w.scroll_y().unwrap_or(0.0);
        dom::set_style(&btn, "display", scroll_top_display(offset));
    });

    let w = window.clone();
    dom::add_event_listener(&button, "click", move |_| {
        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    });
    Ok(())
}
