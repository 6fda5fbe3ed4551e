use crate::constants::{
    FLOWERS_PER_BATCH, FLOWER_CLASS, FLOWER_FALL_EXTRA_PX, FLOWER_LIFETIME_MS, FLOWER_SRC,
    FLOWER_START_TOP_PX, FLOWER_Z_INDEX, WELCOME_BUTTON_SELECTOR,
};
use crate::core::{flower_transition, lane_position, FlowerBuffer};
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

type SharedFlowers = Rc<RefCell<FlowerBuffer<web::HtmlElement>>>;

fn viewport_extent(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

fn create_flower(document: &web::Document, left_px: f64) -> Option<web::HtmlElement> {
    let img = document
        .create_element("img")
        .ok()?
        .dyn_into::<web::HtmlImageElement>()
        .ok()?;
    img.set_src(FLOWER_SRC);
    _ = img.class_list().add_1(FLOWER_CLASS);
    let el: web::HtmlElement = img.into();
    dom::set_style(&el, "position", "fixed");
    dom::set_style(&el, "left", &format!("{left_px}px"));
    dom::set_style(&el, "top", &format!("{FLOWER_START_TOP_PX}px"));
    dom::set_style(&el, "z-index", &FLOWER_Z_INDEX.to_string());
    dom::set_style(&el, "opacity", "1");
    dom::set_style(&el, "transform", "translateY(0)");
    dom::set_style(&el, "transition", &flower_transition());
    Some(el)
}

fn start_fall(flower: &web::HtmlElement, distance_px: f64) {
    // force layout so the start position is committed before the transition
    _ = flower.get_bounding_client_rect();
    dom::set_style(flower, "transform", &format!("translateY({distance_px}px)"));
    dom::set_style(flower, "opacity", "0");
}

fn spawn_batch(document: &web::Document, window: &web::Window, flowers: &SharedFlowers) {
    let Some(body) = document.body() else {
        return;
    };
    let now = Instant::now();
    let stale = flowers.borrow_mut().sweep(now);
    for el in stale {
        el.remove();
    }

    let width = viewport_extent(window.inner_width());
    let fall = viewport_extent(window.inner_height()) + FLOWER_FALL_EXTRA_PX;
    let mut rng = rand::thread_rng();
    for _ in 0..FLOWERS_PER_BATCH {
        let Some(flower) = create_flower(document, lane_position(&mut rng, width)) else {
            continue;
        };
        if body.append_child(&flower).is_err() {
            continue;
        }
        start_fall(&flower, fall);
        let id = flowers.borrow_mut().push(flower, now);

        let flowers_timer = flowers.clone();
        dom::set_timeout(window, FLOWER_LIFETIME_MS as i32, move || {
            let released = flowers_timer.borrow_mut().release(id);
            if let Some(el) = released {
                el.remove();
            }
        });
    }

    let evicted = flowers.borrow_mut().evict_excess();
    if !evicted.is_empty() {
        log::debug!("[flowers] evicted {} oldest", evicted.len());
    }
    for el in evicted {
        el.remove();
    }
}

/// Rain flowers down the page when the welcome button is clicked.
pub fn wire_flowers(document: &web::Document, window: &web::Window) -> anyhow::Result<()> {
    let Some(button) = document
        .query_selector(WELCOME_BUTTON_SELECTOR)
        .map_err(dom::js_err)?
    else {
        return Ok(());
    };
    let flowers: SharedFlowers = Rc::new(RefCell::new(FlowerBuffer::default()));
    let doc = document.clone();
    let win = window.clone();
    dom::add_event_listener(&button, "click", move |_| {
        spawn_batch(&doc, &win, &flowers);
    });
    Ok(())
}
