#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod audio;
pub mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod observer;
mod particles;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("page-fx starting");

    let (_, document) = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let once = Closure::once_into_js(run_init);
        document.add_event_listener_with_callback("DOMContentLoaded", once.unchecked_ref())?;
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    // each effect is independent; one failing leaves the rest running
    let wired: [(&str, anyhow::Result<()>); 10] = [
        ("fade-in", observer::wire_fade_in(&document, &window)),
        ("gradient", frame::wire_gradient(&document, &window)),
        ("smooth-scroll", events::wire_smooth_scroll(&document)),
        ("gradient-text", events::wire_gradient_text_hover(&document)),
        ("sections", events::wire_section_switcher(&document)),
        ("scroll-top", events::wire_scroll_top(&document, &window)),
        ("lazy-images", observer::wire_lazy_images(&document)),
        ("flowers", particles::wire_flowers(&document, &window)),
        ("crossfade", audio::wire_crossfade(&document, &window)),
        ("tap-sound", events::wire_tap_sound(&document)),
    ];
    for (name, result) in wired {
        if let Err(e) = result {
            log::warn!("[{name}] disabled: {e:?}");
        }
    }
    Ok(())
}
