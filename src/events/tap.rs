use crate::constants::{TAP_SOUND_SRC, TAP_TARGET_SELECTOR};
use crate::core::{is_tap_target_tag, TapVariation};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn is_tap_target(el: &web::Element) -> bool {
    is_tap_target_tag(&el.tag_name(), el.has_attribute("href"))
        || matches!(el.closest(TAP_TARGET_SELECTOR), Ok(Some(_)))
}

/// Play a slightly varied tap sound on every button or link click.
pub fn wire_tap_sound(document: &web::Document) -> anyhow::Result<()> {
    let clip = web::HtmlAudioElement::new_with_src(TAP_SOUND_SRC).map_err(dom::js_err)?;
    clip.set_preload("auto");
    clip.load();

    dom::add_event_listener(document, "click", move |ev| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        if !is_tap_target(&target) {
            return;
        }
        // a fresh clone per click so rapid taps overlap instead of restarting
        let Some(sound) = clip
            .clone_node()
            .ok()
            .and_then(|n| n.dyn_into::<web::HtmlAudioElement>().ok())
        else {
            return;
        };
        let variation = TapVariation::sample(&mut rand::thread_rng());
        sound.set_volume(variation.volume);
        sound.set_playback_rate(variation.playback_rate);
        dom::play_quietly(&sound);
    });
    Ok(())
}
