use crate::constants::{AUDIO_SELECTOR, VOLUME_RAMP_TICK_MS};
use crate::core::{Crossfader, RampTick};
use crate::dom;
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ActiveRamp {
    handle: i32,
    _tick: Closure<dyn FnMut()>,
}

struct CrossfadeRig {
    window: web::Window,
    tracks: Vec<web::HtmlAudioElement>,
    fader: Crossfader,
    // one entry per track; a finished ramp stays until replaced so its
    // closure is never dropped while running
    ramps: FnvHashMap<usize, ActiveRamp>,
}

type SharedRig = Rc<RefCell<CrossfadeRig>>;

impl CrossfadeRig {
    fn cancel_ramp(&mut self, track: usize) {
        if let Some(old) = self.ramps.remove(&track) {
            self.window.clear_interval_with_handle(old.handle);
        }
    }
}

fn start_ramp(rig: &SharedRig, track: usize) {
    let rig_tick = rig.clone();
    let tick = Closure::wrap(Box::new(move || on_tick(&rig_tick, track)) as Box<dyn FnMut()>);
    let mut r = rig.borrow_mut();
    r.cancel_ramp(track);
    match r
        .window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            VOLUME_RAMP_TICK_MS,
        ) {
        Ok(handle) => {
            r.ramps.insert(
                track,
                ActiveRamp {
                    handle,
                    _tick: tick,
                },
            );
        }
        Err(e) => log::debug!("[audio] ramp timer failed: {:?}", e),
    }
}

fn on_tick(rig: &SharedRig, track: usize) {
    let mut r = rig.borrow_mut();
    match r.fader.tick(track) {
        RampTick::Step(volume) => r.tracks[track].set_volume(volume),
        RampTick::Finished { volume, pause } => {
            r.tracks[track].set_volume(volume);
            if let Some(active) = r.ramps.get(&track) {
                r.window.clear_interval_with_handle(active.handle);
            }
            if pause {
                _ = r.tracks[track].pause();
            }
        }
        RampTick::Idle => {
            if let Some(active) = r.ramps.get(&track) {
                r.window.clear_interval_with_handle(active.handle);
            }
        }
    }
}

fn on_play(rig: &SharedRig, track: usize) {
    let plan = rig.borrow_mut().fader.play(track);
    let Some(plan) = plan else {
        return;
    };
    for &other in &plan.pause_now {
        let r = rig.borrow();
        _ = r.tracks[other].pause();
    }
    for &other in &plan.fade_out {
        start_ramp(rig, other);
    }
    start_ramp(rig, plan.fade_in);
    log::debug!("[audio] track {} up, {} fading out", track, plan.fade_out.len());
}

fn on_pause(rig: &SharedRig, track: usize) {
    let needs_ramp = rig.borrow_mut().fader.pause(track);
    if needs_ramp {
        start_ramp(rig, track);
    } else {
        rig.borrow_mut().cancel_ramp(track);
    }
}

/// Keep at most one `<audio>` element audible, crossfading on play and
/// fading out on pause.
pub fn wire_crossfade(document: &web::Document, window: &web::Window) -> anyhow::Result<()> {
    let tracks: Vec<web::HtmlAudioElement> = dom::query_all(document, AUDIO_SELECTOR);
    if tracks.is_empty() {
        return Ok(());
    }
    for track in &tracks {
        track.set_volume(0.0);
    }
    let rig: SharedRig = Rc::new(RefCell::new(CrossfadeRig {
        window: window.clone(),
        fader: Crossfader::new(tracks.len()),
        tracks: tracks.clone(),
        ramps: FnvHashMap::default(),
    }));

    for (i, track) in tracks.iter().enumerate() {
        let rig_play = rig.clone();
        dom::add_event_listener(track, "play", move |_| on_play(&rig_play, i));
        let rig_pause = rig.clone();
        dom::add_event_listener(track, "pause", move |_| on_pause(&rig_pause, i));
    }
    log::info!("[audio] crossfading {} tracks", tracks.len());
    Ok(())
}
