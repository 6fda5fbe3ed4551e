use crate::constants::GRADIENT_SELECTOR;
use crate::core::GradientOffset;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct GradientContext {
    pub offset: Rc<RefCell<GradientOffset>>,
    pub targets: Vec<web::HtmlElement>,
}

impl GradientContext {
    pub fn frame(&mut self) {
        let position = {
            let mut offset = self.offset.borrow_mut();
            offset.advance();
            offset.css_position()
        };
        for target in &self.targets {
            dom::set_style(target, "background-position", &position);
        }
    }
}

/// Shift `.animated-gradient-bg` backgrounds every frame; a resize restarts
/// the shift from the origin.
pub fn wire_gradient(document: &web::Document, window: &web::Window) -> anyhow::Result<()> {
    let targets: Vec<web::HtmlElement> = dom::query_all(document, GRADIENT_SELECTOR);
    if targets.is_empty() {
        return Ok(());
    }
    let offset = Rc::new(RefCell::new(GradientOffset::new()));

    let offset_resize = offset.clone();
    dom::add_event_listener(window, "resize", move |_| {
        offset_resize.borrow_mut().reset();
    });

    log::info!("[gradient] animating {} elements", targets.len());
    start_loop(Rc::new(RefCell::new(GradientContext { offset, targets })));
    Ok(())
}

pub fn start_loop(frame_ctx: Rc<RefCell<GradientContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    // paint the first frame now instead of waiting a frame
    frame_ctx.borrow_mut().frame();
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
