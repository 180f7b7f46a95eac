use crate::audio::ToneGenerator;
use crate::constants::AUDIO_UNLOCK_EVENTS;
use crate::dom::{self, Listener};
use crate::grid::GridEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Re-syncs the canvas and regenerates the layout (and scale) on resize and
/// orientation change, so the next interaction already sees the new grid.
pub fn wire_resize(
    canvas: &web::HtmlCanvasElement,
    engine: Rc<RefCell<GridEngine>>,
) -> Option<Listener> {
    let canvas = canvas.clone();
    Listener::on_window("resize", move |_ev: web::Event| {
        let vp = dom::sync_canvas_backing_size(&canvas);
        engine
            .borrow_mut()
            .set_viewport(vp.css_width, vp.css_height);
    })
}

/// Resumes (or first creates) the audio context on events that count as a
/// user gesture. Hover alone never does.
pub fn wire_audio_unlock(tones: Rc<RefCell<ToneGenerator>>) -> Vec<Listener> {
    AUDIO_UNLOCK_EVENTS
        .into_iter()
        .filter_map(|event| {
            let tones = tones.clone();
            Listener::on_window(event, move |_ev: web::Event| {
                tones.borrow_mut().unlock();
            })
        })
        .collect()
}

/// Page-level safety net: uncaught errors and rejected promises are logged
/// and the page keeps running.
pub fn wire_error_reporting() -> Vec<Listener> {
    let on_error = Listener::on_window("error", |ev: web::Event| {
        match ev.dyn_ref::<web::ErrorEvent>() {
            Some(e) => log::error!(
                "uncaught error: {} ({}:{}:{})",
                e.message(),
                e.filename(),
                e.lineno(),
                e.colno()
            ),
            None => log::error!("uncaught error event: {}", ev.type_()),
        }
    });
    let on_rejection = Listener::on_window("unhandledrejection", |ev: web::Event| {
        let reason = js_sys::Reflect::get(&ev, &JsValue::from_str("reason"))
            .unwrap_or(JsValue::UNDEFINED);
        log::error!("unhandled promise rejection: {:?}", reason);
    });
    on_error.into_iter().chain(on_rejection).collect()
}
