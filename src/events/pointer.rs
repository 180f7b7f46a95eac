use crate::audio::{AudioError, ToneGenerator};
use crate::dom::Listener;
use crate::grid::constants::POINTER_MIN_INTERVAL;
use crate::grid::{GridEngine, MinIntervalGate};
use crate::input::{self, MoveKind};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Routes debounced pointer and touch movement into the grid engine and
/// plays whatever the engine asks for.
pub struct Dispatcher {
    canvas: web::HtmlCanvasElement,
    engine: Rc<RefCell<GridEngine>>,
    tones: Rc<RefCell<ToneGenerator>>,
    debounce: MinIntervalGate,
    audio_warned: bool,
}

impl Dispatcher {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        engine: Rc<RefCell<GridEngine>>,
        tones: Rc<RefCell<ToneGenerator>>,
    ) -> Self {
        Self {
            canvas,
            engine,
            tones,
            debounce: MinIntervalGate::new(POINTER_MIN_INTERVAL),
            audio_warned: false,
        }
    }

    pub fn handle(&mut self, ev: &web::Event, kind: MoveKind) {
        let now = Instant::now();
        if !self.debounce.try_pass(now) {
            return;
        }
        let client = match input::client_position(ev, kind) {
            Some(c) => c,
            None => return,
        };
        let pos = input::pointer_canvas_px(client, &self.canvas);

        let request = self.engine.borrow_mut().interact(pos.x, pos.y, now);
        if let Some(req) = request {
            if let Err(e) = self.tones.borrow_mut().play(req) {
                self.report_audio(e);
            }
        }
    }

    // First failure is a warning; repeats would flood the console. A
    // suspended context is the normal state before the first click.
    fn report_audio(&mut self, e: AudioError) {
        if self.audio_warned || matches!(e, AudioError::Suspended) {
            log::debug!("[audio] skipped: {}", e);
        } else {
            log::warn!("[audio] skipped: {}", e);
            self.audio_warned = true;
        }
    }
}

pub fn wire_pointer(dispatcher: Dispatcher) -> Vec<Listener> {
    let target: web::EventTarget = dispatcher.canvas.clone().into();
    let dispatcher = Rc::new(RefCell::new(dispatcher));
    [MoveKind::Mouse, MoveKind::Touch]
        .into_iter()
        .filter_map(|kind| {
            let d = dispatcher.clone();
            Listener::add(&target, kind.event_name(), move |ev: web::Event| {
                if kind == MoveKind::Touch {
                    // keep the page from scrolling under a finger drag
                    ev.prevent_default();
                }
                d.borrow_mut().handle(&ev, kind);
            })
        })
        .collect()
}
