use crate::dom;
use crate::grid::constants::FRAME_MIN_INTERVAL;
use crate::grid::{GridEngine, MinIntervalGate};
use crate::render::Painter;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<GridEngine>>,
    pub canvas: web::HtmlCanvasElement,
    pub painter: Painter,
    pacer: MinIntervalGate,
}

impl FrameContext {
    pub fn new(
        engine: Rc<RefCell<GridEngine>>,
        canvas: web::HtmlCanvasElement,
        painter: Painter,
    ) -> Self {
        Self {
            engine,
            canvas,
            painter,
            pacer: MinIntervalGate::new(FRAME_MIN_INTERVAL),
        }
    }

    /// Layout, entity ageing and drawing for one frame. Skipped when the
    /// display refreshes faster than the target rate.
    pub fn frame(&mut self) {
        let now = Instant::now();
        if !self.pacer.try_pass(now) {
            return;
        }

        let vp = dom::sync_canvas_backing_size(&self.canvas);
        let mut engine = self.engine.borrow_mut();
        engine.set_viewport(vp.css_width, vp.css_height);
        engine.advance(now);

        self.painter.begin_frame(&vp);
        if let Some(layout) = engine.layout() {
            self.painter.draw_grid(layout);
            self.painter.draw_highlights(layout, engine.highlights());
        }
        self.painter.draw_shapes(engine.shapes());
        self.painter.draw_particles(engine.particles());
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owns the requestAnimationFrame chain. `stop` (or drop) cancels the pending
/// frame and frees the loop closure.
pub struct LoopHandle {
    tick: Tick,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        if self.tick.borrow_mut().take().is_some() {
            log::info!("[frame] loop stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.tick.borrow().is_some()
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &Tick, raf_id: &Cell<Option<i32>>) {
    let id = match (web::window(), tick.borrow().as_ref()) {
        (Some(w), Some(cb)) => match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("requestAnimationFrame error: {:?}", e);
                None
            }
        },
        _ => None,
    };
    raf_id.set(id);
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let tick: Tick = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &raf_clone);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &raf_id);
    LoopHandle { tick, raf_id }
}
