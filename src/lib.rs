#![cfg(target_arch = "wasm32")]
use crate::constants::{DEFAULT_CANVAS_ID, VARIANT_ATTRIBUTE};
use crate::grid::{GridEngine, Variant};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod grid;
mod input;
mod panels;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-grid starting");
    Ok(())
}

struct Mounted {
    frame_loop: frame::LoopHandle,
    listeners: Vec<dom::Listener>,
    tones: Rc<RefCell<audio::ToneGenerator>>,
}

/// Live grid on a canvas. Call `unmount` (or `free`) when the page component
/// is torn down.
#[wasm_bindgen]
pub struct GridHandle {
    mounted: Option<Mounted>,
    variant: Variant,
}

#[wasm_bindgen]
impl GridHandle {
    /// Stops the render loop, unregisters every listener and closes audio.
    /// Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.frame_loop.stop();
            let n = m.listeners.len();
            drop(m.listeners);
            m.tones.borrow_mut().close();
            log::info!("[grid] unmounted ({} listeners released)", n);
        }
    }

    #[wasm_bindgen(getter)]
    pub fn variant(&self) -> String {
        self.variant.name().to_string()
    }

    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.mounted
            .as_ref()
            .map(|m| m.frame_loop.is_running())
            .unwrap_or(false)
    }
}

impl Drop for GridHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mounts the grid on `#canvas_id` (default `grid-canvas`). The layout
/// variant comes from the argument, else the canvas's `data-variant`
/// attribute, else `landing`.
#[wasm_bindgen]
pub fn mount(canvas_id: Option<String>, variant: Option<String>) -> Result<GridHandle, JsValue> {
    let canvas_id = canvas_id.as_deref().unwrap_or(DEFAULT_CANVAS_ID);
    init(canvas_id, variant.as_deref()).map_err(|e| {
        log::error!("mount error: {:?}", e);
        JsValue::from_str(&e.to_string())
    })
}

fn init(canvas_id: &str, variant: Option<&str>) -> anyhow::Result<GridHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let painter = render::Painter::for_canvas(&canvas)?;

    let variant: Variant = match variant
        .map(str::to_string)
        .or_else(|| canvas.get_attribute(VARIANT_ATTRIBUTE))
    {
        Some(name) => name.parse()?,
        None => Variant::default(),
    };

    let engine = Rc::new(RefCell::new(GridEngine::from_entropy(variant.config())));
    let vp = dom::sync_canvas_backing_size(&canvas);
    engine
        .borrow_mut()
        .set_viewport(vp.css_width, vp.css_height);

    let tones = Rc::new(RefCell::new(audio::ToneGenerator::new()));

    let mut listeners = events::wire_error_reporting();
    listeners.extend(events::wire_resize(&canvas, engine.clone()));
    listeners.extend(events::wire_pointer(events::Dispatcher::new(
        canvas.clone(),
        engine.clone(),
        tones.clone(),
    )));
    listeners.extend(events::wire_audio_unlock(tones.clone()));
    listeners.extend(panels::wire_panels(&document));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(engine, canvas, painter)));
    let frame_loop = frame::start_loop(frame_ctx);

    log::info!(
        "[grid] mounted on #{} (variant {}, {} listeners)",
        canvas_id,
        variant,
        listeners.len()
    );
    Ok(GridHandle {
        mounted: Some(Mounted {
            frame_loop,
            listeners,
            tones,
        }),
        variant,
    })
}
