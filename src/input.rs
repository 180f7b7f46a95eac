use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Which move event shape a listener receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Mouse,
    Touch,
}

impl MoveKind {
    pub fn event_name(self) -> &'static str {
        match self {
            MoveKind::Mouse => "mousemove",
            MoveKind::Touch => "touchmove",
        }
    }
}

/// Client coordinates of a move event; the first touch point for touch
/// events. Pressure and pointer identity are ignored.
pub fn client_position(ev: &web::Event, kind: MoveKind) -> Option<Vec2> {
    match kind {
        MoveKind::Mouse => {
            let m = ev.dyn_ref::<web::MouseEvent>()?;
            Some(Vec2::new(m.client_x() as f32, m.client_y() as f32))
        }
        MoveKind::Touch => {
            // TouchEvent is not a global in every desktop browser; trust the
            // listener's event name instead of an instanceof check.
            let t: &web::TouchEvent = ev.unchecked_ref();
            let touch = t.touches().get(0)?;
            Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
        }
    }
}

/// Position in canvas CSS pixels, origin at the canvas's top-left corner.
#[inline]
pub fn pointer_canvas_px(client: Vec2, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client - Vec2::new(rect.left() as f32, rect.top() as f32)
}
