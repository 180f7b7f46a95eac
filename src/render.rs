use crate::constants::*;
use crate::dom::Viewport;
use crate::grid::{GridLayout, HighlightTracker, Particle, Pool, Shape, ShapeKind};
use anyhow::anyhow;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D drawing for one frame. Works in CSS pixels; the device pixel
/// ratio is folded into the context transform.
pub struct Painter {
    ctx: web::CanvasRenderingContext2d,
}

impl Painter {
    pub fn for_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext error: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("unexpected 2d context type"))?;
        Ok(Self { ctx })
    }

    pub fn begin_frame(&self, vp: &Viewport) {
        _ = self.ctx.set_transform(vp.dpr, 0.0, 0.0, vp.dpr, 0.0, 0.0);
        self.ctx.set_global_alpha(1.0);
        self.ctx
            .clear_rect(0.0, 0.0, vp.css_width as f64, vp.css_height as f64);
    }

    pub fn draw_grid(&self, layout: &GridLayout) {
        let ctx = &self.ctx;
        let cell = layout.cell_size as f64;
        let grid_w = layout.grid_width() as f64;
        let grid_h = layout.rows as f64 * cell;

        // drum columns, note rows only
        let rows = layout.note_row_span();
        ctx.set_fill_style_str(DRUM_COLUMN_TINT);
        for cols in layout.drum_column_ranges() {
            ctx.fill_rect(
                cols.start as f64 * cell,
                rows.start as f64 * cell,
                cols.len() as f64 * cell,
                rows.len() as f64 * cell,
            );
        }

        ctx.set_stroke_style_str(GRID_LINE_COLOR);
        ctx.set_line_width(GRID_LINE_WIDTH);
        ctx.begin_path();
        for c in 0..=layout.columns {
            let x = c as f64 * cell;
            ctx.move_to(x, 0.0);
            ctx.line_to(x, grid_h);
        }
        for r in 0..=layout.rows {
            let y = r as f64 * cell;
            ctx.move_to(0.0, y);
            ctx.line_to(grid_w, y);
        }
        ctx.stroke();
    }

    /// Fading, shrinking square centered on each flashing cell.
    pub fn draw_highlights(&self, layout: &GridLayout, highlights: &HighlightTracker) {
        for (index, h) in highlights.active() {
            let cell = match layout.cell_from_index(index) {
                Some(c) => c,
                None => continue,
            };
            let (cx, cy) = layout.cell_center(cell);
            let side = (layout.cell_size * h.scale) as f64;
            let alpha = (h.opacity * HIGHLIGHT_MAX_ALPHA).clamp(0.0, 1.0);
            self.ctx
                .set_fill_style_str(&format!("rgba({}, {:.3})", HIGHLIGHT_FILL_RGB, alpha));
            self.ctx.fill_rect(
                cx as f64 - side * 0.5,
                cy as f64 - side * 0.5,
                side,
                side,
            );
        }
    }

    pub fn draw_shapes(&self, shapes: &Pool<Shape>) {
        let ctx = &self.ctx;
        for s in shapes.iter() {
            let half = s.size as f64 * 0.5;
            ctx.save();
            ctx.set_global_alpha(s.opacity as f64);
            ctx.set_fill_style_str(s.color);
            _ = ctx.translate(s.pos.x as f64, s.pos.y as f64);
            _ = ctx.rotate(s.rotation as f64);
            match s.kind {
                ShapeKind::Circle => {
                    ctx.begin_path();
                    _ = ctx.arc(0.0, 0.0, half, 0.0, TAU);
                    ctx.fill();
                }
                ShapeKind::Square => ctx.fill_rect(-half, -half, half * 2.0, half * 2.0),
                ShapeKind::Triangle => {
                    ctx.begin_path();
                    ctx.move_to(0.0, -half);
                    ctx.line_to(half, half);
                    ctx.line_to(-half, half);
                    ctx.close_path();
                    ctx.fill();
                }
            }
            ctx.restore();
        }
    }

    /// Radial glow with a small spinning core.
    pub fn draw_particles(&self, particles: &Pool<Particle>) {
        let ctx = &self.ctx;
        for p in particles.iter() {
            let (x, y) = (p.pos.x as f64, p.pos.y as f64);
            let radius = p.size as f64 * GLOW_RADIUS_SCALE;
            ctx.save();
            ctx.set_global_alpha(p.opacity as f64);
            if let Ok(glow) = ctx.create_radial_gradient(x, y, 0.0, x, y, radius) {
                _ = glow.add_color_stop(0.0, p.color);
                _ = glow.add_color_stop(1.0, GLOW_EDGE_COLOR);
                ctx.set_fill_style_canvas_gradient(&glow);
                ctx.begin_path();
                _ = ctx.arc(x, y, radius, 0.0, TAU);
                ctx.fill();
            }
            let half = p.size as f64 * 0.5;
            _ = ctx.translate(x, y);
            _ = ctx.rotate(p.angle as f64);
            ctx.set_fill_style_str(p.color);
            ctx.fill_rect(-half, -half, half * 2.0, half * 2.0);
            ctx.restore();
        }
    }
}
