use super::config::GridConfig;
use super::constants::TONE_MIN_INTERVAL;
use super::gate::MinIntervalGate;
use super::highlight::HighlightTracker;
use super::layout::{CellRole, GridLayout};
use super::particles::{spawn_count, Particle, Pool, Shape};
use super::scale::{volume_for_y, EqualTemperedScale};
use instant::Instant;
use rand::prelude::*;

/// Sound the front end should make for an interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToneRequest {
    Note { frequency_hz: f32, volume: f32 },
    Drum { volume: f32 },
}

impl ToneRequest {
    pub fn volume(&self) -> f32 {
        match *self {
            ToneRequest::Note { volume, .. } | ToneRequest::Drum { volume } => volume,
        }
    }
}

/// Platform-independent state behind the canvas: layout, scale, highlight
/// table, entity pools and the process-wide tone limiter.
pub struct GridEngine {
    pub config: GridConfig,
    layout: Option<GridLayout>,
    scale: EqualTemperedScale,
    highlights: HighlightTracker,
    shapes: Pool<Shape>,
    particles: Pool<Particle>,
    tone_gate: MinIntervalGate,
    rng: StdRng,
}

impl GridEngine {
    pub fn new(config: GridConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: GridConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    fn with_rng(config: GridConfig, rng: StdRng) -> Self {
        Self {
            scale: EqualTemperedScale::new(config.base_frequency_hz, 0),
            highlights: HighlightTracker::new(config.highlight_duration),
            shapes: Pool::new(config.max_shapes),
            particles: Pool::new(config.max_particles),
            tone_gate: MinIntervalGate::new(TONE_MIN_INTERVAL),
            layout: None,
            config,
            rng,
        }
    }

    /// Recomputes the layout for the current canvas size (CSS pixels).
    ///
    /// The scale is rebuilt whenever the note-cell count changes, and the
    /// highlight table goes inert when the column count changes. Returns
    /// true if the scale was regenerated.
    pub fn set_viewport(&mut self, width: f32, height: f32) -> bool {
        let next = GridLayout::compute(&self.config, width, height);
        let prev_columns = self.layout.as_ref().map(|l| l.columns);
        let next_columns = next.as_ref().map(|l| l.columns);
        if prev_columns != next_columns {
            self.highlights.reset();
        }

        let note_count = next.as_ref().map_or(0, GridLayout::note_cell_count);
        let regenerated = self.scale.regenerate(note_count);
        if regenerated {
            match &next {
                Some(l) => log::info!(
                    "[grid] {}x{} cells @ {:.1}px, {} notes",
                    l.columns,
                    l.rows,
                    l.cell_size,
                    note_count
                ),
                None => log::info!("[grid] canvas has no area; notes disabled"),
            }
        }
        self.layout = next;
        regenerated
    }

    /// Handles one pointer position (CSS pixels, canvas-relative).
    ///
    /// Any position inside the grid spawns shapes and particles. Note and
    /// drum cells also request a tone if the limiter allows one; a played
    /// cell flashes.
    pub fn interact(&mut self, x: f32, y: f32, now: Instant) -> Option<ToneRequest> {
        let (flat, role, height) = {
            let layout = self.layout.as_ref()?;
            let (cell, role) = layout.locate(x, y)?;
            (layout.flat_index(cell), role, layout.height)
        };

        self.spawn_burst(x, y);

        let volume = volume_for_y(y, height);
        let request = match role {
            CellRole::Silent => return None,
            CellRole::Drum => ToneRequest::Drum { volume },
            CellRole::Note(index) => {
                // the layout may have changed under a queued event
                let frequency_hz = self.scale.frequency(index)?;
                ToneRequest::Note {
                    frequency_hz,
                    volume,
                }
            }
        };

        if !self.tone_gate.try_pass(now) {
            return None;
        }
        self.highlights.trigger(flat, now);
        Some(request)
    }

    /// One animation step: decay highlights, age and retire entities.
    pub fn advance(&mut self, now: Instant) {
        self.highlights.update(now);
        self.shapes.step();
        self.particles.step();
    }

    fn spawn_burst(&mut self, x: f32, y: f32) {
        let n_shapes = spawn_count(&mut self.rng, self.config.shapes_per_event);
        let n_particles = spawn_count(&mut self.rng, self.config.particles_per_event);
        let rng = &mut self.rng;
        self.shapes
            .extend((0..n_shapes).map(|_| Shape::spawn(&mut *rng, x, y)));
        self.particles
            .extend((0..n_particles).map(|_| Particle::spawn(&mut *rng, x, y)));
    }

    pub fn layout(&self) -> Option<&GridLayout> {
        self.layout.as_ref()
    }

    pub fn scale(&self) -> &EqualTemperedScale {
        &self.scale
    }

    pub fn highlights(&self) -> &HighlightTracker {
        &self.highlights
    }

    pub fn shapes(&self) -> &Pool<Shape> {
        &self.shapes
    }

    pub fn particles(&self) -> &Pool<Particle> {
        &self.particles
    }
}
