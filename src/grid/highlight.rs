use super::constants::HIGHLIGHT_PEAK_SCALE;
use fnv::FnvHashMap;
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellHighlight {
    pub opacity: f32,
    pub scale: f32,
    pub triggered_at: Instant,
}

impl CellHighlight {
    pub fn is_active(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Opacity and scale of a flash `elapsed` into a `duration`-long decay.
pub fn highlight_decay(elapsed: Duration, duration: Duration) -> (f32, f32) {
    if duration.is_zero() || elapsed >= duration {
        return (0.0, 1.0);
    }
    let progress = elapsed.as_secs_f32() / duration.as_secs_f32();
    let remaining = 1.0 - progress;
    (remaining, 1.0 + (HIGHLIGHT_PEAK_SCALE - 1.0) * remaining)
}

/// Per-cell flashes keyed by flattened `row * columns + col`.
///
/// Entries are never removed; an expired flash is reset to zero opacity and
/// skipped by [`HighlightTracker::active`].
#[derive(Clone, Debug)]
pub struct HighlightTracker {
    cells: FnvHashMap<usize, CellHighlight>,
    duration: Duration,
}

impl HighlightTracker {
    pub fn new(duration: Duration) -> Self {
        Self {
            cells: FnvHashMap::default(),
            duration,
        }
    }

    pub fn trigger(&mut self, index: usize, now: Instant) {
        self.cells.insert(
            index,
            CellHighlight {
                opacity: 1.0,
                scale: HIGHLIGHT_PEAK_SCALE,
                triggered_at: now,
            },
        );
    }

    pub fn update(&mut self, now: Instant) {
        for h in self.cells.values_mut().filter(|h| h.is_active()) {
            let elapsed = if now > h.triggered_at {
                now - h.triggered_at
            } else {
                Duration::ZERO
            };
            let (opacity, scale) = highlight_decay(elapsed, self.duration);
            h.opacity = opacity;
            h.scale = scale;
        }
    }

    pub fn get(&self, index: usize) -> Option<&CellHighlight> {
        self.cells.get(&index)
    }

    pub fn active(&self) -> impl Iterator<Item = (usize, &CellHighlight)> + '_ {
        self.cells
            .iter()
            .filter(|(_, h)| h.is_active())
            .map(|(i, h)| (*i, h))
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Makes every flash inert, e.g. after the column count changed and the
    /// flattened indices point at different cells.
    pub fn reset(&mut self) {
        for h in self.cells.values_mut() {
            h.opacity = 0.0;
            h.scale = 1.0;
        }
    }
}
