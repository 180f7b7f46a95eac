use super::constants::{SEMITONES_PER_OCTAVE, VOLUME_FLOOR, VOLUME_SPAN};

/// Chromatic equal-tempered scale, one frequency per note cell.
#[derive(Clone, Debug, PartialEq)]
pub struct EqualTemperedScale {
    base_hz: f32,
    frequencies: Vec<f32>,
}

impl EqualTemperedScale {
    pub fn new(base_hz: f32, len: usize) -> Self {
        let mut scale = Self {
            base_hz,
            frequencies: Vec::new(),
        };
        scale.regenerate(len);
        scale
    }

    /// Rebuild for a new note-cell count. Returns true if the length changed.
    pub fn regenerate(&mut self, len: usize) -> bool {
        if len == self.frequencies.len() {
            return false;
        }
        self.frequencies = (0..len).map(|i| semitone_to_hz(self.base_hz, i)).collect();
        true
    }

    /// `None` when the index is stale (outside the current scale).
    pub fn frequency(&self, index: usize) -> Option<f32> {
        self.frequencies.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn base_hz(&self) -> f32 {
        self.base_hz
    }

    pub fn frequencies(&self) -> &[f32] {
        &self.frequencies
    }
}

#[inline]
pub fn semitone_to_hz(base_hz: f32, semitones: usize) -> f32 {
    base_hz * 2.0_f32.powf(semitones as f32 / SEMITONES_PER_OCTAVE)
}

/// `max(0.1, 1 - 0.9 * y / height)`: loudest at the top edge.
#[inline]
pub fn volume_for_y(y: f32, height: f32) -> f32 {
    if height <= 0.0 || !y.is_finite() {
        return VOLUME_FLOOR;
    }
    let v = 1.0 - VOLUME_SPAN * (y / height);
    v.clamp(VOLUME_FLOOR, 1.0)
}
