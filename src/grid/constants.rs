// Simulation and synthesis tuning constants.
// Platform-agnostic so host-side tests can include this file directly.
use std::time::Duration;

// Pitch of note index 0 (C3)
pub const BASE_FREQUENCY_HZ: f32 = 130.81;
pub const SEMITONES_PER_OCTAVE: f32 = 12.0;

// Vertical volume mapping: louder near the top, never fully silent
pub const VOLUME_FLOOR: f32 = 0.1;
pub const VOLUME_SPAN: f32 = 0.9;

// Rate limits
pub const TONE_MIN_INTERVAL: Duration = Duration::from_millis(100);
pub const POINTER_MIN_INTERVAL: Duration = Duration::from_millis(16);
// under one 60 Hz frame with room for callback jitter
pub const FRAME_MIN_INTERVAL: Duration = Duration::from_millis(12);

// Cell highlight flash
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(500);
pub const HIGHLIGHT_PEAK_SCALE: f32 = 1.2;

// Shapes: flat-filled primitives
pub const SHAPE_LIFE_DECAY: f32 = 0.01;
pub const SHAPE_GROWTH: f32 = 0.5;
pub const SHAPE_SIZE_MIN: f32 = 10.0;
pub const SHAPE_SIZE_MAX: f32 = 30.0;
pub const SHAPE_SPEED: f32 = 2.0;
pub const MAX_SHAPES: usize = 50;

// Particles: gradient glows with faster lateral drift
pub const PARTICLE_LIFE_DECAY: f32 = 0.02;
pub const PARTICLE_GROWTH: f32 = 0.1;
pub const PARTICLE_SIZE_MIN: f32 = 2.0;
pub const PARTICLE_SIZE_MAX: f32 = 6.0;
pub const PARTICLE_SPEED_X: f32 = 4.0;
pub const PARTICLE_SPEED_Y: f32 = 2.0;
pub const PARTICLE_SPIN: f32 = 0.1; // radians per frame
pub const MAX_PARTICLES: usize = 100;

// Entities spawned per interaction (inclusive ranges)
pub const SHAPES_PER_EVENT: (usize, usize) = (2, 5);
pub const PARTICLES_PER_EVENT: (usize, usize) = (2, 5);

// Fixed palette shared by shapes and particle glows
pub const PALETTE: [&str; 6] = [
    "#ff6b6b", // coral
    "#4ecdc4", // teal
    "#45b7d1", // sky
    "#96ceb4", // sage
    "#ffeead", // cream
    "#d4a5ff", // lilac
];

// Synthesis envelopes (seconds, AudioContext clock)
pub const MASTER_GAIN: f32 = 0.3;
pub const NOTE_DECAY_SEC: f64 = 0.5;
pub const NOTE_RELEASE_FLOOR: f32 = 0.001; // exponential ramps cannot reach zero
pub const DRUM_FREQUENCY_HZ: f32 = 60.0;
pub const DRUM_DECAY_SEC: f64 = 0.1;
