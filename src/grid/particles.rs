use super::constants::*;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Anything with a normalized life that counts down once per frame.
pub trait Decaying {
    /// Advance one frame.
    fn step(&mut self);
    fn life(&self) -> f32;
    fn is_alive(&self) -> bool {
        self.life() > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

pub const SHAPE_KINDS: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];

fn pick_color<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PALETTE.choose(rng).copied().unwrap_or(PALETTE[0])
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: &'static str,
    pub kind: ShapeKind,
    pub rotation: f32,
    pub opacity: f32,
    pub life: f32,
}

impl Shape {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(
                rng.gen_range(-SHAPE_SPEED..=SHAPE_SPEED),
                rng.gen_range(-SHAPE_SPEED..=SHAPE_SPEED),
            ),
            size: rng.gen_range(SHAPE_SIZE_MIN..SHAPE_SIZE_MAX),
            color: pick_color(rng),
            kind: SHAPE_KINDS.choose(rng).copied().unwrap_or(ShapeKind::Circle),
            rotation: rng.gen_range(0.0..TAU),
            opacity: 1.0,
            life: 1.0,
        }
    }
}

impl Decaying for Shape {
    fn step(&mut self) {
        self.life -= SHAPE_LIFE_DECAY;
        self.opacity = self.life.max(0.0).powi(2);
        self.size += SHAPE_GROWTH;
        self.pos += self.vel;
    }

    fn life(&self) -> f32 {
        self.life
    }
}

/// Glowing dot; drawn with a radial gradient rather than a flat fill.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: &'static str,
    pub angle: f32,
    pub opacity: f32,
    pub life: f32,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(
                rng.gen_range(-PARTICLE_SPEED_X..=PARTICLE_SPEED_X),
                rng.gen_range(-PARTICLE_SPEED_Y..=PARTICLE_SPEED_Y),
            ),
            size: rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
            color: pick_color(rng),
            angle: rng.gen_range(0.0..TAU),
            opacity: 1.0,
            life: 1.0,
        }
    }
}

impl Decaying for Particle {
    fn step(&mut self) {
        self.life -= PARTICLE_LIFE_DECAY;
        self.opacity = self.life.max(0.0).powi(2);
        self.size += PARTICLE_GROWTH;
        self.pos += self.vel;
        self.angle = (self.angle + PARTICLE_SPIN) % TAU;
    }

    fn life(&self) -> f32 {
        self.life
    }
}

/// Number of entities to spawn for one event, from an inclusive range.
pub fn spawn_count<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (usize, usize)) -> usize {
    if hi <= lo {
        lo
    } else {
        rng.gen_range(lo..=hi)
    }
}

/// Bounded, oldest-first collection of decaying entities.
#[derive(Clone, Debug)]
pub struct Pool<T> {
    items: Vec<T>,
    max: usize,
}

impl<T: Decaying> Pool<T> {
    pub fn new(max: usize) -> Self {
        Self {
            items: Vec::with_capacity(max),
            max,
        }
    }

    /// Adds entities and trims so the cap holds immediately.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.items.extend(items);
        self.trim();
    }

    /// Steps every entity once and retires the ones whose life ran out.
    pub fn step(&mut self) {
        for item in &mut self.items {
            item.step();
        }
        self.items.retain(|item| item.is_alive());
        self.trim();
    }

    /// Drops the oldest entries beyond the cap.
    pub fn trim(&mut self) {
        if self.items.len() > self.max {
            let excess = self.items.len() - self.max;
            self.items.drain(..excess);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}
