// Host-side tests for the shape/particle simulator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod grid {
    pub mod constants {
        include!("../src/grid/constants.rs");
    }
    pub mod particles {
        include!("../src/grid/particles.rs");
    }
}

use grid::constants::*;
use grid::particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

/// Steps a single-entity pool until it empties; returns the number of steps.
fn steps_until_retired<T: Decaying + Clone>(entity: T) -> usize {
    let mut pool = Pool::new(1);
    pool.extend([entity]);
    let mut prev_life = pool.iter().next().unwrap().life();
    let mut steps = 0;
    loop {
        pool.step();
        steps += 1;
        match pool.iter().next() {
            Some(e) => {
                assert!(e.life() < prev_life, "life must strictly decrease");
                assert!(e.life() > 0.0, "dead entity left in the pool");
                prev_life = e.life();
            }
            None => break,
        }
        assert!(steps < 1_000, "entity never retired");
    }
    steps
}

#[test]
fn shapes_live_about_a_hundred_frames() {
    let steps = steps_until_retired(Shape::spawn(&mut rng(), 10.0, 10.0));
    assert!((99..=101).contains(&steps), "took {steps} steps");
}

#[test]
fn particles_live_about_fifty_frames() {
    let steps = steps_until_retired(Particle::spawn(&mut rng(), 10.0, 10.0));
    assert!((49..=51).contains(&steps), "took {steps} steps");
}

#[test]
fn shape_step_fades_grows_and_moves() {
    let mut shape = Shape::spawn(&mut rng(), 100.0, 200.0);
    let start = shape.clone();
    shape.step();
    assert!((shape.life - (1.0 - SHAPE_LIFE_DECAY)).abs() < 1e-6);
    assert!((shape.opacity - shape.life * shape.life).abs() < 1e-6);
    assert!((shape.size - (start.size + SHAPE_GROWTH)).abs() < 1e-5);
    assert_eq!(shape.pos, start.pos + start.vel);
    assert_eq!(shape.rotation, start.rotation);
}

#[test]
fn particle_step_spins() {
    let mut particle = Particle::spawn(&mut rng(), 0.0, 0.0);
    let start = particle.clone();
    particle.step();
    let expected = (start.angle + PARTICLE_SPIN) % std::f32::consts::TAU;
    assert!((particle.angle - expected).abs() < 1e-5);
    assert!((particle.opacity - particle.life * particle.life).abs() < 1e-6);
    assert_eq!(particle.pos, start.pos + start.vel);
}

#[test]
fn spawned_entities_use_the_fixed_palettes_and_ranges() {
    let mut r = rng();
    for _ in 0..200 {
        let s = Shape::spawn(&mut r, 5.0, 6.0);
        assert!(PALETTE.contains(&s.color));
        assert!(SHAPE_KINDS.contains(&s.kind));
        assert!(s.size >= SHAPE_SIZE_MIN && s.size < SHAPE_SIZE_MAX);
        assert!(s.vel.x.abs() <= SHAPE_SPEED && s.vel.y.abs() <= SHAPE_SPEED);
        assert_eq!((s.life, s.opacity), (1.0, 1.0));

        let p = Particle::spawn(&mut r, 5.0, 6.0);
        assert!(PALETTE.contains(&p.color));
        assert!(p.size >= PARTICLE_SIZE_MIN && p.size < PARTICLE_SIZE_MAX);
        assert!(p.vel.x.abs() <= PARTICLE_SPEED_X && p.vel.y.abs() <= PARTICLE_SPEED_Y);
    }
}

#[test]
fn spawn_count_stays_in_the_inclusive_range() {
    let mut r = rng();
    let mut seen = [false; 6];
    for _ in 0..500 {
        let n = spawn_count(&mut r, SHAPES_PER_EVENT);
        assert!((2..=5).contains(&n));
        seen[n] = true;
    }
    assert!(seen[2] && seen[5], "both ends of the range should occur");
    assert_eq!(spawn_count(&mut r, (3, 3)), 3);
    assert_eq!(spawn_count(&mut r, (4, 1)), 4);
}

#[test]
fn pools_never_exceed_their_caps() {
    let mut r = rng();
    let mut shapes = Pool::new(MAX_SHAPES);
    let mut particles = Pool::new(MAX_PARTICLES);
    for event in 0..300 {
        let n = spawn_count(&mut r, SHAPES_PER_EVENT);
        let batch: Vec<Shape> = (0..n).map(|_| Shape::spawn(&mut r, 1.0, 1.0)).collect();
        shapes.extend(batch);
        let n = spawn_count(&mut r, PARTICLES_PER_EVENT);
        let batch: Vec<Particle> = (0..n).map(|_| Particle::spawn(&mut r, 1.0, 1.0)).collect();
        particles.extend(batch);
        assert!(shapes.len() <= MAX_SHAPES, "shapes over cap after event {event}");
        assert!(particles.len() <= MAX_PARTICLES, "particles over cap after event {event}");
        if event % 3 == 0 {
            shapes.step();
            particles.step();
        }
    }
    assert_eq!(shapes.len(), MAX_SHAPES);
}

#[test]
fn trimming_discards_the_oldest_first() {
    let mut r = rng();
    let mut pool = Pool::new(3);
    let batch: Vec<Shape> = (0..5)
        .map(|i| Shape::spawn(&mut r, i as f32, 0.0))
        .collect();
    pool.extend(batch);
    let xs: Vec<f32> = pool.iter().map(|s| s.pos.x).collect();
    assert_eq!(xs, vec![2.0, 3.0, 4.0]);
}
