//! Bouncing particles behind the hero section.
//!
//! Positions live in percentage space, `[0, 100]` on both axes. A particle
//! that would leave the box on an axis has that velocity component inverted
//! and its step recomputed from the old position (one reflection, no clamp).

use rand::Rng;

pub const PARTICLE_COUNT: usize = 50;

pub const TICK_MS: u32 = 50;

pub const PARTICLE_COLORS: [&str; 3] = ["#00eeff", "#00ff66", "#ffffff"];

/// Upper bound on |vx| and |vy|.
pub const MAX_SPEED: f64 = 0.1;

pub const MIN_SIZE: f64 = 1.0;
pub const MAX_SIZE: f64 = 4.0;

const BOUNDS: (f64, f64) = (0.0, 100.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: &'static str,
    pub vx: f64,
    pub vy: f64,
    /// Seconds per opacity pulse.
    pub glow_secs: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(id: usize, rng: &mut R) -> Self {
        Self {
            id,
            x: rng.gen_range(BOUNDS.0..=BOUNDS.1),
            y: rng.gen_range(BOUNDS.0..=BOUNDS.1),
            size: rng.gen_range(MIN_SIZE..MAX_SIZE),
            color: PARTICLE_COLORS[rng.gen_range(0..PARTICLE_COLORS.len())],
            vx: rng.gen_range(-MAX_SPEED..=MAX_SPEED),
            vy: rng.gen_range(-MAX_SPEED..=MAX_SPEED),
            glow_secs: rng.gen_range(2.0..5.0),
        }
    }

    pub fn step(&mut self) {
        let (x, vx) = reflect(self.x, self.vx);
        let (y, vy) = reflect(self.y, self.vy);
        self.x = x;
        self.y = y;
        self.vx = vx;
        self.vy = vy;
    }
}

fn reflect(position: f64, velocity: f64) -> (f64, f64) {
    let next = position + velocity;
    if next < BOUNDS.0 || next > BOUNDS.1 {
        let velocity = -velocity;
        (position + velocity, velocity)
    } else {
        (next, velocity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_count(PARTICLE_COUNT, rng)
    }

    pub fn with_count<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        Self {
            particles: (0..count).map(|id| Particle::random(id, rng)).collect(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn tick(&mut self) {
        for particle in &mut self.particles {
            particle.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            id: 0,
            x,
            y,
            size: 2.0,
            color: PARTICLE_COLORS[0],
            vx,
            vy,
            glow_secs: 3.0,
        }
    }

    #[test]
    fn generates_fifty_particles_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::generate(&mut rng);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for (i, p) in field.particles().iter().enumerate() {
            assert_eq!(p.id, i);
            assert!((0.0..=100.0).contains(&p.x));
            assert!((0.0..=100.0).contains(&p.y));
            assert!(p.size >= MIN_SIZE && p.size < MAX_SIZE);
            assert!(p.vx.abs() <= MAX_SPEED && p.vy.abs() <= MAX_SPEED);
            assert!(PARTICLE_COLORS.contains(&p.color));
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = ParticleField::generate(&mut StdRng::seed_from_u64(42));
        let b = ParticleField::generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn moves_by_velocity_inside_the_box() {
        let mut p = particle(50.0, 50.0, 0.1, -0.05);
        p.step();
        assert!((p.x - 50.1).abs() < 1e-9);
        assert!((p.y - 49.95).abs() < 1e-9);
    }

    #[test]
    fn reflects_from_old_position() {
        let mut p = particle(99.95, 0.02, 0.1, -0.05);
        p.step();
        assert_eq!(p.vx, -0.1);
        assert_eq!(p.vy, 0.05);
        assert!((p.x - 99.85).abs() < 1e-9);
        assert!((p.y - 0.07).abs() < 1e-9);
    }

    #[test]
    fn exact_boundary_is_inside() {
        let mut p = particle(0.1, 0.1, -0.1, -0.1);
        p.step();
        assert_eq!(p.x, 0.0);
        assert_eq!(p.vx, -0.1);
        assert_eq!(p.vy, -0.1);
    }

    #[test]
    fn outside_particle_is_not_clamped() {
        // Already past the edge with a velocity too small to get back in:
        // the reflected step overshoots rather than snapping to 0.
        let mut p = particle(-0.05, 50.0, 0.01, 0.0);
        p.step();
        assert_eq!(p.vx, -0.01);
        assert!((p.x + 0.06).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn particles_starting_inside_stay_inside(seed in any::<u64>(), ticks in 1usize..500) {
            let mut field = ParticleField::generate(&mut StdRng::seed_from_u64(seed));
            for _ in 0..ticks {
                field.tick();
            }
            for p in field.particles() {
                prop_assert!((0.0..=100.0).contains(&p.x), "x = {}", p.x);
                prop_assert!((0.0..=100.0).contains(&p.y), "y = {}", p.y);
            }
        }

        #[test]
        fn overshoot_bounded_by_speed(
            x in -MAX_SPEED..=100.0 + MAX_SPEED,
            vx in -MAX_SPEED..=MAX_SPEED,
        ) {
            let mut p = particle(x, 50.0, vx, 0.0);
            p.step();
            prop_assert!(p.x >= -2.0 * MAX_SPEED && p.x <= 100.0 + 2.0 * MAX_SPEED);
            prop_assert_eq!(p.vx.abs(), vx.abs());
        }
    }
}
