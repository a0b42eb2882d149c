use fastrand::Rng;

use super::Viewport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub opacity: f64,
}

/// A fixed number of slowly drifting dots. Dots that drift out of the
/// viewport come back in from the opposite edge.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
    rng: Rng,
}

impl ParticleField {
    pub fn new(count: usize, viewport: Viewport, seed: u64) -> Self {
        let mut rng = Rng::with_seed(seed);
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.f64() * viewport.width,
                y: rng.f64() * viewport.height,
                vx: (rng.f64() - 0.5) * 0.06,
                vy: -(0.01 + rng.f64() * 0.04),
                size: 1.0 + rng.f64() * 2.0,
                opacity: 0.2 + rng.f64() * 0.5,
            })
            .collect();
        Self {
            particles,
            viewport,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Moves every particle by `dt_ms` worth of velocity.
    pub fn step(&mut self, dt_ms: f64) {
        let Viewport { width, height } = self.viewport;
        for p in &mut self.particles {
            p.x += p.vx * dt_ms;
            p.y += p.vy * dt_ms;
            if !self.viewport.contains(p.x, p.y) {
                if p.y < 0.0 {
                    p.y = height;
                    p.x = self.rng.f64() * width;
                } else if p.y > height {
                    p.y = 0.0;
                } else if p.x < 0.0 {
                    p.x = width;
                } else {
                    p.x = 0.0;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particles_stay_in_viewport() {
        let viewport = Viewport::new(200.0, 100.0);
        let mut field = ParticleField::new(25, viewport, 7);
        assert_eq!(field.particles().len(), 25);
        for _ in 0..2_000 {
            field.step(16.0);
            assert!(field.particles().iter().all(|p| viewport.contains(p.x, p.y)));
        }
        assert_eq!(field.particles().len(), 25);
    }

    #[test]
    fn test_same_seed_same_field() {
        let viewport = Viewport::new(50.0, 50.0);
        let a = ParticleField::new(5, viewport, 42);
        let b = ParticleField::new(5, viewport, 42);
        assert_eq!(a.particles(), b.particles());
    }
}
