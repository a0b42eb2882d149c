use fastrand::Rng;

use super::Viewport;

const COLORS: [&str; 6] = [
    "#ef4444", "#f97316", "#facc15", "#22c55e", "#3b82f6", "#a855f7",
];
const GRAVITY: f64 = 0.0006;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub rotation: f64,
    pub spin: f64,
    pub color: &'static str,
    pub age_ms: f64,
}

#[derive(Debug)]
pub struct Confetti {
    pieces: Vec<Piece>,
    viewport: Viewport,
    ttl_ms: f64,
    rng: Rng,
}

impl Confetti {
    pub fn new(viewport: Viewport, ttl_ms: f64, seed: u64) -> Self {
        Self {
            pieces: Vec::new(),
            viewport,
            ttl_ms,
            rng: Rng::with_seed(seed),
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn is_idle(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Fires `count` pieces upward from the bottom centre of the viewport.
    pub fn burst(&mut self, count: usize) {
        let origin_x = self.viewport.width / 2.0;
        let origin_y = self.viewport.height;
        let rng = &mut self.rng;
        self.pieces.extend((0..count).map(|_| Piece {
            x: origin_x,
            y: origin_y,
            vx: (rng.f64() - 0.5) * 0.9,
            vy: -(0.5 + rng.f64() * 0.7),
            rotation: rng.f64() * std::f64::consts::TAU,
            spin: (rng.f64() - 0.5) * 0.02,
            color: COLORS[rng.usize(..COLORS.len())],
            age_ms: 0.0,
        }));
    }

    /// Moves pieces and drops the ones that are too old or fell out of view.
    pub fn step(&mut self, dt_ms: f64) {
        let viewport = self.viewport;
        let ttl_ms = self.ttl_ms;
        for p in &mut self.pieces {
            p.vy += GRAVITY * dt_ms;
            p.x += p.vx * dt_ms;
            p.y += p.vy * dt_ms;
            p.rotation += p.spin * dt_ms;
            p.age_ms += dt_ms;
        }
        self.pieces.retain(|p| {
            p.age_ms < ttl_ms && p.y <= viewport.height && (0.0..=viewport.width).contains(&p.x)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_then_expire() {
        let mut confetti = Confetti::new(Viewport::new(800.0, 600.0), 1000.0, 9);
        assert!(confetti.is_idle());
        confetti.burst(50);
        assert_eq!(confetti.pieces().len(), 50);
        confetti.step(16.0);
        assert!(!confetti.is_idle());
        for _ in 0..100 {
            confetti.step(16.0);
        }
        assert!(confetti.is_idle());
    }

    #[test]
    fn test_pieces_leaving_view_are_pruned() {
        let mut confetti = Confetti::new(Viewport::new(10.0, 10.0), 60_000.0, 2);
        confetti.burst(20);
        for _ in 0..600 {
            confetti.step(16.0);
        }
        assert!(confetti.is_idle());
    }
}
