use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub born_ms: f64,
}

impl TrailPoint {
    /// 1.0 when fresh, fading to 0.0 at the trail's time to live.
    pub fn opacity(&self, now_ms: f64, ttl_ms: f64) -> f64 {
        (1.0 - (now_ms - self.born_ms) / ttl_ms).clamp(0.0, 1.0)
    }
}

/// The last few pointer positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
    capacity: usize,
    ttl_ms: f64,
}

impl Trail {
    pub fn new(capacity: usize, ttl_ms: f64) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
            ttl_ms,
        }
    }

    pub fn push(&mut self, x: f64, y: f64, now_ms: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(TrailPoint {
            x,
            y,
            born_ms: now_ms,
        });
    }

    pub fn prune(&mut self, now_ms: f64) {
        while self
            .points
            .front()
            .is_some_and(|p| now_ms - p.born_ms >= self.ttl_ms)
        {
            self.points.pop_front();
        }
    }

    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn head(&self) -> Option<&TrailPoint> {
        self.points.back()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn ttl_ms(&self) -> f64 {
        self.ttl_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_is_bounded() {
        let mut trail = Trail::new(3, 1000.0);
        for i in 0..10 {
            trail.push(i as f64, 0.0, i as f64);
        }
        assert_eq!(trail.len(), 3);
        let xs = trail.points().map(|p| p.x).collect::<Vec<_>>();
        assert_eq!(xs, vec![7.0, 8.0, 9.0]);
        assert_eq!(trail.head().map(|p| p.x), Some(9.0));
    }

    #[test]
    fn test_points_expire_by_age() {
        let mut trail = Trail::new(10, 100.0);
        trail.push(0.0, 0.0, 0.0);
        trail.push(1.0, 1.0, 50.0);
        trail.prune(120.0);
        assert_eq!(trail.len(), 1);
        trail.prune(150.0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_opacity_fades() {
        let point = TrailPoint {
            x: 0.0,
            y: 0.0,
            born_ms: 0.0,
        };
        assert_eq!(point.opacity(0.0, 100.0), 1.0);
        assert_eq!(point.opacity(50.0, 100.0), 0.5);
        assert_eq!(point.opacity(200.0, 100.0), 0.0);
    }
}
