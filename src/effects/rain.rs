use fastrand::Rng;

use super::Viewport;

const GLYPHS: &[char] = &[
    '0', '1', '{', '}', '<', '>', '/', ';', '=', '+', '*', 'λ', 'ア', 'カ', 'サ', 'タ', 'ナ', 'ハ',
];

/// Falling-glyph columns for the code rain canvas.
#[derive(Debug)]
pub struct CodeRain {
    drops: Vec<f64>,
    column_width: f64,
    height: f64,
    rng: Rng,
}

impl CodeRain {
    pub fn new(viewport: Viewport, column_width: f64, seed: u64) -> Self {
        let mut rain = Self {
            drops: Vec::new(),
            column_width,
            height: viewport.height,
            rng: Rng::with_seed(seed),
        };
        rain.resize(viewport);
        rain
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Row index of each column's leading glyph.
    pub fn drops(&self) -> &[f64] {
        &self.drops
    }

    pub fn resize(&mut self, viewport: Viewport) {
        let columns = (viewport.width / self.column_width).floor().max(0.0) as usize;
        let rows = self.rows_for(viewport.height);
        self.height = viewport.height;
        let rng = &mut self.rng;
        self.drops.resize_with(columns, || -(rng.f64() * rows));
    }

    fn rows_for(&self, height: f64) -> f64 {
        (height / self.column_width).ceil()
    }

    /// Advances every drop one row. Drops that have left the bottom restart
    /// at the top after a random pause.
    pub fn step(&mut self) {
        let rows = self.rows_for(self.height);
        for drop in &mut self.drops {
            *drop += 1.0;
            if *drop > rows && self.rng.f64() > 0.975 {
                *drop = 0.0;
            }
        }
    }

    pub fn glyph(&mut self) -> char {
        GLYPHS[self.rng.usize(..GLYPHS.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_drop_per_column() {
        let rain = CodeRain::new(Viewport::new(160.0, 100.0), 16.0, 1);
        assert_eq!(rain.columns(), 10);
        assert!(rain.drops().iter().all(|d| *d <= 0.0));
    }

    #[test]
    fn test_drops_wrap_back_to_top() {
        let mut rain = CodeRain::new(Viewport::new(64.0, 64.0), 16.0, 3);
        let mut wrapped = false;
        for _ in 0..2_000 {
            let before = rain.drops().to_vec();
            rain.step();
            wrapped |= rain
                .drops()
                .iter()
                .zip(before.iter())
                .any(|(after, before)| after < before);
        }
        assert!(wrapped);
    }

    #[test]
    fn test_resize_changes_columns() {
        let mut rain = CodeRain::new(Viewport::new(64.0, 64.0), 16.0, 3);
        rain.resize(Viewport::new(320.0, 64.0));
        assert_eq!(rain.columns(), 20);
        rain.resize(Viewport::new(0.0, 64.0));
        assert_eq!(rain.columns(), 0);
    }
}
