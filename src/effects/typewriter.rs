/// Reveals a line of text one character per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((i, _)) => &self.text[..i],
            None => &self.text,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.chars().count()
    }

    /// Shows one more character; returns whether more remain.
    pub fn tick(&mut self) -> bool {
        if !self.is_done() {
            self.shown += 1;
        }
        !self.is_done()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_out_text() {
        let mut typewriter = Typewriter::new("UI/UX");
        assert_eq!(typewriter.visible(), "");
        assert!(typewriter.tick());
        assert_eq!(typewriter.visible(), "U");
        while typewriter.tick() {}
        assert_eq!(typewriter.visible(), "UI/UX");
        assert!(!typewriter.tick());
    }

    #[test]
    fn test_multibyte_characters() {
        let mut typewriter = Typewriter::new("día");
        typewriter.tick();
        typewriter.tick();
        assert_eq!(typewriter.visible(), "dí");
    }
}
