use crate::config::HEADER_SCROLLED_PX;

/// How far down the page the reader is, in percent. Pages that fit in the
/// viewport report 0.
pub fn scroll_progress(scroll_top: f64, doc_height: f64, viewport_height: f64) -> f64 {
    let scrollable = doc_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn is_scrolled(scroll_top: f64) -> bool {
    scroll_top > HEADER_SCROLLED_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 100.0);
        // overscroll bounce on mobile
        assert_eq!(scroll_progress(1100.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_short_page_has_no_progress() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
    }
}
