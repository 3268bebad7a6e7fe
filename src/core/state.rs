//! Small UI state machines shared by the landing page sections.
//!
//! These hold no references to the DOM so they can be unit tested and kept
//! inside signals by the components that own them.

/// Bounded index that wraps around at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jumps to `index`. Out-of-range targets are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }
}

/// Accordion where at most one item is expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opens `index`, or closes it when it is already the open item.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

/// Playback state of the interactive product demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoPlayback {
    pub playing: bool,
    pub muted: bool,
    pub show_controls: bool,
    steps: Carousel,
}

impl DemoPlayback {
    pub fn new(step_count: usize) -> Self {
        Self {
            playing: false,
            muted: false,
            show_controls: true,
            steps: Carousel::new(step_count),
        }
    }

    pub fn step(&self) -> usize {
        self.steps.index()
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn toggle_controls(&mut self) {
        self.show_controls = !self.show_controls;
    }

    /// Moves to the next step, wrapping to the first after the last.
    pub fn advance(&mut self) {
        self.steps.next();
    }

    pub fn go_to(&mut self, step: usize) -> bool {
        self.steps.go_to(step)
    }

    /// Back to the first step, paused.
    pub fn reset(&mut self) {
        self.steps.reset();
        self.playing = false;
    }

    /// Share of steps reached so far, counting the current one.
    pub fn progress_percent(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        (self.step() + 1) as f64 / self.step_count() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_wraps_forward() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_carousel_wraps_backward() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
        carousel.prev();
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_carousel_go_to() {
        let mut carousel = Carousel::new(4);

        assert!(carousel.go_to(3));
        assert!(carousel.is_active(3));

        assert!(!carousel.go_to(4));
        assert_eq!(carousel.index(), 3);

        carousel.reset();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_empty_carousel_stays_at_zero() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        assert!(carousel.is_empty());
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.go_to(0));
    }

    #[test]
    fn test_accordion_toggle() {
        let mut faq = Accordion::default();
        assert_eq!(faq.open_index(), None);

        faq.toggle(2);
        assert!(faq.is_open(2));

        faq.toggle(4);
        assert!(faq.is_open(4));
        assert!(!faq.is_open(2));

        faq.toggle(4);
        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn test_demo_playback_toggles() {
        let mut demo = DemoPlayback::new(4);
        assert!(!demo.playing);
        assert!(!demo.muted);
        assert!(demo.show_controls);

        demo.toggle_play();
        demo.toggle_mute();
        demo.toggle_controls();

        assert!(demo.playing);
        assert!(demo.muted);
        assert!(!demo.show_controls);
    }

    #[test]
    fn test_demo_playback_advance_and_reset() {
        let mut demo = DemoPlayback::new(4);
        demo.toggle_play();

        for _ in 0..5 {
            demo.advance();
        }
        assert_eq!(demo.step(), 1);

        demo.reset();
        assert_eq!(demo.step(), 0);
        assert!(!demo.playing);
    }

    #[test]
    fn test_demo_progress() {
        let mut demo = DemoPlayback::new(4);
        assert_eq!(demo.progress_percent(), 25.0);

        demo.go_to(3);
        assert_eq!(demo.progress_percent(), 100.0);

        assert_eq!(DemoPlayback::new(0).progress_percent(), 0.0);
    }
}
