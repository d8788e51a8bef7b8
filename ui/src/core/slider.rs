//! Index-based sliders: the portfolio track and the image gallery.

/// Which way a slider moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

/// Wraparound index in `[0, count)`. An empty slider stays at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    index: usize,
    count: usize,
}

impl Slider {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Index one step away, wrapped.
    pub fn peek(&self, step: Step) -> usize {
        if self.count == 0 {
            return 0;
        }
        match step {
            Step::Next => (self.index + 1) % self.count,
            Step::Prev => (self.index + self.count - 1) % self.count,
        }
    }

    pub fn step(&mut self, step: Step) -> usize {
        self.index = self.peek(step);
        self.index
    }

    /// Track transform for the current slide.
    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }
}

/// Horizontal swipe detection for touch input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold_px: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            start_x: None,
        }
    }

    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// A leftward swipe shows the next slide; short drags are ignored.
    pub fn end(&mut self, x: f64) -> Option<Step> {
        let start = self.start_x.take()?;
        let delta = x - start;
        if delta.abs() <= self.threshold_px {
            return None;
        }
        Some(if delta < 0.0 { Step::Next } else { Step::Prev })
    }
}

/// CSS class applied to both images while the gallery transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToLeft,
    ToRight,
}

impl Direction {
    pub fn class(self) -> &'static str {
        match self {
            Direction::ToLeft => "to_left",
            Direction::ToRight => "to_right",
        }
    }

    /// The left arrow plays `to_right` and the right arrow `to_left`; the
    /// stylesheet is written against this pairing.
    pub fn for_arrow(step: Step) -> Self {
        match step {
            Step::Prev => Direction::ToRight,
            Step::Next => Direction::ToLeft,
        }
    }
}

/// One arrow click worth of gallery transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub id: u64,
    pub incoming: usize,
    pub outgoing: usize,
    pub direction: Direction,
}

/// Gallery with a stored active index. The outgoing image keeps its active
/// and direction classes until [`Gallery::finish`] runs for its transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    slider: Slider,
    next_id: u64,
    leaving: Vec<Transition>,
}

impl Gallery {
    pub fn new(count: usize) -> Self {
        Self {
            slider: Slider::new(count),
            next_id: 0,
            leaving: Vec::new(),
        }
    }

    pub fn active(&self) -> usize {
        self.slider.index()
    }

    pub fn count(&self) -> usize {
        self.slider.count()
    }

    pub fn arrow(&mut self, step: Step) -> Option<Transition> {
        if self.slider.count() < 2 {
            return None;
        }
        let outgoing = self.slider.index();
        let incoming = self.slider.step(step);
        self.next_id += 1;
        let transition = Transition {
            id: self.next_id,
            incoming,
            outgoing,
            direction: Direction::for_arrow(step),
        };
        self.leaving.push(transition);
        Some(transition)
    }

    /// Cleanup after the transition delay. Only the image this transition
    /// moved out is released.
    pub fn finish(&mut self, id: u64) {
        self.leaving.retain(|t| t.id != id);
    }

    /// Classes for image `index` in render order.
    pub fn classes(&self, index: usize) -> String {
        let mut classes = Vec::new();
        let leaving = self
            .leaving
            .iter()
            .rev()
            .find(|t| t.outgoing == index && index != self.active());
        if index == self.active() || leaving.is_some() {
            classes.push("active");
        }
        if let Some(t) = leaving {
            classes.push(t.direction.class());
        }
        classes.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut slider = Slider::new(4);
        slider.step(Step::Next);
        slider.step(Step::Next);
        assert_eq!(slider.index(), 2);
        assert_eq!(slider.step(Step::Next), 3);
        assert_eq!(slider.step(Step::Next), 0);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let mut slider = Slider::new(4);
        assert_eq!(slider.step(Step::Prev), 3);
        assert_eq!(slider.transform(), "translateX(-300%)");
    }

    #[test]
    fn index_stays_in_range_for_any_sequence() {
        let mut slider = Slider::new(3);
        for i in 0..50 {
            if i % 3 == 0 {
                slider.step(Step::Prev);
            } else {
                slider.step(Step::Next);
            }
            assert!(slider.index() < slider.count());
        }
    }

    #[test]
    fn empty_slider_does_not_panic() {
        let mut slider = Slider::new(0);
        assert_eq!(slider.step(Step::Next), 0);
        assert_eq!(slider.step(Step::Prev), 0);
    }

    #[test]
    fn swipe_needs_more_than_threshold() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.start(200.0);
        assert_eq!(swipe.end(150.0), None);
        swipe.start(200.0);
        assert_eq!(swipe.end(149.0), Some(Step::Next));
        swipe.start(100.0);
        assert_eq!(swipe.end(160.0), Some(Step::Prev));
        assert_eq!(swipe.end(0.0), None, "end without start is ignored");
    }

    #[test]
    fn arrows_map_to_inverted_direction_classes() {
        let mut gallery = Gallery::new(3);
        let left = gallery.arrow(Step::Prev).unwrap();
        assert_eq!(left.incoming, 2);
        assert_eq!(left.direction.class(), "to_right");
        let right = gallery.arrow(Step::Next).unwrap();
        assert_eq!(right.incoming, 0);
        assert_eq!(right.direction.class(), "to_left");
    }

    #[test]
    fn outgoing_image_keeps_classes_until_cleanup() {
        let mut gallery = Gallery::new(3);
        let t = gallery.arrow(Step::Next).unwrap();
        assert_eq!(gallery.classes(1), "active");
        assert_eq!(gallery.classes(0), "active to_left");
        assert_eq!(gallery.classes(2), "");
        gallery.finish(t.id);
        assert_eq!(gallery.classes(0), "");
    }

    #[test]
    fn stale_cleanup_leaves_newer_transition_alone() {
        let mut gallery = Gallery::new(3);
        let first = gallery.arrow(Step::Next).unwrap();
        let _second = gallery.arrow(Step::Next).unwrap();
        gallery.finish(first.id);
        assert_eq!(gallery.active(), 2);
        assert_eq!(gallery.classes(1), "active to_left");
        assert_eq!(gallery.classes(0), "");
    }

    #[test]
    fn returning_image_is_not_marked_leaving() {
        let mut gallery = Gallery::new(2);
        gallery.arrow(Step::Next);
        gallery.arrow(Step::Prev);
        assert_eq!(gallery.active(), 0);
        assert_eq!(gallery.classes(0), "active");
        assert_eq!(gallery.classes(1), "active to_right");
    }
}
