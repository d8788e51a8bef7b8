//! One-shot scroll reveal bookkeeping.

use std::collections::HashSet;

/// Class names whose elements animate in when first scrolled into view.
pub const REVEAL_SELECTORS: &[&str] = &[
    ".timeline-item",
    ".feature-card",
    ".service-block",
    ".contact-info-item",
    ".uxui-feature-item",
    ".process-steps li",
    ".feature-section",
    ".how-steps li",
    ".portfolio-item",
    ".portfolio-item-section",
    ".slide-left",
    ".slide-right",
];

/// Classes added on reveal.
pub const REVEALED_CLASSES: &str = "visible revealed";

/// Elements under observation and those already revealed. An element moves
/// from the first set to the second at most once.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    next_id: usize,
    watching: HashSet<String>,
    revealed: HashSet<String>,
}

impl RevealSet {
    /// Id for an element found by a selector scan. Elements that already
    /// carry an id matched an earlier selector and are not claimed again;
    /// `None` means there is nothing new to observe.
    pub fn claim(&mut self, existing: Option<&str>) -> Option<String> {
        if existing.is_some() {
            return None;
        }
        let id = format!("reveal-{}", self.next_id);
        self.next_id += 1;
        self.register(id.clone()).then_some(id)
    }

    pub fn watching(&self) -> usize {
        self.watching.len()
    }

    /// Start watching `id`; already revealed elements are not re-observed.
    pub fn register(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.revealed.contains(&id) {
            return false;
        }
        self.watching.insert(id)
    }

    /// Intersection report. Returns `true` when the element is revealed by
    /// this report, telling the caller to unobserve it.
    pub fn observe(&mut self, id: &str, is_intersecting: bool) -> bool {
        if !is_intersecting || !self.watching.remove(id) {
            return false;
        }
        self.revealed.insert(id.to_string());
        true
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn is_watching(&self, id: &str) -> bool {
        self.watching.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_and_stops_watching() {
        let mut set = RevealSet::default();
        assert!(set.register("card-1"));
        assert!(!set.observe("card-1", false));
        assert!(set.observe("card-1", true));
        assert!(set.is_revealed("card-1"));
        assert!(!set.is_watching("card-1"));
        assert!(!set.observe("card-1", true));
    }

    #[test]
    fn never_reverts_on_later_scrolling() {
        let mut set = RevealSet::default();
        set.register("step");
        set.observe("step", true);
        for visible in [false, true, false] {
            set.observe("step", visible);
            assert!(set.is_revealed("step"));
        }
        assert!(!set.register("step"));
    }

    #[test]
    fn unregistered_elements_are_ignored() {
        let mut set = RevealSet::default();
        assert!(!set.observe("ghost", true));
        assert!(!set.is_revealed("ghost"));
    }

    #[test]
    fn element_matching_two_selectors_is_claimed_once() {
        let mut set = RevealSet::default();
        // `.service-block.slide-left` is found by both scans.
        let id = set.claim(None).unwrap();
        assert_eq!(set.claim(Some(&id)), None);
        assert_eq!(set.watching(), 1);

        assert!(set.observe(&id, true));
        assert_eq!(set.watching(), 0);
    }

    #[test]
    fn claimed_ids_are_distinct() {
        let mut set = RevealSet::default();
        let a = set.claim(None).unwrap();
        let b = set.claim(None).unwrap();
        assert_ne!(a, b);
        assert_eq!(set.watching(), 2);
    }

    #[test]
    fn selectors_cover_the_portfolio_section() {
        assert!(REVEAL_SELECTORS.contains(&".portfolio-item-section"));
        assert_eq!(REVEAL_SELECTORS.len(), 12);
    }
}
