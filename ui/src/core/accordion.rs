//! Expand/collapse state for the FAQ list and the pricing cards.

/// One FAQ answer panel. `hidden` trails `expanded` on collapse by the
/// stylesheet's transition delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    expanded: bool,
    hidden: bool,
    generation: u64,
    height: Option<f64>,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            expanded: false,
            hidden: true,
            generation: 0,
            height: None,
        }
    }
}

impl Panel {
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// Flip the panel. On collapse, returns the token to pass to
    /// [`Panel::settle`] once the delay elapses.
    ///
    /// `measure` runs only when opening, while the answer still sits at
    /// zero height, and must report its natural height.
    pub fn toggle(&mut self, measure: impl FnOnce() -> Option<f64>) -> Option<u64> {
        self.generation += 1;
        if self.expanded {
            self.expanded = false;
            Some(self.generation)
        } else {
            self.expanded = true;
            self.hidden = false;
            self.height = measure();
            None
        }
    }

    /// Hide after the collapse transition, unless re-toggled meanwhile.
    pub fn settle(&mut self, token: u64) {
        if token == self.generation && !self.expanded {
            self.hidden = true;
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }

    pub fn icon_class(&self) -> &'static str {
        if self.expanded {
            "fa-chevron-up"
        } else {
            "fa-chevron-down"
        }
    }

    /// Inline style: measured height when open, zero when closed.
    pub fn style(&self) -> String {
        if self.expanded {
            match self.height {
                Some(h) => format!("max-height: {h}px; opacity: 1;"),
                None => "max-height: none; opacity: 1;".to_string(),
            }
        } else {
            "max-height: 0; opacity: 0;".to_string()
        }
    }
}

/// Group where expanding one member collapses every other.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExclusiveGroup {
    expanded: Option<usize>,
    height: Option<f64>,
}

impl ExclusiveGroup {
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Open height of `index`, measured when that card opened.
    pub fn height(&self, index: usize) -> Option<f64> {
        if self.is_expanded(index) {
            self.height
        } else {
            None
        }
    }

    /// The clicked card's own state decides: open cards close, closed cards
    /// open and take the slot from whichever card held it. `measure` runs
    /// only for the card being opened.
    pub fn toggle(&mut self, index: usize, measure: impl FnOnce(usize) -> Option<f64>) -> bool {
        if self.is_expanded(index) {
            self.expanded = None;
            self.height = None;
            false
        } else {
            self.expanded = Some(index);
            self.height = measure(index);
            true
        }
    }
}
