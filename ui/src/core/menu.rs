//! Open/close toggles for the desktop dropdown and the mobile menu.

/// Where a document-level click landed relative to a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Trigger,
    Panel,
    Outside,
}

/// Ids of every menu trigger in the header. A trigger handles its own
/// click, so no menu treats it as an outside click.
pub const MENU_TRIGGERS: &[&str] = &["dropdown-toggle", "hamburger-menu"];

/// Classify a click for the menu whose panel is `panel_id`. `inside`
/// answers whether the click landed within the element with that id.
pub fn classify_click(panel_id: &str, inside: impl Fn(&str) -> bool) -> ClickTarget {
    if MENU_TRIGGERS.iter().any(|id| inside(id)) {
        ClickTarget::Trigger
    } else if inside(panel_id) {
        ClickTarget::Panel
    } else {
        ClickTarget::Outside
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Trigger click.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn document_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Outside {
            self.open = false;
        }
    }

    /// `show` for the panel.
    pub fn panel_class(&self, base: &str) -> String {
        if self.open {
            format!("{base} show")
        } else {
            base.to_string()
        }
    }

    /// `open` for the trigger.
    pub fn trigger_class(&self, base: &str) -> String {
        if self.open {
            format!("{base} open")
        } else {
            base.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_toggles_and_outside_click_closes() {
        let mut menu = MenuToggle::default();
        assert!(menu.toggle());
        menu.document_click(ClickTarget::Panel);
        assert!(menu.is_open());
        menu.document_click(ClickTarget::Outside);
        assert!(!menu.is_open());
        menu.document_click(ClickTarget::Outside);
        assert!(!menu.is_open());
    }

    #[test]
    fn hamburger_click_leaves_open_dropdown_alone() {
        let mut dropdown = MenuToggle::default();
        let mut hamburger = MenuToggle::default();
        dropdown.toggle();

        // The click bubbles to the document listener of both menus.
        let clicked = |id: &str| id == "hamburger-menu";
        hamburger.toggle();
        dropdown.document_click(classify_click("more-links", clicked));
        hamburger.document_click(classify_click("mobile-menu", clicked));

        assert!(dropdown.is_open());
        assert!(hamburger.is_open());
    }

    #[test]
    fn panel_and_outside_clicks_are_told_apart() {
        assert_eq!(
            classify_click("more-links", |id| id == "more-links"),
            ClickTarget::Panel
        );
        assert_eq!(classify_click("more-links", |_| false), ClickTarget::Outside);
        assert_eq!(
            classify_click("mobile-menu", |id| id == "dropdown-toggle"),
            ClickTarget::Trigger
        );
    }

    #[test]
    fn classes_follow_state() {
        let mut menu = MenuToggle::default();
        assert_eq!(menu.panel_class("dropdown-menu"), "dropdown-menu");
        menu.toggle();
        assert_eq!(menu.panel_class("dropdown-menu"), "dropdown-menu show");
        assert_eq!(menu.trigger_class("dropdown-toggle"), "dropdown-toggle open");
    }

    #[test]
    fn two_menus_share_nothing() {
        let mut dropdown = MenuToggle::default();
        let hamburger = MenuToggle::default();
        dropdown.toggle();
        assert!(dropdown.is_open());
        assert!(!hamburger.is_open());
    }
}
