//! Header styling driven by scroll position.

use crate::core::config::HeaderConfig;

/// Layout measurements taken in one animation frame. Section tops are
/// viewport-relative; the footer offset is document-relative. Absent
/// sections are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub header_height: f64,
    pub footer_offset: Option<f64>,
    pub cta_top: Option<f64>,
    pub newsletter_top: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderState {
    pub scrolled: bool,
    pub hidden: bool,
}

impl HeaderState {
    pub fn header_class(&self) -> String {
        let mut class = String::from("site-header");
        if self.scrolled {
            class.push_str(" scrolled");
        }
        if self.hidden {
            class.push_str(" header-hidden");
        }
        class
    }

    pub fn nav_class(&self) -> &'static str {
        if self.scrolled {
            "nav-links scrolled"
        } else {
            "nav-links"
        }
    }
}

/// Each present check assigns `hidden` outright, so the last present one
/// decides: footer, then call-to-action, then newsletter.
pub fn compute(metrics: &ScrollMetrics, config: &HeaderConfig) -> HeaderState {
    let mut state = HeaderState {
        scrolled: metrics.scroll_y > config.scrolled_threshold_px,
        hidden: false,
    };

    if let Some(footer) = metrics.footer_offset {
        state.hidden =
            metrics.scroll_y + metrics.viewport_height >= footer - metrics.header_height;
    }
    let near = |top: f64| top < metrics.header_height + config.section_margin_px;
    if let Some(top) = metrics.cta_top {
        state.hidden = near(top);
    }
    if let Some(top) = metrics.newsletter_top {
        state.hidden = near(top);
    }

    state
}

/// Startup and scroll-frame update. Until the header is mounted there is
/// nothing to measure and the current state stands.
pub fn refresh(
    current: HeaderState,
    metrics: Option<ScrollMetrics>,
    config: &HeaderConfig,
) -> HeaderState {
    metrics.map_or(current, |m| compute(&m, config))
}

/// At most one pending recomputation per rendered frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// `true` if the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }
}
