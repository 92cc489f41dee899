use symptom_core::UiConfig;
use tracing::debug;

/// Page state the anchor scroller reads and drives
pub trait ScrollHost {
    /// Current vertical scroll offset of the page
    fn scroll_y(&self) -> f64;
    /// Rendered height of the header, 0 when there is none
    fn header_height(&self) -> f64;
    /// Viewport-relative top of the element with `id`, if it exists
    fn element_top(&self, id: &str) -> Option<f64>;
    fn smooth_scroll_to(&self, top: f64);
    /// Updates the URL fragment without navigating
    fn push_fragment(&self, fragment: &str);
}

/// Replaces jump-to-anchor with a smooth scroll that clears the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorScroller {
    gutter_px: f64,
}

impl Default for AnchorScroller {
    fn default() -> Self {
        Self::new(8.0)
    }
}

impl AnchorScroller {
    pub fn new(gutter_px: f64) -> Self {
        Self { gutter_px }
    }

    pub fn from_config(config: &UiConfig) -> Self {
        Self::new(config.scroll_gutter_px)
    }

    /// Scroll offset that puts the element whose viewport top is
    /// `element_top` just below the header.
    pub fn destination(&self, element_top: f64, scroll_y: f64, header_height: f64) -> f64 {
        (element_top + scroll_y - header_height - self.gutter_px).max(0.0)
    }

    /// Handles a click on a link with `href`. Returns `true` when the click
    /// was taken over and the default navigation should be suppressed.
    pub fn handle_click(&self, href: &str, host: &dyn ScrollHost) -> bool {
        let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
            return false;
        };
        let Some(top) = host.element_top(id) else {
            debug!(target_id = id, "Anchor target not found");
            return false;
        };

        let destination = self.destination(top, host.scroll_y(), host.header_height());
        host.smooth_scroll_to(destination);
        host.push_fragment(href);
        true
    }
}
