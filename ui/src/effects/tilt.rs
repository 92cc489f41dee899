use std::collections::HashMap;
use std::sync::Arc;

use symptom_core::TiltConfig;
use tracing::debug;

use crate::view::{Card, Rect, StyledElement};

/// Rotation and glare for one pointer position over a card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltFrame {
    /// Degrees around the horizontal axis; positive tips the top edge away.
    pub rotate_x: f64,
    /// Degrees around the vertical axis; positive tips the right edge away.
    pub rotate_y: f64,
    /// Pointer position inside the card, in percent.
    pub glare_x: f64,
    pub glare_y: f64,
    /// 1.0 at the centre, falling off towards the edges, never below 0.
    pub glare_intensity: f64,
}

/// Maps a page-space pointer position onto a card's tilt.
///
/// Returns `None` for a card with no area.
pub fn tilt_frame(rect: Rect, pointer_x: f64, pointer_y: f64, config: &TiltConfig) -> Option<TiltFrame> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }

    let nx = ((pointer_x - rect.left) / rect.width).clamp(0.0, 1.0);
    let ny = ((pointer_y - rect.top) / rect.height).clamp(0.0, 1.0);

    let span = config.max_rotation_deg * 2.0;
    let rotate_y = (nx - 0.5) * span;
    let rotate_x = (0.5 - ny) * span;

    let distance = (nx - 0.5).hypot(ny - 0.5);
    let glare_intensity = (1.0 - distance * config.glare_falloff).clamp(0.0, 1.0);

    Some(TiltFrame {
        rotate_x,
        rotate_y,
        glare_x: nx * 100.0,
        glare_y: ny * 100.0,
        glare_intensity,
    })
}

/// Interactive-card behaviour: tilts attached cards under the pointer and
/// eases them back when it leaves.
pub struct TiltController {
    config: TiltConfig,
    cards: HashMap<String, Arc<dyn Card>>,
}

impl TiltController {
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            cards: HashMap::new(),
        }
    }

    /// Starts tracking `card`. A card already attached is left alone and
    /// `false` is returned.
    pub fn attach(&mut self, card: Arc<dyn Card>) -> bool {
        let id = card.id().to_string();
        if self.cards.contains_key(&id) {
            debug!(card = %id, "Tilt already attached");
            return false;
        }
        card.set_style("transform-style", "preserve-3d");
        card.set_style("will-change", "transform");
        self.cards.insert(id, card);
        true
    }

    pub fn is_attached(&self, id: &str) -> bool {
        self.cards.contains_key(id)
    }

    pub fn pointer_move(&self, id: &str, pointer_x: f64, pointer_y: f64) -> Option<TiltFrame> {
        let card = self.cards.get(id)?;
        let frame = tilt_frame(card.bounding_rect(), pointer_x, pointer_y, &self.config)?;

        card.set_style("transition", "transform 0.1s ease-out");
        card.set_style(
            "transform",
            &self.transform(frame.rotate_x, frame.rotate_y, self.config.hover_scale),
        );
        card.set_style("--glare-x", &format!("{:.2}%", frame.glare_x));
        card.set_style("--glare-y", &format!("{:.2}%", frame.glare_y));
        card.set_style("--glare-opacity", &format!("{:.3}", frame.glare_intensity));
        Some(frame)
    }

    /// Eases the card back to rest. Returns `false` for an unknown card.
    pub fn pointer_leave(&self, id: &str) -> bool {
        let Some(card) = self.cards.get(id) else {
            return false;
        };
        card.set_style("transition", "transform 0.5s ease");
        card.set_style("transform", &self.transform(0.0, 0.0, 1.0));
        card.set_style("--glare-opacity", "0");
        true
    }

    fn transform(&self, rotate_x: f64, rotate_y: f64, scale: f64) -> String {
        format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({s}, {s}, {s})",
            self.config.perspective_px,
            rotate_x,
            rotate_y,
            s = scale
        )
    }
}
