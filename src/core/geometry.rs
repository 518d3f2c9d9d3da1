//! Geometry captured once when a drag begins.

use super::stage::Stage;

/// Viewport and card widths at drag start, plus the parallax ratio
/// derived from them.  Held for the whole drag; never recomputed mid-gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub viewport_width: f64,
    pub card_width: f64,
    /// `viewport_width / (card_width / 4)`.
    pub ratio: f64,
}

impl Geometry {
    pub fn new(viewport_width: f64, card_width: f64) -> Self {
        // A zero card width gives an infinite ratio and every parallax
        // offset collapses to 0.
        Self {
            viewport_width,
            card_width,
            ratio: viewport_width / (card_width / 4.0),
        }
    }

    /// Read the current widths from the stage for the active card.
    pub fn sample(stage: &dyn Stage, active: usize) -> Self {
        Self::new(stage.viewport_width(), stage.card_width(active))
    }

    /// Largest distance a card may be dragged from centre, and the
    /// threshold a release must exceed to commit.
    pub fn drag_limit(&self) -> f64 {
        self.viewport_width / 4.0
    }
}
