//! Position indicator and background colour tied to the current index.

use super::palette::Palette;
use super::stage::Stage;

/// Single writer of the indicator markers and the background colour.
#[derive(Debug, Clone)]
pub struct IndicatorSync {
    palette: Palette,
    active: Option<usize>,
}

impl IndicatorSync {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            active: None,
        }
    }

    /// Marker currently shown as active.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Move the active marker to `index` and repaint the background.
    /// Markers or colours missing for `index` are skipped silently.
    pub fn sync(&mut self, stage: &mut dyn Stage, index: usize) {
        if let Some(prev) = self.active.take() {
            stage.set_marker_active(prev, false);
        }
        if index < stage.marker_count() {
            stage.set_marker_active(index, true);
            self.active = Some(index);
        }
        stage.set_background(self.palette.get(index));
    }
}
