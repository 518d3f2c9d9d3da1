//! Layout helpers: split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: the card stage, the indicator row, and a bottom
/// status bar.
pub struct AppLayout {
    pub deck_area: Rect,
    pub indicator_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // card stage (takes all remaining space)
                Constraint::Length(1), // position indicator
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            deck_area: chunks[0],
            indicator_area: chunks[1],
            status_area: chunks[2],
        }
    }
}
