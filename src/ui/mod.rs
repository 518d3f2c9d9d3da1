//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer implements the presentation side of the carousel: the style
//! store the slider writes into, and the widgets that turn it into cells.

pub mod deck_widget;
pub mod eased;
pub mod indicator;
pub mod layout;
pub mod stage;
pub mod theme;
