//! Central application state.
//!
//! All mutable state lives here so that rendering reads `&AppState` and event
//! handling mutates `&mut AppState`.

use crate::config::AppConfig;
use crate::core::deck::Deck;
use crate::core::slider::Slider;
use crate::ui::stage::TerminalStage;

use super::timer::TokioScheduler;

/// The slider as wired into the terminal front-end.
pub type DeckSlider = Slider<TerminalStage, TokioScheduler>;

/// Top-level application state.
pub struct AppState {
    /// The one carousel bound to this terminal.
    pub slider: DeckSlider,
    /// User configuration.
    pub config: AppConfig,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(deck: Deck, width: u16, scheduler: TokioScheduler, config: AppConfig) -> Self {
        let stage = TerminalStage::new(&deck, width, config.card_width_pct, config.frame());
        let slider = Slider::new(
            deck,
            stage,
            scheduler,
            config.palette.clone(),
            config.timing(),
        );
        Self {
            slider,
            config,
            should_quit: false,
            status_message: None,
        }
    }

    pub fn status_bar_hint(&self) -> String {
        format!(
            "drag cards left/right | card {}/{} | q: quit",
            self.slider.current_index() + 1,
            self.slider.deck().len()
        )
    }
}
