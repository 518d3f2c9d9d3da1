//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

use crate::core::palette::Swatch;

/// Central theme.  Change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    pub fn color(swatch: Swatch) -> Color {
        Color::Rgb(swatch.r, swatch.g, swatch.b)
    }

    // ── stage ──────────────────────────────────────────────────
    /// Page background for the active card; unstyled when the palette has
    /// no entry for it.
    pub fn background_style(swatch: Option<Swatch>) -> Style {
        match swatch {
            Some(s) => Style::default().bg(Self::color(s)),
            None => Style::default(),
        }
    }

    pub fn card_style() -> Style {
        Style::default().bg(Color::White).fg(Color::Black)
    }

    pub fn card_border_style() -> Style {
        Style::default().bg(Color::White).fg(Color::DarkGray)
    }

    pub fn logo_style() -> Style {
        Self::card_style().add_modifier(Modifier::BOLD)
    }

    pub fn price_style() -> Style {
        Self::card_style().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    }

    pub fn title_style() -> Style {
        Self::card_style().add_modifier(Modifier::BOLD)
    }

    pub fn subtitle_style() -> Style {
        Self::card_style().fg(Color::DarkGray)
    }

    pub fn image_style() -> Style {
        Self::card_style().fg(Color::Blue)
    }

    pub fn wish_list_style() -> Style {
        Self::card_style().fg(Color::Red)
    }

    pub fn category_style() -> Style {
        Self::card_style()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn marker_style(active: bool) -> Style {
        if active {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
