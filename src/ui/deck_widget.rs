//! Renders the cards at the columns the stage computed.
//!
//! Each card is a white box; its parts are drawn at fixed slots inside the
//! box, shifted by their own parallax offset and clipped to the box.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::core::deck::{Card, Deck, Role};

use super::stage::TerminalStage;
use super::theme::Theme;

/// Rows a card occupies, borders included.
const CARD_HEIGHT: u16 = 10;

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
    Center,
}

/// Where each part sits inside the card: (role, row, alignment).
const SLOTS: &[(Role, u16, Align)] = &[
    (Role::Logo, 1, Align::Left),
    (Role::WishList, 1, Align::Right),
    (Role::Image, 3, Align::Center),
    (Role::Title, 5, Align::Left),
    (Role::Subtitle, 6, Align::Left),
    (Role::Category, 8, Align::Left),
    (Role::Price, 8, Align::Right),
];

fn part_style(role: Role) -> Style {
    match role {
        Role::Logo => Theme::logo_style(),
        Role::Price => Theme::price_style(),
        Role::Title => Theme::title_style(),
        Role::Subtitle => Theme::subtitle_style(),
        Role::Image => Theme::image_style(),
        Role::WishList => Theme::wish_list_style(),
        Role::Category => Theme::category_style(),
    }
}

/// Horizontal clip window in absolute columns, `[min, max)`.
#[derive(Clone, Copy)]
struct Clip {
    min: i32,
    max: i32,
}

impl Clip {
    fn narrow(self, min: i32, max: i32) -> Self {
        Self {
            min: self.min.max(min),
            max: self.max.min(max),
        }
    }
}

/// Write `text` starting at column `x`, dropping characters outside `clip`
/// or below the area.
fn put(buf: &mut Buffer, area: Rect, clip: Clip, x: i32, y: u16, text: &str, style: Style) {
    if y < area.y || y >= area.bottom() {
        return;
    }
    for (i, ch) in text.chars().enumerate() {
        let col = x + i as i32;
        if col < clip.min || col >= clip.max {
            continue;
        }
        if let Some(cell) = buf.cell_mut((col as u16, y)) {
            cell.set_char(ch);
            cell.set_style(style);
        }
    }
}

pub struct DeckWidget<'a> {
    pub deck: &'a Deck,
    pub stage: &'a TerminalStage,
}

impl DeckWidget<'_> {
    fn render_card(&self, card: &Card, area: Rect, buf: &mut Buffer) {
        let width = i32::from(self.stage.card_cols());
        if width < 4 {
            return;
        }
        let left = i32::from(area.x) + self.stage.card_left(card.index).round() as i32;
        let clip = Clip {
            min: i32::from(area.x),
            max: i32::from(area.right()),
        };
        if left + width <= clip.min || left >= clip.max {
            return;
        }

        let height = CARD_HEIGHT.min(area.height);
        let top = area.y + (area.height - height) / 2;
        let inner = (width - 2) as usize;

        // Box.
        let bar = "─".repeat(inner);
        let blank = " ".repeat(inner);
        let border = Theme::card_border_style();
        for row in 0..height {
            let y = top + row;
            let line = if row == 0 {
                format!("╭{bar}╮")
            } else if row + 1 == height {
                format!("╰{bar}╯")
            } else {
                format!("│{blank}│")
            };
            put(buf, area, clip, left, y, &line, border);
        }

        // Parts, clipped to the inside of the box.
        let inside = clip.narrow(left + 1, left + width - 1);
        for &(role, row, align) in SLOTS {
            if row + 1 >= height {
                continue;
            }
            let text = card.text(role);
            let len = text.chars().count() as i32;
            let slot = match align {
                Align::Left => left + 2,
                Align::Right => left + width - 2 - len,
                Align::Center => left + (width - len) / 2,
            };
            let x = slot + self.stage.part_offset(card.index, role).round() as i32;
            put(buf, area, inside, x, top + row, text, part_style(role));
        }
    }
}

impl Widget for DeckWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Theme::background_style(self.stage.background()));
        if area.height < 3 {
            return;
        }
        for card in self.deck.cards() {
            self.render_card(card, area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deck::CardSpec;
    use crate::core::stage::{Anchor, ElementRef, Stage, Transform};
    use std::time::Duration;

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    /// Column (not byte) where `needle` starts.
    fn col_of(line: &str, needle: &str) -> Option<usize> {
        line.find(needle).map(|b| line[..b].chars().count())
    }

    fn stage(deck: &Deck) -> TerminalStage {
        let mut s = TerminalStage::new(deck, 40, 50, Duration::from_millis(16));
        s.set_anchor(0, Anchor::CENTER);
        s
    }

    #[test]
    fn centred_card_is_drawn_in_the_middle() {
        let deck = Deck::new(CardSpec::showcase()).unwrap();
        let s = stage(&deck);
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        DeckWidget { deck: &deck, stage: &s }.render(area, &mut buf);

        let top = row(&buf, 0);
        assert_eq!(top.chars().position(|c| c == '╭'), Some(10));
        assert_eq!(top.chars().position(|c| c == '╮'), Some(29));
        assert!(row(&buf, 5).contains("Air Zoom"));
        // Cards parked at 150% are off-screen.
        assert!(!row(&buf, 5).contains("Ultraboost"));
    }

    #[test]
    fn part_offset_shifts_only_that_part() {
        let deck = Deck::new(CardSpec::showcase()).unwrap();
        let mut s = stage(&deck);
        s.set_transform(ElementRef::Part(0, Role::Title), Transform::Shift(3.0));
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        DeckWidget { deck: &deck, stage: &s }.render(area, &mut buf);

        assert_eq!(col_of(&row(&buf, 5), "Air Zoom"), Some(15));
        assert_eq!(col_of(&row(&buf, 6), "Pegasus 37"), Some(12));
    }

    #[test]
    fn dragged_card_is_clipped_at_the_edge() {
        let deck = Deck::new(CardSpec::showcase()).unwrap();
        let mut s = stage(&deck);
        s.set_transform(ElementRef::Card(0), Transform::Centered(-15.0));
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        DeckWidget { deck: &deck, stage: &s }.render(area, &mut buf);

        // Left edge at column -5: the left border is gone, the right one
        // is at column 14.
        let top = row(&buf, 0);
        assert!(!top.contains('╭'));
        assert_eq!(top.chars().position(|c| c == '╮'), Some(14));
    }
}
