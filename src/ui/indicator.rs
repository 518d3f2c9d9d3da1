//! Row of position dots under the cards.

use ratatui::{buffer::Buffer, layout::Rect, text::Span, widgets::Widget};

use super::theme::Theme;

pub struct IndicatorWidget<'a> {
    pub markers: &'a [bool],
}

impl Widget for IndicatorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || self.markers.is_empty() {
            return;
        }
        // "● ○ ○": one glyph per marker with a space between.
        let width = (self.markers.len() * 2 - 1) as u16;
        let mut x = area.x + area.width.saturating_sub(width) / 2;
        for &active in self.markers {
            if x >= area.right() {
                break;
            }
            let glyph = if active { "●" } else { "○" };
            buf.set_span(x, area.y, &Span::styled(glyph, Theme::marker_style(active)), 1);
            x += 2;
        }
    }
}
