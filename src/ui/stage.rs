//! Terminal-side style store for the carousel.
//!
//! [`TerminalStage`] keeps the style properties the slider writes (anchor,
//! transform, transition, marker state, background) and turns them into
//! column positions for the widgets.  Transitioned transforms are eased
//! frame by frame; everything else applies instantly.

use std::collections::HashMap;
use std::time::Duration;

use crate::core::deck::{Deck, Role};
use crate::core::palette::Swatch;
use crate::core::stage::{Anchor, ElementRef, Stage, Transform, Transition};

use super::eased::{speed_for, Eased};

/// Style of one element (a card or one of its parts).
#[derive(Debug, Clone, Default)]
struct ElementStyle {
    transform: Transform,
    transition: Option<Transition>,
    shown: Eased,
}

impl ElementStyle {
    fn apply_transform(&mut self, transform: Transform, frame: Duration) {
        self.transform = transform;
        match self.transition {
            Some(t) => self.shown.ease_to(transform.offset(), speed_for(t.duration, frame)),
            None => self.shown.jump(transform.offset()),
        }
    }

    fn apply_transition(&mut self, transition: Option<Transition>) {
        if transition.is_none() {
            self.shown.settle();
        }
        self.transition = transition;
    }
}

#[derive(Debug, Clone)]
struct CardStyle {
    anchor: Anchor,
    body: ElementStyle,
    parts: HashMap<Role, ElementStyle>,
}

/// Style state for every card, marker and the background.
#[derive(Debug, Clone)]
pub struct TerminalStage {
    viewport: u16,
    card_width_pct: u16,
    frame: Duration,
    cards: Vec<CardStyle>,
    markers: Vec<bool>,
    background: Option<Swatch>,
}

impl TerminalStage {
    pub fn new(deck: &Deck, viewport: u16, card_width_pct: u16, frame: Duration) -> Self {
        let cards = deck
            .cards()
            .iter()
            .map(|card| CardStyle {
                anchor: Anchor::AFTER,
                body: ElementStyle::default(),
                parts: card.roles().map(|r| (r, ElementStyle::default())).collect(),
            })
            .collect();
        Self {
            viewport,
            card_width_pct: card_width_pct.clamp(10, 90),
            frame,
            cards,
            markers: vec![false; deck.len()],
            background: None,
        }
    }

    /// Terminal width changed.  A drag in progress keeps the geometry it
    /// sampled when it started.
    pub fn resize(&mut self, viewport: u16) {
        self.viewport = viewport;
    }

    /// Advance every running ease by one frame.
    pub fn tick(&mut self) {
        for card in &mut self.cards {
            card.body.shown.tick();
            for part in card.parts.values_mut() {
                part.shown.tick();
            }
        }
    }

    /// True while any element is still easing.
    pub fn is_animating(&self) -> bool {
        self.cards.iter().any(|c| {
            c.body.shown.is_animating() || c.parts.values().any(|p| p.shown.is_animating())
        })
    }

    pub fn card_cols(&self) -> u16 {
        ((self.viewport as u32 * self.card_width_pct as u32) / 100) as u16
    }

    /// Left edge of a card relative to the viewport's left edge:
    /// `anchor% × viewport + offset − 50% × card width`.
    pub fn card_left(&self, card: usize) -> f64 {
        let Some(style) = self.cards.get(card) else {
            return f64::from(self.viewport);
        };
        style.anchor.0 / 100.0 * f64::from(self.viewport) + style.body.shown.value()
            - f64::from(self.card_cols()) / 2.0
    }

    /// Displayed parallax offset of a part, in columns.
    pub fn part_offset(&self, card: usize, role: Role) -> f64 {
        self.cards
            .get(card)
            .and_then(|c| c.parts.get(&role))
            .map(|p| p.shown.value())
            .unwrap_or(0.0)
    }

    pub fn markers(&self) -> &[bool] {
        &self.markers
    }

    pub fn background(&self) -> Option<Swatch> {
        self.background
    }

    fn element_mut(&mut self, element: ElementRef) -> Option<&mut ElementStyle> {
        match element {
            ElementRef::Card(card) => self.cards.get_mut(card).map(|c| &mut c.body),
            ElementRef::Part(card, role) => {
                self.cards.get_mut(card).and_then(|c| c.parts.get_mut(&role))
            }
        }
    }
}

impl Stage for TerminalStage {
    fn viewport_width(&self) -> f64 {
        f64::from(self.viewport)
    }

    fn card_width(&self, _card: usize) -> f64 {
        f64::from(self.card_cols())
    }

    fn marker_count(&self) -> usize {
        self.markers.len()
    }

    fn set_transform(&mut self, element: ElementRef, transform: Transform) {
        let frame = self.frame;
        if let Some(style) = self.element_mut(element) {
            style.apply_transform(transform, frame);
        }
    }

    fn set_transition(&mut self, element: ElementRef, transition: Option<Transition>) {
        if let Some(style) = self.element_mut(element) {
            style.apply_transition(transition);
        }
    }

    fn set_anchor(&mut self, card: usize, anchor: Anchor) {
        if let Some(style) = self.cards.get_mut(card) {
            style.anchor = anchor;
        }
    }

    fn set_marker_active(&mut self, marker: usize, active: bool) {
        if let Some(m) = self.markers.get_mut(marker) {
            *m = active;
        }
    }

    fn set_background(&mut self, color: Option<Swatch>) {
        self.background = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deck::CardSpec;

    fn stage() -> TerminalStage {
        let deck = Deck::new(CardSpec::showcase()).unwrap();
        TerminalStage::new(&deck, 100, 40, Duration::from_millis(16))
    }

    #[test]
    fn centred_card_sits_in_the_middle() {
        let mut s = stage();
        s.set_anchor(0, Anchor::CENTER);
        assert_eq!(s.card_cols(), 40);
        assert_eq!(s.card_left(0), 30.0);
        s.set_anchor(1, Anchor::BEFORE);
        assert_eq!(s.card_left(1), -70.0);
    }

    #[test]
    fn untransitioned_transform_applies_at_once() {
        let mut s = stage();
        s.set_anchor(0, Anchor::CENTER);
        s.set_transform(ElementRef::Card(0), Transform::Centered(10.0));
        assert_eq!(s.card_left(0), 40.0);
        assert!(!s.is_animating());
    }

    #[test]
    fn transitioned_transform_eases_home() {
        let mut s = stage();
        let logo = ElementRef::Part(0, Role::Logo);
        s.set_transform(logo, Transform::Shift(-20.0));
        s.set_transition(logo, Some(Transition::ease_out(Duration::from_millis(500))));
        s.set_transform(logo, Transform::None);
        assert_eq!(s.part_offset(0, Role::Logo), -20.0);

        s.tick();
        let after_one = s.part_offset(0, Role::Logo);
        assert!(after_one > -20.0 && after_one < 0.0);
        for _ in 0..60 {
            s.tick();
        }
        assert_eq!(s.part_offset(0, Role::Logo), 0.0);
    }

    #[test]
    fn clearing_transition_finishes_the_ease() {
        let mut s = stage();
        let card = ElementRef::Card(0);
        s.set_transform(card, Transform::Centered(25.0));
        s.set_transition(card, Some(Transition::ease_out(Duration::from_millis(500))));
        s.set_transform(card, Transform::None);
        s.set_transition(card, None);
        assert!(!s.is_animating());
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut s = stage();
        s.set_marker_active(9, true);
        s.set_transform(ElementRef::Card(9), Transform::Shift(1.0));
        s.set_anchor(9, Anchor::CENTER);
        assert!(s.markers().iter().all(|m| !m));
    }
}
