//! The fixed, ordered set of cards the carousel moves between.
//!
//! A [`Deck`] is built once at startup and never mutated afterwards.  Each
//! [`Card`] owns its content and the ordered list of parts ([`SubElement`])
//! that take part in the parallax effect.

use thiserror::Error;

// ───────────────────────────────────────── roles ─────────────

/// Named part of a card.  Every role has a fixed parallax divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Logo,
    Price,
    Title,
    Subtitle,
    Image,
    WishList,
    Category,
}

impl Role {
    /// All roles, in the order they are laid out on a card.
    pub const ALL: &[Role] = &[
        Role::Logo,
        Role::Price,
        Role::Title,
        Role::Subtitle,
        Role::Image,
        Role::WishList,
        Role::Category,
    ];

    /// Scale applied to the session ratio for this part.  Smaller values
    /// move farther per column of drag, so foreground parts use small ones.
    pub fn divisor(self) -> f64 {
        match self {
            Role::Logo | Role::Price => 1.0,
            Role::Title => 0.90,
            Role::Subtitle | Role::WishList => 0.85,
            Role::Category => 0.65,
            Role::Image => 0.35,
        }
    }
}

// ───────────────────────────────────────── card ──────────────

/// One part of a card plus whether it eases when its offset is reset.
#[derive(Debug, Clone, PartialEq)]
pub struct SubElement {
    pub role: Role,
    pub text: String,
    /// Parts in the "animatable" set get a transition during resets.
    pub animated: bool,
}

impl SubElement {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            animated: true,
        }
    }
}

/// One carousel panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub index: usize,
    pub parts: Vec<SubElement>,
}

impl Card {
    /// Text for a role, or `""` when the card has no such part.
    pub fn text(&self, role: Role) -> &str {
        self.parts
            .iter()
            .find(|p| p.role == role)
            .map(|p| p.text.as_str())
            .unwrap_or("")
    }

    /// Roles that receive a transition when the card's parts are reset.
    pub fn animated_roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.parts.iter().filter(|p| p.animated).map(|p| p.role)
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.parts.iter().map(|p| p.role)
    }
}

// ───────────────────────────────────────── deck ──────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("a deck needs at least one card")]
    Empty,
}

/// Card content before it is assigned a position in a deck.
#[derive(Debug, Clone, Default)]
pub struct CardSpec {
    pub logo: String,
    pub price: String,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub wish_list: String,
    pub category: String,
}

impl CardSpec {
    /// The three product cards shown when no other content is supplied.
    pub fn showcase() -> Vec<CardSpec> {
        vec![
            CardSpec {
                logo: "NIKE".into(),
                price: "$120".into(),
                title: "Air Zoom".into(),
                subtitle: "Pegasus 37".into(),
                image: "▗▄▄▄▟█▙▄▖".into(),
                wish_list: "♡".into(),
                category: "running".into(),
            },
            CardSpec {
                logo: "ADIDAS".into(),
                price: "$180".into(),
                title: "Ultraboost".into(),
                subtitle: "Core Black".into(),
                image: "▄▟████▙▄▖".into(),
                wish_list: "♡".into(),
                category: "lifestyle".into(),
            },
            CardSpec {
                logo: "PUMA".into(),
                price: "$95".into(),
                title: "RS-X".into(),
                subtitle: "Reinvention".into(),
                image: "▗▟██▙▄▄▄▖".into(),
                wish_list: "♡".into(),
                category: "street".into(),
            },
        ]
    }

    fn into_card(self, index: usize) -> Card {
        let parts = vec![
            SubElement::new(Role::Logo, self.logo),
            SubElement::new(Role::Price, self.price),
            SubElement::new(Role::Title, self.title),
            SubElement::new(Role::Subtitle, self.subtitle),
            SubElement::new(Role::Image, self.image),
            SubElement::new(Role::WishList, self.wish_list),
            SubElement::new(Role::Category, self.category),
        ];
        Card { index, parts }
    }
}

/// Ordered, fixed-length sequence of cards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(specs: Vec<CardSpec>) -> Result<Self, DeckError> {
        if specs.is_empty() {
            return Err(DeckError::Empty);
        }
        let cards = specs
            .into_iter()
            .enumerate()
            .map(|(i, content)| content.into_card(i))
            .collect();
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn last_index(&self) -> usize {
        self.cards.len() - 1
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(Deck::new(Vec::new()).unwrap_err(), DeckError::Empty);
    }

    #[test]
    fn cards_are_indexed_in_order() {
        let deck = Deck::new(vec![CardSpec::default(), CardSpec::default()]).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.last_index(), 1);
        assert_eq!(deck.card(1).map(|c| c.index), Some(1));
        assert!(deck.card(2).is_none());
    }

    #[test]
    fn every_card_carries_all_roles() {
        let deck = Deck::new(CardSpec::showcase()).unwrap();
        for card in deck.cards() {
            let roles: Vec<Role> = card.roles().collect();
            assert_eq!(roles, Role::ALL);
            assert_eq!(card.animated_roles().count(), Role::ALL.len());
        }
        assert_eq!(deck.cards()[1].text(Role::Title), "Ultraboost");
    }

    #[test]
    fn foreground_parts_have_smaller_divisors() {
        assert_eq!(Role::Logo.divisor(), 1.0);
        assert_eq!(Role::Price.divisor(), 1.0);
        assert_eq!(Role::Title.divisor(), 0.90);
        assert_eq!(Role::Subtitle.divisor(), 0.85);
        assert_eq!(Role::WishList.divisor(), 0.85);
        assert_eq!(Role::Category.divisor(), 0.65);
        assert_eq!(Role::Image.divisor(), 0.35);
    }
}
