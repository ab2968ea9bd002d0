//! Player module - a seat at the table

use crate::types::{Card, PersonKind};

/// A player: the character they move and the cards they hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    person: PersonKind,
    hand: Vec<Card>,
}

impl Player {
    pub fn new(person: PersonKind, hand: Vec<Card>) -> Self {
        Self { person, hand }
    }

    /// Players go by their character's name
    pub fn name(&self) -> &'static str {
        self.person.name()
    }

    pub fn person(&self) -> PersonKind {
        self.person
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Comma-separated card names
    pub fn hand_string(&self) -> String {
        self.hand
            .iter()
            .map(Card::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
