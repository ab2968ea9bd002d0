//! Deck module - the murder envelope and the deal
//!
//! One card of each category goes into the envelope. The other 18 are
//! shuffled and dealt evenly; whatever does not divide evenly is left face up
//! as extra cards.

use log::info;

use crate::rng::GameRng;
use crate::types::{Card, PersonKind, RoomKind, WeaponKind};

/// The three withheld cards. Fixed for the life of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Solution {
    pub person: PersonKind,
    pub weapon: WeaponKind,
    pub room: RoomKind,
}

impl Solution {
    pub fn new(person: PersonKind, weapon: WeaponKind, room: RoomKind) -> Self {
        Self {
            person,
            weapon,
            room,
        }
    }

    pub fn cards(&self) -> [Card; 3] {
        [
            Card::Person(self.person),
            Card::Weapon(self.weapon),
            Card::Room(self.room),
        ]
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards().contains(&card)
    }

    /// Exact match on all three
    pub fn matches(&self, person: PersonKind, weapon: WeaponKind, room: RoomKind) -> bool {
        self.person == person && self.weapon == weapon && self.room == room
    }
}

/// Output of [`deal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub solution: Solution,
    /// One hand per player, in turn order
    pub hands: Vec<Vec<Card>>,
    /// Cards left over after an even split
    pub extra: Vec<Card>,
}

/// Fill the envelope and deal the rest to `players` hands.
pub fn deal(players: usize, rng: &mut GameRng) -> Deal {
    let solution = Solution::new(
        PersonKind::ALL[rng.next_index(PersonKind::ALL.len()).unwrap_or_default()],
        WeaponKind::ALL[rng.next_index(WeaponKind::ALL.len()).unwrap_or_default()],
        RoomKind::ALL[rng.next_index(RoomKind::ALL.len()).unwrap_or_default()],
    );
    info!("murder envelope sealed");

    let mut remaining: Vec<Card> = Card::all().filter(|&c| !solution.contains(c)).collect();
    rng.shuffle(&mut remaining);

    let per_hand = remaining.len().checked_div(players).unwrap_or(0);
    let hands = (0..players)
        .map(|_| remaining.drain(..per_hand).collect())
        .collect();

    Deal {
        solution,
        hands,
        extra: remaining,
    }
}
