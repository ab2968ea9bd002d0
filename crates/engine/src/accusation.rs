//! Accusation resolution
//!
//! Players to the accuser's left are asked in turn. The first one holding the
//! named weapon, room or person (checked in that order) shows that card and
//! the search stops there.

use crate::core::Player;
use crate::types::{Card, PersonKind, RoomKind, WeaponKind};

/// A named person and weapon in the room the accuser is standing in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accusation {
    /// Seat index of the accusing player
    pub accuser: usize,
    pub person: PersonKind,
    pub weapon: WeaponKind,
    pub room: RoomKind,
}

impl Accusation {
    /// The named cards in the order a refuting player checks them
    pub fn cards(&self) -> [Card; 3] {
        [
            Card::Weapon(self.weapon),
            Card::Room(self.room),
            Card::Person(self.person),
        ]
    }
}

/// Who disputed an accusation, and with which card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refutation {
    pub seat: usize,
    pub card: Card,
}

/// Seats after `accuser`, wrapping around, excluding `accuser`.
pub fn seats_after(accuser: usize, seats: usize) -> impl Iterator<Item = usize> {
    (1..seats).map(move |k| (accuser + k) % seats)
}

/// The card `player` would show against `accusation`, if any.
pub fn refuting_card(player: &Player, accusation: &Accusation) -> Option<Card> {
    accusation.cards().into_iter().find(|&card| player.holds(card))
}

/// First player after the accuser able to dispute `accusation`.
pub fn find_refuter(players: &[Player], accusation: &Accusation) -> Option<Refutation> {
    seats_after(accusation.accuser, players.len()).find_map(|seat| {
        refuting_card(&players[seat], accusation).map(|card| Refutation { seat, card })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(hands: [Vec<Card>; 4]) -> Vec<Player> {
        PersonKind::ALL
            .into_iter()
            .zip(hands)
            .map(|(p, h)| Player::new(p, h))
            .collect()
    }

    fn accusation(accuser: usize) -> Accusation {
        Accusation {
            accuser,
            person: PersonKind::Plum,
            weapon: WeaponKind::Rope,
            room: RoomKind::Library,
        }
    }

    #[test]
    fn seats_wrap_and_skip_accuser() {
        assert_eq!(seats_after(2, 4).collect::<Vec<_>>(), vec![3, 0, 1]);
        assert_eq!(seats_after(0, 3).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(seats_after(0, 1).count(), 0);
    }

    #[test]
    fn weapon_checked_before_room_and_person() {
        let player = Player::new(
            PersonKind::White,
            vec![
                Card::Person(PersonKind::Plum),
                Card::Room(RoomKind::Library),
                Card::Weapon(WeaponKind::Rope),
            ],
        );
        assert_eq!(
            refuting_card(&player, &accusation(0)),
            Some(Card::Weapon(WeaponKind::Rope))
        );

        let player = Player::new(
            PersonKind::White,
            vec![Card::Person(PersonKind::Plum), Card::Room(RoomKind::Library)],
        );
        assert_eq!(
            refuting_card(&player, &accusation(0)),
            Some(Card::Room(RoomKind::Library))
        );
    }

    #[test]
    fn first_holder_wins_even_if_later_players_match() {
        let players = table([
            vec![],
            vec![Card::Room(RoomKind::Hall)],
            vec![Card::Room(RoomKind::Library)],
            vec![Card::Weapon(WeaponKind::Rope)],
        ]);
        assert_eq!(
            find_refuter(&players, &accusation(0)),
            Some(Refutation {
                seat: 2,
                card: Card::Room(RoomKind::Library)
            })
        );
    }

    #[test]
    fn search_wraps_past_the_last_seat() {
        let players = table([
            vec![Card::Person(PersonKind::Plum)],
            vec![],
            vec![],
            vec![],
        ]);
        assert_eq!(
            find_refuter(&players, &accusation(2)),
            Some(Refutation {
                seat: 0,
                card: Card::Person(PersonKind::Plum)
            })
        );
    }

    #[test]
    fn accuser_never_refutes_themselves() {
        let players = table([
            vec![],
            vec![Card::Weapon(WeaponKind::Rope)],
            vec![],
            vec![],
        ]);
        assert_eq!(find_refuter(&players, &accusation(1)), None);
    }
}
