//! Game module - turn sequencing and accusations
//!
//! [`Game`] is a state machine. It is always parked on one [`Request`]; each
//! [`Answer`] advances it and reports what happened as [`Event`]s. All
//! prompting, parsing and retrying lives in the caller.

use log::{debug, info};

use crate::accusation::{find_refuter, seats_after, Accusation, Refutation};
use crate::config::GameConfig;
use crate::core::{deal, Board, GameRng, MoveOutcome, Player, Solution};
use crate::error::GameError;
use crate::protocol::{Answer, Event, Request};
use crate::types::{Card, MoveCommand, MovableItem, PersonKind, RoomKind, WeaponKind};

/// What declining an accusation leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decline {
    /// Turn started in a room: leave it with the rolled budget.
    ExitRoom { budget: u8 },
    /// Just walked in: movement is over.
    EndTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NotStarted,
    OfferAccusation { room: RoomKind, on_decline: Decline },
    ChooseDoor { room: RoomKind, budget: u8 },
    Moving { remaining: u8 },
    NameWeapon { room: RoomKind },
    NamePerson { room: RoomKind, weapon: WeaponKind },
    OfferEnvelope { accusation: Accusation },
    Over { winner: usize },
}

impl Phase {
    fn expects(&self) -> &'static str {
        match self {
            Phase::OfferAccusation { .. } | Phase::OfferEnvelope { .. } => "yes or no",
            Phase::ChooseDoor { .. } => "a door of the room",
            Phase::Moving { .. } => "a move",
            Phase::NameWeapon { .. } => "a weapon",
            Phase::NamePerson { .. } => "a person",
            Phase::NotStarted | Phase::Over { .. } => "nothing",
        }
    }
}

/// A game in progress
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
    solution: Solution,
    /// Cards left over after dealing, visible to everyone
    extra: Vec<Card>,
    rng: GameRng,
    /// Seat of the player whose turn it is
    current: usize,
    phase: Phase,
    /// Turns started so far
    turn: u32,
}

impl Game {
    /// Deal the cards and lay out the board for `config.players()` players.
    ///
    /// Player `i` plays the `i`-th character of [`PersonKind::ALL`].
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let mut rng = match config.seed() {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!("game seed {}", rng.seed());

        let dealt = deal(config.players() as usize, &mut rng);
        let board = Board::setup(&mut rng)?;
        let players = PersonKind::ALL
            .into_iter()
            .zip(dealt.hands)
            .map(|(person, hand)| Player::new(person, hand))
            .collect();

        Ok(Self::from_parts(board, players, dealt.solution, dealt.extra, rng))
    }

    /// Assemble a game from prepared pieces.
    pub fn from_parts(
        board: Board,
        players: Vec<Player>,
        solution: Solution,
        extra: Vec<Card>,
        rng: GameRng,
    ) -> Self {
        Self {
            board,
            players,
            solution,
            extra,
            rng,
            current: 0,
            phase: Phase::NotStarted,
            turn: 0,
        }
    }

    /// Roll for the first player.
    pub fn start(&mut self) -> Result<Vec<Event>, GameError> {
        if self.phase != Phase::NotStarted {
            return Err(GameError::AlreadyStarted);
        }
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        let mut events = Vec::new();
        self.begin_turn(&mut events);
        Ok(events)
    }

    /// The decision the engine is waiting for. `None` before
    /// [`start`](Self::start) and after someone has won.
    pub fn pending(&self) -> Option<Request> {
        let player = self.players.get(self.current)?.person();
        let request = match self.phase {
            Phase::NotStarted | Phase::Over { .. } => return None,
            Phase::OfferAccusation { room, .. } => Request::OfferAccusation { player, room },
            Phase::ChooseDoor { room, .. } => Request::ChooseExitDoor {
                player,
                room,
                doors: self.board.room(room).doors().keys().copied().collect(),
            },
            Phase::Moving { remaining } => Request::Move { player, remaining },
            Phase::NameWeapon { room } => Request::NameWeapon { player, room },
            Phase::NamePerson { room, .. } => Request::NamePerson { player, room },
            Phase::OfferEnvelope { .. } => Request::OfferEnvelope { player },
        };
        Some(request)
    }

    /// Apply the answer to the pending request.
    ///
    /// An answer of the wrong kind leaves the game untouched.
    pub fn respond(&mut self, answer: Answer) -> Result<Vec<Event>, GameError> {
        let mut events = Vec::new();
        match (self.phase, answer) {
            (Phase::NotStarted, _) => return Err(GameError::NotStarted),
            (Phase::Over { .. }, _) => return Err(GameError::GameOver),

            (Phase::OfferAccusation { room, .. }, Answer::Confirm(true)) => {
                self.phase = Phase::NameWeapon { room };
            }
            (Phase::OfferAccusation { room, on_decline }, Answer::Confirm(false)) => {
                match on_decline {
                    Decline::ExitRoom { budget } => self.leave_room(room, budget, &mut events),
                    Decline::EndTurn => self.end_turn(&mut events),
                }
            }

            (Phase::ChooseDoor { room, budget }, Answer::Door(index)) => {
                if self.board.room(room).door(index).is_none() {
                    return Err(self.unexpected(answer));
                }
                self.exit_through(room, index, budget, &mut events);
            }

            (Phase::Moving { remaining }, Answer::Move(command)) => {
                self.step(remaining, command, &mut events)?;
            }

            (Phase::NameWeapon { room }, Answer::Weapon(weapon)) => {
                self.phase = Phase::NamePerson { room, weapon };
            }
            (Phase::NamePerson { room, weapon }, Answer::Person(person)) => {
                let accusation = Accusation {
                    accuser: self.current,
                    person,
                    weapon,
                    room,
                };
                self.accuse(accusation, &mut events)?;
            }

            (Phase::OfferEnvelope { accusation }, Answer::Confirm(open)) => {
                if open {
                    self.open_envelope(accusation, &mut events);
                } else {
                    self.end_turn(&mut events);
                }
            }

            _ => return Err(self.unexpected(answer)),
        }
        Ok(events)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Whose turn it is
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    pub fn extra_cards(&self) -> &[Card] {
        &self.extra
    }

    pub fn solution(&self) -> Solution {
        self.solution
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.phase {
            Phase::Over { winner } => self.players.get(winner),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over { .. })
    }

    /// Number of turns started, counting the current one
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Seed the game's random source was built from
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    fn person(&self) -> PersonKind {
        self.players[self.current].person()
    }

    fn unexpected(&self, got: Answer) -> GameError {
        GameError::UnexpectedAnswer {
            expected: self.phase.expects(),
            got,
        }
    }

    fn begin_turn(&mut self, events: &mut Vec<Event>) {
        self.turn += 1;
        let player = self.person();
        let dice = self.rng.roll_dice();
        let budget = dice.0 + dice.1;
        debug!("turn {}: {} rolled {:?}", self.turn, player, dice);
        events.push(Event::TurnStarted { player, dice });

        self.phase = match self.board.room_of(MovableItem::Person(player)) {
            Some(room) => Phase::OfferAccusation {
                room,
                on_decline: Decline::ExitRoom { budget },
            },
            None => Phase::Moving { remaining: budget },
        };
    }

    fn end_turn(&mut self, events: &mut Vec<Event>) {
        events.push(Event::TurnEnded {
            player: self.person(),
        });
        self.current = (self.current + 1) % self.players.len();
        self.begin_turn(events);
    }

    fn leave_room(&mut self, room: RoomKind, budget: u8, events: &mut Vec<Event>) {
        let player = self.person();
        if self.board.is_sealed(room) {
            events.push(Event::RoomSealed { player, room });
            self.end_turn(events);
            return;
        }

        let doors = self.board.room(room).doors();
        let only = match doors.len() {
            1 => doors.keys().next().copied(),
            _ => None,
        };
        match only {
            Some(index) => self.exit_through(room, index, budget, events),
            None => self.phase = Phase::ChooseDoor { room, budget },
        }
    }

    fn exit_through(&mut self, room: RoomKind, index: u8, budget: u8, events: &mut Vec<Event>) {
        let player = self.person();
        let Some(door) = self.board.room(room).door(index) else {
            return;
        };

        if !self.board.teleport_to_door(MovableItem::Person(player), door) {
            events.push(Event::DoorBlocked {
                player,
                door: index,
            });
            self.phase = Phase::ChooseDoor { room, budget };
            return;
        }

        events.push(Event::LeftRoom {
            player,
            room,
            door: index,
        });
        match budget.saturating_sub(1) {
            0 => self.end_turn(events),
            remaining => self.phase = Phase::Moving { remaining },
        }
    }

    fn step(
        &mut self,
        remaining: u8,
        command: MoveCommand,
        events: &mut Vec<Event>,
    ) -> Result<(), GameError> {
        let player = self.person();
        let dir = match command {
            MoveCommand::Finish => {
                self.end_turn(events);
                return Ok(());
            }
            MoveCommand::Step(dir) => dir,
        };

        match self
            .board
            .move_item(MovableItem::Person(player), dir, &mut self.rng)?
        {
            MoveOutcome::Rejected(reason) => {
                events.push(Event::MoveRejected { player, reason });
            }
            MoveOutcome::Moved(to) => {
                let remaining = remaining.saturating_sub(1);
                events.push(Event::Moved {
                    player,
                    to,
                    remaining,
                });
                if remaining == 0 {
                    self.end_turn(events);
                } else {
                    self.phase = Phase::Moving { remaining };
                }
            }
            MoveOutcome::EnteredRoom { room, .. } => {
                events.push(Event::EnteredRoom { player, room });
                self.phase = Phase::OfferAccusation {
                    room,
                    on_decline: Decline::EndTurn,
                };
            }
        }
        Ok(())
    }

    fn accuse(&mut self, accusation: Accusation, events: &mut Vec<Event>) -> Result<(), GameError> {
        let player = self.person();
        let room = accusation.room;
        info!(
            "{} accuses {} with the {} in the {}",
            player, accusation.person, accusation.weapon, room
        );
        events.push(Event::Accused {
            player,
            person: accusation.person,
            weapon: accusation.weapon,
            room,
        });

        for item in [
            MovableItem::Weapon(accusation.weapon),
            MovableItem::Person(accusation.person),
        ] {
            if self.board.room_of(item) != Some(room) {
                self.board.teleport_to_room(item, room, &mut self.rng)?;
                events.push(Event::Summoned { item, room });
            }
        }

        let refutation = find_refuter(&self.players, &accusation);
        let stop = refutation.map(|r| r.seat);
        for seat in seats_after(accusation.accuser, self.players.len())
            .take_while(|&seat| Some(seat) != stop)
        {
            events.push(Event::CannotRefute {
                player: self.players[seat].person(),
            });
        }

        match refutation {
            Some(Refutation { seat, card }) => {
                events.push(Event::Refuted {
                    player,
                    by: self.players[seat].person(),
                    card,
                });
                self.end_turn(events);
            }
            None => {
                events.push(Event::Undisputed { player });
                self.phase = Phase::OfferEnvelope { accusation };
            }
        }
        Ok(())
    }

    fn open_envelope(&mut self, accusation: Accusation, events: &mut Vec<Event>) {
        let player = self.person();
        if self
            .solution
            .matches(accusation.person, accusation.weapon, accusation.room)
        {
            info!("{} solved the murder on turn {}", player, self.turn);
            events.push(Event::Won {
                player,
                solution: self.solution,
            });
            self.phase = Phase::Over {
                winner: self.current,
            };
        } else {
            events.push(Event::EnvelopeWrong { player });
            self.end_turn(events);
        }
    }
}
