//! Turning engine requests into answers by asking the player.

use std::io::{self, BufRead, Write};

use crate::console::Console;
use crate::engine::core::Player;
use crate::engine::{Answer, Game, Request};
use crate::types::{Card, PersonKind, WeaponKind};

/// Ask the current player for the answer to `request`.
pub fn answer<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &Game,
    request: &Request,
) -> io::Result<Answer> {
    let name = request.player().name();
    match request {
        Request::OfferAccusation { room, .. } => {
            show_cards(console.out(), game.current_player(), game.extra_cards())?;
            let prompt = format!("{}, make an accusation in the {}? (yes/no) ", name, room);
            console.ask_yes_no(&prompt).map(Answer::Confirm)
        }
        Request::ChooseExitDoor { room, doors, .. } => {
            let listed = doors
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let prompt = format!("{}, leave the {} by which door ({})? ", name, room, listed);
            let hint = format!("The {} has doors {}.", room, listed);
            console
                .ask(&prompt, &hint, |line| {
                    line.parse::<u8>().ok().filter(|d| doors.contains(d))
                })
                .map(Answer::Door)
        }
        Request::Move { remaining, .. } => {
            let prompt = format!(
                "{}, {} move{} left (w/a/s/d, x to stop): ",
                name,
                remaining,
                if *remaining == 1 { "" } else { "s" }
            );
            console.ask_move(&prompt).map(Answer::Move)
        }
        Request::NameWeapon { .. } => {
            let choice = pick(console, "Which weapon?", &WeaponKind::ALL.map(|w| w.name()))?;
            Ok(Answer::Weapon(WeaponKind::ALL[choice]))
        }
        Request::NamePerson { .. } => {
            let choice = pick(console, "Who did it?", &PersonKind::ALL.map(|p| p.name()))?;
            Ok(Answer::Person(PersonKind::ALL[choice]))
        }
        Request::OfferEnvelope { .. } => {
            let prompt = format!(
                "Nobody could dispute it. {}, open the envelope? (yes/no) ",
                name
            );
            console.ask_yes_no(&prompt).map(Answer::Confirm)
        }
    }
}

/// Numbered list, returns the zero-based index of the choice.
fn pick<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    title: &str,
    names: &[&str],
) -> io::Result<usize> {
    writeln!(console.out(), "{}", title)?;
    for (i, name) in names.iter().enumerate() {
        writeln!(console.out(), "  {}. {}", i + 1, name)?;
    }
    let chosen = console.ask_number("> ", 1, names.len() as u32)?;
    Ok(chosen as usize - 1)
}

fn show_cards<W: Write>(out: &mut W, player: Option<&Player>, extra: &[Card]) -> io::Result<()> {
    if let Some(player) = player {
        writeln!(out, "Your cards: {}", player.hand_string())?;
    }
    if !extra.is_empty() {
        let names: Vec<&str> = extra.iter().map(Card::name).collect();
        writeln!(out, "Extra cards: {}", names.join(", "))?;
    }
    Ok(())
}
