//! Token mapping from console lines to typed answers.

use crate::types::MoveCommand;

/// `w a s d` to step, `x` to stop moving.
pub fn parse_move(line: &str) -> Option<MoveCommand> {
    MoveCommand::from_str(line)
}

/// `yes`/`no`, or just `y`/`n`.
pub fn parse_yes_no(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

/// An integer in `lo..=hi`.
pub fn parse_number(line: &str, lo: u32, hi: u32) -> Option<u32> {
    line.trim()
        .parse::<u32>()
        .ok()
        .filter(|n| (lo..=hi).contains(n))
}
