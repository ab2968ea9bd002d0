//! Prompt/validate/retry loops over a line reader.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::map::{parse_move, parse_number, parse_yes_no};
use crate::types::MoveCommand;

/// A question-and-answer channel: prompts go to `out`, answers come from `input`.
pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Where prompts and listings are written
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Print `prompt` and read one line. End of input is an error.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the line, printing `hint` after each miss.
    pub fn ask<T>(
        &mut self,
        prompt: &str,
        hint: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<T> {
        loop {
            let line = self.read_line(prompt)?;
            if let Some(value) = parse(&line) {
                return Ok(value);
            }
            debug!("rejected input {:?}", line);
            writeln!(self.out, "{}", hint)?;
        }
    }

    pub fn ask_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        self.ask(prompt, "Please answer yes or no.", parse_yes_no)
    }

    pub fn ask_number(&mut self, prompt: &str, lo: u32, hi: u32) -> io::Result<u32> {
        let hint = format!("Please enter a number from {} to {}.", lo, hi);
        self.ask(prompt, &hint, |line| parse_number(line, lo, hi))
    }

    pub fn ask_move(&mut self, prompt: &str) -> io::Result<MoveCommand> {
        self.ask(
            prompt,
            "Use w (up), a (left), s (down), d (right), or x to stop moving.",
            parse_move,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut c = console("maybe\n\nyes\n");
        assert!(c.ask_yes_no("? ").unwrap());
        let out = String::from_utf8(c.out().clone()).unwrap();
        assert_eq!(out.matches("? ").count(), 3);
        assert_eq!(out.matches("Please answer yes or no.").count(), 2);
    }

    #[test]
    fn test_number_bounds() {
        let mut c = console("9\n0\n4\n");
        assert_eq!(c.ask_number("players: ", 3, 6).unwrap(), 4);
    }

    #[test]
    fn test_move_tokens() {
        let mut c = console("north\nD\n");
        assert_eq!(
            c.ask_move("> ").unwrap(),
            MoveCommand::Step(Direction::Right)
        );
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut c = console("nope\n");
        let err = c.ask_yes_no("? ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
