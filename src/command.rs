//
// This file is part of tic_tac_toe.
//
// tic_tac_toe is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tic_tac_toe is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with tic_tac_toe. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2017 Chris Foster
//

//! Terminal input.

use std::str::FromStr;

use crate::error::GameError;
use crate::game::Event;

/// A line of player input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Event(Event),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  1-9              play a cell, numbered left to right, top to bottom
  <row> <col>      play the cell at row and column (1 - 3)
  jump <n>, j <n>  go to move #n
  order, o         flip the order of the move list
  reset, r         start a new game
  help, h          show this message
  quit, q          leave";

fn parse_number(word: &str, min: usize, max: usize) -> Option<usize> {
    match word.parse::<usize>() {
        Ok(n) if n >= min && n <= max => Some(n),
        _ => None,
    }
}

impl FromStr for Command {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Command, GameError> {
        let words = s.split_whitespace().collect::<Vec<_>>();
        let unknown = || GameError::UnknownCommand(String::from(s.trim()));

        let command = match words.as_slice() {
            ["q"] | ["quit"] => Command::Quit,
            ["h"] | ["help"] | ["?"] => Command::Help,
            ["o"] | ["order"] => Command::Event(Event::ToggleOrder),
            ["r"] | ["reset"] => Command::Event(Event::Reset),
            ["j", ply] | ["jump", ply] => {
                let ply = ply.parse::<usize>().map_err(|_| unknown())?;
                Command::Event(Event::HistoryClicked(ply))
            },
            [cell] => {
                let cell = parse_number(cell, 1, 9).ok_or_else(unknown)?;
                Command::Event(Event::CellClicked(cell - 1))
            },
            [row, col] => {
                let row = parse_number(row, 1, 3).ok_or_else(unknown)?;
                let col = parse_number(col, 1, 3).ok_or_else(unknown)?;
                Command::Event(Event::CellClicked((row - 1) * 3 + col - 1))
            },
            _ => return Err(unknown()),
        };

        Ok(command)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(s: &str) -> Result<Command, GameError> {
        s.parse::<Command>()
    }

    #[test]
    fn test_cells() {
        assert_eq!(parse("1"), Ok(Command::Event(Event::CellClicked(0))));
        assert_eq!(parse(" 9 "), Ok(Command::Event(Event::CellClicked(8))));
        assert_eq!(parse("2 3"), Ok(Command::Event(Event::CellClicked(5))));
        assert_eq!(parse("3 1"), Ok(Command::Event(Event::CellClicked(6))));
    }

    #[test]
    fn test_controls() {
        assert_eq!(parse("jump 4"), Ok(Command::Event(Event::HistoryClicked(4))));
        assert_eq!(parse("j 0"), Ok(Command::Event(Event::HistoryClicked(0))));
        assert_eq!(parse("order"), Ok(Command::Event(Event::ToggleOrder)));
        assert_eq!(parse("r"), Ok(Command::Event(Event::Reset)));
        assert_eq!(parse("help"), Ok(Command::Help));
        assert_eq!(parse("q"), Ok(Command::Quit));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(parse("0"), Err(GameError::UnknownCommand(String::from("0"))));
        assert_eq!(parse("4 1"), Err(GameError::UnknownCommand(String::from("4 1"))));
        assert_eq!(parse("jump x"), Err(GameError::UnknownCommand(String::from("jump x"))));
        assert_eq!(parse(""), Err(GameError::UnknownCommand(String::new())));
        assert!(parse("play the corner").is_err());
    }
}
