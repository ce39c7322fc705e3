//! Input dispatch: turns typed commands into engine requests.

use chess_core::{Move, Square};
use chess_engine::{Game, GameError, MoveOutcome};
use std::str::FromStr;
use thiserror::Error;

/// A line of user input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click on a square: select a piece, or move the selected piece there.
    Click(Square),
    /// Move directly in coordinate notation.
    Move(Move),
    /// List all legal moves for the side to move.
    Moves,
    /// Start a new game.
    New,
    /// Print the position as FEN.
    Fen,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized command '{0}' (type 'help' for a list)")]
pub struct CommandError(String);

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "moves" => return Ok(Command::Moves),
            "new" => return Ok(Command::New),
            "fen" => return Ok(Command::Fen),
            "help" | "?" => return Ok(Command::Help),
            "quit" | "exit" | "q" => return Ok(Command::Quit),
            _ => {}
        }
        if let Some(sq) = Square::from_algebraic(s) {
            return Ok(Command::Click(sq));
        }
        if let Some(m) = Move::from_uci(&s.to_ascii_lowercase()) {
            return Ok(Command::Move(m));
        }
        Err(CommandError(s.to_string()))
    }
}

/// What a command did, for the view to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// A piece was selected.
    Selected(Square),
    /// The click hit nothing selectable.
    Ignored,
    /// A move was committed.
    Committed(MoveOutcome),
    /// A move was refused; the selection has been cleared.
    Rejected(GameError),
    /// Legal moves for the side to move.
    Moves(Vec<Move>),
    /// The current position as FEN.
    Fen(String),
    NewGame,
    Help,
    Quit,
}

/// One interactive game plus the click state machine around it.
#[derive(Debug, Default)]
pub struct Session {
    game: Game,
}

impl Session {
    pub fn new(game: Game) -> Self {
        Session { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Handles a click on `sq`.
    ///
    /// With a piece selected, the click requests a move to `sq`; an illegal
    /// request clears the selection. With nothing selected, the click
    /// selects `sq` if it holds a piece of the side to move.
    pub fn click(&mut self, sq: Square) -> Feedback {
        match self.game.selection() {
            Some(from) => self.request(Move::new(from, sq)),
            None if self.game.select(sq) => Feedback::Selected(sq),
            None => Feedback::Ignored,
        }
    }

    fn request(&mut self, m: Move) -> Feedback {
        match self.game.request_move(m.from(), m.to()) {
            Ok(outcome) => Feedback::Committed(outcome),
            Err(e) => Feedback::Rejected(e),
        }
    }

    /// Runs one command.
    pub fn execute(&mut self, command: Command) -> Feedback {
        match command {
            Command::Click(sq) => self.click(sq),
            Command::Move(m) => self.request(m),
            Command::Moves => Feedback::Moves(self.game.legal_moves()),
            Command::New => {
                self.game.new_game();
                Feedback::NewGame
            }
            Command::Fen => Feedback::Fen(self.game.to_fen()),
            Command::Help => Feedback::Help,
            Command::Quit => Feedback::Quit,
        }
    }
}
