//! Shared game vocabulary: player colors, board cells and game state.

pub mod crossway;
pub mod error;
pub mod grid;

use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut};

pub use crossway::{Cell, Crossway, MIN_BOARD_SIZE};
pub use error::GameError;

pub type GameResult<T> = Result<T, GameError>;

/// Piece colors of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    White,
    Black,
}

impl PlayerColor {
    /// Returns the other player's color.
    pub fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl Display for PlayerColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::White => f.write_str("w"),
            Self::Black => f.write_str("b"),
        }
    }
}

/// One board cell: either empty or holding a value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardCell<T>(pub Option<T>);

impl<T> Default for BoardCell<T> {
    fn default() -> Self {
        Self(Option::default())
    }
}

impl<T: Display> Display for BoardCell<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(val) => write!(f, "[{}]", val),
            None => f.write_str("[ ]"),
        }
    }
}

impl<T> From<T> for BoardCell<T> {
    fn from(value: T) -> Self {
        Self(Option::from(value))
    }
}

impl<T> Deref for BoardCell<T> {
    type Target = Option<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for BoardCell<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Progress of a game: whose turn it is, or who connected their edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Turn(PlayerColor),
    Won(PlayerColor),
}

impl GameState {
    /// The winning color, if the game is over.
    pub fn winner(&self) -> Option<PlayerColor> {
        match *self {
            Self::Won(color) => Some(color),
            Self::Turn(_) => None,
        }
    }
}
