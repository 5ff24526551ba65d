//! Game-state and win-detection engine for a two-player connection game.
//!
//! Two players alternate placing pieces on a square board. White tries to
//! link column 0 to the far column with an orthogonally connected chain of
//! white pieces; black tries the same for the rows, from row 0 down to the
//! far row. The first complete chain wins.
//!
//! The crate owns the rules only: legal placement, turn alternation, and the
//! connectivity search that runs after every accepted move. Rendering, window
//! handling and input translation belong to whatever frontend drives
//! [`Crossway`]: it reads the position through [`Crossway::board`] and
//! decides itself when an input event should mean [`Crossway::reset`]
//! instead of a move.
//!
//! ```
//! use crossway::{Crossway, GameState, GridIndex, PlayerColor};
//!
//! let mut game = Crossway::new(8);
//! assert_eq!(game.current_player(), PlayerColor::White);
//!
//! let state = game.update(GridIndex::new(3, 0))?;
//! assert_eq!(state, GameState::Turn(PlayerColor::Black));
//! assert!(game.winner().is_none());
//! # Ok::<(), crossway::GameError>(())
//! ```

pub mod game;

pub use game::grid::{Grid, GridIndex};
pub use game::{
    BoardCell, Cell, Crossway, GameError, GameResult, GameState, PlayerColor, MIN_BOARD_SIZE,
};
