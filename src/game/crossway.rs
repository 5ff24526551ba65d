use std::collections::HashSet;

use log::debug;

use super::error::GameError;
use super::grid::{Grid, GridIndex};
use super::{BoardCell, GameResult, GameState, PlayerColor};

/// Requested board sizes below this floor are raised to it.
pub const MIN_BOARD_SIZE: usize = 8;

pub type Cell = BoardCell<PlayerColor>;

/// Connection game engine.
///
/// White owns the column axis: an orthogonally connected chain of white
/// pieces touching both column 0 and column `size - 1` wins. Black owns the
/// row axis, from row 0 to row `size - 1`. The two colors deliberately use
/// opposite axes.
#[derive(Clone, Debug)]
pub struct Crossway {
    board: Grid<Cell>,
    state: GameState,
}

impl Crossway {
    /// Creates an empty board with white to move. A `size` below
    /// [`MIN_BOARD_SIZE`] is raised to the floor; larger sizes are used as
    /// requested. Construction never fails.
    pub fn new(size: usize) -> Self {
        Self {
            board: Grid::new(size.max(MIN_BOARD_SIZE)),
            state: GameState::Turn(PlayerColor::White),
        }
    }

    /// Clears the board and the winner, making placements legal again.
    ///
    /// The player to move carries over: restarting does not hand the first
    /// move back to white.
    pub fn reset(&mut self) {
        self.board.clear();
        self.state = GameState::Turn(self.current_player());
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Grid<Cell> {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The color that makes the next accepted placement.
    ///
    /// The turn flips on the winning placement too, so while the game is won
    /// this is the loser; a reset keeps it that way.
    pub fn current_player(&self) -> PlayerColor {
        match self.state {
            GameState::Turn(color) => color,
            GameState::Won(color) => color.opponent(),
        }
    }

    pub fn winner(&self) -> Option<PlayerColor> {
        self.state.winner()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Won(_))
    }

    /// Places a piece for the current player at `index`.
    ///
    /// An accepted placement flips the turn, then runs edge-connectivity
    /// detection for the mover; the returned state is [`GameState::Won`] the
    /// moment the mover's chain spans their edges. A rejected placement
    /// leaves the board and the turn untouched. Once the game is won every
    /// placement is refused until [`reset`](Self::reset); whether an input
    /// event should restart instead of move is the caller's decision.
    pub fn update(&mut self, index: GridIndex) -> GameResult<GameState> {
        if self.is_finished() {
            return Err(GameError::GameIsFinished);
        }
        let size = self.board.size();
        let mover = self.current_player();
        let cell = self
            .board
            .get_mut(index)
            .ok_or_else(|| GameError::out_of_bounds(index.row(), index.col(), size))?;
        if cell.is_some() {
            return Err(GameError::cell_is_occupied(index.row(), index.col()));
        }
        *cell = mover.into();
        self.state = GameState::Turn(mover.opponent());
        debug!("{:?} placed at {}", mover, index);

        if self.connects_own_edges(mover) {
            self.state = GameState::Won(mover);
            debug!("{:?} connected their edges", mover);
        }
        Ok(self.state)
    }

    /// Scans `color`'s starting edge and reports whether any chain from it
    /// reaches the opposite edge.
    fn connects_own_edges(&self, color: PlayerColor) -> bool {
        let mut searched = HashSet::new();
        for i in 0..self.board.size() {
            let start = match color {
                PlayerColor::White => GridIndex::new(i, 0),
                PlayerColor::Black => GridIndex::new(0, i),
            };
            if self.board[start].0 != Some(color) {
                continue;
            }
            if self.chain_reaches_far_edge(color, start, &mut searched) {
                return true;
            }
        }
        false
    }

    /// Depth-first search over `color`'s orthogonally connected pieces,
    /// succeeding as soon as any piece sits on the far edge of `color`'s
    /// axis.
    ///
    /// `searched` persists across starting cells of one detection pass: a
    /// piece explored without reaching the far edge can't do so from a later
    /// start either.
    fn chain_reaches_far_edge(
        &self,
        color: PlayerColor,
        start: GridIndex,
        searched: &mut HashSet<GridIndex>,
    ) -> bool {
        let far_edge = self.board.size() - 1;
        let mut traverse = vec![start];
        while let Some(current) = traverse.pop() {
            if !searched.insert(current) {
                continue;
            }
            // Neighbor candidates may sit one past the far edges; the
            // checked lookup is the bounds guard.
            match self.board.get(current) {
                Some(cell) if cell.0 == Some(color) => {}
                _ => continue,
            }
            let reached = match color {
                PlayerColor::White => current.col() == far_edge,
                PlayerColor::Black => current.row() == far_edge,
            };
            if reached {
                return true;
            }
            traverse.extend(current.orthogonal_neighbors());
        }
        false
    }
}

impl Default for Crossway {
    fn default() -> Self {
        Self::new(MIN_BOARD_SIZE)
    }
}
