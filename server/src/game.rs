use minesweeper_common::models::GameInfo;
use tracing::debug;

use crate::{
    board::{Board, CellState, Pos},
    error::{GameError, Result},
    mines::MineLayout,
    reveal::{reveal, reveal_all_remaining},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

/// Persisted state of one game. The mine layout is kept apart from it and
/// only shows up on the board once the game is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: String,
    pub mine_count: usize,
    pub board: Board,
    pub completed: bool,
}

impl Game {
    pub fn new(id: String, width: usize, height: usize, mine_count: usize) -> Self {
        Self {
            id,
            mine_count,
            board: Board::new(width, height),
            completed: false,
        }
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn status(&self) -> GameStatus {
        if !self.completed {
            GameStatus::Active
        } else if self
            .board
            .positions()
            .any(|pos| self.board.get(pos) == Some(CellState::ExplodedMine))
        {
            GameStatus::Lost
        } else {
            GameStatus::Won
        }
    }

    /// Applies a reveal move. The board is left untouched when the move is
    /// rejected.
    pub fn apply_move(&mut self, mines: &MineLayout, pos: Pos) -> Result<GameStatus> {
        if self.board.get(pos) != Some(CellState::Hidden) {
            return Err(GameError::InvalidMove {
                col: pos.col,
                row: pos.row,
            });
        }

        if mines.contains(pos) {
            self.explode(mines, pos);
            return Ok(GameStatus::Lost);
        }

        let revealed = reveal(&mut self.board, mines, pos);
        debug!("Move {} in game {} revealed {} cells", pos, self.id, revealed);

        if self.board.hidden_count() == self.mine_count {
            self.disclose_mines(mines);
            self.completed = true;
            return Ok(GameStatus::Won);
        }

        Ok(GameStatus::Active)
    }

    fn explode(&mut self, mines: &MineLayout, hit: Pos) {
        self.disclose_mines(mines);
        self.board.set(hit, CellState::ExplodedMine);
        reveal_all_remaining(&mut self.board, mines);
        self.completed = true;
    }

    fn disclose_mines(&mut self, mines: &MineLayout) {
        for pos in mines.iter() {
            self.board.set(pos, CellState::Mine);
        }
    }

    pub fn to_info(&self) -> GameInfo {
        GameInfo {
            game_id: self.id.clone(),
            width: self.width(),
            height: self.height(),
            mines_count: self.mine_count,
            field: self.board.render(),
            completed: self.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(width: usize, height: usize, mines: &[(usize, usize)]) -> (Game, MineLayout) {
        let mines = MineLayout::from_positions(mines.iter().map(|&(col, row)| Pos::new(col, row)));
        let game = Game::new("test".to_string(), width, height, mines.len());
        (game, mines)
    }

    #[test]
    fn single_move_can_win() {
        let (mut game, mines) = game(3, 3, &[(2, 2)]);
        let status = game.apply_move(&mines, Pos::new(0, 0)).unwrap();

        assert_eq!(status, GameStatus::Won);
        assert!(game.completed);
        assert_eq!(game.status(), GameStatus::Won);

        let field = game.to_info().field;
        assert_eq!(field[2][2], "M");
        assert_eq!(field[0], vec!["0", "0", "0"]);
        assert_eq!(field[1], vec!["0", "1", "1"]);
        assert_eq!(field[2][..2], ["0", "1"]);
    }

    #[test]
    fn numbered_move_keeps_game_active() {
        let (mut game, mines) = game(3, 3, &[(1, 1)]);
        let status = game.apply_move(&mines, Pos::new(0, 0)).unwrap();

        assert_eq!(status, GameStatus::Active);
        assert!(!game.completed);
        assert_eq!(game.board.hidden_count(), 8);
    }

    #[test]
    fn win_requires_hidden_cells_to_equal_mines() {
        let (mut game, mines) = game(3, 1, &[(1, 0)]);
        assert_eq!(game.apply_move(&mines, Pos::new(0, 0)).unwrap(), GameStatus::Active);
        assert_eq!(game.apply_move(&mines, Pos::new(2, 0)).unwrap(), GameStatus::Won);
        assert_eq!(game.to_info().field, vec![vec!["1", "M", "1"]]);
    }

    #[test]
    fn hitting_a_mine_discloses_everything() {
        let (mut game, mines) = game(4, 4, &[(0, 0), (3, 3), (1, 2)]);
        let status = game.apply_move(&mines, Pos::new(3, 3)).unwrap();

        assert_eq!(status, GameStatus::Lost);
        assert!(game.completed);
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.board.get(Pos::new(3, 3)), Some(CellState::ExplodedMine));
        assert_eq!(game.board.get(Pos::new(0, 0)), Some(CellState::Mine));
        assert_eq!(game.board.get(Pos::new(1, 2)), Some(CellState::Mine));
        assert_eq!(game.board.hidden_count(), 0);
        assert_eq!(game.board.get(Pos::new(1, 1)), Some(CellState::Revealed(2)));
    }

    #[test]
    fn revealed_cell_is_rejected_without_change() {
        let (mut game, mines) = game(3, 3, &[(1, 1)]);
        game.apply_move(&mines, Pos::new(0, 0)).unwrap();
        let before = game.clone();

        for _ in 0..2 {
            assert!(matches!(
                game.apply_move(&mines, Pos::new(0, 0)),
                Err(GameError::InvalidMove { col: 0, row: 0 })
            ));
            assert_eq!(game, before);
        }
    }

    #[test]
    fn completed_game_rejects_moves() {
        let (mut game, mines) = game(2, 2, &[(0, 0)]);
        game.apply_move(&mines, Pos::new(0, 0)).unwrap();
        let before = game.clone();

        for col in 0..2 {
            for row in 0..2 {
                assert!(game.apply_move(&mines, Pos::new(col, row)).is_err());
            }
        }
        assert_eq!(game, before);
    }

    #[test]
    fn out_of_bounds_move_is_invalid() {
        let (mut game, mines) = game(2, 2, &[(0, 0)]);
        assert!(matches!(
            game.apply_move(&mines, Pos::new(5, 0)),
            Err(GameError::InvalidMove { col: 5, row: 0 })
        ));
    }
}
