use std::collections::HashSet;

use rand::Rng;

use crate::{
    board::{self, Pos},
    error::{GameError, Result},
};

/// Positions of every mine in one game. Fixed once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MineLayout {
    positions: HashSet<Pos>,
}

/// Largest board accepted, in cells.
pub const MAX_CELLS: usize = 250_000;

pub fn validate(width: usize, height: usize, mine_count: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(GameError::InvalidConfiguration(format!(
            "board must be at least 1x1, got {}x{}",
            width, height
        )));
    }

    let cells = width.checked_mul(height).ok_or_else(|| {
        GameError::InvalidConfiguration(format!("board {}x{} is too large", width, height))
    })?;

    if cells > MAX_CELLS {
        return Err(GameError::InvalidConfiguration(format!(
            "board {}x{} has {} cells, at most {} are allowed",
            width, height, cells, MAX_CELLS
        )));
    }

    if mine_count == 0 || mine_count >= cells {
        return Err(GameError::InvalidConfiguration(format!(
            "mine count must be between 1 and {}, got {}",
            cells - 1,
            mine_count
        )));
    }

    Ok(())
}

impl MineLayout {
    /// Places `mine_count` mines uniformly at random by sampling cells and
    /// rejecting duplicates.
    pub fn generate<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        mine_count: usize,
        rng: &mut R,
    ) -> Result<Self> {
        validate(width, height, mine_count)?;

        let mut positions = HashSet::with_capacity(mine_count);
        while positions.len() < mine_count {
            positions.insert(Pos {
                col: rng.random_range(0..width),
                row: rng.random_range(0..height),
            });
        }

        Ok(Self { positions })
    }

    pub fn from_positions(positions: impl IntoIterator<Item = Pos>) -> Self {
        Self {
            positions: positions.into_iter().collect(),
        }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.positions.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions.iter().copied()
    }

    /// Number of mines among the in-bounds neighbours of `pos`.
    pub fn adjacent_count(&self, pos: Pos, width: usize, height: usize) -> u8 {
        board::neighbors(pos, width, height)
            .filter(|neighbor| self.contains(*neighbor))
            .count() as u8
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn generates_exact_count_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mines = MineLayout::generate(9, 5, 20, &mut rng).unwrap();
            assert_eq!(mines.len(), 20);
            assert!(mines.iter().all(|pos| pos.col < 9 && pos.row < 5));
        }
    }

    #[test]
    fn fills_all_but_one_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        let mines = MineLayout::generate(3, 3, 8, &mut rng).unwrap();
        assert_eq!(mines.len(), 8);
    }

    #[test]
    fn rejects_bad_configuration() {
        let mut rng = StdRng::seed_from_u64(0);
        for (width, height, count) in [(2, 2, 4), (2, 2, 5), (0, 3, 1), (3, 0, 1), (3, 3, 0)] {
            assert!(matches!(
                MineLayout::generate(width, height, count, &mut rng),
                Err(GameError::InvalidConfiguration(_))
            ));
        }
        assert!(MineLayout::generate(2, 2, 3, &mut rng).is_ok());
    }

    #[test]
    fn rejects_overflowing_board() {
        assert!(matches!(
            validate(usize::MAX, 2, 1),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_board_above_cell_limit() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            MineLayout::generate(1usize << 32, 1usize << 30, 1, &mut rng),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            validate(100_000, 100_000, 1),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            validate(MAX_CELLS + 1, 1, 1),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(validate(MAX_CELLS, 1, 1).is_ok());
    }

    #[test]
    fn counts_adjacent_mines() {
        let mines = MineLayout::from_positions([Pos::new(0, 0), Pos::new(2, 0), Pos::new(1, 2)]);
        assert_eq!(mines.adjacent_count(Pos::new(1, 1), 3, 3), 3);
        assert_eq!(mines.adjacent_count(Pos::new(1, 0), 3, 3), 2);
        assert_eq!(mines.adjacent_count(Pos::new(2, 2), 3, 3), 1);
        // the cell itself is not a neighbour
        assert_eq!(mines.adjacent_count(Pos::new(0, 0), 3, 3), 0);
    }
}
