use std::fmt;

use minesweeper_common::models::{EXPLODED_MINE, HIDDEN, MINE};

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell coordinate. `col` runs along the width, `row` along the height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub col: usize,
    pub row: usize,
}

impl Pos {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Visible state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Hidden,
    Revealed(u8),
    Mine,
    ExplodedMine,
}

impl CellState {
    pub fn is_hidden(self) -> bool {
        self == Self::Hidden
    }

    /// External single-character form of the cell.
    pub fn symbol(self) -> &'static str {
        const DIGITS: [&str; 9] = ["0", "1", "2", "3", "4", "5", "6", "7", "8"];

        match self {
            Self::Hidden => HIDDEN,
            Self::Revealed(adjacent) => DIGITS[usize::from(adjacent.min(8))],
            Self::Mine => MINE,
            Self::ExplodedMine => EXPLODED_MINE,
        }
    }
}

/// Fixed-size grid of cells, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Creates an all-hidden board.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Hidden; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.col < self.width && pos.row < self.height
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.width + pos.col)
    }

    pub fn get(&self, pos: Pos) -> Option<CellState> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Overwrites a cell. Out-of-bounds positions are ignored.
    pub fn set(&mut self, pos: Pos, state: CellState) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = state;
        }
    }

    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_hidden()).count()
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Pos { col, row }))
    }

    /// In-bounds Moore neighbours of `pos`.
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + use<> {
        neighbors(pos, self.width, self.height)
    }

    /// Field as rows of strings, indexed `[row][col]`.
    pub fn render(&self) -> Vec<Vec<String>> {
        if self.width == 0 {
            return Vec::new();
        }

        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|cell| cell.symbol().to_string()).collect())
            .collect()
    }
}

pub(crate) fn neighbors(pos: Pos, width: usize, height: usize) -> impl Iterator<Item = Pos> {
    NEIGHBOR_OFFSETS.iter().filter_map(move |&(dc, dr)| {
        let col = pos.col.checked_add_signed(dc)?;
        let row = pos.row.checked_add_signed(dr)?;
        (col < width && row < height).then_some(Pos { col, row })
    })
}
