use crate::{
    board::{Board, CellState, Pos},
    mines::MineLayout,
};

/// Reveals `start` and flood-fills outward through cells without adjacent
/// mines. The caller guarantees `start` is not a mine.
///
/// Does nothing for out-of-bounds or already revealed cells. Returns the
/// number of cells revealed.
pub fn reveal(board: &mut Board, mines: &MineLayout, start: Pos) -> usize {
    if board.get(start) != Some(CellState::Hidden) {
        return 0;
    }

    let (width, height) = (board.width(), board.height());
    let mut revealed = 0;
    let mut stack = vec![start];

    while let Some(pos) = stack.pop() {
        // a cell can be queued by several neighbours before it is reached
        if board.get(pos) != Some(CellState::Hidden) {
            continue;
        }

        let adjacent = mines.adjacent_count(pos, width, height);
        board.set(pos, CellState::Revealed(adjacent));
        revealed += 1;

        if adjacent == 0 {
            stack.extend(
                board
                    .neighbors(pos)
                    .filter(|neighbor| board.get(*neighbor) == Some(CellState::Hidden)),
            );
        }
    }

    revealed
}

/// Reveals every hidden cell that does not cover a mine.
pub fn reveal_all_remaining(board: &mut Board, mines: &MineLayout) -> usize {
    let mut revealed = 0;
    for pos in board.positions() {
        if !mines.contains(pos) {
            revealed += reveal(board, mines, pos);
        }
    }
    revealed
}
