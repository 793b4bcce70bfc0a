//! Directional moves
//!
//! Each direction is mapped onto a left slide: reverse rows for `Right`,
//! transpose for `Up`, transpose and reverse for `Down`. The same transform is
//! applied in reverse afterwards, so [`reduce_row`] is the only merge logic.

use crate::board::Grid;
use crate::reduce::reduce_row;
use crate::types::{Direction, GRID_SIZE};

/// Outcome of sliding a grid in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub grid: Grid,
    /// Sum of every tile created by a merge during this move
    pub score: u32,
}

impl MoveResult {
    /// True if the move did anything to `before`.
    pub fn changed(&self, before: &Grid) -> bool {
        self.grid != *before
    }
}

/// Slide every tile of `grid` toward `direction`. No randomness.
pub fn slide(grid: &Grid, direction: Direction) -> MoveResult {
    let oriented = orient(grid, direction);
    let (reduced, score) = slide_left(&oriented);
    MoveResult {
        grid: unorient(&reduced, direction),
        score,
    }
}

/// True if at least one direction changes `grid`.
pub fn can_move(grid: &Grid) -> bool {
    Direction::ALL
        .iter()
        .any(|&dir| slide(grid, dir).changed(grid))
}

fn slide_left(grid: &Grid) -> (Grid, u32) {
    let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
    let mut score = 0;
    for (out, row) in rows.iter_mut().zip(grid.rows().iter()) {
        let (reduced, gained) = reduce_row(*row);
        *out = reduced;
        score += gained;
    }
    (Grid::from_rows_unchecked(rows), score)
}

/// Transform `grid` so that sliding `direction` becomes sliding left.
fn orient(grid: &Grid, direction: Direction) -> Grid {
    let g = if direction.is_vertical() {
        grid.transpose()
    } else {
        *grid
    };
    if direction.is_reversed() {
        g.reverse_rows()
    } else {
        g
    }
}

/// Inverse of [`orient`].
fn unorient(grid: &Grid, direction: Direction) -> Grid {
    let g = if direction.is_reversed() {
        grid.reverse_rows()
    } else {
        *grid
    };
    if direction.is_vertical() {
        g.transpose()
    } else {
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: [[u32; 4]; 4]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_slide_left() {
        let g = grid([[2, 2, 0, 0], [0, 4, 0, 4], [2, 4, 8, 16], [0, 0, 0, 2]]);
        let res = slide(&g, Direction::Left);
        assert_eq!(
            res.grid.to_array(),
            [[4, 0, 0, 0], [8, 0, 0, 0], [2, 4, 8, 16], [2, 0, 0, 0]]
        );
        assert_eq!(res.score, 12);
    }

    #[test]
    fn test_slide_right() {
        let g = grid([[2, 2, 2, 0], [0, 0, 0, 0], [4, 0, 0, 0], [2, 4, 4, 2]]);
        let res = slide(&g, Direction::Right);
        assert_eq!(
            res.grid.to_array(),
            [[0, 0, 2, 4], [0, 0, 0, 0], [0, 0, 0, 4], [0, 2, 8, 2]]
        );
        assert_eq!(res.score, 12);
    }

    #[test]
    fn test_slide_up() {
        let g = grid([[2, 0, 0, 0], [2, 0, 4, 0], [0, 0, 4, 0], [4, 8, 0, 0]]);
        let res = slide(&g, Direction::Up);
        assert_eq!(
            res.grid.to_array(),
            [[4, 8, 8, 0], [4, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
        );
        assert_eq!(res.score, 12);
    }

    #[test]
    fn test_slide_down() {
        let g = grid([[2, 0, 0, 0], [2, 0, 4, 0], [2, 0, 4, 0], [0, 8, 0, 0]]);
        let res = slide(&g, Direction::Down);
        assert_eq!(
            res.grid.to_array(),
            [[0, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [4, 8, 8, 0]]
        );
        assert_eq!(res.score, 12);
    }

    #[test]
    fn test_noop_is_detected_by_value() {
        let g = grid([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let res = slide(&g, Direction::Left);
        assert!(!res.changed(&g));
        assert_eq!(res.score, 0);
        assert!(slide(&g, Direction::Right).changed(&g));
    }

    #[test]
    fn test_packed_corner_moves_only_away() {
        // Tiles packed into the top-left corner: only Down and Right move.
        let g = grid([[2, 4, 0, 0], [8, 16, 0, 0], [0; 4], [0; 4]]);
        let moved: Vec<bool> = Direction::ALL
            .iter()
            .map(|&dir| slide(&g, dir).changed(&g))
            .collect();
        assert_eq!(moved, [false, true, false, true]);
        assert!(can_move(&g));
    }

    #[test]
    fn test_stuck_grid_cannot_move() {
        let g = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(!can_move(&g));
    }
}
