//! Terminal-state detection

use crate::board::Grid;
use crate::moves::can_move;
use crate::types::{GameStatus, Tile};

/// True once any cell holds `target`.
pub fn has_won(grid: &Grid, target: Tile) -> bool {
    grid.contains(target)
}

/// True if none of the four directions changes the grid.
///
/// Every direction is actually slid and compared, rather than inferring it
/// from empty cells and neighbours.
pub fn is_stuck(grid: &Grid) -> bool {
    !can_move(grid)
}

/// Terminal status implied by the grid alone, if any.
///
/// Win takes precedence: a stuck grid holding the target is still a win.
pub fn evaluate(grid: &Grid, target: Tile) -> Option<GameStatus> {
    if has_won(grid, target) {
        Some(GameStatus::Won)
    } else if is_stuck(grid) {
        Some(GameStatus::Lost)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TARGET_TILE;

    fn grid(rows: [[u32; 4]; 4]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_win_detection() {
        let g = grid([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(has_won(&g, TARGET_TILE));
        assert_eq!(evaluate(&g, TARGET_TILE), Some(GameStatus::Won));
        assert!(!has_won(&Grid::new(), TARGET_TILE));
    }

    #[test]
    fn test_full_grid_without_pairs_is_stuck() {
        let g = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(g.is_full());
        assert!(!g.has_adjacent_pair());
        assert!(is_stuck(&g));
        assert_eq!(evaluate(&g, TARGET_TILE), Some(GameStatus::Lost));
    }

    #[test]
    fn test_full_grid_with_pair_is_not_stuck() {
        let g = grid([[2, 2, 4, 8], [4, 8, 16, 32], [8, 16, 32, 64], [16, 32, 64, 128]]);
        assert!(g.is_full());
        assert!(!is_stuck(&g));
        assert_eq!(evaluate(&g, TARGET_TILE), None);
    }

    #[test]
    fn test_grid_with_empty_cell_is_not_stuck() {
        let g = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 0]]);
        assert!(!is_stuck(&g));
    }

    #[test]
    fn test_empty_grid_is_stuck() {
        // Nothing can slide on an empty grid; the game never reaches this
        // state because it always starts with two tiles.
        assert!(is_stuck(&Grid::new()));
    }

    #[test]
    fn test_stuck_matches_neighbour_shortcut() {
        let grids = [
            grid([[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 4, 2]]),
            grid([[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 4, 16]]),
            grid([[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 4, 0]]),
        ];
        for g in grids {
            assert_eq!(is_stuck(&g), g.is_full() && !g.has_adjacent_pair());
        }
    }
}
