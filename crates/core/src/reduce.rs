//! Row reduction - the single slide primitive
//!
//! Every direction is expressed as a left slide over rows, so this is the
//! only place tiles are compacted and merged.

use arrayvec::ArrayVec;

use crate::types::{Row, GRID_SIZE};

/// Slide one row to the left.
///
/// Zeros are removed first, then the compacted tiles are scanned left to
/// right: two equal neighbours become one tile holding their sum and both
/// inputs are consumed, so a tile merges at most once per pass. Returns the
/// new row and the score gained (the sum of every merged tile).
///
/// `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`, not `[8, 0, 0, 0]`.
pub fn reduce_row(row: Row) -> (Row, u32) {
    let packed: ArrayVec<u32, GRID_SIZE> = row.iter().copied().filter(|&v| v != 0).collect();

    let mut out = [0; GRID_SIZE];
    let mut score = 0;
    let mut write = 0;
    let mut i = 0;

    while i < packed.len() {
        let value = packed[i];
        if i + 1 < packed.len() && packed[i + 1] == value {
            let merged = value * 2;
            out[write] = merged;
            score += merged;
            i += 2;
        } else {
            out[write] = value;
            i += 1;
        }
        write += 1;
    }

    (out, score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_row() {
        assert_eq!(reduce_row([0, 0, 0, 0]), ([0, 0, 0, 0], 0));
    }

    #[test]
    fn test_compaction_without_merge() {
        assert_eq!(reduce_row([0, 2, 0, 4]), ([2, 4, 0, 0], 0));
        assert_eq!(reduce_row([0, 0, 0, 8]), ([8, 0, 0, 0], 0));
        assert_eq!(reduce_row([2, 4, 8, 16]), ([2, 4, 8, 16], 0));
    }

    #[test]
    fn test_four_equal_tiles_merge_pairwise() {
        assert_eq!(reduce_row([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
    }

    #[test]
    fn test_merge_across_gap() {
        assert_eq!(reduce_row([2, 0, 2, 4]), ([4, 4, 0, 0], 4));
    }

    #[test]
    fn test_middle_pair_merges() {
        assert_eq!(reduce_row([2, 4, 4, 2]), ([2, 8, 2, 0], 8));
    }

    #[test]
    fn test_leftmost_pair_wins() {
        assert_eq!(reduce_row([4, 4, 4, 0]), ([8, 4, 0, 0], 8));
        assert_eq!(reduce_row([2, 2, 4, 4]), ([4, 8, 0, 0], 12));
        assert_eq!(reduce_row([8, 2, 2, 0]), ([8, 4, 0, 0], 4));
    }

    #[test]
    fn test_merged_tile_does_not_merge_again() {
        assert_eq!(reduce_row([4, 2, 2, 0]), ([4, 4, 0, 0], 4));
    }

    #[test]
    fn test_output_is_left_packed_and_conserves_sum() {
        let rows = [
            [0, 0, 2, 2],
            [2, 0, 0, 2],
            [4, 0, 4, 4],
            [16, 16, 0, 32],
            [2, 4, 2, 4],
        ];
        for row in rows {
            let (out, score) = reduce_row(row);
            let first_zero = out.iter().position(|&v| v == 0).unwrap_or(GRID_SIZE);
            assert!(out[first_zero..].iter().all(|&v| v == 0), "{:?}", out);
            assert_eq!(out.iter().sum::<u32>(), row.iter().sum::<u32>());

            let tiles_in = row.iter().filter(|&&v| v != 0).count();
            let tiles_out = out.iter().filter(|&&v| v != 0).count();
            assert_eq!(score == 0, tiles_in == tiles_out, "{:?}", row);
        }
    }
}
