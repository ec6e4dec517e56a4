// src/grid/mod.rs

use crate::core::{DX, DY};

/// True iff `(x, y)` lies in `[0, n) × [0, m)`.
pub fn in_bounds(x: i32, y: i32, n: i32, m: i32) -> bool {
    x >= 0 && x < n && y >= 0 && y < m
}

/// In-bounds 4-neighbours of `(x, y)`, in `DX`/`DY` order (right, left, down, up).
pub fn neighbors(x: i32, y: i32, n: i32, m: i32) -> impl Iterator<Item = (i32, i32)> {
    DX.into_iter()
        .zip(DY)
        .map(move |(dx, dy)| (x + dx, y + dy))
        .filter(move |&(nx, ny)| in_bounds(nx, ny, n, m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds_edges() {
        assert!(in_bounds(0, 0, 5, 5));
        assert!(in_bounds(4, 4, 5, 5));
        assert!(!in_bounds(-1, 0, 5, 5));
        assert!(!in_bounds(0, -1, 5, 5));
        assert!(!in_bounds(5, 0, 5, 5));
        assert!(!in_bounds(0, 5, 5, 5));
        assert!(!in_bounds(0, 0, 0, 0));
    }

    #[test]
    fn test_in_bounds_exhaustive() {
        for n in 0..4 {
            for m in 0..4 {
                for x in -2..6 {
                    for y in -2..6 {
                        let expected = 0 <= x && x < n && 0 <= y && y < m;
                        assert_eq!(in_bounds(x, y, n, m), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_neighbors_order_and_clipping() {
        let inner: Vec<_> = neighbors(1, 1, 3, 3).collect();
        assert_eq!(inner, vec![(1, 2), (1, 0), (2, 1), (0, 1)]);

        let corner: Vec<_> = neighbors(0, 0, 3, 3).collect();
        assert_eq!(corner, vec![(0, 1), (1, 0)]);

        assert_eq!(neighbors(0, 0, 1, 1).count(), 0);
    }
}
