// src/vector_field.rs

use crate::grid::Grid2D;

/// Vector quantity sampled on a 2D grid.
/// Each node stores (vx, vy, vz); flat row-major storage matching `Grid2D::idx`.
pub struct VectorField2D {
    pub grid: Grid2D,
    pub data: Vec<[f64; 3]>,
}

impl VectorField2D {
    /// Create a zero-initialised field on the given grid.
    pub fn new(grid: Grid2D) -> Self {
        let n = grid.n_points();
        Self {
            grid,
            data: vec![[0.0, 0.0, 0.0]; n],
        }
    }

    /// Evaluate f(x, y) -> (vx, vy, vz) at every node.
    pub fn from_fn<F>(grid: Grid2D, f: F) -> Self
    where
        F: Fn(f64, f64) -> [f64; 3],
    {
        let mut field = Self::new(grid);
        for j in 0..grid.n {
            for i in 0..grid.n {
                let (x, y) = grid.point(i, j);
                let idx = grid.idx(i, j);
                field.data[idx] = f(x, y);
            }
        }
        field
    }

    /// Get the flat index in `data` for grid indices (i, j).
    #[inline]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        self.grid.idx(i, j)
    }
}
