// src/scalar_field.rs

use crate::grid::Grid2D;

/// Scalar quantity sampled on a 2D grid.
/// One value per node, flat row-major storage matching `Grid2D::idx`.
pub struct ScalarField2D {
    pub grid: Grid2D,
    pub data: Vec<f64>,
}

impl ScalarField2D {
    /// Create a zero-initialised field on the given grid.
    pub fn new(grid: Grid2D) -> Self {
        let n = grid.n_points();
        Self {
            grid,
            data: vec![0.0; n],
        }
    }

    /// Evaluate f(x, y) at every node.
    pub fn from_fn<F>(grid: Grid2D, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
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

    /// Uniformly rescaled copy (display scaling only, not new physics).
    pub fn scaled(&self, factor: f64) -> ScalarField2D {
        ScalarField2D {
            grid: self.grid,
            data: self.data.iter().map(|&v| v * factor).collect(),
        }
    }

    /// Minimum and maximum over all finite samples.
    /// Falls back to (-1, 1) if no finite sample exists.
    pub fn min_max(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in &self.data {
            if v.is_finite() {
                if v < lo {
                    lo = v;
                }
                if v > hi {
                    hi = v;
                }
            }
        }
        if !lo.is_finite() || !hi.is_finite() {
            return (-1.0, 1.0);
        }
        (lo, hi)
    }
}
