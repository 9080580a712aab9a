// src/scene/contour.rs
//
// Marching-squares iso-line extraction over a sampled scalar field. Output is
// raw line segments in grid (x, y) coordinates; the figures lift them into 3D
// themselves (onto a raised surface or a flat plane).

use crate::scalar_field::ScalarField2D;

/// Line segments of one iso-level, as (x, y) endpoint pairs.
pub struct ContourSet {
    pub level: f64,
    pub segments: Vec<[[f64; 2]; 2]>,
}

/// Extract `n_levels` iso-lines at evenly spaced interior levels between the
/// field minimum and maximum. Levels at the exact extremes would be empty or
/// degenerate, so they are never requested.
pub fn iso_lines(field: &ScalarField2D, n_levels: usize) -> Vec<ContourSet> {
    let (lo, hi) = field.min_max();
    if !(hi > lo) || n_levels == 0 {
        return Vec::new();
    }
    (0..n_levels)
        .map(|k| {
            let level = lo + (k + 1) as f64 * (hi - lo) / (n_levels + 1) as f64;
            ContourSet {
                level,
                segments: marching_squares(field, level),
            }
        })
        .collect()
}

/// Interpolation parameter of the `level` crossing on the edge from a to b.
fn cross_t(a: f64, b: f64, level: f64) -> f64 {
    if (b - a).abs() < 1e-300 {
        0.5
    } else {
        (level - a) / (b - a)
    }
}

fn marching_squares(field: &ScalarField2D, level: f64) -> Vec<[[f64; 2]; 2]> {
    let n = field.grid.n;
    let mut segments = Vec::new();

    for j in 0..n - 1 {
        for i in 0..n - 1 {
            let (x0, y0) = field.grid.point(i, j);
            let (x1, y1) = field.grid.point(i + 1, j + 1);

            let v00 = field.data[field.idx(i, j)];
            let v10 = field.data[field.idx(i + 1, j)];
            let v11 = field.data[field.idx(i + 1, j + 1)];
            let v01 = field.data[field.idx(i, j + 1)];

            let case = (v00 >= level) as u8
                | ((v10 >= level) as u8) << 1
                | ((v11 >= level) as u8) << 2
                | ((v01 >= level) as u8) << 3;
            if case == 0 || case == 15 {
                continue;
            }

            // crossing points on the four cell edges
            let bottom = [x0 + cross_t(v00, v10, level) * (x1 - x0), y0];
            let top = [x0 + cross_t(v01, v11, level) * (x1 - x0), y1];
            let left = [x0, y0 + cross_t(v00, v01, level) * (y1 - y0)];
            let right = [x1, y0 + cross_t(v10, v11, level) * (y1 - y0)];

            match case {
                1 | 14 => segments.push([bottom, left]),
                2 | 13 => segments.push([bottom, right]),
                3 | 12 => segments.push([left, right]),
                4 | 11 => segments.push([right, top]),
                6 | 9 => segments.push([bottom, top]),
                7 | 8 => segments.push([left, top]),
                5 | 10 => {
                    // saddle cell: disambiguate with the centre value
                    let center_high = 0.25 * (v00 + v10 + v11 + v01) >= level;
                    let connect_diag = (case == 5) == center_high;
                    if connect_diag {
                        segments.push([bottom, right]);
                        segments.push([left, top]);
                    } else {
                        segments.push([bottom, left]);
                        segments.push([right, top]);
                    }
                }
                _ => unreachable!(),
            }
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid2D;

    #[test]
    fn linear_field_contours_are_straight_and_on_level() {
        // f(x, y) = x on [-1, 1]^2; the single interior level is x = 0
        let field = ScalarField2D::from_fn(Grid2D::new(11, 1.0), |x, _| x);
        let sets = iso_lines(&field, 1);
        assert_eq!(sets.len(), 1);
        assert!((sets[0].level).abs() < 1e-12);
        assert!(!sets[0].segments.is_empty());
        for seg in &sets[0].segments {
            for p in seg {
                assert!(p[0].abs() < 1e-12, "contour point off the x = 0 line: {p:?}");
            }
        }
    }

    #[test]
    fn level_count_matches_request_for_radial_field() {
        let field = ScalarField2D::from_fn(Grid2D::new(41, 1.0), |x, y| -(x * x + y * y));
        let sets = iso_lines(&field, 25);
        assert_eq!(sets.len(), 25);
        for set in &sets {
            assert!(
                !set.segments.is_empty(),
                "interior level {} produced no segments",
                set.level
            );
        }
    }
}
