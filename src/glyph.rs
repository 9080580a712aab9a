// src/glyph.rs
//
// Direction + colour decomposition of a sampled vector field, the intermediate
// form consumed by arrow-glyph rendering. Derived from exactly one field on one
// grid and discarded after the figure is produced.

use crate::vec3;
use crate::vector_field::VectorField2D;

/// Flattened glyph samples: one 3D point, one unit direction and one colour
/// scalar per grid node. `log_magnitude` (log10 |v|) is a colour channel only,
/// never a geometric length.
pub struct GlyphField {
    pub points: Vec<[f64; 3]>,
    pub directions: Vec<[f64; 3]>,
    pub log_magnitude: Vec<f64>,
}

impl GlyphField {
    /// Flatten `field` into per-node samples in the plane z = z_plane.
    ///
    /// Aborts with a diagnostic if any sample magnitude is zero or non-finite;
    /// the upstream radius clamp makes that impossible for the wire fields, so
    /// hitting it means a broken sampler, not recoverable input.
    pub fn from_field(field: &VectorField2D, z_plane: f64) -> Self {
        let n = field.grid.n;
        let n_points = field.grid.n_points();
        let mut points = Vec::with_capacity(n_points);
        let mut directions = Vec::with_capacity(n_points);
        let mut log_magnitude = Vec::with_capacity(n_points);

        for j in 0..n {
            for i in 0..n {
                let (x, y) = field.grid.point(i, j);
                let v = field.data[field.idx(i, j)];
                let mag = vec3::norm(v);
                assert!(
                    mag.is_finite() && mag > 0.0,
                    "degenerate glyph magnitude {mag} at node ({i}, {j})"
                );
                points.push([x, y, z_plane]);
                directions.push(vec3::scale(v, 1.0 / mag));
                log_magnitude.push(mag.log10());
            }
        }

        Self {
            points,
            directions,
            log_magnitude,
        }
    }

    /// Number of glyph samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Pull each point back along its own direction by half the glyph length,
    /// so a glyph of length `factor` drawn from the translated point appears
    /// centred on the original grid node.
    pub fn center_on_nodes(&mut self, factor: f64) {
        for (pt, dir) in self.points.iter_mut().zip(&self.directions) {
            for a in 0..3 {
                pt[a] -= 0.5 * factor * dir[a];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid2D;
    use crate::params::WireParams;
    use crate::wire;

    #[test]
    fn directions_are_unit_length() {
        let grid = Grid2D::new(8, 1.0);
        let field = wire::grad_a(&grid, &WireParams::default());
        let glyphs = GlyphField::from_field(&field, 0.0);
        for d in &glyphs.directions {
            let norm = vec3::norm(*d);
            assert!((norm - 1.0).abs() < 1e-9, "norm not ~1 (got {norm})");
        }
    }

    #[test]
    fn centering_shifts_against_the_direction() {
        let grid = Grid2D::new(8, 1.0);
        let field = wire::grad_a(&grid, &WireParams::default());
        let mut glyphs = GlyphField::from_field(&field, 0.0);
        let before = glyphs.points.clone();

        let factor = 0.25;
        glyphs.center_on_nodes(factor);

        for k in 0..glyphs.len() {
            for a in 0..3 {
                let expected = before[k][a] - 0.5 * factor * glyphs.directions[k][a];
                assert_eq!(glyphs.points[k][a], expected);
            }
        }
    }
}
