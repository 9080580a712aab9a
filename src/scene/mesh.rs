// src/scene/mesh.rs
//
// Mesh builders for everything the figures draw: structured surfaces, arrow
// glyphs, the wire cylinder and contour poly-lines. Meshes carry one flat
// colour per face; shading happens at raster time.

use crate::glyph::GlyphField;
use crate::scene::colormap::Colormap;
use crate::vec3::{add, cross, normalize, scale};

/// Triangle mesh with one flat colour per face.
pub struct TriMesh {
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<[usize; 3]>,
    pub face_colors: Vec<[u8; 3]>,
}

/// Poly-line drawn in world space.
pub struct PolyLine {
    pub points: Vec<[f64; 3]>,
    pub color: [u8; 3],
}

/// How a batch of arrow glyphs is coloured.
pub enum GlyphStyle<'a> {
    /// Per-glyph colour: log10-magnitude channel mapped over its own range.
    Mapped(&'a Colormap),
    /// Single solid colour.
    Solid([u8; 3]),
}

impl TriMesh {
    fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
            face_colors: Vec::with_capacity(faces),
        }
    }

    fn push_tri(&mut self, a: usize, b: usize, c: usize, color: [u8; 3]) {
        self.faces.push([a, b, c]);
        self.face_colors.push(color);
    }

    /// Structured surface over an n x n sheet of row-major `points`, coloured
    /// by `scalars` through `cmap`. Two triangles per quad, flat colour from
    /// the mean of the four corner scalars.
    pub fn structured_surface(
        n: usize,
        points: &[[f64; 3]],
        scalars: &[f64],
        cmap: &Colormap,
    ) -> TriMesh {
        debug_assert_eq!(points.len(), n * n);
        debug_assert_eq!(scalars.len(), n * n);

        let (lo, hi) = finite_min_max(scalars);

        let n_quads = (n - 1) * (n - 1);
        let mut mesh = TriMesh::with_capacity(points.len(), 2 * n_quads);
        mesh.vertices.extend_from_slice(points);

        for j in 0..n - 1 {
            for i in 0..n - 1 {
                let k00 = j * n + i;
                let k10 = k00 + 1;
                let k01 = k00 + n;
                let k11 = k01 + 1;
                let mean = 0.25 * (scalars[k00] + scalars[k10] + scalars[k11] + scalars[k01]);
                let color = cmap.sample_range(mean, lo, hi);
                mesh.push_tri(k00, k10, k11, color);
                mesh.push_tri(k00, k11, k01, color);
            }
        }
        mesh
    }

    /// Solid cylinder, `height` long along `direction`, centred at `center`.
    /// Stands in for the wire.
    pub fn cylinder(
        center: [f64; 3],
        direction: [f64; 3],
        radius: f64,
        height: f64,
        color: [u8; 3],
    ) -> TriMesh {
        const SEGMENTS: usize = 24;

        let (u, v, w) = orthonormal_frame(direction);
        let bottom = add(center, scale(w, -0.5 * height));
        let top = add(center, scale(w, 0.5 * height));

        let mut mesh = TriMesh::with_capacity(2 * SEGMENTS + 2, 4 * SEGMENTS);
        for s in 0..SEGMENTS {
            let phi = 2.0 * std::f64::consts::PI * s as f64 / SEGMENTS as f64;
            let rim = add(scale(u, radius * phi.cos()), scale(v, radius * phi.sin()));
            mesh.vertices.push(add(bottom, rim));
            mesh.vertices.push(add(top, rim));
        }
        let b_center = mesh.vertices.len();
        mesh.vertices.push(bottom);
        let t_center = mesh.vertices.len();
        mesh.vertices.push(top);

        for s in 0..SEGMENTS {
            let s1 = (s + 1) % SEGMENTS;
            let (b0, t0) = (2 * s, 2 * s + 1);
            let (b1, t1) = (2 * s1, 2 * s1 + 1);
            // side quad
            mesh.push_tri(b0, b1, t1, color);
            mesh.push_tri(b0, t1, t0, color);
            // caps
            mesh.push_tri(b_center, b1, b0, color);
            mesh.push_tri(t_center, t0, t1, color);
        }
        mesh
    }

    /// Fixed-length arrow glyph from `base` along the unit `direction`:
    /// a shaft (radius 5% of the length, first 75%) capped by a cone
    /// (radius 10%, last 25%).
    pub fn arrow(base: [f64; 3], direction: [f64; 3], length: f64, color: [u8; 3]) -> TriMesh {
        const SEGMENTS: usize = 12;

        let (u, v, w) = orthonormal_frame(direction);
        let shaft_r = 0.05 * length;
        let tip_r = 0.10 * length;
        let neck = add(base, scale(w, 0.75 * length));
        let apex = add(base, scale(w, length));

        // ring layout per segment: shaft base, shaft neck, cone rim
        let mut mesh = TriMesh::with_capacity(3 * SEGMENTS + 2, 7 * SEGMENTS);
        for s in 0..SEGMENTS {
            let phi = 2.0 * std::f64::consts::PI * s as f64 / SEGMENTS as f64;
            let dir = add(scale(u, phi.cos()), scale(v, phi.sin()));
            mesh.vertices.push(add(base, scale(dir, shaft_r)));
            mesh.vertices.push(add(neck, scale(dir, shaft_r)));
            mesh.vertices.push(add(neck, scale(dir, tip_r)));
        }
        let base_center = mesh.vertices.len();
        mesh.vertices.push(base);
        let apex_idx = mesh.vertices.len();
        mesh.vertices.push(apex);

        for s in 0..SEGMENTS {
            let s1 = (s + 1) % SEGMENTS;
            let (b0, n0, c0) = (3 * s, 3 * s + 1, 3 * s + 2);
            let (b1, n1, c1) = (3 * s1, 3 * s1 + 1, 3 * s1 + 2);
            // shaft side
            mesh.push_tri(b0, b1, n1, color);
            mesh.push_tri(b0, n1, n0, color);
            // annulus between shaft and cone rim
            mesh.push_tri(n0, n1, c1, color);
            mesh.push_tri(n0, c1, c0, color);
            // cone side
            mesh.push_tri(c0, c1, apex_idx, color);
            // base cap
            mesh.push_tri(base_center, b1, b0, color);
        }
        mesh
    }
}

/// Right-handed orthonormal frame (u, v, w) with w along `direction`.
fn orthonormal_frame(direction: [f64; 3]) -> ([f64; 3], [f64; 3], [f64; 3]) {
    let w = normalize(direction);
    let helper = if w[0].abs() < 0.9 {
        [1.0, 0.0, 0.0]
    } else {
        [0.0, 1.0, 0.0]
    };
    let u = normalize(cross(helper, w));
    let v = cross(w, u);
    (u, v, w)
}

/// One arrow mesh per glyph sample, all with the same length `factor`.
/// Colour per `style`; the mapped range is the glyph field's own
/// log-magnitude extent, matching how the surface colours scale.
pub fn arrow_glyphs(glyphs: &GlyphField, factor: f64, style: GlyphStyle) -> Vec<TriMesh> {
    let (lo, hi) = finite_min_max(&glyphs.log_magnitude);
    (0..glyphs.len())
        .map(|k| {
            let color = match &style {
                GlyphStyle::Mapped(cmap) => cmap.sample_range(glyphs.log_magnitude[k], lo, hi),
                GlyphStyle::Solid(c) => *c,
            };
            TriMesh::arrow(glyphs.points[k], glyphs.directions[k], factor, color)
        })
        .collect()
}

/// Min/max over finite values, with a (-1, 1) fallback when nothing is finite.
fn finite_min_max(values: &[f64]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_builds_two_triangles_per_quad() {
        let n = 3;
        let points: Vec<[f64; 3]> = (0..9).map(|k| [(k % 3) as f64, (k / 3) as f64, 0.0]).collect();
        let scalars: Vec<f64> = (0..9).map(|k| k as f64).collect();
        let mesh = TriMesh::structured_surface(n, &points, &scalars, &Colormap::cool());
        assert_eq!(mesh.vertices.len(), 9);
        assert_eq!(mesh.faces.len(), 8); // 4 quads
        assert_eq!(mesh.face_colors.len(), mesh.faces.len());
    }

    #[test]
    fn arrow_spans_exactly_its_length() {
        let mesh = TriMesh::arrow([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], 0.25, [255, 165, 0]);
        let z_max = mesh
            .vertices
            .iter()
            .map(|v| v[2])
            .fold(f64::NEG_INFINITY, f64::max);
        let z_min = mesh.vertices.iter().map(|v| v[2]).fold(f64::INFINITY, f64::min);
        assert!((z_max - 0.25).abs() < 1e-12);
        assert!(z_min.abs() < 1e-12);
    }
}
