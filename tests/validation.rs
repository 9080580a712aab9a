// tests/validation.rs
//
// Physics sanity checks for the analytic wire fields.
// Run with: cargo test
// Or only these tests: cargo test --test validation

use std::f64::consts::PI;

use approx::{assert_abs_diff_eq, assert_relative_eq};

use wirefield::glyph::GlyphField;
use wirefield::grid::Grid2D;
use wirefield::params::{WireParams, MU0};
use wirefield::scene::contour::iso_lines;
use wirefield::vec3;
use wirefield::wire;

#[test]
fn az_is_finite_and_decreasing_in_r() {
    // Walk outward along the +x half of the y = 0 row: r grows strictly, so
    // A_z ~ ln(1/r) must fall strictly.
    let grid = Grid2D::new(101, 1.0); // odd: node at the origin, row j = 50 is y = 0
    let p = WireParams::default();
    let az = wire::vector_potential_z(&grid, &p);

    let j = 50;
    let mut prev = f64::INFINITY;
    for i in 51..grid.n {
        let v = az.data[az.idx(i, j)];
        assert!(v.is_finite());
        assert!(
            v < prev,
            "A_z not strictly decreasing at i={i} (prev={prev}, got {v})"
        );
        prev = v;
    }
}

#[test]
fn b_is_quarter_turn_of_grad_a_with_equal_magnitude() {
    let grid = Grid2D::new(8, 1.0);
    let p = WireParams::default();
    let grad = wire::grad_a(&grid, &p);
    let b = wire::b_field(&grid, &p);

    for k in 0..grid.n_points() {
        let g = grad.data[k];
        let bv = b.data[k];
        // (Bx, By) = (-grad_Ay, grad_Ax), exactly
        assert_eq!(bv[0], -g[1]);
        assert_eq!(bv[1], g[0]);
        assert_eq!(bv[2], 0.0);
        // |B| == |grad A| at every node
        assert_relative_eq!(vec3::norm(bv), vec3::norm(g), max_relative = 1e-15);
    }
}

#[test]
fn normalized_directions_have_unit_length() {
    let grid = Grid2D::new(8, 1.0);
    let p = WireParams::default();
    let glyphs = GlyphField::from_field(&wire::b_field(&grid, &p), 0.0);
    for d in &glyphs.directions {
        assert!((vec3::norm(*d) - 1.0).abs() < 1e-9);
    }
}

#[test]
fn on_axis_sample_clamps_radius_to_epsilon() {
    let p = WireParams::default();
    // the clamped radius is exactly the configured epsilon
    assert_eq!(wire::safe_radius(0.0, 0.0, p.r_min), 1e-10);

    // and sampling a grid that contains the origin must not fault anywhere
    let grid = Grid2D::new(9, 1.0);
    let az = wire::vector_potential_z(&grid, &p);
    let grad = wire::grad_a(&grid, &p);
    for k in 0..grid.n_points() {
        assert!(az.data[k].is_finite());
        assert!(grad.data[k].iter().all(|c| c.is_finite()));
    }
}

#[test]
fn az_depends_only_on_radius() {
    let grid = Grid2D::new(8, 1.0);
    let p = WireParams::default();
    let az = wire::vector_potential_z(&grid, &p);
    let n = grid.n;

    for j in 0..n {
        for i in 0..n {
            let v = az.data[az.idx(i, j)];
            // (x, y) -> (y, x): coordinates swap exactly on a square grid
            assert_eq!(v, az.data[az.idx(j, i)]);
            // (x, y) -> (-x, -y): mirrored node, equal up to rounding
            assert_relative_eq!(
                v,
                az.data[az.idx(n - 1 - i, n - 1 - j)],
                max_relative = 1e-12
            );
        }
    }
}

#[test]
fn gradient_and_b_at_unit_radius_match_hand_values() {
    // axis = linspace(-1, 1, 8); node (7, ...) sits at x = 1. Pick the y = 0
    // point by sampling a 3-node grid instead, where (1, 0) is a node.
    let grid = Grid2D::new(3, 1.0);
    let p = WireParams::default();

    let grad = wire::grad_a(&grid, &p);
    let b = wire::b_field(&grid, &p);

    let k = grid.idx(2, 1); // (x, y) = (1, 0)
    let expected = -MU0 / (2.0 * PI); // = -2e-7 exactly for mu0 = 4 pi x 1e-7

    assert_abs_diff_eq!(grad.data[k][0], expected, epsilon = 1e-12);
    assert_abs_diff_eq!(grad.data[k][1], 0.0, epsilon = 1e-12);
    assert_eq!(grad.data[k][2], 0.0);

    // after the rotation rule: B = (0, -2e-7, 0)
    assert_abs_diff_eq!(b.data[k][0], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(b.data[k][1], expected, epsilon = 1e-12);
    assert_eq!(b.data[k][2], 0.0);

    // sanity on the constant itself
    assert_abs_diff_eq!(expected, -2e-7, epsilon = 1e-20);
}

#[test]
fn az_vanishes_at_unit_radius() {
    let grid = Grid2D::new(3, 1.0);
    let p = WireParams::default();
    let az = wire::vector_potential_z(&grid, &p);
    // r = 1 => ln(1/1) = 0 => A_z = 0 exactly
    assert_eq!(az.data[az.idx(2, 1)], 0.0);
}

#[test]
fn direct_bx_is_the_negated_rotated_gradient() {
    // The direct closed form carries the opposite sign convention to the
    // +90-degree rotation of grad A_z: equal magnitude, flipped x-component.
    let grid = Grid2D::new(8, 1.0);
    let p = WireParams::default();
    let b = wire::b_field(&grid, &p);
    let bx = wire::b_x_direct(&grid, &p);

    for k in 0..grid.n_points() {
        assert_relative_eq!(bx.data[k][0], -b.data[k][0], max_relative = 1e-12);
        assert_eq!(bx.data[k][1], 0.0);
        assert_eq!(bx.data[k][2], 0.0);
    }
}

#[test]
fn contour_points_lie_on_their_levels() {
    // Fine grid so the sampled field is smooth at contour scale; even node
    // count so no node sits on the wire (the clamped on-axis value would
    // dominate the level spacing). Compare the analytic A_z at each contour
    // point against its iso-level.
    let grid = Grid2D::new(200, 1.0);
    let p = WireParams::default();
    let az = wire::vector_potential_z(&grid, &p);
    let prefactor = p.current / (2.0 * PI * p.epsilon_0 * p.c * p.c);

    let sets = iso_lines(&az, 10);
    assert_eq!(sets.len(), 10);

    for set in &sets {
        assert!(!set.segments.is_empty());
        for seg in &set.segments {
            for pt in seg {
                let r = (pt[0] * pt[0] + pt[1] * pt[1]).sqrt();
                let analytic = prefactor * (1.0 / r).ln();
                assert_relative_eq!(analytic, set.level, max_relative = 2e-2);
            }
        }
    }
}

#[test]
fn glyph_centering_recovers_grid_nodes() {
    let grid = Grid2D::new(8, 1.0);
    let p = WireParams::default();
    let mut glyphs = GlyphField::from_field(&wire::grad_a(&grid, &p), 0.0);

    let factor = 0.25;
    glyphs.center_on_nodes(factor);

    let mut k = 0;
    for j in 0..grid.n {
        for i in 0..grid.n {
            let (x, y) = grid.point(i, j);
            let recovered = vec3::add(glyphs.points[k], vec3::scale(glyphs.directions[k], 0.5 * factor));
            assert_abs_diff_eq!(recovered[0], x, epsilon = 1e-12);
            assert_abs_diff_eq!(recovered[1], y, epsilon = 1e-12);
            assert_abs_diff_eq!(recovered[2], 0.0, epsilon = 1e-12);
            k += 1;
        }
    }
}
