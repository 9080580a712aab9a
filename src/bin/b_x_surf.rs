// src/bin/b_x_surf.rs
//
// Bx rendered as a surface raised along the x-axis: each node (x, y) maps to
// the 3D point (Bx_scaled, y, x), so the sheet folds around the wire's sign
// change. Iso-contours of Bx are drawn on the sheet.
//
// Run:
//   cargo run --release --bin b_x_surf
//
// Output:
//   out/B_x_surf.png   (transparent background)
//   out/B_x_surf.json

use std::fs::create_dir_all;
use std::path::Path;

use wirefield::config::FigureConfig;
use wirefield::grid::Grid2D;
use wirefield::params::WireParams;
use wirefield::scalar_field::ScalarField2D;
use wirefield::scene::camera::Camera;
use wirefield::scene::colormap::Colormap;
use wirefield::scene::contour::iso_lines;
use wirefield::scene::mesh::{PolyLine, TriMesh};
use wirefield::scene::Scene;
use wirefield::wire;

const DISPLAY_SCALE: f64 = 2e5; // lifts Bx (~1e-6 T) to order-one offsets
const N_CONTOURS: usize = 25;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid2D::new(50, 1.0);
    let params = WireParams::default();

    let b = wire::b_x_direct(&grid, &params);
    let bx = ScalarField2D {
        grid,
        data: b.data.iter().map(|v| v[0]).collect(),
    }
    .scaled(DISPLAY_SCALE);

    // node (x, y) -> 3D point (Bx, y, x): the field value is the x-offset
    let mut points = Vec::with_capacity(grid.n_points());
    for j in 0..grid.n {
        for i in 0..grid.n {
            let (x, y) = grid.point(i, j);
            points.push([bx.data[bx.idx(i, j)], y, x]);
        }
    }

    let mut scene = Scene::new(1000, 600);
    scene.set_camera(Camera::view_vector([1.0, 2.0, 1.0], [0.0, 0.0, 1.0]).zoom(1.3));
    scene.add_mesh(TriMesh::structured_surface(
        grid.n,
        &points,
        &bx.data,
        &Colormap::cool(),
    ));

    // contour point (cx, cy) at iso-level v -> 3D point (v, cy, cx)
    for set in iso_lines(&bx, N_CONTOURS) {
        for seg in &set.segments {
            scene.add_line(PolyLine {
                points: vec![
                    [set.level, seg[0][1], seg[0][0]],
                    [set.level, seg[1][1], seg[1][0]],
                ],
                color: [0, 0, 0],
            });
        }
    }

    let out_dir = Path::new("out");
    create_dir_all(out_dir)?;
    scene.screenshot(&out_dir.join("B_x_surf.png"))?;

    FigureConfig::new("B_x_surf.png", &grid, &params)
        .with_camera([1.0, 2.0, 1.0], [0.0, 0.0, 1.0], 1.3)
        .write_to_dir(out_dir)?;

    println!("Wrote out/B_x_surf.png");
    Ok(())
}
