// src/bin/a_z_surf_side.rs
//
// Raised surface z = A_z(x, y) (display-scaled) seen from the side, with
// iso-contour lines drawn on the surface itself.
//
// Run:
//   cargo run --release --bin a_z_surf_side
//
// Output:
//   out/A_z_surf_side.png   (transparent background)
//   out/A_z_surf_side.json

use std::fs::create_dir_all;
use std::path::Path;

use wirefield::config::FigureConfig;
use wirefield::grid::Grid2D;
use wirefield::params::WireParams;
use wirefield::scene::camera::Camera;
use wirefield::scene::colormap::Colormap;
use wirefield::scene::contour::iso_lines;
use wirefield::scene::mesh::{PolyLine, TriMesh};
use wirefield::scene::Scene;
use wirefield::wire;

const HEIGHT_SCALE: f64 = 5e5; // lifts A_z (~1e-7 Tm) to order-one heights
const N_CONTOURS: usize = 25;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid2D::new(1000, 1.0);
    let params = WireParams::default();

    let az = wire::vector_potential_z(&grid, &params).scaled(HEIGHT_SCALE);

    // surface geometry: the field value is the height
    let mut points = Vec::with_capacity(grid.n_points());
    for j in 0..grid.n {
        for i in 0..grid.n {
            let (x, y) = grid.point(i, j);
            points.push([x, y, az.data[az.idx(i, j)]]);
        }
    }

    let mut scene = Scene::new(1000, 600);
    scene.set_camera(Camera::view_vector([2.0, 2.0, 0.9], [0.0, 0.0, 1.0]).zoom(1.4));
    scene.add_mesh(TriMesh::structured_surface(
        grid.n,
        &points,
        &az.data,
        &Colormap::cool(),
    ));

    // contours live on the surface: their height is their own iso-level
    for set in iso_lines(&az, N_CONTOURS) {
        for seg in &set.segments {
            scene.add_line(PolyLine {
                points: vec![
                    [seg[0][0], seg[0][1], set.level],
                    [seg[1][0], seg[1][1], set.level],
                ],
                color: [0, 0, 0],
            });
        }
    }

    let out_dir = Path::new("out");
    create_dir_all(out_dir)?;
    scene.screenshot(&out_dir.join("A_z_surf_side.png"))?;

    FigureConfig::new("A_z_surf_side.png", &grid, &params)
        .with_camera([2.0, 2.0, 0.9], [0.0, 0.0, 1.0], 1.4)
        .write_to_dir(out_dir)?;

    println!("Wrote out/A_z_surf_side.png");
    Ok(())
}
