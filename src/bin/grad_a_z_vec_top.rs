// src/bin/grad_a_z_vec_top.rs
//
// Gradient of A_z as arrow glyphs, seen top-down: purely radial, pointing
// towards the wire (A_z grows towards the axis for positive current).
//
// Run:
//   cargo run --release --bin grad_a_z_vec_top
//
// Output:
//   out/grad_A_z_vec_top.png   (transparent background)
//   out/grad_A_z_vec_top.json

use std::fs::create_dir_all;
use std::path::Path;

use wirefield::config::FigureConfig;
use wirefield::glyph::GlyphField;
use wirefield::grid::Grid2D;
use wirefield::params::WireParams;
use wirefield::scene::camera::Camera;
use wirefield::scene::colormap::Colormap;
use wirefield::scene::mesh::{arrow_glyphs, GlyphStyle, TriMesh};
use wirefield::scene::Scene;
use wirefield::wire;

const GLYPH_FACTOR: f64 = 0.25;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid2D::new(8, 1.0);
    let params = WireParams::default();

    let grad = wire::grad_a(&grid, &params);
    let mut glyphs = GlyphField::from_field(&grad, 0.0);
    glyphs.center_on_nodes(GLYPH_FACTOR);

    let mut scene = Scene::new(1000, 600);
    scene.set_camera(Camera::view_vector([0.0, 0.0, 1.0], [0.0, 1.0, 0.0]).zoom(1.6));
    scene.add_meshes(arrow_glyphs(
        &glyphs,
        GLYPH_FACTOR,
        GlyphStyle::Mapped(&Colormap::cool()),
    ));
    scene.add_mesh(TriMesh::cylinder(
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0],
        0.02,
        2.0,
        [0, 0, 0],
    ));

    let out_dir = Path::new("out");
    create_dir_all(out_dir)?;
    scene.screenshot(&out_dir.join("grad_A_z_vec_top.png"))?;

    FigureConfig::new("grad_A_z_vec_top.png", &grid, &params)
        .with_camera([0.0, 0.0, 1.0], [0.0, 1.0, 0.0], 1.6)
        .write_to_dir(out_dir)?;

    println!("Wrote out/grad_A_z_vec_top.png");
    Ok(())
}
