// src/bin/b_orth_to_grad_a_z_vec_top.rs
//
// Top-down view of grad A_z (coloured by log10 magnitude) together with the
// azimuthal field B = grad A_z rotated +90 degrees in-plane (orange), showing
// the two families orthogonal at every node.
//
// Run:
//   cargo run --release --bin b_orth_to_grad_a_z_vec_top
//
// Output:
//   out/B_orth_to_grad_A_z_vec_top.png   (transparent background)
//   out/B_orth_to_grad_A_z_vec_top.json

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
const ORANGE: [u8; 3] = [255, 165, 0];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid2D::new(8, 1.0);
    let params = WireParams::default();

    let grad = wire::grad_a(&grid, &params);
    let b = wire::rotate_quarter_turn(&grad);

    let mut grad_glyphs = GlyphField::from_field(&grad, 0.0);
    grad_glyphs.center_on_nodes(GLYPH_FACTOR);
    let mut b_glyphs = GlyphField::from_field(&b, 0.0);
    b_glyphs.center_on_nodes(GLYPH_FACTOR);

    let mut scene = Scene::new(1000, 600);
    scene.set_camera(Camera::view_vector([0.0, 0.0, 1.0], [0.0, 1.0, 0.0]).zoom(1.6));
    scene.add_meshes(arrow_glyphs(
        &grad_glyphs,
        GLYPH_FACTOR,
        GlyphStyle::Mapped(&Colormap::cool()),
    ));
    scene.add_meshes(arrow_glyphs(&b_glyphs, GLYPH_FACTOR, GlyphStyle::Solid(ORANGE)));
    scene.add_mesh(TriMesh::cylinder(
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0],
        0.02,
        2.0,
        [0, 0, 0],
    ));

    let out_dir = Path::new("out");
    create_dir_all(out_dir)?;
    scene.screenshot(&out_dir.join("B_orth_to_grad_A_z_vec_top.png"))?;

    FigureConfig::new("B_orth_to_grad_A_z_vec_top.png", &grid, &params)
        .with_camera([0.0, 0.0, 1.0], [0.0, 1.0, 0.0], 1.6)
        .write_to_dir(out_dir)?;

    println!("Wrote out/B_orth_to_grad_A_z_vec_top.png");
    Ok(())
}
