// src/bin/a_z_vec.rs
//
// Vector-potential arrows A = (0, 0, A_z) on a coarse grid in the z = 0 plane,
// coloured by log10 |A|, with the wire drawn as a cylinder.
//
// Run:
//   cargo run --release --bin a_z_vec
//
// Output:
//   out/A_z_vec.png   (transparent background)
//   out/A_z_vec.json

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
use wirefield::vector_field::VectorField2D;
use wirefield::wire;

const GLYPH_FACTOR: f64 = 0.25;
const LOG_SCALE: f64 = 2.0; // ln(2/r) stays positive over the whole grid

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid2D::new(8, 1.0);
    let params = WireParams::default();

    // A has only a z-component
    let az = wire::vector_potential_z_display(&grid, &params, LOG_SCALE);
    let mut a = VectorField2D::new(grid);
    for (cell, &v) in a.data.iter_mut().zip(&az.data) {
        *cell = [0.0, 0.0, v];
    }

    let mut glyphs = GlyphField::from_field(&a, 0.0);
    glyphs.center_on_nodes(GLYPH_FACTOR);

    let mut scene = Scene::new(1000, 600);
    scene.set_camera(Camera::view_vector([1.3, 1.3, 0.9], [0.0, 0.0, 1.0]).zoom(1.8));
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
    scene.screenshot(&out_dir.join("A_z_vec.png"))?;

    FigureConfig::new("A_z_vec.png", &grid, &params)
        .with_camera([1.3, 1.3, 0.9], [0.0, 0.0, 1.0], 1.8)
        .write_to_dir(out_dir)?;

    println!("Wrote out/A_z_vec.png");
    Ok(())
}
