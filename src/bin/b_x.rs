// src/bin/b_x.rs
//
// The x-component of B alone, from its direct closed form
// Bx = -mu0 I / (2 pi r) * y / r, drawn as arrow glyphs. Opposite circulation
// convention to the rotation-derived field (sign-flipped x-component); arrows
// flip across the y = 0 line either way.
//
// Run:
//   cargo run --release --bin b_x
//
// Output:
//   out/B_x.png   (transparent background)
//   out/B_x.json

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

    let bx = wire::b_x_direct(&grid, &params);
    let mut glyphs = GlyphField::from_field(&bx, 0.0);
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
    scene.screenshot(&out_dir.join("B_x.png"))?;

    FigureConfig::new("B_x.png", &grid, &params)
        .with_camera([1.3, 1.3, 0.9], [0.0, 0.0, 1.0], 1.8)
        .write_to_dir(out_dir)?;

    println!("Wrote out/B_x.png");
    Ok(())
}
