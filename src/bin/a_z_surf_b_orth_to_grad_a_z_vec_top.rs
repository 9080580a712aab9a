// src/bin/a_z_surf_b_orth_to_grad_a_z_vec_top.rs
//
// Combined top-down figure: flat A_z surface (fine grid) with iso-contours,
// grad A_z arrows in a darkened colormap hovering just above the surface,
// B arrows in orange, and the wire cylinder.
//
// Run:
//   cargo run --release --bin a_z_surf_b_orth_to_grad_a_z_vec_top
//
// Output:
//   out/A_z_surf_B_orth_to_grad_A_z_vec_top.png   (transparent background)
//   out/A_z_surf_B_orth_to_grad_A_z_vec_top.json

use std::fs::create_dir_all;
use std::path::Path;

use wirefield::config::FigureConfig;
use wirefield::glyph::GlyphField;
use wirefield::grid::Grid2D;
use wirefield::params::WireParams;
use wirefield::scene::camera::Camera;
use wirefield::scene::colormap::Colormap;
use wirefield::scene::contour::iso_lines;
use wirefield::scene::mesh::{arrow_glyphs, GlyphStyle, PolyLine, TriMesh};
use wirefield::scene::Scene;
use wirefield::wire;

const GLYPH_FACTOR: f64 = 0.25;
const Z_OFFSET: f64 = 0.05; // height of the arrows above the surface
const N_CONTOURS: usize = 25;
const ORANGE: [u8; 3] = [255, 165, 0];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = WireParams::default();

    // === flat surface, fine grid ===
    let fine = Grid2D::new(100, 1.0);
    let az = wire::vector_potential_z(&fine, &params);

    let mut points = Vec::with_capacity(fine.n_points());
    for j in 0..fine.n {
        for i in 0..fine.n {
            let (x, y) = fine.point(i, j);
            points.push([x, y, 0.0]);
        }
    }

    let mut scene = Scene::new(1000, 600);
    scene.set_camera(Camera::view_vector([0.0, 0.0, 1.0], [0.0, 1.0, 0.0]).zoom(1.6));
    scene.add_mesh(TriMesh::structured_surface(
        fine.n,
        &points,
        &az.data,
        &Colormap::cool(),
    ));
    for set in iso_lines(&az, N_CONTOURS) {
        for seg in &set.segments {
            scene.add_line(PolyLine {
                points: vec![[seg[0][0], seg[0][1], 0.0], [seg[1][0], seg[1][1], 0.0]],
                color: [0, 0, 0],
            });
        }
    }

    // === arrows on the coarse grid, slightly above the surface ===
    let coarse = Grid2D::new(8, 1.0);
    let grad = wire::grad_a(&coarse, &params);
    let b = wire::rotate_quarter_turn(&grad);

    let mut grad_glyphs = GlyphField::from_field(&grad, Z_OFFSET);
    grad_glyphs.center_on_nodes(GLYPH_FACTOR);
    let mut b_glyphs = GlyphField::from_field(&b, Z_OFFSET);
    b_glyphs.center_on_nodes(GLYPH_FACTOR);

    let dark_cool = Colormap::cool().darkened(0.6);
    scene.add_meshes(arrow_glyphs(
        &grad_glyphs,
        GLYPH_FACTOR,
        GlyphStyle::Mapped(&dark_cool),
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
    scene.screenshot(&out_dir.join("A_z_surf_B_orth_to_grad_A_z_vec_top.png"))?;

    FigureConfig::new("A_z_surf_B_orth_to_grad_A_z_vec_top.png", &fine, &params)
        .with_camera([0.0, 0.0, 1.0], [0.0, 1.0, 0.0], 1.6)
        .write_to_dir(out_dir)?;

    println!("Wrote out/A_z_surf_B_orth_to_grad_A_z_vec_top.png");
    Ok(())
}
