// src/bin/a_z_chart.rs
//
// Labelled 3D surface chart of A_z -- the one figure with axes and tick
// labels, drawn with plotters on a white background.
//
// Run:
//   cargo run --release --bin a_z_chart
//
// Output:
//   out/A_z_chart.png
//   out/A_z_chart.json

use std::fs::create_dir_all;
use std::path::Path;

use wirefield::config::FigureConfig;
use wirefield::grid::Grid2D;
use wirefield::params::WireParams;
use wirefield::visualisation::save_az_surface_chart;
use wirefield::wire;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid2D::new(500, 1.0);
    let params = WireParams::default();

    let az = wire::vector_potential_z(&grid, &params);

    let out_dir = Path::new("out");
    create_dir_all(out_dir)?;
    save_az_surface_chart(&az, "out/A_z_chart.png")?;

    FigureConfig::new("A_z_chart.png", &grid, &params).write_to_dir(out_dir)?;

    println!("Wrote out/A_z_chart.png");
    Ok(())
}
