// src/visualisation.rs

use plotters::prelude::*;

use crate::scalar_field::ScalarField2D;

/// 3D surface chart of A_z with labelled axes -- the one figure drawn as a
/// white-background chart rather than a transparent screenshot.
///
/// Height values are rescaled by a power of ten so the tick labels stay
/// readable; the exponent goes into the caption.
pub fn save_az_surface_chart(
    field: &ScalarField2D,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let n = field.grid.n;
    let extent = field.grid.extent;
    let (z_lo, z_hi) = field.min_max();

    // ---------- choose a 10^n scaling for nicer axes ----------
    let magnitude = z_hi.abs().max(z_lo.abs());
    let (scale, exp) = if magnitude > 0.0 {
        let exp = magnitude.log10().floor() as i32;
        (10f64.powi(exp), exp)
    } else {
        (1.0, 0)
    };
    let caption = if exp == 0 {
        "A_z around an infinite straight wire (I = 1 A), height in Tm".to_string()
    } else {
        format!("A_z around an infinite straight wire (I = 1 A), height in Tm x 10^{exp}")
    };

    let lo_s = z_lo / scale;
    let hi_s = z_hi / scale;

    let root = BitMapBackend::new(filename, (1200, 750)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 28))
        .build_cartesian_3d(-extent..extent, lo_s..hi_s, -extent..extent)?;

    // elevation ~30 deg, azimuth ~45 deg, pulled back a little to fit the box
    chart.with_projection(|mut pb| {
        pb.pitch = 0.52;
        pb.yaw = 0.79;
        pb.scale = 0.8;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()?;

    // Nearest-node lookup; exact for the axis coordinates fed into the series.
    let lookup = move |v: f64| -> usize {
        let k = ((v + extent) / (2.0 * extent) * (n - 1) as f64).round();
        (k.max(0.0) as usize).min(n - 1)
    };

    chart.draw_series(
        SurfaceSeries::xoz(
            (0..n).map(|i| field.grid.coord(i)),
            (0..n).map(|j| field.grid.coord(j)),
            |x, y| field.data[field.grid.idx(lookup(x), lookup(y))] / scale,
        )
        .style_func(&|&z| {
            // cool colormap keyed on the height
            let t = if (hi_s - lo_s).abs() < 1e-30 {
                0.5
            } else {
                ((z - lo_s) / (hi_s - lo_s)).clamp(0.0, 1.0)
            };
            RGBColor((255.0 * t) as u8, (255.0 * (1.0 - t)) as u8, 255).filled()
        }),
    )?;

    root.present()?;
    Ok(())
}
