// src/scene/raster.rs
//
// Flat-shaded z-buffer rasteriser. Vertices are projected with the scene's
// orthographic camera; triangles are filled with per-pixel depth testing and
// lines are drawn with a small depth bias towards the viewer so contour lines
// coplanar with a surface stay visible.

use image::{Rgba, RgbaImage};

use super::Scene;
use crate::vec3::{cross, dot, normalize, sub};

// Lambert-ish headlight: ambient floor plus view-aligned diffuse term.
const AMBIENT: f64 = 0.35;
const DIFFUSE: f64 = 0.65;

pub fn render(scene: &Scene) -> RgbaImage {
    let (w, h) = (scene.width, scene.height);
    let mut img = RgbaImage::from_pixel(w, h, Rgba([0, 0, 0, 0]));
    let mut depth = vec![f64::NEG_INFINITY; (w as usize) * (h as usize)];

    let (right, up, eye) = scene.camera.basis();
    let px_per_unit = scene.camera.zoom * 0.5 * w.min(h) as f64 / scene.frame_radius;
    let cx = 0.5 * w as f64;
    let cy = 0.5 * h as f64;

    // screen x, screen y (y down), depth (larger = closer)
    let project = |p: [f64; 3]| -> [f64; 3] {
        [
            cx + dot(p, right) * px_per_unit,
            cy - dot(p, up) * px_per_unit,
            dot(p, eye),
        ]
    };

    for mesh in &scene.meshes {
        let projected: Vec<[f64; 3]> = mesh.vertices.iter().map(|&v| project(v)).collect();
        for (f, face) in mesh.faces.iter().enumerate() {
            let [a, b, c] = *face;
            let normal = normalize(cross(
                sub(mesh.vertices[b], mesh.vertices[a]),
                sub(mesh.vertices[c], mesh.vertices[a]),
            ));
            let shade = AMBIENT + DIFFUSE * dot(normal, eye).abs();
            let base = mesh.face_colors[f];
            let color = Rgba([
                (base[0] as f64 * shade).round() as u8,
                (base[1] as f64 * shade).round() as u8,
                (base[2] as f64 * shade).round() as u8,
                255,
            ]);
            fill_triangle(&mut img, &mut depth, projected[a], projected[b], projected[c], color);
        }
    }

    // Lines sit on top of coplanar geometry via a fixed world-space bias.
    let bias = 1e-3 * scene.frame_radius;
    for line in &scene.lines {
        let color = Rgba([line.color[0], line.color[1], line.color[2], 255]);
        for pair in line.points.windows(2) {
            let a = project(pair[0]);
            let b = project(pair[1]);
            draw_line(
                &mut img,
                &mut depth,
                [a[0], a[1], a[2] + bias],
                [b[0], b[1], b[2] + bias],
                color,
            );
        }
    }

    img
}

fn fill_triangle(
    img: &mut RgbaImage,
    depth: &mut [f64],
    a: [f64; 3],
    b: [f64; 3],
    c: [f64; 3],
    color: Rgba<u8>,
) {
    let (w, h) = (img.width() as i64, img.height() as i64);

    // signed double area; degenerate (edge-on) triangles contribute nothing
    let area = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
    if area.abs() < 1e-12 {
        return;
    }

    let x_lo = (a[0].min(b[0]).min(c[0]).floor() as i64).max(0);
    let x_hi = (a[0].max(b[0]).max(c[0]).ceil() as i64).min(w - 1);
    let y_lo = (a[1].min(b[1]).min(c[1]).floor() as i64).max(0);
    let y_hi = (a[1].max(b[1]).max(c[1]).ceil() as i64).min(h - 1);

    for py in y_lo..=y_hi {
        for px in x_lo..=x_hi {
            let x = px as f64 + 0.5;
            let y = py as f64 + 0.5;
            // barycentric weights (unnormalised, same sign as area when inside)
            let w0 = (b[0] - x) * (c[1] - y) - (b[1] - y) * (c[0] - x);
            let w1 = (c[0] - x) * (a[1] - y) - (c[1] - y) * (a[0] - x);
            let w2 = (a[0] - x) * (b[1] - y) - (a[1] - y) * (b[0] - x);
            let inside = if area > 0.0 {
                w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
            } else {
                w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
            };
            if !inside {
                continue;
            }
            let d = (w0 * a[2] + w1 * b[2] + w2 * c[2]) / area;
            let idx = (py as usize) * (img.width() as usize) + px as usize;
            if d > depth[idx] {
                depth[idx] = d;
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

fn draw_line(
    img: &mut RgbaImage,
    depth: &mut [f64],
    a: [f64; 3],
    b: [f64; 3],
    color: Rgba<u8>,
) {
    let (w, h) = (img.width() as i64, img.height() as i64);

    let steps = (b[0] - a[0]).abs().max((b[1] - a[1]).abs()).ceil().max(1.0) as i64;
    for s in 0..=steps {
        let t = s as f64 / steps as f64;
        let x = (a[0] + t * (b[0] - a[0])).round() as i64;
        let y = (a[1] + t * (b[1] - a[1])).round() as i64;
        if x < 0 || x >= w || y < 0 || y >= h {
            continue;
        }
        let d = a[2] + t * (b[2] - a[2]);
        let idx = (y as usize) * (w as usize) + x as usize;
        if d >= depth[idx] {
            depth[idx] = d;
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}
