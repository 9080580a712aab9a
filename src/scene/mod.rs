// src/scene/mod.rs
//
// Minimal 3D scene renderer behind the figures: meshes and poly-lines in,
// transparent-background PNG out. Plain CPU rasterisation; no window and no
// GPU context, so the only resource is the pixel buffer, which is dropped on
// every exit path.

pub mod camera;
pub mod colormap;
pub mod contour;
pub mod mesh;
mod raster;

use std::error::Error;
use std::path::Path;

use image::RgbaImage;

use self::camera::Camera;
use self::mesh::{PolyLine, TriMesh};

pub struct Scene {
    pub camera: Camera,
    /// World-space radius mapped to the smaller half-dimension at zoom 1.
    pub frame_radius: f64,
    width: u32,
    height: u32,
    meshes: Vec<TriMesh>,
    lines: Vec<PolyLine>,
}

impl Scene {
    /// New empty scene with the given output size in pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            camera: Camera::default(),
            frame_radius: 1.5,
            width,
            height,
            meshes: Vec::new(),
            lines: Vec::new(),
        }
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn add_mesh(&mut self, mesh: TriMesh) {
        self.meshes.push(mesh);
    }

    pub fn add_meshes(&mut self, meshes: Vec<TriMesh>) {
        self.meshes.extend(meshes);
    }

    pub fn add_line(&mut self, line: PolyLine) {
        self.lines.push(line);
    }

    /// Rasterise the current scene. Background pixels stay fully transparent.
    pub fn render(&self) -> RgbaImage {
        raster::render(self)
    }

    /// Rasterise and write a PNG screenshot.
    pub fn screenshot(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        self.render().save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::mesh::TriMesh;
    use super::*;

    #[test]
    fn background_stays_transparent_around_rendered_geometry() {
        let mut scene = Scene::new(64, 64);
        scene.set_camera(Camera::view_vector([0.0, 0.0, 1.0], [0.0, 1.0, 0.0]));

        // One triangle covering the middle of the frame, facing the camera
        let mut tri = TriMesh {
            vertices: vec![[-0.5, -0.5, 0.0], [0.5, -0.5, 0.0], [0.0, 0.5, 0.0]],
            faces: vec![],
            face_colors: vec![],
        };
        tri.faces.push([0, 1, 2]);
        tri.face_colors.push([255, 0, 255]);
        scene.add_mesh(tri);

        let img = scene.render();
        // corner is outside all geometry: fully transparent
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        // centre is covered: opaque
        assert_eq!(img.get_pixel(32, 36).0[3], 255);
    }
}
