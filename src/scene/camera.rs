// src/scene/camera.rs

use crate::vec3::{cross, normalize};

/// Camera framing: look at the origin from direction `view`, with `up` fixing
/// the roll and `zoom` scaling the framed extent. Projection is orthographic;
/// the figures are framed by direction and zoom alone, so there is no focal
/// length to carry around.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub view: [f64; 3], // direction from the origin towards the eye
    pub up: [f64; 3],
    pub zoom: f64,
}

impl Camera {
    /// Place the camera along `view` looking back at the origin.
    pub fn view_vector(view: [f64; 3], up: [f64; 3]) -> Self {
        Self {
            view,
            up,
            zoom: 1.0,
        }
    }

    pub fn zoom(mut self, factor: f64) -> Self {
        self.zoom = factor;
        self
    }

    /// Orthonormal basis (right, up, eye). `eye` points from the origin towards
    /// the camera; screen x maps to `right`, screen y to `up`, and the
    /// component along `eye` is the depth (larger = closer).
    pub fn basis(&self) -> ([f64; 3], [f64; 3], [f64; 3]) {
        let eye = normalize(self.view);
        let right = normalize(cross(self.up, eye));
        let up = cross(eye, right);
        (right, up, eye)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::view_vector([1.0, 1.0, 1.0], [0.0, 0.0, 1.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::{dot, norm};

    #[test]
    fn basis_is_orthonormal() {
        let cam = Camera::view_vector([1.3, 1.3, 0.9], [0.0, 0.0, 1.0]).zoom(1.8);
        let (right, up, eye) = cam.basis();
        for v in [right, up, eye] {
            assert!((norm(v) - 1.0).abs() < 1e-12);
        }
        assert!(dot(right, up).abs() < 1e-12);
        assert!(dot(right, eye).abs() < 1e-12);
        assert!(dot(up, eye).abs() < 1e-12);
    }

    #[test]
    fn top_down_view_keeps_x_right_and_y_up() {
        let cam = Camera::view_vector([0.0, 0.0, 1.0], [0.0, 1.0, 0.0]);
        let (right, up, _eye) = cam.basis();
        assert_eq!(right, [1.0, 0.0, 0.0]);
        assert_eq!(up, [0.0, 1.0, 0.0]);
    }
}
