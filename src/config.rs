// src/config.rs

use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::grid::Grid2D;
use crate::params::WireParams;

/// Provenance record written next to each figure, so a PNG can always be traced
/// back to the exact grid, constants and camera that produced it.
#[derive(Serialize)]
pub struct FigureConfig {
    pub figure: String,
    pub grid: GridConfig,
    pub physics: PhysicsConfig,
    pub camera: Option<CameraConfig>,
}

#[derive(Serialize)]
pub struct GridConfig {
    pub n: usize,
    pub extent: f64,
}

#[derive(Serialize)]
pub struct PhysicsConfig {
    pub current: f64,
    pub epsilon_0: f64,
    pub c: f64,
    pub mu_0: f64,
    pub r_min: f64,
}

#[derive(Serialize)]
pub struct CameraConfig {
    pub view: [f64; 3],
    pub up: [f64; 3],
    pub zoom: f64,
}

impl FigureConfig {
    pub fn new(figure: &str, grid: &Grid2D, p: &WireParams) -> Self {
        Self {
            figure: figure.to_string(),
            grid: GridConfig {
                n: grid.n,
                extent: grid.extent,
            },
            physics: PhysicsConfig {
                current: p.current,
                epsilon_0: p.epsilon_0,
                c: p.c,
                mu_0: p.mu_0,
                r_min: p.r_min,
            },
            camera: None,
        }
    }

    pub fn with_camera(mut self, view: [f64; 3], up: [f64; 3], zoom: f64) -> Self {
        self.camera = Some(CameraConfig { view, up, zoom });
        self
    }

    /// Write `<figure stem>.json` into `out_dir`.
    pub fn write_to_dir(&self, out_dir: &Path) -> std::io::Result<()> {
        let stem = self.figure.trim_end_matches(".png");
        let path = out_dir.join(format!("{stem}.json"));
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
