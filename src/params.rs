// src/params.rs

use std::f64::consts::PI;

/// Vacuum permeability mu_0 (H/m), the pre-2019 exact value 4 pi x 1e-7.
pub const MU0: f64 = 4.0 * PI * 1e-7;

/// Vacuum permittivity eps_0 (F/m), rounded to 4 significant figures.
pub const EPSILON0: f64 = 8.854e-12;

/// Speed of light in vacuum (m/s), rounded to 3e8.
pub const C: f64 = 3e8;

/// Radius below which a sample counts as "on the wire axis" and is clamped before
/// any reciprocal or logarithm. Far smaller than the node spacing of every grid
/// used here, so only a deliberate (0, 0) sample ever hits it.
pub const R_MIN: f64 = 1e-10;

/// Physical configuration of the wire scene. Sampling functions take this by
/// reference, keeping them pure functions of (grid, params).
#[derive(Debug, Clone, Copy)]
pub struct WireParams {
    pub current: f64,   // wire current I (A)
    pub epsilon_0: f64, // vacuum permittivity (F/m)
    pub c: f64,         // speed of light (m/s)
    pub mu_0: f64,      // vacuum permeability (H/m)
    pub r_min: f64,     // on-axis clamp radius (m)
}

impl WireParams {
    /// The configuration shared by all figures: I = 1 A, rounded SI constants.
    pub fn unit_current() -> Self {
        Self {
            current: 1.0,
            epsilon_0: EPSILON0,
            c: C,
            mu_0: MU0,
            r_min: R_MIN,
        }
    }
}

impl Default for WireParams {
    fn default() -> Self {
        Self::unit_current()
    }
}
