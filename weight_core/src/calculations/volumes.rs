//! # Volumetric Pieces
//!
//! Discrete 3-D parts weighed from their volume. None of these has a
//! meaningful per-meter weight, so the unit weight repeats the piece weight.
//!
//! Volumes are computed in mm³, converted to m³ and multiplied by the
//! density in kg/m³.

use super::PieceWeight;
use crate::dimensions::Dimensions;
use crate::equations::section::{annulus_area, circular_area, frustum_lateral_area, sphere_volume, MM3_PER_M3};

/// Mass in kg of a volume in mm³
fn mass_kg(volume_mm3: f64, density_g_cm3: f64) -> f64 {
    volume_mm3 / MM3_PER_M3 * density_g_cm3 * 1000.0
}

/// Solid sphere: `tw` diameter
pub fn solid_sphere(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    PieceWeight::volumetric(mass_kg(sphere_volume(dims.tw), density_g_cm3))
}

/// Rolled cone frustum shell: `tw` large diameter, `u` small diameter,
/// `r` vertical height, `t` plate thickness.
///
/// Approximated as lateral surface area × thickness.
pub fn cone_frustum(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let surface = frustum_lateral_area(dims.tw, dims.u, dims.r);
    PieceWeight::volumetric(mass_kg(surface * dims.t, density_g_cm3))
}

/// Flange ring: `tw` outer diameter, `u` inner diameter, `t` thickness,
/// `r` bolt hole count, `s` bolt hole diameter.
///
/// The hole count is a number, not a length; fractional counts round to the
/// nearest whole hole. A face with more hole area than ring area weighs zero.
pub fn flange_ring(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let holes = dims.r.round().max(0.0);
    let face = (annulus_area(dims.tw, dims.u) - holes * circular_area(dims.s)).max(0.0);
    PieceWeight::volumetric(mass_kg(face * dims.t, density_g_cm3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_solid_sphere() {
        // D 100 mm: V = 523598.78 mm³ → 4.1103 kg of steel
        let dims = Dimensions { tw: 100.0, ..Default::default() };
        let w = solid_sphere(&dims, 7.85);
        assert_relative_eq!(w.piece_weight_kg, 4.110250, epsilon = 1e-6);
        assert_eq!(w.unit_weight_kg_per_m, w.piece_weight_kg);
    }

    #[test]
    fn test_cone_frustum() {
        // D1 600, D2 400, H 300, t 5: slant = √(100² + 300²)
        let dims = Dimensions { tw: 600.0, u: 400.0, r: 300.0, t: 5.0, ..Default::default() };
        let slant = (100.0_f64.powi(2) + 300.0_f64.powi(2)).sqrt();
        let expected = PI * 500.0 * slant * 5.0 / 1.0e9 * 7850.0;
        assert_relative_eq!(cone_frustum(&dims, 7.85).piece_weight_kg, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_flange_ring_holes() {
        // D 200, d 100, t 20, 8 holes of 18
        let plain = Dimensions { tw: 200.0, u: 100.0, t: 20.0, ..Default::default() };
        let drilled = Dimensions { r: 8.0, s: 18.0, ..plain };

        let face = PI / 4.0 * (200.0_f64.powi(2) - 100.0_f64.powi(2));
        let holes = 8.0 * PI / 4.0 * 18.0 * 18.0;
        assert_relative_eq!(flange_ring(&plain, 7.85).piece_weight_kg, face * 20.0 / 1.0e9 * 7850.0, epsilon = 1e-9);
        assert_relative_eq!(
            flange_ring(&drilled, 7.85).piece_weight_kg,
            (face - holes) * 20.0 / 1.0e9 * 7850.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_flange_ring_never_negative() {
        let dims = Dimensions { tw: 50.0, u: 40.0, t: 10.0, r: 20.0, s: 20.0, ..Default::default() };
        assert_eq!(flange_ring(&dims, 7.85).piece_weight_kg, 0.0);
    }
}
