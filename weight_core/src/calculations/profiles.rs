//! # Open Profiles
//!
//! Angles, channels, beams and cold-formed sections.
//!
//! Hot-rolled shapes (`u_channel`, `i_beam`) are assembled from flange and
//! web rectangles plus optional quarter-annulus corner terms. Cold-formed
//! shapes of uniform thickness (`t_section`, `z_channel`, `hat_channel`,
//! `lipped_c_channel`) use the developed width: the sum of every straight
//! wall, less the corner overlaps, times the thickness.
//!
//! ## Keys
//!
//! ```text
//! r  overall height H        u  flange / crown width B
//! t  uniform thickness       s  bend radius, lip or brim width
//! tf flange thickness        tw web thickness (i_beam)
//! h  length
//! ```

use super::{linear_weight, PieceWeight};
use crate::dimensions::Dimensions;
use crate::equations::section::{inner_dimension, quarter_annulus_area, rectangular_area};

/// Equal-leg angle: `tw` leg, `t` thickness.
///
/// A = 2·a·t − t², fillet-free.
pub fn equal_angle(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let area_mm2 = 2.0 * dims.tw * dims.t - dims.t * dims.t;
    let area_m2 = area_mm2 / 1.0e6;
    let unit = area_m2 * density_g_cm3 * 1000.0;
    PieceWeight::from_unit_weight(unit, dims.h)
}

/// Unequal-leg angle: `tw` long leg, `u` short leg, `t` thickness.
///
/// A = (a + b − t)·t
pub fn unequal_angle(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let area_mm2 = (dims.tw + dims.u - dims.t) * dims.t;
    let area_m2 = area_mm2 / 1.0e6;
    let unit = area_m2 * density_g_cm3 * 1000.0;
    PieceWeight::from_unit_weight(unit, dims.h)
}

/// U channel of uniform thickness with optional bend corners.
///
/// Two flanges `B × t`, a web `(H − 2t) × t`, and when the inner bend
/// radius `s` is positive two quarter-annulus corners.
pub fn u_channel(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let flanges = 2.0 * rectangular_area(dims.u, dims.t);
    let web = rectangular_area(inner_dimension(dims.r, dims.t), dims.t);
    let corners = if dims.s > 0.0 {
        2.0 * quarter_annulus_area(dims.s, dims.t)
    } else {
        0.0
    };

    let area = flanges + web + corners;
    PieceWeight::from_unit_weight(linear_weight(area, density_g_cm3), dims.h)
}

/// I beam: `r` height, `u` flange width, `tf`, `tw`, `s` fillet radius.
///
/// Two flanges `B × tf`, a web `(H − 2tf) × tw`, and four fillet terms when
/// `include_radius` is on and the radius is positive.
pub fn i_beam(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let flanges = 2.0 * rectangular_area(dims.u, dims.tf);
    let web = rectangular_area(inner_dimension(dims.r, dims.tf), dims.tw);
    let fillets = if dims.include_radius && dims.s > 0.0 {
        4.0 * quarter_annulus_area(dims.s, dims.tw)
    } else {
        0.0
    };

    let area = flanges + web + fillets;
    PieceWeight::from_unit_weight(linear_weight(area, density_g_cm3), dims.h)
}

/// Section area from a developed width, never negative.
fn developed_area(developed_width: f64, thickness: f64) -> f64 {
    developed_width.max(0.0) * thickness
}

/// T section of uniform thickness: flange `B` plus stem `H − t`
pub fn t_section(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let developed = dims.u + dims.r - dims.t;
    let area = developed_area(developed, dims.t);
    PieceWeight::from_unit_weight(linear_weight(area, density_g_cm3), dims.h)
}

/// Z channel: web `H` and two flanges `B`, two corners
pub fn z_channel(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let developed = dims.r + 2.0 * dims.u - 2.0 * dims.t;
    let area = developed_area(developed, dims.t);
    PieceWeight::from_unit_weight(linear_weight(area, density_g_cm3), dims.h)
}

/// Hat channel: crown `B`, two walls `H`, two brims `c`, four corners
pub fn hat_channel(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let developed = dims.u + 2.0 * dims.r + 2.0 * dims.s - 4.0 * dims.t;
    let area = developed_area(developed, dims.t);
    PieceWeight::from_unit_weight(linear_weight(area, density_g_cm3), dims.h)
}

/// Lipped C channel: web `H`, two flanges `B`, two lips `c`, four corners
pub fn lipped_c_channel(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let developed = dims.r + 2.0 * dims.u + 2.0 * dims.s - 4.0 * dims.t;
    let area = developed_area(developed, dims.t);
    PieceWeight::from_unit_weight(linear_weight(area, density_g_cm3), dims.h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_equal_angle() {
        // L50×5: 2·50·5 − 25 = 475 mm² → 3.72875 kg/m
        let dims = Dimensions { tw: 50.0, t: 5.0, h: 6000.0, ..Default::default() };
        let w = equal_angle(&dims, 7.85);
        assert_relative_eq!(w.unit_weight_kg_per_m, 3.72875, epsilon = 1e-9);
        assert_relative_eq!(w.piece_weight_kg, 22.3725, epsilon = 1e-9);
    }

    #[test]
    fn test_unequal_reduces_to_equal() {
        let equal = Dimensions { tw: 60.0, t: 6.0, h: 1000.0, ..Default::default() };
        let unequal = Dimensions { u: 60.0, ..equal };
        assert_relative_eq!(
            equal_angle(&equal, 7.85).unit_weight_kg_per_m,
            unequal_angle(&unequal, 7.85).unit_weight_kg_per_m,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_u_channel_without_radius() {
        // H 100, B 50, t 5: 2·250 + 90·5 = 950 mm²
        let dims = Dimensions { r: 100.0, u: 50.0, t: 5.0, h: 1000.0, ..Default::default() };
        let w = u_channel(&dims, 7.85);
        assert_relative_eq!(w.unit_weight_kg_per_m, 950.0 * 0.00785, epsilon = 1e-9);
    }

    #[test]
    fn test_u_channel_bend_corners() {
        let flat = Dimensions { r: 100.0, u: 50.0, t: 5.0, h: 1000.0, ..Default::default() };
        let bent = Dimensions { s: 5.0, ..flat };
        let extra = 2.0 * PI / 4.0 * (100.0 - 25.0);
        let diff = u_channel(&bent, 7.85).unit_weight_kg_per_m - u_channel(&flat, 7.85).unit_weight_kg_per_m;
        assert_relative_eq!(diff, extra * 0.00785, epsilon = 1e-9);
    }

    #[test]
    fn test_i_beam_radius_toggle() {
        // H 200, B 100, tf 8.5, tw 5.6, r 12
        let base = Dimensions {
            r: 200.0,
            u: 100.0,
            tf: 8.5,
            tw: 5.6,
            s: 12.0,
            h: 1000.0,
            ..Default::default()
        };
        let without = i_beam(&base, 7.85);
        assert_relative_eq!(without.unit_weight_kg_per_m, 2724.8 * 0.00785, epsilon = 1e-9);

        let with = i_beam(&base.with_radius(true), 7.85);
        let fillets = 4.0 * PI / 4.0 * (17.6_f64.powi(2) - 144.0);
        assert_relative_eq!(
            with.unit_weight_kg_per_m,
            (2724.8 + fillets) * 0.00785,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_developed_width_sections() {
        let dims = Dimensions { r: 100.0, u: 50.0, s: 15.0, t: 2.0, h: 1000.0, ..Default::default() };
        // Z: 100 + 100 − 4 = 196
        assert_relative_eq!(z_channel(&dims, 7.85).unit_weight_kg_per_m, 196.0 * 2.0 * 0.00785, epsilon = 1e-9);
        // Hat: 50 + 200 + 30 − 8 = 272
        assert_relative_eq!(hat_channel(&dims, 7.85).unit_weight_kg_per_m, 272.0 * 2.0 * 0.00785, epsilon = 1e-9);
        // Lipped C: 100 + 100 + 30 − 8 = 222
        assert_relative_eq!(
            lipped_c_channel(&dims, 7.85).unit_weight_kg_per_m,
            222.0 * 2.0 * 0.00785,
            epsilon = 1e-9
        );
        // T: 50 + 100 − 2 = 148
        assert_relative_eq!(t_section(&dims, 7.85).unit_weight_kg_per_m, 148.0 * 2.0 * 0.00785, epsilon = 1e-9);
    }

    #[test]
    fn test_developed_width_never_negative() {
        let dims = Dimensions { t: 5.0, h: 1000.0, ..Default::default() };
        assert_eq!(lipped_c_channel(&dims, 7.85).piece_weight_kg, 0.0);
        assert_eq!(hat_channel(&dims, 7.85).piece_weight_kg, 0.0);
    }
}
