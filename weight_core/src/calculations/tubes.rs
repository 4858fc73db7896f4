//! # Hollow Sections
//!
//! Tubes with a uniform wall: outer shape area minus the inner shape offset
//! inward by the wall thickness `t`. The inner size clamps at zero, so a wall
//! thicker than half the section reads as solid bar.

use super::{linear_weight, PieceWeight};
use crate::dimensions::Dimensions;
use crate::equations::section::{annulus_area, hexagon_area, inner_dimension, rectangular_area};

/// Round tube: `tw` outer diameter, `t` wall, `h` length
pub fn round_tube(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let inner = inner_dimension(dims.tw, dims.t);
    let area = annulus_area(dims.tw, inner);
    PieceWeight::from_unit_weight(linear_weight(area, density_g_cm3), dims.h)
}

/// Square tube: `tw` side, `t` wall, `h` length
pub fn square_tube(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let inner = inner_dimension(dims.tw, dims.t);
    let area = rectangular_area(dims.tw, dims.tw) - rectangular_area(inner, inner);
    PieceWeight::from_unit_weight(linear_weight(area, density_g_cm3), dims.h)
}

/// Rectangular tube: `tw` width, `u` height, `t` wall, `h` length
pub fn rect_tube(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let inner_w = inner_dimension(dims.tw, dims.t);
    let inner_h = inner_dimension(dims.u, dims.t);
    let area = rectangular_area(dims.tw, dims.u) - rectangular_area(inner_w, inner_h);
    PieceWeight::from_unit_weight(linear_weight(area, density_g_cm3), dims.h)
}

/// Hexagonal tube: `tw` across flats, `t` wall, `h` length
pub fn hex_tube(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let inner = inner_dimension(dims.tw, dims.t);
    let area = hexagon_area(dims.tw) - hexagon_area(inner);
    PieceWeight::from_unit_weight(linear_weight(area, density_g_cm3), dims.h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_tube_scenario() {
        // OD 100, wall 5, 1 m: ID 90, A = 1492.26 mm²
        let dims = Dimensions { tw: 100.0, t: 5.0, h: 1000.0, ..Default::default() };
        let w = round_tube(&dims, 7.85);
        assert_relative_eq!(w.unit_weight_kg_per_m, 11.714, epsilon = 1e-3);
        assert_relative_eq!(w.piece_weight_kg, w.unit_weight_kg_per_m, epsilon = 1e-12);
    }

    #[test]
    fn test_square_tube() {
        // 40 × 40 × 2: 1600 − 1296 = 304 mm²
        let dims = Dimensions { tw: 40.0, t: 2.0, h: 6000.0, ..Default::default() };
        let w = square_tube(&dims, 7.85);
        assert_relative_eq!(w.unit_weight_kg_per_m, 2.3864, epsilon = 1e-9);
        assert_relative_eq!(w.piece_weight_kg, 14.3184, epsilon = 1e-9);
    }

    #[test]
    fn test_rect_tube() {
        // 60 × 40 × 3: 2400 − 54·34 = 564 mm²
        let dims = Dimensions { tw: 60.0, u: 40.0, t: 3.0, h: 1000.0, ..Default::default() };
        let w = rect_tube(&dims, 7.85);
        assert_relative_eq!(w.unit_weight_kg_per_m, 4.4274, epsilon = 1e-9);
    }

    #[test]
    fn test_square_rect_agree() {
        let square = Dimensions { tw: 50.0, t: 4.0, h: 2500.0, ..Default::default() };
        let rect = Dimensions { u: 50.0, ..square };
        assert_relative_eq!(
            square_tube(&square, 7.85).piece_weight_kg,
            rect_tube(&rect, 7.85).piece_weight_kg,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_thick_wall_is_solid() {
        let dims = Dimensions { tw: 20.0, t: 15.0, h: 1000.0, ..Default::default() };
        let tube = hex_tube(&dims, 7.85);
        let bar = crate::calculations::bars::hex_bar(&dims, 7.85);
        assert_relative_eq!(tube.unit_weight_kg_per_m, bar.unit_weight_kg_per_m, epsilon = 1e-12);
    }
}
