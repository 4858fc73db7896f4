//! # Solid Bar Stock and Plate
//!
//! Solid cross-sections sold by length, plus flat plate.
//!
//! | Formula | Keys | Area |
//! |---------|------|------|
//! | `strip`, `flat_bar` | `tw` width, `t` thickness, `h` length | W·T |
//! | `plate` | `h` length, `tw` width, `t` thickness | L·W·T volume |
//! | `round_bar` | `tw` diameter, `h` length | 0.006165·D² kg/m |
//! | `rebar` | `tw` diameter, `h` length | D²/162 kg/m |
//! | `square_bar` | `tw` side, `h` length | a² |
//! | `hex_bar` | `tw` across flats, `h` length | (√3/2)·s² |

use super::{linear_weight, meters, PieceWeight};
use crate::dimensions::Dimensions;
use crate::units::{GramPerCm3, KgPerM3};
use crate::equations::section::{
    hexagon_area, rectangular_area, REBAR_DIVISOR, ROUND_BAR_KG_PER_M_PER_MM2, STEEL_DENSITY_G_CM3,
};

/// Strip and flat bar: rectangular section W × T
pub fn flat(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let area = rectangular_area(dims.tw, dims.t);
    PieceWeight::from_unit_weight(linear_weight(area, density_g_cm3), dims.h)
}

/// Plate: rectangular prism L × W × T
pub fn plate(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let density_kg_m3 = KgPerM3::from(GramPerCm3(density_g_cm3)).value();
    let length_m = meters(dims.h);
    let width_m = meters(dims.tw);
    let thickness_m = meters(dims.t);

    PieceWeight {
        unit_weight_kg_per_m: width_m * thickness_m * density_kg_m3,
        piece_weight_kg: length_m * width_m * thickness_m * density_kg_m3,
    }
}

/// Round bar from the fixed steel constant.
///
/// Unlike every other family this one ignores the entered density: the
/// 0.006165 kg/m per mm² constant is used as-is for any material.
pub fn round_bar(dims: &Dimensions) -> PieceWeight {
    let unit = ROUND_BAR_KG_PER_M_PER_MM2 * dims.tw * dims.tw;
    PieceWeight::from_unit_weight(unit, dims.h)
}

/// Reinforcing bar, d²/162 kg/m scaled to density
pub fn rebar(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let unit = dims.tw * dims.tw / REBAR_DIVISOR * density_g_cm3 / STEEL_DENSITY_G_CM3;
    PieceWeight::from_unit_weight(unit, dims.h)
}

/// Square bar
pub fn square_bar(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let area = rectangular_area(dims.tw, dims.tw);
    PieceWeight::from_unit_weight(linear_weight(area, density_g_cm3), dims.h)
}

/// Hexagon bar, sized across flats
pub fn hex_bar(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let area = hexagon_area(dims.tw);
    PieceWeight::from_unit_weight(linear_weight(area, density_g_cm3), dims.h)
}
