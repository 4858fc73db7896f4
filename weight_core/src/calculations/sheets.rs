//! # Sheet Products
//!
//! Grating, wire mesh and expanded metal. Each has two input styles selected
//! by [`CalcMode`]:
//!
//! - **weight**: a stated weight per m² times the sheet area
//! - **geometric** (grating, mesh): discrete members, each weighed by its own
//!   per-meter weight over its run length
//! - **thickness** (expanded metal): solid-equivalent plate volume
//!
//! Sheet length `h` and width `tf` arrive in millimeters. Weight-per-area
//! fields arrive as entered (kg/m²). For expanded metal by weight the area
//! `h` is also taken as entered (m²).
//!
//! Unit weight is reported per meter of sheet length; expanded metal by
//! weight has no length and repeats the piece weight.

use super::{linear_weight, meters, PieceWeight};
use crate::dimensions::{CalcMode, Dimensions};
use crate::equations::section::{circular_area, member_count, rectangular_area};
use crate::units::{GramPerCm3, KgPerM3};

/// Weight of a sheet from its weight per m²
fn weight_per_area(length_mm: f64, width_mm: f64, kg_per_m2: f64) -> PieceWeight {
    let unit = kg_per_m2 * width_mm / 1000.0;
    PieceWeight::from_unit_weight(unit, length_mm)
}

/// Per-meter weight from a piece weight and its length, zero for zero length
fn per_meter(piece_weight_kg: f64, length_mm: f64) -> PieceWeight {
    let length_m = length_mm / 1000.0;
    let unit = if length_m > 0.0 { piece_weight_kg / length_m } else { 0.0 };
    PieceWeight {
        unit_weight_kg_per_m: unit,
        piece_weight_kg,
    }
}

/// Two perpendicular sets of evenly spaced members.
///
/// Longitudinal members run the sheet length and are spaced across its
/// width; cross members run the width and are spaced along the length.
struct MemberGrid {
    length_mm: f64,
    width_mm: f64,
    longitudinal_kg_per_m: f64,
    longitudinal_spacing_mm: f64,
    cross_kg_per_m: f64,
    cross_spacing_mm: f64,
}

impl MemberGrid {
    fn weight(&self) -> PieceWeight {
        let longitudinal = member_count(self.width_mm, self.longitudinal_spacing_mm)
            * self.longitudinal_kg_per_m
            * self.length_mm
            / 1000.0;
        let cross = member_count(self.length_mm, self.cross_spacing_mm)
            * self.cross_kg_per_m
            * self.width_mm
            / 1000.0;
        per_meter(longitudinal + cross, self.length_mm)
    }
}

/// Steel grating.
///
/// Weight mode: `h` length, `tf` width, `tw` kg/m².
/// Geometric mode: bearing bars `tw × t` at spacing `r`, round cross bars of
/// diameter `s` at spacing `u`.
pub fn steel_grating(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    match dims.calc_mode {
        CalcMode::Weight => weight_per_area(dims.h, dims.tf, dims.tw),
        _ => MemberGrid {
            length_mm: dims.h,
            width_mm: dims.tf,
            longitudinal_kg_per_m: linear_weight(rectangular_area(dims.tw, dims.t), density_g_cm3),
            longitudinal_spacing_mm: dims.r,
            cross_kg_per_m: linear_weight(circular_area(dims.s), density_g_cm3),
            cross_spacing_mm: dims.u,
        }
        .weight(),
    }
}

/// Welded wire mesh.
///
/// Weight mode: `h` length, `tf` width, `tw` kg/m².
/// Geometric mode: wires of diameter `tw`, longitudinal at spacing `r`,
/// cross wires at spacing `u`.
pub fn wire_mesh(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    match dims.calc_mode {
        CalcMode::Weight => weight_per_area(dims.h, dims.tf, dims.tw),
        _ => {
            let wire = linear_weight(circular_area(dims.tw), density_g_cm3);
            MemberGrid {
                length_mm: dims.h,
                width_mm: dims.tf,
                longitudinal_kg_per_m: wire,
                longitudinal_spacing_mm: dims.r,
                cross_kg_per_m: wire,
                cross_spacing_mm: dims.u,
            }
            .weight()
        }
    }
}

/// Expanded metal sheet.
///
/// Thickness mode: solid plate `h × tf × t`.
/// Weight mode: `tf` kg/m² times the area `h` in m².
pub fn expanded_metal(dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    match dims.calc_mode {
        CalcMode::Thickness => {
            let density_kg_m3 = KgPerM3::from(GramPerCm3(density_g_cm3)).value();
            let length_m = meters(dims.h);
            let width_m = meters(dims.tf);
            let thickness_m = meters(dims.t);
            PieceWeight {
                unit_weight_kg_per_m: width_m * thickness_m * density_kg_m3,
                piece_weight_kg: length_m * width_m * thickness_m * density_kg_m3,
            }
        }
        _ => PieceWeight::volumetric(dims.tf * dims.h),
    }
}
