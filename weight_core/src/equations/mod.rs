//! # Geometry Equations
//!
//! Closed-form cross-section and volume formulas shared by every weight
//! calculation. Keeping them in one place makes each formula easy to check
//! against a handbook and keeps the calculation modules focused on how a
//! profile is assembled from these primitives.
//!
//! ## Modules
//!
//! - [`section`] - Areas, volumes, hollow-section offsets, member counts
//!
//! ## Conventions
//!
//! - All lengths in millimeters
//! - Hollow sections use a uniform wall offset; inner dimensions clamp at zero
//! - Member counts are zero when the spacing is zero

pub mod section;

pub use section::{
    annulus_area,
    circular_area,
    frustum_lateral_area,
    hexagon_area,
    inner_dimension,
    member_count,
    quarter_annulus_area,
    rectangular_area,
    sphere_volume,
    MM3_PER_M3,
    REBAR_DIVISOR,
    ROUND_BAR_KG_PER_M_PER_MM2,
    STEEL_DENSITY_G_CM3,
    STEEL_KG_PER_M_PER_MM2,
};
