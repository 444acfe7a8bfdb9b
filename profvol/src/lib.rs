//! # Beach Profile Volumetrics
//!
//! `profvol` computes sediment volumes, cut/fill change, bar
//! morphology, and annual erosion rates from cross-shore elevation
//! profiles.
//!
//! All horizontal distances are feet, elevations are feet relative to
//! the vertical datum, and volumes are reported in cubic yards per
//! linear foot of shoreline.

pub mod aer;
pub mod bar;
pub mod compare;
pub mod contour;
pub mod cutfill;
mod error;
mod settings;

pub use {
    crate::{error::ProfvolError, settings::Settings},
    xshore,
};

use xshore::C;

/// Cubic feet per cubic yard. Areas integrate in ft² (ft³ per foot of
/// shoreline) and convert on report.
pub(crate) const FT3_PER_CUYD: C = 27.0;
