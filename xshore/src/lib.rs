//! # Cross-Shore Profile Geometry
//!
//! `xshore` provides the geometric primitives shared by every
//! beach-profile analysis: normalized station/elevation sequences,
//! flat-extension sampling, contour-crossing detection, and
//! datum-splitting trapezoid integration.

mod error;
pub mod math;
mod profile;
mod window;

pub use crate::{
    error::XshoreError,
    profile::{Profile, ProfileSummary},
    window::Window,
};

/// Base floating point type used for all stations, elevations, and
/// areas.
///
/// Note: this _could_ be a generic parameter, but digitized survey
/// coordinates arrive as feet with at most two decimal places, and
/// `f64` covers every realistic profile without dragging extra trait
/// bounds through the public API. The low-level helpers in [`math`]
/// stay generic.
pub type C = f64;
