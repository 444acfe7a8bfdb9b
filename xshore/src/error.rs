use crate::C;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XshoreError {
    #[error("profile retains {0} distinct stations, need at least 2")]
    InsufficientData(usize),

    #[error("station and elevation arrays differ in length ({0} vs {1})")]
    LengthMismatch(usize, usize),

    #[error("profile contains a non-finite station value")]
    NonFiniteStation,

    #[error("invalid window: x_off ({x_off}) must exceed x_on ({x_on})")]
    InvalidWindow { x_on: C, x_off: C },

    #[error("grid spacing must be positive and finite, got {0}")]
    InvalidSpacing(C),

    #[error("profiles share no common station range")]
    NoOverlap,
}
