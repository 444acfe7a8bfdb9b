//! Annual erosion rate between two surveys of the same line.
//!
//! Both profiles are interpolated to a common uniform grid spanning
//! their combined station range, the elevation difference integrated
//! into separate cut and fill magnitudes, and the net change
//! converted to a yearly rate when survey dates are known.

use crate::{ProfvolError, FT3_PER_CUYD};
use chrono::NaiveDate;
use log::debug;
use xshore::{
    math::{linspace, split_trapezoid, validate_spacing},
    Profile, C,
};

/// Fixed-length year used for rate conversion, days.
pub const DAYS_PER_YEAR: C = 365.25;

/// Per-cell attribution of the elevation difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SplitMode {
    /// Whole-cell trapezoid sign test.
    #[default]
    Signed,

    /// Split each cell at the zero crossing of the difference, the
    /// same rule the cut & fill engine applies at the datum.
    DatumAware,
}

/// Volume change and rate between two surveys.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AerReport {
    /// Common analysis grid, ft.
    pub grid: Vec<C>,

    /// Erosion magnitude, cu yd/ft (non-negative).
    pub cut: C,

    /// Accretion magnitude, cu yd/ft (non-negative).
    pub fill: C,

    /// Net change, fill − cut, cu yd/ft.
    pub net: C,

    /// Elapsed years between surveys; NaN when either date is
    /// missing.
    pub years: C,

    /// Annual erosion rate, cu yd/ft/yr; positive denotes erosion.
    /// NaN when dates are missing or elapsed time is not positive.
    pub rate: C,
}

/// Interpolates both profiles onto a uniform grid spanning their
/// combined station range, flat-extended past either profile's ends.
pub fn interpolate_to_common_grid(
    before: &Profile,
    after: &Profile,
    dx: C,
) -> Result<(Vec<C>, Vec<C>, Vec<C>), ProfvolError> {
    validate_spacing(dx).map_err(ProfvolError::Geometry)?;
    let x_min = before.x_min().min(after.x_min());
    let x_max = before.x_max().max(after.x_max());
    let n = (((x_max - x_min) / dx).floor() as usize + 1).max(2);
    let grid: Vec<C> = linspace(x_min, x_max, n).collect();
    let z_before = before.resample(&grid);
    let z_after = after.resample(&grid);
    debug!("aer grid; span: {}..{}, nodes: {}", x_min, x_max, n);
    Ok((grid, z_before, z_after))
}

/// Fractional years between two dates using a 365.25-day year.
pub fn years_between(from: NaiveDate, to: NaiveDate) -> C {
    (to - from).num_days().abs() as C / DAYS_PER_YEAR
}

/// Cut and fill magnitudes, in cu yd/ft, of the elevation change
/// from `z_before` to `z_after` over `grid`. Cells where the earlier
/// surface is higher accumulate into cut.
pub fn cut_fill_per_ft(grid: &[C], z_before: &[C], z_after: &[C], mode: SplitMode) -> (C, C) {
    let mut cut_ft2 = 0.0;
    let mut fill_ft2 = 0.0;
    for i in 0..grid.len().saturating_sub(1) {
        let (x0, x1) = (grid[i], grid[i + 1]);
        if x1 <= x0 {
            continue;
        }
        let d0 = z_before[i] - z_after[i];
        let d1 = z_before[i + 1] - z_after[i + 1];
        match mode {
            SplitMode::Signed => {
                let area = 0.5 * (d0 + d1) * (x1 - x0);
                if area > 0.0 {
                    cut_ft2 += area;
                } else {
                    fill_ft2 += -area;
                }
            }
            SplitMode::DatumAware => {
                let (above, below) = split_trapezoid(x0, x1, d0, d1, 0.0);
                cut_ft2 += above;
                fill_ft2 += -below;
            }
        }
    }
    (cut_ft2 / FT3_PER_CUYD, fill_ft2 / FT3_PER_CUYD)
}

/// Computes volume change between a before/after survey pair and,
/// when both dates are given, the annual erosion rate.
pub fn annual_erosion_rate(
    before: &Profile,
    after: &Profile,
    dates: Option<(NaiveDate, NaiveDate)>,
    dx: C,
    mode: SplitMode,
) -> Result<AerReport, ProfvolError> {
    let (grid, z_before, z_after) = interpolate_to_common_grid(before, after, dx)?;
    let (cut, fill) = cut_fill_per_ft(&grid, &z_before, &z_after, mode);
    let net = fill - cut;

    let (years, rate) = match dates {
        Some((from, to)) => {
            let years = years_between(from, to);
            if years > 0.0 {
                (years, -net / years)
            } else {
                (years, C::NAN)
            }
        }
        None => (C::NAN, C::NAN),
    };

    Ok(AerReport {
        grid,
        cut,
        fill,
        net,
        years,
        rate,
    })
}
