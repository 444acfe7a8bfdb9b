//! Cut & fill comparison of two surveys of the same line.
//!
//! The earlier survey (or design template) is compared against the
//! later as-built survey over a shared window. Integration cells
//! break at every native station of either profile, at every
//! profile-to-profile intersection, and at every datum crossing, so
//! each cell is a pair of plain trapezoids.

use crate::{ProfvolError, FT3_PER_CUYD};
use log::debug;
use xshore::{math::split_trapezoid, Profile, Window, C};

/// Cell boundary construction. `Full` is the production mode; the
/// reduced sets exist for cross-validation of historical reports and
/// are not separate products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryStrategy {
    /// Native stations ∪ window edges ∪ profile intersections ∪
    /// datum crossings.
    #[default]
    Full,

    /// Native stations ∪ window edges ∪ profile intersections.
    IntersectionsOnly,

    /// Native stations ∪ window edges ∪ datum crossings.
    DatumOnly,
}

/// One row of the cut & fill cell table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cell {
    /// Seaward edge of the cell, ft.
    pub end_station: C,

    /// As-built elevation at the seaward edge, ft.
    pub end_elevation: C,

    /// Signed cell volume, cu yd/ft; accretion positive.
    pub volume: C,

    /// Mean elevation change across the cell, ft.
    pub thickness: C,

    /// Running signed volume through this cell, cu yd/ft.
    pub cumulative: C,

    /// Running sum of absolute cell volumes, cu yd/ft.
    pub gross: C,
}

/// Seaward-most datum intercepts of the two surveys.
///
/// A value is `None` when that profile never crosses the datum inside
/// the window; no extrapolation is attempted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShorelineChange {
    pub template: Option<C>,
    pub built: Option<C>,
    /// Built minus template, ft; seaward advance positive.
    pub change: Option<C>,
}

/// Cut & fill report for one profile pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CutFill {
    pub window: Window,
    pub cells: Vec<Cell>,

    /// Erosion magnitude, cu yd/ft (non-negative).
    pub cut: C,

    /// Accretion magnitude, cu yd/ft (non-negative).
    pub fill: C,

    /// Net change, fill − cut, cu yd/ft.
    pub net: C,

    /// Sum of absolute cell volumes, cu yd/ft.
    pub gross: C,

    /// Above-datum change: template-above minus built-above,
    /// cu yd/ft.
    pub above_datum: C,

    /// Below-datum change: built-below minus template-below,
    /// cu yd/ft.
    pub below_datum: C,

    pub shoreline: ShorelineChange,
}

impl CutFill {
    pub fn builder<'a>() -> CutFillBuilder<'a> {
        CutFillBuilder {
            template: None,
            built: None,
            window: None,
            datum: 0.0,
            strategy: BoundaryStrategy::Full,
        }
    }
}

pub struct CutFillBuilder<'a> {
    /// Earlier survey or design template (required).
    template: Option<&'a Profile>,

    /// Later as-built survey (required).
    built: Option<&'a Profile>,

    /// Comparison window; defaults to the overlap of both station
    /// ranges.
    window: Option<Window>,

    /// Datum elevation (defaults to 0.0 ft).
    datum: C,

    /// Cell boundary construction (defaults to `Full`).
    strategy: BoundaryStrategy,
}

impl<'a> CutFillBuilder<'a> {
    /// Earlier survey or design template (required).
    #[must_use]
    pub fn template(mut self, profile: &'a Profile) -> Self {
        self.template = Some(profile);
        self
    }

    /// Later as-built survey (required).
    #[must_use]
    pub fn built(mut self, profile: &'a Profile) -> Self {
        self.built = Some(profile);
        self
    }

    /// Comparison window; defaults to the overlap of both profiles'
    /// station ranges.
    #[must_use]
    pub fn window(mut self, window: Window) -> Self {
        self.window = Some(window);
        self
    }

    /// Datum elevation (defaults to 0.0 ft).
    #[must_use]
    pub fn datum(mut self, elevation: C) -> Self {
        self.datum = elevation;
        self
    }

    /// Cell boundary construction (defaults to `Full`).
    #[must_use]
    pub fn strategy(mut self, strategy: BoundaryStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn build(&self) -> Result<CutFill, ProfvolError> {
        let template = self.template.ok_or(ProfvolError::Builder("template"))?;
        let built = self.built.ok_or(ProfvolError::Builder("built"))?;
        let window = match self.window {
            Some(window) => window,
            None => Window::overlap(template, built)?,
        };

        let boundaries = cell_boundaries(template, built, window, self.datum, self.strategy);
        debug!(
            "cut/fill; window: {}..{}, boundaries: {}",
            window.x_on(),
            window.x_off(),
            boundaries.len()
        );

        let mut cells = Vec::with_capacity(boundaries.len().saturating_sub(1));
        let mut cut_ft2 = 0.0;
        let mut fill_ft2 = 0.0;
        let mut cumulative = 0.0;
        let mut gross = 0.0;
        let mut template_above = 0.0;
        let mut template_below = 0.0;
        let mut built_above = 0.0;
        let mut built_below = 0.0;

        for pair in boundaries.windows(2) {
            let (x0, x1) = (pair[0], pair[1]);
            if x1 <= x0 {
                continue;
            }
            let (zt0, zt1) = (template.sample(x0), template.sample(x1));
            let (zb0, zb1) = (built.sample(x0), built.sample(x1));
            let (d0, d1) = (zb0 - zt0, zb1 - zt1);

            let vol_ft2 = 0.5 * (d0 + d1) * (x1 - x0);
            if vol_ft2 > 0.0 {
                fill_ft2 += vol_ft2;
            } else {
                cut_ft2 += -vol_ft2;
            }

            let (ta, tb) = split_trapezoid(x0, x1, zt0, zt1, self.datum);
            let (ba, bb) = split_trapezoid(x0, x1, zb0, zb1, self.datum);
            template_above += ta;
            template_below += tb;
            built_above += ba;
            built_below += bb;

            let volume = vol_ft2 / FT3_PER_CUYD;
            cumulative += volume;
            gross += volume.abs();
            cells.push(Cell {
                end_station: x1,
                end_elevation: zb1,
                volume,
                thickness: 0.5 * (d0 + d1),
                cumulative,
                gross,
            });
        }

        let cut = cut_ft2 / FT3_PER_CUYD;
        let fill = fill_ft2 / FT3_PER_CUYD;
        let shoreline = shoreline_change(template, built, window, self.datum);

        Ok(CutFill {
            window,
            cells,
            cut,
            fill,
            net: fill - cut,
            gross,
            // Above/below attribution is asymmetric to match BMAP
            // report output; do not symmetrize.
            above_datum: (template_above - built_above) / FT3_PER_CUYD,
            below_datum: (built_below - template_below) / FT3_PER_CUYD,
            shoreline,
        })
    }
}

/// Sorted, deduplicated cell boundaries for the chosen strategy.
fn cell_boundaries(
    template: &Profile,
    built: &Profile,
    window: Window,
    datum: C,
    strategy: BoundaryStrategy,
) -> Vec<C> {
    let mut boundaries = vec![window.x_on(), window.x_off()];
    boundaries.extend(
        template
            .stations()
            .iter()
            .chain(built.stations().iter())
            .copied()
            .filter(|&x| window.contains(x)),
    );
    boundaries.sort_by(C::total_cmp);
    boundaries.dedup();

    let with_intersections = matches!(
        strategy,
        BoundaryStrategy::Full | BoundaryStrategy::IntersectionsOnly
    );
    let with_datum = matches!(
        strategy,
        BoundaryStrategy::Full | BoundaryStrategy::DatumOnly
    );

    if with_intersections {
        // The elevation difference is piecewise linear between the
        // merged native stations, so intersections interpolate there.
        let mut extra = Vec::new();
        for pair in boundaries.windows(2) {
            let (x0, x1) = (pair[0], pair[1]);
            let d0 = built.sample(x0) - template.sample(x0);
            let d1 = built.sample(x1) - template.sample(x1);
            if d0 * d1 < 0.0 {
                extra.push(x0 + d0 / (d0 - d1) * (x1 - x0));
            }
        }
        boundaries.extend(extra);
    }

    if with_datum {
        for profile in [template, built] {
            boundaries.extend(
                profile
                    .crossings(datum)
                    .into_iter()
                    .filter(|&x| window.contains(x)),
            );
        }
    }

    boundaries.sort_by(C::total_cmp);
    boundaries.dedup();
    boundaries
}

fn shoreline_change(
    template: &Profile,
    built: &Profile,
    window: Window,
    datum: C,
) -> ShorelineChange {
    let seaward_in_window = |profile: &Profile| -> Option<C> {
        let mut found = None;
        for i in 1..profile.len() {
            let x0 = profile.stations()[i - 1];
            let x1 = profile.stations()[i];
            let d0 = profile.elevations()[i - 1] - datum;
            let d1 = profile.elevations()[i] - datum;
            if d0 == 0.0 && window.contains(x0) {
                found = Some(x0);
            }
            if d0 * d1 < 0.0 {
                let x = x0 + -d0 / (d1 - d0) * (x1 - x0);
                if window.contains(x) {
                    found = Some(x);
                }
            }
            if d1 == 0.0 && window.contains(x1) {
                found = Some(x1);
            }
        }
        found
    };

    let template_x = seaward_in_window(template);
    let built_x = seaward_in_window(built);
    let change = match (template_x, built_x) {
        (Some(from), Some(to)) => Some(to - from),
        _ => None,
    };
    ShorelineChange {
        template: template_x,
        built: built_x,
        change,
    }
}
