//! Bar morphology relative to a reference profile.
//!
//! Candidate bar windows come from directional zero-crossings of
//! (reference − specific) on a common uniform grid, paired landward
//! to seaward. Statistics inside a window are computed from the
//! specific profile alone, against a horizontal baseline at the
//! trough elevation.

use crate::{ProfvolError, FT3_PER_CUYD};
use log::debug;
use xshore::{
    math::{step_grid, validate_spacing},
    Profile, Window, C,
};

/// Crossing stations closer than this are collapsed to one, ft.
const CROSSING_EPS: C = 1e-6;

/// Bar window statistics computed from the specific profile.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BarProps {
    pub x_start: C,
    pub x_end: C,
    pub length: C,

    /// Magnitude of the trough elevation, ft.
    pub trough_depth: C,
    pub trough_station: C,

    /// Crest elevation minus trough elevation, ft.
    pub height: C,
    pub crest_station: C,

    /// Volume above the horizontal trough baseline, cu yd/ft.
    pub volume: C,

    /// Volume-weighted mean station, ft; NaN when the volume is zero.
    pub centroid_station: C,
}

/// Candidate bar windows: zero-crossings of (reference − specific)
/// paired consecutively in landward→seaward order. A trailing
/// unpaired crossing is discarded.
pub fn crossing_pairs(
    reference: &Profile,
    specific: &Profile,
    dx: C,
) -> Result<Vec<(C, C)>, ProfvolError> {
    validate_spacing(dx).map_err(ProfvolError::Geometry)?;

    let x_min = reference.x_min().min(specific.x_min());
    let mut x_max = reference.x_max().max(specific.x_max());
    if x_max <= x_min {
        x_max = x_min + dx;
    }
    let grid = step_grid(x_min, x_max + dx, dx);
    let diff: Vec<C> = grid
        .iter()
        .map(|&x| reference.sample(x) - specific.sample(x))
        .collect();

    let mut crossings = Vec::new();
    for i in 0..grid.len() - 1 {
        let (y0, y1) = (diff[i], diff[i + 1]);
        if y0 == 0.0 {
            crossings.push(grid[i]);
        }
        if (y0 > 0.0 && y1 < 0.0) || (y0 < 0.0 && y1 > 0.0) {
            let t = y0 / (y0 - y1);
            crossings.push(grid[i] + t * (grid[i + 1] - grid[i]));
        }
        if y1 == 0.0 {
            crossings.push(grid[i + 1]);
        }
    }
    crossings.sort_by(C::total_cmp);
    crossings.dedup_by(|b, a| (*b - *a).abs() <= CROSSING_EPS);
    debug!(
        "bar crossings; grid: {}, crossings: {}",
        grid.len(),
        crossings.len()
    );

    Ok(crossings
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect())
}

/// Bar statistics inside a manually supplied window.
pub fn bar_properties(
    specific: &Profile,
    x_start: C,
    x_end: C,
    dx: C,
) -> Result<BarProps, ProfvolError> {
    validate_spacing(dx).map_err(ProfvolError::Geometry)?;
    // Rejects a degenerate window before any resampling.
    Window::new(x_start, x_end).map_err(ProfvolError::Geometry)?;

    let grid = step_grid(x_start, x_end + dx, dx);
    let elev = specific.resample(&grid);

    let (mut i_trough, mut i_crest) = (0, 0);
    for (i, &z) in elev.iter().enumerate() {
        if z < elev[i_trough] {
            i_trough = i;
        }
        if z > elev[i_crest] {
            i_crest = i;
        }
    }
    let z_trough = elev[i_trough];
    let z_crest = elev[i_crest];

    let heights: Vec<C> = elev.iter().map(|&z| (z - z_trough).max(0.0)).collect();
    let mut area_ft2 = 0.0;
    let mut moment = 0.0;
    for i in 1..grid.len() {
        let width = grid[i] - grid[i - 1];
        area_ft2 += 0.5 * (heights[i - 1] + heights[i]) * width;
        moment += 0.5 * (grid[i - 1] * heights[i - 1] + grid[i] * heights[i]) * width;
    }
    let centroid_station = if area_ft2 > 0.0 {
        moment / area_ft2
    } else {
        C::NAN
    };

    Ok(BarProps {
        x_start,
        x_end,
        length: x_end - x_start,
        trough_depth: z_trough.abs(),
        trough_station: grid[i_trough],
        height: z_crest - z_trough,
        crest_station: grid[i_crest],
        volume: area_ft2 / FT3_PER_CUYD,
        centroid_station,
    })
}

/// Bar statistics for the 1-based crossing pair `pair` found against
/// `reference`.
pub fn bar_properties_for_pair(
    reference: &Profile,
    specific: &Profile,
    dx: C,
    pair: usize,
) -> Result<BarProps, ProfvolError> {
    let pairs = crossing_pairs(reference, specific, dx)?;
    if pair == 0 || pair > pairs.len() {
        return Err(ProfvolError::PairIndex {
            index: pair,
            pairs: pairs.len(),
        });
    }
    let (x_start, x_end) = pairs[pair - 1];
    bar_properties(specific, x_start, x_end, dx)
}

#[cfg(test)]
mod tests {
    use super::{bar_properties, bar_properties_for_pair, crossing_pairs};
    use crate::ProfvolError;
    use approx::assert_relative_eq;
    use xshore::{Profile, XshoreError};

    fn triangle_bar() -> Profile {
        // Submerged bar: −4 ft at both ends rising to −1 ft at 50.
        Profile::new(&[0.0, 50.0, 100.0], &[-4.0, -1.0, -4.0]).unwrap()
    }

    #[test]
    fn test_manual_window_statistics() {
        let props = bar_properties(&triangle_bar(), 0.0, 100.0, 10.0).unwrap();
        assert_relative_eq!(props.length, 100.0);
        assert_relative_eq!(props.trough_depth, 4.0);
        assert_relative_eq!(props.trough_station, 0.0);
        assert_relative_eq!(props.height, 3.0);
        assert_relative_eq!(props.crest_station, 50.0);
        // Height field is a 100-ft triangle of peak 3 ft sampled at
        // 10-ft spacing: 150 ft².
        assert_relative_eq!(props.volume, 150.0 / 27.0, epsilon = 1e-9);
        assert_relative_eq!(props.centroid_station, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_volume_window_has_nan_centroid() {
        let flat = Profile::new(&[0.0, 100.0], &[-3.0, -3.0]).unwrap();
        let props = bar_properties(&flat, 0.0, 100.0, 10.0).unwrap();
        assert_relative_eq!(props.volume, 0.0);
        assert!(props.centroid_station.is_nan());
        assert_relative_eq!(props.height, 0.0);
    }

    #[test]
    fn test_degenerate_window_rejected() {
        assert!(matches!(
            bar_properties(&triangle_bar(), 100.0, 100.0, 10.0),
            Err(ProfvolError::Geometry(XshoreError::InvalidWindow { .. }))
        ));
        assert!(matches!(
            bar_properties(&triangle_bar(), 0.0, 100.0, -1.0),
            Err(ProfvolError::Geometry(XshoreError::InvalidSpacing(_)))
        ));
    }

    #[test]
    fn test_crossing_pairs_against_reference() {
        // Reference sits at −2 ft; the bar pierces it between 33⅓
        // and 66⅔ ft.
        let reference = Profile::new(&[0.0, 100.0], &[-2.0, -2.0]).unwrap();
        let pairs = crossing_pairs(&reference, &triangle_bar(), 10.0).unwrap();
        assert_eq!(pairs.len(), 1);
        let (a, b) = pairs[0];
        assert_relative_eq!(a, 100.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(b, 200.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_crossing_detection_is_deterministic() {
        let reference = Profile::new(&[0.0, 100.0], &[-2.0, -2.0]).unwrap();
        let first = crossing_pairs(&reference, &triangle_bar(), 10.0).unwrap();
        let second = crossing_pairs(&reference, &triangle_bar(), 10.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_trailing_crossing_discarded() {
        // Difference changes sign once: a single crossing cannot
        // form a window.
        let reference = Profile::new(&[0.0, 100.0], &[0.0, 0.0]).unwrap();
        let ramp = Profile::new(&[0.0, 100.0], &[-5.0, 5.0]).unwrap();
        let pairs = crossing_pairs(&reference, &ramp, 10.0).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_pair_selection_is_one_based() {
        let reference = Profile::new(&[0.0, 100.0], &[-2.0, -2.0]).unwrap();
        let specific = triangle_bar();
        let props = bar_properties_for_pair(&reference, &specific, 10.0, 1).unwrap();
        assert_relative_eq!(props.x_start, 100.0 / 3.0, epsilon = 1e-9);

        assert!(matches!(
            bar_properties_for_pair(&reference, &specific, 10.0, 0),
            Err(ProfvolError::PairIndex { index: 0, pairs: 1 })
        ));
        assert!(matches!(
            bar_properties_for_pair(&reference, &specific, 10.0, 2),
            Err(ProfvolError::PairIndex { index: 2, pairs: 1 })
        ));
    }
}
