//! Direct comparison of two surveys on a uniform grid: elevation
//! difference table, net volume change, and horizontal contour shift.

use crate::{ProfvolError, FT3_PER_CUYD};
use xshore::{
    math::{step_grid, validate_spacing},
    Profile, Window, C,
};

/// One node of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComparisonRow {
    pub station: C,
    pub z1: C,
    pub z2: C,
    /// z1 − z2, ft.
    pub delta: C,
}

/// Profile comparison report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Comparison {
    pub window: Window,
    pub contour: C,
    pub rows: Vec<ComparisonRow>,

    /// Net volume of (z1 − z2) over the window, cu yd/ft.
    pub volume: C,

    /// Horizontal shift of the contour intercept, profile 1 minus
    /// profile 2, ft; `None` when either profile never reaches the
    /// contour.
    pub contour_shift: Option<C>,
}

/// Compares two profiles over `window` at spacing `dx`, measuring the
/// horizontal shift of `contour`.
pub fn compare_profiles(
    profile1: &Profile,
    profile2: &Profile,
    window: Window,
    contour: C,
    dx: C,
) -> Result<Comparison, ProfvolError> {
    validate_spacing(dx).map_err(ProfvolError::Geometry)?;

    let grid = step_grid(window.x_on(), window.x_off() + dx, dx);
    let rows: Vec<ComparisonRow> = grid
        .iter()
        .map(|&x| {
            let z1 = profile1.sample(x);
            let z2 = profile2.sample(x);
            ComparisonRow {
                station: x,
                z1,
                z2,
                delta: z1 - z2,
            }
        })
        .collect();

    let mut volume_ft2 = 0.0;
    for pair in rows.windows(2) {
        volume_ft2 += 0.5 * (pair[0].delta + pair[1].delta) * (pair[1].station - pair[0].station);
    }

    let contour_shift = match (
        profile1.landward_crossing(contour),
        profile2.landward_crossing(contour),
    ) {
        (Some(x1), Some(x2)) => Some(x1 - x2),
        _ => None,
    };

    Ok(Comparison {
        window,
        contour,
        rows,
        volume: volume_ft2 / FT3_PER_CUYD,
        contour_shift,
    })
}

/// Signed cross-sectional area change between two elevation arrays
/// sharing one station array, ft²; later minus earlier.
pub fn cross_section_change(stations: &[C], z_earlier: &[C], z_later: &[C]) -> C {
    let mut area = 0.0;
    for i in 1..stations.len().min(z_earlier.len()).min(z_later.len()) {
        let d0 = z_later[i - 1] - z_earlier[i - 1];
        let d1 = z_later[i] - z_earlier[i];
        area += 0.5 * (d0 + d1) * (stations[i] - stations[i - 1]);
    }
    area
}

#[cfg(test)]
mod tests {
    use super::{compare_profiles, cross_section_change};
    use approx::assert_relative_eq;
    use xshore::{Profile, Window};

    #[test]
    fn test_flat_difference_volume() {
        let p1 = Profile::new(&[0.0, 100.0], &[3.0, 3.0]).unwrap();
        let p2 = Profile::new(&[0.0, 100.0], &[1.0, 1.0]).unwrap();
        let w = Window::new(0.0, 100.0).unwrap();
        let cmp = compare_profiles(&p1, &p2, w, 2.0, 10.0).unwrap();
        assert_eq!(cmp.rows.len(), 11);
        assert_relative_eq!(cmp.volume, 200.0 / 27.0, epsilon = 1e-9);
        assert_relative_eq!(cmp.rows[5].delta, 2.0);
    }

    #[test]
    fn test_contour_shift() {
        // Both ramp through +2 ft: profile 1 at 30, profile 2 at 60.
        let p1 = Profile::new(&[0.0, 100.0], &[5.0, -5.0]).unwrap();
        let p2 = Profile::new(&[0.0, 200.0], &[5.0, -5.0]).unwrap();
        let w = Window::new(0.0, 100.0).unwrap();
        let cmp = compare_profiles(&p1, &p2, w, 2.0, 10.0).unwrap();
        assert_relative_eq!(cmp.contour_shift.unwrap(), -30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_contour_shift_undefined_when_unreached() {
        let p1 = Profile::new(&[0.0, 100.0], &[5.0, -5.0]).unwrap();
        let low = Profile::new(&[0.0, 100.0], &[-8.0, -9.0]).unwrap();
        let w = Window::new(0.0, 100.0).unwrap();
        let cmp = compare_profiles(&p1, &low, w, 2.0, 10.0).unwrap();
        assert!(cmp.contour_shift.is_none());
    }

    #[test]
    fn test_cross_section_change() {
        let x = [0.0, 10.0, 20.0, 30.0, 40.0];
        let old = [6.0, 4.0, 2.0, 0.0, -2.0];
        let new = [6.5, 5.0, 3.0, 1.0, -1.0];
        // Mean lift: 0.5, 1, 1, 1, 1 → 37.5 ft² over 40 ft.
        assert_relative_eq!(cross_section_change(&x, &old, &new), 37.5);
    }
}
