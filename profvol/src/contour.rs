//! Single-profile area queries against a target contour elevation.

use crate::{ProfvolError, FT3_PER_CUYD};
use log::debug;
use xshore::{
    math::{linspace, validate_spacing},
    Profile, Window, C,
};

/// Area above `contour` within `window`, in cu yd per foot of
/// shoreline.
///
/// Crossings of the contour pair into (start, end) regions taken
/// landward to seaward. An odd crossing count prepends the window's
/// landward edge as a virtual wall; this is a reporting convention
/// carried over from BMAP, not a geometric truth, and outputs match
/// historical reports digit for digit. A profile entirely above the
/// contour is one region; entirely below returns zero. Regions with
/// fewer than two native samples are resampled at `dx`.
pub fn area_above_contour(
    profile: &Profile,
    contour: C,
    window: Option<Window>,
    dx: C,
) -> Result<C, ProfvolError> {
    validate_spacing(dx).map_err(ProfvolError::Geometry)?;
    let restricted = match window {
        Some(w) => profile.restrict(w)?,
        None => profile.clone(),
    };

    let mut crossings = restricted.crossings(contour);
    let x_on = restricted.x_min();
    let x_off = restricted.x_max();
    if crossings.len() % 2 == 1 {
        crossings.insert(0, x_on);
    }
    if crossings.is_empty() && restricted.elevations().iter().all(|&z| z > contour) {
        crossings = vec![x_on, x_off];
    }
    debug!(
        "area above contour; contour: {}, regions: {}",
        contour,
        crossings.len() / 2
    );

    let mut total_ft2 = 0.0;
    for pair in crossings.chunks_exact(2) {
        let (x_start, x_end) = (pair[0], pair[1]);
        if x_end <= x_start {
            continue;
        }
        let native: Vec<(C, C)> = restricted
            .iter()
            .filter(|&(x, _)| x >= x_start && x <= x_end)
            .collect();
        let (xs, zs): (Vec<C>, Vec<C>) = if native.len() < 2 {
            let n = ((x_end - x_start) / dx).ceil() as usize + 1;
            let xs: Vec<C> = linspace(x_start, x_end, n).collect();
            let zs = restricted.resample(&xs);
            (xs, zs)
        } else {
            native.into_iter().unzip()
        };
        total_ft2 += trapz_clipped(&xs, &zs, contour);
    }
    Ok(total_ft2 / FT3_PER_CUYD)
}

/// Area inside the elevation band `[low, high]` within `window`, in
/// cu yd per foot of shoreline. Elevations are clipped to the band
/// and the band height integrated over native stations.
pub fn area_between_contours(
    profile: &Profile,
    low: C,
    high: C,
    window: Option<Window>,
) -> Result<C, ProfvolError> {
    if !(high > low) {
        return Err(ProfvolError::Geometry(xshore::XshoreError::InvalidWindow {
            x_on: low,
            x_off: high,
        }));
    }
    let restricted = match window {
        Some(w) => profile.restrict(w)?,
        None => profile.clone(),
    };
    let mut area_ft2 = 0.0;
    for i in 1..restricted.len() {
        let (x0, z0) = (restricted.stations()[i - 1], restricted.elevations()[i - 1]);
        let (x1, z1) = (restricted.stations()[i], restricted.elevations()[i]);
        let h0 = z0.clamp(low, high) - low;
        let h1 = z1.clamp(low, high) - low;
        area_ft2 += 0.5 * (h0 + h1) * (x1 - x0);
    }
    Ok(area_ft2 / FT3_PER_CUYD)
}

fn trapz_clipped(xs: &[C], zs: &[C], contour: C) -> C {
    let mut area = 0.0;
    for i in 1..xs.len() {
        let h0 = (zs[i - 1] - contour).max(0.0);
        let h1 = (zs[i] - contour).max(0.0);
        area += 0.5 * (h0 + h1) * (xs[i] - xs[i - 1]);
    }
    area
}
