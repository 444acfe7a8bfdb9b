use crate::{Window, XshoreError, C};
use log::debug;

/// A digitized cross-shore elevation survey.
///
/// Stations are feet seaward of the baseline; elevations are feet
/// relative to the vertical datum. Points are held sorted by station
/// with exact duplicate stations dropped (first occurrence wins), and
/// a profile always retains at least two points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Profile {
    stations: Vec<C>,
    elevations: Vec<C>,
}

/// Simple numeric summaries of a single profile, as printed by
/// survey inventory reports.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProfileSummary {
    pub min_elevation: C,
    pub max_elevation: C,
    pub mean_elevation: C,
    /// Elevation range (max − min), ft.
    pub relief: C,
    /// Mean spacing between consecutive stations, ft.
    pub mean_spacing: C,
    /// Relief divided by station extent.
    pub mean_slope: C,
}

impl Profile {
    /// Builds a normalized profile from parallel station/elevation
    /// arrays: sorted by station ascending, exact duplicate stations
    /// dropped keeping the first occurrence.
    pub fn new(stations: &[C], elevations: &[C]) -> Result<Self, XshoreError> {
        if stations.len() != elevations.len() {
            return Err(XshoreError::LengthMismatch(
                stations.len(),
                elevations.len(),
            ));
        }
        Self::from_points(stations.iter().copied().zip(elevations.iter().copied()))
    }

    /// Builds a normalized profile from (station, elevation) pairs.
    pub fn from_points<I>(points: I) -> Result<Self, XshoreError>
    where
        I: IntoIterator<Item = (C, C)>,
    {
        let mut points: Vec<(C, C)> = points.into_iter().collect();
        if points.iter().any(|(x, _)| !x.is_finite()) {
            return Err(XshoreError::NonFiniteStation);
        }
        let raw = points.len();
        // Stable sort keeps the first of any duplicate-station run in
        // survey order.
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        points.dedup_by(|b, a| b.0 == a.0);
        if points.len() < 2 {
            return Err(XshoreError::InsufficientData(points.len()));
        }
        debug!("profile; raw points: {}, retained: {}", raw, points.len());
        let (stations, elevations) = points.into_iter().unzip();
        Ok(Self {
            stations,
            elevations,
        })
    }

    /// Number of retained points.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false; kept for the conventional pairing with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn stations(&self) -> &[C] {
        &self.stations
    }

    pub fn elevations(&self) -> &[C] {
        &self.elevations
    }

    pub fn iter(&self) -> impl Iterator<Item = (C, C)> + '_ {
        self.stations
            .iter()
            .copied()
            .zip(self.elevations.iter().copied())
    }

    /// Landward-most station.
    pub fn x_min(&self) -> C {
        self.stations[0]
    }

    /// Seaward-most station.
    pub fn x_max(&self) -> C {
        *self.stations.last().unwrap()
    }

    /// Elevation at `x` by linear interpolation. Beyond either end of
    /// the station range the nearest endpoint's elevation is returned
    /// unchanged (flat extension), never an extrapolation.
    pub fn sample(&self, x: C) -> C {
        if x <= self.x_min() {
            return self.elevations[0];
        }
        if x >= self.x_max() {
            return *self.elevations.last().unwrap();
        }
        // First index with station > x; in-range, so 1..len.
        let i = self.stations.partition_point(|&s| s <= x);
        let (x0, x1) = (self.stations[i - 1], self.stations[i]);
        let (z0, z1) = (self.elevations[i - 1], self.elevations[i]);
        z0 + (x - x0) / (x1 - x0) * (z1 - z0)
    }

    /// Samples the profile at every grid station, flat-extended.
    pub fn resample(&self, grid: &[C]) -> Vec<C> {
        grid.iter().map(|&x| self.sample(x)).collect()
    }

    /// Returns the points whose stations fall inside `window`,
    /// inclusive of the bounds.
    pub fn restrict(&self, window: Window) -> Result<Self, XshoreError> {
        let points: Vec<(C, C)> = self
            .iter()
            .filter(|&(x, _)| window.contains(x))
            .collect();
        if points.len() < 2 {
            return Err(XshoreError::InsufficientData(points.len()));
        }
        let (stations, elevations) = points.into_iter().unzip();
        Ok(Self {
            stations,
            elevations,
        })
    }

    /// Stations where the profile meets `reference`, landward to
    /// seaward. Sign changes strictly between two samples are
    /// interpolated; a sample exactly at the reference is recorded
    /// as-is, once per adjacent segment.
    pub fn crossings(&self, reference: C) -> Vec<C> {
        let mut out = Vec::new();
        for i in 1..self.len() {
            let d0 = self.elevations[i - 1] - reference;
            let d1 = self.elevations[i] - reference;
            if d0 * d1 < 0.0 {
                let frac = -d0 / (d1 - d0);
                out.push(self.stations[i - 1] + frac * (self.stations[i] - self.stations[i - 1]));
            } else if d0 == 0.0 {
                out.push(self.stations[i - 1]);
            } else if d1 == 0.0 {
                out.push(self.stations[i]);
            }
        }
        out
    }

    /// Returns a copy with an interpolated point inserted wherever
    /// the elevation crosses `reference` strictly between two
    /// samples. Samples already at the reference are preserved
    /// without duplicate insertion.
    pub fn with_crossings(&self, reference: C) -> Self {
        let mut stations = Vec::with_capacity(self.len());
        let mut elevations = Vec::with_capacity(self.len());
        stations.push(self.stations[0]);
        elevations.push(self.elevations[0]);
        for i in 1..self.len() {
            let d0 = self.elevations[i - 1] - reference;
            let d1 = self.elevations[i] - reference;
            if d0 * d1 < 0.0 {
                let frac = -d0 / (d1 - d0);
                stations
                    .push(self.stations[i - 1] + frac * (self.stations[i] - self.stations[i - 1]));
                elevations.push(reference);
            }
            stations.push(self.stations[i]);
            elevations.push(self.elevations[i]);
        }
        Self {
            stations,
            elevations,
        }
    }

    /// Seaward-most station where the profile crosses `reference`, or
    /// `None` if it never does. Exact-reference samples count as
    /// crossings.
    pub fn seaward_crossing(&self, reference: C) -> Option<C> {
        let mut found = None;
        for i in 1..self.len() {
            let d0 = self.elevations[i - 1] - reference;
            let d1 = self.elevations[i] - reference;
            if d0 == 0.0 {
                found = Some(self.stations[i - 1]);
            }
            if d0 * d1 < 0.0 {
                let frac = -d0 / (d1 - d0);
                found = Some(
                    self.stations[i - 1] + frac * (self.stations[i] - self.stations[i - 1]),
                );
            }
            if d1 == 0.0 {
                found = Some(self.stations[i]);
            }
        }
        found
    }

    /// Landward-most station where the profile meets `reference`, or
    /// `None`. Flat segments sitting exactly at the reference are
    /// skipped, matching the BMAP contour-shift search.
    pub fn landward_crossing(&self, reference: C) -> Option<C> {
        for i in 1..self.len() {
            let z0 = self.elevations[i - 1];
            let z1 = self.elevations[i];
            if (z0 - reference) * (z1 - reference) <= 0.0 && z0 != z1 {
                let frac = (reference - z0) / (z1 - z0);
                return Some(
                    self.stations[i - 1] + frac * (self.stations[i] - self.stations[i - 1]),
                );
            }
        }
        None
    }

    /// Numeric summaries over the retained points.
    pub fn summary(&self) -> ProfileSummary {
        let n = self.len() as C;
        let min_elevation = self.elevations.iter().copied().fold(C::INFINITY, C::min);
        let max_elevation = self
            .elevations
            .iter()
            .copied()
            .fold(C::NEG_INFINITY, C::max);
        let mean_elevation = self.elevations.iter().sum::<C>() / n;
        let extent = self.x_max() - self.x_min();
        let mean_spacing = extent / (n - 1.0);
        let relief = max_elevation - min_elevation;
        ProfileSummary {
            min_elevation,
            max_elevation,
            mean_elevation,
            relief,
            mean_spacing,
            mean_slope: relief / extent,
        }
    }
}
