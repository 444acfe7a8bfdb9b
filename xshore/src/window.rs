use crate::{Profile, XshoreError, C};

/// Landward/seaward station bounds restricting an analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Window {
    x_on: C,
    x_off: C,
}

impl Window {
    /// Returns the window `[x_on, x_off]`; `x_off` must exceed
    /// `x_on`.
    pub fn new(x_on: C, x_off: C) -> Result<Self, XshoreError> {
        if !(x_off > x_on) {
            return Err(XshoreError::InvalidWindow { x_on, x_off });
        }
        Ok(Self { x_on, x_off })
    }

    /// Returns the overlap of two profiles' station ranges, the
    /// default comparison window.
    pub fn overlap(a: &Profile, b: &Profile) -> Result<Self, XshoreError> {
        let x_on = a.x_min().max(b.x_min());
        let x_off = a.x_max().min(b.x_max());
        if x_on >= x_off {
            return Err(XshoreError::NoOverlap);
        }
        Ok(Self { x_on, x_off })
    }

    /// Landward bound, ft.
    pub fn x_on(&self) -> C {
        self.x_on
    }

    /// Seaward bound, ft.
    pub fn x_off(&self) -> C {
        self.x_off
    }

    pub fn width(&self) -> C {
        self.x_off - self.x_on
    }

    pub fn contains(&self, x: C) -> bool {
        x >= self.x_on && x <= self.x_off
    }
}

#[cfg(test)]
mod tests {
    use super::Window;
    use crate::{Profile, XshoreError};
    use approx::assert_relative_eq;

    #[test]
    fn test_new_rejects_degenerate_bounds() {
        assert!(Window::new(0.0, 100.0).is_ok());
        assert!(matches!(
            Window::new(100.0, 100.0),
            Err(XshoreError::InvalidWindow { .. })
        ));
        assert!(matches!(
            Window::new(100.0, 0.0),
            Err(XshoreError::InvalidWindow { .. })
        ));
        assert!(Window::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_overlap() {
        let a = Profile::new(&[0.0, 300.0], &[1.0, 1.0]).unwrap();
        let b = Profile::new(&[100.0, 400.0], &[2.0, 2.0]).unwrap();
        let w = Window::overlap(&a, &b).unwrap();
        assert_relative_eq!(w.x_on(), 100.0);
        assert_relative_eq!(w.x_off(), 300.0);
        assert_relative_eq!(w.width(), 200.0);
    }

    #[test]
    fn test_overlap_disjoint_ranges() {
        let a = Profile::new(&[0.0, 100.0], &[1.0, 1.0]).unwrap();
        let b = Profile::new(&[200.0, 400.0], &[2.0, 2.0]).unwrap();
        assert!(matches!(
            Window::overlap(&a, &b),
            Err(XshoreError::NoOverlap)
        ));
    }
}
