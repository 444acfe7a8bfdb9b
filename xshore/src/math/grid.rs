use crate::{XshoreError, C};
use num_traits::Float;

/// Returns `n` evenly spaced values over `[start, end]`, endpoints
/// included. `n` is clamped to at least 2.
pub fn linspace<T>(start: T, end: T, n: usize) -> impl Iterator<Item = T>
where
    T: Float,
{
    let n = n.max(2);
    let dy = (end - start) / T::from(n - 1).unwrap();
    (0..n).map(move |i| start + T::from(i).unwrap() * dy)
}

/// Returns the stations `start + k * dx` for `k = 0, 1, …` up to but
/// excluding `stop`.
///
/// Half-open stepping: callers wanting a grid that reaches `b` pass
/// `stop = b + dx`, which may overshoot `b` by less than one step.
pub fn step_grid<T>(start: T, stop: T, dx: T) -> Vec<T>
where
    T: Float,
{
    let mut out = Vec::new();
    let mut k = T::zero();
    loop {
        let x = start + k * dx;
        if x >= stop {
            break;
        }
        out.push(x);
        k = k + T::one();
    }
    out
}

/// Rejects a grid spacing that is not a positive finite number.
pub fn validate_spacing(dx: C) -> Result<(), XshoreError> {
    if !dx.is_finite() || dx <= 0.0 {
        return Err(XshoreError::InvalidSpacing(dx));
    }
    Ok(())
}
