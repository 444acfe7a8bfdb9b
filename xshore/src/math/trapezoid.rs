use num_traits::Float;

/// Splits the signed trapezoid between stations `x0..x1` (end
/// elevations `z0`, `z1`) at the `datum` elevation.
///
/// Returns `(area_above, area_below)`, both signed and measured
/// relative to the datum plane. When the segment straddles the datum
/// it is split at the interpolated crossing station and each
/// sub-triangle assigned to its side. Endpoints exactly at the datum
/// count as above.
pub fn split_trapezoid<T>(x0: T, x1: T, z0: T, z1: T, datum: T) -> (T, T)
where
    T: Float,
{
    let two = T::one() + T::one();
    let (h0, h1) = (z0 - datum, z1 - datum);
    if h0 >= T::zero() && h1 >= T::zero() {
        ((h0 + h1) * (x1 - x0) / two, T::zero())
    } else if h0 <= T::zero() && h1 <= T::zero() {
        (T::zero(), (h0 + h1) * (x1 - x0) / two)
    } else {
        let frac = -h0 / (h1 - h0);
        let x_cross = x0 + frac * (x1 - x0);
        let first = h0 * (x_cross - x0) / two;
        let second = h1 * (x1 - x_cross) / two;
        if h0 > T::zero() {
            (first, second)
        } else {
            (second, first)
        }
    }
}
