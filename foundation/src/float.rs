// Comparisons that take floating point madness into account.
// Anything losslessly convertible to f64 goes in, so `nearly_equal(width, 3)` works.

/// Single precision machine epsilon, used as the tolerance for all widths.
pub const EPSILON: f64 = f32::EPSILON as f64;

pub fn nearly_equal(a: impl Into<f64>, b: impl Into<f64>) -> bool {
  within_epsilon(a.into() - b.into())
}

pub fn nearly_zero(a: impl Into<f64>) -> bool {
  within_epsilon(a.into())
}

// |d| < EPSILON, false for NaN
fn within_epsilon(d: f64) -> bool {
  -EPSILON < d && d < EPSILON
}
