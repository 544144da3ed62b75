//! Interpolation functions.

/// Function that maps a float from the range 0.0 to 1.0 to another float
/// from 0.0 to 1.0.
pub type InterpolateFn = fn(f32) -> f32;

/// Cubic ease-in-out: slow start, fast middle, slow end.
pub const EASE_IN_OUT_CUBIC: InterpolateFn = |t| {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
};
