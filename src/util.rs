use std::cmp::Ordering;

/// Compare two `PartialOrd` values dangerously. If the partial comparison
/// fails (returns `None`), this will panic. This is useful if you have floats
/// that you know for a fact will not be `NaN`.
pub fn cmp_unwrap<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap()
}

/// Linear interpolation between two floats. `t` is not clamped; callers only
/// ever pass `t` in `[0, 1]`.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Where `value` falls between `start` and `end`, clamped to `[0, 1]`. A
/// degenerate range (`start == end`) maps everything to 0.
pub fn inverse_lerp(start: f64, end: f64, value: f64) -> f64 {
    if start == end {
        0.0
    } else {
        ((value - start) / (end - start)).clamp(0.0, 1.0)
    }
}
