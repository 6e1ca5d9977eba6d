use std::f64::consts::PI;

/// Angular width of one slice on a wheel with `count` slices.
pub fn slice_arc(count: usize) -> f64 {
    2.0 * PI / count as f64
}

/// Wraps any cumulative rotation into [0, 2π).
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(2.0 * PI)
}

/// Index of the slice currently sitting under the fixed pointer at the
/// top of the wheel. The pointer is 90° ahead of the 0-angle reference,
/// so the rotation is shifted by π/2 before mapping back to an index.
///
/// Both the live highlight during animation and the final resolution go
/// through this one function. If the two paths ever used different
/// formulas, the slice lit up while spinning could disagree with the
/// announced winner.
pub fn slice_index_at_angle(angle: f64, count: usize) -> usize {
    let pointer = normalize_angle(angle + PI / 2.0);
    ((2.0 * PI - pointer) / slice_arc(count)).floor() as usize % count
}

/// Deceleration curve for the spin: fast start, dramatic slow end.
/// Returns exactly 1.0 from t = 1 so the terminal frame snaps onto the
/// planned target instead of an asymptotic approximation.
pub fn ease_out_expo(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}
