use crate::config::HERON_ITERATIONS;

/// Square root by Heron's method with a fixed number of refinements.
///
/// There is no domain check: `sqrt(0.0)` is NaN and negative input gives a
/// meaningless value. Accuracy falls off for inputs above roughly `1e5`
/// because the `s / 2` seed is far from the root; use [`heron_sqrt`] with
/// more iterations there.
pub fn sqrt(s: f32) -> f32 {
    heron_sqrt(s, HERON_ITERATIONS)
}

/// Heron's method seeded at `s / 2`, refined exactly `iterations` times.
pub fn heron_sqrt(s: f32, iterations: usize) -> f32 {
    let mut estimate = s / 2.0;
    for _ in 0..iterations {
        estimate = (estimate + s / estimate) * 0.5;
    }
    estimate
}

/// Absolute value.
pub fn absolute(a: f32) -> f32 {
    if a < 0.0 {
        -a
    } else {
        a
    }
}
