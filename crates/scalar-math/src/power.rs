use crate::config::MAX_EXACT_FACTORIAL;

/// Raise `n` to the integer power `exp`.
///
/// `exp == 0` gives 1 for every `n` (including 0 and NaN), and a negative
/// exponent gives the reciprocal of the matching positive power.
pub fn power(n: f32, exp: i32) -> f32 {
    if exp > 0 {
        positive_power(n, exp.unsigned_abs())
    } else if exp < 0 {
        1.0 / positive_power(n, exp.unsigned_abs())
    } else {
        1.0
    }
}

/// Exponentiation by squaring: one multiply per bit of `exp`.
fn positive_power(n: f32, exp: u32) -> f32 {
    let mut result = 1.0;
    let mut base = n;
    let mut remaining = exp;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result *= base;
        }
        base *= base;
        remaining >>= 1;
    }
    result
}

/// `f!` for small non-negative integers.
///
/// Anything `<= 1` (negative input included) returns 1. Past `12!` the value
/// no longer fits an `i32` and the result saturates at `i32::MAX`.
pub fn factorial(f: i32) -> i32 {
    if f <= 1 {
        return 1;
    }
    if f > MAX_EXACT_FACTORIAL {
        return i32::MAX;
    }
    f * factorial(f - 1)
}

/// `n!` accumulated in `f32`, used where the integer version would overflow.
pub fn factorial_f32(n: u32) -> f32 {
    (2..=n).fold(1.0, |acc, k| acc * k as f32)
}
