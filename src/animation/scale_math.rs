// src/animation/scale_math.rs
//
// Splits one linear progress value into eased, staged progress
// for the parts of a figure. Part i of n only starts once parts
// 0..i have reached their full value.

/// Per tick progress step before easing.
pub const STEP_GAP: f32 = 0.05;

/// Threshold at which `mirror_value` switches step size.
pub const SCALE_DIV: f32 = 0.51;

pub fn inverse(n: u32) -> f32 {
    1.0 / n as f32
}

/// Progress left over once the first `i` of `n` slots are subtracted.
pub fn max_scale(x: f32, i: u32, n: u32) -> f32 {
    (x - i as f32 * inverse(n)).max(0.0)
}

/// Progress of slot `i` out of `n`, rescaled to 0..=1.
pub fn divide_scale(x: f32, i: u32, n: u32) -> f32 {
    inverse(n).min(max_scale(x, i, n)) * n as f32
}

pub fn scale_factor(x: f32) -> f32 {
    (x / SCALE_DIV).floor()
}

pub fn mirror_value(x: f32, a: u32, b: u32) -> f32 {
    let k = scale_factor(x);
    (1.0 - k) * inverse(a) + k * inverse(b)
}

pub fn update_value(x: f32, dir: f32, a: u32, b: u32) -> f32 {
    update_value_with_gap(x, dir, a, b, STEP_GAP)
}

pub fn update_value_with_gap(x: f32, dir: f32, a: u32, b: u32, gap: f32) -> f32 {
    mirror_value(x, a, b) * gap * dir
}

/// +1 for 0, -1 for 1.
pub fn sign_flip(k: i32) -> f32 {
    1.0 - 2.0 * k as f32
}

/// Alternates +1 / -1 by parity.
pub fn alt_sign_flip(k: i32) -> f32 {
    sign_flip(k % 2)
}
