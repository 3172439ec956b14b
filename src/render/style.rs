// src/render/style.rs

use nannou::prelude::*;

/// Stroke only, round caps.
#[derive(Debug, Clone)]
pub struct DrawStyle {
    pub color: Rgb<f32>,
    pub stroke_weight: f32,
}

impl DrawStyle {
    /// Stroke weight scales with the smaller side of the surface.
    pub fn for_surface(color: Rgb<f32>, width: f32, height: f32, stroke_factor: f32) -> Self {
        Self {
            color,
            stroke_weight: width.min(height) / stroke_factor,
        }
    }
}
