// src/config/config_types.rs
//
// Config types for the app. Every section falls back to the
// stock look of the view when a key is missing.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ellipseoverline".to_string(),
            width: 1080,
            height: 720,
            fullscreen: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub arc_resolution: u32, // points along a fully drawn half ellipse
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { arc_resolution: 64 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub fore_color: String,
    pub back_color: String,
    pub stroke_factor: f32,  // stroke weight = min(w, h) / stroke_factor
    pub size_factor: f32,    // half line length = node gap / size_factor
    pub ellipse_factor: f32, // ellipse minor radius = half line length / ellipse_factor
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            fore_color: "#f44336".to_string(),
            back_color: "#BDBDBD".to_string(),
            stroke_factor: 90.0,
            size_factor: 2.9,
            ellipse_factor: 2.8,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub nodes: usize,
    pub ellipses: u32,
    pub parts: u32,
    pub step_gap: f32,
    pub tick_interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            nodes: 5,
            ellipses: 2,
            parts: 2,
            step_gap: 0.05,
            tick_interval_ms: 50,
        }
    }
}
