// src/render/figure.rs
//
// Geometry of one node: a line with half ellipses above and below
// it. The first half of a node's scale draws the ellipses, the
// second half turns the figure upright and then slides it off the
// surface, up for even nodes and down for odd ones.

use nannou::prelude::*;

use super::style::DrawStyle;
use super::transform::{screen_to_nannou, Transform2D};
use crate::animation::scale_math::{alt_sign_flip, divide_scale};
use crate::config::Config;

// Arcs first, then the line's turn and slide.
const PHASES: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line { start: Point2, end: Point2 },
    Arc { points: Vec<Point2> },
}

impl DrawCommand {
    pub fn draw(&self, draw: &Draw, style: &DrawStyle) {
        match self {
            DrawCommand::Line { start, end } => {
                draw.line()
                    .start(*start)
                    .end(*end)
                    .stroke_weight(style.stroke_weight)
                    .color(style.color)
                    .caps_round();
            }
            DrawCommand::Arc { points } => {
                for window in points.windows(2) {
                    if let [p1, p2] = window {
                        draw.line()
                            .start(*p1)
                            .end(*p2)
                            .stroke_weight(style.stroke_weight)
                            .color(style.color)
                            .caps_round();
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct NodeFigure {
    pub node_count: usize,
    pub ellipses: u32,
    pub parts: u32,
    pub size_factor: f32,
    pub ellipse_factor: f32,
    pub arc_resolution: u32,
}

impl Default for NodeFigure {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl NodeFigure {
    pub fn from_config(config: &Config) -> Self {
        Self {
            node_count: config.animation.nodes,
            ellipses: config.animation.ellipses,
            parts: config.animation.parts,
            size_factor: config.style.size_factor,
            ellipse_factor: config.style.ellipse_factor,
            arc_resolution: config.rendering.arc_resolution,
        }
    }

    /// Horizontal distance between node centres.
    pub fn gap(&self, width: f32) -> f32 {
        width / (self.node_count + 1) as f32
    }

    /// Placement of node `index` in screen space.
    pub fn placement(&self, index: usize, scale: f32, width: f32, height: f32) -> Transform2D {
        let size = self.gap(width) / self.size_factor;
        let turn = divide_scale(scale, 1, PHASES);
        let slide = divide_scale(turn, 1, self.parts) * alt_sign_flip(index as i32);

        Transform2D {
            translation: vec2(
                self.gap(width) * (index + 1) as f32,
                height / 2.0 - (height / 2.0 + size) * slide,
            ),
            scale: Vec2::ONE,
            rotation: 90.0 * divide_scale(turn, 0, self.parts),
        }
    }

    pub fn commands(&self, index: usize, scale: f32, width: f32, height: f32) -> Vec<DrawCommand> {
        let size = self.gap(width) / self.size_factor;
        let minor = size / self.ellipse_factor;
        let arcs = divide_scale(scale, 0, PHASES);
        let placement = self.placement(index, scale, width, height);
        let to_view = |p: Point2| screen_to_nannou(placement.apply_to_point(p), width, height);

        let mut commands = vec![DrawCommand::Line {
            start: to_view(pt2(-size, 0.0)),
            end: to_view(pt2(size, 0.0)),
        }];

        for j in 0..self.ellipses {
            let progress = divide_scale(arcs, j, self.ellipses);
            if progress <= 0.0 {
                continue;
            }
            // mirror by parity; a plain 1 - 2j would stretch arcs past the second
            let mirror = Transform2D {
                scale: vec2(1.0, alt_sign_flip(j as i32)),
                ..placement.clone()
            };
            let points = half_ellipse_points(size, minor, progress, self.arc_resolution)
                .into_iter()
                .map(|p| screen_to_nannou(mirror.apply_to_point(p), width, height))
                .collect();
            commands.push(DrawCommand::Arc { points });
        }
        commands
    }

    pub fn draw(&self, draw: &Draw, index: usize, scale: f32, rect: Rect, style: &DrawStyle) {
        for command in self.commands(index, scale, rect.w(), rect.h()) {
            command.draw(draw, style);
        }
    }
}

/// Points of an ellipse with radii `a`, `b` swept from 0 to
/// `180 * progress` degrees, clockwise on screen.
pub fn half_ellipse_points(a: f32, b: f32, progress: f32, resolution: u32) -> Vec<Point2> {
    let sweep = 180.0 * progress.clamp(0.0, 1.0);
    let count = ((resolution as f32 * progress).ceil() as usize).max(1) + 1;
    (0..count)
        .map(|k| {
            let angle = (sweep * k as f32 / (count - 1) as f32).to_radians();
            pt2(a * angle.cos(), b * angle.sin())
        })
        .collect()
}
