// src/views/scene.rs
//
// The scene ties the chain, its driver and the node figure
// together. The host forwards taps and frames, nothing else.

use nannou::prelude::*;

use crate::animation::AnimationDriver;
use crate::config::Config;
use crate::models::{Chain, ChainStep};
use crate::render::{DrawStyle, NodeFigure};

pub struct Scene {
    chain: Chain,
    driver: AnimationDriver,
    figure: NodeFigure,
    fore_color: Rgb,
    back_color: Rgb,
    stroke_factor: f32,
}

impl Scene {
    pub fn new(config: &Config) -> Self {
        Self {
            chain: Chain::new(config.animation.nodes, config.step_tuning()),
            driver: AnimationDriver::new(config.tick_interval()),
            figure: NodeFigure::from_config(config),
            fore_color: config.fore_color(),
            back_color: config.back_color(),
            stroke_factor: config.style.stroke_factor,
        }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    /// Starts the current node. True when a redraw should follow immediately.
    pub fn on_tap(&mut self) -> bool {
        if self.chain.start_current() {
            log::debug!("Tap started node {}", self.chain.cursor().position);
            self.driver.start()
        } else {
            false
        }
    }

    /// Runs one driver tick when one is due this frame.
    pub fn update(&mut self, dt: f32) -> Option<ChainStep> {
        if self.driver.should_tick(dt) {
            self.driver.tick(&mut self.chain)
        } else {
            None
        }
    }

    pub fn draw(&self, draw: &Draw, rect: Rect) {
        draw.background().color(self.back_color);

        let style = DrawStyle::for_surface(self.fore_color, rect.w(), rect.h(), self.stroke_factor);
        self.chain.visit(|index, scale| {
            self.figure.draw(draw, index, scale, rect, &style);
        });
    }
}
