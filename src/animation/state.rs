// src/animation/state.rs
//
// Per node progress. A node rests on an anchor (0 or 1) and a
// step moves it to the opposite anchor one tick at a time.

use super::scale_math::update_value_with_gap;

/// Step sizing shared by every node of a chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepTuning {
    pub parts_a: u32,
    pub parts_b: u32,
    pub step_gap: f32,
}

impl Default for StepTuning {
    fn default() -> Self {
        Self {
            parts_a: 2,
            parts_b: 2,
            step_gap: super::scale_math::STEP_GAP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Not animating, nothing changed.
    Idle,
    Continuing,
    /// The step finished and the node settled on this anchor.
    Completed(f32),
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationState {
    pub scale: f32,
    pub dir: f32,
    pub prev_scale: f32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self) -> bool {
        self.dir != 0.0
    }

    pub fn advance(&mut self, tuning: &StepTuning) -> StepOutcome {
        if !self.is_animating() {
            return StepOutcome::Idle;
        }

        self.scale += update_value_with_gap(
            self.scale,
            self.dir,
            tuning.parts_a,
            tuning.parts_b,
            tuning.step_gap,
        );

        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + self.dir;
            self.dir = 0.0;
            self.prev_scale = self.scale;
            return StepOutcome::Completed(self.prev_scale);
        }
        StepOutcome::Continuing
    }

    /// Heads for the opposite anchor. Returns false if already animating.
    pub fn start(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }
        self.dir = 1.0 - 2.0 * self.prev_scale;
        true
    }
}
