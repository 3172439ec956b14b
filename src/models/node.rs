// src/models/node.rs

use crate::animation::AnimationState;

/// One figure position in the row.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub index: usize,
    pub state: AnimationState,
}

impl Node {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            state: AnimationState::new(),
        }
    }

    pub fn scale(&self) -> f32 {
        self.state.scale
    }
}
