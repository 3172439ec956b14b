// src/models/chain.rs
//
// The row of nodes and the cursor that walks it.
// Only the node under the cursor may animate. When its step
// completes the cursor moves one node in its direction, or turns
// around when it is already at an end of the row.

use serde::Serialize;

use super::node::Node;
use crate::animation::{StepOutcome, StepTuning};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Cursor {
    pub position: usize,
    pub direction: Direction,
}

impl Cursor {
    /// Index of the neighbor in `direction`, if the row has one.
    pub fn neighbor(&self, len: usize) -> Option<usize> {
        match self.direction {
            Direction::Forward => Some(self.position + 1).filter(|&next| next < len),
            Direction::Backward => self.position.checked_sub(1),
        }
    }

    /// Cursor after the current node finished a step.
    pub fn after_step(self, len: usize) -> Self {
        match self.neighbor(len) {
            Some(position) => Self { position, ..self },
            None => Self {
                direction: self.direction.reversed(),
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChainStep {
    Idle,
    Continuing,
    Completed { index: usize, scale: f32 },
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot {
    pub index: usize,
    pub scale: f32,
    pub dir: f32,
    pub prev_scale: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChainSnapshot {
    pub cursor: Cursor,
    pub nodes: Vec<NodeSnapshot>,
}

#[derive(Debug, Clone)]
pub struct Chain {
    nodes: Vec<Node>,
    cursor: Cursor,
    tuning: StepTuning,
}

impl Chain {
    /// Builds `count` nodes (at least one) with the cursor on node 0, moving forward.
    pub fn new(count: usize, tuning: StepTuning) -> Self {
        let nodes = (0..count.max(1)).map(Node::new).collect();
        Self {
            nodes,
            cursor: Cursor::default(),
            tuning,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn current(&self) -> &Node {
        &self.nodes[self.cursor.position]
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Visits every node in index order with its current scale.
    pub fn visit<F: FnMut(usize, f32)>(&self, mut visit: F) {
        for node in &self.nodes {
            visit(node.index, node.scale());
        }
    }

    pub fn is_animating(&self) -> bool {
        self.nodes.iter().any(|node| node.state.is_animating())
    }

    pub fn advance_current(&mut self) -> ChainStep {
        let index = self.cursor.position;
        let tuning = self.tuning;
        match self.nodes[index].state.advance(&tuning) {
            StepOutcome::Idle => ChainStep::Idle,
            StepOutcome::Continuing => ChainStep::Continuing,
            StepOutcome::Completed(scale) => {
                self.cursor = self.cursor.after_step(self.nodes.len());
                ChainStep::Completed { index, scale }
            }
        }
    }

    /// Starts the node under the cursor. False if it was already animating.
    pub fn start_current(&mut self) -> bool {
        let position = self.cursor.position;
        self.nodes[position].state.start()
    }

    pub fn snapshot(&self) -> ChainSnapshot {
        ChainSnapshot {
            cursor: self.cursor,
            nodes: self
                .nodes
                .iter()
                .map(|node| NodeSnapshot {
                    index: node.index,
                    scale: node.state.scale,
                    dir: node.state.dir,
                    prev_scale: node.state.prev_scale,
                })
                .collect(),
        }
    }
}
