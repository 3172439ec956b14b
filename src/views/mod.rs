// src/views/mod.rs

pub mod scene;

pub use scene::Scene;
