//!
//! The blend engine: edge-masked weighted sums over the 3x3 neighbourhood, and the
//! phase-driven channel assignment that turns them into an RGB triplet.
//!

mod blend_engine;

pub use blend_engine::*;
