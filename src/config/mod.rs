//!
//! Per-frame configuration and the values derived from an output coordinate: the edge mask,
//! which marks the neighbourhood positions that fall outside the frame, and the filter phase,
//! which identifies which colour the sensor actually sampled at that position.
//!
//! The configuration is an immutable value captured when a frame starts, and is threaded
//! explicitly into the controllers and the blend engine rather than living in shared state.
//!

mod frame_config;
mod edge_mask;
mod filter_phase;

pub use frame_config::*;
pub use edge_mask::*;
pub use filter_phase::*;
