//!
//! Collecting the reconstructed output stream into whole frames, and writing those frames
//! out as images.
//!

mod rgb_frame;
mod run_frame;

pub use rgb_frame::*;
pub use run_frame::*;

#[cfg(feature = "render_png")]
mod png_frame;

#[cfg(feature = "render_png")]
pub use png_frame::*;
