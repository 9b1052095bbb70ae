//!
//! # demosaic_stream
//!
//! A streaming demosaic core: mosaic samples from a single-sensor colour filter array go in
//! one at a time, and fully reconstructed R/G/B pixels come out in raster order with a constant
//! pipeline latency. The missing channels at each position are rebuilt by edge-aware bilinear
//! interpolation over a 3x3 neighbourhood.
//!
//! The interesting part is the buffer management rather than the arithmetic: a small circular
//! pool of line buffers holds just enough of the image for the window to slide over, a write
//! controller fills the pool under backpressure from its fill level, and a read controller
//! drains it while pacing the output stream. Everything advances once per global tick, so the
//! core behaves like a synchronous pipeline and can be driven against producers and consumers
//! of arbitrary relative speed without losing or duplicating pixels.
//!

/// Mosaic sample values and the reconstructed RGB triplet
pub mod sample;

/// Per-frame configuration, edge masks and the colour filter phase
pub mod config;

/// The circular pool of line buffers and its backing stores
pub mod linebuffer;

/// The write-side and read-side state machines
pub mod control;

/// The 3x3 sliding pixel window
pub mod window;

/// Edge-masked weighted blends and channel assignment
pub mod blend;

/// The synchronous core that ties the pipeline together
pub mod stream;

/// Frame collection and image output for the reconstructed stream
pub mod render;
