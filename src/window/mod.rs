//!
//! The sliding 3x3 pixel window.
//!
//! Every tick the window shifts in one column triple read from the three buffered source
//! lines, and emits the 3x3 neighbourhood centred on the column shifted in one tick earlier.
//! The window therefore lags the read address by a fixed amount; each emitted neighbourhood
//! carries the coordinate its centre actually represents, and the edge mask and filter phase
//! are always computed from that tag rather than from the newest read address.
//!

mod neighborhood;
mod pixel_window;

pub use neighborhood::*;
pub use pixel_window::*;
