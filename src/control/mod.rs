//!
//! The two state machines that drive the line buffer pool.
//!
//! The write controller consumes the incoming sample stream under backpressure and detects
//! line and frame boundaries; the read controller paces the output stream and decides when
//! enough lines are buffered for the window to proceed. They run concurrently within the
//! same synchronous domain and are synchronised only through the pool's fill level and the
//! write side's `buffered_enough`/`all_written` flags: decoupling them is what lets the
//! producer and the consumer run at unrelated rates.
//!

mod write_controller;
mod read_controller;

pub use write_controller::*;
pub use read_controller::*;
