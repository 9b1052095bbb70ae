//!
//! The bounded pool of line buffers at the heart of the core.
//!
//! The pool is a circular allocator over a small fixed set of line stores. One cursor marks
//! the buffer currently receiving writes and three read cursors, at fixed offsets from a base,
//! expose three vertically adjacent source lines to the pixel window. The fill level is the
//! only synchronisation state shared between the write side and the read side: the write
//! controller stalls when the pool is full, and the read controller stalls when too few lines
//! are buffered.
//!
//! The physical storage behind each line is an external collaborator, modelled by the
//! `LineStore` trait as a dual-port random-access store.
//!

mod line_store;
mod line_buffer_pool;

pub use line_store::*;
pub use line_buffer_pool::*;
