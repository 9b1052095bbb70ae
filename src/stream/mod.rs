//!
//! The synchronous demosaic core.
//!
//! All of the state in the core advances atomically once per global tick. The write side
//! accepts at most one sample per tick, gated by the pool's fill level; the read side is a
//! fixed pipeline (read request, store access, window shift, blend, output register) that
//! advances only on ticks where the downstream consumer is ready, so a stalled consumer
//! freezes the pipeline in place rather than dropping pixels. A reset or frame start flushes
//! every stage on the same tick.
//!

mod demosaic_core;

pub use demosaic_core::*;
