use crate::sample::*;

///
/// The backing store for a single line buffer
///
/// This models a dual-port random-access store: one write and one read can be issued against
/// a store on every tick without conflict. The store's 1-cycle access latency is accounted
/// for by the read stage of the core's pipeline, so `read` itself returns data directly.
///
pub trait LineStore<TSample: Sample> {
    /// Creates a store with capacity for a line of the specified length
    fn with_length(len: usize) -> Self;

    /// Stores a sample at an address within the line
    fn write(&mut self, addr: usize, value: TSample);

    /// Retrieves the sample at an address within the line
    fn read(&self, addr: usize) -> TSample;
}

///
/// A line store backed by main memory
///
pub struct MemoryLineStore<TSample> {
    samples: Vec<TSample>,
}

impl<TSample: Sample> LineStore<TSample> for MemoryLineStore<TSample> {
    fn with_length(len: usize) -> Self {
        MemoryLineStore {
            samples: vec![TSample::default(); len],
        }
    }

    #[inline]
    fn write(&mut self, addr: usize, value: TSample) {
        self.samples[addr] = value;
    }

    #[inline]
    fn read(&self, addr: usize) -> TSample {
        self.samples[addr]
    }
}
