use super::line_store::*;
use crate::sample::*;

use smallvec::*;

use std::marker::PhantomData;

/// The default number of line buffers in the pool
///
/// Four is the minimum that keeps the buffer under write disjoint from the three buffers under
/// read; the fifth is a spare slot of margin.
pub const BUFFER_SIZE: usize = 5;

///
/// A fixed-capacity circular pool of line buffers
///
/// The pool exposes one write cursor and three read cursors. The read cursors sit at offsets
/// 0, 1 and 2 from a base cursor and always reference three vertically adjacent source lines,
/// in original raster order, trailing behind the write cursor. Advancing the write cursor
/// raises the fill level; retiring lines on the read side lowers it. A write-advance and a
/// single-line retire issued on the same tick leave the fill level unchanged.
///
/// At frame start the base read cursor sits on the slot *behind* the first line to be written:
/// that slot is only ever exposed as the fully-masked top row of output line 0, and it counts
/// as occupied until the first retire. Counting it keeps the write cursor out of all three
/// read slots for the whole frame: while line L is being emitted the retire count is L, so the
/// writer is held at buffer (L+3) mod BUFFER_SIZE at most while the read span is
/// {L-1, L, L+1} mod BUFFER_SIZE.
///
pub struct LineBufferPool<TSample, TStore = MemoryLineStore<TSample>> {
    /// The line stores making up the pool
    stores: SmallVec<[TStore; BUFFER_SIZE]>,

    /// Index of the buffer currently receiving writes
    write_cursor: usize,

    /// Index of the buffer under the first read cursor
    read_base: usize,

    /// Number of buffers holding data that has not been retired yet
    fill_count: usize,

    sample: PhantomData<TSample>,
}

impl<TSample, TStore> LineBufferPool<TSample, TStore>
where
    TSample:    Sample,
    TStore:     LineStore<TSample>,
{
    ///
    /// Creates a pool of `buffer_count` line buffers, each `line_length` samples long
    ///
    pub fn new(line_length: usize, buffer_count: usize) -> Self {
        assert!(buffer_count >= 4, "A pool of {} line buffers cannot keep the write buffer clear of the three read buffers", buffer_count);

        let stores = (0..buffer_count).map(|_| TStore::with_length(line_length)).collect();

        let mut pool = LineBufferPool {
            stores:         stores,
            write_cursor:   0,
            read_base:      0,
            fill_count:     0,
            sample:         PhantomData,
        };
        pool.start_frame();

        pool
    }

    ///
    /// Resets the cursors and the fill level for a new frame
    ///
    pub fn start_frame(&mut self) {
        self.write_cursor   = 0;
        self.read_base      = self.buffer_count() - 1;
        self.fill_count     = 1;
    }

    ///
    /// The number of line buffers in the pool
    ///
    #[inline]
    pub fn buffer_count(&self) -> usize {
        self.stores.len()
    }

    ///
    /// The number of buffers holding data that has not been retired yet
    ///
    #[inline]
    pub fn fill_count(&self) -> usize {
        self.fill_count
    }

    ///
    /// Stores a sample in the buffer under the write cursor
    ///
    /// The caller must not issue a write while the pool is full: the fill level is the
    /// backpressure signal, not an error condition.
    ///
    #[inline]
    pub fn write(&mut self, column: usize, value: TSample) {
        debug_assert!(self.fill_count < self.buffer_count(), "Write issued against a full pool");

        self.stores[self.write_cursor].write(column, value);
    }

    ///
    /// Moves the write cursor to the next buffer after a completed line
    ///
    pub fn advance_write(&mut self) {
        self.write_cursor   = (self.write_cursor + 1) % self.buffer_count();
        self.fill_count     += 1;

        debug_assert!(self.fill_count <= self.buffer_count(), "Fill level above pool capacity");
    }

    ///
    /// Retires the oldest buffered line, moving all three read cursors forward one buffer
    ///
    pub fn advance_read1(&mut self) {
        debug_assert!(self.fill_count >= 1, "Retired a line from an empty pool");

        self.read_base      = (self.read_base + 1) % self.buffer_count();
        self.fill_count     -= 1;
    }

    ///
    /// Retires the two oldest buffered lines, moving all three read cursors forward two buffers
    ///
    pub fn advance_read2(&mut self) {
        debug_assert!(self.fill_count >= 2, "Retired two lines with fewer than two buffered");

        self.read_base      = (self.read_base + 2) % self.buffer_count();
        self.fill_count     -= 2;
    }

    ///
    /// Reads from the buffer under the first read cursor (the top row of the window)
    ///
    #[inline]
    pub fn read0(&self, column: usize) -> TSample {
        self.stores[self.read_base].read(column)
    }

    ///
    /// Reads from the buffer under the second read cursor (the centre row of the window)
    ///
    #[inline]
    pub fn read1(&self, column: usize) -> TSample {
        self.stores[(self.read_base + 1) % self.buffer_count()].read(column)
    }

    ///
    /// Reads from the buffer under the third read cursor (the bottom row of the window)
    ///
    #[inline]
    pub fn read2(&self, column: usize) -> TSample {
        self.stores[(self.read_base + 2) % self.buffer_count()].read(column)
    }
}
