use crate::config::*;
use crate::linebuffer::*;
use crate::sample::*;

/// Lines that must be buffered before interpolation can begin
const LINES_BEFORE_READING: usize = 3;

///
/// The states of the write controller
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WriteState {
    /// After reset, before a frame has started
    Idle,

    /// Accepting samples from the producer
    Streaming,

    /// Every line of the frame has been written (terminal until the next frame start)
    Drained,
}

///
/// Consumes the incoming sample stream and fills the line buffer pool
///
/// The controller asserts `ready` to the producer whenever it is streaming and the pool has
/// room for another line. Each accepted sample goes to the pool at the current column; when a
/// line completes the write cursor advances and the row counter moves on. After three complete
/// lines the `buffered_enough` flag enables the read controller, and after the last line the
/// controller drains and permanently deasserts `ready`.
///
pub struct WriteController {
    state:              WriteState,
    column:             usize,
    row:                usize,
    buffered_enough:    bool,
}

impl WriteController {
    ///
    /// Creates a write controller in the idle state
    ///
    pub fn new() -> WriteController {
        WriteController {
            state:              WriteState::Idle,
            column:             0,
            row:                0,
            buffered_enough:    false,
        }
    }

    ///
    /// Starts streaming a new frame, discarding any in-flight row
    ///
    pub fn start_frame(&mut self) {
        *self       = WriteController::new();
        self.state  = WriteState::Streaming;
    }

    ///
    /// Returns to the idle state, discarding any in-flight row
    ///
    pub fn reset(&mut self) {
        *self = WriteController::new();
    }

    ///
    /// The current state of the controller
    ///
    #[inline]
    pub fn state(&self) -> WriteState {
        self.state
    }

    ///
    /// True once three full lines have been written, enabling the read controller
    ///
    #[inline]
    pub fn buffered_enough(&self) -> bool {
        self.buffered_enough
    }

    ///
    /// True once every line of the frame has been written
    ///
    #[inline]
    pub fn all_written(&self) -> bool {
        self.state == WriteState::Drained
    }

    ///
    /// The backpressure signal to the producer: a transfer occurs on a tick iff the producer
    /// asserts valid and this returns true (using the fill level as it stood at the start of
    /// the tick)
    ///
    #[inline]
    pub fn ready(&self, fill_count: usize, buffer_count: usize) -> bool {
        self.state == WriteState::Streaming && fill_count < buffer_count
    }

    ///
    /// Accepts one sample from the producer and writes it into the pool
    ///
    /// Must only be called on a tick where `ready` held: backpressure is structural, so an
    /// ingest against a full pool is a caller bug rather than a runtime error.
    ///
    pub fn ingest<TSample, TStore>(&mut self, value: TSample, config: &FrameConfig, pool: &mut LineBufferPool<TSample, TStore>)
    where
        TSample:    Sample,
        TStore:     LineStore<TSample>,
    {
        debug_assert!(self.state == WriteState::Streaming, "Sample ingested while not streaming");

        pool.write(self.column, value);

        if self.column == config.last_column() {
            // Line boundary: move the pool on and account for the completed row
            pool.advance_write();
            self.column = 0;

            if self.row + 1 == LINES_BEFORE_READING {
                self.buffered_enough = true;
            }

            if self.row == config.last_row() {
                self.state = WriteState::Drained;
            } else {
                self.row += 1;
            }
        } else {
            self.column += 1;
        }
    }
}
