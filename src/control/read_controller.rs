use crate::config::*;
use crate::linebuffer::*;
use crate::sample::*;

/// Buffered lines needed before a new output line may start mid-frame
const LINES_BEFORE_READING: usize = 3;

///
/// The states of the read controller
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReadState {
    /// Too few lines are buffered for output to proceed
    Waiting,

    /// Emitting pixels along the current output line
    Emitting,

    /// The one-tick gap at a line boundary while the advanced read cursors settle
    LinePause,
}

///
/// Paces the output pixel stream and drains the line buffer pool
///
/// On every tick where the downstream consumer is ready, the controller either issues one
/// read against the pool's three cursors (producing a column triple for the pixel window,
/// tagged with the output coordinate it belongs to) or lets a bubble through. At the end of
/// each line it retires the oldest buffered line and pauses for exactly one tick; it then
/// keeps emitting while at least three lines are buffered, or unconditionally once the write
/// side has ingested the whole frame, so the tail of the frame drains even though fewer than
/// three lines remain.
///
pub struct ReadController {
    state:      ReadState,
    line:       usize,
    column:     usize,
    complete:   bool,
}

impl ReadController {
    ///
    /// Creates a read controller waiting for buffered lines
    ///
    pub fn new() -> ReadController {
        ReadController {
            state:      ReadState::Waiting,
            line:       0,
            column:     0,
            complete:   false,
        }
    }

    ///
    /// Starts a new frame, zeroing the output coordinate
    ///
    pub fn start_frame(&mut self) {
        *self = ReadController::new();
    }

    ///
    /// The current state of the controller
    ///
    #[inline]
    pub fn state(&self) -> ReadState {
        self.state
    }

    ///
    /// True once a read has been issued for every pixel of the frame
    ///
    #[inline]
    pub fn frame_complete(&self) -> bool {
        self.complete
    }

    ///
    /// Advances the controller by one tick, returning the column triple read from the pool
    /// this tick (or `None` for a bubble)
    ///
    /// Must only be called on ticks where the downstream consumer is ready: a stalled
    /// consumer freezes the read side entirely. `fill_count` is the pool's fill level as it
    /// stood at the start of the tick.
    ///
    pub fn advance<TSample, TStore>(&mut self, config: &FrameConfig, pool: &mut LineBufferPool<TSample, TStore>, buffered_enough: bool, all_written: bool, fill_count: usize) -> Option<(PixelCoord, [TSample; 3])>
    where
        TSample:    Sample,
        TStore:     LineStore<TSample>,
    {
        match self.state {
            ReadState::Waiting => {
                if !self.complete && buffered_enough && (fill_count >= LINES_BEFORE_READING || all_written) {
                    self.state = ReadState::Emitting;
                }

                None
            }

            ReadState::LinePause => {
                // The cursors advanced last tick; decide whether the next line can start
                if self.complete {
                    self.state = ReadState::Waiting;
                } else if fill_count < LINES_BEFORE_READING && !all_written {
                    self.state = ReadState::Waiting;
                } else {
                    self.state = ReadState::Emitting;
                }

                None
            }

            ReadState::Emitting => {
                let coord   = PixelCoord { line: self.line, column: self.column };
                let samples = [pool.read0(self.column), pool.read1(self.column), pool.read2(self.column)];

                if self.column == config.last_column() {
                    // Line boundary: retire the oldest line and insert the settle gap
                    pool.advance_read1();
                    self.column = 0;

                    if self.line == config.last_row() {
                        self.complete = true;
                    }

                    self.line   += 1;
                    self.state  = ReadState::LinePause;
                } else {
                    self.column += 1;
                }

                Some((coord, samples))
            }
        }
    }
}
