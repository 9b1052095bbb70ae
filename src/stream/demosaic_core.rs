use crate::blend::*;
use crate::config::*;
use crate::control::*;
use crate::linebuffer::*;
use crate::sample::*;
use crate::window::*;

///
/// The result of one global tick of the core
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TickOutput<TSample> {
    /// True if the input sample offered this tick was accepted
    pub accepted: bool,

    /// The reconstructed pixel transferred to the consumer this tick, if any
    pub pixel: Option<RgbPixel<TSample>>,
}

///
/// The streaming demosaic core
///
/// Mosaic samples are offered one per tick against the `producer_ready` backpressure signal;
/// reconstructed RGB pixels emerge in strict raster order, one per accepted input sample,
/// after a constant pipeline latency. The pool's fill level is the only state shared between
/// the write side and the read side.
///
pub struct DemosaicCore<TSample: Sample, TStore: LineStore<TSample> = MemoryLineStore<TSample>> {
    config: FrameConfig,

    pool:   LineBufferPool<TSample, TStore>,
    write:  WriteController,
    read:   ReadController,
    window: PixelWindow<TSample>,

    /// Samples read from the pool this tick, available to the window next tick (the store's
    /// 1-cycle access latency)
    read_stage: Option<(PixelCoord, [TSample; 3])>,

    /// The two value-holding stages of the blend pipeline
    blend_stage:    Option<(PixelCoord, RgbPixel<TSample>)>,
    output_stage:   Option<(PixelCoord, RgbPixel<TSample>)>,
}

impl<TSample, TStore> DemosaicCore<TSample, TStore>
where
    TSample:    Sample,
    TStore:     LineStore<TSample>,
{
    ///
    /// Creates an idle core for frames of the configured size
    ///
    /// The core accepts nothing until `start_frame` is called.
    ///
    pub fn new(config: FrameConfig) -> DemosaicCore<TSample, TStore> {
        DemosaicCore {
            config:         config,
            pool:           LineBufferPool::new(config.width(), BUFFER_SIZE),
            write:          WriteController::new(),
            read:           ReadController::new(),
            window:         PixelWindow::new(),
            read_stage:     None,
            blend_stage:    None,
            output_stage:   None,
        }
    }

    ///
    /// Starts a new frame, capturing its configuration and flushing all in-flight state
    ///
    pub fn start_frame(&mut self, config: FrameConfig) {
        if config.width() != self.config.width() {
            self.pool = LineBufferPool::new(config.width(), BUFFER_SIZE);
        } else {
            self.pool.start_frame();
        }

        self.config = config;
        self.write.start_frame();
        self.read.start_frame();
        self.window.start_frame();

        self.read_stage     = None;
        self.blend_stage    = None;
        self.output_stage   = None;
    }

    ///
    /// Returns the core to the idle state, discarding any partially processed frame
    ///
    pub fn reset(&mut self) {
        self.pool.start_frame();
        self.write.reset();
        self.read.start_frame();
        self.window.start_frame();

        self.read_stage     = None;
        self.blend_stage    = None;
        self.output_stage   = None;
    }

    ///
    /// The configuration captured at the last frame start
    ///
    #[inline]
    pub fn config(&self) -> FrameConfig {
        self.config
    }

    ///
    /// The backpressure signal to the producer: a sample offered on a tick is accepted iff
    /// this holds at the start of that tick
    ///
    #[inline]
    pub fn producer_ready(&self) -> bool {
        self.write.ready(self.pool.fill_count(), self.pool.buffer_count())
    }

    ///
    /// The pool's current fill level
    ///
    #[inline]
    pub fn fill_count(&self) -> usize {
        self.pool.fill_count()
    }

    ///
    /// True once every pixel of the frame has been emitted and the pipeline has drained
    ///
    pub fn is_complete(&self) -> bool {
        self.read.frame_complete()
            && self.read_stage.is_none()
            && self.window.is_empty()
            && self.blend_stage.is_none()
            && self.output_stage.is_none()
    }

    ///
    /// Advances the core by one global tick
    ///
    /// `sample` is the producer's data when it asserts valid this tick; `consumer_ready` is
    /// the downstream consumer's readiness. Both controllers observe the fill level as it
    /// stood at the start of the tick, so a same-tick write-advance and line retire cancel
    /// out in the fill accounting, as the pool contract requires.
    ///
    pub fn tick(&mut self, sample: Option<TSample>, consumer_ready: bool) -> TickOutput<TSample> {
        let fill_at_tick    = self.pool.fill_count();
        let ready           = self.write.ready(fill_at_tick, self.pool.buffer_count());

        // Write side: accept at most one sample
        let accepted = match (sample, ready) {
            (Some(value), true) => {
                self.write.ingest(value, &self.config, &mut self.pool);
                true
            }
            _ => false,
        };

        // Read side: the whole pipeline advances one step, output register first
        let mut emitted = None;

        if consumer_ready {
            emitted             = self.output_stage.take().map(|(_, pixel)| pixel);
            self.output_stage   = self.blend_stage.take();

            // The window consumes the samples read on the previous tick and yields the
            // neighbourhood for the coordinate its centre now holds
            self.blend_stage = self.window.shift(self.read_stage.take()).map(|(coord, neighborhood)| {
                let mask    = EdgeMask::for_coord(coord, &self.config);
                let phase   = FilterPhase::for_coord(coord);

                (coord, blend_rgb(&neighborhood, &mask, phase))
            });

            // Issue this tick's read request
            self.read_stage = self.read.advance(&self.config, &mut self.pool, self.write.buffered_enough(), self.write.all_written(), fill_at_tick);
        }

        TickOutput {
            accepted:   accepted,
            pixel:      emitted,
        }
    }
}
