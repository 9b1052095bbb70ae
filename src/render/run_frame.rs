use super::rgb_frame::*;
use crate::config::*;
use crate::linebuffer::*;
use crate::sample::*;
use crate::stream::*;

///
/// Drives a core over a complete frame of samples with an always-ready consumer, collecting
/// the reconstructed output
///
/// This is the simplest way to run the core when no real streaming producer or consumer is
/// involved (test harnesses, offline conversion). The slice must hold exactly one sample per
/// pixel of the configured frame.
///
pub fn run_to_completion<TSample, TStore>(core: &mut DemosaicCore<TSample, TStore>, config: FrameConfig, samples: &[TSample]) -> RgbFrame<TSample>
where
    TSample:    Sample,
    TStore:     LineStore<TSample>,
{
    assert_eq!(samples.len(), config.pixel_count(), "Expected {} samples for a {}x{} frame but got {}", config.pixel_count(), config.width(), config.height(), samples.len());

    core.start_frame(config);

    let mut frame       = RgbFrame::new(config.width(), config.height());
    let mut next_sample = 0;

    // Generous bound: the pipeline only needs a handful of ticks beyond one per pixel on
    // each side of the core
    let tick_limit = samples.len() * 4 + 64;

    for _ in 0..tick_limit {
        if core.is_complete() {
            break;
        }

        let output = core.tick(samples.get(next_sample).copied(), true);

        if output.accepted {
            next_sample += 1;
        }
        if let Some(pixel) = output.pixel {
            frame.push(pixel);
        }
    }

    assert!(core.is_complete(), "Core stalled before completing the frame");

    frame
}
