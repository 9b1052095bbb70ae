use demosaic_stream::config::*;
use demosaic_stream::linebuffer::*;
use demosaic_stream::render::*;
use demosaic_stream::sample::*;
use demosaic_stream::stream::*;

use itertools::iproduct;

/// A frame where every sample is its raster index (distinct values pin down the ordering)
fn ramp_frame(config: &FrameConfig) -> Vec<u8> {
    (0..config.pixel_count()).map(|idx| idx as u8).collect()
}

#[test]
fn flat_frame_reconstructs_flat() {
    let config  = FrameConfig::new(8, 6).unwrap();
    let samples = vec![37u8; config.pixel_count()];

    let mut core    = DemosaicCore::<u8>::new(config);
    let frame       = run_to_completion(&mut core, config, &samples);

    assert!(frame.is_full());

    for (y, x) in iproduct!(0..config.height(), 0..config.width()) {
        let pixel = frame.pixel(x, y);
        assert_eq!(pixel, RgbPixel { r: 37, g: 37, b: 37 }, "Pixel at ({}, {})", x, y);
    }
}

#[test]
fn emits_one_pixel_per_sample_in_raster_order() {
    let config  = FrameConfig::new(8, 6).unwrap();
    let samples = ramp_frame(&config);

    let mut core    = DemosaicCore::<u8>::new(config);
    let frame       = run_to_completion(&mut core, config, &samples);

    assert_eq!(frame.pixel_count(), config.pixel_count());

    // The directly sampled channel passes through unmodified, so checking it at every site
    // verifies both the values and the raster ordering of the output stream
    for (y, x) in iproduct!(0..config.height(), 0..config.width()) {
        let expected    = (y * config.width() + x) as u8;
        let pixel       = frame.pixel(x, y);

        let center = match (y % 2, x % 2) {
            (0, 0) => pixel.r,
            (1, 1) => pixel.b,
            _      => pixel.g,
        };

        assert_eq!(center, expected, "Centre channel at ({}, {})", x, y);
    }
}

#[test]
fn sixteen_bit_flat_frame_reconstructs_flat() {
    let config  = FrameConfig::new(6, 4).unwrap();
    let samples = vec![1000u16; config.pixel_count()];

    let mut core    = DemosaicCore::<u16>::new(config);
    let frame       = run_to_completion(&mut core, config, &samples);

    for (y, x) in iproduct!(0..config.height(), 0..config.width()) {
        assert_eq!(frame.pixel(x, y), RgbPixel { r: 1000, g: 1000, b: 1000 });
    }
}

#[test]
fn fill_level_stays_bounded_for_the_whole_frame() {
    let config  = FrameConfig::new(8, 8).unwrap();
    let samples = ramp_frame(&config);

    let mut core = DemosaicCore::<u8>::new(config);
    core.start_frame(config);

    let mut next_sample = 0;

    for _ in 0..2000 {
        if core.is_complete() {
            break;
        }

        let output = core.tick(samples.get(next_sample).copied(), true);
        if output.accepted {
            next_sample += 1;
        }

        assert!(core.fill_count() <= BUFFER_SIZE, "Fill level {} above capacity", core.fill_count());
    }

    assert!(core.is_complete());
}

#[test]
fn consumer_stall_loses_and_duplicates_nothing() {
    let config  = FrameConfig::new(8, 8).unwrap();
    let samples = ramp_frame(&config);

    // Reference output with an always-ready consumer
    let mut core    = DemosaicCore::<u8>::new(config);
    let reference   = run_to_completion(&mut core, config, &samples);

    // Same frame, but the consumer goes away for a stretch of ticks mid-frame
    let mut core = DemosaicCore::<u8>::new(config);
    core.start_frame(config);

    let mut collected   = vec![];
    let mut next_sample = 0;

    for tick_no in 0..2000 {
        if core.is_complete() {
            break;
        }

        let consumer_ready  = !(40..100).contains(&tick_no);
        let output          = core.tick(samples.get(next_sample).copied(), consumer_ready);

        if output.accepted {
            next_sample += 1;
        }
        if let Some(pixel) = output.pixel {
            assert!(consumer_ready, "Pixel emitted while the consumer was stalled");
            collected.push(pixel);
        }
    }

    assert!(core.is_complete());
    assert_eq!(next_sample, samples.len());
    assert_eq!(collected.len(), config.pixel_count());

    for (y, x) in iproduct!(0..config.height(), 0..config.width()) {
        assert_eq!(collected[y * config.width() + x], reference.pixel(x, y), "Pixel at ({}, {})", x, y);
    }
}

#[test]
fn producer_stall_only_delays_the_output() {
    let config  = FrameConfig::new(8, 6).unwrap();
    let samples = ramp_frame(&config);

    let mut core    = DemosaicCore::<u8>::new(config);
    let reference   = run_to_completion(&mut core, config, &samples);

    // The producer only offers a sample on every third tick
    let mut core = DemosaicCore::<u8>::new(config);
    core.start_frame(config);

    let mut collected   = vec![];
    let mut next_sample = 0;

    for tick_no in 0..2000 {
        if core.is_complete() {
            break;
        }

        let offered = if tick_no % 3 == 0 { samples.get(next_sample).copied() } else { None };
        let output  = core.tick(offered, true);

        if output.accepted {
            next_sample += 1;
        }
        if let Some(pixel) = output.pixel {
            collected.push(pixel);
        }
    }

    assert!(core.is_complete());
    assert_eq!(collected.len(), config.pixel_count());

    for (y, x) in iproduct!(0..config.height(), 0..config.width()) {
        assert_eq!(collected[y * config.width() + x], reference.pixel(x, y), "Pixel at ({}, {})", x, y);
    }
}

#[test]
fn reset_mid_frame_leaves_no_residue() {
    let config  = FrameConfig::new(8, 6).unwrap();
    let samples = ramp_frame(&config);

    let mut core = DemosaicCore::<u8>::new(config);
    core.start_frame(config);

    // Abort partway through the frame
    let mut next_sample = 0;
    for _ in 0..30 {
        let output = core.tick(samples.get(next_sample).copied(), true);
        if output.accepted {
            next_sample += 1;
        }
    }

    core.reset();

    // The core is idle: nothing is accepted and nothing comes out
    assert!(!core.producer_ready());
    for _ in 0..10 {
        let output = core.tick(Some(99), true);
        assert!(!output.accepted);
        assert!(output.pixel.is_none());
    }

    // A fresh frame after the aborted one produces exactly the reference output
    let mut reference_core  = DemosaicCore::<u8>::new(config);
    let reference           = run_to_completion(&mut reference_core, config, &samples);
    let frame               = run_to_completion(&mut core, config, &samples);

    assert!(frame.is_full());

    for (y, x) in iproduct!(0..config.height(), 0..config.width()) {
        assert_eq!(frame.pixel(x, y), reference.pixel(x, y), "Pixel at ({}, {})", x, y);
    }
}

#[cfg(feature = "render_png")]
#[test]
fn reconstructed_frame_encodes_as_png() {
    let config  = FrameConfig::new(8, 6).unwrap();
    let samples = ramp_frame(&config);

    let mut core    = DemosaicCore::<u8>::new(config);
    let frame       = run_to_completion(&mut core, config, &samples);

    let mut encoded = vec![];
    write_png_frame(&frame, &mut encoded).unwrap();

    // PNG signature
    assert_eq!(&encoded[0..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
}
