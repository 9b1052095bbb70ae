use super::rgb_frame::*;
use crate::sample::*;

use std::io::Write;

///
/// Writes a collected frame to a stream as an 8-bit RGB PNG
///
/// The samples are raw sensor values, so no gamma information is recorded in the image.
///
pub fn write_png_frame<TSample, TStream>(frame: &RgbFrame<TSample>, target: TStream) -> Result<(), png::EncodingError>
where
    TSample: Sample,
    TStream: Write,
{
    let mut encoder = png::Encoder::new(target, frame.width() as u32, frame.height() as u32);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&frame.to_rgb_bytes())?;

    Ok(())
}
