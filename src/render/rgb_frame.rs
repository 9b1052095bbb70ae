use crate::sample::*;

///
/// A whole reconstructed frame, collected from the output stream in raster order
///
pub struct RgbFrame<TSample> {
    width:  usize,
    height: usize,
    pixels: Vec<RgbPixel<TSample>>,
}

impl<TSample: Sample> RgbFrame<TSample> {
    ///
    /// Creates an empty frame of the specified size
    ///
    pub fn new(width: usize, height: usize) -> RgbFrame<TSample> {
        RgbFrame {
            width:  width,
            height: height,
            pixels: Vec::with_capacity(width * height),
        }
    }

    ///
    /// The width of the frame in pixels
    ///
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    ///
    /// The height of the frame in pixels
    ///
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    ///
    /// The number of pixels collected so far
    ///
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    ///
    /// True once every pixel of the frame has been collected
    ///
    #[inline]
    pub fn is_full(&self) -> bool {
        self.pixels.len() == self.width * self.height
    }

    ///
    /// Appends the next pixel in raster order
    ///
    pub fn push(&mut self, pixel: RgbPixel<TSample>) {
        debug_assert!(!self.is_full(), "More pixels collected than the frame can hold");

        self.pixels.push(pixel);
    }

    ///
    /// The pixel at a coordinate within the frame
    ///
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> RgbPixel<TSample> {
        self.pixels[y * self.width + x]
    }

    ///
    /// Packs the frame as interleaved 8-bit RGB bytes, in raster order
    ///
    /// Samples wider than 8 bits keep their most significant bits.
    ///
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let shift       = TSample::BITS.saturating_sub(8);
        let mut bytes   = Vec::with_capacity(self.pixels.len() * 3);

        for pixel in self.pixels.iter() {
            bytes.push((pixel.r.to_raw() >> shift) as u8);
            bytes.push((pixel.g.to_raw() >> shift) as u8);
            bytes.push((pixel.b.to_raw() >> shift) as u8);
        }

        bytes
    }
}
