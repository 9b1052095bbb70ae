///
/// A single-channel mosaic sample, as produced by a colour-filter-array sensor
///
/// Samples are unsigned values of a fixed bit width. All of the blending arithmetic is carried
/// out on `u32` raw values, which leaves enough headroom for a four-term sum of 16-bit samples,
/// so a sample type only needs to say how to get in and out of that representation.
///
pub trait Sample: Copy + Clone + Default + PartialEq + std::fmt::Debug {
    /// Number of significant bits in a raw sample
    const BITS: u32;

    /// The raw value of this sample, widened for arithmetic
    fn to_raw(self) -> u32;

    /// Builds a sample from a raw value (the value must fit in `BITS` bits)
    fn from_raw(raw: u32) -> Self;
}

impl Sample for u8 {
    const BITS: u32 = 8;

    #[inline]
    fn to_raw(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_raw(raw: u32) -> Self {
        debug_assert!(raw <= u8::MAX as u32, "Sample out of range: {}", raw);
        raw as u8
    }
}

impl Sample for u16 {
    const BITS: u32 = 16;

    #[inline]
    fn to_raw(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_raw(raw: u32) -> Self {
        debug_assert!(raw <= u16::MAX as u32, "Sample out of range: {}", raw);
        raw as u16
    }
}

///
/// A reconstructed pixel with all three colour channels present
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RgbPixel<TSample> {
    pub r: TSample,
    pub g: TSample,
    pub b: TSample,
}

///
/// An output coordinate, in raster order ((0,0) is the top-left pixel of the frame)
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PixelCoord {
    pub line:   usize,
    pub column: usize,
}
