use crate::sample::*;

///
/// The position of a pixel within the 2x2 repeating pattern of the colour filter array
///
/// The phase decides which channel was actually sampled at a coordinate, and therefore which
/// channel assignment rule the blend engine applies. The layout is the RGGB arrangement: red
/// on even rows/even columns, blue on odd rows/odd columns, green elsewhere.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FilterPhase {
    /// Even line, even column: the sensor sampled red here
    RedSite,

    /// Even line, odd column: the sensor sampled green here
    GreenSiteEvenRow,

    /// Odd line, even column: the sensor sampled green here
    GreenSiteOddRow,

    /// Odd line, odd column: the sensor sampled blue here
    BlueSite,
}

impl FilterPhase {
    ///
    /// The filter phase of an output coordinate
    ///
    #[inline]
    pub fn for_coord(coord: PixelCoord) -> FilterPhase {
        match (coord.line % 2, coord.column % 2) {
            (0, 0) => FilterPhase::RedSite,
            (0, _) => FilterPhase::GreenSiteEvenRow,
            (_, 0) => FilterPhase::GreenSiteOddRow,
            (_, _) => FilterPhase::BlueSite,
        }
    }
}
