use super::frame_config::*;
use crate::sample::*;

///
/// Marks which sides of a pixel's 3x3 neighbourhood fall outside the frame
///
/// Masked positions contribute the value 0 to the blends and are excluded from the divisors.
/// On a rectangular frame at most two flags can be set at once (a corner pixel).
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EdgeMask {
    pub is_left_edge:   bool,
    pub is_right_edge:  bool,
    pub is_top_edge:    bool,
    pub is_bottom_edge: bool,
}

impl EdgeMask {
    ///
    /// The edge mask for an output coordinate within a frame
    ///
    #[inline]
    pub fn for_coord(coord: PixelCoord, config: &FrameConfig) -> EdgeMask {
        EdgeMask {
            is_left_edge:   coord.column == 0,
            is_right_edge:  coord.column == config.last_column(),
            is_top_edge:    coord.line == 0,
            is_bottom_edge: coord.line == config.last_row(),
        }
    }

    ///
    /// A mask with no sides masked (an interior pixel)
    ///
    #[inline]
    pub fn interior() -> EdgeMask {
        EdgeMask {
            is_left_edge:   false,
            is_right_edge:  false,
            is_top_edge:    false,
            is_bottom_edge: false,
        }
    }

    ///
    /// The number of diagonal neighbours of the centre pixel that lie inside the frame
    ///
    /// This is the divisor used by the corner blend: 4 for an interior pixel, 2 along an
    /// edge, 1 in a corner.
    ///
    #[inline]
    pub fn in_bounds_diagonals(&self) -> u32 {
        let rows = 2 - (self.is_top_edge as u32) - (self.is_bottom_edge as u32);
        let cols = 2 - (self.is_left_edge as u32) - (self.is_right_edge as u32);

        rows * cols
    }
}
