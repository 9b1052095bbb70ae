use crate::config::*;
use crate::sample::*;
use crate::window::*;

///
/// Approximates `sum / 3` as `sum * (1/4 + 1/16 + 1/64 + 1/1024)`
///
/// The constant is 337/1024, slightly under one third, so the result underestimates an exact
/// division by up to a few least-significant bits (the bias plus per-term truncation). This
/// is an accepted tolerance inherited from the divider-free hardware formulation, not a
/// defect: replacing it with exact division would change observable output.
///
#[inline]
pub fn approximate_third(sum: u32) -> u32 {
    (sum >> 2) + (sum >> 4) + (sum >> 6) + (sum >> 10)
}

///
/// Divides a sum of diagonal neighbours by the number of neighbours that were in bounds
///
/// 4, 2 and 1 divide exactly; 3 uses the shift-and-sum approximation.
///
fn divide_by_diagonal_count(sum: u32, in_bounds: u32) -> u32 {
    match in_bounds {
        4 => sum >> 2,
        3 => approximate_third(sum),
        2 => sum >> 1,
        _ => sum,
    }
}

///
/// Blends the four diagonal neighbours of the centre pixel
///
/// The neighbourhood must already be masked: out-of-bounds diagonals hold zero, and the
/// divisor is the count of diagonals still in bounds (4 for an interior pixel, 2 along an
/// edge, 1 in a corner).
///
pub fn corner_blend<TSample: Sample>(neighborhood: &Neighborhood<TSample>, mask: &EdgeMask) -> u32 {
    let sum = neighborhood.sample(0, 0).to_raw()
        + neighborhood.sample(0, 2).to_raw()
        + neighborhood.sample(2, 0).to_raw()
        + neighborhood.sample(2, 2).to_raw();

    divide_by_diagonal_count(sum, mask.in_bounds_diagonals())
}

///
/// Blends the neighbours directly above and below the centre pixel
///
/// Halved when both are in bounds; passed through undivided when one is masked, as only one
/// term is then non-zero.
///
pub fn vertical_blend<TSample: Sample>(neighborhood: &Neighborhood<TSample>, mask: &EdgeMask) -> u32 {
    let sum = neighborhood.sample(0, 1).to_raw() + neighborhood.sample(2, 1).to_raw();

    if mask.is_top_edge || mask.is_bottom_edge {
        sum
    } else {
        sum >> 1
    }
}

///
/// Blends the neighbours directly left and right of the centre pixel
///
pub fn horizontal_blend<TSample: Sample>(neighborhood: &Neighborhood<TSample>, mask: &EdgeMask) -> u32 {
    let sum = neighborhood.sample(1, 0).to_raw() + neighborhood.sample(1, 2).to_raw();

    if mask.is_left_edge || mask.is_right_edge {
        sum
    } else {
        sum >> 1
    }
}

///
/// Reconstructs the full RGB triplet for one output coordinate
///
/// The neighbourhood is masked against the frame edges, the three blends are computed, and
/// the filter phase picks which blend supplies which channel. The channel that was directly
/// sampled at this site always passes through as the unmodified centre sample.
///
pub fn blend_rgb<TSample: Sample>(neighborhood: &Neighborhood<TSample>, mask: &EdgeMask, phase: FilterPhase) -> RgbPixel<TSample> {
    let neighborhood    = neighborhood.masked(mask);

    let corner          = corner_blend(&neighborhood, mask);
    let vertical        = vertical_blend(&neighborhood, mask);
    let horizontal      = horizontal_blend(&neighborhood, mask);
    let center          = neighborhood.sample(1, 1).to_raw();
    let cross           = (vertical + horizontal) >> 1;

    let (r, g, b) = match phase {
        FilterPhase::RedSite            => (center, corner, cross),
        FilterPhase::GreenSiteEvenRow   => (vertical, center, horizontal),
        FilterPhase::GreenSiteOddRow    => (horizontal, center, vertical),
        FilterPhase::BlueSite           => (cross, corner, center),
    };

    RgbPixel {
        r: TSample::from_raw(r),
        g: TSample::from_raw(g),
        b: TSample::from_raw(b),
    }
}
