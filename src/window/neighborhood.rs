use crate::config::*;
use crate::sample::*;

use itertools::izip;

///
/// A 3x3 grid of samples aligned to an output coordinate
///
/// Row 0 is the source line above the output line, row 2 the line below; column 0 is the
/// pixel to the left of the output column, column 2 the pixel to the right. Positions that
/// fall outside the frame are zeroed by `masked` so that they contribute nothing to the
/// weighted sums.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Neighborhood<TSample> {
    samples: [[TSample; 3]; 3],
}

impl<TSample: Sample> Neighborhood<TSample> {
    ///
    /// Creates a neighbourhood from three rows of samples (top, centre, bottom)
    ///
    pub fn from_rows(rows: [[TSample; 3]; 3]) -> Neighborhood<TSample> {
        Neighborhood { samples: rows }
    }

    ///
    /// Creates a neighbourhood from three column triples, oldest (leftmost) first
    ///
    /// Each triple holds the top, centre and bottom row samples of one column, which is how
    /// the pixel window accumulates them from the pool's three read cursors.
    ///
    pub (crate) fn from_columns(columns: &[[TSample; 3]; 3]) -> Neighborhood<TSample> {
        let mut samples = [[TSample::default(); 3]; 3];

        for row in 0..3 {
            for col in 0..3 {
                samples[row][col] = columns[col][row];
            }
        }

        Neighborhood { samples }
    }

    ///
    /// The sample at a row and column of the grid
    ///
    #[inline]
    pub fn sample(&self, row: usize, col: usize) -> TSample {
        self.samples[row][col]
    }

    ///
    /// A copy of this neighbourhood with every out-of-bounds position zeroed
    ///
    pub fn masked(&self, mask: &EdgeMask) -> Neighborhood<TSample> {
        let row_is_masked   = [mask.is_top_edge, false, mask.is_bottom_edge];
        let col_is_masked   = [mask.is_left_edge, false, mask.is_right_edge];
        let mut samples     = self.samples;

        for (row, row_masked) in izip!(samples.iter_mut(), row_is_masked.iter()) {
            for (sample, col_masked) in izip!(row.iter_mut(), col_is_masked.iter()) {
                if *row_masked || *col_masked {
                    *sample = TSample::default();
                }
            }
        }

        Neighborhood { samples }
    }
}
