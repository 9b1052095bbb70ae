use super::neighborhood::*;
use crate::sample::*;

///
/// The fixed-depth shift register that materialises the 3x3 neighbourhood
///
/// Three column triples are held at once: the column just read, the previous one and the one
/// before that. Shifting in the triple for column `c` completes the neighbourhood centred on
/// column `c-1`, so the emitted coordinate tag is the one that arrived on the previous shift.
/// Bubbles (line pauses and waiting gaps) shift in zeros and carry no tag; every grid
/// position a bubble can occupy is out of bounds for the coordinate that consumes it, so the
/// zeros are always masked away downstream.
///
pub struct PixelWindow<TSample> {
    /// The last three column triples, oldest first
    columns: [[TSample; 3]; 3],

    /// The coordinate whose neighbourhood the next shift will complete
    center_tag: Option<PixelCoord>,
}

impl<TSample: Sample> PixelWindow<TSample> {
    ///
    /// Creates an empty window
    ///
    pub fn new() -> PixelWindow<TSample> {
        PixelWindow {
            columns:    [[TSample::default(); 3]; 3],
            center_tag: None,
        }
    }

    ///
    /// Clears the window for a new frame
    ///
    pub fn start_frame(&mut self) {
        *self = PixelWindow::new();
    }

    ///
    /// True when no coordinate is in flight inside the window
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.center_tag.is_none()
    }

    ///
    /// Shifts one column triple (top, centre, bottom row samples) into the window, returning
    /// the neighbourhood completed by this shift together with the coordinate of its centre
    ///
    pub fn shift(&mut self, input: Option<(PixelCoord, [TSample; 3])>) -> Option<(PixelCoord, Neighborhood<TSample>)> {
        let (new_tag, new_column) = match input {
            Some((tag, column)) => (Some(tag), column),
            None                => (None, [TSample::default(); 3]),
        };

        self.columns[0] = self.columns[1];
        self.columns[1] = self.columns[2];
        self.columns[2] = new_column;

        let emitted     = self.center_tag.map(|tag| (tag, Neighborhood::from_columns(&self.columns)));
        self.center_tag = new_tag;

        emitted
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn center_lags_one_shift_behind() {
        let mut window = PixelWindow::new();

        let first   = window.shift(Some((PixelCoord { line: 0, column: 0 }, [1u8, 2, 3])));
        let second  = window.shift(Some((PixelCoord { line: 0, column: 1 }, [4u8, 5, 6])));

        assert!(first.is_none());

        let (tag, neighborhood) = second.unwrap();
        assert_eq!(tag, PixelCoord { line: 0, column: 0 });
        assert_eq!(neighborhood.sample(1, 1), 2);
        assert_eq!(neighborhood.sample(1, 2), 5);
    }

    #[test]
    fn bubble_flushes_the_pending_center() {
        let mut window = PixelWindow::new();

        window.shift(Some((PixelCoord { line: 0, column: 0 }, [1u8, 2, 3])));
        window.shift(Some((PixelCoord { line: 0, column: 1 }, [4u8, 5, 6])));
        let flushed = window.shift(None);

        let (tag, neighborhood) = flushed.unwrap();
        assert_eq!(tag, PixelCoord { line: 0, column: 1 });
        assert_eq!(neighborhood.sample(1, 1), 5);
        assert_eq!(neighborhood.sample(1, 2), 0);
        assert!(window.is_empty());
    }
}
