use std::error::Error;
use std::fmt;

/// The smallest frame the 3x3 window can slide over
const MIN_DIMENSION: usize = 3;

///
/// The reasons a frame configuration can be rejected
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConfigError {
    /// The frame width is below the minimum the pixel window supports
    FrameTooNarrow(usize),

    /// The frame height is below the minimum the line buffering supports
    FrameTooShort(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::FrameTooNarrow(width)  => write!(formatter, "Frame width {} is below the minimum of {}", width, MIN_DIMENSION),
            ConfigError::FrameTooShort(height)  => write!(formatter, "Frame height {} is below the minimum of {}", height, MIN_DIMENSION),
        }
    }
}

impl Error for ConfigError {}

///
/// The configuration for a single frame, sampled at frame start and fixed until the next one
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FrameConfig {
    width:  usize,
    height: usize,
}

impl FrameConfig {
    ///
    /// Creates a configuration for a frame of the specified size
    ///
    /// Frames narrower or shorter than 3 pixels are rejected: the interpolation window is 3
    /// pixels on a side, and the read side of the core will not start until three full lines
    /// have been buffered, so neither dimension is meaningful below that.
    ///
    pub fn new(width: usize, height: usize) -> Result<FrameConfig, ConfigError> {
        if width < MIN_DIMENSION {
            Err(ConfigError::FrameTooNarrow(width))
        } else if height < MIN_DIMENSION {
            Err(ConfigError::FrameTooShort(height))
        } else {
            Ok(FrameConfig { width, height })
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
    /// The index of the last column of the frame
    ///
    #[inline]
    pub fn last_column(&self) -> usize {
        self.width - 1
    }

    ///
    /// The index of the last line of the frame
    ///
    #[inline]
    pub fn last_row(&self) -> usize {
        self.height - 1
    }

    ///
    /// The number of pixels in the frame
    ///
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_minimum_size() {
        assert!(FrameConfig::new(3, 3).is_ok());
    }

    #[test]
    fn rejects_narrow_frame() {
        assert_eq!(FrameConfig::new(2, 10), Err(ConfigError::FrameTooNarrow(2)));
    }

    #[test]
    fn rejects_short_frame() {
        assert_eq!(FrameConfig::new(10, 2), Err(ConfigError::FrameTooShort(2)));
    }

    #[test]
    fn last_indices() {
        let config = FrameConfig::new(8, 6).unwrap();

        assert_eq!(config.last_column(), 7);
        assert_eq!(config.last_row(), 5);
        assert_eq!(config.pixel_count(), 48);
    }
}
