use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelType {
    Gray8,
    Rgb8,
    Rgba8,
}

impl PixelType {
    #[must_use]
    pub fn channels(self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }
}

impl fmt::Display for PixelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gray8 => write!(f, "8-bit grayscale"),
            Self::Rgb8 => write!(f, "8-bit RGB"),
            Self::Rgba8 => write!(f, "8-bit RGBA"),
        }
    }
}

fn image_data_size(width: u32, height: u32, pixel_type: PixelType) -> usize {
    width as usize * height as usize * pixel_type.channels()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    BoundsMismatch {
        expected_size: usize,
        data_size: usize,
    },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                data_size,
            } => {
                write!(
                    f,
                    "image dimensions need {} bytes but data holds {}",
                    expected_size, data_size
                )
            }
        }
    }
}

impl Error for ImageError {}

/// Interleaved, row-major 8-bit image held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixel_type: PixelType,
    data: Vec<u8>,
}

impl Image {
    #[must_use]
    pub fn new(width: u32, height: u32, pixel_type: PixelType) -> Self {
        Self {
            width,
            height,
            pixel_type,
            data: vec![0; image_data_size(width, height, pixel_type)],
        }
    }

    pub fn from_data(
        width: u32,
        height: u32,
        pixel_type: PixelType,
        data: Vec<u8>,
    ) -> Result<Self, ImageError> {
        let expected_size = image_data_size(width, height, pixel_type);

        if expected_size != data.len() {
            return Err(ImageError::BoundsMismatch {
                expected_size,
                data_size: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixel_type,
            data,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Bytes per row.
    #[must_use]
    pub fn stride(&self) -> usize {
        self.width as usize * self.pixel_type.channels()
    }
}
