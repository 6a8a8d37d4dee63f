use crate::adapters::pixel_format::{copy_gray_to_rgb, copy_rgba_to_rgb};
use crate::controllers::save_as::errors::encode_error::EncodeError;
use crate::controllers::save_as::ports::{ImageEncoderPort, ProgressListener};
use crate::core::data::image::{Image, PixelType};
use crate::core::data::progress_sample::ProgressSample;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

/// Rows converted per parallel work item.
const BAND_ROWS: usize = 64;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum NetpbmFormat {
    /// P5, single channel.
    Pgm,
    /// P6, RGB.
    Ppm,
}

impl NetpbmFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();

        match extension.as_str() {
            "pgm" => Some(Self::Pgm),
            "ppm" => Some(Self::Ppm),
            _ => None,
        }
    }

    fn magic(self) -> &'static str {
        match self {
            Self::Pgm => "P5",
            Self::Ppm => "P6",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Pgm => "PGM",
            Self::Ppm => "PPM",
        }
    }

    fn channels(self) -> usize {
        match self {
            Self::Pgm => 1,
            Self::Ppm => 3,
        }
    }
}

/// Writes binary PGM (`.pgm`) and PPM (`.ppm`) files.
///
/// RGBA images lose their alpha channel when written as PPM, which is
/// reported as a warning through the progress listener. Colour images cannot
/// be written as PGM.
#[derive(Debug, Clone, Copy, Default)]
pub struct PpmEncoder;

impl PpmEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl ImageEncoderPort for PpmEncoder {
    fn encode(
        &self,
        path: &Path,
        image: &Image,
        progress: &dyn ProgressListener,
    ) -> Result<(), EncodeError> {
        let format = NetpbmFormat::from_path(path).ok_or_else(|| EncodeError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        if format == NetpbmFormat::Pgm && image.pixel_type() != PixelType::Gray8 {
            return Err(EncodeError::IncompatibleType {
                pixel_type: image.pixel_type(),
                format: format.name(),
            });
        }

        let rows = image.height();
        progress.status_updated(ProgressSample::new(
            0,
            rows,
            format!("Writing {}", path.display()),
        ));

        if image.pixel_type() == PixelType::Rgba8 {
            progress.status_updated(ProgressSample::warning(
                0,
                rows,
                "Alpha channel discarded",
            ));
        }

        let bands = convert_bands(image, format, progress);

        let io_error = |source: std::io::Error| EncodeError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut file = BufWriter::new(File::create(path).map_err(io_error)?);

        // Netpbm header: magic, then width height max_value
        writeln!(file, "{}", format.magic()).map_err(io_error)?;
        writeln!(file, "{} {}", image.width(), image.height()).map_err(io_error)?;
        writeln!(file, "255").map_err(io_error)?;

        for band in &bands {
            file.write_all(band).map_err(io_error)?;
        }
        file.flush().map_err(io_error)?;

        progress.status_updated(ProgressSample::new(rows, rows, "Done"));

        Ok(())
    }
}

/// Converts the image into the target layout in parallel row bands,
/// reporting completed rows as each band finishes.
///
/// The row count is bumped and reported under one lock so reports never go
/// backwards.
fn convert_bands(image: &Image, format: NetpbmFormat, progress: &dyn ProgressListener) -> Vec<Vec<u8>> {
    let stride = image.stride();
    if stride == 0 || image.height() == 0 {
        return Vec::new();
    }

    let rows = image.height();
    let completed = Mutex::new(0u32);
    let pixel_type = image.pixel_type();

    image
        .data()
        .par_chunks(stride * BAND_ROWS)
        .map(|band| {
            let converted = convert_band(band, pixel_type, format);

            let band_rows = (band.len() / stride) as u32;
            let mut done = completed.lock().unwrap_or_else(PoisonError::into_inner);
            *done += band_rows;
            progress.status_updated(ProgressSample::new(*done, rows, "Encoding"));
            drop(done);

            converted
        })
        .collect()
}

fn convert_band(band: &[u8], pixel_type: PixelType, format: NetpbmFormat) -> Vec<u8> {
    let pixels = band.len() / pixel_type.channels();

    match (pixel_type, format) {
        (PixelType::Gray8, NetpbmFormat::Ppm) => {
            let mut out = vec![0; pixels * format.channels()];
            copy_gray_to_rgb(band, &mut out);
            out
        }
        (PixelType::Rgba8, NetpbmFormat::Ppm) => {
            let mut out = vec![0; pixels * format.channels()];
            copy_rgba_to_rgb(band, &mut out);
            out
        }
        _ => band.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::save_as::ports::IgnoreProgress;

    #[derive(Default)]
    struct RecordingListener {
        samples: Mutex<Vec<ProgressSample>>,
    }

    impl ProgressListener for RecordingListener {
        fn status_updated(&self, sample: ProgressSample) {
            self.samples.lock().unwrap().push(sample);
        }
    }

    fn header_and_body(bytes: &[u8], header_lines: usize) -> (String, &[u8]) {
        let mut newlines = 0;
        let split = bytes
            .iter()
            .position(|&b| {
                if b == b'\n' {
                    newlines += 1;
                }
                newlines == header_lines
            })
            .expect("header present")
            + 1;

        (
            String::from_utf8(bytes[..split].to_vec()).unwrap(),
            &bytes[split..],
        )
    }

    #[test]
    fn test_writes_rgb_as_p6() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ppm");
        let image = Image::from_data(2, 1, PixelType::Rgb8, vec![255, 0, 0, 0, 0, 255]).unwrap();

        PpmEncoder::new().encode(&path, &image, &IgnoreProgress).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let (header, body) = header_and_body(&bytes, 3);
        assert_eq!(header, "P6\n2 1\n255\n");
        assert_eq!(body, &[255, 0, 0, 0, 0, 255]);
    }

    #[test]
    fn test_writes_gray_as_p5() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.PGM");
        let image = Image::from_data(3, 1, PixelType::Gray8, vec![0, 128, 255]).unwrap();

        PpmEncoder::new()
            .encode(&path, &image, &RecordingListener::default())
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let (header, body) = header_and_body(&bytes, 3);
        assert_eq!(header, "P5\n3 1\n255\n");
        assert_eq!(body, &[0, 128, 255]);
    }

    #[test]
    fn test_rgba_drops_alpha_and_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ppm");
        let image = Image::from_data(1, 1, PixelType::Rgba8, vec![10, 20, 30, 40]).unwrap();
        let listener = RecordingListener::default();

        PpmEncoder::new().encode(&path, &image, &listener).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let (_, body) = header_and_body(&bytes, 3);
        assert_eq!(body, &[10, 20, 30]);

        let samples = listener.samples.into_inner().unwrap();
        assert!(samples.iter().any(|sample| sample.warning));
    }

    #[test]
    fn test_progress_starts_at_zero_and_ends_complete() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tall.pgm");
        let image = Image::new(4, 300, PixelType::Gray8);
        let listener = RecordingListener::default();

        PpmEncoder::new().encode(&path, &image, &listener).unwrap();

        let samples = listener.samples.into_inner().unwrap();
        let first = samples.first().unwrap();
        let last = samples.last().unwrap();
        assert_eq!((first.progress, first.maximum), (0, 300));
        assert_eq!((last.progress, last.maximum), (300, 300));
        // 300 rows in bands of 64
        assert_eq!(samples.len(), 2 + 5);
    }

    #[test]
    fn test_band_progress_never_goes_backwards() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bands.ppm");
        let image = Image::new(8, 64 * 40, PixelType::Rgba8);
        let listener = RecordingListener::default();

        PpmEncoder::new().encode(&path, &image, &listener).unwrap();

        let progress: Vec<u32> = listener
            .samples
            .into_inner()
            .unwrap()
            .iter()
            .map(|sample| sample.progress)
            .collect();
        assert!(
            progress.windows(2).all(|pair| pair[0] <= pair[1]),
            "progress went backwards: {:?}",
            progress
        );
        assert_eq!(progress.last(), Some(&(64 * 40)));
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tif");
        let image = Image::new(1, 1, PixelType::Rgb8);

        let result = PpmEncoder::new().encode(&path, &image, &RecordingListener::default());

        assert!(matches!(result, Err(EncodeError::UnsupportedFormat { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_colour_into_pgm_is_incompatible() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pgm");
        let image = Image::new(1, 1, PixelType::Rgb8);

        let result = PpmEncoder::new().encode(&path, &image, &RecordingListener::default());

        assert!(matches!(
            result,
            Err(EncodeError::IncompatibleType {
                pixel_type: PixelType::Rgb8,
                format: "PGM"
            })
        ));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.ppm");
        let image = Image::new(1, 1, PixelType::Rgb8);

        let result = PpmEncoder::new().encode(&path, &image, &RecordingListener::default());

        assert!(matches!(result, Err(EncodeError::Io { .. })));
    }

    #[test]
    fn test_empty_image_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.ppm");
        let image = Image::new(0, 0, PixelType::Rgb8);

        PpmEncoder::new()
            .encode(&path, &image, &RecordingListener::default())
            .unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"P6\n0 0\n255\n");
    }
}
