//! Image loading.
//!
//! The format is sniffed from the file contents first and the extension
//! second, so misnamed files still decode. Everything is converted to 8-bit
//! RGB: alpha is dropped and grayscale is expanded to three equal channels.
//! An EXIF orientation tag is applied, so pixels are in display orientation.

use std::io::{BufRead, Cursor, Seek};
use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageError, ImageReader, RgbImage};
use log::debug;

use crate::error::FeatureError;

/// Decode an image file into 8-bit RGB.
pub fn load_rgb(path: &Path) -> Result<RgbImage, FeatureError> {
    decode_reader(ImageReader::open(path)?)
}

/// Decode an in-memory encoded image into 8-bit RGB.
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, FeatureError> {
    decode_reader(ImageReader::new(Cursor::new(bytes)))
}

fn decode_reader<R: BufRead + Seek>(reader: ImageReader<R>) -> Result<RgbImage, FeatureError> {
    let mut decoder = reader
        .with_guessed_format()?
        .into_decoder()
        .map_err(map_image_error)?;
    let orientation = decoder.orientation().map_err(map_image_error)?;
    let mut decoded = DynamicImage::from_decoder(decoder).map_err(map_image_error)?;
    debug!("orientation {:?}", orientation);
    decoded.apply_orientation(orientation);

    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(FeatureError::EmptyImage);
    }

    Ok(decoded.to_rgb8())
}

fn map_image_error(err: ImageError) -> FeatureError {
    match err {
        ImageError::IoError(e) => FeatureError::Io(e),
        ImageError::Unsupported(e) => FeatureError::Unsupported(e.to_string()),
        other => FeatureError::Decode(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode_png(img: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
        bytes
    }

    #[test]
    fn test_alpha_is_dropped() {
        let img = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 0]));
        let rgb = decode_rgb(&encode_png(&img)).unwrap();
        assert_eq!(rgb.dimensions(), (3, 2));
        assert_eq!(rgb.get_pixel(1, 1).0, [10, 20, 30]);
    }

    #[test]
    fn test_garbage_is_decode_or_unsupported() {
        let err = decode_rgb(b"definitely not an image").unwrap_err();
        assert!(matches!(
            err,
            FeatureError::Decode(_) | FeatureError::Unsupported(_)
        ));
    }

    #[test]
    fn test_missing_file_is_io() {
        let err = load_rgb(Path::new("/nonexistent/dir/image.png")).unwrap_err();
        assert!(matches!(err, FeatureError::Io(_)));
    }

    /// PNG with an `eXIf` chunk carrying orientation 6 (rotate 90° clockwise).
    fn encode_png_rotated(img: &RgbImage) -> Vec<u8> {
        // Big-endian TIFF header, one IFD entry: tag 0x0112, SHORT, count 1, value 6.
        let exif: [u8; 26] = [
            b'M', b'M', 0, 42, 0, 0, 0, 8, 0, 1, 0x01, 0x12, 0, 3, 0, 0, 0, 1, 0, 6, 0, 0, 0, 0, 0,
            0,
        ];
        let mut bytes = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut bytes, img.width(), img.height());
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer
                .write_chunk(png::chunk::ChunkType(*b"eXIf"), &exif)
                .unwrap();
            writer.write_image_data(img.as_raw()).unwrap();
            writer.finish().unwrap();
        }
        bytes
    }

    #[test]
    fn test_exif_orientation_is_applied() {
        // 3 wide, 2 tall; bottom-left pixel is marked.
        let img = RgbImage::from_fn(3, 2, |x, y| {
            if (x, y) == (0, 1) {
                image::Rgb([200, 0, 0])
            } else {
                image::Rgb([0, 0, 50])
            }
        });
        let rgb = decode_rgb(&encode_png_rotated(&img)).unwrap();
        assert_eq!(rgb.dimensions(), (2, 3));
        // A clockwise quarter turn brings the bottom-left corner to the top-left.
        assert_eq!(rgb.get_pixel(0, 0).0, [200, 0, 0]);
    }

    #[test]
    fn test_misnamed_file_is_sniffed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        let bytes = encode_png(&RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255])));
        std::fs::write(&path, bytes).unwrap();

        let rgb = load_rgb(&path).unwrap();
        assert_eq!(rgb.get_pixel(0, 0).0, [1, 2, 3]);
    }
}
