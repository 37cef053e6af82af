//! Deterministic PNG encoding of chart canvases.
//!
//! Fixed compression and filter settings give byte-identical files for the
//! same canvas. The physical resolution is recorded in a `pHYs` chunk.

use std::io::Write;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType, PixelDimensions, Unit};

use crate::error::Result;
use crate::raster::Canvas;

const METERS_PER_INCH: f64 = 0.0254;

/// Pixels per meter for a DPI value, as stored in `pHYs`.
pub fn pixels_per_meter(dpi: u32) -> u32 {
    (dpi as f64 / METERS_PER_INCH).round() as u32
}

/// Encode `canvas` as an 8-bit RGB PNG tagged with `dpi`.
pub fn write_png<W: Write>(canvas: &Canvas, writer: W, dpi: u32) -> Result<()> {
    let mut encoder = Encoder::new(writer, canvas.width(), canvas.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(Compression::Default);
    encoder.set_filter(FilterType::NoFilter);
    let ppm = pixels_per_meter(dpi);
    encoder.set_pixel_dims(Some(PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: Unit::Meter,
    }));

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(canvas.as_bytes())?;
    png_writer.finish()?;
    Ok(())
}

/// Encode to memory and return the bytes with their BLAKE3 hash.
pub fn encode_png_with_hash(canvas: &Canvas, dpi: u32) -> Result<(Vec<u8>, String)> {
    let mut data = Vec::new();
    write_png(canvas, &mut data, dpi)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// BLAKE3 hash of PNG data, hex encoded.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient() -> Canvas {
        let mut canvas = Canvas::new(32, 16, [255, 255, 255]);
        for y in 0..16 {
            for x in 0..32 {
                canvas.set(x, y, [(x * 8) as u8, (y * 16) as u8, 128]);
            }
        }
        canvas
    }

    #[test]
    fn test_deterministic() {
        let (data1, hash1) = encode_png_with_hash(&gradient(), 300).unwrap();
        let (data2, hash2) = encode_png_with_hash(&gradient(), 300).unwrap();
        assert_eq!(data1, data2);
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_header_and_resolution() {
        let (data, _) = encode_png_with_hash(&gradient(), 300).unwrap();
        let decoder = png::Decoder::new(data.as_slice());
        let reader = decoder.read_info().unwrap();
        let info = reader.info();

        assert_eq!((info.width, info.height), (32, 16));
        assert_eq!(info.color_type, ColorType::Rgb);
        let dims = info.pixel_dims.unwrap();
        assert_eq!(dims.xppu, 11811);
        assert_eq!(dims.yppu, 11811);
        assert_eq!(dims.unit, Unit::Meter);
    }

    #[test]
    fn test_pixels_round_trip() {
        let canvas = gradient();
        let (data, _) = encode_png_with_hash(&canvas, 72).unwrap();
        let mut reader = png::Decoder::new(data.as_slice()).read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        reader.next_frame(&mut buf).unwrap();
        assert_eq!(&buf[..canvas.as_bytes().len()], canvas.as_bytes());
    }
}
