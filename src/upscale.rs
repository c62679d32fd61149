//! Nearest-neighbor upscaling and PNG encoding of the finished avatar.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::AvatarError;

/// Default magnification applied to the 12x12 avatar.
pub const DEFAULT_SCALE: u32 = 16;

/// Magnify `image` by an integer `scale`; each source pixel becomes a
/// uniform `scale`x`scale` block.
///
/// # Errors
///
/// Returns [`AvatarError::InvalidArgument`] if `scale` is zero or the
/// output dimensions overflow.
pub fn upscale_image(image: &RgbaImage, scale: u32) -> Result<RgbaImage, AvatarError> {
    if scale == 0 {
        return Err(AvatarError::InvalidArgument("scale must be at least 1".into()));
    }
    let (width, height) = image.dimensions();
    let (Some(out_w), Some(out_h)) = (width.checked_mul(scale), height.checked_mul(scale)) else {
        return Err(AvatarError::InvalidArgument(format!(
            "scale {scale} is too large for a {width}x{height} image"
        )));
    };
    Ok(RgbaImage::from_fn(out_w, out_h, |x, y| *image.get_pixel(x / scale, y / scale)))
}

/// Encode an RGBA raster as PNG bytes.
///
/// # Errors
///
/// Returns [`AvatarError::Encode`] if the encoder rejects the image.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, AvatarError> {
    let (width, height) = image.dimensions();
    let mut output = Vec::new();
    PngEncoder::new(&mut output)
        .write_image(image.as_raw(), width, height, ExtendedColorType::Rgba8)
        .map_err(|e| AvatarError::Encode(e.to_string()))?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[allow(clippy::cast_possible_truncation)]
    fn checker(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8 * 20, y as u8 * 20, 5, ((x + y) % 2) as u8 * 255]))
    }

    #[test]
    fn default_scale_gives_192() {
        let small = checker(12, 12);
        let big = upscale_image(&small, DEFAULT_SCALE).unwrap();
        assert_eq!(big.dimensions(), (192, 192));
    }

    #[test]
    fn every_block_is_uniform() {
        let small = checker(12, 12);
        let big = upscale_image(&small, 16).unwrap();
        for (x, y, p) in big.enumerate_pixels() {
            assert_eq!(p, small.get_pixel(x / 16, y / 16), "output pixel {x},{y}");
        }
    }

    #[test]
    fn scale_one_is_identity() {
        let small = checker(5, 3);
        assert_eq!(upscale_image(&small, 1).unwrap(), small);
    }

    #[test]
    fn non_square_input() {
        let small = checker(3, 2);
        let big = upscale_image(&small, 4).unwrap();
        assert_eq!(big.dimensions(), (12, 8));
        assert_eq!(big.get_pixel(11, 7), small.get_pixel(2, 1));
    }

    #[test]
    fn zero_scale_rejected() {
        let err = upscale_image(&checker(2, 2), 0).unwrap_err();
        assert!(matches!(err, AvatarError::InvalidArgument(_)));
    }

    #[test]
    fn overflowing_scale_rejected() {
        let err = upscale_image(&checker(12, 12), u32::MAX).unwrap_err();
        assert!(matches!(err, AvatarError::InvalidArgument(_)));
    }

    #[test]
    fn png_output_decodes_back() {
        let small = checker(12, 12);
        let bytes = encode_png(&small).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, small);
    }
}
