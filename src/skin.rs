//! Skin decoding and the fixed classic-layout regions used for the avatar.

use image::{imageops, RgbaImage};

use crate::error::AvatarError;

/// A rectangular window in skin pixel coordinates, right/bottom exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Human-readable name used in error messages.
    pub name: &'static str,
    /// Left edge.
    pub x0: u32,
    /// Top edge.
    pub y0: u32,
    /// Right edge (exclusive).
    pub x1: u32,
    /// Bottom edge (exclusive).
    pub y1: u32,
}

impl Region {
    /// Width of the window in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Height of the window in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

/// Front face of the head, 8x8.
pub const HEAD_REGION: Region = Region { name: "head", x0: 8, y0: 8, x1: 16, y1: 16 };

/// Top-of-head window, 10x10, straddling the hat layer.
pub const TOP_HEAD_REGION: Region = Region { name: "top-head", x0: 39, y0: 6, x1: 49, y1: 16 };

/// Decode raw skin bytes into an RGBA raster.
///
/// # Errors
///
/// Returns [`AvatarError::Decode`] if the bytes are not a supported image.
pub fn decode_skin(data: &[u8]) -> Result<RgbaImage, AvatarError> {
    Ok(image::load_from_memory(data)?.to_rgba8())
}

/// Crop a fixed window out of the skin.
///
/// # Errors
///
/// Returns [`AvatarError::Geometry`] if the skin does not cover the window.
pub fn crop_region(skin: &RgbaImage, region: Region) -> Result<RgbaImage, AvatarError> {
    let (width, height) = skin.dimensions();
    if region.x1 > width || region.y1 > height {
        return Err(AvatarError::Geometry {
            region: region.name,
            width,
            height,
            x0: region.x0,
            y0: region.y0,
            x1: region.x1,
            y1: region.y1,
        });
    }
    Ok(imageops::crop_imm(skin, region.x0, region.y0, region.width(), region.height()).to_image())
}

/// Extract the head (8x8) and top-head (10x10) rasters from a skin.
///
/// # Errors
///
/// Returns [`AvatarError::Geometry`] if the skin is smaller than either window.
pub fn extract_head(skin: &RgbaImage) -> Result<(RgbaImage, RgbaImage), AvatarError> {
    let head = crop_region(skin, HEAD_REGION)?;
    let top_head = crop_region(skin, TOP_HEAD_REGION)?;
    Ok((head, top_head))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// A skin where every pixel encodes its own coordinates.
    #[allow(clippy::cast_possible_truncation)]
    fn coordinate_skin(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 7, 255]))
    }

    #[test]
    fn region_sizes() {
        assert_eq!((HEAD_REGION.width(), HEAD_REGION.height()), (8, 8));
        assert_eq!((TOP_HEAD_REGION.width(), TOP_HEAD_REGION.height()), (10, 10));
    }

    #[test]
    fn extract_from_64x64() {
        let skin = coordinate_skin(64, 64);
        let (head, top_head) = extract_head(&skin).unwrap();
        assert_eq!(head.dimensions(), (8, 8));
        assert_eq!(top_head.dimensions(), (10, 10));
    }

    #[test]
    fn extract_from_legacy_64x32() {
        let skin = coordinate_skin(64, 32);
        let (head, top_head) = extract_head(&skin).unwrap();
        assert_eq!(head.dimensions(), (8, 8));
        assert_eq!(top_head.dimensions(), (10, 10));
    }

    #[test]
    fn crops_come_from_fixed_offsets() {
        let skin = coordinate_skin(64, 64);
        let (head, top_head) = extract_head(&skin).unwrap();
        assert_eq!(*head.get_pixel(0, 0), Rgba([8, 8, 7, 255]));
        assert_eq!(*head.get_pixel(7, 7), Rgba([15, 15, 7, 255]));
        assert_eq!(*top_head.get_pixel(0, 0), Rgba([39, 6, 7, 255]));
        assert_eq!(*top_head.get_pixel(9, 9), Rgba([48, 15, 7, 255]));
    }

    #[test]
    fn too_narrow_skin_fails_on_top_head() {
        let skin = coordinate_skin(32, 32);
        let err = extract_head(&skin).unwrap_err();
        assert!(matches!(err, AvatarError::Geometry { region: "top-head", width: 32, .. }));
    }

    #[test]
    fn too_short_skin_fails_on_head() {
        let skin = coordinate_skin(64, 12);
        let err = extract_head(&skin).unwrap_err();
        assert!(matches!(err, AvatarError::Geometry { region: "head", height: 12, .. }));
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = decode_skin(b"definitely not a png").unwrap_err();
        assert!(matches!(err, AvatarError::Decode(_)));
    }

    #[test]
    fn decode_converts_to_rgba() {
        let gray = image::GrayImage::from_pixel(64, 64, image::Luma([200]));
        let mut bytes = std::io::Cursor::new(Vec::new());
        gray.write_to(&mut bytes, image::ImageFormat::Png).unwrap();

        let skin = decode_skin(bytes.get_ref()).unwrap();
        assert_eq!(skin.dimensions(), (64, 64));
        assert_eq!(*skin.get_pixel(10, 10), Rgba([200, 200, 200, 255]));
    }
}
