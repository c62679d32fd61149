//! The avatar pipeline: download, crop, composite, outline, upscale, encode.

use image::RgbaImage;

use crate::compose::create_avatar;
use crate::error::AvatarError;
use crate::ports::SkinSource;
use crate::skin::{decode_skin, extract_head};
use crate::upscale::{encode_png, upscale_image};

/// Fetch a player's skin and decode it to RGBA.
///
/// # Errors
///
/// Returns the source's error on a failed download, or
/// [`AvatarError::Decode`] if the body is not an image.
pub async fn download_skin(source: &dyn SkinSource, uuid: &str) -> Result<RgbaImage, AvatarError> {
    let fetched = source.fetch(uuid).await?;
    decode_skin(&fetched.data)
}

/// Turn a decoded skin into the upscaled avatar raster.
///
/// # Errors
///
/// Returns [`AvatarError::Geometry`] for undersized skins and
/// [`AvatarError::InvalidArgument`] for a zero scale.
pub fn skin_to_avatar(skin: &RgbaImage, scale: u32) -> Result<RgbaImage, AvatarError> {
    let (head, top_head) = extract_head(skin)?;
    let avatar = create_avatar(&head, &top_head);
    upscale_image(&avatar, scale)
}

/// Run the whole pipeline for one player and return PNG bytes.
///
/// # Errors
///
/// Any stage's error is returned unchanged.
pub async fn render_avatar(
    source: &dyn SkinSource,
    uuid: &str,
    scale: u32,
) -> Result<Vec<u8>, AvatarError> {
    let skin = download_skin(source, uuid).await?;
    let avatar = skin_to_avatar(&skin, scale)?;
    encode_png(&avatar)
}
