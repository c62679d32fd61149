//! Avatar compositing: paste the head layers onto a small canvas and grow
//! a one-pixel black outline around the silhouette.

use image::{Rgba, RgbaImage};

/// Width and height of the avatar canvas.
pub const CANVAS_SIZE: u32 = 12;

/// Where the 8x8 head lands on the canvas.
pub const HEAD_OFFSET: (u32, u32) = (2, 2);

/// Where the 10x10 top-head lands on the canvas.
pub const TOP_HEAD_OFFSET: (u32, u32) = (1, 1);

/// Color of synthesized outline pixels.
pub const OUTLINE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Build the outlined 12x12 avatar from the head and top-head crops.
///
/// The head is pasted first and the top-head second, so opaque top-head
/// pixels win where the two overlap.
#[must_use]
pub fn create_avatar(head: &RgbaImage, top_head: &RgbaImage) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, TRANSPARENT);
    paste_masked(&mut canvas, head, HEAD_OFFSET);
    paste_masked(&mut canvas, top_head, TOP_HEAD_OFFSET);
    draw_outline(&mut canvas);
    canvas
}

/// Paste `src` onto `dst` at `offset`, using `src`'s own alpha as the mask.
///
/// Every channel, alpha included, is blended as
/// `(dst * (255 - m) + src * m) / 255` with `m` the source alpha, so a
/// fully transparent source pixel leaves the destination untouched and a
/// fully opaque one replaces it. Pixels falling outside `dst` are clipped.
pub fn paste_masked(dst: &mut RgbaImage, src: &RgbaImage, offset: (u32, u32)) {
    let (dst_w, dst_h) = dst.dimensions();
    for (x, y, pixel) in src.enumerate_pixels() {
        let (dx, dy) = (x + offset.0, y + offset.1);
        if dx >= dst_w || dy >= dst_h {
            continue;
        }
        let mask = pixel[3];
        if mask == 0 {
            continue;
        }
        let target = dst.get_pixel_mut(dx, dy);
        for c in 0..4 {
            target[c] = blend(target[c], pixel[c], mask);
        }
    }
}

/// `(under * (255 - mask) + over * mask) / 255`, rounded to nearest.
#[allow(clippy::cast_possible_truncation)]
fn blend(under: u8, over: u8, mask: u8) -> u8 {
    let v = u32::from(under) * u32::from(255 - mask) + u32::from(over) * u32::from(mask) + 128;
    // v <= 255 * 255 + 128, so the shifted result fits in a byte.
    ((v + (v >> 8)) >> 8) as u8
}

/// Grow a one-pixel black outline around every visible, non-black pixel.
///
/// Scans row by row and writes into the same raster it reads. A pixel with
/// nonzero alpha that is not already pure opaque black turns each of its
/// transparent 4-neighbors into [`OUTLINE_COLOR`]. Opaque black pixels,
/// including outline pixels drawn earlier in the scan, never grow an
/// outline of their own.
///
/// Returns the number of pixels that were painted.
pub fn draw_outline(canvas: &mut RgbaImage) -> usize {
    let (width, height) = canvas.dimensions();
    let mut painted = 0;

    for y in 0..height {
        for x in 0..width {
            let pixel = *canvas.get_pixel(x, y);
            if pixel[3] == 0 || pixel == OUTLINE_COLOR {
                continue;
            }
            let neighbors = [
                x.checked_sub(1).map(|nx| (nx, y)),
                (x + 1 < width).then_some((x + 1, y)),
                y.checked_sub(1).map(|ny| (x, ny)),
                (y + 1 < height).then_some((x, y + 1)),
            ];
            for (nx, ny) in neighbors.into_iter().flatten() {
                let neighbor = canvas.get_pixel_mut(nx, ny);
                if neighbor[3] == 0 {
                    *neighbor = OUTLINE_COLOR;
                    painted += 1;
                }
            }
        }
    }

    painted
}
