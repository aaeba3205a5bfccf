/// Built-in placeholder poster
///
/// When a card's merged candidate list comes out empty, the resolver falls
/// back to this single built-in source. Its pixels are synthesized in
/// memory, so "loading" it never touches the filesystem.

use iced::widget::image::Handle;

/// Sentinel source identifier for the built-in placeholder.
/// The resolver never retries this source and never advances past it.
pub const PLACEHOLDER_SOURCE: &str = "builtin:poster-placeholder";

/// Placeholder dimensions match the poster aspect the cards render at
const PLACEHOLDER_WIDTH: u32 = 400;
const PLACEHOLDER_HEIGHT: u32 = 600;

/// Synthesize the placeholder pixels: a dark gray panel with a lighter
/// inner frame, RGBA8 row-major.
pub fn placeholder_rgba() -> (u32, u32, Vec<u8>) {
    let frame = 12;
    let buffer = image::RgbaImage::from_fn(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, |x, y| {
        let on_frame = x < frame
            || y < frame
            || x >= PLACEHOLDER_WIDTH - frame
            || y >= PLACEHOLDER_HEIGHT - frame;
        if on_frame {
            image::Rgba([0x4a, 0x55, 0x68, 0xff])
        } else {
            image::Rgba([0x2d, 0x37, 0x48, 0xff])
        }
    });

    (PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, buffer.into_raw())
}

/// The placeholder as a ready-to-render image handle
pub fn placeholder_handle() -> Handle {
    let (width, height, pixels) = placeholder_rgba();
    Handle::from_rgba(width, height, pixels)
}
