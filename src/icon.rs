// SPDX-License-Identifier: MPL-2.0
//! Branding asset access and window icon rasterization.
//!
//! The logo ships as an embedded SVG. The window icon is rasterized from it
//! at runtime; both the icon and the in-app logo degrade gracefully when the
//! asset is missing or unrenderable (the home screen falls back to a plain
//! glyph, the window keeps the platform default icon).

use iced::window::{icon, Icon};
use resvg::usvg;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/branding/"]
struct BrandingAsset;

const LOGO_FILE: &str = "iced_lingo.svg";

/// Raw bytes of the embedded SVG logo, if present.
pub fn logo_svg() -> Option<Vec<u8>> {
    BrandingAsset::get(LOGO_FILE).map(|file| file.data.into_owned())
}

/// Rasterize the embedded SVG logo to a 128x128 RGBA window icon.
/// Returns `None` if the asset is missing or parsing/rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let svg_bytes = logo_svg()?;

    let tree = usvg::Tree::from_data(&svg_bytes, &usvg::Options::default()).ok()?;

    let target = 128u32;
    let orig_size = tree.size();
    let scale_x = target as f32 / orig_size.width();
    let scale_y = target as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(target, target)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let data = pixmap.data();
    icon::from_rgba(data.to_vec(), target, target).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_logo_is_present() {
        assert!(logo_svg().is_some());
    }

    #[test]
    fn window_icon_rasterizes_from_embedded_svg() {
        assert!(load_window_icon().is_some());
    }
}
