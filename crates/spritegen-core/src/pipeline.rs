use std::collections::HashMap;

use image::{DynamicImage, RgbaImage};
use tracing::{instrument, warn};

use crate::compositing::blit_rgba;
use crate::config::SpriteConfig;
use crate::error::{Result, SpriteGenError};
use crate::model::{ImageDescriptor, Layout};
use crate::packer;

/// Decoded image ready to pack (key + pixels).
pub struct InputImage {
    pub key: String,
    pub image: DynamicImage,
}

/// Output of packing one group: the layout and the composited RGBA sheet.
pub struct SpriteSheet {
    pub layout: Layout,
    pub rgba: RgbaImage,
}

#[instrument(skip_all)]
/// Packs `inputs` into one sheet: computes the layout from the decoded
/// dimensions, then composites every image onto an RGBA canvas of the
/// layout's size.
///
/// Zero-sized inputs are dropped with a warning so one corrupt file cannot
/// sink its whole group; if nothing remains, `Empty` is returned.
pub fn pack_images(inputs: Vec<InputImage>, cfg: &SpriteConfig) -> Result<SpriteSheet> {
    cfg.validate()?;

    let mut keep: Vec<(ImageDescriptor, RgbaImage)> = Vec::with_capacity(inputs.len());
    for inp in inputs {
        let rgba = inp.image.to_rgba8();
        let (w, h) = rgba.dimensions();
        if w == 0 || h == 0 {
            warn!(key = %inp.key, width = w, height = h, "skipping zero-sized image");
            continue;
        }
        keep.push((ImageDescriptor::new(inp.key, w, h), rgba));
    }
    if keep.is_empty() {
        return Err(SpriteGenError::Empty);
    }

    let descriptors: Vec<ImageDescriptor> = keep.iter().map(|(d, _)| d.clone()).collect();
    let layout = packer::pack(&descriptors, cfg.padding)?;

    // Map for quick lookup during compositing
    let pixels: HashMap<&str, &RgbaImage> =
        keep.iter().map(|(d, img)| (d.key.as_str(), img)).collect();

    let mut canvas = RgbaImage::new(layout.width, layout.height);
    for placed in &layout.placements {
        if let Some(src) = pixels.get(placed.key.as_str()) {
            blit_rgba(src, &mut canvas, placed.left, placed.top);
        }
    }

    Ok(SpriteSheet {
        layout,
        rgba: canvas,
    })
}

/// Packs bare sizes without touching pixel data. Inputs are
/// (key, width, height); placement geometry is identical to what
/// [`pack_images`] produces for images of the same dimensions.
pub fn pack_layout<K: Into<String>>(sizes: Vec<(K, u32, u32)>, padding: u32) -> Result<Layout> {
    let descriptors: Vec<ImageDescriptor> = sizes
        .into_iter()
        .map(|(k, w, h)| ImageDescriptor::new(k, w, h))
        .collect();
    packer::pack(&descriptors, padding)
}
