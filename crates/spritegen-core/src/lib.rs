//! Core library for generating CSS sprites.
//!
//! - Packing: deterministic shelf/row layout over image dimensions (`packer`)
//! - Grouping: one sheet per directory that holds images (`group`)
//! - Pipeline: `pack_images` composites one group into a single RGBA sheet
//! - Stylesheet: renders the matching `background-position` rules
//!
//! Quick example:
//! ```ignore
//! use image::ImageReader;
//! use spritegen_core::{pack_images, InputImage, SpriteConfig};
//! # fn main() -> anyhow::Result<()> {
//! let img = ImageReader::open("icons/save.png")?.decode()?;
//! let inputs = vec![InputImage { key: "save.png".into(), image: img }];
//! let sheet = pack_images(inputs, &SpriteConfig::default())?;
//! println!("sheet: {}x{}", sheet.layout.width, sheet.layout.height);
//! # Ok(()) }
//! ```

pub mod compositing;
pub mod config;
pub mod error;
pub mod group;
pub mod model;
pub mod packer;
pub mod pipeline;
pub mod stylesheet;

pub use config::*;
pub use error::*;
pub use group::*;
pub use model::*;
pub use pipeline::*;
pub use stylesheet::*;

/// Convenience prelude for common types and functions.
/// Importing `spritegen_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{SpriteConfig, SpriteConfigBuilder};
    pub use crate::group::{SpriteGroup, collect_groups};
    pub use crate::model::{ImageDescriptor, Layout, LayoutStats, PlacedImage};
    pub use crate::stylesheet::render_stylesheet;
    pub use crate::{InputImage, SpriteSheet, pack_images, pack_layout};
}
