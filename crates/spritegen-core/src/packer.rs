use tracing::trace;

use crate::error::{Result, SpriteGenError};
use crate::model::{ImageDescriptor, Layout, PlacedImage};

/// Row cursor for shelf placement. Tracks the fill position within the
/// current row and the height of its tallest image; wrapping starts the next
/// row directly below the tallest one plus padding.
struct ShelfCursor {
    target_width: u32,
    padding: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
}

impl ShelfCursor {
    fn new(target_width: u32, padding: u32) -> Self {
        Self {
            target_width,
            padding,
            cursor_x: 0,
            cursor_y: 0,
            row_height: 0,
        }
    }

    /// Places one image and returns its (left, top). A row's first image is
    /// always accepted; the wrap check only applies once the row holds
    /// something, so the widest input opens a row rather than forcing an
    /// empty one above it.
    fn place(&mut self, width: u32, height: u32) -> (u32, u32) {
        if self.cursor_x > 0 && self.cursor_x + self.padding + width > self.target_width {
            self.cursor_y += self.row_height + self.padding;
            self.cursor_x = 0;
            self.row_height = 0;
        }
        let left = self.cursor_x + self.padding;
        let top = self.cursor_y;
        self.cursor_x += self.padding + width;
        self.row_height = self.row_height.max(height);
        (left, top)
    }

    fn sheet_height(&self) -> u32 {
        self.cursor_y + self.row_height
    }
}

/// Packs `descriptors` into a single sheet and returns the resulting layout.
///
/// The sheet width is the width of the widest input; rows fill left to right
/// with `padding` pixels between images and between rows, narrowest images
/// first (stable on input order for equal sizes). Every row indents by
/// `padding` before its first image, so the widest image's right edge sits
/// `padding` pixels past the sheet width and is clipped at render time.
pub fn pack(descriptors: &[ImageDescriptor], padding: u32) -> Result<Layout> {
    if descriptors.is_empty() {
        return Err(SpriteGenError::Empty);
    }
    for d in descriptors {
        if d.width == 0 || d.height == 0 {
            return Err(SpriteGenError::InvalidDescriptor {
                key: d.key.clone(),
                width: d.width,
                height: d.height,
            });
        }
    }

    let mut sorted: Vec<&ImageDescriptor> = descriptors.iter().collect();
    sorted.sort_by(|a, b| a.width.cmp(&b.width).then(a.height.cmp(&b.height)));

    // sorted ascending by width, so the widest is last
    let target_width = sorted.last().map(|d| d.width).unwrap_or(0);

    let mut cursor = ShelfCursor::new(target_width, padding);
    let mut placements: Vec<PlacedImage> = Vec::with_capacity(sorted.len());
    for d in sorted {
        let (left, top) = cursor.place(d.width, d.height);
        trace!(key = %d.key, left, top, width = d.width, height = d.height, "placed");
        placements.push(PlacedImage {
            key: d.key.clone(),
            left,
            top,
            width: d.width,
            height: d.height,
        });
    }

    Ok(Layout {
        width: target_width,
        height: cursor.sheet_height(),
        placements,
    })
}
