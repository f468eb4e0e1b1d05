use serde::{Deserialize, Serialize};

/// Source image dimensions plus the key identifying it within its group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// File name of the source image within its directory group.
    pub key: String,
    pub width: u32,
    pub height: u32,
}

impl ImageDescriptor {
    pub fn new(key: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }
}

/// An image with its assigned position inside the sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedImage {
    pub key: String,
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl PlacedImage {
    /// Exclusive right edge coordinate (`left + width`).
    pub fn right(&self) -> u32 {
        self.left + self.width
    }
    /// Exclusive bottom edge coordinate (`top + height`).
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }
    /// Returns true if the rectangles of `self` and `other` intersect.
    pub fn overlaps(&self, other: &PlacedImage) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

/// Computed sheet geometry: overall size plus one placement per input.
///
/// `placements` is in packing order; stylesheet rendering iterates it as-is,
/// so output is byte-identical across runs for the same input set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub placements: Vec<PlacedImage>,
}

/// Statistics about how tightly a layout packs its images.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Number of placed images.
    pub num_images: usize,
    /// Sheet area (width * height).
    pub sheet_area: u64,
    /// Area covered by placed images.
    pub used_area: u64,
    /// used_area / sheet_area (0.0 to 1.0). Higher is tighter.
    pub occupancy: f64,
}

impl Layout {
    /// Computes packing statistics for this layout.
    pub fn stats(&self) -> LayoutStats {
        let sheet_area = (self.width as u64) * (self.height as u64);
        let used_area: u64 = self
            .placements
            .iter()
            .map(|p| (p.width as u64) * (p.height as u64))
            .sum();
        let occupancy = if sheet_area > 0 {
            used_area as f64 / sheet_area as f64
        } else {
            0.0
        };
        LayoutStats {
            num_images: self.placements.len(),
            sheet_area,
            used_area,
            occupancy,
        }
    }
}

impl LayoutStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Images: {}, Sheet: {} px², Used: {} px², Occupancy: {:.2}%",
            self.num_images,
            self.sheet_area,
            self.used_area,
            self.occupancy * 100.0,
        )
    }

    /// Returns wasted space in pixels.
    pub fn wasted_area(&self) -> u64 {
        self.sheet_area.saturating_sub(self.used_area)
    }
}
