use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::info;
use walkdir::WalkDir;

use crate::config::SpriteConfig;
use crate::error::Result;

/// Extensions recognized as packable images (lowercase, without the dot).
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "tiff", "gif", "bmp"];

/// One directory's worth of images, discovered by [`collect_groups`].
///
/// Groups are independent: each gets its own sheet and stylesheet, written
/// into `dir`, and never shares a layout with siblings or ancestors.
#[derive(Debug, Clone)]
pub struct SpriteGroup {
    /// Directory the sheet and stylesheet will be written into.
    pub dir: PathBuf,
    /// Class-name prefix derived from the directory's path relative to the
    /// walk root.
    pub namespace: String,
    /// Qualifying image files, lexicographically sorted.
    pub images: Vec<PathBuf>,
}

/// Walks `root` and builds one group per directory holding at least one
/// qualifying image. Directories without images produce no group (logged,
/// not an error). Any walk error aborts the run; symlinks are followed, and
/// walkdir reports a symlink cycle as an error rather than recursing forever.
pub fn collect_groups(root: &Path, cfg: &SpriteConfig) -> Result<Vec<SpriteGroup>> {
    let mut by_dir: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_dir() {
            by_dir.entry(path.to_path_buf()).or_default();
        } else if entry.file_type().is_file() && is_image_file(path, cfg) {
            if let Some(parent) = path.parent() {
                by_dir
                    .entry(parent.to_path_buf())
                    .or_default()
                    .push(path.to_path_buf());
            }
        }
    }

    let mut groups = Vec::new();
    for (dir, images) in by_dir {
        if images.is_empty() {
            info!(dir = %dir.display(), "no images found for directory");
            continue;
        }
        let namespace = namespace_for(root, &dir);
        groups.push(SpriteGroup {
            dir,
            namespace,
            images,
        });
    }
    Ok(groups)
}

/// Derives the class-name prefix for `dir`: its path relative to `root` with
/// separators and spaces turned into dashes, plus a trailing dash when
/// non-empty. The root itself maps to an empty prefix.
pub fn namespace_for(root: &Path, dir: &Path) -> String {
    let rel = dir.strip_prefix(root).unwrap_or(dir);
    let mut ns: String = rel
        .to_string_lossy()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ' ' => '-',
            other => other,
        })
        .collect();
    if !ns.is_empty() {
        ns.push('-');
    }
    ns
}

/// A file qualifies as input when its extension is in [`IMAGE_EXTENSIONS`]
/// (case-insensitive) and its name is not one of the reserved output names,
/// so a prior run's sheet is never packed into the next one.
fn is_image_file(path: &Path, cfg: &SpriteConfig) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name == cfg.sprite_file || name == cfg.stylesheet_file {
        return false;
    }
    matches!(
        path.extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase()),
        Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str())
    )
}
