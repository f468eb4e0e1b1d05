use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};
use image::{DynamicImage, ImageReader};
use spritegen_core::{InputImage, SpriteConfig, collect_groups, pack_images, render_stylesheet};
use tracing::{debug, error, info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "spritegen",
    about = "Pack each directory's images into a CSS sprite",
    version,
    author
)]
struct Cli {
    // Input/Output
    /// Root directory to process
    #[arg(long, help_heading = "Input/Output")]
    dir: PathBuf,
    /// Pixels between images and rows
    #[arg(long, default_value_t = 2, help_heading = "Layout")]
    padding: u32,
    /// Log each image placement
    #[arg(long, default_value_t = false, action = ArgAction::Set, help_heading = "Logging/UX")]
    verbose: bool,
    /// Compute layouts and stats but do not write files
    #[arg(long, default_value_t = false, help_heading = "Export")]
    dry_run: bool,
    /// Export run-level packing stats (JSON) to this file
    #[arg(long, help_heading = "Export")]
    export_stats: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let cfg = SpriteConfig::builder().padding(cli.padding).build();
    let root = cli
        .dir
        .canonicalize()
        .with_context(|| format!("resolve root directory {}", cli.dir.display()))?;

    let groups = collect_groups(&root, &cfg)?;
    if groups.is_empty() {
        info!(root = %root.display(), "no image directories found");
    }

    let mut total_groups = 0usize;
    let mut total_images = 0usize;
    let mut sheet_area = 0u64;
    let mut used_area = 0u64;

    for group in &groups {
        let inputs = load_group_images(&group.images);
        if inputs.is_empty() {
            warn!(dir = %group.dir.display(), "no loadable images, skipping group");
            continue;
        }
        info!(
            dir = %group.dir.display(),
            images = inputs.len(),
            "creating sprites for directory"
        );

        let sheet = match pack_images(inputs, &cfg) {
            Ok(sheet) => sheet,
            Err(e) => {
                warn!(dir = %group.dir.display(), error = %e, "skipping group");
                continue;
            }
        };
        for placed in &sheet.layout.placements {
            debug!(
                key = %placed.key,
                left = placed.left,
                top = placed.top,
                width = placed.width,
                height = placed.height,
                "placed image"
            );
        }

        let stats = sheet.layout.stats();
        total_groups += 1;
        total_images += stats.num_images;
        sheet_area += stats.sheet_area;
        used_area += stats.used_area;

        if cli.dry_run {
            info!(
                dir = %group.dir.display(),
                stats = %stats.summary(),
                "dry run, nothing written"
            );
            continue;
        }

        let png_path = group.dir.join(&cfg.sprite_file);
        sheet
            .rgba
            .save(&png_path)
            .with_context(|| format!("write {}", png_path.display()))?;

        let css = render_stylesheet(&sheet.layout, &group.namespace, &cfg.sprite_file);
        let css_path = group.dir.join(&cfg.stylesheet_file);
        fs::write(&css_path, css).with_context(|| format!("write {}", css_path.display()))?;

        info!(
            sprite = %png_path.display(),
            stylesheet = %css_path.display(),
            stats = %stats.summary(),
            "wrote sprite"
        );
    }

    if let Some(stats_path) = &cli.export_stats {
        let occupancy = if sheet_area > 0 {
            used_area as f64 / sheet_area as f64
        } else {
            0.0
        };
        let value = serde_json::json!({
            "groups": total_groups,
            "images": total_images,
            "sheet_area": sheet_area,
            "used_area": used_area,
            "occupancy": occupancy,
        });
        if cli.dry_run {
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            fs::write(stats_path, serde_json::to_string_pretty(&value)?)
                .with_context(|| format!("write {}", stats_path.display()))?;
            info!(?stats_path, "stats exported");
        }
    }
    Ok(())
}

fn load_group_images(paths: &[PathBuf]) -> Vec<InputImage> {
    let mut list = Vec::with_capacity(paths.len());
    for p in paths {
        match load_image(p) {
            Ok(img) => {
                let key = p
                    .file_name()
                    .and_then(|s| s.to_str())
                    .unwrap_or_default()
                    .to_string();
                list.push(InputImage { key, image: img });
            }
            Err(e) => {
                error!(path = %p.display(), error = %e, "skip image");
            }
        }
    }
    list
}

fn load_image(p: &Path) -> anyhow::Result<DynamicImage> {
    let img = ImageReader::open(p)?.with_guessed_format()?.decode()?;
    Ok(img)
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
