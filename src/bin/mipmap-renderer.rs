use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing::Level;

use mipmap_renderer::{
    Configurable, DEFAULT_ARCHIVE_NAME, ExportSettings, IconGenerator, Layer,
    PREVIEW_SIZE, encode_png, to_zip, write_dir,
};

/// Generate Android launcher, splash and store icons from a foreground image.
#[derive(Parser, Debug)]
#[command(name = "mipmap-renderer", version)]
struct Cli {
    /// Foreground image, drawn on top.
    #[arg(long)]
    foreground: Option<PathBuf>,

    /// Background image, drawn beneath the foreground.
    #[arg(long)]
    background: Option<PathBuf>,

    /// Solid background color (`#rrggbb` or a CSS color name).
    #[arg(long)]
    background_color: Option<String>,

    /// File name stem for launcher icons (default `ic_launcher`).
    #[arg(long)]
    launcher_name: Option<String>,

    /// File name stem for splash icons (default `splash_icon`).
    #[arg(long)]
    splash_name: Option<String>,

    /// JSON export settings; command-line flags take precedence.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Output ZIP archive.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write the resource tree into this directory instead of an archive.
    #[arg(long, conflicts_with = "out")]
    out_dir: Option<PathBuf>,

    /// Also write an unclipped preview PNG.
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Log every rendered variant.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let mut settings = match &cli.settings {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read settings {}", path.display()))?;
            ExportSettings::from_json(&json)
                .with_context(|| format!("parse settings {}", path.display()))?
        }
        None => ExportSettings::default(),
    };
    if let Some(name) = &cli.launcher_name {
        settings.launcher_name = Some(name.clone());
    }
    if let Some(name) = &cli.splash_name {
        settings.splash_name = Some(name.clone());
    }
    if let Some(color) = &cli.background_color {
        settings.background_color = Some(color.clone());
    }

    let mut generator = IconGenerator::new();
    generator.apply_settings(&settings)?;

    if let Some(path) = &cli.foreground {
        let layer =
            Layer::open(path).with_context(|| format!("load foreground {}", path.display()))?;
        generator.set_foreground(Some(layer));
    }
    if let Some(path) = &cli.background {
        let layer =
            Layer::open(path).with_context(|| format!("load background {}", path.display()))?;
        generator.set_background_image(Some(layer));
    }

    if let Some(path) = &cli.preview {
        let png = encode_png(&generator.preview(PREVIEW_SIZE)?)?;
        std::fs::write(path, png).with_context(|| format!("write {}", path.display()))?;
    }

    if generator.layers().is_empty() {
        tracing::warn!("no foreground, background or color set; icons will be transparent");
    }
    let tree = generator.export()?;

    match (&cli.out_dir, &cli.out) {
        (Some(dir), _) => {
            write_dir(&tree, dir)?;
            tracing::info!(dir = %dir.display(), "wrote resource tree");
        }
        (None, out) => {
            let out = out
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ARCHIVE_NAME));
            std::fs::write(&out, to_zip(&tree)?)
                .with_context(|| format!("write {}", out.display()))?;
            tracing::info!(archive = %out.display(), "wrote archive");
        }
    }

    Ok(())
}
