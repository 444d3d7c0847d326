//! mipmap-renderer: Android icon asset generation
//!
//! This crate composites a foreground image over an optional background
//! image and color, and renders the result as a store icon, launcher icons
//! and splash icons at every Android density. The output is a path to PNG
//! mapping that mirrors an app's `res/` tree.
//!
//! # Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use mipmap_renderer::{export, AssetNames, BackgroundColor, Layer, LayerStack};
//!
//! let logo = RgbaImage::from_pixel(100, 200, Rgba([255, 255, 255, 255]));
//! let layers = LayerStack::new()
//!     .with_background_color("#3ddc84".parse::<BackgroundColor>().unwrap())
//!     .with_foreground(Layer::from_image(&logo).unwrap());
//!
//! let tree = export(&layers, &AssetNames::default()).unwrap();
//! assert!(tree.contains("res/mipmap-xxxhdpi/ic_launcher.png"));
//! assert!(tree.contains("ic_launcher-playstore.png"));
//! ```
//!
//! # Bundles
//!
//! [`to_zip`] packs an [`OutputTree`] into a single archive; [`write_dir`]
//! writes it straight into a project directory:
//!
//! ```no_run
//! use mipmap_renderer::{write_dir, IconGenerator, Layer};
//!
//! let mut generator = IconGenerator::new();
//! generator.set_foreground(Some(Layer::open("logo.png").unwrap()));
//! let tree = generator.export().unwrap();
//! write_dir(&tree, "app/src/main").unwrap();
//! ```

mod archive;
mod canvas;
mod compositor;
mod error;
mod exporter;
mod generator;
mod icon;
mod layer;
mod profile;
mod tree;
mod variant;

pub use archive::{DEFAULT_ARCHIVE_NAME, to_zip, write_dir};
pub use canvas::Canvas;
pub use compositor::{Placement, draw, fit_centered, render};
pub use error::{IconError, IconResult};
pub use exporter::{
    AssetNames, DEFAULT_LAUNCHER_NAME, DEFAULT_SPLASH_NAME, export, join_encodes, render_all,
    render_variant,
};
pub use generator::{Configurable, IconGenerator, PREVIEW_SIZE};
pub use icon::{EncodedIcon, RenderedIcon, encode_png};
pub use layer::{BackgroundColor, Layer, LayerStack};
pub use profile::ExportSettings;
pub use tree::OutputTree;
pub use variant::{
    ClipShape, Density, LAUNCHER_ICON, SPLASH_ICON, STORE_ICON, STORE_ICON_PATH, VARIANTS,
    VariantGeometry, VariantKind, VariantSpec,
};
