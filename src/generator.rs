//! Session state for interactive icon generation.

use image::RgbaImage;

use crate::compositor;
use crate::error::IconResult;
use crate::exporter::{self, AssetNames};
use crate::layer::{BackgroundColor, Layer, LayerStack};
use crate::profile::ExportSettings;
use crate::tree::OutputTree;

/// Side length of the on-screen preview.
pub const PREVIEW_SIZE: u32 = 192;

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be configured from [`ExportSettings`].
pub trait Configurable {
    /// Applies the settings. Invalid names or colors leave the current
    /// state untouched.
    fn apply_settings(&mut self, settings: &ExportSettings) -> IconResult<()>;

    /// Exports the current settings.
    fn export_settings(&self) -> ExportSettings;
}

// ============================================================================
// IconGenerator
// ============================================================================

/// Holds the user's current inputs between exports.
///
/// Layers and names stay set until replaced or cleared. Each call to
/// [`export`](Self::export) or [`preview`](Self::preview) reads that state
/// through a shared borrow, so it cannot change while a render runs.
///
/// # Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use mipmap_renderer::{BackgroundColor, IconGenerator, Layer};
///
/// let mut generator = IconGenerator::new();
/// let logo = RgbaImage::from_pixel(64, 32, Rgba([255, 255, 255, 255]));
/// generator.set_foreground(Some(Layer::from_image(&logo).unwrap()));
/// generator.set_background_color(Some(BackgroundColor::new(0, 120, 215)));
///
/// let tree = generator.export().unwrap();
/// assert_eq!(tree.len(), 11);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IconGenerator {
    layers: LayerStack,
    launcher_name: Option<String>,
    splash_name: Option<String>,
}

impl IconGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    pub fn set_foreground(&mut self, layer: Option<Layer>) {
        self.layers.foreground = layer;
    }

    pub fn set_background_image(&mut self, layer: Option<Layer>) {
        self.layers.background_image = layer;
    }

    pub fn set_background_color(&mut self, color: Option<BackgroundColor>) {
        self.layers.background_color = color;
    }

    /// Overrides the launcher file name stem. `None` restores the default.
    pub fn set_launcher_name(&mut self, name: Option<String>) {
        self.launcher_name = name;
    }

    /// Overrides the splash file name stem. `None` restores the default.
    pub fn set_splash_name(&mut self, name: Option<String>) {
        self.splash_name = name;
    }

    /// Clears every layer and name override.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Resolved names for the next export.
    pub fn asset_names(&self) -> IconResult<AssetNames> {
        AssetNames::from_overrides(self.launcher_name.as_deref(), self.splash_name.as_deref())
    }

    /// Renders the layers unclipped at `size`, as shown in a live preview.
    pub fn preview(&self, size: u32) -> IconResult<RgbaImage> {
        compositor::render(size, &self.layers)
    }

    /// Renders every variant into a fresh output tree.
    pub fn export(&self) -> IconResult<OutputTree> {
        let names = self.asset_names()?;
        exporter::export(&self.layers, &names)
    }
}

impl Configurable for IconGenerator {
    fn apply_settings(&mut self, settings: &ExportSettings) -> IconResult<()> {
        settings.asset_names()?;
        let color = settings.parsed_background_color()?;

        self.launcher_name = settings.launcher_name.clone();
        self.splash_name = settings.splash_name.clone();
        self.layers.background_color = color;
        Ok(())
    }

    fn export_settings(&self) -> ExportSettings {
        ExportSettings {
            launcher_name: self.launcher_name.clone(),
            splash_name: self.splash_name.clone(),
            background_color: self.layers.background_color.map(|c| c.to_hex()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IconError;
    use image::Rgba;

    fn square(rgba: [u8; 4]) -> Layer {
        Layer::from_image(&RgbaImage::from_pixel(10, 10, Rgba(rgba))).unwrap()
    }

    #[test]
    fn new_generator_is_empty() {
        let generator = IconGenerator::new();
        assert!(generator.layers().is_empty());
        assert_eq!(generator.asset_names().unwrap(), AssetNames::default());
    }

    #[test]
    fn preview_renders_at_requested_size() {
        let mut generator = IconGenerator::new();
        generator.set_foreground(Some(square([0, 255, 0, 255])));
        let img = generator.preview(PREVIEW_SIZE).unwrap();

        assert_eq!(img.dimensions(), (PREVIEW_SIZE, PREVIEW_SIZE));
        // a square source fills the unclipped preview edge to edge
        assert_eq!(img.get_pixel(0, 0)[3], 255);
        assert!(img.get_pixel(96, 96)[1] >= 250);
    }

    #[test]
    fn layers_can_be_replaced_and_cleared() {
        let mut generator = IconGenerator::new();
        generator.set_background_image(Some(square([1, 1, 1, 255])));
        generator.set_background_image(Some(square([2, 2, 2, 255])));
        assert!(generator.layers().background_image.is_some());

        generator.set_background_image(None);
        assert!(generator.layers().is_empty());
    }

    #[test]
    fn export_uses_name_overrides() {
        let mut generator = IconGenerator::new();
        generator.set_launcher_name(Some("app".into()));
        let tree = generator.export().unwrap();
        assert!(tree.contains("res/mipmap-mdpi/app.png"));
        assert!(tree.contains("res/drawable-mdpi/splash_icon.png"));

        generator.set_launcher_name(None);
        let tree = generator.export().unwrap();
        assert!(tree.contains("res/mipmap-mdpi/ic_launcher.png"));
    }

    #[test]
    fn empty_name_override_is_an_error() {
        let mut generator = IconGenerator::new();
        generator.set_splash_name(Some(String::new()));
        assert!(matches!(
            generator.export(),
            Err(IconError::InvalidName { field: "splash", .. })
        ));
    }

    #[test]
    fn settings_roundtrip_through_generator() {
        let settings = ExportSettings::new()
            .with_launcher_name("launcher")
            .with_background_color("#ff0000");
        let mut generator = IconGenerator::new();
        generator.apply_settings(&settings).unwrap();

        assert_eq!(
            generator.layers().background_color,
            Some(BackgroundColor::new(255, 0, 0))
        );
        assert_eq!(generator.export_settings(), settings);
    }

    #[test]
    fn invalid_settings_leave_state_untouched() {
        let mut generator = IconGenerator::new();
        generator.set_launcher_name(Some("keep".into()));

        let bad = ExportSettings::new()
            .with_launcher_name("other")
            .with_background_color("nope");
        assert!(generator.apply_settings(&bad).is_err());
        assert_eq!(generator.asset_names().unwrap().launcher(), "keep");
    }

    #[test]
    fn reset_clears_everything() {
        let mut generator = IconGenerator::new();
        generator.set_foreground(Some(square([0, 0, 0, 255])));
        generator.set_splash_name(Some("x".into()));
        generator.reset();
        assert!(generator.layers().is_empty());
        assert_eq!(generator.export_settings(), ExportSettings::default());
    }
}
