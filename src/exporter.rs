//! Variant export: every icon variant at every density, as one output tree.
//!
//! ```text
//! LayerStack ──► render_variant ×11 ──► RenderedIcon ──► encode (joined) ──► OutputTree
//! ```
//!
//! Each render allocates its own canvas. Encoding runs only after every
//! variant has rendered, and the first failure aborts the export, so a
//! caller never receives a partial tree.

use tracing::{debug, info};

use crate::canvas::Canvas;
use crate::compositor;
use crate::error::{IconError, IconResult};
use crate::icon::{EncodedIcon, RenderedIcon};
use crate::layer::LayerStack;
use crate::tree::OutputTree;
use crate::variant::{Density, VARIANTS, VariantSpec};

pub const DEFAULT_LAUNCHER_NAME: &str = "ic_launcher";
pub const DEFAULT_SPLASH_NAME: &str = "splash_icon";

// ============================================================================
// AssetNames
// ============================================================================

/// File name stems for the launcher and splash icons.
///
/// Stems are used verbatim with `.png` appended, so they must be non-empty
/// and may not contain a path separator or an extension of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetNames {
    launcher: String,
    splash: String,
}

impl Default for AssetNames {
    fn default() -> Self {
        Self {
            launcher: DEFAULT_LAUNCHER_NAME.to_string(),
            splash: DEFAULT_SPLASH_NAME.to_string(),
        }
    }
}

impl AssetNames {
    pub fn new(launcher: impl Into<String>, splash: impl Into<String>) -> IconResult<Self> {
        let names = Self {
            launcher: launcher.into(),
            splash: splash.into(),
        };
        names.validate()?;
        Ok(names)
    }

    /// Builds names from optional overrides, falling back to the defaults.
    pub fn from_overrides(launcher: Option<&str>, splash: Option<&str>) -> IconResult<Self> {
        Self::new(
            launcher.unwrap_or(DEFAULT_LAUNCHER_NAME),
            splash.unwrap_or(DEFAULT_SPLASH_NAME),
        )
    }

    pub fn launcher(&self) -> &str {
        &self.launcher
    }

    pub fn splash(&self) -> &str {
        &self.splash
    }

    pub fn validate(&self) -> IconResult<()> {
        validate_stem("launcher", &self.launcher)?;
        validate_stem("splash", &self.splash)
    }
}

fn validate_stem(field: &'static str, name: &str) -> IconResult<()> {
    let reason = if name.trim().is_empty() {
        "must not be empty"
    } else if name.contains(['/', '\\']) {
        "must not contain a path separator"
    } else if name.contains('.') {
        "must not include an extension"
    } else {
        return Ok(());
    };
    Err(IconError::InvalidName {
        field,
        name: name.to_string(),
        reason,
    })
}

// ============================================================================
// Export
// ============================================================================

/// Renders one variant at one density.
///
/// The canvas is translated by the variant's inset and clipped to its
/// content square before the layers are composited at content size.
pub fn render_variant(
    spec: &VariantSpec,
    density: Option<Density>,
    layers: &LayerStack,
    names: &AssetNames,
) -> IconResult<RenderedIcon> {
    let path = spec.path(density, names);
    let geometry = spec.geometry(density);
    let content = geometry.content_size as f32;

    let mut canvas = Canvas::new(geometry.pixel_size)
        .map_err(|e| IconError::render(path.as_str(), e.to_string()))?;
    canvas.translate(geometry.inset, geometry.inset);
    canvas
        .clip(spec.clip, content)
        .map_err(|e| IconError::render(path.as_str(), e.to_string()))?;
    compositor::draw(&mut canvas, content, layers);

    debug!(
        path = %path,
        pixel_size = geometry.pixel_size,
        content_size = geometry.content_size,
        "rendered variant"
    );
    Ok(RenderedIcon::new(path, canvas.into_image(), geometry))
}

/// Renders every variant, without encoding.
pub fn render_all(layers: &LayerStack, names: &AssetNames) -> IconResult<Vec<RenderedIcon>> {
    names.validate()?;
    VARIANTS
        .iter()
        .flat_map(|spec| spec.densities().into_iter().map(move |d| (spec, d)))
        .map(|(spec, density)| render_variant(spec, density, layers, names))
        .collect()
}

/// Encodes every rendered icon. The first failure aborts the batch.
pub fn join_encodes(icons: Vec<RenderedIcon>) -> IconResult<Vec<EncodedIcon>> {
    icons.into_iter().map(RenderedIcon::encode).collect()
}

/// Produces the complete output tree for `layers`.
///
/// Names are validated before anything is rendered. Missing layers are not
/// an error: they render as transparent (or color-only) icons.
#[tracing::instrument(skip(layers), fields(empty = layers.is_empty()))]
pub fn export(layers: &LayerStack, names: &AssetNames) -> IconResult<OutputTree> {
    let rendered = render_all(layers, names)?;
    let encoded = join_encodes(rendered)?;
    let tree = OutputTree::try_from(encoded)?;
    info!(entries = tree.len(), "export complete");
    Ok(tree)
}

// ============================================================================
// Tests
// ============================================================================
