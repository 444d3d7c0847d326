//! Fixed icon variant templates and Android density buckets.
//!
//! Every output icon is described by a [`VariantSpec`]: a base size, the
//! fraction of the canvas used for content, a clip shape, and whether it is
//! emitted once or once per [`Density`]. The exporter walks [`VARIANTS`]
//! and feeds each resolved [`VariantGeometry`] to one generic render routine.

use crate::exporter::AssetNames;

// ============================================================================
// Density
// ============================================================================

/// An Android resource density bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    /// All buckets, lowest density first.
    pub const ALL: [Density; 5] = [
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    /// Scale relative to mdpi.
    pub fn multiplier(self) -> f64 {
        match self {
            Density::Mdpi => 1.0,
            Density::Hdpi => 1.5,
            Density::Xhdpi => 2.0,
            Density::Xxhdpi => 3.0,
            Density::Xxxhdpi => 4.0,
        }
    }

    /// Resource qualifier, e.g. `"xhdpi"`.
    pub fn name(self) -> &'static str {
        match self {
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }
}

// ============================================================================
// ClipShape
// ============================================================================

/// Shape applied to a variant's content region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipShape {
    /// Content is not clipped.
    None,
    /// Rounded rectangle whose corner radius is `round(content / radius_divisor)`.
    RoundedRect { radius_divisor: f32 },
    /// Circle inscribed in the content square.
    Circle,
}

impl ClipShape {
    /// Corner radius for a rounded rectangle over a square of side `content_size`.
    ///
    /// Returns `None` for shapes without corners.
    pub fn corner_radius(&self, content_size: u32) -> Option<f32> {
        match *self {
            ClipShape::RoundedRect { radius_divisor } => {
                Some((content_size as f32 / radius_divisor).round())
            }
            ClipShape::None | ClipShape::Circle => None,
        }
    }
}

// ============================================================================
// VariantSpec
// ============================================================================

/// Which kind of icon a variant produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    /// The single 512px store listing icon.
    Store,
    /// Launcher icon under `res/mipmap-<density>/`.
    Launcher,
    /// Splash screen icon under `res/drawable-<density>/`.
    Splash,
}

/// A fixed template for deriving one type of icon from a base size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantSpec {
    pub kind: VariantKind,
    /// Side length in pixels at mdpi (or the only size, if not density scaled).
    pub base_size: u32,
    /// Fraction of the canvas covered by the content region.
    pub content_scale: f64,
    pub clip: ClipShape,
    /// Emitted once per [`Density`] when true, once in total otherwise.
    pub density_scaled: bool,
}

pub const STORE_ICON: VariantSpec = VariantSpec {
    kind: VariantKind::Store,
    base_size: 512,
    content_scale: 1.0,
    clip: ClipShape::None,
    density_scaled: false,
};

pub const LAUNCHER_ICON: VariantSpec = VariantSpec {
    kind: VariantKind::Launcher,
    base_size: 48,
    content_scale: 0.8,
    clip: ClipShape::RoundedRect {
        radius_divisor: 12.0,
    },
    density_scaled: true,
};

pub const SPLASH_ICON: VariantSpec = VariantSpec {
    kind: VariantKind::Splash,
    base_size: 240,
    content_scale: 2.0 / 3.0,
    clip: ClipShape::Circle,
    density_scaled: true,
};

/// Every variant the exporter produces, in output order.
pub const VARIANTS: [VariantSpec; 3] = [STORE_ICON, LAUNCHER_ICON, SPLASH_ICON];

/// File name of the store listing icon at the archive root.
pub const STORE_ICON_PATH: &str = "ic_launcher-playstore.png";

/// Pixel geometry of one variant at one density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantGeometry {
    /// Side of the whole canvas.
    pub pixel_size: u32,
    /// Side of the centered content region.
    pub content_size: u32,
    /// Offset of the content region from the canvas edge, on both axes.
    pub inset: f32,
}

impl VariantSpec {
    /// Resolves the canvas and content sizes for a density.
    ///
    /// `density` is ignored for variants that are not density scaled.
    pub fn geometry(&self, density: Option<Density>) -> VariantGeometry {
        let multiplier = match density {
            Some(d) if self.density_scaled => d.multiplier(),
            _ => 1.0,
        };
        let pixel_size = (self.base_size as f64 * multiplier).round() as u32;
        let content_size = (pixel_size as f64 * self.content_scale).round() as u32;
        VariantGeometry {
            pixel_size,
            content_size,
            inset: (pixel_size as f32 - content_size as f32) / 2.0,
        }
    }

    /// Densities this variant is emitted at; `[None]` for single-size variants.
    pub fn densities(&self) -> Vec<Option<Density>> {
        if self.density_scaled {
            Density::ALL.iter().copied().map(Some).collect()
        } else {
            vec![None]
        }
    }

    /// Slash-separated path of this variant inside the output tree.
    ///
    /// Density-scaled variants must be given a density, as yielded by
    /// [`densities`](Self::densities).
    pub fn path(&self, density: Option<Density>, names: &AssetNames) -> String {
        debug_assert!(
            !self.density_scaled || density.is_some(),
            "{:?} variant needs a density",
            self.kind
        );
        let bucket = density.unwrap_or(Density::Mdpi).name();
        match self.kind {
            VariantKind::Store => STORE_ICON_PATH.to_string(),
            VariantKind::Launcher => format!("res/mipmap-{}/{}.png", bucket, names.launcher()),
            VariantKind::Splash => format!("res/drawable-{}/{}.png", bucket, names.splash()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
