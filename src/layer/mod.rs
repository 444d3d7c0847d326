//! Source layers for icon composition.
//!
//! A [`LayerStack`] holds the three independent, optional inputs the
//! compositor draws from, bottom to top:
//!
//! ```text
//! ┌──────────────────┐
//! │    Foreground    │ ◄── Layer, drawn last
//! ├──────────────────┤
//! │ Background image │ ◄── Layer
//! ├──────────────────┤
//! │ Background color │ ◄── BackgroundColor, solid fill
//! └──────────────────┘
//! ```
//!
//! Layers are decoded once and are read-only afterwards. Every render reads
//! the stack through a shared reference.

pub mod color;

pub use color::BackgroundColor;

use std::fmt;
use std::path::Path;

use image::RgbaImage;
use resvg::tiny_skia::{ColorU8, Pixmap};

use crate::error::{IconError, IconResult};

// ============================================================================
// Layer
// ============================================================================

/// A decoded raster image used as foreground or background content.
///
/// The pixels are stored premultiplied, ready to be drawn onto a
/// [`Canvas`](crate::Canvas) at any scale.
#[derive(Clone)]
pub struct Layer {
    pixmap: Pixmap,
}

impl Layer {
    /// Wraps a decoded RGBA image.
    ///
    /// Fails with [`IconError::InvalidLayer`] if either dimension is zero and
    /// with [`IconError::LayerTooLarge`] if the image cannot be held as a
    /// single raster.
    pub fn from_image(image: &RgbaImage) -> IconResult<Self> {
        let (width, height) = image.dimensions();
        let mut pixmap = allocate(width, height)?;

        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
            let [r, g, b, a] = src.0;
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }

        Ok(Self { pixmap })
    }

    /// Decodes an encoded image (PNG, JPEG, WebP, ...) from memory.
    pub fn decode(bytes: &[u8]) -> IconResult<Self> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        Self::from_image(&image)
    }

    /// Reads and decodes an image file.
    pub fn open(path: impl AsRef<Path>) -> IconResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| IconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::decode(&bytes)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub(crate) fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

fn allocate(width: u32, height: u32) -> IconResult<Pixmap> {
    if width == 0 || height == 0 {
        return Err(IconError::InvalidLayer { width, height });
    }
    Pixmap::new(width, height).ok_or(IconError::LayerTooLarge { width, height })
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

// ============================================================================
// LayerStack
// ============================================================================

/// The complete set of inputs for one composition.
///
/// All three slots are optional. An empty stack renders a fully transparent
/// icon.
#[derive(Debug, Clone, Default)]
pub struct LayerStack {
    pub foreground: Option<Layer>,
    pub background_image: Option<Layer>,
    pub background_color: Option<BackgroundColor>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_foreground(mut self, layer: Layer) -> Self {
        self.foreground = Some(layer);
        self
    }

    pub fn with_background_image(mut self, layer: Layer) -> Self {
        self.background_image = Some(layer);
        self
    }

    pub fn with_background_color(mut self, color: BackgroundColor) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Returns true if nothing would be drawn.
    pub fn is_empty(&self) -> bool {
        self.foreground.is_none()
            && self.background_image.is_none()
            && self.background_color.is_none()
    }

    /// Image layers in draw order.
    pub fn images(&self) -> impl Iterator<Item = &Layer> {
        self.background_image.iter().chain(self.foreground.iter())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    #[test]
    fn layer_from_image_keeps_dimensions() {
        let img = RgbaImage::from_pixel(100, 200, Rgba([10, 20, 30, 255]));
        let layer = Layer::from_image(&img).unwrap();
        assert_eq!(layer.width(), 100);
        assert_eq!(layer.height(), 200);
    }

    #[test]
    fn layer_premultiplies_pixels() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([200, 100, 0, 128]));
        let layer = Layer::from_image(&img).unwrap();
        let px = layer.pixmap().pixel(0, 0).unwrap();
        assert_eq!(px.alpha(), 128);
        assert!(px.red() <= 101);
        assert!(px.green() <= 51);
    }

    #[test]
    fn zero_sized_layer_is_rejected() {
        let img = RgbaImage::new(0, 10);
        let err = Layer::from_image(&img).unwrap_err();
        assert!(matches!(
            err,
            IconError::InvalidLayer {
                width: 0,
                height: 10
            }
        ));
    }

    #[test]
    fn oversized_layer_is_not_reported_as_malformed() {
        // u32::MAX * 4 bytes per row overflows the backend's stride limit
        let err = allocate(u32::MAX, 1).unwrap_err();
        assert!(matches!(
            err,
            IconError::LayerTooLarge {
                width: u32::MAX,
                height: 1
            }
        ));
        assert!(err.to_string().contains("maximum raster size"));
        assert!(matches!(
            allocate(0, 0),
            Err(IconError::InvalidLayer { .. })
        ));
    }

    #[test]
    fn decode_png_bytes() {
        let img = RgbaImage::from_pixel(8, 4, Rgba([0, 255, 0, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let layer = Layer::decode(&bytes).unwrap();
        assert_eq!((layer.width(), layer.height()), (8, 4));
    }

    #[test]
    fn decode_garbage_fails() {
        let err = Layer::decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, IconError::Decode(_)));
    }

    #[test]
    fn open_missing_file_reports_path() {
        let err = Layer::open("/nonexistent/foreground.png").unwrap_err();
        assert!(err.to_string().contains("foreground.png"));
    }

    #[test]
    fn stack_images_are_in_draw_order() {
        let bg = Layer::from_image(&RgbaImage::new(2, 2)).unwrap();
        let fg = Layer::from_image(&RgbaImage::new(4, 4)).unwrap();
        let stack = LayerStack::new()
            .with_foreground(fg)
            .with_background_image(bg);

        let widths: Vec<_> = stack.images().map(Layer::width).collect();
        assert_eq!(widths, vec![2, 4]);
        assert!(!stack.is_empty());
        assert!(LayerStack::new().is_empty());
    }
}
