//! Square raster surface with a 2D drawing context.
//!
//! [`Canvas`] wraps a tiny-skia [`Pixmap`] and carries the two pieces of
//! context state the exporter needs: a current transform and an optional
//! clip mask. Both apply to everything drawn afterwards. Source layers are
//! never modified; clipping only limits which composited pixels survive.
//!
//! A canvas is created fresh for every render and consumed by
//! [`Canvas::into_image`].

use image::RgbaImage;
use resvg::tiny_skia::{
    FillRule, FilterQuality, Mask, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Rect, Transform,
};

use crate::compositor::Placement;
use crate::error::{IconError, IconResult};
use crate::layer::{BackgroundColor, Layer};
use crate::variant::ClipShape;

/// Cubic bezier control distance for a quarter circle: 4/3 * tan(pi/8).
const KAPPA: f32 = 0.552_284_8;

// ============================================================================
// Canvas
// ============================================================================

pub struct Canvas {
    pixmap: Pixmap,
    transform: Transform,
    clip: Option<Mask>,
}

impl Canvas {
    /// Allocates a transparent `size x size` canvas.
    pub fn new(size: u32) -> IconResult<Self> {
        let pixmap = Pixmap::new(size, size).ok_or(IconError::InvalidCanvas(size))?;
        Ok(Self {
            pixmap,
            transform: Transform::identity(),
            clip: None,
        })
    }

    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    /// Moves the drawing origin by `(dx, dy)` in current coordinates.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.transform = self.transform.pre_translate(dx, dy);
    }

    /// Restricts all further drawing to `shape` laid over the square
    /// `(0, 0, size, size)` in current coordinates.
    ///
    /// Repeated clips intersect.
    pub fn clip(&mut self, shape: ClipShape, size: f32) -> IconResult<()> {
        let Some(path) = clip_path(shape, size) else {
            return Ok(());
        };

        match self.clip.as_mut() {
            Some(mask) => mask.intersect_path(&path, FillRule::Winding, true, self.transform),
            None => {
                let side = self.size();
                let mut mask = Mask::new(side, side).ok_or(IconError::InvalidCanvas(side))?;
                mask.fill_path(&path, FillRule::Winding, true, self.transform);
                self.clip = Some(mask);
            }
        }
        Ok(())
    }

    /// Fills the square `(0, 0, size, size)` in current coordinates.
    pub fn fill(&mut self, color: BackgroundColor, size: f32) {
        let Some(rect) = Rect::from_xywh(0.0, 0.0, size, size) else {
            return;
        };
        let (r, g, b) = color.rgb();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, 255);
        paint.anti_alias = true;

        self.pixmap
            .fill_rect(rect, &paint, self.transform, self.clip.as_ref());
    }

    /// Draws `layer` scaled and offset by `placement`, in current coordinates.
    pub fn draw_layer(&mut self, layer: &Layer, placement: Placement) {
        let transform = self
            .transform
            .pre_translate(placement.x, placement.y)
            .pre_scale(placement.scale, placement.scale);
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };

        self.pixmap.draw_pixmap(
            0,
            0,
            layer.pixmap().as_ref(),
            &paint,
            transform,
            self.clip.as_ref(),
        );
    }

    /// Converts the premultiplied surface to a straight-alpha image.
    pub fn into_image(self) -> RgbaImage {
        pixmap_to_rgba_image(&self.pixmap)
    }
}

// ============================================================================
// Clip Paths
// ============================================================================

fn clip_path(shape: ClipShape, size: f32) -> Option<Path> {
    match shape {
        ClipShape::None => None,
        ClipShape::RoundedRect { .. } => {
            let radius = shape.corner_radius(size.round() as u32).unwrap_or_default();
            rounded_rect_path(size, radius)
        }
        ClipShape::Circle => PathBuilder::from_circle(size / 2.0, size / 2.0, size / 2.0),
    }
}

/// Square `(0, 0, size, size)` with circular corners of `radius`.
fn rounded_rect_path(size: f32, radius: f32) -> Option<Path> {
    let r = radius.clamp(0.0, size / 2.0);
    if r == 0.0 {
        return Rect::from_xywh(0.0, 0.0, size, size).map(PathBuilder::from_rect);
    }
    let k = r * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(r, 0.0);
    pb.line_to(size - r, 0.0);
    pb.cubic_to(size - r + k, 0.0, size, r - k, size, r);
    pb.line_to(size, size - r);
    pb.cubic_to(size, size - r + k, size - r + k, size, size - r, size);
    pb.line_to(r, size);
    pb.cubic_to(r - k, size, 0.0, size - r + k, 0.0, size - r);
    pb.line_to(0.0, r);
    pb.cubic_to(0.0, r - k, r - k, 0.0, r, 0.0);
    pb.close();
    pb.finish()
}

// ============================================================================
// Pixel Conversion
// ============================================================================

fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());

    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        // tiny-skia stores premultiplied alpha
        let color = src.demultiply();
        dst.0 = [color.red(), color.green(), color.blue(), color.alpha()];
    }

    img
}

// ============================================================================
// Tests
// ============================================================================
