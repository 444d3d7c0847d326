//! Layer composition onto a square canvas.
//!
//! The compositor is a pure draw routine: it fills the background color,
//! then draws the background image and the foreground, each scaled to fit
//! the square and centered. It never clips; shaping the result is up to the
//! caller's canvas context.

use image::RgbaImage;

use crate::canvas::Canvas;
use crate::error::IconResult;
use crate::layer::LayerStack;

/// Where a layer lands inside a square area, relative to the area's origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Uniform scale applied to the source image.
    pub scale: f32,
    /// Left edge of the scaled image.
    pub x: f32,
    /// Top edge of the scaled image.
    pub y: f32,
}

/// Fits a `width x height` image inside an `area x area` square.
///
/// The scale is `min(area / width, area / height)`, so the aspect ratio is
/// kept and the image is never cropped. The result is centered on the
/// square.
pub fn fit_centered(area: f32, width: u32, height: u32) -> Placement {
    let (w, h) = (width as f32, height as f32);
    let scale = (area / w).min(area / h);
    let half = area / 2.0;
    Placement {
        scale,
        x: half - w * scale / 2.0,
        y: half - h * scale / 2.0,
    }
}

/// Composites `layers` onto `canvas` over the square `(0, 0, size, size)`
/// in the canvas's current coordinates.
///
/// Draw order is fixed: background color, background image, foreground.
pub fn draw(canvas: &mut Canvas, size: f32, layers: &LayerStack) {
    if let Some(color) = layers.background_color {
        canvas.fill(color, size);
    }
    for layer in layers.images() {
        let placement = fit_centered(size, layer.width(), layer.height());
        canvas.draw_layer(layer, placement);
    }
}

/// Renders `layers` onto a fresh `size x size` canvas.
pub fn render(size: u32, layers: &LayerStack) -> IconResult<RgbaImage> {
    let mut canvas = Canvas::new(size)?;
    draw(&mut canvas, size as f32, layers);
    Ok(canvas.into_image())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::{BackgroundColor, Layer};
    use image::Rgba;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Layer {
        Layer::from_image(&RgbaImage::from_pixel(width, height, Rgba(rgba))).unwrap()
    }

    fn center(p: Placement, width: u32, height: u32) -> (f32, f32) {
        (
            p.x + width as f32 * p.scale / 2.0,
            p.y + height as f32 * p.scale / 2.0,
        )
    }

    fn close(actual: &Rgba<u8>, expected: [u8; 4]) -> bool {
        actual
            .0
            .iter()
            .zip(expected)
            .all(|(a, e)| (*a as i16 - e as i16).abs() <= 2)
    }

    #[test]
    fn fit_uses_smaller_ratio() {
        let p = fit_centered(38.0, 100, 200);
        assert!((p.scale - 0.19).abs() < 1e-6);

        let p = fit_centered(100.0, 50, 25);
        assert_eq!(p.scale, 2.0);
        assert_eq!((p.x, p.y), (0.0, 25.0));
    }

    #[test]
    fn fit_is_always_centered() {
        for &(area, w, h) in &[
            (48.0, 1, 1),
            (38.0, 100, 200),
            (512.0, 1920, 1080),
            (77.0, 3, 7),
            (160.0, 640, 640),
        ] {
            let p = fit_centered(area, w, h);
            let (cx, cy) = center(p, w, h);
            assert!((cx - area / 2.0).abs() < 1e-3, "{area} {w}x{h}");
            assert!((cy - area / 2.0).abs() < 1e-3, "{area} {w}x{h}");
            assert!(w as f32 * p.scale <= area + 1e-3);
            assert!(h as f32 * p.scale <= area + 1e-3);
        }
    }

    #[test]
    fn empty_stack_renders_transparent() {
        let img = render(32, &LayerStack::new()).unwrap();
        assert_eq!(img.dimensions(), (32, 32));
        assert!(img.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn background_color_fills_everything() {
        let layers = LayerStack::new().with_background_color(BackgroundColor::new(0, 128, 255));
        let img = render(8, &layers).unwrap();
        assert!(img.pixels().all(|p| p.0 == [0, 128, 255, 255]));
    }

    #[test]
    fn layers_stack_in_fixed_order() {
        // 20x20 canvas: background image 20x10 covers rows 5..15,
        // foreground 10x20 covers columns 5..15.
        let layers = LayerStack::new()
            .with_background_color(BackgroundColor::new(255, 0, 0))
            .with_background_image(solid(20, 10, [0, 255, 0, 255]))
            .with_foreground(solid(10, 20, [0, 0, 255, 255]));
        let img = render(20, &layers).unwrap();

        // uncovered by both images
        assert!(close(img.get_pixel(1, 1), [255, 0, 0, 255]));
        // background image only
        assert!(close(img.get_pixel(1, 10), [0, 255, 0, 255]));
        // overlap: foreground wins
        assert!(close(img.get_pixel(10, 10), [0, 0, 255, 255]));
        // foreground over color
        assert!(close(img.get_pixel(10, 1), [0, 0, 255, 255]));
    }

    #[test]
    fn transparent_foreground_shows_background() {
        let layers = LayerStack::new()
            .with_background_image(solid(4, 4, [0, 255, 0, 255]))
            .with_foreground(solid(4, 4, [0, 0, 255, 0]));
        let img = render(16, &layers).unwrap();
        assert!(close(img.get_pixel(8, 8), [0, 255, 0, 255]));
    }

    #[test]
    fn render_is_deterministic() {
        let layers = LayerStack::new()
            .with_background_color(BackgroundColor::new(10, 20, 30))
            .with_foreground(solid(7, 3, [200, 100, 50, 180]));
        let a = render(33, &layers).unwrap();
        let b = render(33, &layers).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn zero_size_render_fails() {
        assert!(render(0, &LayerStack::new()).is_err());
    }
}
