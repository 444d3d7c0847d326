//! Rendered icons awaiting PNG encoding.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::{IconError, IconResult};
use crate::variant::VariantGeometry;

/// One rendered variant, not yet encoded.
///
/// The exporter produces one of these per output path and encodes them all
/// before the output tree is assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedIcon {
    /// Destination path inside the output tree.
    pub path: String,
    /// Straight-alpha pixels of the full canvas.
    pub data: RgbaImage,
    /// Canvas and content sizes the icon was rendered with.
    pub geometry: VariantGeometry,
}

/// A PNG-encoded icon with its destination path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedIcon {
    pub path: String,
    pub png: Vec<u8>,
}

impl RenderedIcon {
    pub fn new(path: impl Into<String>, data: RgbaImage, geometry: VariantGeometry) -> Self {
        Self {
            path: path.into(),
            data,
            geometry,
        }
    }

    /// Encodes the pixels as an 8-bit RGBA PNG.
    pub fn encode(self) -> IconResult<EncodedIcon> {
        let png = encode_png(&self.data).map_err(|source| IconError::Encode {
            path: self.path.clone(),
            source,
        })?;
        Ok(EncodedIcon {
            path: self.path,
            png,
        })
    }
}

/// Encodes an RGBA image to PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Cursor::new(Vec::new());
    PngEncoder::new(&mut buf).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(buf.into_inner())
}
