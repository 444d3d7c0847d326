//! Error type shared by the compositor, the exporter and the archive writers.

use std::path::PathBuf;

pub type IconResult<T> = Result<T, IconError>;

#[derive(thiserror::Error, Debug)]
pub enum IconError {
    /// A caller-supplied file name stem cannot be used in the output tree.
    #[error("invalid {field} name {name:?}: {reason}")]
    InvalidName {
        field: &'static str,
        name: String,
        reason: &'static str,
    },

    /// A source image has no pixels to draw.
    #[error("invalid layer dimensions {width}x{height}")]
    InvalidLayer { width: u32, height: u32 },

    /// A source image exceeds the raster backend's size limit
    /// (`width * 4` must fit in an `i32`).
    #[error("layer {width}x{height} exceeds the maximum raster size")]
    LayerTooLarge { width: u32, height: u32 },

    #[error("invalid background color: {0}")]
    InvalidColor(String),

    #[error("cannot allocate a {0}px canvas")]
    InvalidCanvas(u32),

    #[error("failed to render {path}: {reason}")]
    Render { path: String, reason: String },

    #[error("failed to encode {path}")]
    Encode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("duplicate output path: {0}")]
    DuplicatePath(String),

    #[error("failed to decode image")]
    Decode(#[from] image::ImageError),

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("archive error")]
    Archive(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("settings error")]
    Settings(#[from] serde_json::Error),
}

impl IconError {
    pub fn render(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Render {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
