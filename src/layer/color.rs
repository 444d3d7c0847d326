//! Solid background fill.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;

use crate::error::IconError;

/// An opaque sRGB fill drawn beneath every image layer.
///
/// Parses `#rgb` / `#rrggbb` hex strings (the `#` is optional) and CSS
/// color names such as `"teal"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundColor(Srgb<u8>);

impl BackgroundColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self(Srgb::new(r, g, b))
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        self.0.into_components()
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl From<Srgb<u8>> for BackgroundColor {
    fn from(color: Srgb<u8>) -> Self {
        Self(color)
    }
}

impl FromStr for BackgroundColor {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(named) = palette::named::from_str(&trimmed.to_ascii_lowercase()) {
            return Ok(Self(named));
        }
        Srgb::<u8>::from_str(trimmed)
            .map(Self)
            .map_err(|_| IconError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        let color: BackgroundColor = "#ff8000".parse().unwrap();
        assert_eq!(color.rgb(), (255, 128, 0));

        let short: BackgroundColor = "#0f0".parse().unwrap();
        assert_eq!(short.rgb(), (0, 255, 0));
    }

    #[test]
    fn parses_named_colors() {
        let color: BackgroundColor = "White".parse().unwrap();
        assert_eq!(color.rgb(), (255, 255, 255));
    }

    #[test]
    fn rejects_garbage() {
        let err = "not-a-color".parse::<BackgroundColor>().unwrap_err();
        assert!(matches!(err, IconError::InvalidColor(ref s) if s == "not-a-color"));
    }

    #[test]
    fn hex_display_roundtrips() {
        let color = BackgroundColor::new(1, 2, 254);
        assert_eq!(color.to_string(), "#0102fe");
        assert_eq!(color.to_string().parse::<BackgroundColor>().unwrap(), color);
    }
}
