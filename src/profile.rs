//! Serializable export settings.
//!
//! [`ExportSettings`] captures the non-image inputs of an export (name
//! overrides and the background color) in a JSON form that a frontend or a
//! command line can hand to the library.
//!
//! # Example
//!
//! ```
//! use mipmap_renderer::ExportSettings;
//!
//! let settings = ExportSettings::new()
//!     .with_launcher_name("app_icon")
//!     .with_background_color("#1e88e5");
//!
//! let json = settings.to_json().unwrap();
//! let restored = ExportSettings::from_json(&json).unwrap();
//! assert_eq!(restored.launcher_name.as_deref(), Some("app_icon"));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::IconResult;
use crate::exporter::AssetNames;
use crate::layer::BackgroundColor;

/// Name overrides and background color for one export.
///
/// # JSON Format
///
/// ```json
/// {
///   "launcherName": "ic_launcher",
///   "splashName": "splash_icon",
///   "backgroundColor": "#ffffff"
/// }
/// ```
///
/// Every field is optional; unset names fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExportSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launcher_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splash_name: Option<String>,

    /// Hex (`#rrggbb`) or CSS color name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl ExportSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_launcher_name(mut self, name: impl Into<String>) -> Self {
        self.launcher_name = Some(name.into());
        self
    }

    pub fn with_splash_name(mut self, name: impl Into<String>) -> Self {
        self.splash_name = Some(name.into());
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Resolves the name overrides, validating them.
    pub fn asset_names(&self) -> IconResult<AssetNames> {
        AssetNames::from_overrides(self.launcher_name.as_deref(), self.splash_name.as_deref())
    }

    /// Parses the background color, if one is set.
    pub fn parsed_background_color(&self) -> IconResult<Option<BackgroundColor>> {
        self.background_color
            .as_deref()
            .map(str::parse::<BackgroundColor>)
            .transpose()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================
