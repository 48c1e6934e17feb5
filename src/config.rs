use crate::error::ConfigError;
use crate::render::RendererChoice;
use crate::theme::ColorScheme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for a [`Generator`](crate::generator::Generator).
///
/// Every field is optional in JSON. Colour scheme names that are not
/// recognised resolve to `default` rather than failing.
///
/// ```
/// use zushiki::config::Options;
/// use zushiki::render::RendererChoice;
/// use zushiki::theme::ColorScheme;
///
/// let options = Options::from_json(r#"{ "color_scheme": "neon", "renderer": "markup" }"#).unwrap();
/// assert_eq!(options.color_scheme, ColorScheme::Default);
/// assert_eq!(options.renderer, RendererChoice::Markup);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub color_scheme: ColorScheme,
    pub renderer: RendererChoice,
}

impl Options {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn with_color_scheme(mut self, scheme: impl Into<ColorScheme>) -> Self {
        self.color_scheme = scheme.into();
        self
    }

    pub fn with_renderer(mut self, renderer: RendererChoice) -> Self {
        self.renderer = renderer;
        self
    }
}
