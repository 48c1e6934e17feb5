use crate::chart::NodeKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed colours for one colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub start_end: &'static str,
    pub process: &'static str,
    pub decision: &'static str,
    pub text: &'static str,
    pub background: &'static str,
}

impl Palette {
    /// Fill colour for a node of the given kind.
    pub fn fill(&self, kind: NodeKind) -> &'static str {
        match kind {
            NodeKind::StartEnd => self.start_end,
            NodeKind::Process => self.process,
            NodeKind::Decision => self.decision,
        }
    }
}

const DEFAULT: Palette = Palette {
    start_end: "#4CAF50",
    process: "#2196F3",
    decision: "#FF9800",
    text: "white",
    background: "white",
};

const PROFESSIONAL: Palette = Palette {
    start_end: "#1976D2",
    process: "#388E3C",
    decision: "#F57C00",
    text: "white",
    background: "white",
};

const DARK: Palette = Palette {
    start_end: "#424242",
    process: "#616161",
    decision: "#795548",
    text: "white",
    background: "#2e2e2e",
};

const COLORFUL: Palette = Palette {
    start_end: "#E91E63",
    process: "#9C27B0",
    decision: "#FF5722",
    text: "white",
    background: "white",
};

/// The named colour schemes a flowchart can be drawn with.
///
/// Parsing never fails: any name that is not recognised resolves to
/// [`ColorScheme::Default`]. This holds for `FromStr`, [`ColorScheme::from_name`]
/// and serde deserialization alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ColorScheme {
    #[default]
    Default,
    Professional,
    Dark,
    Colorful,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 4] = [
        ColorScheme::Default,
        ColorScheme::Professional,
        ColorScheme::Dark,
        ColorScheme::Colorful,
    ];

    /// Resolves a scheme by name, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "professional" => ColorScheme::Professional,
            "dark" => ColorScheme::Dark,
            "colorful" => ColorScheme::Colorful,
            "default" => ColorScheme::Default,
            other => {
                tracing::debug!(scheme = other, "unknown colour scheme, using default");
                ColorScheme::Default
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorScheme::Default => "default",
            ColorScheme::Professional => "professional",
            ColorScheme::Dark => "dark",
            ColorScheme::Colorful => "colorful",
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            ColorScheme::Default => &DEFAULT,
            ColorScheme::Professional => &PROFESSIONAL,
            ColorScheme::Dark => &DARK,
            ColorScheme::Colorful => &COLORFUL,
        }
    }
}

impl From<String> for ColorScheme {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<&str> for ColorScheme {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl FromStr for ColorScheme {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
