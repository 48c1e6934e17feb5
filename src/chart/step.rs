use serde::Serialize;
use std::fmt;

/// One trimmed, non-empty token of an instruction string.
///
/// Steps keep the original casing of the instruction; classification lowercases
/// on the fly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Step(String);

impl Step {
    /// Creates a step from raw text, returning `None` when nothing is left after trimming.
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test.
    pub fn mentions(&self, keyword: &str) -> bool {
        self.0.to_lowercase().contains(keyword)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Step {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
