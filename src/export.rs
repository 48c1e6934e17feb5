use crate::error::ExportError;
use crate::generator::Output;
use std::fs;
use std::path::{Path, PathBuf};

pub const STEPS_FILE: &str = "flowchart_steps.txt";
pub const DOT_FILE: &str = "flowchart.dot";
pub const JSON_FILE: &str = "flowchart.json";

/// The set of files a generated flowchart can be saved as.
///
/// Always contains the rendered image or markup, the instruction text and a
/// JSON description of the graph; the DOT source is included in graph mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    files: Vec<(String, String)>,
}

impl ExportBundle {
    pub fn from_output(instruction: &str, output: &Output) -> Result<Self, ExportError> {
        let rendering = &output.rendering;
        let mut files = vec![
            (
                format!("flowchart.{}", rendering.format.extension()),
                rendering.content.clone(),
            ),
            (STEPS_FILE.to_string(), instruction.to_string()),
        ];
        if let Some(source) = &rendering.dot_source {
            files.push((DOT_FILE.to_string(), source.clone()));
        }
        files.push((
            JSON_FILE.to_string(),
            serde_json::to_string_pretty(&output.chart)?,
        ));
        Ok(Self { files })
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|(file, _)| file == name)
            .map(|(_, contents)| contents.as_str())
    }

    /// Writes every file into `dir`, creating it if needed.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, ExportError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| ExportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut written = Vec::with_capacity(self.files.len());
        for (name, contents) in &self.files {
            let path = dir.join(name);
            fs::write(&path, contents).map_err(|source| ExportError::Io {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), bytes = contents.len(), "exported file");
            written.push(path);
        }
        Ok(written)
    }
}
