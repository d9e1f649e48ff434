//! Local file system instruction loader
//!
//! The loader checks for files in this priority order:
//!
//! 1. A path given on the command line
//! 2. The custom copy, when `prefer_custom` is set
//! 3. The user's default instruction document
//! 4. The bundled copy
//!
//! Only the explicit path is required to exist; the others are skipped when
//! missing.

use crate::config::FileInstructionsConfig;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from resolving or reading an instruction document
#[derive(Error, Debug)]
pub enum InstructionLoadError {
    #[error("No instructions file found; set instructions.default_path or pass --instructions")]
    NotFound,

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Which configured location an instruction document came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionSource {
    Explicit,
    Custom,
    Default,
    Bundled,
}

impl InstructionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstructionSource::Explicit => "explicit",
            InstructionSource::Custom => "custom",
            InstructionSource::Default => "default",
            InstructionSource::Bundled => "bundled",
        }
    }
}

impl fmt::Display for InstructionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An instruction document read from disk
#[derive(Debug, Clone)]
pub struct LoadedInstructions {
    pub path: PathBuf,
    pub source: InstructionSource,
    pub content: String,
}

/// Instruction loader that reads from the local file system.
#[derive(Debug, Clone, Default)]
pub struct InstructionLoader {
    config: FileInstructionsConfig,
}

impl InstructionLoader {
    pub fn new(config: FileInstructionsConfig) -> Self {
        Self { config }
    }

    /// Pick the instruction document to use.
    pub fn resolve(
        &self,
        explicit: Option<&Path>,
    ) -> Result<(PathBuf, InstructionSource), InstructionLoadError> {
        if let Some(path) = explicit {
            return Ok((path.to_path_buf(), InstructionSource::Explicit));
        }

        let candidates = [
            (
                self.config
                    .custom_path
                    .as_ref()
                    .filter(|_| self.config.prefer_custom),
                InstructionSource::Custom,
            ),
            (self.config.default_path.as_ref(), InstructionSource::Default),
            (self.config.bundled_path.as_ref(), InstructionSource::Bundled),
        ];

        for (path, source) in candidates {
            let Some(path) = path else { continue };
            if path.exists() {
                return Ok((path.clone(), source));
            }
            debug!(path = %path.display(), %source, "Instruction candidate missing");
        }

        Err(InstructionLoadError::NotFound)
    }

    /// Resolve and read the instruction document.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn load(
        &self,
        explicit: Option<&Path>,
    ) -> Result<LoadedInstructions, InstructionLoadError> {
        let (path, source) = self.resolve(explicit)?;
        let bytes = fs::read(&path).map_err(|source| InstructionLoadError::Io {
            path: path.clone(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes).into_owned();

        info!(path = %path.display(), %source, bytes = bytes.len(), "Loaded instructions");
        Ok(LoadedInstructions {
            path,
            source,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn config(dir: &TempDir) -> FileInstructionsConfig {
        FileInstructionsConfig {
            custom_path: Some(dir.path().join("instructions.custom.md")),
            default_path: Some(dir.path().join("instructions.md")),
            bundled_path: Some(dir.path().join("instructions.default.md")),
            prefer_custom: false,
        }
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        write(&dir, "instructions.md", b"default");
        let explicit = write(&dir, "mine.md", b"mine");

        let loader = InstructionLoader::new(config(&dir));
        let loaded = loader.load(Some(explicit.as_path())).unwrap();
        assert_eq!(loaded.source, InstructionSource::Explicit);
        assert_eq!(loaded.content, "mine");
    }

    #[test]
    fn test_missing_explicit_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let loader = InstructionLoader::new(config(&dir));
        let err = loader
            .load(Some(dir.path().join("absent.md").as_path()))
            .unwrap_err();
        assert!(matches!(err, InstructionLoadError::Io { .. }));
    }

    #[test]
    fn test_custom_only_when_preferred() {
        let dir = TempDir::new().unwrap();
        write(&dir, "instructions.custom.md", b"custom");
        write(&dir, "instructions.md", b"default");

        let loader = InstructionLoader::new(config(&dir));
        assert_eq!(loader.load(None).unwrap().source, InstructionSource::Default);

        let loader = InstructionLoader::new(FileInstructionsConfig {
            prefer_custom: true,
            ..config(&dir)
        });
        let loaded = loader.load(None).unwrap();
        assert_eq!(loaded.source, InstructionSource::Custom);
        assert_eq!(loaded.content, "custom");
    }

    #[test]
    fn test_preferred_custom_missing_falls_through() {
        let dir = TempDir::new().unwrap();
        write(&dir, "instructions.default.md", b"bundled");

        let loader = InstructionLoader::new(FileInstructionsConfig {
            prefer_custom: true,
            ..config(&dir)
        });
        let loaded = loader.load(None).unwrap();
        assert_eq!(loaded.source, InstructionSource::Bundled);
        assert_eq!(loaded.content, "bundled");
    }

    #[test]
    fn test_nothing_found() {
        let dir = TempDir::new().unwrap();
        let loader = InstructionLoader::new(config(&dir));
        assert!(matches!(
            loader.load(None).unwrap_err(),
            InstructionLoadError::NotFound
        ));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = TempDir::new().unwrap();
        write(&dir, "instructions.md", b"Workflow \xff\xfe ok");

        let loader = InstructionLoader::new(config(&dir));
        let loaded = loader.load(None).unwrap();
        assert!(loaded.content.starts_with("Workflow "));
        assert!(loaded.content.ends_with(" ok"));
        assert!(loaded.content.contains('\u{FFFD}'));
    }
}
