//! File system based rule source

use fraudkb_core::Rule;
use path_absolutize::Absolutize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{error::RepositoryError, traits::RuleSource, RepositoryResult};

/// Rule file encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFileFormat {
    Json,
    Yaml,
}

impl RuleFileFormat {
    /// Pick the format from a file extension (`.json`, `.yaml`, `.yml`)
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(RuleFileFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Some(RuleFileFormat::Yaml)
            }
            _ => None,
        }
    }

    /// Decode a rule array
    pub fn parse(&self, content: &str) -> RepositoryResult<Vec<Rule>> {
        let rules = match self {
            RuleFileFormat::Json => serde_json::from_str(content)?,
            RuleFileFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(rules)
    }
}

/// Loads rules from a single JSON or YAML file
///
/// The file is read on every [`RuleSource::load_rules`] call; a missing
/// file is reported as [`RepositoryError::NotFound`].
#[derive(Debug, Clone)]
pub struct FileRuleSource {
    path: PathBuf,
}

impl FileRuleSource {
    /// Create a new file rule source
    ///
    /// # Example
    /// ```no_run
    /// use fraudkb_repository::FileRuleSource;
    ///
    /// let source = FileRuleSource::new("config/fraud_rules.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute form of the path, for diagnostics
    fn display_path(&self) -> PathBuf {
        self.path
            .absolutize()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|_| self.path.clone())
    }
}

impl RuleSource for FileRuleSource {
    fn load_rules(&self) -> RepositoryResult<Vec<Rule>> {
        let format = RuleFileFormat::from_path(&self.path).ok_or_else(|| {
            RepositoryError::UnsupportedFormat {
                path: self.path.clone(),
            }
        })?;

        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RepositoryError::NotFound {
                path: self.display_path(),
            },
            _ => RepositoryError::Io(e),
        })?;

        let rules = format.parse(&content)?;
        tracing::debug!(
            "Loaded {} rules from {}",
            rules.len(),
            self.display_path().display()
        );
        Ok(rules)
    }

    fn describe(&self) -> String {
        format!("file {}", self.display_path().display())
    }
}
