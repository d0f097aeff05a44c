//! Repository configuration types
//!
//! Says where the knowledge base should look for its rule list.

use fraudkb_core::Rule;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{
    error::RepositoryError, file_system::FileRuleSource, memory::MemoryRuleSource,
    traits::RuleSource, RepositoryResult,
};

/// Rule file looked up when nothing else is configured
pub const DEFAULT_RULE_FILE: &str = "fraud_rules.json";

/// Repository source type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositorySource {
    /// Load from a rule file
    #[default]
    File,
    /// Rules provided in memory
    Memory,
}

/// Repository configuration
///
/// # Examples
///
/// ```rust
/// use fraudkb_repository::RepositoryConfig;
///
/// // JSON or YAML rule file
/// let config = RepositoryConfig::file("config/fraud_rules.yaml");
///
/// // In-memory rules (for testing)
/// let config = RepositoryConfig::memory(vec![]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Configuration source type
    pub source: RepositorySource,

    /// Rule file path (required for File source)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Rules for the Memory source
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
}

impl RepositoryConfig {
    /// Create a rule file configuration
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: RepositorySource::File,
            path: Some(path.into()),
            rules: Vec::new(),
        }
    }

    /// Create an in-memory configuration
    pub fn memory(rules: Vec<Rule>) -> Self {
        Self {
            source: RepositorySource::Memory,
            path: None,
            rules,
        }
    }

    /// Build the rule source this configuration describes
    pub fn open(&self) -> RepositoryResult<Box<dyn RuleSource>> {
        match self.source {
            RepositorySource::File => {
                let path = self.path.as_ref().ok_or_else(|| {
                    RepositoryError::InvalidConfig("file source requires a path".to_string())
                })?;
                Ok(Box::new(FileRuleSource::new(path)))
            }
            RepositorySource::Memory => Ok(Box::new(MemoryRuleSource::new(self.rules.clone()))),
        }
    }

    /// Open the source and load its rules in one step
    pub fn load_rules(&self) -> RepositoryResult<Vec<Rule>> {
        self.open()?.load_rules()
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self::file(DEFAULT_RULE_FILE)
    }
}
