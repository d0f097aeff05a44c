//! Core trait definition for rule sources

use fraudkb_core::Rule;

use crate::RepositoryResult;

/// Something that can produce a rule list
///
/// Implementations return rules in storage order; the knowledge base keeps
/// that order for evaluation.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a source can be shared by
/// engines built on different threads.
pub trait RuleSource: Send + Sync {
    /// Load every rule from the source
    fn load_rules(&self) -> RepositoryResult<Vec<Rule>>;

    /// Short human-readable description, used in log messages
    fn describe(&self) -> String;
}
