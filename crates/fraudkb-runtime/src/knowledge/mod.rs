//! Knowledge base: static facts plus the rule repository

mod base;
mod defaults;
mod facts;

pub use base::{KnowledgeBase, KNOWLEDGE_BASE_VERSION};
pub use defaults::default_rules;
pub use facts::{default_facts, fact_keys, KnownPattern};
