//! Rule source abstraction for the fraud knowledge base
//!
//! The knowledge base asks a [`RuleSource`] for its rule list once, when it
//! is constructed. This crate provides the sources:
//!
//! - **File**: a JSON or YAML array of rule objects on disk
//! - **Memory**: a rule list handed over by the caller (tests, embedding)
//!
//! # Quick Start
//!
//! ```no_run
//! use fraudkb_repository::{FileRuleSource, RuleSource};
//!
//! let source = FileRuleSource::new("fraud_rules.json");
//! match source.load_rules() {
//!     Ok(rules) => println!("loaded {} rules", rules.len()),
//!     Err(e) => eprintln!("cannot load rules: {}", e),
//! }
//! ```
//!
//! # Rule file format
//!
//! ```json
//! [
//!   {
//!     "id": "R1",
//!     "name": "Nominal Sangat Tinggi",
//!     "condition": "amount > 7500",
//!     "action": "increase_risk",
//!     "weight": 0.2,
//!     "description": "Transaksi dengan nominal sangat tinggi",
//!     "priority": 3
//!   }
//! ]
//! ```
//!
//! Loading never validates conditions; a rule with a broken condition is
//! loaded as-is and fails when it is evaluated.

pub mod config;
pub mod error;
pub mod file_system;
pub mod memory;
pub mod traits;

// Re-exports - Configuration
pub use config::{RepositoryConfig, RepositorySource, DEFAULT_RULE_FILE};

// Re-exports - Error
pub use error::{RepositoryError, RepositoryResult};

// Re-exports - Sources
pub use file_system::{FileRuleSource, RuleFileFormat};
pub use memory::MemoryRuleSource;
pub use traits::RuleSource;
