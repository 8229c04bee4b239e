//! Technology classification and ordering for GitHub repositories
//!
//! This crate is the pure core of gh-folio: given a repository record and an
//! ordered rule table it derives technology labels, and given a pin list it
//! orders a repository collection. No I/O, no state; every function is
//! deterministic for its inputs.
//!
//! # Example
//!
//! ```
//! use gh_tech_tags::{classify, rank, PinList, RepoRecord, RuleSet};
//!
//! let rules = RuleSet::default();
//! let repos: Vec<RepoRecord> = vec![];
//!
//! let ranked = rank(repos, &PinList::new(vec!["my-site".into()]));
//! for repo in &ranked {
//!     let labels = classify(repo, &rules);
//!     println!("{}: {}", repo.name, labels.join(", "));
//! }
//! ```

pub mod classifier;
pub mod filter;
pub mod ranking;
pub mod rules;
pub mod types;

pub use classifier::classify;
pub use filter::Selection;
pub use ranking::{rank, PinList};
pub use rules::{RuleError, RuleSet, TechRule};
pub use types::RepoRecord;
