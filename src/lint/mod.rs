//! Validation-based structural checks for transition tables.
//!
//! Machines accept incomplete tables on purpose, so a typo in a table shows
//! up as a silently ignored event rather than an error. Lints catch those
//! mistakes ahead of time. Checks use Stillwater's `Validation` type, so
//! every issue is reported in one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use flowstate::flows::{form_config, FormEvent, FormState};
//! use flowstate::lint::{LintBuilder, TableLint};
//!
//! let lint: TableLint<FormState, FormEvent> = LintBuilder::new()
//!     .deny_unreachable()
//!     .deny_dead_ends()
//!     .build();
//!
//! // The form table declares Validating but nothing ever enters it.
//! assert!(lint.check(&form_config()).is_failure());
//! ```

pub mod builder;
pub mod issues;
pub mod rules;

pub use builder::LintBuilder;
pub use issues::TableIssue;
pub use rules::{LintCheck, TableLint};
