// ============================================================================
// Strict linting - Dangerous or non-idiomatic practices are forbidden
// ============================================================================

#![deny(warnings)]                    // All warnings are treated as errors
#![deny(unsafe_code)]                 // Unsafe code is forbidden
#![deny(missing_docs)]                // All public items must be documented
#![deny(dead_code)]                   // Unused code is forbidden
#![deny(non_camel_case_types)]        // Types must follow CamelCase convention

// Additional strictness - Leave nothing unchecked
#![deny(unused_imports)]              // Unused imports are forbidden
#![deny(unused_variables)]            // Unused variables are forbidden
#![deny(unused_must_use)]             // Must handle Result and Option explicitly
#![deny(non_snake_case)]              // Variables and functions must be snake_case
#![deny(non_upper_case_globals)]      // Constants must be UPPER_CASE
#![deny(nonstandard_style)]           // Non-standard code style is forbidden
#![forbid(unsafe_op_in_unsafe_fn)]    // Unsafe ops in unsafe fns are forbidden

// Clippy lints (warnings only)
#![warn(clippy::all)]                 // All standard Clippy lints
#![warn(clippy::pedantic)]            // Very strict Clippy lints
#![warn(clippy::nursery)]             // Experimental lints
#![warn(clippy::unwrap_used)]         // unwrap() warning
#![warn(clippy::expect_used)]         // expect() warning
#![warn(clippy::panic)]               // panic!() warning
#![warn(clippy::print_stdout)]        // println!() warning
#![warn(clippy::todo)]                // TODO warning
#![warn(clippy::unimplemented)]       // unimplemented!() warning
#![warn(clippy::missing_const_for_fn)] // Force const when possible
#![warn(clippy::unwrap_in_result)]    // unwrap() in Result warning
#![warn(clippy::module_inception)]    // Module with same name as crate warning
#![warn(clippy::redundant_clone)]     // Useless clones warning
#![warn(clippy::shadow_unrelated)]    // Shadowing unrelated variables warning
#![warn(clippy::too_many_arguments)]  // Limit function arguments
#![warn(clippy::cognitive_complexity)] // Limit cognitive complexity

// Safety and robustness lints
#![deny(overflowing_literals)]        // Overflowing literals are forbidden
#![deny(arithmetic_overflow)]         // Arithmetic overflow is forbidden

// ============================================================================
// Crate Documentation
// ============================================================================

//! # Terraform Plan Summary
//!
//! Per-account change summaries from binary Terraform plan files.
//!
//! ## Overview
//!
//! Running `terraform show -json` on every plan is slow. This crate reads the
//! binary plan directly instead:
//!
//! - Unwrap the plan file (a zip archive) and decode the protobuf plan message
//! - Count creates, updates, and deletes for each account
//! - Warn when drift would change those counts, meaning the plan may be stale
//! - Render a sorted summary as markdown and as colorized text
//!
//! ## Pipeline
//!
//! 1. **Discovery**: find `<business-unit>/<account>/**/<plan file>`
//! 2. **Decode**: read the `tfplan` entry, check version 3 and no deferred changes
//! 3. **Classify**: map each action to a create, update, or delete
//! 4. **Aggregate**: fold changes into one tally per account
//! 5. **Detect drift**: warn per drifting observation, separately from the tally
//! 6. **Report**: sort tallies and render the tables
//!
//! ## Modules
//!
//! - [`plan`]: Plan file decoding
//! - [`summary`]: Action classification, tallies, and drift detection
//! - [`summarizer`]: Per-artifact pipeline
//! - [`discovery`]: Plan file discovery
//! - [`report`]: Summary table rendering
//! - [`reporter`]: Observability handle
//! - [`config`]: Run settings
//! - [`cli`]: Command-line interface
//!
//! ## Example
//!
//! ```text
//! Account                                            Add        Change     Destroy
//! --------------------------------------------------------------------------------
//! payments/prod                                      0          2          1
//! payments/dev                                       3          1          0
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod plan;
pub mod report;
pub mod reporter;
pub mod summarizer;
pub mod summary;

// ============================================================================
// Re-exports
// ============================================================================

pub use cli::{Cli, OutputFormat, OutputFormatter};
pub use config::SummaryConfig;
pub use discovery::{discover, PlanArtifact};
pub use error::{ClassifyError, DecodeError, DiscoveryError, Result, SummaryError};
pub use plan::{Plan, PlanDecoder, ResourceInstanceChange};
pub use report::{ReportFormatter, SummaryReport};
pub use reporter::{RecordingReporter, Reporter, TracingReporter};
pub use summarizer::{AccountSummary, Summarizer};
pub use summary::{classify, AccountTally, Action, DriftDetector, DriftWarning, Effect};
