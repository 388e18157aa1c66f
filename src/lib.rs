//! Extracts lipid, ion and water naming from a molecular topology and
//! renders it as sed substitution commands for patching skeleton MD
//! input files.
//!
//! All structural parsing, connectivity analysis and selection-language
//! evaluation is delegated to the [`groan_rs`] engine. This crate only
//! runs four fixed queries, checks that a single water model is present
//! and formats the answers.

pub mod directives;
pub mod errors;
pub mod species;

pub use directives::sed_directives;
pub use errors::ExtractError;
pub use species::SpeciesNames;
