//! Errors that can occur while collecting species names from a system.

use groan_rs::errors::{AtomError, GroupError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    /// The engine rejected or failed to evaluate a selection query.
    #[error("failed to evaluate selection '{query}'")]
    Selection {
        query: String,
        #[source]
        source: GroupError,
    },

    /// Walking the bond graph starting from a matched atom failed.
    #[error("failed to walk the molecule containing atom {index}")]
    Molecule {
        index: usize,
        #[source]
        source: AtomError,
    },

    #[error("no water residues found in the system")]
    NoWater,

    #[error("found more than one water model in use, residue names were: {}", .0.join(", "))]
    MultipleWaterModels(Vec<String>),

    #[error("no water oxygen atoms found in the system")]
    NoWaterOxygen,

    #[error("found more than one water oxygen name, names were: {}", .0.join(", "))]
    MultipleWaterOxygens(Vec<String>),
}
