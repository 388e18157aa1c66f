//! Collects the residue and atom names of the lipid, ion and water
//! species present in a loaded system.

use std::collections::{BTreeSet, HashSet};

use groan_rs::errors::GroupError;
use groan_rs::structures::element::Elements;
use groan_rs::system::System;
use log::{debug, warn};

use crate::errors::ExtractError;

// For some force fields only the lipid head group is recognized by the
// membrane macro, so lipid matches are expanded over the bond graph to
// recover the whole molecules including the tails.
const LIPID_QUERY: &str = "@membrane";
const ION_QUERY: &str = "@ion";
const WATER_QUERY: &str = "@water";
const WATER_OXYGEN_QUERY: &str = "@water and element name oxygen";

const LIPID_GROUP: &str = "maskgen-lipid";
const ION_GROUP: &str = "maskgen-ion";
const WATER_GROUP: &str = "maskgen-water";
const WATER_OXYGEN_GROUP: &str = "maskgen-water-oxygen";

/// Validated naming of the species in one system.
///
/// Lipid and ion sets are sorted and may be empty; water is required to
/// resolve to exactly one residue name and one oxygen atom name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesNames {
    pub lipids: BTreeSet<String>,
    pub ions: BTreeSet<String>,
    pub water: String,
    pub water_oxygen: String,
}

impl SpeciesNames {
    /// Runs the four selection queries against the system and validates
    /// the cardinality of the water results.
    pub fn from_system(system: &mut System) -> Result<Self, ExtractError> {
        // The water-oxygen query needs elements; gro and pdb inputs
        // carry none, so assign them from atom names. An incomplete
        // guess only matters if it hits the water atoms themselves.
        if let Err(e) = system.guess_elements(Elements::default()) {
            warn!("Incomplete element assignment: {}", e);
        }

        create_group(system, LIPID_GROUP, LIPID_QUERY)?;
        create_group(system, ION_GROUP, ION_QUERY)?;
        create_group(system, WATER_GROUP, WATER_QUERY)?;
        create_group(system, WATER_OXYGEN_GROUP, WATER_OXYGEN_QUERY)?;

        let lipids = lipid_resnames(system)?;
        if lipids.is_empty() {
            warn!("No lipid residues found in the system");
        }
        debug!("Lipid residue names: {:?}", lipids);

        let ions = group_resnames(system, ION_GROUP, ION_QUERY)?;
        if ions.is_empty() {
            warn!("No ion residues found in the system");
        }
        debug!("Ion residue names: {:?}", ions);

        let water = single(
            group_resnames(system, WATER_GROUP, WATER_QUERY)?,
            ExtractError::NoWater,
            ExtractError::MultipleWaterModels,
        )?;
        debug!("Water residue name: {}", water);

        let water_oxygen = single(
            group_atom_names(system, WATER_OXYGEN_GROUP, WATER_OXYGEN_QUERY)?,
            ExtractError::NoWaterOxygen,
            ExtractError::MultipleWaterOxygens,
        )?;
        debug!("Water oxygen atom name: {}", water_oxygen);

        Ok(Self {
            lipids,
            ions,
            water,
            water_oxygen,
        })
    }
}

/// Creates a group from a query, treating an overwrite warning as success.
fn create_group(system: &mut System, name: &str, query: &str) -> Result<(), ExtractError> {
    match system.group_create(name, query) {
        Ok(_) | Err(GroupError::AlreadyExistsWarning(_)) => Ok(()),
        Err(e) => Err(ExtractError::Selection {
            query: query.to_owned(),
            source: e,
        }),
    }
}

/// Residue names of the lipid matches, expanded to whole molecules.
///
/// On inputs without connectivity every atom forms its own molecule, so
/// the expansion degrades to the direct matches.
fn lipid_resnames(system: &System) -> Result<BTreeSet<String>, ExtractError> {
    let heads: Vec<usize> = system
        .group_iter(LIPID_GROUP)
        .map_err(|e| ExtractError::Selection {
            query: LIPID_QUERY.to_owned(),
            source: e,
        })?
        .map(|atom| atom.get_atom_number() - 1)
        .collect();

    let mut names = BTreeSet::new();
    let mut visited = HashSet::new();
    for index in heads {
        if !visited.insert(index) {
            continue;
        }
        let molecule = system
            .molecule_iter(index)
            .map_err(|e| ExtractError::Molecule { index, source: e })?;
        for member in molecule {
            visited.insert(member.get_atom_number() - 1);
            names.insert(member.get_residue_name().to_owned());
        }
    }
    Ok(names)
}

fn group_resnames(
    system: &System,
    group: &str,
    query: &str,
) -> Result<BTreeSet<String>, ExtractError> {
    Ok(system
        .group_iter(group)
        .map_err(|e| ExtractError::Selection {
            query: query.to_owned(),
            source: e,
        })?
        .map(|atom| atom.get_residue_name().to_owned())
        .collect())
}

fn group_atom_names(
    system: &System,
    group: &str,
    query: &str,
) -> Result<BTreeSet<String>, ExtractError> {
    Ok(system
        .group_iter(group)
        .map_err(|e| ExtractError::Selection {
            query: query.to_owned(),
            source: e,
        })?
        .map(|atom| atom.get_atom_name().to_owned())
        .collect())
}

/// Reduces a name set to its single element.
fn single(
    mut names: BTreeSet<String>,
    on_empty: ExtractError,
    on_many: fn(Vec<String>) -> ExtractError,
) -> Result<String, ExtractError> {
    if names.len() > 1 {
        return Err(on_many(names.into_iter().collect()));
    }
    names.pop_first().ok_or(on_empty)
}
