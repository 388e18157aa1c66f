use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use groan_rs::files::FileType;
use groan_rs::system::System;
use log::info;

use maskgen::directives::sed_directives;
use maskgen::species::SpeciesNames;

/// Reads a molecular topology and prints sed expressions that replace
/// the LIPID, ION, WATER, WATRES and WATERO placeholders in skeleton
/// input files with the residue and atom names actually present in the
/// system.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Topology file (tpr, gro, pdb or pqr)
    topology: PathBuf,

    /// Input format; guessed from the file extension if not given
    #[arg(short, long, value_enum)]
    format: Option<Format>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Tpr,
    Gro,
    Pdb,
    Pqr,
}

impl From<Format> for FileType {
    fn from(format: Format) -> FileType {
        match format {
            Format::Tpr => FileType::TPR,
            Format::Gro => FileType::GRO,
            Format::Pdb => FileType::PDB,
            Format::Pqr => FileType::PQR,
        }
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .format_timestamp(None)
        .format_indent(Some(8))
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let mut system = match cli.format {
        Some(format) => System::from_file_with_format(&cli.topology, format.into()),
        None => System::from_file(&cli.topology),
    }
    .map_err(anyhow::Error::from_boxed)
    .with_context(|| format!("loading topology from '{}'", cli.topology.display()))?;

    info!(
        "Loaded {} atoms from '{}'",
        system.get_n_atoms(),
        cli.topology.display()
    );

    let names = SpeciesNames::from_system(&mut system)?;

    // Everything on stdout belongs to the directive string; logging
    // goes to stderr.
    println!("{}", sed_directives(&names));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn missing_topology_argument_is_a_usage_error() {
        let err = Cli::try_parse_from(["maskgen"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn extra_positional_arguments_are_a_usage_error() {
        let err = Cli::try_parse_from(["maskgen", "a.gro", "b.gro"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert!(err.to_string().contains("Usage"));
    }
}
