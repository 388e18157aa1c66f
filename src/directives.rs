//! Renders collected species names as sed substitution expressions.

use std::collections::BTreeSet;

use crate::species::SpeciesNames;

/// Formats the full directive string in the fixed order LIPID, ION,
/// WATER, WATRES, WATERO.
///
/// The result is a sequence of `-e "s/(X)/Y/g" ` tokens, each with a
/// trailing space, ready to be passed as arguments to a stream editor.
/// Residue sets render as `(:A|:B)` alternations; the water residue and
/// oxygen names additionally render bare for use outside mask syntax.
pub fn sed_directives(names: &SpeciesNames) -> String {
    let mut out = String::new();
    out.push_str(&sed_expr("LIPID", &alternation(&names.lipids)));
    out.push_str(&sed_expr("ION", &alternation(&names.ions)));
    out.push_str(&sed_expr("WATER", &format!("(:{})", names.water)));
    out.push_str(&sed_expr("WATRES", &names.water));
    out.push_str(&sed_expr("WATERO", &names.water_oxygen));
    out
}

fn sed_expr(placeholder: &str, replacement: &str) -> String {
    format!("-e \"s/({placeholder})/{replacement}/g\" ")
}

fn alternation(names: &BTreeSet<String>) -> String {
    let joined = names
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("|:");
    format!("(:{joined})")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(lipids: &[&str], ions: &[&str], water: &str, oxygen: &str) -> SpeciesNames {
        SpeciesNames {
            lipids: lipids.iter().map(|s| s.to_string()).collect(),
            ions: ions.iter().map(|s| s.to_string()).collect(),
            water: water.to_owned(),
            water_oxygen: oxygen.to_owned(),
        }
    }

    #[test]
    fn single_lipid_token() {
        let out = sed_directives(&names(&["POPC"], &[], "WAT", "O"));
        assert!(out.starts_with("-e \"s/(LIPID)/(:POPC)/g\" "));
    }

    #[test]
    fn ion_set_is_sorted_alternation() {
        let out = sed_directives(&names(&[], &["NA", "CL"], "WAT", "O"));
        assert!(out.contains("-e \"s/(ION)/(:CL|:NA)/g\" "));
    }

    #[test]
    fn water_tokens() {
        let out = sed_directives(&names(&["POPC"], &["NA"], "WAT", "O"));
        assert!(out.contains("-e \"s/(WATER)/(:WAT)/g\" "));
        assert!(out.contains("-e \"s/(WATRES)/WAT/g\" "));
        assert!(out.contains("-e \"s/(WATERO)/O/g\" "));
    }

    #[test]
    fn empty_sets_render_as_empty_alternation() {
        let out = sed_directives(&names(&[], &[], "WAT", "O"));
        assert!(out.starts_with("-e \"s/(LIPID)/(:)/g\" -e \"s/(ION)/(:)/g\" "));
    }

    #[test]
    fn full_directive_order() {
        let out = sed_directives(&names(&["POPC", "POPE"], &["CL", "NA"], "SOL", "OW"));
        assert_eq!(
            out,
            "-e \"s/(LIPID)/(:POPC|:POPE)/g\" \
             -e \"s/(ION)/(:CL|:NA)/g\" \
             -e \"s/(WATER)/(:SOL)/g\" \
             -e \"s/(WATRES)/SOL/g\" \
             -e \"s/(WATERO)/OW/g\" "
        );
    }
}
