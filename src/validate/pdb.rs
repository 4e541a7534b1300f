use std::collections::HashSet;

use smol_str::SmolStr;

use crate::model::report::ValidationReport;

/// Keyword prefix of a coordinate record.
const ATOM_RECORD: &str = "ATOM";
/// Keyword prefix of a heteroatom coordinate record.
const HETATM_RECORD: &str = "HETATM";

/// Expected minimum width of a full fixed-width coordinate record.
const FULL_RECORD_WIDTH: usize = 78;
/// Lines at least this wide carry the residue and chain columns.
const IDENTITY_COLUMNS_WIDTH: usize = 22;

/// Scans decoded text for coordinate records and summarizes its shape.
///
/// Total and deterministic: never fails, has no side effects, and running
/// it twice on identical input yields identical reports. Validity is
/// defined solely by the presence of coordinate data, not full grammar
/// conformance.
pub fn validate(content: &str) -> ValidationReport {
    let mut report = ValidationReport {
        is_valid: true,
        ..ValidationReport::default()
    };

    let mut chains: HashSet<SmolStr> = HashSet::new();
    let mut residues: HashSet<(SmolStr, SmolStr, SmolStr)> = HashSet::new();
    let mut matched_any = false;

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        let is_atom = trimmed.starts_with(ATOM_RECORD);
        let is_hetatm = trimmed.starts_with(HETATM_RECORD);
        if !is_atom && !is_hetatm {
            continue;
        }

        matched_any = true;
        if is_atom {
            report.atom_count += 1;
        } else {
            report.hetero_atom_count += 1;
        }

        // Column fields are read from the untrimmed line.
        let width = line.chars().count();
        if width >= IDENTITY_COLUMNS_WIDTH {
            let res_name = column(line, 17, 20);
            let chain_id = column(line, 21, 22);
            let res_seq = column(line, 22, 26);

            if !chain_id.is_empty() {
                chains.insert(chain_id.clone());
            }
            if !res_name.is_empty() && !res_seq.is_empty() {
                residues.insert((res_name, res_seq, chain_id));
            }
        }

        if is_atom && width < FULL_RECORD_WIDTH {
            report.warnings.push(format!(
                "line {}: coordinate record may be incomplete ({width} of {FULL_RECORD_WIDTH} columns)",
                index + 1
            ));
        }
    }

    // Two distinct no-data conditions; both fire on input without any
    // coordinate records.
    if !matched_any {
        report.is_valid = false;
        report.errors.push("no coordinate records found".to_string());
    }
    if report.coordinate_count() == 0 {
        report.is_valid = false;
        report.errors.push("no atomic coordinates found".to_string());
    }

    report.chain_count = chains.len();
    report.residue_count = residues.len();

    report
}

/// Trimmed fixed-column field of `line`, counted in characters.
fn column(line: &str, start: usize, end: usize) -> SmolStr {
    let field: String = line.chars().skip(start).take(end - start).collect();
    SmolStr::new(field.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_ATOM_LINE: &str =
        "ATOM      1  N   ALA A   1      11.104  13.207   2.600  1.00 20.00           N";
    const SHORT_ATOM_LINE: &str = "ATOM      2  CA  ALA A   1";

    #[test]
    fn validate_empty_input_reports_both_errors() {
        let report = validate("");

        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0], "no coordinate records found");
        assert_eq!(report.errors[1], "no atomic coordinates found");
        assert_eq!(report.atom_count, 0);
        assert_eq!(report.hetero_atom_count, 0);
        assert_eq!(report.chain_count, 0);
        assert_eq!(report.residue_count, 0);
    }

    #[test]
    fn validate_input_without_coordinate_lines_reports_both_errors() {
        let content = "HEADER    HYDROLASE\nREMARK   2 RESOLUTION. 1.50 ANGSTROMS\nEND\n";
        let report = validate(content);

        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.coordinate_count(), 0);
    }

    #[test]
    fn validate_counts_atom_and_hetatm_lines_separately() {
        let content = format!(
            "{FULL_ATOM_LINE}\nHETATM  901  O   HOH A 201      10.000  10.000  10.000  1.00  0.00           O\n"
        );
        let report = validate(&content);

        assert!(report.is_valid);
        assert_eq!(report.atom_count, 1);
        assert_eq!(report.hetero_atom_count, 1);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn validate_hetatm_only_input_is_valid() {
        let content =
            "HETATM    1 NA    NA A 101      10.000  10.000  10.000  1.00  0.00          NA\n";
        let report = validate(content);

        assert!(report.is_valid);
        assert_eq!(report.atom_count, 0);
        assert_eq!(report.hetero_atom_count, 1);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn validate_ignores_non_coordinate_lines() {
        let content = format!("HEADER    TEST\n{FULL_ATOM_LINE}\nTER\nEND\n");
        let report = validate(&content);

        assert_eq!(report.atom_count, 1);
        assert_eq!(report.hetero_atom_count, 0);
    }

    #[test]
    fn validate_full_width_atom_line_emits_no_warning() {
        assert!(FULL_ATOM_LINE.chars().count() >= FULL_RECORD_WIDTH);

        let report = validate(FULL_ATOM_LINE);

        assert!(report.warnings.is_empty());
    }

    #[test]
    fn validate_short_atom_line_emits_one_warning_with_line_number() {
        let content = format!("{FULL_ATOM_LINE}\n{SHORT_ATOM_LINE}\n");
        let report = validate(&content);

        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("line 2:"));
        assert!(report.warnings[0].contains("may be incomplete"));
    }

    #[test]
    fn validate_short_hetatm_line_emits_no_warning() {
        let content = "HETATM  901  O   HOH A 201";
        let report = validate(content);

        assert_eq!(report.hetero_atom_count, 1);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn validate_scenario_two_lines_one_short() {
        let content = format!("{FULL_ATOM_LINE}\n{SHORT_ATOM_LINE}");
        let report = validate(&content);

        assert!(report.is_valid);
        assert_eq!(report.atom_count, 2);
        assert_eq!(report.hetero_atom_count, 0);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("line 2:"));
        assert_eq!(report.chain_count, 1);
        assert_eq!(report.residue_count, 1);
    }

    #[test]
    fn validate_duplicate_residue_lines_accumulate_once() {
        let content = format!("{FULL_ATOM_LINE}\n{FULL_ATOM_LINE}\n{FULL_ATOM_LINE}");
        let report = validate(&content);

        assert_eq!(report.atom_count, 3);
        assert_eq!(report.chain_count, 1);
        assert_eq!(report.residue_count, 1);
    }

    #[test]
    fn validate_distinct_chains_and_residues_are_counted() {
        let content = "\
ATOM      1  N   ALA A   1      11.104  13.207   2.600  1.00 20.00           N
ATOM      2  CA  GLY A   2      12.560  13.329   2.696  1.00 20.00           C
ATOM      3  N   SER B   1       3.391   9.147   5.855  1.00 20.00           N
";
        let report = validate(content);

        assert_eq!(report.atom_count, 3);
        assert_eq!(report.chain_count, 2);
        assert_eq!(report.residue_count, 3);
    }

    #[test]
    fn validate_line_below_identity_width_skips_field_extraction() {
        let report = validate("ATOM");

        assert_eq!(report.atom_count, 1);
        assert_eq!(report.chain_count, 0);
        assert_eq!(report.residue_count, 0);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.is_valid);
    }

    #[test]
    fn validate_crlf_line_endings_are_normalized() {
        let unix = format!("{FULL_ATOM_LINE}\n{FULL_ATOM_LINE}\n");
        let dos = unix.replace('\n', "\r\n");

        assert_eq!(validate(&unix), validate(&dos));
    }

    #[test]
    fn validate_counts_lines_by_trimmed_prefix() {
        // Leading whitespace shifts the fixed columns but the record still
        // counts.
        let content = format!("   {SHORT_ATOM_LINE}");
        let report = validate(&content);

        assert_eq!(report.atom_count, 1);
    }

    #[test]
    fn validate_is_deterministic() {
        let content = format!("{FULL_ATOM_LINE}\n{SHORT_ATOM_LINE}\nEND\n");

        assert_eq!(validate(&content), validate(&content));
    }

    #[test]
    fn validate_missing_chain_is_not_counted() {
        // Chain column (21) blank: residue triple still accumulates with an
        // empty chain component.
        let line = "ATOM      1  N   ALA     1      11.104  13.207   2.600  1.00 20.00           N";
        let report = validate(line);

        assert_eq!(report.chain_count, 0);
        assert_eq!(report.residue_count, 1);
    }
}
