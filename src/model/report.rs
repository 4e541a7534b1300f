use std::fmt;

/// Summary produced by one validation pass over decoded text content.
///
/// Computed once when a file is ingested and never recomputed afterwards.
/// `errors` and `warnings` preserve first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// False exactly when no coordinate records were found.
    pub is_valid: bool,
    /// Blocking problems, in first-seen order.
    pub errors: Vec<String>,
    /// Non-blocking anomalies, in first-seen order.
    pub warnings: Vec<String>,
    /// Lines matching the coordinate record keyword.
    pub atom_count: usize,
    /// Lines matching the heteroatom record keyword.
    pub hetero_atom_count: usize,
    /// Distinct chain identifiers observed.
    pub chain_count: usize,
    /// Distinct (residue name, residue number, chain) triples observed.
    pub residue_count: usize,
}

impl ValidationReport {
    /// Report synthesized for formats that skip validation entirely.
    pub fn passthrough() -> Self {
        Self {
            is_valid: true,
            ..Self::default()
        }
    }

    /// Total number of coordinate records of either kind.
    pub fn coordinate_count(&self) -> usize {
        self.atom_count + self.hetero_atom_count
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Report {{ atoms: {}, hetero: {}, chains: {}, residues: {} }}",
            self.atom_count, self.hetero_atom_count, self.chain_count, self.residue_count
        )
    }
}
