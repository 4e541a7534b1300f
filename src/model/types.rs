use std::fmt;
use std::path::Path;

/// Structure-file formats the pipeline recognizes by filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Legacy PDB format.
    Pdb,
    /// mmCIF format.
    Cif,
    /// Tripos MOL2 format.
    Mol2,
    /// Extension not mapped to a text format; content passes through as
    /// opaque bytes and skips validation.
    Unknown,
}

impl FileFormat {
    /// Infers a format from a filename's extension.
    pub fn from_name(name: &str) -> Self {
        match extension_of(name).as_str() {
            "pdb" | "ent" => Self::Pdb,
            "cif" | "mmcif" => Self::Cif,
            "mol2" => Self::Mol2,
            _ => Self::Unknown,
        }
    }

    /// Text formats are decoded and validated; everything else is binary
    /// passthrough.
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Pdb => write!(f, "PDB"),
            FileFormat::Cif => write!(f, "mmCIF"),
            FileFormat::Mol2 => write!(f, "MOL2"),
            FileFormat::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Lowercase filename extension, or an empty string when there is none.
pub fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Display state of a registered file, derived from its validation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Usable coordinate data was found.
    Valid,
    /// Registered, but validation found no usable coordinate data.
    Warning,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStatus::Valid => write!(f, "Valid"),
            FileStatus::Warning => write!(f, "Warning"),
        }
    }
}

/// Opaque identifier assigned to a record at creation, stable for the
/// record's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl RecordId {
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_name_maps_pdb_extensions() {
        assert_eq!(FileFormat::from_name("1abc.pdb"), FileFormat::Pdb);
        assert_eq!(FileFormat::from_name("pdb1abc.ent"), FileFormat::Pdb);
    }

    #[test]
    fn format_from_name_maps_cif_extensions() {
        assert_eq!(FileFormat::from_name("1abc.cif"), FileFormat::Cif);
        assert_eq!(FileFormat::from_name("1abc.mmcif"), FileFormat::Cif);
    }

    #[test]
    fn format_from_name_maps_mol2_extension() {
        assert_eq!(FileFormat::from_name("ligand.mol2"), FileFormat::Mol2);
    }

    #[test]
    fn format_from_name_is_case_insensitive() {
        assert_eq!(FileFormat::from_name("1ABC.PDB"), FileFormat::Pdb);
        assert_eq!(FileFormat::from_name("1abc.Cif"), FileFormat::Cif);
    }

    #[test]
    fn format_from_name_returns_unknown_for_unmapped_extensions() {
        assert_eq!(FileFormat::from_name("notes.txt"), FileFormat::Unknown);
        assert_eq!(FileFormat::from_name("1abc.bcif"), FileFormat::Unknown);
        assert_eq!(FileFormat::from_name("no_extension"), FileFormat::Unknown);
    }

    #[test]
    fn format_is_text_excludes_unknown() {
        assert!(FileFormat::Pdb.is_text());
        assert!(FileFormat::Cif.is_text());
        assert!(FileFormat::Mol2.is_text());
        assert!(!FileFormat::Unknown.is_text());
    }

    #[test]
    fn format_display_uses_conventional_names() {
        assert_eq!(FileFormat::Pdb.to_string(), "PDB");
        assert_eq!(FileFormat::Cif.to_string(), "mmCIF");
        assert_eq!(FileFormat::Mol2.to_string(), "MOL2");
        assert_eq!(FileFormat::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn extension_of_lowercases_and_strips_path() {
        assert_eq!(extension_of("dir/1ABC.PDB"), "pdb");
        assert_eq!(extension_of("structure.tar.mol2"), "mol2");
    }

    #[test]
    fn extension_of_returns_empty_when_absent() {
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(""), "");
    }

    #[test]
    fn record_id_display_is_fixed_width_hex() {
        let id = RecordId::from_raw(0x2a);
        assert_eq!(id.to_string(), "000000000000002a");
    }

    #[test]
    fn record_ids_compare_by_raw_value() {
        assert_eq!(RecordId::from_raw(7), RecordId::from_raw(7));
        assert!(RecordId::from_raw(1) < RecordId::from_raw(2));
    }
}
