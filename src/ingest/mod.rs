mod error;

pub use error::Error;

use chrono::Utc;
use log::{debug, warn};
use serde::Deserialize;

use crate::model::record::{FileContent, FileRecord};
use crate::model::report::ValidationReport;
use crate::model::types::{FileFormat, RecordId, extension_of};
use crate::registry::FileRegistry;
use crate::validate;

/// Default ingestion ceiling: 50 MiB.
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 50 * 1024 * 1024;

fn default_allowed_extensions() -> Vec<String> {
    ["pdb", "ent", "cif", "mmcif", "mol2", "bcif"]
        .iter()
        .map(|ext| (*ext).to_string())
        .collect()
}

const fn default_max_size_bytes() -> u64 {
    DEFAULT_MAX_SIZE_BYTES
}

/// Gate policy applied to every candidate before it reaches the validator.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngestConfig {
    /// Lowercase filename extensions accepted for ingestion.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    /// Hard size ceiling, checked before any decoding.
    #[serde(default = "default_max_size_bytes")]
    pub max_size_bytes: u64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: default_allowed_extensions(),
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
        }
    }
}

impl IngestConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed == extension)
    }
}

/// A raw file candidate: name, declared size, and undecoded payload.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub name: String,
    pub size_bytes: u64,
    pub bytes: Vec<u8>,
}

impl Candidate {
    /// Candidate whose declared size is the payload length.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let size_bytes = bytes.len() as u64;
        Self {
            name: name.into(),
            size_bytes,
            bytes,
        }
    }

    /// Candidate with a size declared ahead of the payload, as drag-drop
    /// metadata arrives before the bytes are read.
    pub fn with_declared_size(name: impl Into<String>, size_bytes: u64, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            bytes,
        }
    }
}

/// Allocates registry-unique record ids: seeded randomly once, then
/// incrementing.
#[derive(Debug)]
struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self {
            next: rand::random(),
        }
    }

    fn allocate(&mut self) -> RecordId {
        let id = RecordId::from_raw(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Runs candidates through the gate, decode, validate, register pipeline.
///
/// The only creation path for [`FileRecord`]s.
#[derive(Debug)]
pub struct Ingestor {
    config: IngestConfig,
    ids: IdAllocator,
}

impl Ingestor {
    pub fn new(config: IngestConfig) -> Self {
        Self {
            config,
            ids: IdAllocator::new(),
        }
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Ingests one candidate, appending the resulting record to `registry`.
    ///
    /// Rejections are local to the candidate: the registry is untouched and
    /// the caller continues with its remaining candidates. A file whose
    /// validation finds no coordinate data is still registered, with status
    /// `Warning`.
    pub fn ingest(
        &mut self,
        registry: &mut FileRegistry,
        candidate: Candidate,
    ) -> Result<RecordId, Error> {
        let Candidate {
            name,
            size_bytes,
            bytes,
        } = candidate;

        let extension = extension_of(&name);
        if !self.config.accepts_extension(&extension) {
            warn!("rejecting '{name}': extension '{extension}' is not accepted");
            return Err(Error::unsupported_format(
                name,
                extension,
                &self.config.allowed_extensions,
            ));
        }

        if size_bytes > self.config.max_size_bytes {
            warn!(
                "rejecting '{name}': {size_bytes} bytes over the {} byte ceiling",
                self.config.max_size_bytes
            );
            return Err(Error::file_too_large(
                name,
                size_bytes,
                self.config.max_size_bytes,
            ));
        }

        let format = FileFormat::from_name(&name);
        let (content, report) = if format.is_text() {
            let text = match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(source) => return Err(Error::decode(name, source)),
            };
            let report = validate::validate(&text);
            if !report.is_valid {
                warn!(
                    "'{name}' registered with warnings: {}",
                    report.errors.join("; ")
                );
            }
            (FileContent::Text(text), report)
        } else {
            (FileContent::Binary(bytes), ValidationReport::passthrough())
        };

        let id = self.ids.allocate();
        debug!(
            "registered '{name}' as {id} ({format}, {} coordinate records)",
            report.coordinate_count()
        );
        registry.add(FileRecord {
            id,
            name,
            size_bytes,
            format,
            content,
            report,
            uploaded_at: Utc::now(),
        });
        Ok(id)
    }

    /// Ingests a batch. Every candidate is gated and processed
    /// independently, in input order; one file's failure never blocks its
    /// siblings.
    pub fn ingest_batch(
        &mut self,
        registry: &mut FileRegistry,
        candidates: Vec<Candidate>,
    ) -> BatchOutcome {
        let outcomes = candidates
            .into_iter()
            .map(|candidate| {
                let name = candidate.name.clone();
                let result = self.ingest(registry, candidate);
                FileOutcome { name, result }
            })
            .collect();
        BatchOutcome { outcomes }
    }
}

/// Outcome for one candidate of a batch.
#[derive(Debug)]
pub struct FileOutcome {
    pub name: String,
    pub result: Result<RecordId, Error>,
}

/// Per-file results for one batch, in input order.
#[derive(Debug)]
pub struct BatchOutcome {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchOutcome {
    pub fn accepted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.is_ok())
            .count()
    }

    pub fn rejected(&self) -> usize {
        self.outcomes.len() - self.accepted()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// One-line aggregate, covering the empty and fully-rejected cases.
    pub fn summary(&self) -> String {
        if self.outcomes.is_empty() {
            return "no candidates were supplied".to_string();
        }
        let accepted = self.accepted();
        if accepted == 0 {
            format!("no files were ingested ({} rejected)", self.outcomes.len())
        } else {
            format!("ingested {accepted} of {} files", self.outcomes.len())
        }
    }
}
