use crate::ingest::{BatchOutcome, Candidate, Error as IngestError, IngestConfig, Ingestor};
use crate::measure::MeasureMode;
use crate::model::record::FileRecord;
use crate::model::types::{FileFormat, RecordId};
use crate::registry::FileRegistry;

/// Viewer motion state. Spinning and rocking are mutually exclusive by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionMode {
    #[default]
    Idle,
    Spinning,
    Rocking,
}

impl MotionMode {
    /// Spin toggles off when already active, otherwise replaces the
    /// current mode.
    pub fn toggle_spin(self) -> Self {
        match self {
            Self::Spinning => Self::Idle,
            _ => Self::Spinning,
        }
    }

    pub fn toggle_rock(self) -> Self {
        match self {
            Self::Rocking => Self::Idle,
            _ => Self::Rocking,
        }
    }
}

/// Validated content handed to the external rendering service, which owns
/// all geometric interpretation and display styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest<'a> {
    pub content: &'a str,
    pub format: FileFormat,
}

/// Explicitly constructed, explicitly owned context for one viewer
/// session: the registry, the ingestion pipeline, and the interaction
/// modes. There is no ambient global instance.
#[derive(Debug)]
pub struct Session {
    registry: FileRegistry,
    ingestor: Ingestor,
    motion: MotionMode,
    measure: MeasureMode,
}

impl Session {
    pub fn new(config: IngestConfig) -> Self {
        Self {
            registry: FileRegistry::new(),
            ingestor: Ingestor::new(config),
            motion: MotionMode::default(),
            measure: MeasureMode::default(),
        }
    }

    pub fn registry(&self) -> &FileRegistry {
        &self.registry
    }

    pub fn ingest(&mut self, candidate: Candidate) -> Result<RecordId, IngestError> {
        self.ingestor.ingest(&mut self.registry, candidate)
    }

    pub fn ingest_batch(&mut self, candidates: Vec<Candidate>) -> BatchOutcome {
        self.ingestor.ingest_batch(&mut self.registry, candidates)
    }

    /// User-initiated single-record removal; an absent id is a no-op.
    pub fn remove(&mut self, id: RecordId) -> Option<FileRecord> {
        self.registry.remove(id)
    }

    pub fn clear(&mut self) {
        self.registry.clear();
    }

    /// Hand-off for the rendering service. Only text-format records are
    /// renderable; binary passthrough content and unknown ids yield `None`.
    pub fn render_request(&self, id: RecordId) -> Option<RenderRequest<'_>> {
        let record = self.registry.find_by_id(id)?;
        let content = record.content.as_text()?;
        Some(RenderRequest {
            content,
            format: record.format,
        })
    }

    pub fn motion(&self) -> MotionMode {
        self.motion
    }

    pub fn toggle_spin(&mut self) {
        self.motion = self.motion.toggle_spin();
    }

    pub fn toggle_rock(&mut self) {
        self.motion = self.motion.toggle_rock();
    }

    pub fn measure(&self) -> &MeasureMode {
        &self.measure
    }

    pub fn measure_mut(&mut self) -> &mut MeasureMode {
        &mut self.measure
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(IngestConfig::default())
    }
}
