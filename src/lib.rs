//! # MolShelf
//!
//! **MolShelf** is the ingestion core of a molecular structure viewer: it accepts candidate structure files from local selection, drag-drop batches, or remote fetch, gates them by format and size, validates PDB-formatted text line by line, and keeps the resulting immutable records in an insertion-ordered session registry for a display layer to read and a rendering service to consume.
//!
//! ## Features
//!
//! - **Line-oriented validation** – A total, deterministic scan over coordinate records produces per-file reports with atom/heteroatom counts, chain and residue cardinalities, and ordered error/warning diagnostics.
//! - **Gated ingestion** – An extension allow-list and a size ceiling reject unsupported candidates before any decoding; one file's rejection never aborts its siblings in a batch.
//! - **Session registry** – Insertion-ordered, id-keyed records under a single owner; removal and clear are the only mutations after creation.
//! - **Remote retrieval** – Structures arrive by 4-character database identifier (validated before any network call) or arbitrary URL.
//! - **Viewer hand-off** – Explicit motion and measurement state machines and a narrow `RenderRequest` boundary toward the external rendering service, with geometry backed by `nalgebra`.

mod model;
mod registry;

pub mod fetch;
pub mod ingest;
pub mod measure;
pub mod session;
pub mod validate;

pub use model::record::{FileContent, FileRecord};
pub use model::report::ValidationReport;
pub use model::types::{FileFormat, FileStatus, RecordId};
pub use registry::FileRegistry;
