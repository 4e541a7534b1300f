use log::info;
use thiserror::Error;

use crate::ingest::Candidate;

/// Expected length of a structure-database identifier.
pub const STRUCTURE_ID_LEN: usize = 4;

const DOWNLOAD_BASE: &str = "https://files.rcsb.org/download";

/// Remote retrieval failure. Surfaced to the caller immediately; no retry
/// is attempted and concurrent identical fetches are not de-duplicated.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid structure identifier '{id}': expected exactly 4 alphanumeric characters")]
    InvalidId { id: String },

    #[error("failed to fetch '{target}': {source}")]
    Transport {
        target: String,
        #[source]
        source: Box<ureq::Error>,
    },
}

impl Error {
    fn transport(target: impl Into<String>, source: ureq::Error) -> Self {
        Self::Transport {
            target: target.into(),
            source: Box::new(source),
        }
    }
}

/// Downloads a structure by its 4-character database identifier.
///
/// The identifier is checked before any network call is made.
pub fn fetch_structure(id: &str) -> Result<Candidate, Error> {
    let id = id.trim();
    let well_formed =
        id.len() == STRUCTURE_ID_LEN && id.chars().all(|c| c.is_ascii_alphanumeric());
    if !well_formed {
        return Err(Error::InvalidId { id: id.to_string() });
    }

    let name = format!("{}.pdb", id.to_ascii_uppercase());
    let url = format!("{DOWNLOAD_BASE}/{name}");
    info!("downloading {name} from {DOWNLOAD_BASE}");
    let bytes = download(&url)?;
    Ok(Candidate::new(name, bytes))
}

/// Downloads a candidate from an arbitrary URL.
pub fn fetch_url(url: &str) -> Result<Candidate, Error> {
    let name = name_from_url(url);
    info!("downloading '{name}' from {url}");
    let bytes = download(url)?;
    Ok(Candidate::new(name, bytes))
}

fn download(url: &str) -> Result<Vec<u8>, Error> {
    let response = ureq::get(url)
        .call()
        .map_err(|source| Error::transport(url, source))?;
    response
        .into_body()
        .read_to_vec()
        .map_err(|source| Error::transport(url, source))
}

/// Filename for a downloaded candidate: the last path segment of the URL
/// with any query or fragment stripped.
fn name_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.rsplit('/').next().unwrap_or("");
    if segment.is_empty() {
        "download".to_string()
    } else {
        segment.to_string()
    }
}
