use std::fmt;

use thiserror::Error;

/// Per-candidate rejection. Every variant is local to one file: the caller
/// reports it and continues with its remaining candidates.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "unsupported format '{extension}' for '{name}' (accepted: {allowed_desc})",
        allowed_desc = AllowListDisplay(allowed)
    )]
    UnsupportedFormat {
        name: String,
        extension: String,
        allowed: Vec<String>,
    },

    #[error("'{name}' is {actual_bytes} bytes, over the {max_bytes} byte ceiling")]
    FileTooLarge {
        name: String,
        actual_bytes: u64,
        max_bytes: u64,
    },

    #[error("failed to decode '{name}' as UTF-8 text: {source}")]
    Decode {
        name: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl Error {
    pub fn unsupported_format(
        name: impl Into<String>,
        extension: impl Into<String>,
        allowed: &[String],
    ) -> Self {
        Self::UnsupportedFormat {
            name: name.into(),
            extension: extension.into(),
            allowed: allowed.to_vec(),
        }
    }

    pub fn file_too_large(name: impl Into<String>, actual_bytes: u64, max_bytes: u64) -> Self {
        Self::FileTooLarge {
            name: name.into(),
            actual_bytes,
            max_bytes,
        }
    }

    pub fn decode(name: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        Self::Decode {
            name: name.into(),
            source,
        }
    }
}

struct AllowListDisplay<'a>(&'a Vec<String>);

impl fmt::Display for AllowListDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", self.0.join(", "))
        }
    }
}
