use {
    std::{
        io::{Error, ErrorKind},
        path::PathBuf,
    },
    thiserror::Error,
};

/// Errors which abort decoding of a scene.
///
/// There is no partial output: once any of these is returned the stream position is no longer
/// trustworthy and every object read so far is dropped.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The scene source could not be opened; decoding never started.
    #[error("unable to open {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: Error,
    },

    /// A field required more bytes than remained in the stream.
    #[error("truncated or corrupt stream at offset {offset}")]
    Truncated { offset: u64 },

    /// A chunk declared a length smaller than its own header.
    #[error("malformed chunk 0x{tag:04X} at offset {offset}: length {length} is smaller than the header")]
    MalformedChunk { tag: u16, length: u32, offset: u64 },

    /// Any other stream failure.
    #[error(transparent)]
    Io(#[from] Error),
}

impl DecodeError {
    /// Classifies a stream error: short reads are `Truncated`, everything else is passed through.
    pub(crate) fn from_io(err: Error, offset: u64) -> Self {
        match err.kind() {
            ErrorKind::UnexpectedEof => Self::Truncated { offset },
            _ => Self::Io(err),
        }
    }

    /// Returns `true` for `Truncated` errors.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}

pub type DecodeResult<T> = Result<T, DecodeError>;
