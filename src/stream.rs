use {
    crate::error::{DecodeError, DecodeResult},
    log::trace,
    std::{
        fmt::Debug,
        fs::File,
        io::{BufReader, Cursor, Read, Result, Seek, SeekFrom},
        path::{Path, PathBuf},
    },
};

/// A forward-readable, seekable source of scene bytes.
pub trait Stream: Debug + Read + Seek + Send {}

impl<T> Stream for Cursor<T> where T: AsRef<[u8]> + Debug + Send {}

impl Stream for SceneFile {}

impl<T> Stream for &mut T where T: Stream + ?Sized {}

/// A buffered scene file on disk.
#[derive(Debug)]
pub struct SceneFile {
    buf: BufReader<File>,
    path: PathBuf,
}

impl SceneFile {
    /// Opens the given path for reading.
    ///
    /// Any failure here (missing file, permissions) is reported as
    /// [`DecodeError::SourceUnavailable`].
    pub fn open(path: impl AsRef<Path>) -> DecodeResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| DecodeError::SourceUnavailable {
            path: path.clone(),
            source,
        })?;
        let buf = BufReader::new(file);

        trace!("Opened {}", path.display());

        Ok(Self { buf, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Read for SceneFile {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.buf.read(buf)
    }
}

impl Seek for SceneFile {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        self.buf.seek(pos)
    }

    // The default implementation seeks, which would throw away the read buffer on every field
    fn stream_position(&mut self) -> Result<u64> {
        self.buf.stream_position()
    }
}

/// Returns the total length of the stream in bytes and rewinds it to the start.
pub fn stream_len(stream: &mut (impl Seek + ?Sized)) -> Result<u64> {
    let len = stream.seek(SeekFrom::End(0))?;
    stream.seek(SeekFrom::Start(0))?;

    Ok(len)
}
