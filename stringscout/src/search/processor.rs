use memmap2::Mmap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::{trace, warn};

use super::engine::scan_lines;
use super::finder::Finder;
use crate::errors::{ScoutError, ScoutResult};
use crate::results::FileResult;

const READ_BUFFER_BYTES: usize = 64 * 1024;
pub(crate) const SMALL_FILE_THRESHOLD: u64 = 32 * 1024;
pub(crate) const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

/// How a file's bytes are brought into memory before scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReadPath {
    /// One `fs::read` call
    Whole,
    /// A `BufReader` drained into a buffer
    Buffered,
    /// A read-only memory map
    Mapped,
}

impl ReadPath {
    /// Unknown sizes take the buffered path, which works for any file
    pub(crate) fn for_size(size: Option<u64>) -> Self {
        match size {
            Some(size) if size < SMALL_FILE_THRESHOLD => ReadPath::Whole,
            Some(size) if size >= LARGE_FILE_THRESHOLD => ReadPath::Mapped,
            _ => ReadPath::Buffered,
        }
    }
}

fn decode<'a>(bytes: &'a [u8], path: &Path) -> ScoutResult<&'a str> {
    std::str::from_utf8(bytes).map_err(|e| ScoutError::encoding_error(path, e))
}

/// Reads inputs and hands their lines to a finder
#[derive(Debug)]
pub struct FileProcessor {
    finder: Finder,
    thread_count: NonZeroUsize,
}

impl FileProcessor {
    pub fn new(finder: Finder, thread_count: NonZeroUsize) -> Self {
        Self {
            finder,
            thread_count,
        }
    }

    pub fn finder(&self) -> &Finder {
        &self.finder
    }

    fn scan_contents(&self, contents: &str, path: Option<&Path>) -> FileResult {
        FileResult {
            path: path.map(Path::to_path_buf),
            lines_scanned: contents.lines().count(),
            matches: scan_lines(contents, &self.finder, self.thread_count),
        }
    }

    /// Scans one file, choosing how to read it from its size
    pub fn process_file(&self, path: &Path) -> ScoutResult<FileResult> {
        let size = match path.metadata() {
            Ok(metadata) => Some(metadata.len()),
            Err(e) => {
                warn!("Could not stat {}: {}", path.display(), e);
                None
            }
        };

        let read_path = ReadPath::for_size(size);
        trace!("Reading {} via {:?}", path.display(), read_path);

        match read_path {
            ReadPath::Whole => {
                let bytes = std::fs::read(path).map_err(|e| ScoutError::from_io(e, path))?;
                Ok(self.scan_contents(decode(&bytes, path)?, Some(path)))
            }
            ReadPath::Buffered => {
                let file = File::open(path).map_err(|e| ScoutError::from_io(e, path))?;
                let mut bytes = Vec::with_capacity(size.unwrap_or(0) as usize);
                BufReader::with_capacity(READ_BUFFER_BYTES, file).read_to_end(&mut bytes)?;
                Ok(self.scan_contents(decode(&bytes, path)?, Some(path)))
            }
            ReadPath::Mapped => {
                let file = File::open(path).map_err(|e| ScoutError::from_io(e, path))?;
                // SAFETY: the map is read-only and dropped before this call returns;
                // concurrent truncation by another process is outside our control.
                let mmap = unsafe { Mmap::map(&file) }?;
                Ok(self.scan_contents(decode(&mmap, path)?, Some(path)))
            }
        }
    }

    /// Scans everything readable from `reader`, such as standard input
    pub fn process_reader(&self, mut reader: impl Read) -> ScoutResult<FileResult> {
        trace!("Reading unnamed input");

        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let contents = decode(&bytes, Path::new("<stdin>"))?;
        Ok(self.scan_contents(contents, None))
    }
}
