//! Pluggable filesystem used by the sort pipeline.
//!
//! The real implementation delegates to `std::fs`. The virtual one keeps
//! files in memory so the full pipeline can be exercised in tests without
//! touching disk.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Read, Write};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

/// An open file handle. Reads consume content from the start; writes append.
pub trait File: Read + Write + Send {}

impl<T: Read + Write + Send> File for T {}

/// Abstraction over file creation, opening and existence checks.
pub trait Filesystem {
    /// Create the file at `path`, truncating any existing content.
    fn create(&self, path: &str) -> io::Result<Box<dyn File>>;

    /// Open the file at `path` for reading.
    fn open(&self, path: &str) -> io::Result<Box<dyn File>>;

    /// Report whether `path` exists.
    fn exists(&self, path: &str) -> bool;
}

/// Filesystem backed by the real disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFilesystem;

impl Filesystem for RealFilesystem {
    fn create(&self, path: &str) -> io::Result<Box<dyn File>> {
        Ok(Box::new(fs::File::create(path)?))
    }

    fn open(&self, path: &str) -> io::Result<Box<dyn File>> {
        Ok(Box::new(fs::File::open(path)?))
    }

    fn exists(&self, path: &str) -> bool {
        fs::metadata(path).is_ok()
    }
}

/// In-memory filesystem for tests.
#[derive(Clone, Default)]
pub struct VirtualFilesystem {
    files: Arc<RwLock<HashMap<String, Arc<Mutex<VirtualBuffer>>>>>,
}

#[derive(Default)]
struct VirtualBuffer {
    data: Vec<u8>,
    read_pos: usize,
}

impl VirtualFilesystem {
    /// Create an empty in-memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Filesystem for VirtualFilesystem {
    fn create(&self, path: &str) -> io::Result<Box<dyn File>> {
        // std::fs::File::create truncates existing files, so we do too.
        let buf = Arc::new(Mutex::new(VirtualBuffer::default()));
        self.files.write().insert(path.to_string(), Arc::clone(&buf));
        Ok(Box::new(VirtualFile { buf }))
    }

    fn open(&self, path: &str) -> io::Result<Box<dyn File>> {
        match self.files.read().get(path) {
            Some(buf) => Ok(Box::new(VirtualFile {
                buf: Arc::clone(buf),
            })),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such virtual file: {path}"),
            )),
        }
    }

    fn exists(&self, path: &str) -> bool {
        self.files.read().contains_key(path)
    }
}

/// Handle to a virtual file; handles opened on the same path share content.
pub struct VirtualFile {
    buf: Arc<Mutex<VirtualBuffer>>,
}

impl Read for VirtualFile {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let mut buf = self.buf.lock();
        let pos = buf.read_pos;
        let n = buf.data.len().saturating_sub(pos).min(out.len());
        out[..n].copy_from_slice(&buf.data[pos..pos + n]);
        buf.read_pos = pos + n;
        Ok(n)
    }
}

impl Write for VirtualFile {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().data.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
