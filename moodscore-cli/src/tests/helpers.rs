//! Test helpers for staging input files and capturing CLI output.

use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;

/// Temporary directory holding input files for a single test.
#[derive(Debug)]
pub(super) struct InputFiles {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl InputFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        fs::write(path.as_std_path(), contents).expect("write input file");
        path
    }

    pub(super) fn missing(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn utf8_output(buffer: &[u8]) -> String {
    String::from_utf8(buffer.to_vec()).expect("stdout utf-8")
}
