use std::fs;
use std::fs::create_dir_all;
use std::path::Path as StdPath;
use std::path::PathBuf;

use tempdir::TempDir;

use crate::Entry;
use crate::Error;
use crate::Listing;

// Relative paths, file sizes and whether the path is a directory. Everything
// lives below the "served" directory.
pub(crate) static TEMP_FILES: &[(&str, usize, bool)] = &[
    ("zeta", 0, true),
    ("alpha", 0, true),
    ("alpha/nested.txt", 10, false),
    ("b.txt", 1536, false),
    ("a.txt", 1, false),
    ("empty.txt", 0, false),
    ("Upper.md", 2048, false),
];

const SERVED: &str = "served";

/// A temporary directory tree to list in tests.
///
/// The listed directory is `<tmp>/served`, so its parent is the temporary
/// root itself.
#[derive(Debug)]
pub struct TestRoot {
    /// Root of the temporary test directory.
    pub root: TempDir,
}

impl TestRoot {
    /// Creates the temporary tree described by `TEMP_FILES`.
    pub fn new() -> Result<Self, Error> {
        let root = TempDir::new("dirlist").map_err(|e| Error::FilesystemAccess {
            what: "temporary directory".into(),
            how: e.to_string(),
        })?;
        let mut ret = Self { root };
        for (relative_path, size, is_dir) in TEMP_FILES {
            let created = if *is_dir {
                ret.create_dir(relative_path)
            } else {
                ret.create_file(relative_path, &"x".repeat(*size))
            };
            created.map_err(|e| Error::FilesystemAccess {
                what: relative_path.to_string(),
                how: e.to_string(),
            })?;
        }
        Ok(ret)
    }

    /// The directory under test.
    pub fn dir(&self) -> PathBuf {
        self.root.path().join(SERVED)
    }

    /// Parent of the directory under test.
    pub fn parent_dir(&self) -> &StdPath {
        self.root.path()
    }

    /// Creates a file below the directory under test.
    pub fn create_file(&mut self, relative_path: &str, content: &str) -> std::io::Result<()> {
        let full_path = self.dir().join(relative_path);
        if let Some(parent) = full_path.parent() {
            create_dir_all(parent)?;
        }
        fs::write(full_path, content)
    }

    /// Creates a directory below the directory under test.
    pub fn create_dir(&mut self, relative_path: &str) -> std::io::Result<()> {
        create_dir_all(self.dir().join(relative_path))
    }

    /// Names of the subdirectories on disk, `/`-suffixed and sorted.
    pub fn expected_directories(&self) -> Vec<String> {
        cross_check::child_names(&self.dir(), true)
    }

    /// Names of the non-directories on disk, sorted.
    pub fn expected_files(&self) -> Vec<String> {
        cross_check::child_names(&self.dir(), false)
    }

    /// Panics unless every child entry in `listing` matches the on-disk
    /// size and modification time.
    pub fn match_entries(&self, listing: &Listing) {
        for entry in listing.directories.iter().chain(listing.files.iter()) {
            let name = entry.name.trim_end_matches('/');
            self.match_entry(&self.dir().join(name), entry);
        }
    }

    /// Panics unless `entry` matches the size and modification time of
    /// `path`.
    pub fn match_entry(&self, path: &StdPath, entry: &Entry) {
        let (size, mtime) = cross_check::stat(path);
        assert_eq!(entry.size, size, "size of {}", path.display());
        assert_eq!(entry.last_modified, mtime, "mtime of {}", path.display());
    }
}

// Reads the tree with plain std calls so the builder is checked against an
// independent implementation.
mod cross_check {
    use std::fs;
    use std::path::Path as StdPath;
    use std::time::SystemTime;

    pub(super) fn child_names(dir: &StdPath, directories: bool) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.is_dir() == directories)
            .map(|path| {
                let name = path.file_name().unwrap().to_string_lossy().to_string();
                if directories { name + "/" } else { name }
            })
            .collect();
        names.sort();
        names
    }

    pub(super) fn stat(path: &StdPath) -> (u64, i64) {
        let metadata = fs::metadata(path).unwrap();
        let mtime = metadata
            .modified()
            .unwrap()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap()
            .as_millis();
        (metadata.len(), mtime as i64)
    }
}
