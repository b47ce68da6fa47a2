// Std filesystem adapter - Directory listing and atomic writes

use std::fs;
use std::io::Write;
use std::path::Path;

use async_trait::async_trait;
use tracing::debug;
use walkdir::WalkDir;

use crate::domain::errors::*;
use crate::ports::*;

/// Filesystem adapter backed by `std::fs` and `walkdir`
pub struct StdFsAdapter {
    follow_symlinks: bool,
}

impl StdFsAdapter {
    /// Create new filesystem adapter
    pub fn new(follow_symlinks: bool) -> Result<Self, DomainError> {
        Ok(Self { follow_symlinks })
    }

    fn classify(file_type: fs::FileType) -> EntryKind {
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

#[async_trait]
impl FsPort for StdFsAdapter {
    async fn list_entries(&self, dir_path: &Path) -> Result<Vec<DirEntryInfo>, DomainError> {
        // walkdir yields a file root as a single entry, so check the root first
        let metadata = fs::metadata(dir_path)
            .map_err(|e| DomainError::FsFail(format!("{}: {}", dir_path.display(), e)))?;
        if !metadata.is_dir() {
            return Err(DomainError::FsFail(format!(
                "{}: not a directory",
                dir_path.display()
            )));
        }

        let walker = WalkDir::new(dir_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.follow_symlinks);

        let mut entries = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) => entries.push(DirEntryInfo {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    path: entry.path().to_path_buf(),
                    kind: Self::classify(entry.file_type()),
                }),
                Err(e) if e.depth() == 0 => {
                    return Err(DomainError::FsFail(format!("{}: {}", dir_path.display(), e)));
                }
                Err(e) => {
                    // Broken symlinks and entries that vanish mid-listing
                    debug!("Skipping unreadable entry in {}: {}", dir_path.display(), e);
                }
            }
        }

        Ok(entries)
    }

    async fn write_file_atomic(&self, file_path: &Path, contents: &[u8]) -> Result<(), DomainError> {
        let parent = match file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file = tempfile::Builder::new()
            .prefix(".course_progress")
            .tempfile_in(parent)
            .map_err(|e| DomainError::FsFail(format!("Failed to create temp file: {}", e)))?;

        temp_file
            .write_all(contents)
            .and_then(|_| temp_file.flush())
            .map_err(|e| DomainError::FsFail(format!("Failed to write temp file: {}", e)))?;

        temp_file.persist(file_path).map_err(|e| {
            DomainError::FsFail(format!(
                "Failed to move report into place at {}: {}",
                file_path.display(),
                e.error
            ))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_entries_is_shallow() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("chapter/nested")).unwrap();
        fs::write(temp_dir.path().join("readme.txt"), b"x").unwrap();
        fs::write(temp_dir.path().join("chapter/lesson.mp4"), b"x").unwrap();

        let adapter = StdFsAdapter::new(true).unwrap();
        let mut entries = adapter.list_entries(temp_dir.path()).await.unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "chapter");
        assert!(entries[0].is_dir());
        assert_eq!(entries[1].name, "readme.txt");
        assert!(entries[1].is_file());
    }

    #[tokio::test]
    async fn test_list_entries_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = StdFsAdapter::new(true).unwrap();
        let result = adapter.list_entries(&temp_dir.path().join("missing")).await;
        assert!(matches!(result, Err(DomainError::FsFail(_))));
    }

    #[tokio::test]
    async fn test_list_entries_on_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("course.mp4");
        fs::write(&file, b"x").unwrap();

        let adapter = StdFsAdapter::new(true).unwrap();
        assert!(adapter.list_entries(&file).await.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_policy() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target");
        let course = temp_dir.path().join("course");
        fs::create_dir_all(&target).unwrap();
        fs::create_dir_all(&course).unwrap();
        std::os::unix::fs::symlink(&target, course.join("linked")).unwrap();

        let following = StdFsAdapter::new(true).unwrap();
        let entries = following.list_entries(&course).await.unwrap();
        assert_eq!(entries[0].kind, EntryKind::Directory);

        let not_following = StdFsAdapter::new(false).unwrap();
        let entries = not_following.list_entries(&course).await.unwrap();
        assert_eq!(entries[0].kind, EntryKind::Other);
    }

    #[tokio::test]
    async fn test_write_file_atomic_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let report = temp_dir.path().join("progress_report.html");
        fs::write(&report, b"old").unwrap();

        let adapter = StdFsAdapter::new(true).unwrap();
        adapter.write_file_atomic(&report, b"new").await.unwrap();

        assert_eq!(fs::read_to_string(&report).unwrap(), "new");
    }

    #[tokio::test]
    async fn test_write_file_atomic_missing_parent() {
        let temp_dir = TempDir::new().unwrap();
        let report = temp_dir.path().join("no/such/dir/report.html");

        let adapter = StdFsAdapter::new(true).unwrap();
        assert!(adapter.write_file_atomic(&report, b"x").await.is_err());
    }
}
