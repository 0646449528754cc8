//! Local disk backend.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::backend::{Backend, FileTimes};

/// [`Backend`] implementation over [`std::fs`].
///
/// A symlink to a file is listed as a file. Symlinks to directories are not
/// listed at all, so a link back to an ancestor cannot make a recursive walk
/// loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsBackend;

impl OsBackend {
    fn list_children(dir: &Path, want_dirs: bool) -> io::Result<Vec<PathBuf>> {
        let mut out = Vec::new();
        for dir_entry in fs::read_dir(dir)? {
            let dir_entry = match dir_entry {
                Ok(e) => e,
                Err(_) => continue,
            };
            // Entries removed mid-listing simply drop out.
            let file_type = match dir_entry.file_type() {
                Ok(t) => t,
                Err(_) => continue,
            };
            let path = dir_entry.path();
            let is_dir = if file_type.is_symlink() {
                match fs::metadata(&path) {
                    Ok(m) if m.is_dir() => continue,
                    Ok(_) => false,
                    Err(_) => continue,
                }
            } else {
                file_type.is_dir()
            };
            if is_dir == want_dirs {
                out.push(path);
            }
        }
        Ok(out)
    }
}

impl Backend for OsBackend {
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        Self::list_children(dir, false)
    }

    fn list_directories(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        Self::list_children(dir, true)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir(&self, path: &Path, recursive: bool) -> io::Result<()> {
        if recursive {
            fs::remove_dir_all(path)
        } else {
            fs::remove_dir(path)
        }
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        // fs::rename would silently replace an existing file.
        if fs::symlink_metadata(to).is_ok() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", to.display()),
            ));
        }
        fs::rename(from, to)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn times(&self, path: &Path) -> io::Result<FileTimes> {
        let metadata = fs::metadata(path)?;
        let modified = metadata.modified()?;
        // Some filesystems are mounted without atime.
        let accessed = metadata.accessed().unwrap_or(modified);
        Ok(FileTimes { accessed, modified })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_files_and_directories_separately() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "a").unwrap();
        fs::write(tmp.path().join("b.txt"), "b").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let files = OsBackend.list_files(tmp.path()).unwrap();
        let dirs = OsBackend.list_directories(tmp.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.contains(&tmp.path().join("a.txt")));
        assert_eq!(dirs, vec![tmp.path().join("sub")]);
    }

    #[test]
    fn listing_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let err = OsBackend.list_files(&tmp.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_file_is_listed_as_file() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("real.txt");
        fs::write(&target, "data").unwrap();
        std::os::unix::fs::symlink(&target, tmp.path().join("link.txt")).unwrap();

        let files = OsBackend.list_files(tmp.path()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_is_not_listed() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("real")).unwrap();
        std::os::unix::fs::symlink(tmp.path(), tmp.path().join("loop")).unwrap();

        let dirs = OsBackend.list_directories(tmp.path()).unwrap();
        let files = OsBackend.list_files(tmp.path()).unwrap();

        assert_eq!(dirs, vec![tmp.path().join("real")]);
        assert!(files.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_skipped() {
        let tmp = TempDir::new().unwrap();
        std::os::unix::fs::symlink(tmp.path().join("gone"), tmp.path().join("dead")).unwrap();

        assert!(OsBackend.list_files(tmp.path()).unwrap().is_empty());
        assert!(OsBackend.list_directories(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn rename_refuses_existing_destination() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, "A").unwrap();
        fs::write(&b, "B").unwrap();

        let err = OsBackend.rename(&a, &b).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&a).unwrap(), "A");
        assert_eq!(fs::read_to_string(&b).unwrap(), "B");
    }

    #[test]
    fn remove_non_empty_dir_reports_not_empty() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("full");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("x"), "x").unwrap();

        let err = OsBackend.remove_dir(&dir, false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::DirectoryNotEmpty);

        OsBackend.remove_dir(&dir, true).unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn times_reports_modification() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dated.txt");
        fs::write(&path, "content").unwrap();

        let times = OsBackend.times(&path).unwrap();
        assert!(times.modified <= std::time::SystemTime::now());
    }
}
