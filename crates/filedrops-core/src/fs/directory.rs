//! Directory entity and recursive enumeration.

use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::SystemTime;

use regex::Regex;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::{meta, open_icon, Entry, EntryBase, FsEntry, SearchOption};
use crate::fs::file::File;
use crate::fs::filesystem::FileSystem;
use crate::icon::{IconImage, IconSize};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A directory bound to the [`FileSystem`] that constructed it.
///
/// Listings are live queries: every call goes to the backend and nothing is
/// cached, so results reflect the state at call time. Children are always
/// built through [`FileSystem::construct_file`] and
/// [`FileSystem::construct_directory`].
#[derive(Debug, Clone)]
pub struct Directory {
    base: EntryBase,
}

impl Directory {
    pub(crate) fn new(file_system: FileSystem, full_name: PathBuf) -> Self {
        Self {
            base: EntryBase::new(file_system, full_name),
        }
    }

    /// Lists files in this directory, or in the whole subtree with
    /// [`SearchOption::AllLevels`].
    ///
    /// Each file carries its modification time plus the `fileName` (the
    /// containing directory), `lastAccessed` and `modifiedDate` metadata
    /// entries. Files that vanish between listing and inspection are skipped.
    ///
    /// # Errors
    ///
    /// - [`CoreError::DirectoryNotFound`] if a directory cannot be listed.
    pub fn get_files(&self, option: SearchOption) -> CoreResult<Vec<File>> {
        let mut files = Vec::new();
        collect_files(self.file_system(), self.full_name(), option, &mut files)?;
        Ok(files)
    }

    /// Like [`Directory::get_files`], keeping only files whose full path
    /// matches `filter` as a regular expression.
    ///
    /// Backslashes in `filter` are read as `/`, and paths are matched with
    /// `/` separators, so either separator style works.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidFilter`] if `filter` is not a valid regex.
    /// - [`CoreError::DirectoryNotFound`] as for [`Directory::get_files`].
    pub fn get_files_matching(&self, filter: &str, option: SearchOption) -> CoreResult<Vec<File>> {
        let pattern = filter.replace('\\', "/");
        let regex = Regex::new(&pattern).map_err(|source| CoreError::InvalidFilter {
            filter: filter.to_string(),
            source,
        })?;

        let files = self.get_files(option)?;
        Ok(files
            .into_iter()
            .filter(|file| regex.is_match(&forward_slashes(file.full_name())))
            .collect())
    }

    /// Lists subdirectories, recursing with [`SearchOption::AllLevels`].
    ///
    /// Every returned directory has its parent set to the directory it was
    /// listed from.
    pub fn get_directories(&self, option: SearchOption) -> CoreResult<Vec<Directory>> {
        let mut dirs = Vec::new();
        collect_directories(self.file_system(), self, option, &mut dirs)?;
        Ok(dirs)
    }

    /// Files first, then directories, at the requested depth.
    pub fn get_entries(&self, option: SearchOption) -> CoreResult<Vec<FsEntry>> {
        let files = self.get_files(option)?;
        let dirs = self.get_directories(option)?;
        Ok(files
            .into_iter()
            .map(FsEntry::from)
            .chain(dirs.into_iter().map(FsEntry::from))
            .collect())
    }

    /// Creates the directory and any missing ancestors.
    ///
    /// # Errors
    ///
    /// - [`CoreError::DirectoryAlreadyExists`] if the path already exists.
    pub fn create(&self) -> CoreResult<()> {
        let path = self.full_name();
        let backend = self.file_system().backend();
        if backend.exists(path) {
            return Err(CoreError::DirectoryAlreadyExists(path.to_path_buf()));
        }
        backend
            .create_dir_all(path)
            .map_err(|e| CoreError::from_io(e, path))?;
        tracing::info!("created directory {}", path.display());
        Ok(())
    }

    /// Deletes the directory, retrying while the backend reports it is not empty.
    ///
    /// A directory that is already gone counts as deleted. Attempts and the
    /// pause between them come from the file system's
    /// [`RetryPolicy`](crate::RetryPolicy).
    ///
    /// # Errors
    ///
    /// - [`CoreError::DirectoryDeleteTimedOut`] if it stayed non-empty for
    ///   every attempt.
    /// - Any other backend failure, immediately and without retrying.
    pub fn delete(&self, recursive: bool) -> CoreResult<()> {
        let path = self.full_name();
        let fs = self.file_system();
        let policy = fs.delete_retry();

        for attempt in 1..=policy.attempts() {
            let result = fs
                .backend()
                .remove_dir(path, recursive)
                .map_err(|e| CoreError::from_io(e, path));
            match result {
                Ok(()) => {
                    tracing::info!("deleted directory {}", path.display());
                    return Ok(());
                }
                Err(CoreError::NotFound(_)) => {
                    tracing::debug!("{} already gone", path.display());
                    return Ok(());
                }
                Err(CoreError::DirectoryNotEmpty(_)) => {
                    tracing::debug!(attempt, "{} not empty", path.display());
                    if attempt < policy.attempts() {
                        thread::sleep(policy.pause());
                    }
                }
                Err(e) => return Err(e),
            }
        }

        tracing::warn!(
            "giving up on {} after {} attempts",
            path.display(),
            policy.attempts()
        );
        Err(CoreError::DirectoryDeleteTimedOut {
            path: path.to_path_buf(),
            attempts: policy.attempts(),
        })
    }

    /// The "open folder" flavour of [`Entry::icon`].
    pub fn open_icon(&self, size: IconSize) -> IconImage {
        open_icon(&self.base, size)
    }

    pub(crate) fn set_parent(&mut self, parent: Directory) {
        self.base.set_parent(parent);
    }

    /// Same directory with no cached parent and no metadata.
    fn detached(&self) -> Directory {
        Directory::new(self.file_system().clone(), self.full_name().to_path_buf())
    }
}

impl Entry for Directory {
    fn base(&self) -> &EntryBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EntryBase {
        &mut self.base
    }

    fn is_dir(&self) -> bool {
        true
    }

    fn exists(&self) -> bool {
        self.file_system().backend().is_dir(self.full_name())
    }
}

fn list_error(folder: &Path) -> impl FnOnce(io::Error) -> CoreError + '_ {
    move |source| CoreError::DirectoryNotFound {
        path: folder.to_path_buf(),
        source,
    }
}

/// A subdirectory removed while we were walking the tree.
fn vanished(err: &CoreError) -> bool {
    matches!(err, CoreError::DirectoryNotFound { source, .. } if source.kind() == io::ErrorKind::NotFound)
}

fn collect_files(
    fs: &FileSystem,
    folder: &Path,
    option: SearchOption,
    out: &mut Vec<File>,
) -> CoreResult<()> {
    let backend = fs.backend();
    let paths = backend.list_files(folder).map_err(list_error(folder))?;
    let folder_name = folder.to_string_lossy();

    for path in paths {
        let times = match backend.times(&path) {
            Ok(t) => t,
            Err(e) => {
                tracing::debug!("skipping {}: {e}", path.display());
                continue;
            }
        };
        let mut file = fs.construct_file(path);
        file.set_last_modified(Some(times.modified));
        file.add_metadata(meta::DIRECTORY_NAME, &folder_name);
        file.add_metadata(meta::LAST_ACCESSED, &format_timestamp(times.accessed));
        file.add_metadata(meta::MODIFIED_DATE, &format_timestamp(times.modified));
        out.push(file);
    }

    if option == SearchOption::AllLevels {
        let subdirs = backend.list_directories(folder).map_err(list_error(folder))?;
        for dir in subdirs {
            match collect_files(fs, &dir, option, out) {
                Err(e) if vanished(&e) => {
                    tracing::debug!("{} disappeared during enumeration", dir.display());
                }
                other => other?,
            }
        }
    }

    Ok(())
}

fn collect_directories(
    fs: &FileSystem,
    parent: &Directory,
    option: SearchOption,
    out: &mut Vec<Directory>,
) -> CoreResult<()> {
    let folder = parent.full_name();
    let paths = fs
        .backend()
        .list_directories(folder)
        .map_err(list_error(folder))?;

    // Children share a bare copy of the parent, not its whole ancestor chain.
    let bare_parent = parent.detached();
    let children: Vec<Directory> = paths
        .into_iter()
        .map(|path| {
            let mut dir = fs.construct_directory(path);
            dir.set_parent(bare_parent.clone());
            dir
        })
        .collect();
    out.extend(children.iter().cloned());

    if option == SearchOption::AllLevels {
        for child in &children {
            match collect_directories(fs, child, option, out) {
                Err(e) if vanished(&e) => {
                    tracing::debug!("{} disappeared during enumeration", child.full_name().display());
                }
                other => other?,
            }
        }
    }

    Ok(())
}

fn format_timestamp(time: SystemTime) -> String {
    chrono::DateTime::<chrono::Local>::from(time)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

fn forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{Backend, FileTimes, MemoryBackend, RetryPolicy};
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tempfile::TempDir;

    fn names(files: &[File]) -> Vec<String> {
        let mut names: Vec<String> = files.iter().map(|f| f.name()).collect();
        names.sort();
        names
    }

    /// `/a/x.txt`, `/a/b/y.txt` on disk.
    fn scenario() -> (TempDir, FileSystem, Directory) {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a");
        fs::create_dir_all(a.join("b")).unwrap();
        fs::write(a.join("x.txt"), "x").unwrap();
        fs::write(a.join("b").join("y.txt"), "y").unwrap();
        let filesystem = FileSystem::os(tmp.path());
        let dir = filesystem.construct_directory(&a);
        (tmp, filesystem, dir)
    }

    #[test]
    fn get_files_this_level_only() {
        let (_tmp, _fs, a) = scenario();
        let files = a.get_files(SearchOption::ThisLevelOnly).unwrap();
        assert_eq!(names(&files), vec!["x.txt"]);
    }

    #[test]
    fn get_files_all_levels_descends() {
        let (_tmp, _fs, a) = scenario();
        let files = a.get_files(SearchOption::AllLevels).unwrap();
        assert_eq!(names(&files), vec!["x.txt", "y.txt"]);
    }

    #[test]
    fn listed_files_carry_times_and_metadata() {
        let (tmp, fs, a) = scenario();
        let files = a.get_files(SearchOption::AllLevels).unwrap();
        let y = files.iter().find(|f| f.name() == "y.txt").unwrap();

        assert!(y.last_modified().is_some());
        assert!(y.file_system().same_as(&fs));
        let b = tmp.path().join("a").join("b");
        assert_eq!(
            y.metadata().get(meta::DIRECTORY_NAME).map(String::as_str),
            Some(b.to_string_lossy().as_ref())
        );
        assert!(y.metadata().contains_key("fileName"));
        assert!(y.metadata().contains_key(meta::LAST_ACCESSED));
        assert_eq!(
            y.metadata().get(meta::MODIFIED_DATE).cloned(),
            Some(format_timestamp(y.last_modified().unwrap()))
        );
    }

    #[test]
    fn listing_missing_directory_is_directory_not_found() {
        let tmp = TempDir::new().unwrap();
        let fs = FileSystem::os(tmp.path());
        let missing = tmp.path().join("nope");
        let dir = fs.construct_directory(&missing);

        let err = dir.get_files(SearchOption::ThisLevelOnly).unwrap_err();
        assert!(matches!(&err, CoreError::DirectoryNotFound { path, .. } if path == &missing));
        assert!(err.to_string().contains("valid directory"));
    }

    #[test]
    fn get_directories_on_missing_directory_is_directory_not_found() {
        let tmp = TempDir::new().unwrap();
        let fs = FileSystem::os(tmp.path());
        let missing = tmp.path().join("nope");
        let dir = fs.construct_directory(&missing);

        for option in [SearchOption::ThisLevelOnly, SearchOption::AllLevels] {
            let err = dir.get_directories(option).unwrap_err();
            assert!(matches!(&err, CoreError::DirectoryNotFound { path, .. } if path == &missing));
        }
        assert!(matches!(
            dir.get_entries(SearchOption::AllLevels).unwrap_err(),
            CoreError::DirectoryNotFound { .. }
        ));
    }

    #[test]
    fn get_directories_on_a_file_is_directory_not_found() {
        let (tmp, fs, _a) = scenario();
        let not_a_dir = fs.construct_directory(tmp.path().join("a").join("x.txt"));

        let err = not_a_dir
            .get_directories(SearchOption::ThisLevelOnly)
            .unwrap_err();
        assert!(matches!(err, CoreError::DirectoryNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_back_to_ancestor_is_walked_once() {
        let (tmp, _fs, a) = scenario();
        std::os::unix::fs::symlink(tmp.path().join("a"), tmp.path().join("a").join("loop"))
            .unwrap();

        let files = a.get_files(SearchOption::AllLevels).unwrap();
        assert_eq!(names(&files), vec!["x.txt", "y.txt"]);

        let dirs = a.get_directories(SearchOption::AllLevels).unwrap();
        assert_eq!(dirs.len(), 1);
        assert_eq!(dirs[0].name(), "b");
    }

    #[test]
    fn listed_parent_is_a_bare_copy() {
        let (tmp, _fs, mut a) = scenario();
        fs::create_dir(tmp.path().join("a").join("b").join("c")).unwrap();
        a.add_metadata("tag", "listing root");

        let dirs = a.get_directories(SearchOption::AllLevels).unwrap();

        let b = dirs.iter().find(|d| d.name() == "b").unwrap();
        let b_parent = b.parent().unwrap();
        assert_eq!(b_parent.full_name(), a.full_name());
        assert!(b_parent.metadata().is_empty());

        let c = dirs.iter().find(|d| d.name() == "c").unwrap();
        let c_parent = c.parent().unwrap();
        assert_eq!(c_parent.full_name(), b.full_name());
        // The grandparent is resolved lazily from the path, not copied along.
        assert_eq!(c_parent.parent().unwrap().full_name(), a.full_name());
        assert!(c_parent.parent().unwrap().metadata().is_empty());
    }

    #[test]
    fn get_directories_sets_explicit_parent() {
        let (tmp, _fs, a) = scenario();
        fs::create_dir(tmp.path().join("a").join("b").join("c")).unwrap();

        let dirs = a.get_directories(SearchOption::AllLevels).unwrap();
        let mut paths: Vec<PathBuf> = dirs.iter().map(|d| d.full_name().to_path_buf()).collect();
        paths.sort();
        assert_eq!(
            paths,
            vec![
                tmp.path().join("a").join("b"),
                tmp.path().join("a").join("b").join("c"),
            ]
        );

        let c = dirs.iter().find(|d| d.name() == "c").unwrap();
        assert_eq!(c.parent().unwrap().full_name(), tmp.path().join("a").join("b"));
        let b = dirs.iter().find(|d| d.name() == "b").unwrap();
        assert_eq!(b.parent().unwrap().full_name(), a.full_name());
    }

    #[test]
    fn get_entries_lists_files_before_directories() {
        let (tmp, _fs, a) = scenario();
        fs::write(tmp.path().join("a").join("z.txt"), "z").unwrap();
        fs::create_dir(tmp.path().join("a").join("c")).unwrap();

        let entries = a.get_entries(SearchOption::ThisLevelOnly).unwrap();
        assert_eq!(entries.len(), 4);
        let kinds: Vec<bool> = entries.iter().map(FsEntry::is_dir).collect();
        assert_eq!(kinds, vec![false, false, true, true]);
    }

    #[test]
    fn get_entries_all_levels_counts_subtree() {
        let (_tmp, _fs, a) = scenario();
        let entries = a.get_entries(SearchOption::AllLevels).unwrap();
        // x.txt, y.txt, b
        assert_eq!(entries.len(), 3);
        assert!(entries.last().unwrap().is_dir());
    }

    #[test]
    fn filter_matches_full_path_with_either_separator() {
        let (_tmp, _fs, a) = scenario();

        let forward = a.get_files_matching("/b/.*\\.txt$", SearchOption::AllLevels);
        // A backslash in the filter is read as `/`, so `\.` becomes `/.`.
        assert!(forward.unwrap().is_empty());

        let slash = a.get_files_matching("/b/y", SearchOption::AllLevels).unwrap();
        let backslash = a.get_files_matching("\\b\\y", SearchOption::AllLevels).unwrap();
        assert_eq!(names(&slash), vec!["y.txt"]);
        assert_eq!(names(&backslash), vec!["y.txt"]);
    }

    #[test]
    fn filter_result_is_subset_of_unfiltered() {
        let (_tmp, _fs, a) = scenario();
        let all = names(&a.get_files(SearchOption::AllLevels).unwrap());
        let filtered = names(&a.get_files_matching("txt", SearchOption::AllLevels).unwrap());
        assert_eq!(filtered, all);
        let none = a.get_files_matching("^$", SearchOption::AllLevels).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn invalid_filter_is_reported() {
        let (_tmp, _fs, a) = scenario();
        let err = a
            .get_files_matching("([", SearchOption::ThisLevelOnly)
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidFilter { .. }));
    }

    #[test]
    fn listings_are_live() {
        let (tmp, _fs, a) = scenario();
        assert_eq!(a.get_files(SearchOption::ThisLevelOnly).unwrap().len(), 1);
        fs::write(tmp.path().join("a").join("later.txt"), "").unwrap();
        assert_eq!(a.get_files(SearchOption::ThisLevelOnly).unwrap().len(), 2);
    }

    #[test]
    fn create_existing_directory_fails() {
        let (_tmp, _fs, a) = scenario();
        assert!(matches!(a.create(), Err(CoreError::DirectoryAlreadyExists(_))));
    }

    #[test]
    fn create_builds_missing_ancestors() {
        let tmp = TempDir::new().unwrap();
        let fs = FileSystem::os(tmp.path());
        let dir = fs.construct_directory(tmp.path().join("p").join("q"));
        dir.create().unwrap();
        assert!(dir.exists());
    }

    #[test]
    fn delete_missing_directory_succeeds() {
        let tmp = TempDir::new().unwrap();
        let fs = FileSystem::os(tmp.path());
        let dir = fs.construct_directory(tmp.path().join("ghost"));
        dir.delete(false).unwrap();
    }

    #[test]
    fn delete_recursive_removes_tree() {
        let (_tmp, _fs, a) = scenario();
        a.delete(true).unwrap();
        assert!(!a.exists());
    }

    #[test]
    fn rename_directory_moves_contents() {
        let (tmp, _fs, mut a) = scenario();
        a.rename("renamed").unwrap();
        assert_eq!(a.full_name(), tmp.path().join("renamed"));
        assert!(tmp.path().join("renamed").join("b").join("y.txt").is_file());
        assert_eq!(a.get_files(SearchOption::AllLevels).unwrap().len(), 2);
    }

    /// Backend that answers "not empty" for the first `failures` removals.
    #[derive(Debug)]
    struct SettlingBackend {
        inner: MemoryBackend,
        failures: u32,
        removals: AtomicU32,
        renames: AtomicU32,
    }

    impl SettlingBackend {
        fn new(failures: u32) -> Self {
            let inner = MemoryBackend::new();
            inner.create_dir_all(Path::new("/busy")).unwrap();
            Self {
                inner,
                failures,
                removals: AtomicU32::new(0),
                renames: AtomicU32::new(0),
            }
        }
    }

    impl Backend for SettlingBackend {
        fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
            self.inner.list_files(dir)
        }
        fn list_directories(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
            self.inner.list_directories(dir)
        }
        fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
            self.inner.read(path)
        }
        fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
            self.inner.write(path, contents)
        }
        fn create_dir_all(&self, path: &Path) -> io::Result<()> {
            self.inner.create_dir_all(path)
        }
        fn remove_file(&self, path: &Path) -> io::Result<()> {
            self.inner.remove_file(path)
        }
        fn remove_dir(&self, path: &Path, recursive: bool) -> io::Result<()> {
            let attempt = self.removals.fetch_add(1, Ordering::SeqCst) + 1;
            if attempt <= self.failures {
                return Err(io::Error::from(io::ErrorKind::DirectoryNotEmpty));
            }
            self.inner.remove_dir(path, recursive)
        }
        fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
            self.renames.fetch_add(1, Ordering::SeqCst);
            self.inner.rename(from, to)
        }
        fn is_file(&self, path: &Path) -> bool {
            self.inner.is_file(path)
        }
        fn is_dir(&self, path: &Path) -> bool {
            self.inner.is_dir(path)
        }
        fn times(&self, path: &Path) -> io::Result<FileTimes> {
            self.inner.times(path)
        }
    }

    fn settling_fs(failures: u32) -> (Arc<SettlingBackend>, FileSystem) {
        let backend = Arc::new(SettlingBackend::new(failures));
        let fs = FileSystem::builder(backend.clone(), "/")
            .delete_retry(RetryPolicy::new(10, Duration::from_millis(1)))
            .build();
        (backend, fs)
    }

    #[test]
    fn delete_retries_until_directory_settles() {
        let (backend, fs) = settling_fs(9);
        let dir = fs.construct_directory("/busy");

        dir.delete(false).unwrap();

        assert_eq!(backend.removals.load(Ordering::SeqCst), 10);
        assert!(!dir.exists());
    }

    #[test]
    fn delete_gives_up_after_bounded_attempts() {
        let (backend, fs) = settling_fs(u32::MAX);
        let dir = fs.construct_directory("/busy");

        let err = dir.delete(false).unwrap_err();

        assert!(matches!(err, CoreError::DirectoryDeleteTimedOut { attempts: 10, .. }));
        assert_eq!(backend.removals.load(Ordering::SeqCst), 10);
        assert!(dir.exists());
    }

    #[test]
    fn default_retry_policy_waits_between_attempts() {
        let backend = Arc::new(SettlingBackend::new(2));
        let fs = FileSystem::builder(backend.clone(), "/").build();
        let dir = fs.construct_directory("/busy");

        let started = std::time::Instant::now();
        dir.delete(false).unwrap();

        assert_eq!(backend.removals.load(Ordering::SeqCst), 3);
        assert!(started.elapsed() >= Duration::from_millis(100));
    }

    #[test]
    fn delete_does_not_retry_other_failures() {
        let (backend, fs) = settling_fs(0);
        backend.inner.write(Path::new("/file"), b"").unwrap();
        let dir = fs.construct_directory("/file");

        assert!(dir.delete(false).is_err());
        assert_eq!(backend.removals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn rename_to_own_name_skips_backend() {
        let (backend, fs) = settling_fs(0);
        let mut dir = fs.construct_directory("/busy");

        dir.rename("busy").unwrap();
        assert_eq!(backend.renames.load(Ordering::SeqCst), 0);
        assert_eq!(dir.full_name(), Path::new("/busy"));

        dir.rename("idle").unwrap();
        assert_eq!(backend.renames.load(Ordering::SeqCst), 1);
        assert_eq!(dir.full_name(), Path::new("/idle"));
    }

    #[test]
    fn memory_backend_scenario() {
        let fs = FileSystem::builder(Arc::new(MemoryBackend::new()), "/").build();
        let mut x = fs.construct_file("/a/x.txt");
        x.set_bytes_content(Some(b"x".to_vec()));
        x.create(true).unwrap();
        fs.construct_file("/a/b/y.txt").create(true).unwrap();

        let a = fs.construct_directory("/a");
        assert_eq!(names(&a.get_files(SearchOption::ThisLevelOnly).unwrap()), vec!["x.txt"]);
        assert_eq!(
            names(&a.get_files(SearchOption::AllLevels).unwrap()),
            vec!["x.txt", "y.txt"]
        );
        let root = fs.working_directory();
        let entries = root.get_entries(SearchOption::ThisLevelOnly).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_dir());
    }
}
