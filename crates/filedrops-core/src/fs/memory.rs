//! In-process backend.
//!
//! [`MemoryBackend`] keeps a whole tree in a single map keyed by absolute
//! path. It is useful for embedding and for exercising traversal logic
//! without touching the disk.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::SystemTime;

use super::backend::{Backend, FileTimes};

#[derive(Debug, Clone)]
enum Node {
    File { data: Vec<u8>, times: FileTimes },
    Dir { times: FileTimes },
}

impl Node {
    fn times(&self) -> FileTimes {
        match self {
            Node::File { times, .. } | Node::Dir { times } => *times,
        }
    }
}

fn now_times() -> FileTimes {
    let now = SystemTime::now();
    FileTimes {
        accessed: now,
        modified: now,
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such entry: {}", path.display()),
    )
}

/// [`Backend`] holding every entry in memory.
///
/// The tree starts with a single root directory `/`.
#[derive(Debug)]
pub struct MemoryBackend {
    nodes: Mutex<BTreeMap<PathBuf, Node>>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    /// Creates a backend containing only the root directory `/`.
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(PathBuf::from("/"), Node::Dir { times: now_times() });
        Self {
            nodes: Mutex::new(nodes),
        }
    }

    fn nodes(&self) -> MutexGuard<'_, BTreeMap<PathBuf, Node>> {
        self.nodes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn children(
        nodes: &BTreeMap<PathBuf, Node>,
        dir: &Path,
        want_dirs: bool,
    ) -> io::Result<Vec<PathBuf>> {
        match nodes.get(dir) {
            Some(Node::Dir { .. }) => {}
            Some(Node::File { .. }) => return Err(io::Error::from(io::ErrorKind::NotADirectory)),
            None => return Err(not_found(dir)),
        }
        Ok(nodes
            .iter()
            .filter(|(path, _)| path.parent() == Some(dir))
            .filter(|(_, node)| matches!(node, Node::Dir { .. }) == want_dirs)
            .map(|(path, _)| path.clone())
            .collect())
    }

    fn require_parent_dir(nodes: &BTreeMap<PathBuf, Node>, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) => match nodes.get(parent) {
                Some(Node::Dir { .. }) => Ok(()),
                Some(Node::File { .. }) => Err(io::Error::from(io::ErrorKind::NotADirectory)),
                None => Err(not_found(parent)),
            },
            None => Ok(()),
        }
    }
}

impl Backend for MemoryBackend {
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        Self::children(&self.nodes(), dir, false)
    }

    fn list_directories(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        Self::children(&self.nodes(), dir, true)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let mut nodes = self.nodes();
        match nodes.get_mut(path) {
            Some(Node::File { data, times }) => {
                times.accessed = SystemTime::now();
                Ok(data.clone())
            }
            Some(Node::Dir { .. }) => Err(io::Error::from(io::ErrorKind::IsADirectory)),
            None => Err(not_found(path)),
        }
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut nodes = self.nodes();
        Self::require_parent_dir(&nodes, path)?;
        if let Some(Node::Dir { .. }) = nodes.get(path) {
            return Err(io::Error::from(io::ErrorKind::IsADirectory));
        }
        nodes.insert(
            path.to_path_buf(),
            Node::File {
                data: contents.to_vec(),
                times: now_times(),
            },
        );
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut nodes = self.nodes();
        let mut missing = Vec::new();
        for ancestor in path.ancestors() {
            match nodes.get(ancestor) {
                Some(Node::Dir { .. }) => break,
                Some(Node::File { .. }) => {
                    return Err(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("{} is a file", ancestor.display()),
                    ))
                }
                None => missing.push(ancestor.to_path_buf()),
            }
        }
        for dir in missing.into_iter().rev() {
            nodes.insert(dir, Node::Dir { times: now_times() });
        }
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let mut nodes = self.nodes();
        match nodes.get(path) {
            Some(Node::File { .. }) => {
                nodes.remove(path);
                Ok(())
            }
            Some(Node::Dir { .. }) => Err(io::Error::from(io::ErrorKind::IsADirectory)),
            None => Err(not_found(path)),
        }
    }

    fn remove_dir(&self, path: &Path, recursive: bool) -> io::Result<()> {
        let mut nodes = self.nodes();
        match nodes.get(path) {
            Some(Node::Dir { .. }) => {}
            Some(Node::File { .. }) => return Err(io::Error::from(io::ErrorKind::NotADirectory)),
            None => return Err(not_found(path)),
        }
        let has_children = nodes.keys().any(|p| p.parent() == Some(path));
        if has_children && !recursive {
            return Err(io::Error::from(io::ErrorKind::DirectoryNotEmpty));
        }
        nodes.retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        let mut nodes = self.nodes();
        if !nodes.contains_key(from) {
            return Err(not_found(from));
        }
        if nodes.contains_key(to) {
            return Err(io::Error::from(io::ErrorKind::AlreadyExists));
        }
        Self::require_parent_dir(&nodes, to)?;

        let moved: Vec<PathBuf> = nodes
            .keys()
            .filter(|p| p.starts_with(from))
            .cloned()
            .collect();
        for old in moved {
            if let Some(node) = nodes.remove(&old) {
                let suffix = old.strip_prefix(from).unwrap_or(Path::new(""));
                let new_path = if suffix.as_os_str().is_empty() {
                    to.to_path_buf()
                } else {
                    to.join(suffix)
                };
                nodes.insert(new_path, node);
            }
        }
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        matches!(self.nodes().get(path), Some(Node::File { .. }))
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.nodes().get(path), Some(Node::Dir { .. }))
    }

    fn times(&self, path: &Path) -> io::Result<FileTimes> {
        self.nodes()
            .get(path)
            .map(Node::times)
            .ok_or_else(|| not_found(path))
    }
}
