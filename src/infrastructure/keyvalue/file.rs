use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::errors::{StorageError, StorageResult};
use crate::infrastructure::keyvalue::KeyValueStore;

/// Filesystem-backed key-value store
///
/// One file per key under a data directory, with the key hex-encoded as the
/// filename so any key charset maps to a valid file name and back. Writes go
/// to a writer-unique temp file first and are renamed into place, so a single
/// key is never observed torn and concurrent writers to one key resolve to
/// whichever rename lands last — the store-level guarantees the repositories
/// rely on. Durable across restarts on one machine; nothing here coordinates
/// writers beyond that.
#[derive(Debug)]
pub struct FileKeyValueStore {
    root: PathBuf,
    temp_seq: AtomicU64,
}

impl FileKeyValueStore {
    /// Opens a store rooted at `root`, creating the directory if needed
    pub fn new(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| unavailable("create data directory", &root, e))?;
        Ok(Self {
            root,
            temp_seq: AtomicU64::new(0),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(hex::encode(key))
    }

    /// A temp path no other writer (thread or process) is using
    fn temp_path(&self) -> PathBuf {
        let seq = self.temp_seq.fetch_add(1, Ordering::Relaxed);
        self.root
            .join(format!(".{}.{}.tmp", std::process::id(), seq))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable("read key", &self.root, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let tmp = self.temp_path();
        fs::write(&tmp, value).map_err(|e| unavailable("write key", &self.root, e))?;
        fs::rename(&tmp, self.path_for(key)).map_err(|e| unavailable("commit key", &self.root, e))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(unavailable("remove key", &self.root, e)),
        }
    }

    fn list_keys(&self, prefix: &str) -> StorageResult<Vec<String>> {
        let entries =
            fs::read_dir(&self.root).map_err(|e| unavailable("list keys", &self.root, e))?;

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| unavailable("list keys", &self.root, e))?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            // Leftover temp files and foreign files are not keys
            let Ok(bytes) = hex::decode(name) else {
                continue;
            };
            let Ok(key) = String::from_utf8(bytes) else {
                continue;
            };
            if key.starts_with(prefix) {
                keys.push(key);
            }
        }
        keys.sort();
        Ok(keys)
    }
}

fn unavailable(action: &str, root: &Path, source: std::io::Error) -> StorageError {
    StorageError::StoreUnavailable(format!(
        "failed to {} under {}: {}",
        action,
        root.display(),
        source
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, FileKeyValueStore) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = FileKeyValueStore::new(dir.path()).expect("open store");
        (dir, store)
    }

    #[test]
    fn set_then_get_round_trips() {
        let (_dir, store) = temp_store();

        store.set("team:abc", "{\"name\":\"x\"}").unwrap();

        assert_eq!(
            store.get("team:abc").unwrap(),
            Some("{\"name\":\"x\"}".to_string())
        );
    }

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileKeyValueStore::new(dir.path()).unwrap();
            store.set("team:index", "[\"a\"]").unwrap();
        }

        let reopened = FileKeyValueStore::new(dir.path()).unwrap();
        assert_eq!(
            reopened.get("team:index").unwrap(),
            Some("[\"a\"]".to_string())
        );
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let (_dir, store) = temp_store();

        store.remove("never-set").unwrap();
    }

    #[test]
    fn list_keys_round_trips_arbitrary_key_characters() {
        let (_dir, store) = temp_store();

        store.set("lineup-index:123", "[]").unwrap();
        store.set("lineup:456", "{}").unwrap();
        store.set("team:current", "id").unwrap();

        let keys = store.list_keys("lineup").unwrap();
        assert_eq!(
            keys,
            vec!["lineup-index:123".to_string(), "lineup:456".to_string()]
        );
    }

    #[test]
    fn concurrent_writers_to_one_key_neither_fail_nor_tear() {
        use std::sync::Arc;

        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileKeyValueStore::new(dir.path()).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|writer| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for round in 0..50 {
                        store
                            .set("team:contended", &format!("{writer}-{round}"))
                            .expect("contended set succeeds");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("writer thread");
        }

        // Last write wins with one complete value, never a torn one
        let value = store.get("team:contended").unwrap().expect("value present");
        let (writer, round) = value.split_once('-').expect("untorn value");
        assert!(writer.parse::<u32>().unwrap() < 8);
        assert!(round.parse::<u32>().unwrap() < 50);
    }

    #[test]
    fn foreign_files_are_ignored() {
        let (dir, store) = temp_store();
        fs::write(dir.path().join("not-hex.txt"), "junk").unwrap();

        assert!(store.list_keys("").unwrap().is_empty());
    }
}
