//! Append-only id indexes stored as JSON arrays
//!
//! An index preserves insertion order: saves append, updates leave the entry
//! where it is. A corrupted index decodes as empty (reported via tracing) and
//! is rebuilt by subsequent saves rather than failing reads.

use uuid::Uuid;

use crate::domain::errors::StorageResult;
use crate::infrastructure::codec;
use crate::infrastructure::keyvalue::KeyValueStore;

pub fn read(store: &dyn KeyValueStore, key: &str) -> StorageResult<Vec<Uuid>> {
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };
    match codec::decode::<Vec<Uuid>>(key, &raw) {
        Ok(ids) => Ok(ids),
        Err(e) => {
            tracing::warn!(key, error = %e, "corrupted index treated as empty");
            Ok(Vec::new())
        }
    }
}

pub fn write(store: &dyn KeyValueStore, key: &str, ids: &[Uuid]) -> StorageResult<()> {
    store.set(key, &codec::encode(key, &ids)?)
}

/// Appends `id` unless it is already indexed
pub fn append(store: &dyn KeyValueStore, key: &str, id: Uuid) -> StorageResult<()> {
    let mut ids = read(store, key)?;
    if !ids.contains(&id) {
        ids.push(id);
        write(store, key, &ids)?;
    }
    Ok(())
}

/// Removes `id` if present
pub fn remove(store: &dyn KeyValueStore, key: &str, id: Uuid) -> StorageResult<()> {
    let mut ids = read(store, key)?;
    let before = ids.len();
    ids.retain(|existing| *existing != id);
    if ids.len() != before {
        write(store, key, &ids)?;
    }
    Ok(())
}
