// Key-value substrate
// The repositories are built on this contract alone

pub mod file;
pub mod memory;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;

use crate::domain::errors::StorageResult;

/// String-keyed storage contract the repositories are built on
///
/// Each operation is individually atomic: a reader never observes a torn
/// value for a single key. There is no cross-key atomicity, and the medium
/// may be shared with other uncoordinated processes; multi-key sequences in
/// the repositories are designed to converge under interruption rather than
/// to simulate transactions.
pub trait KeyValueStore: Send + Sync {
    /// Read one key, `None` when absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write one key, overwriting any previous value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove one key; removing an absent key is not an error
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// All stored keys starting with `prefix`
    fn list_keys(&self, prefix: &str) -> StorageResult<Vec<String>>;
}
