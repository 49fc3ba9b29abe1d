//! Durable key-value storage for values that outlive a session.
//!
//! The only key written today is [`LAST_ISSUED_DENOM`]. The file-backed store
//! keeps every key in one small JSON object.

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Key under which the denom of the most recently issued token class is kept.
pub const LAST_ISSUED_DENOM: &str = "lastIssuedDenom";

/// A string-to-string store.
pub trait KeyValueStore {
    /// Returns the value for `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Sets `key` to `value`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
