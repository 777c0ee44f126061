//! # Filesystem-backed document store
//!
//! [`FileStore`] is a [`DocumentStore`] implementation that persists each
//! collection to the local filesystem. It is used on desktop and mobile
//! platforms to retain customers across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <collection>.json      # map of document id to field map
//! ```
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/clientele/` |
//! | Linux | `~/.local/share/clientele/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\clientele\` |
//! | Android | App-internal storage (via `dirs`) |
//!
//! [`dirs::data_dir()`]: https://docs.rs/dirs/latest/dirs/fn.data_dir.html

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::document::{DocumentStore, Fields};
use crate::StoreError;

/// Filesystem-backed DocumentStore for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.base.join(format!("{collection}.json"))
    }

    fn read_collection(&self, collection: &str) -> Result<BTreeMap<String, Fields>, StoreError> {
        let path = self.collection_path(collection);
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_collection(
        &self,
        collection: &str,
        docs: &BTreeMap<String, Fields>,
    ) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        let raw = serde_json::to_string_pretty(docs)?;
        std::fs::write(self.collection_path(collection), raw)?;
        Ok(())
    }
}

impl DocumentStore for FileStore {
    async fn list(&self, collection: &str) -> Result<Vec<(String, Fields)>, StoreError> {
        // BTreeMap iteration gives the id ordering the contract asks for.
        Ok(self.read_collection(collection)?.into_iter().collect())
    }

    async fn create(&self, collection: &str, fields: Fields) -> Result<String, StoreError> {
        let mut docs = self.read_collection(collection)?;
        let id = uuid::Uuid::new_v4().simple().to_string();
        docs.insert(id.clone(), fields);
        self.write_collection(collection, &docs)?;
        Ok(id)
    }

    async fn set_fields(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        let mut docs = self.read_collection(collection)?;
        docs.insert(id.to_string(), fields);
        self.write_collection(collection, &docs)?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let mut docs = self.read_collection(collection)?;
        if docs.remove(id).is_some() {
            self.write_collection(collection, &docs)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customers::CustomerStore;

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("clientele_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let customers = CustomerStore::new(FileStore::new(dir.clone()));
        let id = customers.add("Ana", "12345678").await.unwrap();

        // Re-open from the same directory.
        let reopened = CustomerStore::new(FileStore::new(dir.clone()));
        let all = reopened.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].name, "Ana");
        assert_eq!(all[0].phone, "12345678");

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_delete_absent_id_succeeds() {
        let dir = std::env::temp_dir().join(format!("clientele_del_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        store.delete("Clientes", "missing").await.unwrap();

        let _ = std::fs::remove_dir_all(&dir);
    }
}
