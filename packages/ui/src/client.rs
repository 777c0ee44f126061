//! Shared store constructor for all platforms.
//!
//! Returns a [`store::CustomerStore`] backed by the appropriate
//! [`store::DocumentStore`]:
//! - **Desktop / Mobile** (native): filesystem via [`store::FileStore`]
//! - **Web** (WASM): process-wide [`store::MemoryStore`]

/// Create a platform-appropriate customer store.
///
/// Cheap to call; event handlers build a fresh one per operation. All of
/// them observe the same underlying data.
pub fn make_store() -> store::CustomerStore<impl store::DocumentStore> {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::OnceLock;
        static STORE: OnceLock<store::MemoryStore> = OnceLock::new();
        store::CustomerStore::new(STORE.get_or_init(store::MemoryStore::new).clone())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("clientele");
        store::CustomerStore::new(store::FileStore::new(base))
    }
}
