pub mod models;

mod error;
pub use error::StoreError;

mod document;
pub use document::{DocumentStore, Fields};

mod customers;
pub use customers::{CustomerStore, COLLECTION};

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

pub use models::Customer;
