//! # Typed customer client over a document collection
//!
//! [`CustomerStore`] wraps the four remote operations the customers screen
//! needs — list all, add one, replace one, delete one — against the
//! `"Clientes"` collection, translating between [`Customer`] and the store's
//! untyped [`Fields`] representation. The wire shape is always a field map
//! with exactly two string keys, `name` and `phone`.
//!
//! | Method | Store call | Notes |
//! |--------|-----------|-------|
//! | [`list_all`](CustomerStore::list_all) | `list` | Absent or non-string fields default to `""`. |
//! | [`add`](CustomerStore::add) | `create` | Returns the store-assigned id. |
//! | [`replace`](CustomerStore::replace) | `set_fields` | Full field-set overwrite, id unchanged. |
//! | [`remove`](CustomerStore::remove) | `delete` | Silent success when the id is already gone. |

use crate::document::{DocumentStore, Fields};
use crate::models::Customer;
use crate::StoreError;

/// Name of the collection holding customer documents.
pub const COLLECTION: &str = "Clientes";

/// Typed client over a [`DocumentStore`] collection of customers.
#[derive(Clone, Debug)]
pub struct CustomerStore<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> CustomerStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetch every customer in the collection, ordered by document id.
    /// An empty collection yields an empty vec.
    pub async fn list_all(&self) -> Result<Vec<Customer>, StoreError> {
        let docs = self.store.list(COLLECTION).await?;
        Ok(docs
            .into_iter()
            .map(|(id, fields)| Customer {
                id,
                name: string_field(&fields, "name"),
                phone: string_field(&fields, "phone"),
            })
            .collect())
    }

    /// Create a new customer document with exactly the two fields; returns
    /// the store-assigned id.
    pub async fn add(&self, name: &str, phone: &str) -> Result<String, StoreError> {
        self.store
            .create(COLLECTION, customer_fields(name, phone))
            .await
    }

    /// Overwrite the document's whole field set with the new name and phone.
    pub async fn replace(&self, id: &str, name: &str, phone: &str) -> Result<(), StoreError> {
        self.store
            .set_fields(COLLECTION, id, customer_fields(name, phone))
            .await
    }

    /// Delete the customer document.
    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        self.store.delete(COLLECTION, id).await
    }
}

fn customer_fields(name: &str, phone: &str) -> Fields {
    let mut fields = Fields::new();
    fields.insert("name".to_string(), name.into());
    fields.insert("phone".to_string(), phone.into());
    fields
}

fn string_field(fields: &Fields, key: &str) -> String {
    fields
        .get(key)
        .and_then(|value| value.as_str())
        .unwrap_or("")
        .to_string()
}
