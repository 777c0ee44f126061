//! # Form state and actions for the customers screen
//!
//! [`FormState`] is the explicit state container behind the single
//! customers screen: the two input fields, the phone-validation flag, the id
//! of the customer being edited (if any), and the loaded customer list. The
//! screen holds it in a Dioxus `Signal`, which supplies the change
//! notification; everything in this module stays framework-free so the same
//! code path is driven by the screen and by headless tests.
//!
//! ## Transitions
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`set_name`](FormState::set_name) | Stores the name field value. |
//! | [`set_phone`](FormState::set_phone) | Rejects values containing a non-digit outright; accepted values recompute [`phone_invalid`](FormState::phone_invalid). |
//! | [`begin_edit`](FormState::begin_edit) | Copies a customer into the fields and switches to editing mode. Local only, never touches the store. |
//! | [`clear_form`](FormState::clear_form) | Resets the fields after a successful submit. |
//!
//! ## Actions
//!
//! [`load`], [`submit`], and [`delete`] orchestrate the [`CustomerStore`]
//! calls. Every successful mutation triggers a full re-list; the list is
//! never patched locally. Every failure is logged and swallowed, leaving all
//! state exactly as it was before the action.

use store::{Customer, CustomerStore, DocumentStore};
use tracing::{debug, warn};

/// A phone is valid iff every character is a decimal digit and it is at
/// least 8 long.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().all(|c| c.is_ascii_digit()) && phone.len() >= 8
}

/// Transient UI state for the customers screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub name: String,
    pub phone: String,
    /// Set when the last accepted keystroke left the phone invalid; gates
    /// submission. Starts `false`: only a keystroke ever raises it.
    pub phone_invalid: bool,
    /// `Some(id)` while editing an existing customer, `None` while creating
    /// a draft.
    pub editing_id: Option<String>,
    pub customers: Vec<Customer>,
}

impl FormState {
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    /// Accept a new phone field value. Values containing a non-digit are
    /// rejected and the field keeps its previous value; accepted values
    /// recompute the invalid flag. Returns whether the value was accepted.
    pub fn set_phone(&mut self, value: &str) -> bool {
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        self.phone = value.to_string();
        self.phone_invalid = !is_valid_phone(&self.phone);
        true
    }

    /// Copy a customer's fields into the form and switch to editing mode.
    pub fn begin_edit(&mut self, customer: &Customer) {
        self.name = customer.name.clone();
        self.phone = customer.phone.clone();
        self.editing_id = Some(customer.id.clone());
    }

    /// Reset the fields after a successful submit.
    pub fn clear_form(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.editing_id = None;
    }

    /// Submit button label for the current mode.
    pub fn submit_label(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Update"
        } else {
            "Register"
        }
    }
}

/// Replace the customer list from the store. On failure the previous list is
/// left untouched.
pub async fn load<S: DocumentStore>(store: &CustomerStore<S>, state: &mut FormState) {
    match store.list_all().await {
        Ok(customers) => state.customers = customers,
        Err(err) => warn!("listing customers failed: {err}"),
    }
}

/// Submit the form: replace when editing, add when creating. A successful
/// mutation re-lists and clears the form; a failure is logged and every
/// piece of state keeps its pre-submit value. No-op while the phone field is
/// flagged invalid.
pub async fn submit<S: DocumentStore>(store: &CustomerStore<S>, state: &mut FormState) {
    if state.phone_invalid {
        return;
    }

    if let Some(id) = state.editing_id.clone() {
        match store.replace(&id, &state.name, &state.phone).await {
            Ok(()) => {
                debug!("customer {id} updated");
                load(store, state).await;
                state.clear_form();
            }
            Err(err) => warn!("updating customer {id} failed: {err}"),
        }
    } else {
        match store.add(&state.name, &state.phone).await {
            Ok(id) => {
                debug!("customer added with id {id}");
                load(store, state).await;
                state.clear_form();
            }
            Err(err) => warn!("adding customer failed: {err}"),
        }
    }
}

/// Delete one customer and re-list. Failures are logged only.
pub async fn delete<S: DocumentStore>(store: &CustomerStore<S>, state: &mut FormState, id: &str) {
    match store.remove(id).await {
        Ok(()) => load(store, state).await,
        Err(err) => warn!("deleting customer {id} failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use store::{Fields, MemoryStore, StoreError};

    /// DocumentStore wrapper that counts calls and can be switched to fail.
    #[derive(Clone, Default)]
    struct ProbeStore {
        inner: MemoryStore,
        calls: Arc<AtomicUsize>,
        failing: Arc<AtomicBool>,
    }

    impl ProbeStore {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        fn check(&self) -> Result<(), StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                Err(StoreError::message("store offline"))
            } else {
                Ok(())
            }
        }
    }

    impl DocumentStore for ProbeStore {
        async fn list(&self, collection: &str) -> Result<Vec<(String, Fields)>, StoreError> {
            self.check()?;
            self.inner.list(collection).await
        }

        async fn create(&self, collection: &str, fields: Fields) -> Result<String, StoreError> {
            self.check()?;
            self.inner.create(collection, fields).await
        }

        async fn set_fields(
            &self,
            collection: &str,
            id: &str,
            fields: Fields,
        ) -> Result<(), StoreError> {
            self.check()?;
            self.inner.set_fields(collection, id, fields).await
        }

        async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
            self.check()?;
            self.inner.delete(collection, id).await
        }
    }

    #[test]
    fn test_phone_validation_rule() {
        assert!(is_valid_phone("12345678"));
        assert!(is_valid_phone("123456789012"));
        assert!(!is_valid_phone("1234567"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("12345a78"));
        assert!(!is_valid_phone("1234 5678"));
        assert!(!is_valid_phone("+5512345678"));
    }

    #[test]
    fn test_only_ascii_digits_count_as_digits() {
        // Digits from other scripts (fullwidth, Arabic-Indic) are not
        // decimal digits here: validation and the keystroke guard both
        // reject them.
        assert!(!is_valid_phone("１２３４５６７８"));
        assert!(!is_valid_phone("١٢٣٤٥٦٧٨"));

        let mut state = FormState::default();
        state.set_phone("123");
        assert!(!state.set_phone("123٤"));
        assert_eq!(state.phone, "123");
    }

    #[test]
    fn test_non_digit_input_never_changes_phone() {
        let mut state = FormState::default();
        assert!(state.set_phone("1234"));

        assert!(!state.set_phone("1234a"));
        assert!(!state.set_phone("1234-5678"));
        assert_eq!(state.phone, "1234");
    }

    #[test]
    fn test_accepted_input_recomputes_flag() {
        let mut state = FormState::default();
        assert!(!state.phone_invalid);

        state.set_phone("123");
        assert!(state.phone_invalid);

        state.set_phone("12345678");
        assert!(!state.phone_invalid);
    }

    #[test]
    fn test_begin_edit_copies_fields() {
        let mut state = FormState::default();
        let customer = Customer {
            id: "doc1".to_string(),
            name: "Ana".to_string(),
            phone: "12345678".to_string(),
        };

        state.begin_edit(&customer);

        assert_eq!(state.name, "Ana");
        assert_eq!(state.phone, "12345678");
        assert_eq!(state.editing_id.as_deref(), Some("doc1"));
        assert_eq!(state.submit_label(), "Update");

        state.clear_form();
        assert!(state.name.is_empty());
        assert!(state.phone.is_empty());
        assert!(state.editing_id.is_none());
        assert_eq!(state.submit_label(), "Register");
    }

    #[tokio::test]
    async fn test_submit_blocked_while_invalid() {
        let probe = ProbeStore::default();
        let store = CustomerStore::new(probe.clone());

        let mut state = FormState::default();
        state.set_name("Bob");
        state.set_phone("123");
        let before = state.clone();

        submit(&store, &mut state).await;

        assert_eq!(probe.calls(), 0);
        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn test_register_edit_delete_scenario() {
        let store = CustomerStore::new(MemoryStore::new());
        let mut state = FormState::default();

        load(&store, &mut state).await;
        assert!(state.customers.is_empty());

        // Register Ana.
        state.set_name("Ana");
        state.set_phone("12345678");
        submit(&store, &mut state).await;

        assert_eq!(state.customers.len(), 1);
        assert_eq!(state.customers[0].name, "Ana");
        assert_eq!(state.customers[0].phone, "12345678");
        assert!(state.name.is_empty());
        assert!(state.phone.is_empty());
        assert!(state.editing_id.is_none());
        let id = state.customers[0].id.clone();

        // Edit her phone.
        let ana = state.customers[0].clone();
        state.begin_edit(&ana);
        state.set_phone("87654321");
        submit(&store, &mut state).await;

        assert_eq!(state.customers.len(), 1);
        assert_eq!(state.customers[0].id, id);
        assert_eq!(state.customers[0].name, "Ana");
        assert_eq!(state.customers[0].phone, "87654321");
        assert!(state.editing_id.is_none());

        // Delete her.
        delete(&store, &mut state, &id).await;
        assert!(state.customers.is_empty());
    }

    #[tokio::test]
    async fn test_short_phone_never_reaches_store() {
        let probe = ProbeStore::default();
        let store = CustomerStore::new(probe.clone());
        let mut state = FormState::default();

        state.set_name("Bob");
        state.set_phone("123");
        assert!(state.phone_invalid);

        submit(&store, &mut state).await;

        assert_eq!(probe.calls(), 0);
        assert!(state.customers.is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_keeps_previous_list() {
        let probe = ProbeStore::default();
        let store = CustomerStore::new(probe.clone());
        let mut state = FormState::default();

        store.add("Ana", "12345678").await.unwrap();
        load(&store, &mut state).await;
        assert_eq!(state.customers.len(), 1);

        probe.set_failing(true);
        load(&store, &mut state).await;
        assert_eq!(state.customers.len(), 1);
    }

    #[tokio::test]
    async fn test_add_failure_leaves_state_untouched() {
        let probe = ProbeStore::default();
        let store = CustomerStore::new(probe.clone());
        let mut state = FormState::default();

        state.set_name("Ana");
        state.set_phone("12345678");
        probe.set_failing(true);
        let before = state.clone();

        submit(&store, &mut state).await;

        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn test_replace_failure_leaves_state_untouched() {
        let probe = ProbeStore::default();
        let store = CustomerStore::new(probe.clone());
        let mut state = FormState::default();

        store.add("Ana", "12345678").await.unwrap();
        load(&store, &mut state).await;
        let ana = state.customers[0].clone();
        state.begin_edit(&ana);
        state.set_phone("87654321");

        probe.set_failing(true);
        let before = state.clone();
        submit(&store, &mut state).await;

        // Still editing, fields intact, list unchanged.
        assert_eq!(state, before);
        assert_eq!(state.editing_id.as_deref(), Some(ana.id.as_str()));
    }

    #[tokio::test]
    async fn test_delete_failure_logged_only() {
        let probe = ProbeStore::default();
        let store = CustomerStore::new(probe.clone());
        let mut state = FormState::default();

        store.add("Ana", "12345678").await.unwrap();
        load(&store, &mut state).await;
        let id = state.customers[0].id.clone();

        probe.set_failing(true);
        delete(&store, &mut state, &id).await;

        assert_eq!(state.customers.len(), 1);
    }
}
