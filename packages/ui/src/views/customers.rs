use dioxus::prelude::*;

use crate::form::{self, FormState};
use crate::make_store;

/// Whether a keydown may go into the phone field: digit characters yes,
/// other printable characters no. Control keys (Backspace, arrows, Tab)
/// pass through untouched.
fn phone_key_allowed(key: &Key) -> bool {
    match key {
        Key::Character(text) => text.chars().all(|c| c.is_ascii_digit()),
        _ => true,
    }
}

/// The single customer-management screen: a two-field form above the
/// customer list, with per-row edit and delete.
///
/// All store work happens in spawned handlers: snapshot the state, run the
/// form action, publish the result back into the signal. A failed action
/// publishes the unchanged snapshot, so the screen keeps showing
/// pre-mutation data.
#[component]
pub fn CustomersScreen() -> Element {
    let mut state = use_signal(FormState::default);

    // One initial list when the screen becomes active; afterwards the list
    // is only refreshed as a side effect of successful mutations.
    let _loader = use_resource(move || async move {
        let store = make_store();
        let mut snapshot = state.peek().clone();
        form::load(&store, &mut snapshot).await;
        state.set(snapshot);
    });

    let handle_submit = move |_| {
        spawn(async move {
            let store = make_store();
            let mut snapshot = state.peek().clone();
            form::submit(&store, &mut snapshot).await;
            state.set(snapshot);
        });
    };

    let phone_class = if state.read().phone_invalid {
        "form-field invalid"
    } else {
        "form-field"
    };

    rsx! {
        div {
            class: "customers-screen",
            header {
                class: "customers-header",
                h1 { "Customer Management" }
            }

            div {
                class: "customer-form",
                input {
                    class: "form-field",
                    r#type: "text",
                    placeholder: "Name",
                    value: "{state.read().name}",
                    oninput: move |evt: FormEvent| state.with_mut(|s| s.set_name(evt.value())),
                }
                input {
                    class: "{phone_class}",
                    r#type: "tel",
                    placeholder: "Phone",
                    value: "{state.read().phone}",
                    // Non-digit keys never reach the field. Paste and other
                    // non-key input paths still hit the state-level guard
                    // in set_phone.
                    onkeydown: move |evt: KeyboardEvent| {
                        if !phone_key_allowed(&evt.key()) {
                            evt.prevent_default();
                        }
                    },
                    oninput: move |evt: FormEvent| {
                        state.with_mut(|s| {
                            s.set_phone(&evt.value());
                        })
                    },
                }
                if state.read().phone_invalid {
                    p { class: "phone-error", "Invalid phone number" }
                }
                button {
                    class: "submit-button",
                    onclick: handle_submit,
                    "{state.read().submit_label()}"
                }
            }

            ul {
                class: "customer-list",
                {state.read().customers.clone().into_iter().map(|customer| {
                    let edit_target = customer.clone();
                    let delete_id = customer.id.clone();
                    rsx! {
                        li {
                            key: "{customer.id}",
                            class: "customer-card",
                            p { "Name: {customer.name}" }
                            p { "Phone: {customer.phone}" }
                            div {
                                class: "customer-actions",
                                button {
                                    class: "edit-button",
                                    onclick: move |_| state.with_mut(|s| s.begin_edit(&edit_target)),
                                    "Edit"
                                }
                                button {
                                    class: "delete-button",
                                    onclick: move |_| {
                                        let id = delete_id.clone();
                                        spawn(async move {
                                            let store = make_store();
                                            let mut snapshot = state.peek().clone();
                                            form::delete(&store, &mut snapshot, &id).await;
                                            state.set(snapshot);
                                        });
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                })}
            }
        }
    }
}
