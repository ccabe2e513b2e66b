//! The user creation form.

use dioxus::prelude::*;

use store::UserDraft;

use crate::client::make_client;
use crate::{notify_error, notify_success, use_toaster};

/// Form for creating a new user.
///
/// Owns a single draft. A successful submission clears it; a failed one
/// leaves it untouched so the user can correct and resubmit. `name` and
/// `email` are required at the input level, nothing else is validated
/// client-side.
#[component]
pub fn UserForm() -> Element {
    let mut draft = use_signal(UserDraft::default);
    let mut toaster = use_toaster();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        async move {
            let payload = draft();
            match make_client().create(&payload).await {
                Ok(()) => {
                    draft.set(UserDraft::default());
                    notify_success(&mut toaster, "User created successfully!");
                }
                Err(err) => {
                    tracing::error!("error creating user: {err}");
                    notify_error(&mut toaster, err.user_message("Error creating user."));
                }
            }
        }
    };

    rsx! {
        form {
            class: "user-form",
            onsubmit: handle_submit,
            h2 { class: "user-form__title", "User Form" }
            input {
                class: "user-form__input",
                r#type: "text",
                name: "name",
                placeholder: "Name",
                required: true,
                value: draft().name,
                oninput: move |evt: FormEvent| draft.write().name = evt.value(),
            }
            input {
                class: "user-form__input",
                r#type: "email",
                name: "email",
                placeholder: "Email",
                required: true,
                value: draft().email,
                oninput: move |evt: FormEvent| draft.write().email = evt.value(),
            }
            input {
                class: "user-form__input",
                r#type: "text",
                name: "image_url",
                placeholder: "Image URL",
                value: draft().image_url,
                oninput: move |evt: FormEvent| draft.write().image_url = evt.value(),
            }
            input {
                class: "user-form__input",
                r#type: "text",
                name: "video_url",
                placeholder: "Video URL",
                value: draft().video_url,
                oninput: move |evt: FormEvent| draft.write().video_url = evt.value(),
            }
            button {
                class: "user-form__submit",
                r#type: "submit",
                "Submit"
            }
        }
    }
}
