//! The user list view: load on mount, inline edit, delete.

use dioxus::prelude::*;

use store::{Roster, User};

use crate::client::make_client;
use crate::{notify_error, notify_success, use_toaster};

/// The full user list with a single inline-editing slot.
///
/// The roster signal is only written after a confirmed server response: a
/// load replaces it wholesale, an update is merged after the PUT succeeded,
/// a delete removes the row after the DELETE succeeded. Failures leave it
/// untouched and surface a toast.
#[component]
pub fn UserList() -> Element {
    let mut roster = use_signal(Roster::new);
    let mut toaster = use_toaster();

    // Fetch the collection once on mount.
    let _loader = use_resource(move || async move {
        match make_client().list().await {
            Ok(users) => roster.write().replace_all(users),
            Err(err) => {
                tracing::error!("error fetching users: {err}");
                notify_error(&mut toaster, err.user_message("Error fetching users."));
            }
        }
    });

    let handle_delete = move |id: String| {
        if !confirm_delete() {
            return;
        }
        spawn(async move {
            match make_client().delete(&id).await {
                Ok(()) => {
                    roster.write().confirm_delete(&id);
                    notify_success(&mut toaster, "User deleted successfully!");
                }
                Err(err) => {
                    tracing::error!("error deleting user {id}: {err}");
                    notify_error(&mut toaster, err.user_message("Error deleting user."));
                }
            }
        });
    };

    let handle_edit_submit = move |evt: FormEvent| {
        evt.prevent_default();
        // Never fire without an active editing slot.
        let Some(id) = roster().editing_id().map(str::to_string) else {
            return;
        };
        let draft = roster().edit_draft().clone();
        spawn(async move {
            match make_client().update(&id, &draft).await {
                Ok(patch) => {
                    {
                        let mut state = roster.write();
                        state.confirm_update(&id, patch);
                        state.cancel_edit();
                    }
                    notify_success(&mut toaster, "User updated successfully!");
                }
                Err(err) => {
                    tracing::error!("error updating user {id}: {err}");
                    notify_error(&mut toaster, err.user_message("Error updating user."));
                }
            }
        });
    };

    rsx! {
        div {
            class: "user-list",
            h2 { class: "user-list__title", "Users List" }
            if roster().is_empty() {
                p { class: "user-list__empty", "No users found." }
            } else {
                div {
                    class: "user-list__items",
                    for user in roster().users().to_vec() {
                        div {
                            key: "{user.id}",
                            class: "user-card",
                            if roster().is_editing(&user.id) {
                                form {
                                    class: "user-card__edit",
                                    onsubmit: handle_edit_submit,
                                    div {
                                        class: "user-card__field",
                                        label { class: "user-card__label", "Name" }
                                        input {
                                            class: "user-card__input",
                                            r#type: "text",
                                            name: "name",
                                            required: true,
                                            value: roster().edit_draft().name.clone(),
                                            oninput: move |evt: FormEvent| {
                                                roster.write().draft_mut().name = evt.value()
                                            },
                                        }
                                    }
                                    div {
                                        class: "user-card__field",
                                        label { class: "user-card__label", "Email" }
                                        input {
                                            class: "user-card__input",
                                            r#type: "email",
                                            name: "email",
                                            required: true,
                                            value: roster().edit_draft().email.clone(),
                                            oninput: move |evt: FormEvent| {
                                                roster.write().draft_mut().email = evt.value()
                                            },
                                        }
                                    }
                                    div {
                                        class: "user-card__field",
                                        label { class: "user-card__label", "Image URL" }
                                        input {
                                            class: "user-card__input",
                                            r#type: "text",
                                            name: "image_url",
                                            value: roster().edit_draft().image_url.clone(),
                                            oninput: move |evt: FormEvent| {
                                                roster.write().draft_mut().image_url = evt.value()
                                            },
                                        }
                                    }
                                    div {
                                        class: "user-card__field",
                                        label { class: "user-card__label", "Video URL" }
                                        input {
                                            class: "user-card__input",
                                            r#type: "text",
                                            name: "video_url",
                                            value: roster().edit_draft().video_url.clone(),
                                            oninput: move |evt: FormEvent| {
                                                roster.write().draft_mut().video_url = evt.value()
                                            },
                                        }
                                    }
                                    div {
                                        class: "user-card__buttons",
                                        button {
                                            class: "button button--cancel",
                                            r#type: "button",
                                            onclick: move |_| roster.write().cancel_edit(),
                                            "Cancel"
                                        }
                                        button {
                                            class: "button button--save",
                                            r#type: "submit",
                                            "Save"
                                        }
                                    }
                                }
                            } else {
                                UserCard {
                                    user: user.clone(),
                                    on_edit: move |record: User| roster.write().begin_edit(&record),
                                    on_delete: move |id: String| handle_delete(id),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Read view of a single record, with the edit and delete controls.
#[component]
fn UserCard(user: User, on_edit: EventHandler<User>, on_delete: EventHandler<String>) -> Element {
    let edit_user = user.clone();
    let delete_id = user.id.clone();

    rsx! {
        div {
            class: "user-card__read",
            if user.image_url.is_empty() {
                div {
                    class: "user-card__avatar user-card__avatar--empty",
                    span { "No Image" }
                }
            } else {
                img {
                    class: "user-card__avatar",
                    src: "{user.image_url}",
                    alt: "{user.name}",
                }
            }
            div {
                class: "user-card__details",
                h3 { class: "user-card__name", "{user.name}" }
                p { class: "user-card__email", "{user.email}" }
                if !user.video_url.is_empty() {
                    video {
                        class: "user-card__video",
                        src: "{user.video_url}",
                        controls: true,
                        autoplay: true,
                        muted: true,
                    }
                }
            }
            div {
                class: "user-card__buttons",
                button {
                    class: "button button--edit",
                    onclick: move |_| on_edit.call(edit_user.clone()),
                    "Edit"
                }
                button {
                    class: "button button--delete",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}

/// Destructive-action guard. On the web this is the browser confirm dialog;
/// elsewhere deletion proceeds unprompted.
fn confirm_delete() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| {
                window
                    .confirm_with_message("Are you sure you want to delete this user?")
                    .ok()
            })
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}
