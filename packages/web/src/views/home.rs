use dioxus::prelude::*;

use ui::UserForm;

/// The creation page: just the user form.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "page",
            UserForm {}
        }
    }
}
