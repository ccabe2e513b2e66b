use dioxus::prelude::*;

use ui::UserList;

/// The list page: every user, with inline edit and delete.
#[component]
pub fn Users() -> Element {
    rsx! {
        div {
            class: "page",
            UserList {}
        }
    }
}
