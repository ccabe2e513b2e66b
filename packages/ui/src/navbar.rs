use dioxus::prelude::*;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        div {
            class: "navbar",
            span { class: "navbar__brand", "Roster" }
            {children}
        }
    }
}
