use dioxus::prelude::*;

use ui::{Navbar, ToastProvider};
use views::{Home, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/users")]
    Users {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            Router::<Route> {}
        }
    }
}

/// Shared shell: top navigation plus the routed view.
#[component]
fn AppLayout() -> Element {
    rsx! {
        Navbar {
            Link { class: "navbar__link", to: Route::Home {}, "New User" }
            Link { class: "navbar__link", to: Route::Users {}, "Users" }
        }
        Outlet::<Route> {}
    }
}
