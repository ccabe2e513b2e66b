//! This crate contains all shared UI for the workspace.

mod client;

mod toast;
pub use toast::{
    notify_error, notify_success, use_toaster, Toast, ToastLevel, ToastProvider, Toaster,
};

mod navbar;
pub use navbar::Navbar;

mod user_form;
pub use user_form::UserForm;

mod user_list;
pub use user_list::UserList;
