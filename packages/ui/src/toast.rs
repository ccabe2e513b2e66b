//! Transient toast notifications.
//!
//! The toaster is the sole user-visible channel for operation outcomes.
//! Components reach it through context ([`use_toaster`]) and the two
//! operations [`notify_success`] and [`notify_error`]; nothing else about the
//! widget leaks into the CRUD logic.

use std::time::Duration;

use dioxus::prelude::*;

/// How long a toast stays on screen before it dismisses itself.
const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast--success",
            ToastLevel::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// The stack of currently visible toasts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toaster {
    entries: Vec<Toast>,
    next_id: u64,
}

impl Toaster {
    pub fn push(&mut self, level: ToastLevel, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast { id, level, message });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

/// Get the toast stack from context.
pub fn use_toaster() -> Signal<Toaster> {
    use_context::<Signal<Toaster>>()
}

pub fn notify_success(toaster: &mut Signal<Toaster>, message: impl Into<String>) {
    push_toast(toaster, ToastLevel::Success, message.into());
}

pub fn notify_error(toaster: &mut Signal<Toaster>, message: impl Into<String>) {
    push_toast(toaster, ToastLevel::Error, message.into());
}

fn push_toast(toaster: &mut Signal<Toaster>, level: ToastLevel, message: String) {
    let id = toaster.write().push(level, message);
    let mut toaster = *toaster;
    spawn(async move {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(TOAST_LIFETIME).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(TOAST_LIFETIME).await;

        toaster.write().dismiss(id);
    });
}

/// Provider component that owns the toast stack.
/// Wrap the app with this component so every view can notify.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toaster = use_signal(Toaster::default);
    use_context_provider(|| toaster);

    rsx! {
        ToastHost {}
        {children}
    }
}

/// Fixed-position host rendering the stack. Clicking a toast dismisses it
/// early.
#[component]
fn ToastHost() -> Element {
    let mut toaster = use_toaster();
    let toasts = toaster().entries().to_vec();

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: toast.level.css_class(),
                    onclick: move |_| toaster.write().dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut toaster = Toaster::default();
        let a = toaster.push(ToastLevel::Success, "one".to_string());
        let b = toaster.push(ToastLevel::Error, "two".to_string());

        assert!(b > a);
        assert_eq!(toaster.entries().len(), 2);
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let mut toaster = Toaster::default();
        let a = toaster.push(ToastLevel::Success, "one".to_string());
        let b = toaster.push(ToastLevel::Error, "two".to_string());

        toaster.dismiss(a);

        assert_eq!(toaster.entries().len(), 1);
        assert_eq!(toaster.entries()[0].id, b);
    }
}
