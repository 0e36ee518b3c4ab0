use dioxus::prelude::*;

use crate::stores::ToastContext;

/// Renders the live toasts, oldest on top. Clicking one dismisses it.
#[component]
pub fn ToastHost() -> Element {
    let toasts = use_context::<ToastContext>();

    rsx! {
        div { class: "toast-host",
            for toast in toasts.list() {
                div {
                    key: "{toast.id}",
                    class: toast.kind.css_class(),
                    role: "status",
                    onclick: move |_| toasts.remove(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}
