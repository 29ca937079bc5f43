use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            // rendered while any child resource is still pending
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    style: "display: flex; align-items: center; justify-content: center; padding: 48px 0;",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "skeleton",
            style: "color: #6B7280; font-size: 14px; padding: 10px 16px; border-radius: 12px;",
            "Loading…"
        }
    }
}
