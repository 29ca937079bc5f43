//! Error boundary components for rendering failures.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    div {
                        class: "card",
                        style: "max-width: 720px; margin: 40px auto; padding: 24px; background: white;",
                        h1 {
                            style: "color: #B91C1C; font-size: 28px; font-weight: 700;",
                            "Something went wrong"
                        }
                        p {
                            style: "color: #7F1D1D; font-size: 14px; margin-top: 8px;",
                            "Boundary: {boundary_name}"
                        }
                        Link {
                            to: Route::CategoryPage { q: String::new() },
                            class: "btn btn-primary",
                            style: "display: inline-block; margin-top: 16px;",
                            "Back to photographers"
                        }
                        pre {
                            style: "color: #374151; font-size: 12px; margin-top: 16px; text-wrap: auto; max-height: 300px; overflow-y: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            r#type: "button",
                            class: "btn btn-ghost",
                            onclick: move |_| err.clear_errors(),
                            "Try again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

/// Inline error card used by boundaries and by the listing's error state.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "card",
            role: "alert",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 12px;
                padding: 24px;
                background: #FEF2F2;
                border-color: #FECACA;
            ",
            p {
                style: "color: #B91C1C; font-size: 16px; font-weight: 600;",
                "{error_txt}"
            }
            {children}
        }
    }
}
